use axum::http::HeaderValue;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://../database/sv_db.db?mode=rwc";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,https://fgo.aaanh.app";

/// Deployment posture of the server.
///
/// Release mode logs less and only accepts cross-origin requests from the configured
/// origins. Debug mode logs per-request detail and accepts any origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerMode {
    Debug,
    Release,
}

impl ServerMode {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value {
            "debug" => Ok(Self::Debug),
            "release" => Ok(Self::Release),
            other => Err(ConfigError::InvalidEnvVar {
                name: "SERVER_MODE".to_string(),
                value: other.to_string(),
                reason: "expected 'debug' or 'release'".to_string(),
            }),
        }
    }

    /// Default `tracing` filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(self) -> &'static str {
        match self {
            Self::Debug => "servant_gacha=debug,tower_http=debug",
            Self::Release => "servant_gacha=info,tower_http=info",
        }
    }
}

pub struct Config {
    pub server_mode: ServerMode,
    pub database_url: String,
    pub bind_address: String,
    /// Origins accepted by CORS in release mode.
    pub allowed_origins: Vec<HeaderValue>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Every variable is optional; unset variables fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_mode = match lookup("SERVER_MODE") {
            Some(value) => ServerMode::parse(&value)?,
            None => ServerMode::Debug,
        };

        let origins =
            lookup("ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string());
        let allowed_origins = origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                if origin == "*" {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "ALLOWED_ORIGINS".to_string(),
                        value: origin.to_string(),
                        reason: "wildcard origins are only allowed in debug mode".to_string(),
                    });
                }
                HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
                    name: "ALLOWED_ORIGINS".to_string(),
                    value: origin.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            server_mode,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            allowed_origins,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.server_mode, ServerMode::Debug);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.allowed_origins.len(), 2);
    }

    #[test]
    fn reads_release_mode_and_origins() {
        let config = config_from(&[
            ("SERVER_MODE", "release"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("ALLOWED_ORIGINS", "https://a.example, https://b.example,"),
        ])
        .unwrap();

        assert_eq!(config.server_mode, ServerMode::Release);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(
            config.allowed_origins,
            vec![
                HeaderValue::from_static("https://a.example"),
                HeaderValue::from_static("https://b.example"),
            ]
        );
    }

    #[test]
    fn rejects_wildcard_origin() {
        let result = config_from(&[("ALLOWED_ORIGINS", "https://a.example,*")]);

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }

    #[test]
    fn rejects_unknown_mode() {
        let result = config_from(&[("SERVER_MODE", "production")]);

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }
}
