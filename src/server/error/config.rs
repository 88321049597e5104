use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set to a value the application cannot use.
    ///
    /// Check the documentation or `.env.example` file for the accepted values.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the environment variable
        name: String,
        /// The rejected value
        value: String,
        /// What the variable accepts
        reason: String,
    },
}
