//! HTTP request handlers.
//!
//! Controllers extract request data, call the service layer and convert domain models to
//! DTOs. Each handler carries a `utoipa::path` annotation collected by the router's OpenAPI
//! document.

pub mod health;
pub mod roll;
pub mod servant;
pub mod stats;

#[cfg(test)]
mod test;
