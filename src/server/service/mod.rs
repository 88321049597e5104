//! Service layer for business logic.
//!
//! Services sit between the controller (API) layer and the data (repository) layer and work
//! with domain models rather than DTOs or entity models.
//!
//! - `roll` - The draw engine: single and multi rolls against the catalog
//! - `servant` - Catalog listing and servant lookup

pub mod roll;
pub mod servant;
