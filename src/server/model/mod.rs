//! Server-side domain models.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. The catalog and its draw pools live
//! here as well since the draw engine works purely on these types.

pub mod catalog;
pub mod pool;
pub mod servant;
