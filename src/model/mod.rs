//! API data transfer objects.
//!
//! These types define the JSON shapes returned by the HTTP surface and are consumed by the
//! web front-end. Server-side domain models convert into them at the controller boundary.

pub mod api;
pub mod roll;
pub mod servant;
