//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures build in-memory entity models for unit tests of the catalog and draw engine
//! and provide the default values used by the factories. Unlike factories, fixtures do NOT
//! insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let servant = fixture::servant::entity();
//!
//! let ssr = fixture::servant::entity_builder()
//!     .collection_no(2)
//!     .rarity(5)
//!     .build();
//! ```

pub mod servant;
