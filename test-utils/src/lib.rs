//! Servant Gacha Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the servant
//! gacha server. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, factories that insert servant rows, and fixtures that build servant models
//! without touching a database.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Inserts servant rows with sensible defaults
//! - **fixture**: Builds servant entity models in memory
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_servant_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_servant_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     factory::servant::create_servant_with_rarity(db, 5).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
