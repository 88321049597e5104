//! Factory methods for creating test data.
//!
//! Factories insert servant rows with sensible defaults, reducing boilerplate in repository
//! and controller tests. Each factory offers a `Factory` struct for customization and
//! `create_*` convenience functions for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let servant = factory::create_servant(&db).await?;
//! let ssr = factory::create_servant_with_rarity(&db, 5).await?;
//!
//! let custom = factory::servant::ServantFactory::new(&db)
//!     .collection_no(2)
//!     .name("Altria Pendragon")
//!     .rarity(5)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod servant;

pub use helpers::create_catalog;
pub use servant::{create_servant, create_servant_with_rarity};
