use thiserror::Error;

use crate::server::model::pool::Pool;

/// Failures of the draw engine.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawError {
    /// The pool selected for a draw contains no servants.
    ///
    /// The catalog is immutable after startup, so the same draw fails again on retry.
    #[error("Catalog exhausted for pool {pool}: no servants to draw from")]
    CatalogExhausted {
        /// The empty pool the draw targeted
        pool: Pool,
    },
}
