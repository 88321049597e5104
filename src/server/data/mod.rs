//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models, keeping the
//! entity types at the infrastructure boundary.

pub mod servant;

#[cfg(test)]
mod test;
