//! SeaORM entity definitions for the servant catalog database.

pub mod prelude;

pub mod servant;
