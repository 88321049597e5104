//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::servant::create_servant_with_rarity;

/// Counter for generating unique IDs in tests.
///
/// Starts high enough to stay clear of collection numbers set explicitly by tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(10_000);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Inserts one servant per rarity in `rarities`.
///
/// Collection numbers are generated, so call order is the only ordering guarantee.
///
/// # Arguments
/// - `db` - Database connection
/// - `rarities` - Rarity tier of each servant to insert
///
/// # Returns
/// - `Ok(Vec<entity::servant::Model>)` - Inserted servants in insertion order
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let servants = create_catalog(&db, &[5, 4, 3, 2, 1]).await?;
/// ```
pub async fn create_catalog(
    db: &DatabaseConnection,
    rarities: &[i32],
) -> Result<Vec<entity::servant::Model>, DbErr> {
    let mut servants = Vec::with_capacity(rarities.len());
    for &rarity in rarities {
        servants.push(create_servant_with_rarity(db, rarity).await?);
    }
    Ok(servants)
}
