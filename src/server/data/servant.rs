//! Servant data repository for database operations.
//!
//! The servant table is read-only from the application's point of view: it is loaded in
//! full once at startup to build the catalog and queried by key for lookups.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::servant::Servant;

/// Repository providing read operations for servant records.
pub struct ServantRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServantRepository<'a> {
    /// Creates a new ServantRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ServantRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every servant ordered by collection number.
    ///
    /// # Returns
    /// - `Ok(Vec<Servant>)` - All servants (empty if the table is empty)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Servant>, DbErr> {
        let entities = entity::prelude::Servant::find()
            .order_by_asc(entity::servant::Column::CollectionNo)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Servant::from_entity).collect())
    }

    /// Finds a servant by collection number.
    ///
    /// # Arguments
    /// - `collection_no` - Collection number of the servant
    ///
    /// # Returns
    /// - `Ok(Some(Servant))` - Servant found
    /// - `Ok(None)` - No servant with that collection number
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_collection_no(
        &self,
        collection_no: i32,
    ) -> Result<Option<Servant>, DbErr> {
        let entity = entity::prelude::Servant::find_by_id(collection_no)
            .one(self.db)
            .await?;

        Ok(entity.map(Servant::from_entity))
    }
}
