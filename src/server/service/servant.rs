//! Servant service for catalog listing and lookups.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::servant::ServantRepository,
    error::AppError,
    model::{catalog::Catalog, servant::Servant},
};

/// Service providing read access to servant records.
///
/// Listing and counting are answered from the in-memory catalog. Lookups by collection
/// number query the database.
pub struct ServantService<'a> {
    db: &'a DatabaseConnection,
    catalog: &'a Catalog,
}

impl<'a> ServantService<'a> {
    /// Creates a new ServantService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `catalog` - Catalog loaded at startup
    pub fn new(db: &'a DatabaseConnection, catalog: &'a Catalog) -> Self {
        Self { db, catalog }
    }

    /// Lists every servant in the catalog, in load order.
    pub fn list(&self) -> Vec<Servant> {
        self.catalog.servants().to_vec()
    }

    /// Number of servants in the catalog.
    pub fn total(&self) -> usize {
        self.catalog.len()
    }

    /// Retrieves a servant by collection number.
    ///
    /// # Arguments
    /// - `collection_no` - Collection number of the servant
    ///
    /// # Returns
    /// - `Ok(Servant)` - Servant found
    /// - `Err(AppError::NotFound)` - No servant with that collection number
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_collection_no(&self, collection_no: i32) -> Result<Servant, AppError> {
        ServantRepository::new(self.db)
            .find_by_collection_no(collection_no)
            .await?
            .ok_or_else(|| AppError::NotFound("Servant not found".to_string()))
    }
}

/// Loads every servant from the database into a catalog.
///
/// Logs the size of each draw pool and warns about empty pools, since draws targeting them
/// will fail for the lifetime of the process.
///
/// # Arguments
/// - `db` - Reference to the database connection
///
/// # Returns
/// - `Ok(Catalog)` - Catalog of every servant ordered by collection number
/// - `Err(AppError::DbErr)` - Database error while loading servants
pub async fn load_catalog(db: &DatabaseConnection) -> Result<Catalog, AppError> {
    use crate::server::model::pool::Pool;

    let servants = ServantRepository::new(db).get_all().await?;
    let catalog = Catalog::new(servants);

    if catalog.is_empty() {
        tracing::warn!("Servant table is empty; every draw will fail");
    } else {
        tracing::info!("Loaded {} servants into the catalog", catalog.len());
    }
    for pool in Pool::ALL {
        let size = catalog.pool_len(pool);
        if size == 0 {
            tracing::warn!("Draw pool {} is empty; draws from it will fail", pool);
        } else {
            tracing::debug!("Draw pool {} holds {} servants", pool, size);
        }
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use test_utils::{builder::TestBuilder, factory};

    use super::*;

    /// Tests loading the catalog from the database.
    ///
    /// Expected: every inserted servant present, partitioned by pool
    #[tokio::test]
    async fn loads_catalog_from_database() -> Result<(), AppError> {
        use crate::server::model::pool::{Band, Pool};

        let test = TestBuilder::new().with_servant_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::create_catalog(db, &[5, 4, 4, 3, 1]).await?;

        let catalog = load_catalog(db).await?;

        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.pool_len(Pool::Band(Band::FiveStar)), 1);
        assert_eq!(catalog.pool_len(Pool::Band(Band::FourStar)), 2);
        assert_eq!(catalog.pool_len(Pool::Band(Band::ThreeStarOrBelow)), 2);
        assert_eq!(catalog.pool_len(Pool::Guaranteed), 3);

        Ok(())
    }

    /// Tests lookups by collection number.
    ///
    /// Expected: Ok for an existing servant, Err(NotFound) otherwise
    #[tokio::test]
    async fn looks_up_servant_by_collection_no() -> Result<(), AppError> {
        let test = TestBuilder::new().with_servant_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let created = factory::create_servant_with_rarity(db, 5).await?;
        let catalog = load_catalog(db).await?;
        let service = ServantService::new(db, &catalog);

        let servant = service.get_by_collection_no(created.collection_no).await?;
        assert_eq!(servant.collection_no, created.collection_no);
        assert_eq!(service.total(), 1);
        assert_eq!(service.list(), vec![servant]);

        let missing = service.get_by_collection_no(-1).await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));

        Ok(())
    }
}
