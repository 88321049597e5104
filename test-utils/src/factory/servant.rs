//! Servant factory for creating test servant rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::{
    factory::helpers::next_id,
    fixture::servant::{entity_builder, ServantEntityBuilder},
};

/// Factory for creating test servants with customizable fields.
///
/// Wraps the in-memory fixture builder and inserts the result on `build()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::servant::ServantFactory;
///
/// let servant = ServantFactory::new(&db)
///     .collection_no(2)
///     .name("Altria Pendragon")
///     .rarity(5)
///     .build()
///     .await?;
/// ```
pub struct ServantFactory<'a> {
    db: &'a DatabaseConnection,
    builder: ServantEntityBuilder,
}

impl<'a> ServantFactory<'a> {
    /// Creates a new ServantFactory with default values and a unique collection number.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ServantFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id() as i32;
        Self {
            db,
            builder: entity_builder().collection_no(id),
        }
    }

    /// Sets the collection number for the servant.
    pub fn collection_no(mut self, collection_no: i32) -> Self {
        self.builder = self.builder.collection_no(collection_no);
        self
    }

    /// Sets the display name for the servant.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.builder = self.builder.name(name);
        self
    }

    /// Sets the rarity tier for the servant.
    pub fn rarity(mut self, rarity: i32) -> Self {
        self.builder = self.builder.rarity(rarity);
        self
    }

    /// Sets the class name for the servant.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.builder = self.builder.class_name(class_name);
        self
    }

    /// Builds and inserts the servant entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::servant::Model)` - Created servant entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::servant::Model, DbErr> {
        let model = self.builder.build();
        entity::servant::ActiveModel {
            collection_no: ActiveValue::Set(model.collection_no),
            original_name: ActiveValue::Set(model.original_name),
            name: ActiveValue::Set(model.name),
            rarity: ActiveValue::Set(model.rarity),
            class_name: ActiveValue::Set(model.class_name),
            atk_max: ActiveValue::Set(model.atk_max),
            hp_max: ActiveValue::Set(model.hp_max),
            attribute: ActiveValue::Set(model.attribute),
            face: ActiveValue::Set(model.face),
            face_path: ActiveValue::Set(model.face_path),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a servant with default values.
///
/// Shorthand for `ServantFactory::new(db).build().await`.
pub async fn create_servant(db: &DatabaseConnection) -> Result<entity::servant::Model, DbErr> {
    ServantFactory::new(db).build().await
}

/// Creates a servant with a specific rarity tier.
///
/// Shorthand for `ServantFactory::new(db).rarity(rarity).build().await`.
pub async fn create_servant_with_rarity(
    db: &DatabaseConnection,
    rarity: i32,
) -> Result<entity::servant::Model, DbErr> {
    ServantFactory::new(db).rarity(rarity).build().await
}
