use sea_orm::entity::prelude::*;

/// A single row of the `servants` table.
///
/// Column names follow the camelCase naming of the catalog export the database is built from.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "servants")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "collectionNo")]
    pub collection_no: i32,
    #[sea_orm(column_name = "originalName")]
    pub original_name: String,
    pub name: String,
    pub rarity: i32,
    #[sea_orm(column_name = "className")]
    pub class_name: String,
    #[sea_orm(column_name = "atkMax")]
    pub atk_max: i32,
    #[sea_orm(column_name = "hpMax")]
    pub hp_max: i32,
    pub attribute: String,
    pub face: String,
    pub face_path: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
