use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Catalog databases are usually shipped pre-populated, so an existing table is kept as is.
        manager
            .create_table(
                Table::create()
                    .table(Servants::Table)
                    .if_not_exists()
                    .col(integer(Servants::CollectionNo).primary_key())
                    .col(string(Servants::OriginalName))
                    .col(string(Servants::Name))
                    .col(integer(Servants::Rarity))
                    .col(string(Servants::ClassName))
                    .col(integer(Servants::AtkMax))
                    .col(integer(Servants::HpMax))
                    .col(string(Servants::Attribute))
                    .col(string(Servants::Face))
                    .col(string(Servants::FacePath))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Servants::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Servants {
    Table,
    #[sea_orm(iden = "collectionNo")]
    CollectionNo,
    #[sea_orm(iden = "originalName")]
    OriginalName,
    Name,
    Rarity,
    #[sea_orm(iden = "className")]
    ClassName,
    #[sea_orm(iden = "atkMax")]
    AtkMax,
    #[sea_orm(iden = "hpMax")]
    HpMax,
    Attribute,
    Face,
    FacePath,
}
