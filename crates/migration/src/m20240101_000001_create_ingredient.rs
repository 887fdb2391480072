//! Create `ingredient` table.
//! The primary key is auto-increment so deleted ids are never handed out again.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ingredient::Table)
                    .if_not_exists()
                    .col(pk_auto(Ingredient::Id))
                    .col(string(Ingredient::Name))
                    .col(string(Ingredient::Category))
                    .col(integer(Ingredient::Quantity))
                    .col(string_null(Ingredient::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Ingredient::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Ingredient {
    Table,
    Id,
    Name,
    Category,
    Quantity,
    Description,
}
