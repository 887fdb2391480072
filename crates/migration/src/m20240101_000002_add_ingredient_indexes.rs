use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Lookup by name
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_ingredient_name")
                    .table(Ingredient::Table)
                    .col(Ingredient::Name)
                    .to_owned(),
            )
            .await?;

        // Filter by category
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_ingredient_category")
                    .table(Ingredient::Table)
                    .col(Ingredient::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_ingredient_name").table(Ingredient::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_ingredient_category").table(Ingredient::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Ingredient { Table, Name, Category }
