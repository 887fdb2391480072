//! Migrator for the `ingredient` table.
//! Indexes are applied after the table exists.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_ingredient;
mod m20240101_000002_add_ingredient_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_ingredient::Migration),
            Box::new(m20240101_000002_add_ingredient_indexes::Migration),
        ]
    }
}
