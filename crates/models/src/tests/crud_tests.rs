use crate::db::connect_in_memory;
use crate::ingredient::{self, IngredientCreate, IngredientUpdate};
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::test]
async fn test_ingredient_crud() -> Result<()> {
    let db = setup_test_db().await?;

    // Create
    let created = IngredientCreate::named("Test Bun").into_active_model().insert(&db).await?;
    assert!(created.id > 0);
    assert_eq!(created.category, ingredient::DEFAULT_CATEGORY);
    assert_eq!(created.quantity, 0);

    // Read
    let found = ingredient::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.as_ref(), Some(&created));

    // Find by indexed column
    let by_name = ingredient::Entity::find()
        .filter(ingredient::Column::Name.eq("Test Bun"))
        .one(&db)
        .await?;
    assert_eq!(by_name.map(|m| m.id), Some(created.id));

    // Partial update
    let mut am: ingredient::ActiveModel = created.clone().into();
    IngredientUpdate { quantity: Some(5), ..Default::default() }.apply(&mut am);
    let updated = am.update(&db).await?;
    assert_eq!(updated.quantity, 5);
    assert_eq!(updated.name, "Test Bun");

    // Delete
    let res = ingredient::Entity::delete_by_id(created.id).exec(&db).await?;
    assert_eq!(res.rows_affected, 1);
    assert!(ingredient::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_migrations_are_idempotent() -> Result<()> {
    let db = setup_test_db().await?;
    migration::Migrator::up(&db, None).await?;
    let row = IngredientCreate::named("Pepper").into_active_model().insert(&db).await?;
    assert_eq!(row.name, "Pepper");
    Ok(())
}

#[tokio::test]
async fn test_deleted_ids_are_not_reused() -> Result<()> {
    let db = setup_test_db().await?;

    let first = IngredientCreate::named("a").into_active_model().insert(&db).await?;
    let second = IngredientCreate::named("b").into_active_model().insert(&db).await?;
    ingredient::Entity::delete_by_id(second.id).exec(&db).await?;

    let third = IngredientCreate::named("c").into_active_model().insert(&db).await?;
    assert!(third.id > second.id);
    assert!(second.id > first.id);
    Ok(())
}
