use async_trait::async_trait;
use models::ingredient::{self, Entity as IngredientEntity, IngredientCreate, IngredientUpdate};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, TransactionTrait};

use crate::errors::ServiceError;
use crate::pagination::Page;

/// Record store for ingredients.
///
/// Absence is reported as `None`/`false`; turning it into an error is the
/// service's job.
#[async_trait]
pub trait IngredientRepository: Send + Sync {
    async fn insert(&self, input: IngredientCreate) -> Result<ingredient::Model, ServiceError>;
    async fn find(&self, id: i32) -> Result<Option<ingredient::Model>, ServiceError>;
    /// Rows in insertion order, windowed by `page`.
    async fn page(&self, page: Page) -> Result<Vec<ingredient::Model>, ServiceError>;
    async fn update(&self, id: i32, patch: IngredientUpdate) -> Result<Option<ingredient::Model>, ServiceError>;
    /// Returns true if a row was removed.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmIngredientRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmIngredientRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl IngredientRepository for SeaOrmIngredientRepository {
    async fn insert(&self, input: IngredientCreate) -> Result<ingredient::Model, ServiceError> {
        let created = input.into_active_model().insert(&self.db).await?;
        Ok(created)
    }

    async fn find(&self, id: i32) -> Result<Option<ingredient::Model>, ServiceError> {
        let found = IngredientEntity::find_by_id(id).one(&self.db).await?;
        Ok(found)
    }

    async fn page(&self, page: Page) -> Result<Vec<ingredient::Model>, ServiceError> {
        let rows = IngredientEntity::find()
            .order_by_asc(ingredient::Column::Id)
            .offset(page.offset)
            .limit(page.limit)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn update(&self, id: i32, patch: IngredientUpdate) -> Result<Option<ingredient::Model>, ServiceError> {
        // Dropping `txn` without commit rolls back, so every early return releases it.
        let txn = self.db.begin().await?;
        let Some(existing) = IngredientEntity::find_by_id(id).one(&txn).await? else { return Ok(None); };
        if patch.is_empty() {
            return Ok(Some(existing));
        }
        let mut am: ingredient::ActiveModel = existing.into();
        patch.apply(&mut am);
        let updated = am.update(&txn).await?;
        txn.commit().await?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = IngredientEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    async fn repo() -> anyhow::Result<SeaOrmIngredientRepository> {
        Ok(SeaOrmIngredientRepository::new(get_db().await?))
    }

    #[tokio::test]
    async fn page_windows_in_insertion_order() -> anyhow::Result<()> {
        let repo = repo().await?;
        for name in ["a", "b", "c", "d"] {
            repo.insert(IngredientCreate::named(name)).await?;
        }

        let names = |rows: Vec<ingredient::Model>| rows.into_iter().map(|m| m.name).collect::<Vec<_>>();
        assert_eq!(names(repo.page(Page::default()).await?), ["a", "b", "c", "d"]);
        assert_eq!(names(repo.page(Page::new(Some(1), Some(2))).await?), ["b", "c"]);
        assert!(repo.page(Page::new(Some(4), None)).await?.is_empty());
        assert!(repo.page(Page::new(None, Some(0))).await?.is_empty());
        assert!(repo.page(Page::new(Some(u64::MAX), None)).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn page_returns_at_most_max_limit() -> anyhow::Result<()> {
        let repo = repo().await?;
        for i in 0..105 {
            repo.insert(IngredientCreate::named(format!("item-{i}"))).await?;
        }
        let rows = repo.page(Page::new(None, Some(500))).await?;
        assert_eq!(rows.len(), 100);
        assert_eq!(rows[0].name, "item-0");
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_row_is_none() -> anyhow::Result<()> {
        let repo = repo().await?;
        let patch = IngredientUpdate { name: Some("x".into()), ..Default::default() };
        assert!(repo.update(42, patch).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn empty_patch_returns_row_unchanged() -> anyhow::Result<()> {
        let repo = repo().await?;
        let created = repo.insert(IngredientCreate::named("Salt")).await?;
        let same = repo.update(created.id, IngredientUpdate::default()).await?;
        assert_eq!(same, Some(created));
        Ok(())
    }

    #[tokio::test]
    async fn update_persists_present_fields_only() -> anyhow::Result<()> {
        let repo = repo().await?;
        let created = repo
            .insert(IngredientCreate {
                name: "Old Name".into(),
                category: "Old Cat".into(),
                quantity: 1,
                description: Some("keep me".into()),
            })
            .await?;
        let patch = IngredientUpdate { name: Some("New Name".into()), quantity: Some(5), ..Default::default() };
        repo.update(created.id, patch).await?;

        let found = repo.find(created.id).await?.expect("row exists");
        assert_eq!(found.name, "New Name");
        assert_eq!(found.quantity, 5);
        assert_eq!(found.category, "Old Cat");
        assert_eq!(found.description.as_deref(), Some("keep me"));
        Ok(())
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_existed() -> anyhow::Result<()> {
        let repo = repo().await?;
        let created = repo.insert(IngredientCreate::named("Gone")).await?;
        assert!(repo.delete(created.id).await?);
        assert!(!repo.delete(created.id).await?);
        assert!(repo.find(created.id).await?.is_none());
        Ok(())
    }
}
