use std::collections::BTreeMap;

use async_trait::async_trait;
use models::ingredient::{self, IngredientCreate, IngredientUpdate};
use sea_orm::{Set, TryIntoModel};
use tokio::sync::RwLock;

use crate::errors::ServiceError;
use crate::ingredient::repository::IngredientRepository;
use crate::pagination::Page;

#[derive(Default)]
struct Table {
    rows: BTreeMap<i32, ingredient::Model>,
    last_id: i32,
}

/// Process-local store keyed by id.
///
/// Ids come from a counter that only grows, so a deleted id is never handed
/// out again, same as the SQL table.
#[derive(Default)]
pub struct InMemoryIngredientRepository {
    inner: RwLock<Table>,
}

impl InMemoryIngredientRepository {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl IngredientRepository for InMemoryIngredientRepository {
    async fn insert(&self, input: IngredientCreate) -> Result<ingredient::Model, ServiceError> {
        let mut table = self.inner.write().await;
        let id = table.last_id.checked_add(1).ok_or_else(|| ServiceError::Db("ingredient id space exhausted".into()))?;
        let mut am = input.into_active_model();
        am.id = Set(id);
        let model = am.try_into_model()?;
        table.last_id = id;
        table.rows.insert(id, model.clone());
        Ok(model)
    }

    async fn find(&self, id: i32) -> Result<Option<ingredient::Model>, ServiceError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn page(&self, page: Page) -> Result<Vec<ingredient::Model>, ServiceError> {
        let table = self.inner.read().await;
        let skip = usize::try_from(page.offset).unwrap_or(usize::MAX);
        let take = usize::try_from(page.limit).unwrap_or(usize::MAX);
        Ok(table.rows.values().skip(skip).take(take).cloned().collect())
    }

    async fn update(&self, id: i32, patch: IngredientUpdate) -> Result<Option<ingredient::Model>, ServiceError> {
        let mut table = self.inner.write().await;
        let Some(row) = table.rows.get_mut(&id) else { return Ok(None); };
        let mut am: ingredient::ActiveModel = row.clone().into();
        patch.apply(&mut am);
        *row = am.try_into_model()?;
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }
}
