use std::sync::Arc;

use models::ingredient::{self, IngredientCreate, IngredientUpdate};
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::ingredient::repository::IngredientRepository;
use crate::pagination::Page;

const ENTITY: &str = "Ingredient";

/// Application service for ingredients.
///
/// Stateless apart from the injected store; every call goes straight to the
/// repository and maps a missing row to [`ServiceError::NotFound`].
pub struct IngredientService<R: IngredientRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: IngredientRepository + ?Sized> IngredientService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: IngredientCreate) -> Result<ingredient::Model, ServiceError> {
        let created = self.repo.insert(input).await?;
        info!(id = created.id, "ingredient created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn list(&self, page: Page) -> Result<Vec<ingredient::Model>, ServiceError> {
        self.repo.page(page).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<ingredient::Model, ServiceError> {
        self.repo.find(id).await?.ok_or_else(|| ServiceError::not_found(ENTITY))
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i32, patch: IngredientUpdate) -> Result<ingredient::Model, ServiceError> {
        let updated = self.repo.update(id, patch).await?.ok_or_else(|| ServiceError::not_found(ENTITY))?;
        info!(id, "ingredient updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found(ENTITY));
        }
        info!(id, "ingredient deleted");
        Ok(())
    }
}
