use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::ingredient::{IngredientRepository, IngredientService, SeaOrmIngredientRepository};

/// Shared handler state. Cloning only bumps reference counts.
#[derive(Clone)]
pub struct ServerState {
    pub ingredients: Arc<IngredientService<dyn IngredientRepository>>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn IngredientRepository>) -> Self {
        Self { ingredients: Arc::new(IngredientService::new(repo)) }
    }

    /// State backed by the SQL store on `db`.
    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmIngredientRepository::new(db)))
    }
}
