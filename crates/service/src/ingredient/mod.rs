pub mod memory;
pub mod repository;
pub mod service;

pub use memory::InMemoryIngredientRepository;
pub use repository::{IngredientRepository, SeaOrmIngredientRepository};
pub use service::IngredientService;
