//! Service layer for ingredients.
//! - `ingredient::repository` is the record store seam (SeaORM and in-memory).
//! - `ingredient::service` turns store absence into `ServiceError::NotFound`.

pub mod errors;
pub mod pagination;
pub mod ingredient;
#[cfg(test)]
pub mod test_support;
