//! Storage-facing types for the pantry service: the `ingredient` entity,
//! its transport shapes and the database connection helper.
pub mod db;
pub mod ingredient;

#[cfg(test)]
mod tests;
