//! Row models and DTOs, one module per table.

pub mod category;
pub mod todo;
pub mod user;
