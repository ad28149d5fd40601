//! Domain types and rules for the todo service.
//!
//! Nothing in this crate touches the database or HTTP; it is shared by
//! `todo-db` and `todo-api`.

pub mod error;
pub mod todo;
pub mod types;
