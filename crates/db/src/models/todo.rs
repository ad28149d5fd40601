//! Todo entity model and request DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todo_core::types::DbId;

use crate::ownership::OwnedEntity;

/// A row from the `todos` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub text: String,
    pub done: bool,
    pub user_id: DbId,
}

impl OwnedEntity for Todo {
    const ENTITY: &'static str = "Todo";
    const TABLE: &'static str = "todos";
    const COLUMNS: &'static str = "id, text, done, user_id";
}

/// Request body for `POST /todos`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    pub text: String,
}

/// Request body for `PUT /todo/{id}`. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodo {
    pub text: Option<String>,
    pub done: Option<bool>,
}
