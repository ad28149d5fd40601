//! Category entity model and request DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todo_core::types::DbId;

use crate::ownership::OwnedEntity;

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub text: String,
    pub user_id: DbId,
}

impl OwnedEntity for Category {
    const ENTITY: &'static str = "Category";
    const TABLE: &'static str = "categories";
    const COLUMNS: &'static str = "id, text, user_id";
}

/// Query parameters for `POST /category`.
///
/// `cat_text` is accepted as an alias for older clients.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    #[serde(alias = "cat_text")]
    pub text: String,
}
