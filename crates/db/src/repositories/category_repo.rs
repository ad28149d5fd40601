//! Repository for the `categories` and `todo_categories` tables.

use sqlx::PgConnection;
use todo_core::types::DbId;

use crate::models::category::Category;
use crate::ownership::OwnedEntity;

const COLUMNS: &str = Category::COLUMNS;

/// Provides category creation and todo-category assignments.
///
/// Assignment methods do not check ownership; callers look up both ends
/// with [`find_owned`](crate::ownership::find_owned) first.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category for `user_id`.
    pub async fn create(
        conn: &mut PgConnection,
        user_id: DbId,
        text: &str,
    ) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (text, user_id) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(text)
            .bind(user_id)
            .fetch_one(conn)
            .await
    }

    /// Assign a category to a todo.
    ///
    /// Returns `false` without changing anything if the pair already exists.
    pub async fn assign(
        conn: &mut PgConnection,
        todo_id: DbId,
        category_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO todo_categories (todo_id, category_id) \
             VALUES ($1, $2) \
             ON CONFLICT (todo_id, category_id) DO NOTHING",
        )
        .bind(todo_id)
        .bind(category_id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove a category from a todo.
    ///
    /// Returns `false` if the pair was not assigned.
    pub async fn unassign(
        conn: &mut PgConnection,
        todo_id: DbId,
        category_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM todo_categories WHERE todo_id = $1 AND category_id = $2",
        )
        .bind(todo_id)
        .bind(category_id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
