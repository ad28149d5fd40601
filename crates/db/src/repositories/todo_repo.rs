//! Repository for the `todos` table.
//!
//! Every query is scoped by `user_id`; single-row lookups go through
//! [`find_owned`](crate::ownership::find_owned).

use sqlx::PgConnection;
use todo_core::todo::TodoChanges;
use todo_core::types::DbId;

use crate::models::todo::Todo;
use crate::ownership::OwnedEntity;

const COLUMNS: &str = Todo::COLUMNS;

/// Provides CRUD operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert a new open todo for `user_id`.
    pub async fn create(
        conn: &mut PgConnection,
        user_id: DbId,
        text: &str,
    ) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (text, user_id) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(text)
            .bind(user_id)
            .fetch_one(conn)
            .await
    }

    /// List every todo owned by `user_id`, oldest first.
    pub async fn list_for_user(
        conn: &mut PgConnection,
        user_id: DbId,
    ) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE user_id = $1 ORDER BY id");
        sqlx::query_as::<_, Todo>(&query)
            .bind(user_id)
            .fetch_all(conn)
            .await
    }

    /// Apply `changes` to a todo owned by `user_id`. Absent fields keep their value.
    ///
    /// Returns `None` if no such todo exists for this owner.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        user_id: DbId,
        changes: &TodoChanges,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!(
            "UPDATE todos SET \
                 text = COALESCE($3, text), \
                 done = COALESCE($4, done) \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .bind(user_id)
            .bind(changes.text.as_deref())
            .bind(changes.done)
            .fetch_optional(conn)
            .await
    }

    /// Delete a todo owned by `user_id`. Cascade deletes its category assignments.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(
        conn: &mut PgConnection,
        id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the todos assigned to a category, restricted to `user_id`'s todos.
    pub async fn list_for_category(
        conn: &mut PgConnection,
        category_id: DbId,
        user_id: DbId,
    ) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM todos \
             WHERE user_id = $2 \
               AND id IN (SELECT todo_id FROM todo_categories WHERE category_id = $1) \
             ORDER BY id"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(category_id)
            .bind(user_id)
            .fetch_all(conn)
            .await
    }
}
