//! Owner-scoped lookup shared by every user-owned table.
//!
//! Existence and ownership are checked in one predicate, so a row owned by
//! someone else is indistinguishable from a row that does not exist.

use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgConnection};
use todo_core::types::DbId;

/// A table whose rows carry a `user_id` owner column.
pub trait OwnedEntity: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    /// Name reported in not-found errors (e.g. `"Todo"`).
    const ENTITY: &'static str;
    /// Backing table name.
    const TABLE: &'static str;
    /// Column list selected into the row struct.
    const COLUMNS: &'static str;
}

/// Fetch the row with `id` only if it belongs to `user_id`.
pub async fn find_owned<T: OwnedEntity>(
    conn: &mut PgConnection,
    id: DbId,
    user_id: DbId,
) -> Result<Option<T>, sqlx::Error> {
    let query = format!(
        "SELECT {} FROM {} WHERE id = $1 AND user_id = $2",
        T::COLUMNS,
        T::TABLE
    );
    sqlx::query_as::<_, T>(&query)
        .bind(id)
        .bind(user_id)
        .fetch_optional(conn)
        .await
}
