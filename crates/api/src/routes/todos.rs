//! Route definitions for todos.

use axum::routing::get;
use axum::Router;

use crate::handlers::todos;
use crate::state::AppState;

/// ```text
/// GET    /todos      -> list_todos
/// POST   /todos      -> create_todo
/// GET    /todo/{id}  -> get_todo
/// PUT    /todo/{id}  -> update_todo
/// DELETE /todo/{id}  -> delete_todo
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/todos", get(todos::list_todos).post(todos::create_todo))
        .route(
            "/todo/{id}",
            get(todos::get_todo)
                .put(todos::update_todo)
                .delete(todos::delete_todo),
        )
}
