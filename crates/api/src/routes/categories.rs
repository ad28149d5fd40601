//! Route definitions for categories and their todo assignments.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// ```text
/// POST   /category                            -> create_category
/// GET    /category/{cat_id}/todos             -> list_todos_for_category
/// POST   /todo/{id}/category/{cat_id}         -> add_category_to_todo
/// DELETE /todo/{id}/category/{cat_id}         -> remove_category_from_todo
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/category", post(categories::create_category))
        .route(
            "/category/{cat_id}/todos",
            get(categories::list_todos_for_category),
        )
        .route(
            "/todo/{id}/category/{cat_id}",
            post(categories::add_category_to_todo).delete(categories::remove_category_from_todo),
        )
}
