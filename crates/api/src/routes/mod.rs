pub mod auth;
pub mod categories;
pub mod health;
pub mod todos;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                          register (public)
/// /auth/login                             login (public)
///
/// /todos                                  list, create
/// /todo/{id}                              get, update, delete
///
/// /category                               create
/// /category/{cat_id}/todos                todos in category
/// /todo/{id}/category/{cat_id}            assign, unassign
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (register, login).
        .nest("/auth", auth::router())
        // Todo CRUD.
        .merge(todos::router())
        // Categories and todo-category assignments.
        .merge(categories::router())
}
