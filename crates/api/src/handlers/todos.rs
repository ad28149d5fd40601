//! Handlers for the `/todos` and `/todo/{id}` resources.
//!
//! Every handler is scoped to the calling [`AuthUser`]. A todo owned by
//! another user is reported as `404`, exactly like a missing one.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use todo_core::error::CoreError;
use todo_core::todo::{validate_todo_text, TodoChanges};
use todo_core::types::DbId;
use todo_db::models::todo::{CreateTodo, Todo, UpdateTodo};
use todo_db::ownership::OwnedEntity;
use todo_db::repositories::TodoRepo;

use crate::error::{write_failure, AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::uow::UnitOfWork;

/// GET /todos
///
/// List all todos owned by the caller.
pub async fn list_todos(auth: AuthUser, mut uow: UnitOfWork) -> AppResult<Json<Vec<Todo>>> {
    // Read-only; the transaction rolls back on drop.
    let todos = TodoRepo::list_for_user(uow.conn(), auth.user_id).await?;
    Ok(Json(todos))
}

/// GET /todo/{id}
pub async fn get_todo(
    auth: AuthUser,
    mut uow: UnitOfWork,
    Path(todo_id): Path<DbId>,
) -> AppResult<Json<Todo>> {
    let todo = uow.require_owned::<Todo>(todo_id, auth.user_id).await?;
    Ok(Json(todo))
}

/// POST /todos
///
/// Create an open todo owned by the caller.
pub async fn create_todo(
    auth: AuthUser,
    mut uow: UnitOfWork,
    Json(input): Json<CreateTodo>,
) -> AppResult<Json<Todo>> {
    validate_todo_text(&input.text).map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let todo = TodoRepo::create(uow.conn(), auth.user_id, &input.text)
        .await
        .map_err(write_failure("creating an item"))?;
    uow.commit("creating an item").await?;

    tracing::info!(todo_id = todo.id, user_id = auth.user_id, "Todo created");

    Ok(Json(todo))
}

/// PUT /todo/{id}
///
/// Apply the supplied fields. A blank `text` is ignored; `done` applies
/// whenever it is present, including `false`.
pub async fn update_todo(
    auth: AuthUser,
    mut uow: UnitOfWork,
    Path(todo_id): Path<DbId>,
    Json(input): Json<UpdateTodo>,
) -> AppResult<Json<Todo>> {
    let existing = uow.require_owned::<Todo>(todo_id, auth.user_id).await?;

    let changes = TodoChanges::resolve(input.text, input.done);
    if changes.is_empty() {
        return Ok(Json(existing));
    }

    let todo = TodoRepo::update(uow.conn(), todo_id, auth.user_id, &changes)
        .await
        .map_err(write_failure("updating an item"))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: Todo::ENTITY,
            id: todo_id,
        }))?;
    uow.commit("updating an item").await?;

    tracing::info!(todo_id, user_id = auth.user_id, done = todo.done, "Todo updated");

    Ok(Json(todo))
}

/// DELETE /todo/{id}
///
/// Hard-delete a todo. Its category assignments cascade.
///
/// The owner-scoped DELETE doubles as the ownership lookup, so a row that
/// is missing, foreign, or removed concurrently all report 404.
pub async fn delete_todo(
    auth: AuthUser,
    mut uow: UnitOfWork,
    Path(todo_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TodoRepo::delete(uow.conn(), todo_id, auth.user_id)
        .await
        .map_err(write_failure("deleting an item"))?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: Todo::ENTITY,
            id: todo_id,
        }));
    }
    uow.commit("deleting an item").await?;

    tracing::info!(todo_id, user_id = auth.user_id, "Todo deleted");

    Ok(StatusCode::OK)
}
