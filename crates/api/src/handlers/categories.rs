//! Handlers for categories and todo-category assignments.
//!
//! Both ends of an assignment are looked up scoped to the caller before
//! anything is written, so a todo can only be tagged with the same user's
//! categories.

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use todo_core::error::CoreError;
use todo_core::types::DbId;
use todo_db::models::category::{Category, CreateCategory};
use todo_db::models::todo::Todo;
use todo_db::repositories::{CategoryRepo, TodoRepo};

use crate::error::{write_failure, AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::uow::UnitOfWork;

/// POST /category?text=...
pub async fn create_category(
    auth: AuthUser,
    mut uow: UnitOfWork,
    Query(input): Query<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let category = CategoryRepo::create(uow.conn(), auth.user_id, &input.text)
        .await
        .map_err(write_failure("creating a category"))?;
    uow.commit("creating a category").await?;

    tracing::info!(
        category_id = category.id,
        user_id = auth.user_id,
        "Category created"
    );

    Ok((StatusCode::CREATED, Json(category)))
}

/// POST /todo/{todo_id}/category/{cat_id}
///
/// Fails with `409` if the category is already assigned.
pub async fn add_category_to_todo(
    auth: AuthUser,
    mut uow: UnitOfWork,
    Path((todo_id, category_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    uow.require_owned::<Todo>(todo_id, auth.user_id).await?;
    uow.require_owned::<Category>(category_id, auth.user_id).await?;

    let assigned = CategoryRepo::assign(uow.conn(), todo_id, category_id)
        .await
        .map_err(write_failure("assigning a category"))?;
    if !assigned {
        return Err(AppError::Core(CoreError::Conflict(
            "Category already assigned".into(),
        )));
    }
    uow.commit("assigning a category").await?;

    tracing::info!(todo_id, category_id, user_id = auth.user_id, "Category added to todo");

    Ok(Json(MessageResponse::new("Category added to todo")))
}

/// DELETE /todo/{todo_id}/category/{cat_id}
///
/// Fails with `409` if the category is not assigned.
pub async fn remove_category_from_todo(
    auth: AuthUser,
    mut uow: UnitOfWork,
    Path((todo_id, category_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    uow.require_owned::<Todo>(todo_id, auth.user_id).await?;
    uow.require_owned::<Category>(category_id, auth.user_id).await?;

    let removed = CategoryRepo::unassign(uow.conn(), todo_id, category_id)
        .await
        .map_err(write_failure("removing a category"))?;
    if !removed {
        return Err(AppError::Core(CoreError::Conflict(
            "Category not assigned".into(),
        )));
    }
    uow.commit("removing a category").await?;

    tracing::info!(
        todo_id,
        category_id,
        user_id = auth.user_id,
        "Category removed from todo"
    );

    Ok(Json(MessageResponse::new("Category removed from todo")))
}

/// GET /category/{cat_id}/todos
pub async fn list_todos_for_category(
    auth: AuthUser,
    mut uow: UnitOfWork,
    Path(category_id): Path<DbId>,
) -> AppResult<Json<Vec<Todo>>> {
    uow.require_owned::<Category>(category_id, auth.user_id).await?;

    let todos = TodoRepo::list_for_category(uow.conn(), category_id, auth.user_id).await?;
    Ok(Json(todos))
}
