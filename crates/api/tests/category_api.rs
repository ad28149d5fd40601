//! HTTP-level integration tests for categories and todo-category assignments.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, call, create_user_with_token, send};
use serde_json::json;
use sqlx::PgPool;

async fn create_todo(app: &axum::Router, token: &str, text: &str) -> i64 {
    let response = send(
        app,
        Method::POST,
        "/todos",
        Some(token),
        Some(json!({ "text": text })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["id"].as_i64().unwrap()
}

async fn create_category(app: &axum::Router, token: &str, text: &str) -> i64 {
    let response = call(app, Method::POST, &format!("/category?text={text}"), token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

async fn assignment_count(pool: &PgPool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM todo_categories")
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

// ---------------------------------------------------------------------------
// Category creation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_category_returns_201(pool: PgPool) {
    let (user, token) = create_user_with_token(&pool, "alice").await;
    let app = common::build_test_app(pool);

    let response = call(&app, Method::POST, "/category?text=work", &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["text"], "work");
    assert_eq!(json["user_id"], user.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_category_accepts_cat_text_alias(pool: PgPool) {
    let (_user, token) = create_user_with_token(&pool, "alice").await;
    let app = common::build_test_app(pool);

    let response = call(&app, Method::POST, "/category?cat_text=home", &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["text"], "home");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rejected_category_insert_returns_503(pool: PgPool) {
    let (_user, token) = create_user_with_token(&pool, "alice").await;
    let app = common::build_test_app(pool.clone());

    // `%00` decodes to a NUL byte, which PostgreSQL refuses in TEXT columns.
    let response = call(&app, Method::POST, "/category?text=a%00b", &token).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["code"], "SERVICE_UNAVAILABLE");
    assert_eq!(json["error"], "An error occurred while creating a category");

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

// ---------------------------------------------------------------------------
// Assignments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_assign_twice_conflicts(pool: PgPool) {
    let (_user, token) = create_user_with_token(&pool, "alice").await;
    let app = common::build_test_app(pool.clone());
    let todo_id = create_todo(&app, &token, "write report").await;
    let cat_id = create_category(&app, &token, "work").await;
    let uri = format!("/todo/{todo_id}/category/{cat_id}");

    let response = call(&app, Method::POST, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Category added to todo");
    assert_eq!(assignment_count(&pool).await, 1);

    let response = call(&app, Method::POST, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["error"], "Category already assigned");
    assert_eq!(assignment_count(&pool).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_remove_assignment(pool: PgPool) {
    let (_user, token) = create_user_with_token(&pool, "alice").await;
    let app = common::build_test_app(pool.clone());
    let todo_id = create_todo(&app, &token, "t").await;
    let cat_id = create_category(&app, &token, "c").await;
    let uri = format!("/todo/{todo_id}/category/{cat_id}");

    let response = call(&app, Method::DELETE, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["error"], "Category not assigned");

    call(&app, Method::POST, &uri, &token).await;
    assert_eq!(assignment_count(&pool).await, 1);

    let response = call(&app, Method::DELETE, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Category removed from todo");
    assert_eq!(assignment_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_assign_requires_both_ends_owned(pool: PgPool) {
    let (_alice, alice_token) = create_user_with_token(&pool, "alice").await;
    let (_bob, bob_token) = create_user_with_token(&pool, "bob").await;
    let app = common::build_test_app(pool.clone());
    let alice_todo = create_todo(&app, &alice_token, "alice todo").await;
    let bob_cat = create_category(&app, &bob_token, "bob cat").await;

    // Alice cannot tag her todo with Bob's category, nor Bob his category onto her todo.
    let uri = format!("/todo/{alice_todo}/category/{bob_cat}");
    for token in [&alice_token, &bob_token] {
        let response = call(&app, Method::POST, &uri, token).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
    assert_eq!(assignment_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_todo_or_category_is_not_found(pool: PgPool) {
    let (_user, token) = create_user_with_token(&pool, "alice").await;
    let app = common::build_test_app(pool);
    let todo_id = create_todo(&app, &token, "t").await;
    let cat_id = create_category(&app, &token, "c").await;

    let response = call(
        &app,
        Method::POST,
        &format!("/todo/{}/category/{cat_id}", todo_id + 1000),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        format!("Todo with id {} not found", todo_id + 1000)
    );

    let response = call(
        &app,
        Method::DELETE,
        &format!("/todo/{todo_id}/category/{}", cat_id + 1000),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        format!("Category with id {} not found", cat_id + 1000)
    );
}

// ---------------------------------------------------------------------------
// Todos for category
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_todos_for_category_matches_assignments(pool: PgPool) {
    let (_user, token) = create_user_with_token(&pool, "alice").await;
    let app = common::build_test_app(pool);
    let first = create_todo(&app, &token, "first").await;
    let second = create_todo(&app, &token, "second").await;
    let untagged = create_todo(&app, &token, "untagged").await;
    let cat_id = create_category(&app, &token, "work").await;

    // Assign in reverse order; the listing does not depend on it.
    for todo_id in [second, first] {
        call(
            &app,
            Method::POST,
            &format!("/todo/{todo_id}/category/{cat_id}"),
            &token,
        )
        .await;
    }

    let response = call(&app, Method::GET, &format!("/category/{cat_id}/todos"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let mut ids: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![first, second]);
    assert!(!ids.contains(&untagged));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleted_todo_leaves_category_listing(pool: PgPool) {
    let (_user, token) = create_user_with_token(&pool, "alice").await;
    let app = common::build_test_app(pool);
    let todo_id = create_todo(&app, &token, "short-lived").await;
    let cat_id = create_category(&app, &token, "misc").await;
    call(
        &app,
        Method::POST,
        &format!("/todo/{todo_id}/category/{cat_id}"),
        &token,
    )
    .await;

    call(&app, Method::DELETE, &format!("/todo/{todo_id}"), &token).await;

    let response = call(&app, Method::GET, &format!("/category/{cat_id}/todos"), &token).await;
    assert_eq!(body_json(response).await, json!([]));
}

/// User A tags a todo; user B asking for the same category id gets 404, not A's data.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_listing_is_private(pool: PgPool) {
    let (alice, alice_token) = create_user_with_token(&pool, "alice").await;
    let (_bob, bob_token) = create_user_with_token(&pool, "bob").await;
    let app = common::build_test_app(pool);

    let cat_id = create_category(&app, &alice_token, "work").await;
    let todo_id = create_todo(&app, &alice_token, "write report").await;
    call(
        &app,
        Method::POST,
        &format!("/todo/{todo_id}/category/{cat_id}"),
        &alice_token,
    )
    .await;

    let uri = format!("/category/{cat_id}/todos");
    let response = call(&app, Method::GET, &uri, &alice_token).await;
    assert_eq!(
        body_json(response).await,
        json!([{ "id": todo_id, "text": "write report", "done": false, "user_id": alice.id }])
    );

    let response = call(&app, Method::GET, &uri, &bob_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}
