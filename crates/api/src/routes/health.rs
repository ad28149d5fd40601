//! `GET /health`: unauthenticated liveness probe for load balancers.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// 200 while the database answers, 503 otherwise.
async fn health(State(state): State<AppState>) -> AppResult<Json<HealthStatus>> {
    todo_db::health_check(&state.pool).await.map_err(|err| {
        tracing::warn!(error = %err, "Health check could not reach the database");
        AppError::ServiceUnavailable("Database unavailable".into())
    })?;

    Ok(Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
