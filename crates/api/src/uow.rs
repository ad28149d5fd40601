//! Request-scoped unit of work.
//!
//! [`UnitOfWork`] is an extractor holding one PostgreSQL transaction for the
//! lifetime of a handler. Handlers call [`UnitOfWork::commit`] once their
//! write has succeeded. Any other exit drops the transaction, which rolls it
//! back, so a failed request never leaves partial state behind.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sqlx::{PgConnection, Postgres, Transaction};
use todo_core::error::CoreError;
use todo_core::types::DbId;
use todo_db::ownership::{find_owned, OwnedEntity};
use todo_db::DbPool;

use crate::error::{write_failure, AppError, AppResult};
use crate::state::AppState;

/// An open transaction scoped to a single request.
pub struct UnitOfWork {
    tx: Transaction<'static, Postgres>,
}

impl UnitOfWork {
    /// Open a transaction on `pool`.
    pub async fn begin(pool: &DbPool) -> AppResult<Self> {
        let tx = pool.begin().await.map_err(|err| {
            tracing::error!(error = %err, "Failed to open transaction");
            AppError::ServiceUnavailable("Database unavailable".into())
        })?;
        Ok(Self { tx })
    }

    /// The connection the transaction runs on, for repository calls.
    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    /// Fetch a `T` with `id` owned by `user_id`, or fail with `NotFound`.
    ///
    /// A row owned by another user is reported exactly like a missing one.
    pub async fn require_owned<T: OwnedEntity>(
        &mut self,
        id: DbId,
        user_id: DbId,
    ) -> AppResult<T> {
        find_owned::<T>(&mut self.tx, id, user_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: T::ENTITY,
                id,
            }))
    }

    /// Commit the transaction. A failed commit is reported as unavailable.
    pub async fn commit(self, action: &'static str) -> AppResult<()> {
        self.tx.commit().await.map_err(write_failure(action))
    }
}

impl FromRequestParts<AppState> for UnitOfWork {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Self::begin(&state.pool).await
    }
}
