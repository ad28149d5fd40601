//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "message": "..." }` body returned by association endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
