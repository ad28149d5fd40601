//! Credential primitives used by the auth handlers and the [`AuthUser`] extractor.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- JWT access-token issuance and validation.
//!
//! [`AuthUser`]: crate::middleware::auth::AuthUser

pub mod jwt;
pub mod password;
