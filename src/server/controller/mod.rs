//! HTTP request handlers.
//!
//! Controllers decode requests into DTOs, validate them into domain parameters, call the
//! matching service and translate the result into a status code and JSON body. Successful
//! mutations clear the response cache.

pub mod author;
pub mod book;
pub mod health;


use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::server::error::AppError;

/// Positive integer ID taken from the `{id}` path segment.
///
/// Non-numeric, out-of-range and non-positive IDs are rejected with 400 Bad Request and the
/// usual JSON error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub i32);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("Rejected path id: {}", rejection.body_text());
                AppError::BadRequest("id is required".to_string())
            })?;

        if id <= 0 {
            return Err(AppError::BadRequest("id is required".to_string()));
        }

        Ok(Self(id))
    }
}
