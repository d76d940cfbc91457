//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;

use crate::error::AppError;

pub mod villas;

pub use villas::{create_villa, delete_villa, get_villa, list_villas, update_villa};

/// Json extractor whose rejection is the API's usual 400 error body.
///
/// Axum's own `Json` rejects undeserializable bodies with 422; the API
/// contract promises 400 for any malformed or incomplete body.
pub struct ApiJson<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
