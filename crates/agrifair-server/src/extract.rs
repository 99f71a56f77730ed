//! Request extractors.

use axum::extract::FromRequest;

use crate::error::ApiError;

/// `axum::Json` whose rejections are reported as [`ApiError`].
///
/// A missing or mistyped field becomes a 422 `VALIDATION_FAILED` response
/// carrying the same JSON error envelope as every other API failure.
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
