//! HTTP handler modules for the agri fair price API.
//!
//! Handlers extract the request, delegate to `agrifair-core`, and wrap the
//! result in a response type from [`crate::schema`]. No decision logic lives
//! here.

pub mod home;
pub mod prices;
pub mod recommend;

use axum::http::{Method, Uri};

use crate::error::ApiError;

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

/// Fallback for known routes called with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!("{} is not allowed on {}", method, uri.path()))
}
