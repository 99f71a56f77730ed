//! Greeting handler.

use axum::Json;

use crate::schema::home::{HomeResponse, GREETING};

/// Liveness greeting.
///
/// `GET /`
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: GREETING.to_string(),
    })
}
