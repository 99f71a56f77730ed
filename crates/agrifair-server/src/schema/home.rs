//! Greeting response type.

use serde::Serialize;

/// Greeting returned by `GET /`.
pub const GREETING: &str = "Agri Fair Price System Running 🚜";

#[derive(Debug, Clone, Serialize)]
pub struct HomeResponse {
    pub message: String,
}
