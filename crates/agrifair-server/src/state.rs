//! Application state shared by all handlers.
//!
//! Handlers are stateless; the only shared value is the market board, which
//! is built once and never mutated, so it sits behind a plain `Arc`.

use std::sync::Arc;

use agrifair_core::MarketBoard;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// Market prices served by `GET /market-prices`.
    pub market_board: Arc<MarketBoard>,
}

impl AppState {
    /// Creates state serving the given board.
    pub fn new(market_board: MarketBoard) -> Self {
        AppState {
            market_board: Arc::new(market_board),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(MarketBoard::standard())
    }
}
