//! HTTP/JSON API for the agri fair price service.
//!
//! Exposes crop/fertilizer recommendations, a fair-price check against MSP,
//! and the market price board. Decision logic lives in `agrifair-core`; this
//! crate contains routing, request extraction, error mapping and config.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
