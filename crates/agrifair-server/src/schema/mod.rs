//! API schema types for request/response definitions.
//!
//! Request bodies are the core input types (`FarmInput`, `PriceInput`), which
//! derive `Deserialize` directly. The modules here define the response shapes
//! and their conversions from core results.

pub mod home;
pub mod prices;
pub mod recommend;
