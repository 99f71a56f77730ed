//! Decision logic for the agri fair price service.
//!
//! Everything here is pure: a farm's conditions map to a crop and fertilizer
//! pick, a mandi price is judged against its MSP, and the market board is a
//! fixed table. The HTTP surface lives in `agrifair-server`.

pub mod farm;
pub mod market;
pub mod price;
pub mod recommend;

// Re-export commonly used types
pub use farm::FarmInput;
pub use market::{MarketBoard, MarketPriceEntry};
pub use price::{assess_price, PriceAssessment, PriceInput, PriceStatus};
pub use recommend::{recommend, Crop, Fertilizer, Recommendation};
