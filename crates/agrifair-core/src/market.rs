//! The fixed market price board.
//!
//! Entries carry a precomputed status label. Labels are data, not derived at
//! lookup time.

use serde::{Deserialize, Serialize};

/// One row of the market board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketPriceEntry {
    pub crop: String,
    pub mandi_price: f64,
    pub msp_price: f64,
    /// Display label, e.g. "Below MSP".
    pub status: String,
}

impl MarketPriceEntry {
    fn new(crop: &str, mandi_price: f64, msp_price: f64, status: &str) -> Self {
        MarketPriceEntry {
            crop: crop.to_string(),
            mandi_price,
            msp_price,
            status: status.to_string(),
        }
    }
}

/// Read-only list of market prices served to clients.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketBoard {
    entries: Vec<MarketPriceEntry>,
}

impl MarketBoard {
    /// The board published by the service: Wheat, Rice, Cotton, Maize.
    pub fn standard() -> Self {
        MarketBoard {
            entries: vec![
                MarketPriceEntry::new("Wheat", 2100.0, 2275.0, "Below MSP"),
                MarketPriceEntry::new("Rice", 3200.0, 2183.0, "Above MSP"),
                MarketPriceEntry::new("Cotton", 6800.0, 6620.0, "Above MSP"),
                MarketPriceEntry::new("Maize", 1900.0, 2090.0, "Below MSP"),
            ],
        }
    }

    pub fn entries(&self) -> &[MarketPriceEntry] {
        &self.entries
    }
}

impl Default for MarketBoard {
    fn default() -> Self {
        Self::standard()
    }
}
