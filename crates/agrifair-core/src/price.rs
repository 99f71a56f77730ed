//! Fair-price check of a mandi price against the minimum support price.

use serde::{Deserialize, Serialize};

/// A crop's observed market price alongside its MSP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceInput {
    pub crop: String,
    /// Price observed at the local mandi (wholesale market).
    pub mandi_price: f64,
    /// Government minimum support price for the crop.
    pub msp_price: f64,
}

/// Whether selling at the mandi price is fair to the farmer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceStatus {
    Fair,
    /// Mandi price is strictly below MSP.
    Unfair,
}

impl PriceStatus {
    /// Human-readable status line shown to the farmer.
    pub fn label(self) -> &'static str {
        match self {
            PriceStatus::Fair => "Fair Price ✅",
            PriceStatus::Unfair => "Unfair Price ❌ Farmer at Loss",
        }
    }

    /// What the farmer should do next.
    pub fn suggestion(self) -> &'static str {
        match self {
            PriceStatus::Fair => "You can sell in mandi",
            PriceStatus::Unfair => "Wait or sell at MSP center",
        }
    }
}

/// The submitted prices with the verdict attached.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceAssessment {
    pub input: PriceInput,
    pub status: PriceStatus,
}

/// Judges a mandi price against its MSP. Equal prices count as fair.
pub fn assess_price(input: PriceInput) -> PriceAssessment {
    let status = if input.mandi_price < input.msp_price {
        PriceStatus::Unfair
    } else {
        PriceStatus::Fair
    };
    PriceAssessment { input, status }
}
