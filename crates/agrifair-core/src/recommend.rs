//! Crop and fertilizer recommendation.
//!
//! A three-rule table evaluated top to bottom; the first rule that matches
//! decides both the crop and the fertilizer:
//!
//! | condition                                   | crop   | fertilizer |
//! |---------------------------------------------|--------|------------|
//! | rainfall > 100 mm and temperature > 25 °C   | Rice   | Urea       |
//! | black soil (case-insensitive)               | Cotton | DAP        |
//! | anything else                               | Wheat  | NPK        |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::farm::FarmInput;

/// Rainfall (mm) that must be exceeded for the paddy rule.
pub const PADDY_MIN_RAINFALL_MM: f64 = 100.0;

/// Temperature (°C) that must be exceeded for the paddy rule.
pub const PADDY_MIN_TEMPERATURE_C: f64 = 25.0;

/// Crops the service can recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Crop {
    Rice,
    Cotton,
    Wheat,
}

impl Crop {
    pub fn as_str(self) -> &'static str {
        match self {
            Crop::Rice => "Rice",
            Crop::Cotton => "Cotton",
            Crop::Wheat => "Wheat",
        }
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fertilizers paired with a recommended crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fertilizer {
    Urea,
    /// Diammonium phosphate.
    #[serde(rename = "DAP")]
    Dap,
    /// Nitrogen/phosphorus/potassium blend.
    #[serde(rename = "NPK")]
    Npk,
}

impl Fertilizer {
    pub fn as_str(self) -> &'static str {
        match self {
            Fertilizer::Urea => "Urea",
            Fertilizer::Dap => "DAP",
            Fertilizer::Npk => "NPK",
        }
    }
}

impl fmt::Display for Fertilizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub crop: Crop,
    pub fertilizer: Fertilizer,
}

/// Picks a crop and fertilizer for the given farm conditions.
pub fn recommend(farm: &FarmInput) -> Recommendation {
    if farm.rainfall > PADDY_MIN_RAINFALL_MM && farm.temperature > PADDY_MIN_TEMPERATURE_C {
        Recommendation {
            crop: Crop::Rice,
            fertilizer: Fertilizer::Urea,
        }
    } else if farm.has_black_soil() {
        Recommendation {
            crop: Crop::Cotton,
            fertilizer: Fertilizer::Dap,
        }
    } else {
        Recommendation {
            crop: Crop::Wheat,
            fertilizer: Fertilizer::Npk,
        }
    }
}
