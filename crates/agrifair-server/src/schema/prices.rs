//! Price check and market board response types.

use agrifair_core::{MarketPriceEntry, PriceAssessment};
use serde::{Serialize, Serializer};

/// Response from `POST /check-price`: the submitted prices plus the verdict.
#[derive(Debug, Clone, Serialize)]
pub struct CheckPriceResponse {
    pub crop: String,
    pub mandi_price: f64,
    pub msp_price: f64,
    /// Verdict label, e.g. "Fair Price ✅".
    pub status: String,
    pub suggestion: String,
}

impl From<PriceAssessment> for CheckPriceResponse {
    fn from(assessment: PriceAssessment) -> Self {
        let PriceAssessment { input, status } = assessment;
        CheckPriceResponse {
            crop: input.crop,
            mandi_price: input.mandi_price,
            msp_price: input.msp_price,
            status: status.label().to_string(),
            suggestion: status.suggestion().to_string(),
        }
    }
}

/// One row of `GET /market-prices`.
///
/// Board prices are whole rupees and go out as JSON integers (`2100`, not
/// `2100.0`).
#[derive(Debug, Clone, Serialize)]
pub struct MarketPriceView {
    pub crop: String,
    #[serde(serialize_with = "serialize_board_price")]
    pub mandi_price: f64,
    #[serde(serialize_with = "serialize_board_price")]
    pub msp_price: f64,
    pub status: String,
}

impl From<&MarketPriceEntry> for MarketPriceView {
    fn from(entry: &MarketPriceEntry) -> Self {
        MarketPriceView {
            crop: entry.crop.clone(),
            mandi_price: entry.mandi_price,
            msp_price: entry.msp_price,
            status: entry.status.clone(),
        }
    }
}

/// Largest magnitude below which every integer is exactly representable in f64.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

fn serialize_board_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if price.fract() == 0.0 && price.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(mandi_price: f64, msp_price: f64) -> MarketPriceView {
        MarketPriceView {
            crop: "Wheat".to_string(),
            mandi_price,
            msp_price,
            status: "Below MSP".to_string(),
        }
    }

    #[test]
    fn whole_board_prices_serialize_as_integers() {
        let json = serde_json::to_string(&view(2100.0, 2275.0)).unwrap();
        assert_eq!(
            json,
            r#"{"crop":"Wheat","mandi_price":2100,"msp_price":2275,"status":"Below MSP"}"#
        );
    }

    #[test]
    fn fractional_board_prices_keep_their_decimals() {
        let json = serde_json::to_string(&view(2100.5, 2275.25)).unwrap();
        assert!(json.contains(r#""mandi_price":2100.5"#), "{}", json);
        assert!(json.contains(r#""msp_price":2275.25"#), "{}", json);
    }
}
