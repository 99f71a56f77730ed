//! Recommendation response type.

use agrifair_core::{Crop, Fertilizer, Recommendation};
use serde::Serialize;

/// Response from `POST /recommend`.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendResponse {
    pub recommended_crop: Crop,
    pub fertilizer: Fertilizer,
}

impl From<Recommendation> for RecommendResponse {
    fn from(rec: Recommendation) -> Self {
        RecommendResponse {
            recommended_crop: rec.crop,
            fertilizer: rec.fertilizer,
        }
    }
}
