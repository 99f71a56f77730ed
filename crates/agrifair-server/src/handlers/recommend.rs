//! Crop and fertilizer recommendation handler.

use agrifair_core::FarmInput;
use axum::Json;

use crate::extract::ApiJson;
use crate::schema::recommend::RecommendResponse;

/// Recommends a crop and fertilizer for the submitted farm conditions.
///
/// `POST /recommend`
pub async fn recommend(ApiJson(farm): ApiJson<FarmInput>) -> Json<RecommendResponse> {
    let rec = agrifair_core::recommend(&farm);
    tracing::debug!(
        rainfall = farm.rainfall,
        temperature = farm.temperature,
        soil_type = %farm.soil_type,
        crop = %rec.crop,
        fertilizer = %rec.fertilizer,
        "recommendation issued"
    );
    Json(rec.into())
}
