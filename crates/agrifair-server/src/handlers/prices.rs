//! Price check and market board handlers.

use agrifair_core::PriceInput;
use axum::extract::State;
use axum::Json;

use crate::extract::ApiJson;
use crate::schema::prices::{CheckPriceResponse, MarketPriceView};
use crate::state::AppState;

/// Compares a mandi price against its MSP.
///
/// `POST /check-price`
pub async fn check_price(ApiJson(input): ApiJson<PriceInput>) -> Json<CheckPriceResponse> {
    let assessment = agrifair_core::assess_price(input);
    tracing::debug!(
        crop = %assessment.input.crop,
        mandi_price = assessment.input.mandi_price,
        msp_price = assessment.input.msp_price,
        status = ?assessment.status,
        "price checked"
    );
    Json(assessment.into())
}

/// Lists the market price board.
///
/// `GET /market-prices`
pub async fn market_prices(State(state): State<AppState>) -> Json<Vec<MarketPriceView>> {
    Json(
        state
            .market_board
            .entries()
            .iter()
            .map(MarketPriceView::from)
            .collect(),
    )
}
