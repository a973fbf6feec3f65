use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuoteQuery {
    pub symbols: Option<String>,
}

/// GET /api/search?query= - symbol/company search against the upstream
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Value>, ApiError> {
    let query = params
        .query
        .as_deref()
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::validation("Query parameter is required"))?;

    Ok(Json(state.market.search(query).await))
}

/// GET /api/quote?symbols= - quotes for a comma-separated symbol list
pub async fn quote(
    State(state): State<AppState>,
    Query(params): Query<QuoteQuery>,
) -> Result<Json<Value>, ApiError> {
    let symbols = params
        .symbols
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::validation("Symbols parameter is required"))?;

    Ok(Json(state.market.quote(symbols).await))
}

/// GET /api/market-trends - top-5 gainers and losers
pub async fn market_trends(State(state): State<AppState>) -> Json<Value> {
    Json(state.market.market_trends().await)
}

/// GET /api/popular-stocks - quotes for the fixed symbol set
pub async fn popular_stocks(State(state): State<AppState>) -> Json<Value> {
    Json(state.market.popular_stocks().await)
}
