use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

const DEFAULT_LIMIT: usize = 8;

/// limit/offset arrive as strings; anything unparseable falls back to the
/// defaults rather than rejecting the request.
#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// GET /api/business-news?limit=&offset= - paginated reshaped headlines
pub async fn business_news(
    State(state): State<AppState>,
    Query(params): Query<NewsQuery>,
) -> Result<Json<Value>, ApiError> {
    let limit = parse_or(params.limit.as_deref(), DEFAULT_LIMIT);
    let offset = parse_or(params.offset.as_deref(), 0);

    let page = state.news.business_news(limit, offset).await?;

    Ok(Json(json!({
        "status": "OK",
        "data": page.data,
        "has_more": page.has_more,
        "total": page.total,
    })))
}

fn parse_or(value: Option<&str>, default: usize) -> usize {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}
