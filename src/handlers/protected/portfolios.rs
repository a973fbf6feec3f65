use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::Principal;
use crate::error::ApiError;
use crate::store::models::Portfolio;
use crate::store::validate;
use crate::state::AppState;

use super::parse_id;

#[derive(Debug, Default, Deserialize)]
pub struct CreatePortfolio {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// GET /api/portfolios - the principal's portfolios with holdings counts
pub async fn list(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<Vec<Portfolio>>, ApiError> {
    let portfolios = state.portfolios.list(principal.id).await?;
    Ok(Json(portfolios))
}

/// POST /api/portfolios - create a portfolio owned by the principal
pub async fn create(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    body: Option<Json<CreatePortfolio>>,
) -> Result<(StatusCode, Json<Portfolio>), ApiError> {
    let body = body.map(|Json(b)| b).unwrap_or_default();

    let name = validate::portfolio_name(body.name.as_deref())?;
    let description = body.description.as_deref().unwrap_or("").trim().to_string();

    let portfolio = state
        .portfolios
        .create(principal.id, &name, &description)
        .await?;

    Ok((StatusCode::CREATED, Json(portfolio)))
}

/// DELETE /api/portfolios/:id - delete a portfolio and all of its holdings
pub async fn remove(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id, "portfolio")?;

    state.portfolios.delete(principal.id, id).await?;

    Ok(Json(json!({ "message": "Portfolio deleted successfully" })))
}
