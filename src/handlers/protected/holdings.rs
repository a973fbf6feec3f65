use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::Principal;
use crate::error::ApiError;
use crate::store::models::Holding;
use crate::store::validate;
use crate::state::AppState;

use super::parse_id;

/// quantity and purchase_price are left as raw JSON values here; clients send
/// them as numbers or numeric strings and `validate::positive_number` settles
/// it.
#[derive(Debug, Default, Deserialize)]
pub struct CreateHolding {
    pub symbol: Option<String>,
    pub quantity: Option<serde_json::Value>,
    pub purchase_price: Option<serde_json::Value>,
}

/// GET /api/holdings/:portfolio_id - holdings of an owned portfolio
pub async fn list(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Holding>>, ApiError> {
    let portfolio_id = parse_id(&id, "portfolio")?;

    assert_owns_portfolio(&state, &principal, portfolio_id).await?;

    let holdings = state.holdings.list(portfolio_id).await?;
    Ok(Json(holdings))
}

/// POST /api/holdings/:portfolio_id - add a holding to an owned portfolio
pub async fn create(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    body: Option<Json<CreateHolding>>,
) -> Result<(StatusCode, Json<Holding>), ApiError> {
    let portfolio_id = parse_id(&id, "portfolio")?;
    let body = body.map(|Json(b)| b).unwrap_or_default();

    // Validate before the ownership read so a bad payload never touches the
    // store at all.
    let symbol = validate::holding_symbol(body.symbol.as_deref().unwrap_or(""))?;
    let quantity = validate::positive_number(body.quantity.as_ref(), "quantity")?;
    let purchase_price =
        validate::positive_number(body.purchase_price.as_ref(), "purchase_price")?;

    assert_owns_portfolio(&state, &principal, portfolio_id).await?;

    let holding = state
        .holdings
        .create(portfolio_id, &symbol, quantity, purchase_price)
        .await?;

    Ok((StatusCode::CREATED, Json(holding)))
}

/// DELETE /api/holdings/:id - delete a holding; ownership of the parent
/// portfolio is proven inside the single delete statement itself.
pub async fn remove(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let holding_id = parse_id(&id, "holding")?;

    state.holdings.delete(principal.id, holding_id).await?;

    Ok(Json(json!({ "message": "Holding deleted successfully" })))
}

/// Ownership guard for portfolio-scoped holding operations. Absence and
/// foreign ownership produce the identical response.
async fn assert_owns_portfolio(
    state: &AppState,
    principal: &Principal,
    portfolio_id: uuid::Uuid,
) -> Result<(), ApiError> {
    if !state.portfolios.owned_by(principal.id, portfolio_id).await? {
        return Err(ApiError::not_found("Portfolio not found or access denied"));
    }
    Ok(())
}
