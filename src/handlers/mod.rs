use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::require_auth;
use crate::state::AppState;

pub mod protected;
pub mod public;

/// Build the full application router: public market/news proxy routes plus
/// bearer-gated portfolio/holding CRUD.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(protected_routes(state.clone()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/search", get(public::market::search))
        .route("/api/quote", get(public::market::quote))
        .route("/api/market-trends", get(public::market::market_trends))
        .route("/api/popular-stocks", get(public::market::popular_stocks))
        .route("/api/business-news", get(public::news::business_news))
        .route("/api/health", get(public::health::health))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/api/portfolios",
            get(protected::portfolios::list).post(protected::portfolios::create),
        )
        .route("/api/portfolios/:id", delete(protected::portfolios::remove))
        // One path parameter serving two roles: the portfolio id for GET/POST,
        // the holding id for DELETE.
        .route(
            "/api/holdings/:id",
            get(protected::holdings::list)
                .post(protected::holdings::create)
                .delete(protected::holdings::remove),
        )
        .route_layer(from_fn_with_state(state, require_auth))
}
