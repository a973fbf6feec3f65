use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::bearer_token;
use crate::error::ApiError;
use crate::state::AppState;

/// Authentication middleware for protected routes.
///
/// Extracts the bearer token, resolves it through the identity provider, and
/// injects the resulting `Principal` into request extensions. Short-circuits
/// with 401 before any store access. A request without a well-formed
/// `Bearer <token>` header is rejected without contacting the provider.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers())
        .ok_or_else(|| ApiError::unauthenticated("Unauthorized: Missing or invalid token"))?
        .to_string();

    let principal = state
        .auth
        .resolve(&token)
        .await
        .map_err(|_| ApiError::unauthenticated("Unauthorized: Invalid or expired token"))?;

    request.extensions_mut().insert(principal);
    Ok(next.run(request).await)
}
