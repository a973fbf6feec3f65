use async_trait::async_trait;
use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

mod supabase;

pub use supabase::SupabaseAuth;

/// Authenticated identity resolved from a bearer token.
///
/// The identity provider owns the user lifecycle entirely; this service only
/// ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    pub id: Uuid,
    pub email: Option<String>,
}

/// Every verification failure collapses to this one kind: callers never learn
/// whether a token was malformed, expired, or the provider was unreachable.
#[derive(Debug, Error)]
#[error("invalid or expired token")]
pub struct AuthError;

/// Token-to-principal resolution against an external identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn resolve(&self, token: &str) -> Result<Principal, AuthError>;
}

/// Extract the token from a strict `Bearer <token>` Authorization header.
///
/// A missing header, any other scheme, or an empty token yields `None` so the
/// caller can reject without contacting the identity provider.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get("authorization")?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token)
}
