use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::config::AuthConfig;

use super::{AuthError, IdentityProvider, Principal};

/// Identity provider backed by a Supabase-style auth service: a bearer token
/// is resolved with `GET {url}/auth/v1/user`. No tokens are cached; every
/// protected request re-verifies.
#[derive(Clone)]
pub struct SupabaseAuth {
    http: reqwest::Client,
    url: String,
    anon_key: String,
}

impl SupabaseAuth {
    pub fn new(http: reqwest::Client, config: &AuthConfig) -> Self {
        Self {
            http,
            url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
        }
    }
}

#[async_trait]
impl IdentityProvider for SupabaseAuth {
    async fn resolve(&self, token: &str) -> Result<Principal, AuthError> {
        let endpoint = format!("{}/auth/v1/user", self.url);

        let response = self
            .http
            .get(&endpoint)
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                tracing::debug!("identity provider unreachable: {}", e);
                AuthError
            })?;

        if !response.status().is_success() {
            tracing::debug!("token rejected by identity provider: {}", response.status());
            return Err(AuthError);
        }

        let body: Value = response.json().await.map_err(|e| {
            tracing::debug!("malformed identity provider response: {}", e);
            AuthError
        })?;

        let id = body
            .get("id")
            .and_then(Value::as_str)
            .and_then(|s| Uuid::parse_str(s).ok())
            .ok_or(AuthError)?;

        let email = body
            .get("email")
            .and_then(Value::as_str)
            .map(String::from);

        Ok(Principal { id, email })
    }
}
