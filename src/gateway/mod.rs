use serde_json::{json, Value};
use url::Url;

pub mod market;
pub mod news;

pub use market::MarketGateway;
pub use news::NewsGateway;

/// Minimal client for one RapidAPI host. Stateless: one authenticated GET,
/// JSON body out. Transport and decode failures come back as an error-shaped
/// body rather than an Err, matching what the upstreams themselves return on
/// failure.
#[derive(Clone)]
pub struct RapidApi {
    http: reqwest::Client,
    host: String,
    key: String,
}

impl RapidApi {
    pub fn new(http: reqwest::Client, host: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            http,
            host: host.into(),
            key: key.into(),
        }
    }

    pub async fn get(&self, path: &str, params: &[(&str, &str)]) -> Value {
        let mut url = match Url::parse(&format!("https://{}{}", self.host, path)) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("invalid upstream url for {}{}: {}", self.host, path, e);
                return error_body("invalid upstream request");
            }
        };
        url.query_pairs_mut().extend_pairs(params);

        let response = match self
            .http
            .get(url)
            .header("x-rapidapi-key", &self.key)
            .header("x-rapidapi-host", &self.host)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("upstream request to {} failed: {}", self.host, e);
                return error_body(e.to_string());
            }
        };

        match response.json::<Value>().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("upstream response from {} not JSON: {}", self.host, e);
                error_body(e.to_string())
            }
        }
    }
}

fn error_body(message: impl Into<String>) -> Value {
    json!({ "status": "error", "message": message.into() })
}
