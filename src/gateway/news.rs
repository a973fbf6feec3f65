use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

use super::RapidApi;

/// Upstream fetch size; pagination happens in memory over the reshaped list.
const UPSTREAM_LIMIT: &str = "500";

/// One reshaped news article. Upstream field names are mapped to this fixed
/// five-field record; anything upstream omits becomes null.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    pub article_title: Option<String>,
    pub article_url: Option<String>,
    pub article_photo_url: Option<String>,
    pub source: Option<String>,
    pub post_time_utc: Option<String>,
}

/// One page of reshaped articles. `has_more` and `total` are computed against
/// the reshaped list, not whatever the upstream claims.
#[derive(Debug, Serialize)]
pub struct NewsPage {
    pub data: Vec<Article>,
    pub has_more: bool,
    pub total: usize,
}

/// Request/response shaping around the real-time-news-data upstream.
#[derive(Clone)]
pub struct NewsGateway {
    api: RapidApi,
}

impl NewsGateway {
    pub fn new(api: RapidApi) -> Self {
        Self { api }
    }

    /// Fetch business headlines, reshape them, and slice out one page.
    pub async fn business_news(&self, limit: usize, offset: usize) -> Result<NewsPage, ApiError> {
        let payload = self
            .api
            .get(
                "/topic-headlines",
                &[
                    ("topic", "BUSINESS"),
                    ("limit", UPSTREAM_LIMIT),
                    ("country", "IN"),
                    ("lang", "en"),
                ],
            )
            .await;

        let items = match payload.get("data").and_then(Value::as_array) {
            Some(items) if payload.get("status").and_then(Value::as_str) == Some("OK") => items,
            _ => {
                tracing::warn!("news upstream returned unusable payload");
                return Err(ApiError::upstream("Failed to fetch news"));
            }
        };

        Ok(paginate(reshape(items), limit, offset))
    }
}

fn reshape(items: &[Value]) -> Vec<Article> {
    items
        .iter()
        .map(|item| Article {
            article_title: field(item, "title"),
            article_url: field(item, "link"),
            article_photo_url: field(item, "photo_url"),
            source: field(item, "source_name"),
            post_time_utc: field(item, "published_datetime_utc"),
        })
        .collect()
}

fn field(item: &Value, name: &str) -> Option<String> {
    item.get(name).and_then(Value::as_str).map(String::from)
}

fn paginate(articles: Vec<Article>, limit: usize, offset: usize) -> NewsPage {
    let total = articles.len();
    let data: Vec<Article> = articles
        .into_iter()
        .skip(offset)
        .take(limit)
        .collect();

    NewsPage {
        has_more: total > offset.saturating_add(limit),
        total,
        data,
    }
}
