use serde_json::{json, Value};

use super::RapidApi;

/// Symbols behind the popular-stocks endpoint. Fixed set, large NSE caps.
const POPULAR_SYMBOLS: &str = "RELIANCE:NSE,TCS:NSE,HDFCBANK:NSE,ICICIBANK:NSE,INFY:NSE,\
                               SBIN:NSE,BHARTIARTL:NSE,LT:NSE,CIPLA:NSE";

const TOP_TRENDS: usize = 5;

/// Request/response shaping around the real-time-finance-data upstream.
/// No local state; every call is a fresh upstream GET.
#[derive(Clone)]
pub struct MarketGateway {
    api: RapidApi,
}

impl MarketGateway {
    pub fn new(api: RapidApi) -> Self {
        Self { api }
    }

    pub async fn search(&self, query: &str) -> Value {
        self.api
            .get("/search", &[("query", query), ("language", "en")])
            .await
    }

    pub async fn quote(&self, symbols: &str) -> Value {
        self.api
            .get("/stock-quote", &[("symbol", symbols), ("language", "en")])
            .await
    }

    pub async fn popular_stocks(&self) -> Value {
        self.quote(POPULAR_SYMBOLS).await
    }

    /// Top-5 gainers and losers, one upstream call per trend direction.
    pub async fn market_trends(&self) -> Value {
        let gainers = self.trends("GAINERS").await;
        let losers = self.trends("LOSERS").await;

        json!({
            "gainers": top_trends(&gainers),
            "losers": top_trends(&losers),
        })
    }

    async fn trends(&self, trend_type: &str) -> Value {
        self.api
            .get(
                "/market-trends",
                &[
                    ("trend_type", trend_type),
                    ("country", "in"),
                    ("language", "en"),
                ],
            )
            .await
    }
}

/// Pull `data.trends` out of an upstream trends payload, truncated to the top
/// five. A missing or malformed payload reduces to an empty list.
fn top_trends(payload: &Value) -> Vec<Value> {
    payload
        .pointer("/data/trends")
        .and_then(Value::as_array)
        .map(|trends| trends.iter().take(TOP_TRENDS).cloned().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trend(symbol: &str) -> Value {
        json!({ "symbol": symbol })
    }

    #[test]
    fn trends_are_truncated_to_top_five() {
        let payload = json!({
            "data": { "trends": (0..8).map(|i| trend(&format!("S{}", i))).collect::<Vec<_>>() }
        });

        let top = top_trends(&payload);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0]["symbol"], "S0");
        assert_eq!(top[4]["symbol"], "S4");
    }

    #[test]
    fn short_lists_pass_through_unchanged() {
        let payload = json!({ "data": { "trends": [trend("A"), trend("B")] } });
        assert_eq!(top_trends(&payload).len(), 2);
    }

    #[test]
    fn malformed_payloads_reduce_to_empty() {
        assert!(top_trends(&json!({ "status": "error" })).is_empty());
        assert!(top_trends(&json!({ "data": { "trends": "oops" } })).is_empty());
        assert!(top_trends(&Value::Null).is_empty());
    }
}
