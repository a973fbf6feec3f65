use std::sync::Arc;
use std::time::Duration;

use sqlx::PgPool;

use crate::auth::IdentityProvider;
use crate::config::AppConfig;
use crate::gateway::{MarketGateway, NewsGateway, RapidApi};
use crate::store::{HoldingStore, PortfolioStore};

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Everything a request handler needs, constructed once at startup and
/// cloned per request. No process-global client handles anywhere.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub pool: PgPool,
    pub auth: Arc<dyn IdentityProvider>,
    pub market: MarketGateway,
    pub news: NewsGateway,
    pub portfolios: PortfolioStore,
    pub holdings: HoldingStore,
}

impl AppState {
    pub fn new(config: AppConfig, pool: PgPool, auth: Arc<dyn IdentityProvider>) -> Self {
        // Startup-time failure; nothing to serve without an upstream client.
        let http = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .expect("failed to build upstream HTTP client");

        let market = MarketGateway::new(RapidApi::new(
            http.clone(),
            config.rapidapi.stock_host.clone(),
            config.rapidapi.key.clone(),
        ));
        let news = NewsGateway::new(RapidApi::new(
            http,
            config.rapidapi.news_host.clone(),
            config.rapidapi.news_key.clone(),
        ));

        Self {
            config: Arc::new(config),
            portfolios: PortfolioStore::new(pool.clone()),
            holdings: HoldingStore::new(pool.clone()),
            pool,
            auth,
            market,
            news,
        }
    }
}
