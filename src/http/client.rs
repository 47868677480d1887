//! Low-level HTTP client — `CoingeckoHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens at the sub-client boundary). Internal to the SDK — the high-level
//! client wraps this.

use crate::domain::market::wire::CoinDetailResponse;
use crate::domain::search::wire::SearchResponse;
use crate::error::HttpError;
use crate::shared::CoinId;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Header carrying the demo-tier API key, when one is configured.
const API_KEY_HEADER: &str = "x-cg-demo-api-key";

/// Low-level HTTP client for the CoinGecko REST API.
#[derive(Clone)]
pub struct CoingeckoHttp {
    base_url: String,
    client: Client,
    api_key: Option<String>,
}

impl CoingeckoHttp {
    /// `timeout` bounds every request on native targets. On WASM the host
    /// fetch owns the deadline, so the value is ignored there.
    pub fn new(base_url: &str, api_key: Option<String>, timeout: Duration) -> Self {
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(10);
        }

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
            api_key,
        }
    }

    // ── Search ───────────────────────────────────────────────────────────

    /// `GET /search?query=…` — candidate coins for a free-text query.
    pub async fn search(&self, query: &str) -> Result<SearchResponse, HttpError> {
        let url = format!(
            "{}/search?query={}",
            self.base_url,
            urlencoding::encode(query)
        );
        self.get(&url).await
    }

    // ── Coin detail ──────────────────────────────────────────────────────

    /// `GET /coins/{id}` with everything but market data switched off, so the
    /// response shape stays small and predictable.
    pub async fn coin_detail(&self, id: &CoinId) -> Result<CoinDetailResponse, HttpError> {
        let url = format!(
            "{}/coins/{}?localization=false&tickers=false&market_data=true&community_data=false&developer_data=false&sparkline=false",
            self.base_url, id
        );
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let mut req = self.client.get(url);
        if let Some(key) = &self.api_key {
            req = req.header(API_KEY_HEADER, key);
        }

        let resp = req.send().await.map_err(classify)?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await.map_err(classify)?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

/// A deadline hit anywhere in the request maps to `Timeout` so the shell can
/// show it as an ordinary error line.
fn classify(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else {
        HttpError::Reqwest(e)
    }
}
