//! High-level client — `CoinlensClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the accessor methods, and the composed
//! two-stage lookup pipeline.

use crate::domain::checker::{CheckerState, LaneId};
use crate::domain::market::client::Markets;
use crate::domain::market::PriceSnapshot;
use crate::domain::search::client::Search;
use crate::error::LookupError;
use crate::http::CoingeckoHttp;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::market::client::Markets as MarketsClient;
pub use crate::domain::search::client::Search as SearchClient;

/// The primary entry point for the coinlens SDK.
///
/// Provides nested sub-client accessors for each domain
/// (`client.search()`, `client.markets()`) plus the composed pipeline.
#[derive(Clone)]
pub struct CoinlensClient {
    pub(crate) http: CoingeckoHttp,
}

impl CoinlensClient {
    pub fn builder() -> CoinlensClientBuilder {
        CoinlensClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn search(&self) -> Search<'_> {
        Search { client: self }
    }

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    // ── Pipeline ─────────────────────────────────────────────────────────

    /// Resolve a query and fetch its market snapshot, in that order.
    ///
    /// The two calls run sequentially; the detail request never starts
    /// unless resolution succeeded.
    pub async fn lookup(&self, query: &str) -> Result<PriceSnapshot, LookupError> {
        let identity = self.search().resolve(query).await?;
        self.markets().snapshot(&identity).await
    }

    /// Drive one submission through `state`: guard blank input, enter
    /// Loading, run the pipeline, settle the lane.
    ///
    /// Returns `false` when the input was blank (no lane transition happens)
    /// or the submission was superseded before it completed. Shells that
    /// interleave submissions on one lane use [`CheckerState::begin`] and
    /// [`CheckerState::commit`] around their own scheduling instead.
    pub async fn submit(&self, state: &mut CheckerState, lane: LaneId, input: &str) -> bool {
        let query = input.trim();
        if query.is_empty() {
            return false;
        }
        let submission = state.begin(lane);
        let result = self.lookup(query).await;
        state.commit(submission, result)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CoinlensClientBuilder {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl Default for CoinlensClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(10),
        }
    }
}

impl CoinlensClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Demo-tier API key, sent with every request when set.
    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    /// Upper bound on each network call (native targets only).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<CoinlensClient, LookupError> {
        Ok(CoinlensClient {
            http: CoingeckoHttp::new(&self.base_url, self.api_key, self.timeout),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checker::RequestState;

    #[test]
    fn test_blank_input_is_a_no_op() {
        let client = CoinlensClient::builder().build().unwrap();
        let mut state = CheckerState::new();

        let ran = tokio_test::block_on(client.submit(&mut state, LaneId::Primary, "   "));

        assert!(!ran);
        assert_eq!(*state.lane(LaneId::Primary).state(), RequestState::Idle);
        assert!(state.snapshot().is_none());
    }

    #[test]
    fn test_builder_defaults() {
        let builder = CoinlensClientBuilder::default();
        assert_eq!(builder.base_url, crate::network::DEFAULT_API_URL);
        assert!(builder.api_key.is_none());
        assert_eq!(builder.timeout, Duration::from_secs(10));
    }
}
