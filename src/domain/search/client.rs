//! Search sub-client — symbol resolution.

use crate::client::CoinlensClient;
use crate::domain::search::{convert, CoinIdentity};
use crate::error::LookupError;

/// Sub-client for symbol resolution.
pub struct Search<'a> {
    pub(crate) client: &'a CoinlensClient,
}

impl<'a> Search<'a> {
    /// Resolve a free-text ticker query to one canonical coin identity.
    ///
    /// An exact symbol match takes priority over the provider's own ranking;
    /// without one the first-listed candidate is used. Fails with
    /// `SymbolNotFound` when the provider returns no candidates at all.
    pub async fn resolve(&self, query: &str) -> Result<CoinIdentity, LookupError> {
        let query = query.trim();
        let resp = self.client.http.search(query).await?;

        let hit = convert::select_candidate(query, &resp.coins)
            .cloned()
            .ok_or(LookupError::SymbolNotFound)?;

        tracing::debug!(
            query,
            candidates = resp.coins.len(),
            id = %hit.id,
            "resolved symbol"
        );

        Ok(hit.into())
    }
}
