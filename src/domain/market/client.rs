//! Markets sub-client — snapshot retrieval.

use crate::client::CoinlensClient;
use crate::domain::market::PriceSnapshot;
use crate::domain::search::CoinIdentity;
use crate::error::LookupError;

/// Sub-client for market-data operations.
pub struct Markets<'a> {
    pub(crate) client: &'a CoinlensClient,
}

impl<'a> Markets<'a> {
    /// Fetch the market snapshot for a resolved coin.
    ///
    /// The detail request carries market data only; localization, tickers,
    /// community/developer stats and sparkline stay disabled.
    pub async fn snapshot(&self, identity: &CoinIdentity) -> Result<PriceSnapshot, LookupError> {
        let detail = self.client.http.coin_detail(&identity.id).await?;

        tracing::debug!(
            id = %identity.id,
            has_market_data = detail.market_data.is_some(),
            "fetched coin detail"
        );

        PriceSnapshot::try_from((identity.clone(), detail))
    }
}
