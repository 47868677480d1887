//! Conversion: (CoinIdentity, CoinDetailResponse) → PriceSnapshot (TryFrom).

use super::wire;
use super::PriceSnapshot;
use crate::domain::search::CoinIdentity;
use crate::error::LookupError;

impl TryFrom<(CoinIdentity, wire::CoinDetailResponse)> for PriceSnapshot {
    type Error = LookupError;

    /// Fails with `MarketDataUnavailable` when the response has no
    /// market-data section. Fields inside an existing section are extracted
    /// independently; a missing price never blocks the rest.
    fn try_from(
        (identity, detail): (CoinIdentity, wire::CoinDetailResponse),
    ) -> Result<Self, Self::Error> {
        let market = detail
            .market_data
            .ok_or_else(|| LookupError::MarketDataUnavailable(identity.id.clone()))?;

        Ok(PriceSnapshot {
            symbol: identity.symbol.to_uppercase(),
            name: identity.name,
            thumbnail_url: identity.thumbnail_url,
            usd_price: market.current_price.usd,
            jpy_price: market.current_price.jpy,
            change_24h: market.price_change_percentage_24h,
            change_7d: market.price_change_percentage_7d,
            change_30d: market.price_change_percentage_30d,
            last_updated: market.last_updated,
        })
    }
}
