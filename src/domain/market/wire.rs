//! Wire types for coin-detail responses (REST).

use crate::shared::CoinId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Market-data wire types ──────────────────────────────────────────────────

/// Spot price per quote currency. The provider sends dozens of currencies;
/// only the two this crate displays are mapped, the rest are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CurrencyPrices {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usd: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jpy: Option<f64>,
}

/// The market-data section of a coin-detail response.
///
/// Every numeric field is optional upstream. A missing or null value stays
/// missing here; absence and zero are different facts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MarketData {
    #[serde(default)]
    pub current_price: CurrencyPrices,
    pub price_change_percentage_24h: Option<f64>,
    pub price_change_percentage_7d: Option<f64>,
    pub price_change_percentage_30d: Option<f64>,
    pub last_updated: Option<DateTime<Utc>>,
}

/// REST response for a single coin's detail endpoint.
///
/// `market_data` is absent when the request disabled it or the provider has
/// no market listing for the coin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinDetailResponse {
    pub id: CoinId,
    pub market_data: Option<MarketData>,
}
