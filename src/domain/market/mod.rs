//! Market domain — price snapshots, conversion, display views.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod view;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── PriceSnapshot ───────────────────────────────────────────────────────────

/// A display-ready market snapshot for one resolved coin.
///
/// Numeric fields are `None` when the provider omitted them, never zero. The
/// shell owns the snapshot while the result view is open; every successful
/// re-search replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    /// Ticker symbol, upper-cased for display.
    pub symbol: String,
    /// Coin name, verbatim from the provider.
    pub name: String,
    /// Thumbnail from the search hit that resolved this coin.
    pub thumbnail_url: Option<String>,
    pub usd_price: Option<f64>,
    pub jpy_price: Option<f64>,
    pub change_24h: Option<f64>,
    pub change_7d: Option<f64>,
    pub change_30d: Option<f64>,
    /// Provider-side freshness stamp for the market data.
    pub last_updated: Option<DateTime<Utc>>,
}
