//! Search domain — candidate coins and symbol disambiguation.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::CoinId;
use serde::{Deserialize, Serialize};

// ─── CoinIdentity ────────────────────────────────────────────────────────────

/// The canonical identity one lookup resolved to.
///
/// Immutable once selected; it lives only as long as the lookup that produced
/// it and seeds the snapshot's display fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinIdentity {
    pub id: CoinId,
    /// Ticker symbol as the provider lists it (usually lowercase).
    pub symbol: String,
    pub name: String,
    pub thumbnail_url: Option<String>,
}
