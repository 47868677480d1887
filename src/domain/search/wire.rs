//! Wire types for search responses (REST).

use crate::shared::CoinId;
use serde::{Deserialize, Serialize};

/// One candidate coin from the search endpoint.
///
/// Several hits may share a `symbol` (wrapped tokens, forks, chain bridges);
/// `id` is the provider's canonical key. Fields this crate does not use are
/// ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinHit {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
}

/// REST response for a search query.
///
/// The endpoint also returns exchanges and categories; only coins matter
/// here. `coins` defaults to empty when the provider omits it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    #[serde(default)]
    pub coins: Vec<CoinHit>,
}
