//! Network URL constants for the coinlens SDK.

/// Default CoinGecko REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";
