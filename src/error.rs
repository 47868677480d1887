//! Unified SDK error types.

use crate::shared::CoinId;
use thiserror::Error;

/// Top-level error for the lookup pipeline.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The search endpoint returned no candidates for the query.
    #[error("no coin matches the given symbol")]
    SymbolNotFound,

    /// The coin-detail response carried no market-data section.
    #[error("no market data available for coin: {0}")]
    MarketDataUnavailable(CoinId),

    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),
}

impl LookupError {
    /// The line the shell shows the user for this error.
    ///
    /// Transport errors pass their own description through; anything that
    /// renders empty falls back to a generic line.
    pub fn user_message(&self) -> String {
        match self {
            LookupError::SymbolNotFound => {
                "No coin matches that symbol. Check the ticker and try again.".to_string()
            }
            LookupError::MarketDataUnavailable(_) => {
                "Price data is unavailable for this coin.".to_string()
            }
            LookupError::Http(e) => {
                let msg = e.to_string();
                if msg.is_empty() {
                    "An error occurred.".to_string()
                } else {
                    msg
                }
            }
        }
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,
}
