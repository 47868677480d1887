//! # coinlens
//!
//! The engine of a crypto price-checker popup: resolve a user-typed ticker
//! symbol to a canonical CoinGecko coin, fetch its USD/JPY market snapshot,
//! and hand the shell display-ready, loading/error-aware state.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, checker state, formatting
//!    (always available, WASM-safe)
//! 2. **HTTP API** — `CoingeckoHttp` with typed status mapping
//! 3. **High-Level Client** — `CoinlensClient` with nested sub-clients and
//!    the two-stage lookup pipeline
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coinlens::prelude::*;
//!
//! let client = CoinlensClient::builder().build()?;
//!
//! let mut state = CheckerState::new();
//! client.submit(&mut state, LaneId::Primary, "BTC").await;
//!
//! if let Some(snapshot) = state.snapshot() {
//!     let view = SnapshotView::from(snapshot);
//!     println!("{} ${} ({})", view.symbol, view.usd_price, view.change_24h.text);
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and display formatting used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client for the CoinGecko REST API.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `CoinlensClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes + formatting
    pub use crate::shared::fmt::{PercentDisplay, Trend, PLACEHOLDER};
    pub use crate::shared::CoinId;

    // Domain types — search
    pub use crate::domain::search::CoinIdentity;

    // Domain types — market
    pub use crate::domain::market::view::SnapshotView;
    pub use crate::domain::market::PriceSnapshot;

    // State containers
    pub use crate::domain::checker::{
        CheckerState, LaneId, RequestLane, RequestState, Submission,
    };

    // Errors
    pub use crate::error::{HttpError, LookupError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + high-level client
    #[cfg(feature = "http")]
    pub use crate::client::{CoinlensClient, CoinlensClientBuilder, MarketsClient, SearchClient};
    #[cfg(feature = "http")]
    pub use crate::http::CoingeckoHttp;
}
