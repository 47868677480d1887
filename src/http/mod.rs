//! HTTP client layer — `CoingeckoHttp` endpoint methods.

pub mod client;

pub use client::CoingeckoHttp;
