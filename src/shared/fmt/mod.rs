//! Display formatting for prices and percentage changes.
//!
//! Pure string assembly over optional values: an absent value always renders
//! as [`PLACEHOLDER`], never as zero.

pub mod percent;
pub mod price;

pub use percent::{PercentDisplay, Trend};

/// Placeholder rendered when a numeric field is unavailable.
pub const PLACEHOLDER: &str = "---";
