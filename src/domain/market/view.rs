//! Snapshot display view — the formatted surface the shell renders.

use super::PriceSnapshot;
use crate::shared::fmt::{percent, price, PercentDisplay};

/// Pre-formatted strings for one snapshot.
///
/// Pure assembly over [`PriceSnapshot`]: the same snapshot always renders the
/// same view, so the shell never formats numbers itself.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotView {
    pub symbol: String,
    pub name: String,
    pub thumbnail_url: Option<String>,
    pub usd_price: String,
    pub jpy_price: String,
    pub change_24h: PercentDisplay,
    pub change_7d: PercentDisplay,
    pub change_30d: PercentDisplay,
}

impl From<&PriceSnapshot> for SnapshotView {
    fn from(snapshot: &PriceSnapshot) -> Self {
        Self {
            symbol: snapshot.symbol.clone(),
            name: snapshot.name.clone(),
            thumbnail_url: snapshot.thumbnail_url.clone(),
            usd_price: price::display(snapshot.usd_price),
            jpy_price: price::display(snapshot.jpy_price),
            change_24h: percent::display(snapshot.change_24h),
            change_7d: percent::display(snapshot.change_7d),
            change_30d: percent::display(snapshot.change_30d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::fmt::{Trend, PLACEHOLDER};

    fn snapshot() -> PriceSnapshot {
        PriceSnapshot {
            symbol: "BTC".to_string(),
            name: "Bitcoin".to_string(),
            thumbnail_url: None,
            usd_price: Some(65000.1234),
            jpy_price: Some(9_800_000.0),
            change_24h: Some(1.5),
            change_7d: Some(-3.2),
            change_30d: None,
            last_updated: None,
        }
    }

    #[test]
    fn test_view_renders_all_fields() {
        let view = SnapshotView::from(&snapshot());
        assert_eq!(view.symbol, "BTC");
        assert_eq!(view.name, "Bitcoin");
        assert_eq!(view.usd_price, "65,000.12");
        assert_eq!(view.jpy_price, "9,800,000");
        assert_eq!(view.change_24h.text, "+1.50%");
        assert_eq!(view.change_24h.trend, Trend::Positive);
        assert_eq!(view.change_7d.text, "-3.20%");
        assert_eq!(view.change_7d.trend, Trend::Negative);
        assert_eq!(view.change_30d.text, PLACEHOLDER);
        assert_eq!(view.change_30d.trend, Trend::Neutral);
    }

    #[test]
    fn test_view_is_deterministic() {
        let s = snapshot();
        assert_eq!(SnapshotView::from(&s), SnapshotView::from(&s));
    }
}
