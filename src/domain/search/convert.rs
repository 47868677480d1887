//! Conversion: search hits → chosen CoinIdentity.

use super::wire::CoinHit;
use super::CoinIdentity;

impl From<CoinHit> for CoinIdentity {
    fn from(hit: CoinHit) -> Self {
        Self {
            id: hit.id,
            symbol: hit.symbol,
            name: hit.name,
            thumbnail_url: hit.thumb,
        }
    }
}

/// Pick the candidate for a query: the first exact (case-insensitive) symbol
/// match wins, otherwise the provider's first-ranked result stands.
///
/// Deterministic and order-preserving. No scoring happens here beyond what
/// the provider already ranked.
#[cfg_attr(not(feature = "http"), allow(dead_code))]
pub(crate) fn select_candidate<'a>(query: &str, coins: &'a [CoinHit]) -> Option<&'a CoinHit> {
    coins
        .iter()
        .find(|c| c.symbol.eq_ignore_ascii_case(query))
        .or_else(|| coins.first())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::CoinId;

    fn hit(id: &str, symbol: &str, name: &str) -> CoinHit {
        CoinHit {
            id: CoinId::from(id),
            symbol: symbol.to_string(),
            name: name.to_string(),
            thumb: None,
        }
    }

    #[test]
    fn test_exact_symbol_match_beats_provider_order() {
        let coins = vec![
            hit("wrapped-bitcoin", "wbtc", "Wrapped Bitcoin"),
            hit("bitcoin", "btc", "Bitcoin"),
        ];
        let chosen = select_candidate("BTC", &coins).unwrap();
        assert_eq!(chosen.id, CoinId::from("bitcoin"));
    }

    #[test]
    fn test_exact_match_is_case_insensitive() {
        let coins = vec![hit("bitcoin", "btc", "Bitcoin")];
        assert!(select_candidate("BtC", &coins).is_some());
        assert_eq!(
            select_candidate("BtC", &coins).unwrap().id,
            CoinId::from("bitcoin")
        );
    }

    #[test]
    fn test_no_exact_match_falls_back_to_first() {
        let coins = vec![
            hit("wrapped-bitcoin", "wbtc", "Wrapped Bitcoin"),
            hit("bitcoin-bep2", "btcb", "Bitcoin BEP2"),
        ];
        let chosen = select_candidate("BTC", &coins).unwrap();
        assert_eq!(chosen.id, CoinId::from("wrapped-bitcoin"));
    }

    #[test]
    fn test_empty_candidates_select_nothing() {
        assert!(select_candidate("BTC", &[]).is_none());
    }

    #[test]
    fn test_identity_from_hit_maps_thumbnail() {
        let mut h = hit("bitcoin", "btc", "Bitcoin");
        h.thumb = Some("https://example.com/btc.png".to_string());
        let identity = CoinIdentity::from(h);
        assert_eq!(identity.id, CoinId::from("bitcoin"));
        assert_eq!(identity.symbol, "btc");
        assert_eq!(identity.name, "Bitcoin");
        assert_eq!(
            identity.thumbnail_url.as_deref(),
            Some("https://example.com/btc.png")
        );
    }
}
