//! Static suggestion catalog.
//!
//! The read-only list of known ticker symbols and company names backing the
//! suggestion dropdown. Compiled in - no network calls originate from this
//! crate.

// =============================================================================
// Suggestion
// =============================================================================

/// One catalog entry: a ticker symbol and the company name behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub symbol: String,
    pub name: String,
}

impl Suggestion {
    /// Create a suggestion from string-ish parts.
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
        }
    }
}

// =============================================================================
// Catalog data
// =============================================================================

/// The fixed symbol catalog, in display order.
pub const CATALOG: &[(&str, &str)] = &[
    ("AAPL", "Apple Inc."),
    ("MSFT", "Microsoft Corporation"),
    ("GOOGL", "Alphabet Inc."),
    ("AMZN", "Amazon.com Inc."),
    ("FB", "Meta Platforms Inc."),
    ("TSLA", "Tesla Inc."),
    ("NVDA", "NVIDIA Corporation"),
    ("JPM", "JPMorgan Chase & Co."),
    ("V", "Visa Inc."),
    ("JNJ", "Johnson & Johnson"),
];

/// Iterate the catalog as owned [`Suggestion`] values.
pub fn entries() -> impl Iterator<Item = Suggestion> {
    CATALOG.iter().map(|(s, n)| Suggestion::new(*s, *n))
}

// =============================================================================
// Resolution
// =============================================================================

/// Resolve a raw typed value to a submitted entity.
///
/// Exact case-insensitive symbol match against the catalog; unknown input
/// synthesizes an entry with an empty name. Happens once, at submit time.
pub fn resolve(raw: &str) -> Suggestion {
    CATALOG
        .iter()
        .find(|(symbol, _)| symbol.eq_ignore_ascii_case(raw))
        .map(|(s, n)| Suggestion::new(*s, *n))
        .unwrap_or_else(|| Suggestion::new(raw, ""))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_symbol() {
        let stock = resolve("AAPL");
        assert_eq!(stock.symbol, "AAPL");
        assert_eq!(stock.name, "Apple Inc.");
    }

    #[test]
    fn test_resolve_case_insensitive() {
        let stock = resolve("aapl");
        assert_eq!(stock.symbol, "AAPL");
        assert_eq!(stock.name, "Apple Inc.");

        let stock = resolve("TsLa");
        assert_eq!(stock.symbol, "TSLA");
        assert_eq!(stock.name, "Tesla Inc.");
    }

    #[test]
    fn test_resolve_unknown_synthesizes() {
        let stock = resolve("ZZZZ");
        assert_eq!(stock.symbol, "ZZZZ");
        assert_eq!(stock.name, "");
    }

    #[test]
    fn test_resolve_does_not_prefix_match() {
        // "AAP" is a prefix of AAPL but resolution is exact-match only
        let stock = resolve("AAP");
        assert_eq!(stock.symbol, "AAP");
        assert_eq!(stock.name, "");
    }

    #[test]
    fn test_catalog_order_stable() {
        let all: Vec<Suggestion> = entries().collect();
        assert_eq!(all.len(), 10);
        assert_eq!(all[0].symbol, "AAPL");
        assert_eq!(all[9].symbol, "JNJ");
    }
}
