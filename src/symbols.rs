//! Currency code canonicalization.

use std::collections::HashMap;

/// Maps venue-specific currency identifiers to canonical codes.
///
/// Canonicalization is uppercasing followed by an alias lookup. The table is
/// read-only after construction and safe to share across concurrent calls.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    aliases: HashMap<String, String>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::with_aliases([("XBT", "BTC"), ("BCC", "BCH"), ("DRK", "DASH")])
    }
}

impl SymbolTable {
    /// An empty table: canonicalization is uppercasing only.
    pub fn empty() -> Self {
        SymbolTable {
            aliases: HashMap::new(),
        }
    }

    /// Build a table from `(venue id, canonical code)` pairs. Keys are
    /// matched after uppercasing.
    pub fn with_aliases<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        SymbolTable {
            aliases: pairs
                .into_iter()
                .map(|(k, v)| (k.to_uppercase(), v.to_string()))
                .collect(),
        }
    }

    /// Canonical code for a venue currency identifier.
    pub fn canonicalize(&self, id: &str) -> String {
        let upper = id.to_uppercase();
        match self.aliases.get(&upper) {
            Some(code) => code.clone(),
            None => upper,
        }
    }
}
