use std::borrow::Borrow;

/// Provider ticker for one futures contract, e.g. `ES=F` or `DX-Y.NYB`.
/// Opaque: nothing checks it locally, a bad ticker is the provider's problem.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(ticker: impl Into<String>) -> Self {
        Self(ticker.into())
    }

    // The name we pass into the provider API (same as display name here)
    pub fn ticker(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(ticker: &str) -> Self {
        Self::new(ticker)
    }
}

// Lets HashMap<Symbol, _> be queried with a plain &str
impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn map_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(Symbol::from("GC=F"), 1);
        assert_eq!(map.get("GC=F"), Some(&1));
    }
}
