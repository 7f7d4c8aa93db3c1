// ============================================================
// Layer 3 — Matching Strategy
// ============================================================
// The two ways noisy and clean lists can be reconciled:
//
//   sort → both sides sorted by path independently
//   dns  → pairs aligned by the numeric id in `fileid_<N>.wav`,
//          for datasets whose two sides come from different
//          source trees
//
// Parsed from a string so it can come straight from the CLI or
// a serialised config; anything else is InvalidStrategy.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::error::DatasetError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MatchStrategy {
    #[default]
    Sort,
    Dns,
}

impl MatchStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStrategy::Sort => "sort",
            MatchStrategy::Dns  => "dns",
        }
    }
}

impl FromStr for MatchStrategy {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sort" => Ok(MatchStrategy::Sort),
            "dns"  => Ok(MatchStrategy::Dns),
            other  => Err(DatasetError::InvalidStrategy(other.to_string())),
        }
    }
}

impl TryFrom<String> for MatchStrategy {
    type Error = DatasetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MatchStrategy> for String {
    fn from(strategy: MatchStrategy) -> Self {
        strategy.as_str().to_string()
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_known_strategies() {
        assert_eq!("sort".parse::<MatchStrategy>().unwrap(), MatchStrategy::Sort);
        assert_eq!("dns".parse::<MatchStrategy>().unwrap(),  MatchStrategy::Dns);
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let err = "natural".parse::<MatchStrategy>().unwrap_err();
        assert!(matches!(err, DatasetError::InvalidStrategy(ref s) if s == "natural"));
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&MatchStrategy::Dns).unwrap();
        assert_eq!(json, r#""dns""#);

        let back: MatchStrategy = serde_json::from_str(r#""sort""#).unwrap();
        assert_eq!(back, MatchStrategy::Sort);

        assert!(serde_json::from_str::<MatchStrategy>(r#""SORT""#).is_err());
    }
}
