#![forbid(unsafe_code)]

//! Core domain types for rulecheck

use crate::error::RuleSetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How per-rule results combine into one verdict
///
/// The textual form is exactly `"one"` (pass when any rule matches) or
/// `"all"` (pass when every rule matches). Matching is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Policy {
    /// At least one rule must match
    Any,
    /// Every rule must match
    #[default]
    All,
}

impl Policy {
    /// Returns the textual form of the policy
    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::Any => "one",
            Policy::All => "all",
        }
    }

    /// Reduces per-rule results to a single verdict
    ///
    /// Over zero results `All` yields `true` and `Any` yields `false`.
    /// Evaluation stops at the first result that decides the outcome.
    pub fn combine<I>(&self, results: I) -> bool
    where
        I: IntoIterator<Item = bool>,
    {
        let mut results = results.into_iter();
        match self {
            Policy::Any => results.any(|matched| matched),
            Policy::All => results.all(|matched| matched),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Policy {
    type Err = RuleSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one" => Ok(Policy::Any),
            "all" => Ok(Policy::All),
            other => Err(RuleSetError::InvalidPolicy(other.to_string())),
        }
    }
}

impl TryFrom<String> for Policy {
    type Error = RuleSetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Policy> for String {
    fn from(policy: Policy) -> Self {
        policy.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parse() {
        assert_eq!("one".parse::<Policy>().unwrap(), Policy::Any);
        assert_eq!("all".parse::<Policy>().unwrap(), Policy::All);
    }

    #[test]
    fn test_policy_parse_is_exact() {
        for bad in ["", "ONE", "All", " all", "any", "none", "invalid_search_type"] {
            let err = bad.parse::<Policy>().unwrap_err();
            assert!(
                matches!(err, RuleSetError::InvalidPolicy(ref value) if value == bad),
                "expected InvalidPolicy for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_policy_default_is_all() {
        assert_eq!(Policy::default(), Policy::All);
    }

    #[test]
    fn test_policy_display_round_trips() {
        for policy in [Policy::Any, Policy::All] {
            assert_eq!(policy.to_string().parse::<Policy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_combine_any() {
        assert!(Policy::Any.combine([false, true, false]));
        assert!(!Policy::Any.combine([false, false]));
    }

    #[test]
    fn test_combine_all() {
        assert!(Policy::All.combine([true, true]));
        assert!(!Policy::All.combine([true, false, true]));
    }

    #[test]
    fn test_combine_empty() {
        assert!(Policy::All.combine(std::iter::empty()));
        assert!(!Policy::Any.combine(std::iter::empty()));
    }

    #[test]
    fn test_combine_short_circuits() {
        let mut seen = 0;
        let verdict = Policy::Any.combine([true, false, false].into_iter().inspect(|_| seen += 1));
        assert!(verdict);
        assert_eq!(seen, 1);
    }
}
