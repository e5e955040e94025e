#![forbid(unsafe_code)]

//! Structured results of a validation run

use crate::types::Policy;
use serde::Serialize;

/// Whether a single rule matched the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    /// Name of the rule within its rule set
    pub rule: String,

    /// True if the rule's pattern matched
    pub matched: bool,
}

/// Per-rule outcomes for one input plus the combined verdict
///
/// Outcomes are listed in rule-name order and cover every rule in the set,
/// even where the verdict was already decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Name of the rule set that was applied
    pub ruleset: String,

    /// Policy used to combine the outcomes
    pub policy: Policy,

    /// One entry per rule
    pub outcomes: Vec<RuleOutcome>,

    /// Combined verdict
    pub passed: bool,
}

impl ValidationReport {
    /// Names of the rules that matched
    pub fn matched_rules(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.matched)
            .map(|outcome| outcome.rule.as_str())
    }

    /// Names of the rules that did not match
    pub fn failed_rules(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter(|outcome| !outcome.matched)
            .map(|outcome| outcome.rule.as_str())
    }
}
