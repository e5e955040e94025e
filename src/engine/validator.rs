#![forbid(unsafe_code)]

//! Applies a bound rule set to input strings
//!
//! A `Validator` borrows exactly one `RuleSet`. It never copies or mutates
//! it, so any number of validators can share one rule set, including the
//! `'static` built-ins.
//!
//! Patterns are matched as written. Anchoring to the whole input is the
//! pattern's job (`^...$`), not the validator's.

use crate::engine::report::{RuleOutcome, ValidationReport};
use crate::error::ValidationError;
use crate::rules::RuleSet;
use log::{debug, trace};

/// Evaluates input strings against a bound `RuleSet`
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator<'a> {
    ruleset: Option<&'a RuleSet>,
}

impl<'a> Validator<'a> {
    /// Creates a validator with no rule set bound
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator already bound to `ruleset`
    pub fn for_ruleset(ruleset: &'a RuleSet) -> Self {
        let mut validator = Self::new();
        validator.set_ruleset(ruleset);
        validator
    }

    /// Binds the rule set used by subsequent calls, replacing any previous one
    pub fn set_ruleset(&mut self, ruleset: &'a RuleSet) -> &mut Self {
        debug!(
            "Validator bound to rule set '{}' ({} rule(s), policy '{}')",
            ruleset.name(),
            ruleset.len(),
            ruleset.policy()
        );
        self.ruleset = Some(ruleset);
        self
    }

    /// Returns the bound rule set, if any
    pub fn ruleset(&self) -> Option<&'a RuleSet> {
        self.ruleset
    }

    /// Checks whether a rule set is bound
    pub fn is_configured(&self) -> bool {
        self.ruleset.is_some()
    }

    /// Checks `input` against the bound rule set
    ///
    /// Under `Policy::Any` the input passes if at least one rule matches;
    /// under `Policy::All` it passes if every rule matches. A rule set with
    /// no rules passes everything under `All` and nothing under `Any`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NotConfigured` if no rule set is bound.
    pub fn validate(&self, input: &str) -> Result<bool, ValidationError> {
        let ruleset = self.bound()?;
        let passed = ruleset
            .policy()
            .combine(ruleset.rules().map(|(_, pattern)| pattern.is_match(input)));

        trace!(
            "Rule set '{}' {} input of {} byte(s)",
            ruleset.name(),
            if passed { "accepted" } else { "rejected" },
            input.len()
        );

        Ok(passed)
    }

    /// Checks `input` against every rule and reports each outcome
    ///
    /// Unlike `validate`, this never stops early, so the report covers all
    /// rules. Its `passed` field always agrees with `validate`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NotConfigured` if no rule set is bound.
    pub fn evaluate(&self, input: &str) -> Result<ValidationReport, ValidationError> {
        let ruleset = self.bound()?;

        let outcomes: Vec<RuleOutcome> = ruleset
            .rules()
            .map(|(name, pattern)| {
                let matched = pattern.is_match(input);
                trace!("Rule '{}' in '{}': matched={}", name, ruleset.name(), matched);
                RuleOutcome {
                    rule: name.to_string(),
                    matched,
                }
            })
            .collect();

        let passed = ruleset
            .policy()
            .combine(outcomes.iter().map(|outcome| outcome.matched));

        Ok(ValidationReport {
            ruleset: ruleset.name().to_string(),
            policy: ruleset.policy(),
            outcomes,
            passed,
        })
    }

    fn bound(&self) -> Result<&'a RuleSet, ValidationError> {
        self.ruleset.ok_or(ValidationError::NotConfigured)
    }
}
