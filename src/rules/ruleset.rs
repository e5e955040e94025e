#![forbid(unsafe_code)]

//! Named collections of regex rules
//!
//! A `RuleSet` pairs a name with one or more compiled patterns and the
//! `Policy` that decides how their results combine. Rule sets are built up
//! through chained `&mut self` mutators and then handed, read-only, to a
//! `Validator`.

use crate::error::RuleSetError;
use crate::types::Policy;
use log::debug;
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// TOML structure for rule set definitions
///
/// This is the format of the files under builtin-rulesets/ and of any
/// definitions loaded through `RuleSetRegistry::load_dir`.
#[derive(Debug, Deserialize)]
struct RuleSetDefinition {
    ruleset: RuleSetSection,
    #[serde(default)]
    rules: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct RuleSetSection {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    policy: Option<String>,
}

/// A named collection of regex rules plus a combination policy
///
/// Rules are keyed by name; adding a rule under an existing name replaces
/// it. Rules are kept in name order so evaluation is deterministic.
///
/// Sharing a `RuleSet` by reference across threads is safe. Mutating one
/// that is already shared requires the caller to synchronise access.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    name: String,
    description: Option<String>,
    rules: BTreeMap<String, Regex>,
    policy: Policy,
}

impl RuleSet {
    /// Creates an empty, unnamed rule set with the `All` policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty rule set with the given name
    pub fn named(name: impl Into<String>) -> Self {
        let mut ruleset = Self::new();
        ruleset.set_name(name);
        ruleset
    }

    /// Parse a RuleSet from TOML content
    ///
    /// # Errors
    ///
    /// Returns `RuleSetError::InvalidDefinition` if:
    /// - TOML syntax is invalid
    /// - The `[ruleset]` table or its `name` is missing
    /// - The name is empty
    /// - The policy is not "one" or "all"
    ///
    /// Returns `RuleSetError::InvalidRegex` if a pattern does not compile.
    pub fn from_toml(content: &str) -> Result<Self, RuleSetError> {
        let def: RuleSetDefinition = toml::from_str(content).map_err(|e| {
            RuleSetError::InvalidDefinition(format!("Failed to parse TOML: {}", e))
        })?;

        if def.ruleset.name.trim().is_empty() {
            return Err(RuleSetError::InvalidDefinition(
                "Rule set name must not be empty".to_string(),
            ));
        }

        let policy = match def.ruleset.policy.as_deref() {
            Some(text) => text.parse::<Policy>().map_err(|e| {
                RuleSetError::InvalidDefinition(format!(
                    "Rule set '{}': {}",
                    def.ruleset.name, e
                ))
            })?,
            None => Policy::default(),
        };

        let mut ruleset = RuleSet::named(def.ruleset.name);
        ruleset.description = def.ruleset.description;
        ruleset.set_policy(policy);

        for (rule_name, pattern) in &def.rules {
            ruleset.add_pattern(rule_name, pattern)?;
        }

        debug!(
            "Loaded rule set '{}' with {} rule(s), policy '{}'",
            ruleset.name,
            ruleset.len(),
            ruleset.policy
        );

        Ok(ruleset)
    }

    /// Parse a RuleSet from a TOML file path
    ///
    /// # Errors
    ///
    /// Returns `RuleSetError` if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, RuleSetError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RuleSetError::InvalidDefinition(format!("Failed to read file {:?}: {}", path, e))
        })?;
        Self::from_toml(&content)
    }

    /// Sets the display name
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// Sets or clears the human-readable description
    pub fn set_description(&mut self, description: Option<String>) -> &mut Self {
        self.description = description;
        self
    }

    /// Inserts a compiled rule, replacing any rule with the same name
    pub fn add_rule(&mut self, rule_name: impl Into<String>, pattern: Regex) -> &mut Self {
        let rule_name = rule_name.into();
        debug!(
            "Rule set '{}': adding rule '{}' with pattern '{}'",
            self.name,
            rule_name,
            pattern.as_str()
        );
        self.rules.insert(rule_name, pattern);
        self
    }

    /// Compiles `pattern` and inserts it under `rule_name`
    ///
    /// # Errors
    ///
    /// Returns `RuleSetError::InvalidRegex` if the pattern does not compile.
    /// The rule set is left unchanged in that case.
    pub fn add_pattern(&mut self, rule_name: &str, pattern: &str) -> Result<&mut Self, RuleSetError> {
        let regex = Regex::new(pattern).map_err(|e| RuleSetError::InvalidRegex {
            rule: rule_name.to_string(),
            message: format!("Failed to compile pattern '{}': {}", pattern, e),
        })?;
        Ok(self.add_rule(rule_name, regex))
    }

    /// Removes the rule with the given name; absent names are ignored
    pub fn remove_rule(&mut self, rule_name: &str) -> &mut Self {
        if self.rules.remove(rule_name).is_some() {
            debug!("Rule set '{}': removed rule '{}'", self.name, rule_name);
        }
        self
    }

    /// Sets the combination policy
    pub fn set_policy(&mut self, policy: Policy) -> &mut Self {
        self.policy = policy;
        self
    }

    /// Sets the combination policy from its textual form
    ///
    /// # Errors
    ///
    /// Returns `RuleSetError::InvalidPolicy` unless `policy` is exactly
    /// "one" or "all". The current policy is kept in that case.
    pub fn try_set_policy(&mut self, policy: &str) -> Result<&mut Self, RuleSetError> {
        let policy = policy.parse::<Policy>()?;
        Ok(self.set_policy(policy))
    }

    /// Returns the display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description, if any
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the combination policy
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Looks up a rule by name
    pub fn rule(&self, rule_name: &str) -> Option<&Regex> {
        self.rules.get(rule_name)
    }

    /// Checks whether a rule with the given name exists
    pub fn contains_rule(&self, rule_name: &str) -> bool {
        self.rules.contains_key(rule_name)
    }

    /// Iterates over rule names in order
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Iterates over `(name, pattern)` pairs in name order
    pub fn rules(&self) -> impl Iterator<Item = (&str, &Regex)> {
        self.rules.iter().map(|(name, regex)| (name.as_str(), regex))
    }

    /// Number of rules in the set
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Checks whether the set has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regex(pattern: &str) -> Regex {
        Regex::new(pattern).unwrap()
    }

    #[test]
    fn test_new_ruleset_defaults() {
        let ruleset = RuleSet::new();
        assert_eq!(ruleset.name(), "");
        assert_eq!(ruleset.policy(), Policy::All);
        assert!(ruleset.is_empty());
        assert!(ruleset.description().is_none());
    }

    #[test]
    fn test_fluent_chain() {
        let mut ruleset = RuleSet::new();
        ruleset
            .set_name("custom")
            .add_rule("pattern1", regex(r"^\d+$"))
            .add_rule("pattern2", regex(r"^[a-zA-Z]+$"))
            .try_set_policy("one")
            .unwrap();

        assert_eq!(ruleset.name(), "custom");
        assert_eq!(ruleset.len(), 2);
        assert_eq!(ruleset.policy(), Policy::Any);
    }

    #[test]
    fn test_add_rule_overwrites_same_name() {
        let mut ruleset = RuleSet::named("overwrite");
        ruleset
            .add_rule("check", regex("^a$"))
            .add_rule("check", regex("^b$"));

        assert_eq!(ruleset.len(), 1);
        assert_eq!(ruleset.rule("check").unwrap().as_str(), "^b$");
    }

    #[test]
    fn test_add_pattern_invalid_regex_leaves_set_unchanged() {
        let mut ruleset = RuleSet::named("bad");
        let err = ruleset.add_pattern("broken", "[unclosed").unwrap_err();
        assert!(matches!(err, RuleSetError::InvalidRegex { ref rule, .. } if rule == "broken"));
        assert!(ruleset.is_empty());
    }

    #[test]
    fn test_remove_rule() {
        let mut ruleset = RuleSet::named("email");
        ruleset.add_rule("email", regex(r"^.+@.+$"));
        ruleset.remove_rule("email");
        assert!(!ruleset.contains_rule("email"));
        assert_eq!(ruleset.rule_names().count(), 0);
    }

    #[test]
    fn test_remove_missing_rule_is_noop() {
        let mut ruleset = RuleSet::named("keep");
        ruleset.add_rule("keep", regex("x"));
        ruleset.remove_rule("absent").remove_rule("absent");
        assert_eq!(ruleset.rule_names().collect::<Vec<_>>(), vec!["keep"]);
    }

    #[test]
    fn test_try_set_policy_rejects_and_keeps_previous() {
        let mut ruleset = RuleSet::new();
        ruleset.try_set_policy("one").unwrap();

        let err = ruleset.try_set_policy("invalid_search_type").unwrap_err();
        assert!(matches!(err, RuleSetError::InvalidPolicy(_)));
        assert_eq!(ruleset.policy(), Policy::Any);
    }

    #[test]
    fn test_rules_iterate_in_name_order() {
        let mut ruleset = RuleSet::new();
        ruleset
            .add_rule("zeta", regex("z"))
            .add_rule("alpha", regex("a"))
            .add_rule("mid", regex("m"));

        let names: Vec<&str> = ruleset.rules().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_from_toml_simple() {
        let toml = r#"
[ruleset]
name = "digits"
description = "Only digits"
policy = "one"

[rules]
digits = '^\d+$'
"#;

        let ruleset = RuleSet::from_toml(toml).unwrap();
        assert_eq!(ruleset.name(), "digits");
        assert_eq!(ruleset.description(), Some("Only digits"));
        assert_eq!(ruleset.policy(), Policy::Any);
        assert!(ruleset.rule("digits").unwrap().is_match("12345"));
    }

    #[test]
    fn test_from_toml_policy_defaults_to_all() {
        let toml = r#"
[ruleset]
name = "defaults"

[rules]
any = '.'
"#;

        let ruleset = RuleSet::from_toml(toml).unwrap();
        assert_eq!(ruleset.policy(), Policy::All);
        assert!(ruleset.description().is_none());
    }

    #[test]
    fn test_from_toml_without_rules() {
        let toml = r#"
[ruleset]
name = "empty"
"#;

        let ruleset = RuleSet::from_toml(toml).unwrap();
        assert!(ruleset.is_empty());
    }

    #[test]
    fn test_from_toml_invalid_policy() {
        let toml = r#"
[ruleset]
name = "bad-policy"
policy = "sometimes"
"#;

        let err = RuleSet::from_toml(toml).unwrap_err();
        assert!(matches!(err, RuleSetError::InvalidDefinition(_)));
        assert!(err.to_string().contains("sometimes"));
    }

    #[test]
    fn test_from_toml_invalid_regex() {
        let toml = r#"
[ruleset]
name = "bad-regex"

[rules]
broken = '[unclosed'
"#;

        let err = RuleSet::from_toml(toml).unwrap_err();
        assert!(matches!(err, RuleSetError::InvalidRegex { .. }));
    }

    #[test]
    fn test_from_toml_missing_name() {
        let toml = r#"
[ruleset]
policy = "all"
"#;

        let err = RuleSet::from_toml(toml).unwrap_err();
        assert!(matches!(err, RuleSetError::InvalidDefinition(_)));
    }

    #[test]
    fn test_from_toml_empty_name() {
        let toml = r#"
[ruleset]
name = "  "
"#;

        let err = RuleSet::from_toml(toml).unwrap_err();
        assert!(matches!(err, RuleSetError::InvalidDefinition(_)));
    }

    #[test]
    fn test_ruleset_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<RuleSet>();
        assert_sync::<RuleSet>();
    }
}
