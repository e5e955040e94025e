#![forbid(unsafe_code)]

//! Built-in rule sets embedded at compile time
//!
//! The definitions live in builtin-rulesets/ and are compiled into the crate
//! with `include_str!`, so the predefined table needs no files at runtime.
//! The shared table is parsed once, on first use, and never mutated.

use crate::error::RuleSetError;
use crate::rules::{RuleSet, RuleSetRegistry};
use once_cell::sync::Lazy;

/// Embedded built-in rule set definitions
const BUILTIN_RULESETS: &[(&str, &str)] = &[
    ("email", include_str!("../../builtin-rulesets/email.toml")),
    ("ipv4", include_str!("../../builtin-rulesets/ipv4.toml")),
    (
        "hex-color",
        include_str!("../../builtin-rulesets/hex-color.toml"),
    ),
    ("uuid", include_str!("../../builtin-rulesets/uuid.toml")),
    (
        "strong-password",
        include_str!("../../builtin-rulesets/strong-password.toml"),
    ),
];

static BUILTIN_REGISTRY: Lazy<Result<RuleSetRegistry, String>> =
    Lazy::new(|| RuleSetRegistry::with_builtins().map_err(|e| e.to_string()));

/// Parse all built-in rule sets from embedded resources
///
/// Every call returns fresh, independently mutable copies.
///
/// # Errors
///
/// Returns `RuleSetError::InvalidDefinition` if an embedded definition does
/// not parse, or declares a name other than the one it is listed under.
pub fn load_builtin_rulesets() -> Result<Vec<RuleSet>, RuleSetError> {
    let mut rulesets = Vec::with_capacity(BUILTIN_RULESETS.len());

    for (name, toml_content) in BUILTIN_RULESETS {
        let ruleset = RuleSet::from_toml(toml_content).map_err(|e| {
            RuleSetError::InvalidDefinition(format!(
                "Failed to parse built-in rule set '{}': {}",
                name, e
            ))
        })?;

        if ruleset.name() != *name {
            return Err(RuleSetError::InvalidDefinition(format!(
                "Built-in rule set '{}' declares name '{}'",
                name,
                ruleset.name()
            )));
        }

        rulesets.push(ruleset);
    }

    Ok(rulesets)
}

/// Names of the built-in rule sets, in declaration order
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTIN_RULESETS.iter().map(|(name, _)| *name)
}

/// Look up a shared built-in rule set by name
///
/// # Errors
///
/// Returns `RuleSetError::NotFound` for unknown names, or
/// `RuleSetError::InvalidDefinition` if the built-in table failed to load.
pub fn get(name: &str) -> Result<&'static RuleSet, RuleSetError> {
    match &*BUILTIN_REGISTRY {
        Ok(registry) => registry.require(name),
        Err(message) => Err(RuleSetError::InvalidDefinition(format!(
            "Built-in rule sets failed to load: {}",
            message
        ))),
    }
}

/// The built-in `email` rule set
pub fn email() -> Result<&'static RuleSet, RuleSetError> {
    get("email")
}
