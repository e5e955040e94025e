//! Test utilities for rulecheck integration tests

#![allow(dead_code)]

use rulecheck::RuleSet;
use std::path::PathBuf;

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Path to a rule set fixture
pub fn fixture_path(parts: &[&str]) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("rulesets");
    for part in parts {
        path = path.join(part);
    }
    path
}

/// Build a rule set from `(name, pattern)` pairs and a textual policy
pub fn build_ruleset(name: &str, rules: &[(&str, &str)], policy: &str) -> TestResult<RuleSet> {
    let mut ruleset = RuleSet::named(name);
    for (rule_name, pattern) in rules {
        ruleset.add_pattern(rule_name, pattern)?;
    }
    ruleset.try_set_policy(policy)?;
    Ok(ruleset)
}

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Extract Some value or panic with context
#[macro_export]
macro_rules! assert_some {
    ($expr:expr) => {
        match $expr {
            Some(v) => v,
            None => panic!("assertion failed: expected Some, got None"),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Some(v) => v,
            None => panic!("{}: got None", $msg),
        }
    };
}
