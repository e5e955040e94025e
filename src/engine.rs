//! Validation engine and per-rule reporting

pub mod report;
pub mod validator;

pub use report::{RuleOutcome, ValidationReport};
pub use validator::Validator;
