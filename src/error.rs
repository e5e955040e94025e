//! Error types for rulecheck
//!
//! Rule-set construction and validation fail in different ways, so each has
//! its own error enum. `RulecheckError` wraps both for callers that want a
//! single type.

/// Errors raised while building, parsing or looking up rule sets
#[derive(Debug, thiserror::Error)]
pub enum RuleSetError {
    /// Policy text other than "one" or "all"
    #[error("Invalid policy '{0}': expected \"one\" or \"all\"")]
    InvalidPolicy(String),

    /// A rule pattern that does not compile
    #[error("Invalid regex pattern for rule '{rule}': {message}")]
    InvalidRegex { rule: String, message: String },

    /// Malformed rule-set definition
    #[error("Invalid rule set definition: {0}")]
    InvalidDefinition(String),

    /// Rule set not found
    #[error("Rule set not found: {0}")]
    NotFound(String),
}

/// Errors raised while validating input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// `validate` was called before a rule set was bound
    #[error("Validator has no rule set bound")]
    NotConfigured,
}

/// Top-level error type for rulecheck
#[derive(Debug, thiserror::Error)]
pub enum RulecheckError {
    /// Rule set error
    #[error("Rule set error: {0}")]
    RuleSet(#[from] RuleSetError),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
