#![forbid(unsafe_code)]

//! rulecheck: named regex rule sets and a validator to apply them
//!
//! A [`RuleSet`] holds named patterns and a [`Policy`] deciding whether any
//! or all of them must match. A [`Validator`] borrows one rule set and checks
//! input strings against it.
//!
//! ```
//! use rulecheck::{RuleSet, Validator};
//!
//! # fn main() -> Result<(), rulecheck::RulecheckError> {
//! let mut ruleset = RuleSet::named("code");
//! ruleset
//!     .add_pattern("digits", r"^\d+$")?
//!     .add_pattern("letters", r"^[a-zA-Z]+$")?
//!     .try_set_policy("one")?;
//!
//! let validator = Validator::for_ruleset(&ruleset);
//! assert!(validator.validate("123")?);
//! assert!(!validator.validate("123abc")?);
//!
//! let email = Validator::for_ruleset(rulecheck::builtin::email()?);
//! assert!(email.validate("test@example.com")?);
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod error;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{RuleSetError, RulecheckError, ValidationError};

// Re-export core types for convenient access
pub use engine::{RuleOutcome, ValidationReport, Validator};
pub use rules::{RuleSet, RuleSetRegistry, builtin};
pub use types::Policy;
