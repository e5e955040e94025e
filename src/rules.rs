#![forbid(unsafe_code)]

//! Rule sets, the built-in table and the registry

pub mod builtin;
mod registry;
mod ruleset;

// Re-export core types
pub use registry::RuleSetRegistry;
pub use ruleset::RuleSet;
