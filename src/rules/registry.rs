#![forbid(unsafe_code)]

//! Registry of named rule sets
//!
//! The RuleSetRegistry is responsible for:
//! - Holding the built-in rule sets when asked to
//! - Loading rule set definitions from a directory of `.toml` files
//! - Providing access to rule sets by name

use crate::error::RuleSetError;
use crate::rules::RuleSet;
use crate::rules::builtin;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Registry for storing and managing rule sets, keyed by rule set name
#[derive(Debug, Clone, Default)]
pub struct RuleSetRegistry {
    rulesets: BTreeMap<String, RuleSet>,
}

impl RuleSetRegistry {
    /// Create a new empty RuleSetRegistry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with the built-in rule sets
    ///
    /// # Errors
    ///
    /// Returns `RuleSetError` if an embedded definition fails to parse.
    pub fn with_builtins() -> Result<Self, RuleSetError> {
        let mut registry = Self::new();
        for ruleset in builtin::load_builtin_rulesets()? {
            registry.register(ruleset)?;
        }
        Ok(registry)
    }

    /// Add a rule set, refusing to replace an existing one
    ///
    /// # Errors
    ///
    /// Returns `RuleSetError::InvalidDefinition` if a rule set with the same
    /// name is already registered.
    pub fn register(&mut self, ruleset: RuleSet) -> Result<(), RuleSetError> {
        if self.rulesets.contains_key(ruleset.name()) {
            return Err(RuleSetError::InvalidDefinition(format!(
                "Duplicate rule set name '{}'",
                ruleset.name()
            )));
        }
        self.insert(ruleset);
        Ok(())
    }

    /// Add a rule set, replacing any existing one with the same name
    ///
    /// Returns the replaced rule set, if there was one.
    pub fn insert(&mut self, ruleset: RuleSet) -> Option<RuleSet> {
        debug!("Registering rule set '{}'", ruleset.name());
        self.rulesets.insert(ruleset.name().to_string(), ruleset)
    }

    /// Remove a rule set by name
    pub fn remove(&mut self, name: &str) -> Option<RuleSet> {
        self.rulesets.remove(name)
    }

    /// Load every `.toml` rule set definition in a directory
    ///
    /// A missing directory is logged and treated as empty.
    ///
    /// # Errors
    ///
    /// Returns `RuleSetError` if:
    /// - The path exists but is not a directory
    /// - A directory entry cannot be read
    /// - A definition is invalid
    /// - A definition's name is already registered
    pub fn load_dir(&mut self, dir: &Path) -> Result<(), RuleSetError> {
        if !dir.exists() {
            warn!("Rule set directory does not exist: {}", dir.display());
            return Ok(());
        }

        if !dir.is_dir() {
            return Err(RuleSetError::InvalidDefinition(format!(
                "Path is not a directory: {}",
                dir.display()
            )));
        }

        let entries = fs::read_dir(dir).map_err(|e| {
            RuleSetError::InvalidDefinition(format!(
                "Failed to read directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        // Sorted so duplicate-name errors always blame the same file
        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                RuleSetError::InvalidDefinition(format!(
                    "Failed to read directory entry in {}: {}",
                    dir.display(),
                    e
                ))
            })?;

            let path = entry.path();
            if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml") {
                paths.push(path);
            }
        }
        paths.sort();

        for path in paths {
            let ruleset = RuleSet::from_path(&path)?;
            self.register(ruleset).map_err(|e| {
                RuleSetError::InvalidDefinition(format!("{} (in file {})", e, path.display()))
            })?;
        }

        Ok(())
    }

    /// Get a rule set by name
    pub fn get(&self, name: &str) -> Option<&RuleSet> {
        self.rulesets.get(name)
    }

    /// Get a rule set by name, failing if it is not registered
    ///
    /// # Errors
    ///
    /// Returns `RuleSetError::NotFound` for unknown names.
    pub fn require(&self, name: &str) -> Result<&RuleSet, RuleSetError> {
        self.get(name)
            .ok_or_else(|| RuleSetError::NotFound(name.to_string()))
    }

    /// Iterate over all rule sets in name order
    pub fn iter(&self) -> impl Iterator<Item = &RuleSet> {
        self.rulesets.values()
    }

    /// Iterate over registered names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rulesets.keys().map(String::as_str)
    }

    /// Get the number of rule sets in the registry
    pub fn len(&self) -> usize {
        self.rulesets.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.rulesets.is_empty()
    }
}
