//! Pattern library for name detection

use crate::error::{Error, Result};
use crate::models::EntityKind;
use once_cell::sync::OnceCell;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Shared, lazily compiled default registry. Compiled at most once per
/// process and read-only thereafter.
static DEFAULT_REGISTRY: OnceCell<Arc<PatternRegistry>> = OnceCell::new();

/// Pattern definition from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDefinition {
    /// Regex patterns for this category
    pub patterns: Vec<String>,
    /// Confidence score (0.0 - 1.0)
    pub confidence: f32,
    /// Entity category label
    pub category: String,
}

/// Compiled pattern with metadata
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Compiled regex
    pub regex: Regex,
    /// Entity kind matches are reported under
    pub kind: EntityKind,
    /// Confidence score
    pub confidence: f32,
}

/// Pattern library container
#[derive(Debug, Deserialize)]
struct PatternLibrary {
    patterns: HashMap<String, PatternDefinition>,
}

/// Pattern registry for name detection
pub struct PatternRegistry {
    patterns: Vec<CompiledPattern>,
}

impl PatternRegistry {
    /// Create a new pattern registry from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Configuration(format!(
                "Failed to read pattern library {}: {e}",
                path.as_ref().display()
            ))
        })?;

        Self::from_toml(&content)
    }

    /// Create a pattern registry from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: PatternLibrary = toml::from_str(content)?;

        let mut patterns = Vec::new();

        for (name, def) in library.patterns {
            let kind = Self::parse_kind(&def.category).map_err(|e| {
                Error::Configuration(format!("Invalid category in pattern '{name}': {e}"))
            })?;

            if !(0.0..=1.0).contains(&def.confidence) {
                return Err(Error::Configuration(format!(
                    "Invalid confidence in pattern '{}': {}",
                    name, def.confidence
                )));
            }

            for pattern_str in &def.patterns {
                let regex = Regex::new(pattern_str).map_err(|e| {
                    Error::Configuration(format!(
                        "Invalid regex in pattern '{name}': {pattern_str}: {e}"
                    ))
                })?;

                patterns.push(CompiledPattern {
                    regex,
                    kind,
                    confidence: def.confidence,
                });
            }
        }

        Ok(Self { patterns })
    }

    /// Create a registry with the built-in patterns
    pub fn default_patterns() -> Result<Self> {
        let default_toml = include_str!("../../patterns/name_patterns.toml");
        Self::from_toml(default_toml)
    }

    /// Get the process-wide shared default registry
    ///
    /// The built-in patterns are compiled on first use and the same handle
    /// is returned to every caller afterwards.
    pub fn shared_default() -> Result<Arc<Self>> {
        DEFAULT_REGISTRY
            .get_or_try_init(|| Self::default_patterns().map(Arc::new))
            .cloned()
    }

    /// Get all patterns
    pub fn all_patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    /// Parse a category label to an entity kind
    fn parse_kind(s: &str) -> Result<EntityKind> {
        match s.to_uppercase().as_str() {
            "PERSON" | "NAME" => Ok(EntityKind::Person),
            "PREDEFINED_NAME" | "DENY_LIST" => Ok(EntityKind::DenyListName),
            _ => Err(Error::Configuration(format!("Unknown entity category: {s}"))),
        }
    }
}
