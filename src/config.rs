//! Engine configuration

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default replacement marker written over every detected name
pub const DEFAULT_MARKER: &str = "<ANONYMIZED>";

/// Default confidence threshold; patterns scoring below it are ignored
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.7;

/// Replacement strategy applied to detected spans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplacementStrategy {
    /// Replace every span with the constant marker
    Marker,
    /// Replace every span with a same-length run of `*`
    Mask,
}

impl Default for ReplacementStrategy {
    fn default() -> Self {
        Self::Marker
    }
}

/// Engine configuration
///
/// Immutable once handed to [`AnonymizerEngine::new`](crate::AnonymizerEngine::new);
/// the engine never mutates it and callers may freely share the engine
/// across threads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Names to always treat as detectable entities, regardless of
    /// pattern confidence
    #[serde(default)]
    pub deny_list: Vec<String>,

    /// Match deny-list names case-insensitively
    #[serde(default)]
    pub case_insensitive: bool,

    /// Replacement marker used by the `Marker` strategy
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Replacement strategy
    #[serde(default)]
    pub strategy: ReplacementStrategy,

    /// Patterns scoring below this threshold are skipped
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f32,

    /// Optional TOML pattern library overriding the built-in patterns
    pub pattern_library: Option<PathBuf>,
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_confidence_threshold() -> f32 {
    DEFAULT_CONFIDENCE_THRESHOLD
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            deny_list: Vec::new(),
            case_insensitive: false,
            marker: default_marker(),
            strategy: ReplacementStrategy::default(),
            confidence_threshold: default_confidence_threshold(),
            pattern_library: None,
        }
    }
}

impl EngineConfig {
    /// Create a default configuration carrying the given deny list
    pub fn with_deny_list(deny_list: Vec<String>) -> Self {
        Self {
            deny_list,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.marker.trim().is_empty() {
            return Err(Error::Configuration(
                "Replacement marker must not be empty".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(Error::Configuration(format!(
                "Confidence threshold must be within [0.0, 1.0], got {}",
                self.confidence_threshold
            )));
        }

        if let Some(ref path) = self.pattern_library {
            if !path.exists() {
                return Err(Error::Configuration(format!(
                    "Pattern library file not found: {}",
                    path.display()
                )));
            }
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                return Err(Error::Configuration(format!(
                    "Pattern library must be a TOML file: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("NAMEVEIL_MARKER") {
            self.marker = val;
        }

        if let Ok(val) = std::env::var("NAMEVEIL_CASE_INSENSITIVE") {
            self.case_insensitive = val.parse().map_err(|_| {
                Error::Configuration(format!("Invalid NAMEVEIL_CASE_INSENSITIVE value: {val}"))
            })?;
        }

        if let Ok(val) = std::env::var("NAMEVEIL_CONFIDENCE_THRESHOLD") {
            self.confidence_threshold = val.parse().map_err(|_| {
                Error::Configuration(format!("Invalid NAMEVEIL_CONFIDENCE_THRESHOLD value: {val}"))
            })?;
        }

        if let Ok(val) = std::env::var("NAMEVEIL_STRATEGY") {
            self.strategy = match val.to_lowercase().as_str() {
                "marker" => ReplacementStrategy::Marker,
                "mask" => ReplacementStrategy::Mask,
                _ => {
                    return Err(Error::Configuration(format!(
                        "Invalid NAMEVEIL_STRATEGY: {val}"
                    )))
                }
            };
        }

        if let Ok(val) = std::env::var("NAMEVEIL_PATTERN_LIBRARY") {
            self.pattern_library = Some(PathBuf::from(val));
        }

        Ok(())
    }
}

/// Load a deny list from a flat text resource
///
/// One name per line, trimmed of surrounding whitespace; empty lines are
/// skipped. Any non-empty line is taken as a literal name.
pub fn load_deny_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Io(format!("Failed to read deny list {}: {e}", path.display())))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
