//! Exact-match deny-list detector

use super::NameDetector;
use crate::error::{Error, Result};
use crate::models::{DetectionMethod, EntityKind, NameEntity};
use regex::Regex;

/// Exact-match recognizer over a fixed name list
///
/// Names are matched as whole words with full confidence, independent of
/// the pattern detector's scoring. Matching is case-sensitive unless
/// configured otherwise.
pub struct DenyListDetector {
    regex: Regex,
    names: usize,
}

impl DenyListDetector {
    /// Build a detector from a name list
    ///
    /// Entries are trimmed; empty entries are skipped. Returns `None` when
    /// no usable names remain, so an empty list simply disables the
    /// recognizer.
    pub fn from_names(names: &[String], case_insensitive: bool) -> Result<Option<Self>> {
        let mut cleaned: Vec<&str> = names
            .iter()
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .collect();

        if cleaned.is_empty() {
            return Ok(None);
        }

        cleaned.sort_unstable();
        cleaned.dedup();
        // Longest first: the regex crate picks the leftmost-first
        // alternative, so "Alice Smith" must come before "Alice".
        cleaned.sort_by_key(|n| std::cmp::Reverse(n.len()));

        let alternation = cleaned
            .iter()
            .map(|n| regex::escape(n))
            .collect::<Vec<_>>()
            .join("|");

        let flags = if case_insensitive { "(?i)" } else { "" };
        let pattern = format!(r"{flags}\b(?:{alternation})\b");

        let regex = Regex::new(&pattern).map_err(|e| {
            Error::Configuration(format!("Failed to compile deny list matcher: {e}"))
        })?;

        Ok(Some(Self {
            regex,
            names: cleaned.len(),
        }))
    }

    /// Number of distinct names matched by this detector
    pub fn name_count(&self) -> usize {
        self.names
    }
}

impl NameDetector for DenyListDetector {
    fn detect(&self, text: &str) -> Result<Vec<NameEntity>> {
        let entities = self
            .regex
            .find_iter(text)
            .map(|matched| {
                NameEntity::new(
                    EntityKind::DenyListName,
                    matched.as_str().to_string(),
                    matched.start(),
                    matched.end(),
                    DetectionMethod::DenyList,
                )
            })
            .collect();

        Ok(entities)
    }

    fn confidence_threshold(&self) -> f32 {
        1.0
    }
}
