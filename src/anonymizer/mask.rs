//! Length-preserving mask replacement strategy

use super::Anonymizer;
use crate::models::NameEntity;

/// Replaces every detected span with a same-length run of `*`
///
/// Length is counted in characters, so masked output stays visually
/// aligned with the input.
pub struct MaskStrategy;

impl MaskStrategy {
    /// Create a new mask strategy
    pub fn new() -> Self {
        Self
    }
}

impl Default for MaskStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Anonymizer for MaskStrategy {
    fn replace(&self, entity: &NameEntity) -> String {
        "*".repeat(entity.text.chars().count())
    }
}
