//! Pattern-based name detector

use super::{NameDetector, PatternRegistry};
use crate::error::Result;
use crate::models::{DetectionMethod, NameEntity};
use std::sync::Arc;

/// Confidence-scored pattern detector
///
/// Scans text with every registry pattern at or above the configured
/// threshold and reports matches under the pattern's entity kind.
pub struct PatternDetector {
    registry: Arc<PatternRegistry>,
    confidence_threshold: f32,
}

impl PatternDetector {
    /// Create a detector over a pattern registry
    pub fn new(registry: Arc<PatternRegistry>, confidence_threshold: f32) -> Self {
        Self {
            registry,
            confidence_threshold: confidence_threshold.clamp(0.0, 1.0),
        }
    }
}

impl NameDetector for PatternDetector {
    fn detect(&self, text: &str) -> Result<Vec<NameEntity>> {
        let mut entities = Vec::new();

        for pattern in self.registry.all_patterns() {
            if pattern.confidence < self.confidence_threshold {
                continue;
            }

            for matched in pattern.regex.find_iter(text) {
                let mut entity = NameEntity::new(
                    pattern.kind,
                    matched.as_str().to_string(),
                    matched.start(),
                    matched.end(),
                    DetectionMethod::Pattern,
                );
                entity.set_confidence(pattern.confidence);
                entities.push(entity);
            }
        }

        Ok(entities)
    }

    fn confidence_threshold(&self) -> f32 {
        self.confidence_threshold
    }
}
