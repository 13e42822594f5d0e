//! Constant-marker replacement strategy

use super::Anonymizer;
use crate::models::NameEntity;

/// Replaces every detected span with a constant marker token
pub struct MarkerStrategy {
    marker: String,
}

impl MarkerStrategy {
    /// Create a new marker strategy
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }
}

impl Anonymizer for MarkerStrategy {
    fn replace(&self, _entity: &NameEntity) -> String {
        self.marker.clone()
    }
}
