//! Name detection module
//!
//! Provides the trait-based detection interface and the two recognizers:
//! confidence-scored pattern matching and exact deny-list matching.

pub mod deny_list;
pub mod pattern;
pub mod patterns;

pub use deny_list::DenyListDetector;
pub use pattern::PatternDetector;
pub use patterns::{CompiledPattern, PatternRegistry};

use crate::error::Result;
use crate::models::NameEntity;

/// Trait for name detection implementations
pub trait NameDetector: Send + Sync {
    /// Detect name entities in a text
    fn detect(&self, text: &str) -> Result<Vec<NameEntity>>;

    /// Get the confidence threshold for this detector
    fn confidence_threshold(&self) -> f32;
}
