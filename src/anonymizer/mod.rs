//! Replacement strategy module
//!
//! Provides the strategies used to rewrite detected name spans.

pub mod marker;
pub mod mask;

pub use marker::MarkerStrategy;
pub use mask::MaskStrategy;

use crate::models::NameEntity;

/// Trait for replacement strategy implementations
pub trait Anonymizer: Send + Sync {
    /// Produce the replacement text for a detected entity
    fn replace(&self, entity: &NameEntity) -> String;
}
