//! Detected entity data models

use serde::{Deserialize, Serialize};

/// Kind of name entity a detector can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    /// Name found by the built-in pattern recognizer
    Person,
    /// Name found by exact match against the caller-supplied deny list
    #[serde(rename = "PREDEFINED_NAME")]
    DenyListName,
}

impl EntityKind {
    /// Get the wire label for the kind
    pub fn label(&self) -> &'static str {
        match self {
            Self::Person => "PERSON",
            Self::DenyListName => "PREDEFINED_NAME",
        }
    }
}

/// Detection method used to identify a name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    /// Confidence-scored regex pattern matching
    Pattern,
    /// Exact deny-list matching
    DenyList,
}

/// Detected name entity: a span of the input text plus metadata
///
/// Offsets are byte offsets into the scanned text and always fall on
/// character boundaries (they come from regex match positions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameEntity {
    /// Kind of entity
    pub kind: EntityKind,
    /// Matched text
    pub text: String,
    /// Start offset in the input
    pub start: usize,
    /// End offset in the input (exclusive)
    pub end: usize,
    /// Confidence score (0.0 - 1.0)
    pub confidence: f32,
    /// Detection method used
    pub method: DetectionMethod,
}

impl NameEntity {
    /// Create a new entity with full confidence
    pub fn new(
        kind: EntityKind,
        text: String,
        start: usize,
        end: usize,
        method: DetectionMethod,
    ) -> Self {
        Self {
            kind,
            text,
            start,
            end,
            confidence: 1.0,
            method,
        }
    }

    /// Set the confidence score, clamped to [0, 1]
    pub fn set_confidence(&mut self, confidence: f32) {
        self.confidence = confidence.clamp(0.0, 1.0);
    }

    /// Span length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span is empty
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether two spans overlap
    pub fn overlaps(&self, other: &NameEntity) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Result of anonymizing one text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizedText {
    /// Output text with every surviving span replaced
    pub text: String,
    /// Entities that were detected and replaced, in input order
    pub detections: Vec<NameEntity>,
}

impl AnonymizedText {
    /// Get total number of detections
    pub fn total_detections(&self) -> usize {
        self.detections.len()
    }

    /// Check if any name was detected
    pub fn has_detections(&self) -> bool {
        !self.detections.is_empty()
    }
}
