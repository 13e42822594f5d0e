//! Anonymization run reporting
//!
//! Summarizes a column pass: how many cells were rewritten or passed
//! through, which entity kinds were found, and any diagnostics collected
//! along the way.

use crate::error::Result;
use crate::models::{AnonymizedText, EntityKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maximum number of warnings retained in a report
const MAX_WARNINGS: usize = 25;

/// Report over one column anonymization pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizationReport {
    /// When the pass started
    pub started_at: DateTime<Utc>,

    /// Text cells that went through the anonymizer
    pub cells_processed: usize,

    /// Cells passed through unchanged (missing, non-text, empty text)
    pub cells_skipped: usize,

    /// Total entities detected and replaced
    pub total_detections: usize,

    /// Detections by entity kind
    pub detections_by_kind: HashMap<EntityKind, usize>,

    /// Diagnostics collected during the pass (capped)
    pub warnings: Vec<String>,
}

impl AnonymizationReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            cells_processed: 0,
            cells_skipped: 0,
            total_detections: 0,
            detections_by_kind: HashMap::new(),
            warnings: Vec::new(),
        }
    }

    /// Record the result of one anonymized text
    pub fn add_text(&mut self, result: &AnonymizedText) {
        self.cells_processed += 1;
        self.total_detections += result.detections.len();
        for entity in &result.detections {
            *self.detections_by_kind.entry(entity.kind).or_insert(0) += 1;
        }
    }

    /// Record a cell passed through unchanged
    pub fn add_skipped(&mut self) {
        self.cells_skipped += 1;
    }

    /// Add a warning; warnings beyond the cap are dropped
    pub fn add_warning(&mut self, warning: String) {
        if self.warnings.len() < MAX_WARNINGS {
            self.warnings.push(warning);
        }
    }

    /// Check if any name was detected during the pass
    pub fn has_detections(&self) -> bool {
        self.total_detections > 0
    }

    /// Format the report as pretty-printed JSON
    pub fn format_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for AnonymizationReport {
    fn default() -> Self {
        Self::new()
    }
}
