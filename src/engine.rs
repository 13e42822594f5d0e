//! Main anonymization engine
//!
//! This module provides the core [`AnonymizerEngine`] that combines the
//! built-in pattern recognizer with an optional deny-list recognizer and
//! rewrites every detected span.
//!
//! # Examples
//!
//! ```
//! use nameveil::{AnonymizerEngine, EngineConfig};
//!
//! # fn example() -> nameveil::Result<()> {
//! let config = EngineConfig::with_deny_list(vec!["Alice Smith".to_string()]);
//! let engine = AnonymizerEngine::new(config)?;
//!
//! let result = engine.anonymize_text("Alice Smith called John today.")?;
//! assert_eq!(result.text, "<ANONYMIZED> called John today.");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use crate::anonymizer::{Anonymizer, MarkerStrategy, MaskStrategy};
use crate::config::{EngineConfig, ReplacementStrategy};
use crate::detector::{DenyListDetector, NameDetector, PatternDetector, PatternRegistry};
use crate::error::{Error, Result};
use crate::models::{AnonymizedText, DetectionMethod, NameEntity};
use crate::report::AnonymizationReport;
use crate::table::{Cell, Table};
use std::cmp::Ordering;
use std::sync::Arc;

/// Main anonymization engine
///
/// Immutable after construction; detection and replacement are pure
/// functions of the input text, so the engine can be shared freely
/// across threads.
pub struct AnonymizerEngine {
    config: EngineConfig,
    detectors: Vec<Box<dyn NameDetector>>,
    strategy: Box<dyn Anonymizer>,
}

impl AnonymizerEngine {
    /// Create a new engine from a configuration
    ///
    /// Validates the configuration, obtains the pattern registry (the
    /// built-in registry is compiled at most once per process), and adds
    /// the deny-list recognizer when the list is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`](crate::Error::Configuration) if
    /// validation fails or a pattern library cannot be loaded.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        let registry = match config.pattern_library {
            Some(ref path) => Arc::new(PatternRegistry::from_file(path)?),
            None => PatternRegistry::shared_default()?,
        };

        let mut detectors: Vec<Box<dyn NameDetector>> = vec![Box::new(PatternDetector::new(
            registry,
            config.confidence_threshold,
        ))];

        if let Some(deny) =
            DenyListDetector::from_names(&config.deny_list, config.case_insensitive)?
        {
            tracing::debug!(names = deny.name_count(), "Deny-list recognizer enabled");
            detectors.push(Box::new(deny));
        }

        let strategy: Box<dyn Anonymizer> = match config.strategy {
            ReplacementStrategy::Marker => Box::new(MarkerStrategy::new(config.marker.clone())),
            ReplacementStrategy::Mask => Box::new(MaskStrategy::new()),
        };

        tracing::debug!(
            threshold = config.confidence_threshold,
            case_insensitive = config.case_insensitive,
            strategy = ?config.strategy,
            "Anonymizer engine initialized"
        );

        Ok(Self {
            config,
            detectors,
            strategy,
        })
    }

    /// Anonymize a single text
    ///
    /// Runs every configured detector, resolves overlapping spans, and
    /// rewrites the surviving spans with the configured strategy. A single
    /// synchronous pass; empty input and input without detections are
    /// returned unchanged.
    pub fn anonymize_text(&self, text: &str) -> Result<AnonymizedText> {
        if text.is_empty() {
            return Ok(AnonymizedText {
                text: String::new(),
                detections: Vec::new(),
            });
        }

        let mut entities = Vec::new();
        for detector in &self.detectors {
            entities.extend(detector.detect(text)?);
        }

        let detections = resolve_overlaps(entities);
        if detections.is_empty() {
            return Ok(AnonymizedText {
                text: text.to_string(),
                detections,
            });
        }

        let mut output = text.to_string();
        for entity in detections.iter().rev() {
            output.replace_range(entity.start..entity.end, &self.strategy.replace(entity));
        }

        Ok(AnonymizedText {
            text: output,
            detections,
        })
    }

    /// Anonymize one column of a table into a new column
    ///
    /// Applies [`anonymize_text`](Self::anonymize_text) to every text cell
    /// of `source` and writes the results to `dest`, preserving row count
    /// and row order exactly. Missing, non-text, and empty text cells pass
    /// through unchanged. The source column is never mutated; an existing
    /// `dest` column is replaced.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingColumn`](crate::Error::MissingColumn) if `source`
    ///   is absent from the table
    /// - [`Error::Validation`](crate::Error::Validation) if `dest` equals
    ///   `source`
    pub fn anonymize_column(&self, table: &Table, source: &str, dest: &str) -> Result<Table> {
        let (result, _) = self.anonymize_column_with_report(table, source, dest)?;
        Ok(result)
    }

    /// Anonymize one column and report what happened
    ///
    /// Same contract as [`anonymize_column`](Self::anonymize_column), plus
    /// an [`AnonymizationReport`] with per-kind detection counts and
    /// pass-through diagnostics.
    pub fn anonymize_column_with_report(
        &self,
        table: &Table,
        source: &str,
        dest: &str,
    ) -> Result<(Table, AnonymizationReport)> {
        if source == dest {
            return Err(Error::Validation(format!(
                "Destination column must differ from source: {source}"
            )));
        }

        let column = table.column(source).ok_or_else(|| Error::MissingColumn {
            name: source.to_string(),
        })?;

        let total = column.cells.len();
        tracing::info!(column = source, rows = total, "Anonymizing column");

        let mut report = AnonymizationReport::new();
        let mut cells = Vec::with_capacity(total);

        for (row, cell) in column.cells.iter().enumerate() {
            match cell {
                Cell::Text(text) if !text.is_empty() => {
                    let result = self.anonymize_text(text)?;
                    report.add_text(&result);
                    cells.push(Cell::Text(result.text));
                }
                Cell::Null | Cell::Text(_) => {
                    report.add_skipped();
                    cells.push(cell.clone());
                }
                other => {
                    report.add_skipped();
                    report.add_warning(format!(
                        "Row {row}: non-text cell passed through unchanged"
                    ));
                    cells.push(other.clone());
                }
            }

            if (row + 1) % 500 == 0 {
                tracing::debug!(current = row + 1, total, "Column progress");
            }
        }

        let mut result = table.clone();
        result.set_column(dest, cells);

        tracing::info!(
            column = source,
            processed = report.cells_processed,
            skipped = report.cells_skipped,
            detections = report.total_detections,
            "Column anonymized"
        );

        Ok((result, report))
    }

    /// Get the engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// Resolve overlapping spans into a non-overlapping, input-ordered list
///
/// Precedence: deny-list matches beat any overlapping pattern match; among
/// the rest, higher confidence wins, then the longer span, then the
/// earlier start.
fn resolve_overlaps(mut entities: Vec<NameEntity>) -> Vec<NameEntity> {
    entities.sort_by(|a, b| {
        let a_deny = a.method == DetectionMethod::DenyList;
        let b_deny = b.method == DetectionMethod::DenyList;
        b_deny
            .cmp(&a_deny)
            .then_with(|| {
                b.confidence
                    .partial_cmp(&a.confidence)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| b.len().cmp(&a.len()))
            .then_with(|| a.start.cmp(&b.start))
    });

    let mut accepted: Vec<NameEntity> = Vec::new();
    for entity in entities {
        if accepted.iter().all(|kept| !kept.overlaps(&entity)) {
            accepted.push(entity);
        }
    }

    accepted.sort_by_key(|e| e.start);
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityKind;

    fn entity(
        method: DetectionMethod,
        start: usize,
        end: usize,
        confidence: f32,
    ) -> NameEntity {
        let kind = match method {
            DetectionMethod::Pattern => EntityKind::Person,
            DetectionMethod::DenyList => EntityKind::DenyListName,
        };
        let mut e = NameEntity::new(kind, "x".repeat(end - start), start, end, method);
        e.set_confidence(confidence);
        e
    }

    #[test]
    fn test_engine_creation() {
        let engine = AnonymizerEngine::new(EngineConfig::default());
        assert!(engine.is_ok());
    }

    #[test]
    fn test_engine_creation_rejects_bad_config() {
        let config = EngineConfig {
            confidence_threshold: 2.0,
            ..EngineConfig::default()
        };
        assert!(AnonymizerEngine::new(config).is_err());
    }

    #[test]
    fn test_empty_input() {
        let engine = AnonymizerEngine::new(EngineConfig::default()).unwrap();
        let result = engine.anonymize_text("").unwrap();
        assert_eq!(result.text, "");
        assert!(!result.has_detections());
    }

    #[test]
    fn test_no_detections_identity() {
        let engine = AnonymizerEngine::new(EngineConfig::default()).unwrap();
        let result = engine.anonymize_text("No names here.").unwrap();
        assert_eq!(result.text, "No names here.");
        assert!(!result.has_detections());
    }

    #[test]
    fn test_deny_list_beats_overlapping_pattern() {
        let resolved = resolve_overlaps(vec![
            entity(DetectionMethod::Pattern, 0, 11, 0.75),
            entity(DetectionMethod::DenyList, 0, 11, 1.0),
        ]);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].method, DetectionMethod::DenyList);
    }

    #[test]
    fn test_higher_confidence_wins_overlap() {
        let resolved = resolve_overlaps(vec![
            entity(DetectionMethod::Pattern, 0, 8, 0.75),
            entity(DetectionMethod::Pattern, 0, 12, 0.9),
        ]);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].end, 12);
    }

    #[test]
    fn test_longer_span_wins_tied_confidence() {
        let resolved = resolve_overlaps(vec![
            entity(DetectionMethod::Pattern, 0, 5, 0.75),
            entity(DetectionMethod::Pattern, 0, 11, 0.75),
        ]);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].end, 11);
    }

    #[test]
    fn test_disjoint_spans_all_kept_in_order() {
        let resolved = resolve_overlaps(vec![
            entity(DetectionMethod::Pattern, 20, 31, 0.75),
            entity(DetectionMethod::DenyList, 0, 11, 1.0),
        ]);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].start, 0);
        assert_eq!(resolved[1].start, 20);
    }

    #[test]
    fn test_marker_strategy_output() {
        let config = EngineConfig::with_deny_list(vec!["Alice Smith".to_string()]);
        let engine = AnonymizerEngine::new(config).unwrap();
        let result = engine.anonymize_text("Alice Smith called John today.").unwrap();
        assert_eq!(result.text, "<ANONYMIZED> called John today.");
        assert_eq!(result.total_detections(), 1);
    }

    #[test]
    fn test_mask_strategy_output() {
        let config = EngineConfig {
            deny_list: vec!["Alice Smith".to_string()],
            strategy: ReplacementStrategy::Mask,
            ..EngineConfig::default()
        };
        let engine = AnonymizerEngine::new(config).unwrap();
        let result = engine.anonymize_text("call Alice Smith now").unwrap();
        assert_eq!(result.text, "call *********** now");
    }

    #[test]
    fn test_marker_never_redetected() {
        let config = EngineConfig::with_deny_list(vec!["Alice Smith".to_string()]);
        let engine = AnonymizerEngine::new(config).unwrap();
        let first = engine.anonymize_text("Alice Smith called John today.").unwrap();
        let second = engine.anonymize_text(&first.text).unwrap();
        assert_eq!(second.text, first.text);
        assert!(!second.has_detections());
    }

    #[test]
    fn test_multiple_occurrences_all_replaced() {
        let config = EngineConfig::with_deny_list(vec!["Bob Jones".to_string()]);
        let engine = AnonymizerEngine::new(config).unwrap();
        let result = engine
            .anonymize_text("Bob Jones met Bob Jones at noon.")
            .unwrap();
        assert_eq!(result.text, "<ANONYMIZED> met <ANONYMIZED> at noon.");
        assert_eq!(result.total_detections(), 2);
    }

    #[test]
    fn test_custom_marker() {
        let config = EngineConfig {
            deny_list: vec!["Alice Smith".to_string()],
            marker: "[name redacted]".to_string(),
            ..EngineConfig::default()
        };
        let engine = AnonymizerEngine::new(config).unwrap();
        let result = engine.anonymize_text("per Alice Smith").unwrap();
        assert_eq!(result.text, "per [name redacted]");
    }
}
