// nameveil - Name anonymization for free text and tabular data
// Copyright (c) 2026 nameveil contributors
// Licensed under the MIT License

//! # nameveil
//!
//! Anonymizes personal names in free text and in columns of in-memory
//! tables. Detection combines a built-in, confidence-scored pattern
//! recognizer with an optional exact-match deny list; every detected span
//! is replaced by a constant marker (or masked in place).
//!
//! ## Architecture
//!
//! - [`config`] - Engine configuration and deny-list loading
//! - [`detector`] - Pattern and deny-list recognizers
//! - [`anonymizer`] - Replacement strategies
//! - [`engine`] - The anonymization engine (text and column operations)
//! - [`table`] - In-memory tabular dataset
//! - [`report`] - Per-pass reporting
//! - [`error`] - Error taxonomy
//! - [`logging`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```
//! use nameveil::{AnonymizerEngine, EngineConfig};
//!
//! # fn main() -> nameveil::Result<()> {
//! let config = EngineConfig::with_deny_list(vec!["Alice Smith".to_string()]);
//! let engine = AnonymizerEngine::new(config)?;
//!
//! let result = engine.anonymize_text("Alice Smith called John today.")?;
//! assert_eq!(result.text, "<ANONYMIZED> called John today.");
//! # Ok(())
//! # }
//! ```
//!
//! ## Tables
//!
//! ```
//! use nameveil::{AnonymizerEngine, Cell, EngineConfig, Table};
//!
//! # fn main() -> nameveil::Result<()> {
//! let mut table = Table::new();
//! table.push_column("notes", vec![Cell::from("Alice Smith"), Cell::Null])?;
//!
//! let engine = AnonymizerEngine::new(EngineConfig::with_deny_list(vec![
//!     "Alice Smith".to_string(),
//! ]))?;
//! let result = engine.anonymize_column(&table, "notes", "notes_anon")?;
//!
//! assert_eq!(result.row_count(), 2);
//! assert_eq!(
//!     result.column("notes_anon").unwrap().cells[0],
//!     Cell::Text("<ANONYMIZED>".to_string())
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Sharing the engine
//!
//! The engine is immutable after construction; each call is a pure
//! function of the input text, so one engine can be shared across threads
//! behind an `Arc`. The built-in pattern library is compiled at most once
//! per process.

pub mod anonymizer;
pub mod config;
pub mod detector;
pub mod engine;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;
pub mod table;

pub use config::{load_deny_list, EngineConfig, ReplacementStrategy, DEFAULT_MARKER};
pub use engine::AnonymizerEngine;
pub use error::{Error, Result};
pub use models::{AnonymizedText, DetectionMethod, EntityKind, NameEntity};
pub use report::AnonymizationReport;
pub use table::{Cell, Column, Table};
