//! # Genre Split - delimited-column explosion for movie CSV datasets
//!
//! Genre Split reshapes a tabular movie dataset: each row whose "genres"
//! column holds a comma-delimited list becomes one row per genre, with the
//! genre value trimmed and every other column copied verbatim.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│  Transform  │────▶│  CSV File   │
//! │  (ISO/UTF8) │     │  (auto-enc) │     │(explode+trim)│    │  (expanded) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use genre_split::{expand_csv, ExpandOptions};
//! use std::path::Path;
//!
//! fn main() {
//!     let result = expand_csv(
//!         Path::new("data/imdbMoviesCleaned.csv"),
//!         Path::new("imdbMoviesCleanedGenreSplit.csv"),
//!         &ExpandOptions::default(),
//!     ).unwrap();
//!     println!("Wrote {} rows", result.output_rows);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Domain model ([`Table`])
//! - [`parser`] - CSV loading with auto-detection
//! - [`transform`] - Explosion and pipeline
//! - [`writer`] - CSV serialization
//! - [`logs`] - Leveled stderr diagnostics

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Output
pub mod writer;

// Diagnostics
pub mod logs;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{CsvError, PipelineError, TransformError, WriteError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::Table;

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{
    decode_content, detect_delimiter, detect_encoding, load_bytes, load_csv_file, parse_str,
    ParseResult,
};

// =============================================================================
// Re-exports - Transformation
// =============================================================================

pub use transform::explode::{explode, split_cell, trim_column};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::pipeline::{expand_csv, expand_table, CsvInfo, ExpandOptions, ExpandResult};

// =============================================================================
// Re-exports - Output
// =============================================================================

pub use writer::{write_csv, write_csv_file};
