//! High-level pipeline API for genre expansion.
//!
//! Combines all steps: loading, explosion, trimming, and serialization.
//!
//! # Example
//!
//! ```rust,ignore
//! use genre_split::{expand_csv, ExpandOptions};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let result = expand_csv(
//!         Path::new("data/imdbMoviesCleaned.csv"),
//!         Path::new("imdbMoviesCleanedGenreSplit.csv"),
//!         &ExpandOptions::default(),
//!     )?;
//!
//!     println!("{} rows expanded to {}", result.input_rows, result.output_rows);
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::explode::{explode, trim_column};
use crate::error::{PipelineResult, TransformResult};
use crate::logs::{log_info, log_success};
use crate::models::Table;
use crate::parser::load_csv_file;
use crate::writer::write_csv_file;

/// Options for the expansion pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpandOptions {
    /// Name of the delimited column to explode
    pub column: String,

    /// Explicit delimiter (auto-detect if None)
    pub delimiter: Option<char>,

    /// Number of rows shown in the before/after previews
    pub preview_rows: usize,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            column: "genres".to_string(),
            delimiter: None,
            preview_rows: 5,
        }
    }
}

/// Result of a complete expansion pipeline
#[derive(Debug, Clone, Serialize)]
pub struct ExpandResult {
    /// Input row count (before explosion)
    pub input_rows: usize,

    /// Output row count (after explosion)
    pub output_rows: usize,

    /// CSV parsing metadata
    pub csv_info: CsvInfo,
}

/// CSV file information
#[derive(Debug, Clone, Serialize)]
pub struct CsvInfo {
    pub encoding: String,
    pub delimiter: char,
    pub headers: Vec<String>,
    pub row_count: usize,
}

/// Expand a table in memory: explode the delimited column, then trim it.
///
/// The core transformation without any file I/O. Column order and source
/// row order are preserved; see [`explode`] for the ordering contract.
pub fn expand_table(table: &Table, column: &str) -> TransformResult<Table> {
    let mut expanded = explode(table, column)?;
    trim_column(&mut expanded, column)?;
    Ok(expanded)
}

/// Expand a CSV file and write the result.
///
/// This is the main entry point for the pipeline. It:
/// 1. Loads the CSV with encoding/delimiter auto-detection
/// 2. Explodes the delimited column into one row per value
/// 3. Trims whitespace from the exploded column
/// 4. Writes the expanded table to `output`, overwriting it
///
/// A first-rows preview of the table is logged to stderr before and after
/// the transformation. Diagnostic only, not part of the output contract.
pub fn expand_csv(
    input: &Path,
    output: &Path,
    options: &ExpandOptions,
) -> PipelineResult<ExpandResult> {
    log_info(format!("📖 Reading CSV file: {}", input.display()));
    let parsed = load_csv_file(input, options.delimiter)?;
    log_success(format!("Detected encoding: {}", parsed.encoding));
    log_success(format!(
        "Detected separator: '{}'",
        format_delimiter(parsed.delimiter)
    ));
    log_success(format!("Read {} rows", parsed.table.len()));

    let csv_info = CsvInfo {
        encoding: parsed.encoding.clone(),
        delimiter: parsed.delimiter,
        headers: parsed.table.headers.clone(),
        row_count: parsed.table.len(),
    };

    print_preview(&parsed.table, options.preview_rows, "Input preview");

    log_info(format!("⚙️  Exploding column '{}'...", options.column));
    let expanded = expand_table(&parsed.table, &options.column)?;
    log_success(format!(
        "{} rows expanded to {}",
        parsed.table.len(),
        expanded.len()
    ));

    print_preview(&expanded, options.preview_rows, "Output preview");

    log_info(format!("💾 Writing: {}", output.display()));
    write_csv_file(&expanded, output)?;
    log_success("Done");

    Ok(ExpandResult {
        input_rows: parsed.table.len(),
        output_rows: expanded.len(),
        csv_info,
    })
}

/// Log a first-rows preview of a table
fn print_preview(table: &Table, rows: usize, label: &str) {
    log_info(format!("{} ({} of {} rows):", label, rows.min(table.len()), table.len()));
    for line in table.preview(rows).lines() {
        log_info(format!("  {}", line));
    }
}

/// Format delimiter for display
fn format_delimiter(d: char) -> &'static str {
    match d {
        ',' => ",",
        ';' => ";",
        '\t' => "TAB",
        '|' => "|",
        _ => "?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;

    #[test]
    fn test_default_options() {
        let opts = ExpandOptions::default();
        assert_eq!(opts.column, "genres");
        assert_eq!(opts.preview_rows, 5);
        assert!(opts.delimiter.is_none());
    }

    #[test]
    fn test_expand_table_scenario() {
        let table = Table::new(
            vec!["title".into(), "genres".into()],
            vec![
                vec!["Inception".into(), "Action, Sci-Fi".into()],
                vec!["Amelie".into(), "Comedy".into()],
            ],
        );

        let expanded = expand_table(&table, "genres").unwrap();

        assert_eq!(expanded.headers, table.headers);
        assert_eq!(expanded.rows.len(), 3);
        assert_eq!(expanded.rows[0], vec!["Inception", "Action"]);
        assert_eq!(expanded.rows[1], vec!["Inception", "Sci-Fi"]);
        assert_eq!(expanded.rows[2], vec!["Amelie", "Comedy"]);
    }

    #[test]
    fn test_expand_table_no_leading_trailing_whitespace() {
        let table = Table::new(
            vec!["title".into(), "genres".into()],
            vec![vec!["X".into(), "  Drama ,  Romance  ".into()]],
        );

        let expanded = expand_table(&table, "genres").unwrap();
        for row in &expanded.rows {
            assert_eq!(row[1], row[1].trim());
        }
    }

    #[test]
    fn test_expand_csv_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        std::fs::write(
            &input,
            "title,genres,year\nInception,\"Action, Sci-Fi\",2010\nAmelie,Comedy,2001\n",
        )
        .unwrap();

        let result = expand_csv(&input, &output, &ExpandOptions::default()).unwrap();

        assert_eq!(result.input_rows, 2);
        assert_eq!(result.output_rows, 3);
        assert_eq!(result.csv_info.headers, vec!["title", "genres", "year"]);

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(
            written,
            "title,genres,year\nInception,Action,2010\nInception,Sci-Fi,2010\nAmelie,Comedy,2001\n"
        );
    }

    #[test]
    fn test_expand_csv_header_only_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        std::fs::write(&input, "title,genres\n").unwrap();

        let result = expand_csv(&input, &output, &ExpandOptions::default()).unwrap();
        assert_eq!(result.output_rows, 0);

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written, "title,genres\n");
    }

    #[test]
    fn test_expand_csv_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let result = expand_csv(
            Path::new("nope.csv"),
            &dir.path().join("out.csv"),
            &ExpandOptions::default(),
        );
        assert!(matches!(result, Err(PipelineError::Csv(_))));
    }

    #[test]
    fn test_expand_csv_missing_column() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        std::fs::write(&input, "title,tags\nX,a\n").unwrap();

        let result = expand_csv(
            &input,
            &dir.path().join("out.csv"),
            &ExpandOptions::default(),
        );
        assert!(matches!(result, Err(PipelineError::Transform(_))));
    }

    #[test]
    fn test_expand_csv_custom_column() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        std::fs::write(&input, "title,tags\nX,\"a, b\"\n").unwrap();

        let options = ExpandOptions {
            column: "tags".to_string(),
            ..Default::default()
        };
        let result = expand_csv(&input, &output, &options).unwrap();
        assert_eq!(result.output_rows, 2);
    }
}
