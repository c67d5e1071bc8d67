//! Domain models for the genre expansion pipeline.
//!
//! This module contains the core data structure used throughout the pipeline:
//!
//! - [`Table`] - An ordered, in-memory tabular dataset (headers + rows)
//!
//! Rows are plain `Vec<String>` aligned positionally with the headers. The
//! parser guarantees every row has exactly `headers.len()` cells.

use serde::Serialize;

// =============================================================================
// Table
// =============================================================================

/// An in-memory tabular dataset.
///
/// Preserves input row order and column order. All cells are strings;
/// no type coercion happens anywhere in the pipeline.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Table {
    /// Column headers, in file order.
    pub headers: Vec<String>,
    /// Data rows. Each row has exactly `headers.len()` cells.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table from headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Number of data rows (excluding the header).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find the positional index of a column by header name.
    ///
    /// Returns the first match when headers are duplicated.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Render the first `n` rows as a plain-text preview.
    ///
    /// Header line first, then up to `n` data rows, cells joined with " | ".
    /// Diagnostic output only; never fed back into the pipeline.
    pub fn preview(&self, n: usize) -> String {
        let mut out = String::new();
        out.push_str(&self.headers.join(" | "));
        for row in self.rows.iter().take(n) {
            out.push('\n');
            out.push_str(&row.join(" | "));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            vec!["title".into(), "genres".into()],
            vec![
                vec!["Inception".into(), "Action, Sci-Fi".into()],
                vec!["Amelie".into(), "Comedy".into()],
            ],
        )
    }

    #[test]
    fn test_column_index() {
        let table = sample();
        assert_eq!(table.column_index("genres"), Some(1));
        assert_eq!(table.column_index("title"), Some(0));
        assert_eq!(table.column_index("year"), None);
    }

    #[test]
    fn test_len_and_empty() {
        let table = sample();
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());

        let empty = Table::new(vec!["a".into()], vec![]);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_preview_limits_rows() {
        let table = sample();
        let preview = table.preview(1);
        assert!(preview.contains("title | genres"));
        assert!(preview.contains("Inception"));
        assert!(!preview.contains("Amelie"));
    }

    #[test]
    fn test_preview_header_only() {
        let table = Table::new(vec!["a".into(), "b".into()], vec![]);
        assert_eq!(table.preview(5), "a | b");
    }
}
