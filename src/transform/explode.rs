//! Row explosion for delimited multi-value columns.
//!
//! Turns one row whose genres cell holds `"Action, Sci-Fi"` into two rows,
//! one per genre, all other cells copied verbatim:
//!
//! ```text
//! Input (delimited)                  →  Output (atomic)
//! ┌──────────────────────────────┐     ┌──────────────────────┐
//! │ Inception | Action, Sci-Fi   │     │ Inception | Action   │
//! │ Amelie    | Comedy           │  →  │ Inception | Sci-Fi   │
//! └──────────────────────────────┘     │ Amelie    | Comedy   │
//!                                      └──────────────────────┘
//! ```
//!
//! Splitting and trimming are separate steps: explode emits the raw
//! substrings, [`trim_column`] normalizes them afterwards.

use crate::error::{TransformError, TransformResult};
use crate::models::Table;

/// Split a delimited cell into its raw sub-values.
///
/// No trimming happens here. A cell without the separator yields a
/// single-element vec; an empty cell yields `[""]`, so the row survives
/// explosion with an empty value rather than being dropped.
pub fn split_cell(cell: &str) -> Vec<&str> {
    cell.split(',').collect()
}

/// Explode a table on a delimited column.
///
/// For each row, emits one output row per sub-value of the named column,
/// with every other cell copied verbatim. Output rows for one source row
/// are contiguous and keep sub-value order; source row order is preserved.
///
/// Fails with [`TransformError::MissingColumn`] if the column is not in
/// the headers.
pub fn explode(table: &Table, column: &str) -> TransformResult<Table> {
    let idx = table
        .column_index(column)
        .ok_or_else(|| TransformError::MissingColumn(column.to_string()))?;

    let mut rows = Vec::with_capacity(table.len());

    for row in &table.rows {
        for value in split_cell(&row[idx]) {
            let mut expanded = row.clone();
            expanded[idx] = value.to_string();
            rows.push(expanded);
        }
    }

    Ok(Table::new(table.headers.clone(), rows))
}

/// Trim leading and trailing whitespace from one column, in place.
///
/// Idempotent. Other columns are never touched.
pub fn trim_column(table: &mut Table, column: &str) -> TransformResult<()> {
    let idx = table
        .column_index(column)
        .ok_or_else(|| TransformError::MissingColumn(column.to_string()))?;

    for row in &mut table.rows {
        let trimmed = row[idx].trim();
        if trimmed.len() != row[idx].len() {
            row[idx] = trimmed.to_string();
        }
    }

    Ok(())
}
