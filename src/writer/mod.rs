//! CSV serialization of a [`Table`].
//!
//! Writes a header row followed by the data rows. No row-index column is
//! emitted; the column set is exactly the table's headers in order.

use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use crate::error::WriteResult;
use crate::models::Table;

/// Serialize a table to a CSV file, overwriting any existing file at `path`.
pub fn write_csv_file<P: AsRef<Path>>(table: &Table, path: P) -> WriteResult<()> {
    let file = std::fs::File::create(path.as_ref())?;
    write_csv(table, file)
}

/// Serialize a table as CSV to any writer.
///
/// Quoting follows RFC 4180 rules: cells containing the delimiter, quotes
/// or newlines are quoted, everything else is written verbatim.
pub fn write_csv<W: Write>(table: &Table, writer: W) -> WriteResult<()> {
    let mut wtr = WriterBuilder::new().from_writer(writer);

    wtr.write_record(&table.headers)?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;

    Ok(())
}
