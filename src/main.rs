//! Genre Split CLI - Explode delimited genre lists into one row per genre
//!
//! # Main Command
//!
//! ```bash
//! genre-split expand                    # data/imdbMoviesCleaned.csv → imdbMoviesCleanedGenreSplit.csv
//! genre-split expand catalog.csv -o out.csv -c tags
//! ```
//!
//! # Debug Commands (for development)
//!
//! ```bash
//! genre-split parse input.csv           # Just parse CSV to JSON
//! ```

use clap::{Parser, Subcommand};
use genre_split::{expand_csv, load_csv_file, ExpandOptions};
use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "genre-split")]
#[command(about = "Explode delimited genre lists in movie CSVs into one row per genre", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full pipeline: load CSV, explode the genres column, write CSV
    Expand {
        /// Input CSV file
        #[arg(default_value = "data/imdbMoviesCleaned.csv")]
        input: PathBuf,

        /// Output CSV file (overwritten if it exists)
        #[arg(short, long, default_value = "imdbMoviesCleanedGenreSplit.csv")]
        output: PathBuf,

        /// Delimited column to explode
        #[arg(short, long, default_value = "genres")]
        column: String,

        /// CSV delimiter (auto-detect if not specified)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Number of rows in the before/after previews
        #[arg(long, default_value = "5")]
        preview_rows: usize,
    },

    /// Parse a CSV file and output JSON
    Parse {
        /// Input CSV file
        input: PathBuf,

        /// CSV delimiter (auto-detect if not specified)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Expand {
            input,
            output,
            column,
            delimiter,
            preview_rows,
        } => cmd_expand(&input, &output, column, delimiter, preview_rows),

        Commands::Parse {
            input,
            delimiter,
            output,
        } => cmd_parse(&input, delimiter, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_expand(
    input: &Path,
    output: &Path,
    column: String,
    delimiter: Option<char>,
    preview_rows: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = ExpandOptions {
        column,
        delimiter,
        preview_rows,
    };

    let result = expand_csv(input, output, &options)?;

    eprintln!("\n✨ {} rows → {} rows", result.input_rows, result.output_rows);
    Ok(())
}

fn cmd_parse(
    input: &Path,
    delimiter: Option<char>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Parsing CSV: {}", input.display());

    let result = load_csv_file(input, delimiter)?;

    eprintln!("   Encoding: {}", result.encoding);
    eprintln!(
        "   Delimiter: '{}'{}",
        match result.delimiter {
            '\t' => "\\t".to_string(),
            c => c.to_string(),
        },
        if delimiter.is_none() { " (auto-detected)" } else { "" }
    );
    eprintln!("   Columns: {}", result.table.headers.join(", "));
    eprintln!("✅ Parsed {} records", result.table.len());

    let records: Vec<Value> = result
        .table
        .rows
        .iter()
        .map(|row| {
            let mut obj = Map::new();
            for (header, cell) in result.table.headers.iter().zip(row) {
                obj.insert(header.clone(), json!(cell));
            }
            Value::Object(obj)
        })
        .collect();

    let json = serde_json::to_string_pretty(&records)?;
    write_output(&json, output)?;

    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
