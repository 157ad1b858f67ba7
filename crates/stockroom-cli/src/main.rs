//! Stockroom CLI - import checking and spreadsheet export

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use stockroom::prelude::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "stockroom")]
#[command(author, version, about = "Inventory CSV import checking and export tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a CSV file against a schema and print every problem found
    Check {
        /// Input CSV file
        input: PathBuf,

        /// Schema of the file: item, location or stock-movement
        #[arg(short, long)]
        schema: Schema,

        /// JSON file with known categories, locations, item codes and type lists
        #[arg(short, long)]
        refs: Option<PathBuf>,

        /// Print the diagnostics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the empty import template for a schema
    Template {
        /// Schema: item, location or stock-movement
        schema: Schema,
    },

    /// Convert a CSV file into a one-sheet XLSX workbook
    #[command(alias = "xlsx")]
    ToXlsx {
        /// Input CSV file
        input: PathBuf,

        /// Output file name (".xlsx" is appended when missing)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Sheet name (default: input file stem)
        #[arg(long)]
        sheet_name: Option<String>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            input,
            schema,
            refs,
            json,
        } => check(&input, schema, refs.as_deref(), json),
        Commands::Template { schema } => template(schema),
        Commands::ToXlsx {
            input,
            output,
            sheet_name,
        } => to_xlsx(&input, output.as_deref(), sheet_name),
    }
}

fn read_input(input: &Path) -> Result<String> {
    std::fs::read_to_string(input).with_context(|| format!("Failed to read '{}'", input.display()))
}

fn check(input: &Path, schema: Schema, refs: Option<&Path>, json: bool) -> Result<ExitCode> {
    let refs = match refs {
        Some(path) => ReferenceData::from_json_file(path)
            .with_context(|| format!("Failed to load reference data '{}'", path.display()))?,
        None => ReferenceData::default(),
    };

    let text = read_input(input)?;
    let report = import_table(&text, schema, &refs);

    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &report.errors)
            .context("Failed to write to stdout")?;
        writeln!(stdout).context("Failed to write to stdout")?;
    } else {
        for error in &report.errors {
            writeln!(stdout, "{}", error).context("Failed to write to stdout")?;
        }
    }

    if report.is_accepted() {
        eprintln!(
            "{}: {} {} row(s) OK",
            input.display(),
            report.rows.len(),
            schema
        );
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!(
            "{}: {} error(s) in {} row(s)",
            input.display(),
            report.errors.len(),
            report.rejected_row_count()
        );
        Ok(ExitCode::FAILURE)
    }
}

fn template(schema: Schema) -> Result<ExitCode> {
    let text = schema.template_csv()?;
    io::stdout()
        .write_all(text.as_bytes())
        .context("Failed to write to stdout")?;
    Ok(ExitCode::SUCCESS)
}

fn to_xlsx(input: &Path, output: Option<&Path>, sheet_name: Option<String>) -> Result<ExitCode> {
    let text = read_input(input)?;
    let parsed = CsvReader::parse(&text, &[] as &[&str]);
    if let Some(error) = parsed.errors.first() {
        bail!("{}: {}", input.display(), error);
    }

    // Keep the header text as written; parsed keys are lower-cased
    let header_line = text
        .trim_start_matches('\u{feff}')
        .lines()
        .find(|l| !l.trim().is_empty())
        .unwrap_or_default();
    let columns: Vec<SheetColumn> = stockroom::tokenize_line(header_line, ',', '"')
        .into_iter()
        .map(|label| {
            let label = label.trim().to_string();
            SheetColumn::new(label.to_lowercase(), label)
        })
        .collect();

    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Sheet1".to_string());
    let name = sheet_name.unwrap_or_else(|| stem.clone());
    let sheet = Sheet::from_records(name, columns, &parsed.rows);

    let base = match output {
        Some(path) => path.to_string_lossy().into_owned(),
        None => stem,
    };
    let file = export_xlsx(&base, &[sheet])?;

    std::fs::write(&file.filename, &file.bytes)
        .with_context(|| format!("Failed to write '{}'", file.filename))?;
    eprintln!("Wrote {} rows to '{}'", parsed.rows.len(), file.filename);

    Ok(ExitCode::SUCCESS)
}
