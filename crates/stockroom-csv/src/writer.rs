//! Delimited-text serializer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::{CsvWriteOptions, LineTerminator};
use stockroom_core::{ColumnDef, Record};

/// Delimited-text writer
///
/// A field is quoted, with inner quotes doubled, only when it contains the
/// delimiter, a quote, `\n` or `\r`.
pub struct CsvWriter;

impl CsvWriter {
    /// Serialize records to comma-separated text with default options
    pub fn write_string<R, C>(records: &[R], columns: &[C]) -> CsvResult<String>
    where
        R: Record,
        C: ColumnDef,
    {
        Self::write_string_with_options(records, columns, &CsvWriteOptions::default())
    }

    /// Serialize records to text
    pub fn write_string_with_options<R, C>(
        records: &[R],
        columns: &[C],
        options: &CsvWriteOptions,
    ) -> CsvResult<String>
    where
        R: Record,
        C: ColumnDef,
    {
        let mut buf = Vec::new();
        Self::write(records, columns, &mut buf, options)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Serialize records to a file
    pub fn write_file<R, C, P>(
        records: &[R],
        columns: &[C],
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()>
    where
        R: Record,
        C: ColumnDef,
        P: AsRef<Path>,
    {
        let file = File::create(path)?;
        Self::write(records, columns, file, options)
    }

    /// Serialize records to a writer, one line per record after the label line
    pub fn write<R, C, W>(
        records: &[R],
        columns: &[C],
        writer: W,
        options: &CsvWriteOptions,
    ) -> CsvResult<()>
    where
        R: Record,
        C: ColumnDef,
        W: Write,
    {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .quote_style(csv::QuoteStyle::Necessary)
            .terminator(terminator)
            .from_writer(writer);

        if options.write_header {
            csv_writer.write_record(columns.iter().map(ColumnDef::label))?;
        }

        for record in records {
            csv_writer.write_record(
                columns
                    .iter()
                    .map(|column| record.field(column.key()).to_string()),
            )?;
        }

        csv_writer.flush()?;
        log::debug!(
            "wrote {} records across {} columns",
            records.len(),
            columns.len()
        );
        Ok(())
    }
}
