//! # stockroom-csv
//!
//! Delimited-text reader and writer for stockroom.
//!
//! Reading is line oriented: the text is split on `\n` first and each line is
//! tokenized on its own, so a quoted field cannot span lines.
//!
//! ```rust
//! use stockroom_csv::CsvReader;
//!
//! let result = CsvReader::parse("Name,Category\n\"Widget, large\",Tools\n", &["Name"]);
//! assert!(result.errors.is_empty());
//! assert_eq!(result.rows[0].get("name"), Some("Widget, large"));
//! ```

mod error;
mod options;
mod reader;
pub mod tokenizer;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use tokenizer::tokenize_line;
pub use writer::CsvWriter;
