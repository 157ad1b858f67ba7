//! Spreadsheet column letters and A1-style cell references
//!
//! Columns use the conventional base-26 bijection: `0 = A`, `25 = Z`,
//! `26 = AA`, `701 = ZZ`, `702 = AAA`. [`column_to_letters`] and
//! [`letters_to_column`] are exact inverses of each other.

use crate::error::{Error, Result};

/// Convert a zero-based column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
///
/// # Examples
/// ```
/// use stockroom_core::column_to_letters;
///
/// assert_eq!(column_to_letters(0), "A");
/// assert_eq!(column_to_letters(51), "AZ");
/// assert_eq!(column_to_letters(702), "AAA");
/// ```
pub fn column_to_letters(col: u32) -> String {
    let mut result = String::new();
    let mut n = i64::from(col);

    while n >= 0 {
        let c = ((n % 26) as u8 + b'A') as char;
        result.insert(0, c);
        n = n / 26 - 1;
    }

    result
}

/// Convert column letters to a zero-based index (A = 0, Z = 25, AA = 26, etc.)
///
/// Lower-case letters are accepted.
pub fn letters_to_column(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::InvalidAddress("empty column letters".into()));
    }

    let mut col: u64 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidAddress(format!(
                "invalid column letter '{}'",
                c
            )));
        }
        col = col * 26 + (c.to_ascii_uppercase() as u64 - 'A' as u64 + 1);
        if col > u64::from(u32::MAX) + 1 {
            return Err(Error::InvalidAddress(format!(
                "column '{}' is too large",
                letters
            )));
        }
    }

    Ok((col - 1) as u32)
}

/// Format a zero-based (row, column) pair as an A1-style reference
///
/// ```
/// use stockroom_core::cell_reference;
///
/// assert_eq!(cell_reference(0, 0), "A1");
/// assert_eq!(cell_reference(2, 27), "AB3");
/// ```
pub fn cell_reference(row: u32, col: u32) -> String {
    format!("{}{}", column_to_letters(col), u64::from(row) + 1)
}

/// Format a rectangular range between two zero-based corners, e.g. `A1:C10`
pub fn range_reference(start: (u32, u32), end: (u32, u32)) -> String {
    format!(
        "{}:{}",
        cell_reference(start.0, start.1),
        cell_reference(end.0, end.1)
    )
}
