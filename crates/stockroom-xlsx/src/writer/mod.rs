//! XLSX package writer

use std::fs::File;
use std::io::{Cursor, Seek, Write};
use std::path::Path;

use crate::error::{XlsxError, XlsxResult};
use crate::sheet::{escape_xml, sheet_xml};
use stockroom_core::{Error, Sheet, MAX_COLS, MAX_ROWS, MAX_SHEET_NAME_LEN};

/// XLSX file writer
///
/// Sheet `i` (0-based) is always `xl/worksheets/sheet{i+1}.xml`, `sheetId`
/// `i+1` and relationship `rId{i+1}`.
pub struct XlsxWriter;

impl XlsxWriter {
    /// Write sheets to a file path
    pub fn write_file<P: AsRef<Path>>(sheets: &[Sheet], path: P) -> XlsxResult<()> {
        let file = File::create(path)?;
        Self::write(sheets, file)
    }

    /// Write sheets to an in-memory buffer
    pub fn write_to_vec(sheets: &[Sheet]) -> XlsxResult<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());
        Self::write(sheets, &mut cursor)?;
        Ok(cursor.into_inner())
    }

    /// Write sheets to a writer
    pub fn write<W: Write + Seek>(sheets: &[Sheet], writer: W) -> XlsxResult<()> {
        Self::validate(sheets)?;
        log::debug!("writing workbook with {} sheet(s)", sheets.len());

        let mut zip = zip::ZipWriter::new(writer);

        // Write [Content_Types].xml
        Self::write_content_types(&mut zip, sheets)?;

        // Write _rels/.rels
        Self::write_root_rels(&mut zip)?;

        // Write xl/workbook.xml
        Self::write_workbook_xml(&mut zip, sheets)?;

        // Write xl/_rels/workbook.xml.rels
        Self::write_workbook_rels(&mut zip, sheets)?;

        for (i, sheet) in sheets.iter().enumerate() {
            Self::write_worksheet(&mut zip, i, sheet)?;
        }

        zip.finish()?;
        Ok(())
    }

    /// Reject workbooks spreadsheet applications refuse to open
    fn validate(sheets: &[Sheet]) -> XlsxResult<()> {
        if sheets.is_empty() {
            return Err(XlsxError::EmptyWorkbook);
        }

        for (i, sheet) in sheets.iter().enumerate() {
            validate_sheet_name(sheet.name())?;

            let name_lower = sheet.name().to_lowercase();
            if sheets[..i]
                .iter()
                .any(|other| other.name().to_lowercase() == name_lower)
            {
                return Err(Error::DuplicateSheetName(sheet.name().into()).into());
            }

            if sheet.columns().len() > MAX_COLS as usize {
                return Err(XlsxError::SheetTooLarge {
                    sheet: sheet.name().into(),
                    message: format!("{} columns (max {})", sheet.columns().len(), MAX_COLS),
                });
            }
            // The header takes one row
            if sheet.rows().len() >= MAX_ROWS as usize {
                return Err(XlsxError::SheetTooLarge {
                    sheet: sheet.name().into(),
                    message: format!("{} rows (max {})", sheet.rows().len(), MAX_ROWS - 1),
                });
            }
        }

        Ok(())
    }

    fn write_part<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        name: String,
        content: &str,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        log::trace!("writing part {} ({} bytes)", name, content.len());
        zip.start_file(name, options)?;
        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_content_types<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        sheets: &[Sheet],
    ) -> XlsxResult<()> {
        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
        );

        // Add an override for each worksheet
        for i in 0..sheets.len() {
            content.push_str(&format!(
                r#"
    <Override PartName="/xl/worksheets/sheet{}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
                i + 1
            ));
        }

        content.push_str("\n</Types>");

        Self::write_part(zip, "[Content_Types].xml".to_string(), &content)
    }

    fn write_root_rels<W: Write + Seek>(zip: &mut zip::ZipWriter<W>) -> XlsxResult<()> {
        let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

        Self::write_part(zip, "_rels/.rels".to_string(), content)
    }

    fn write_workbook_xml<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        sheets: &[Sheet],
    ) -> XlsxResult<()> {
        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
    <sheets>"#,
        );

        for (i, sheet) in sheets.iter().enumerate() {
            content.push_str(&format!(
                r#"
        <sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
                escape_xml(sheet.name()),
                i + 1,
                i + 1
            ));
        }

        content.push_str(
            r#"
    </sheets>
</workbook>"#,
        );

        Self::write_part(zip, "xl/workbook.xml".to_string(), &content)
    }

    fn write_workbook_rels<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        sheets: &[Sheet],
    ) -> XlsxResult<()> {
        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );

        for i in 0..sheets.len() {
            content.push_str(&format!(
                r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{}.xml"/>"#,
                i + 1,
                i + 1
            ));
        }

        content.push_str("\n</Relationships>");

        Self::write_part(zip, "xl/_rels/workbook.xml.rels".to_string(), &content)
    }

    fn write_worksheet<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        index: usize,
        sheet: &Sheet,
    ) -> XlsxResult<()> {
        let content = sheet_xml(sheet);
        Self::write_part(zip, format!("xl/worksheets/sheet{}.xml", index + 1), &content)
    }
}

/// Check a sheet name against the rules spreadsheet applications enforce
fn validate_sheet_name(name: &str) -> Result<(), Error> {
    if name.is_empty() {
        return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
    }
    if name.chars().count() > MAX_SHEET_NAME_LEN {
        return Err(Error::InvalidSheetName(format!(
            "Sheet name too long (max {} characters)",
            MAX_SHEET_NAME_LEN
        )));
    }

    // Check for invalid characters
    const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];
    for c in INVALID_CHARS {
        if name.contains(*c) {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name cannot contain '{}'",
                c
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::SheetColumn;

    fn sheet(name: &str) -> Sheet {
        Sheet::new(name, vec![SheetColumn::new("name", "Name")])
    }

    #[test]
    fn test_validate_sheet_name() {
        assert!(validate_sheet_name("Items").is_ok());
        assert!(validate_sheet_name("Stock Movements 2024").is_ok());
        assert!(validate_sheet_name("").is_err());
        assert!(validate_sheet_name("a/b").is_err());
        assert!(validate_sheet_name("[x]").is_err());
        assert!(validate_sheet_name(&"x".repeat(31)).is_ok());
        assert!(validate_sheet_name(&"x".repeat(32)).is_err());
    }

    #[test]
    fn test_empty_workbook_is_rejected() {
        assert!(matches!(
            XlsxWriter::write_to_vec(&[]),
            Err(XlsxError::EmptyWorkbook)
        ));
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let result = XlsxWriter::write_to_vec(&[sheet("Items"), sheet("ITEMS")]);
        assert!(matches!(
            result,
            Err(XlsxError::Core(Error::DuplicateSheetName(_)))
        ));
    }

    #[test]
    fn test_invalid_name_is_rejected() {
        let result = XlsxWriter::write_to_vec(&[sheet("Q1?")]);
        assert!(matches!(
            result,
            Err(XlsxError::Core(Error::InvalidSheetName(_)))
        ));
    }
}
