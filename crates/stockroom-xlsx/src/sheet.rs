//! Worksheet part encoding

use std::borrow::Cow;

use stockroom_core::{cell_reference, ColumnDef, FieldValue, Sheet};

/// Render one sheet as a `xl/worksheets/sheetN.xml` document
///
/// Row 1 holds the column labels; data row `i` is written as row `i + 2`.
pub fn sheet_xml(sheet: &Sheet) -> String {
    let mut content = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
    );

    content.push_str(&format!(
        "\n    <dimension ref=\"{}\"/>\n    <sheetData>",
        sheet.used_range()
    ));

    content.push_str("\n        <row r=\"1\">");
    for (col, column) in sheet.columns().iter().enumerate() {
        push_inline_string(&mut content, &cell_reference(0, col as u32), column.label());
    }
    content.push_str("\n        </row>");

    for (i, row) in sheet.rows().iter().enumerate() {
        let row_index = i as u32 + 1;
        content.push_str(&format!("\n        <row r=\"{}\">", row_index + 1));
        for (col, value) in row.iter().enumerate() {
            push_cell(&mut content, &cell_reference(row_index, col as u32), value);
        }
        content.push_str("\n        </row>");
    }

    content.push_str("\n    </sheetData>\n</worksheet>");
    content
}

fn push_cell(content: &mut String, cell_ref: &str, value: &FieldValue) {
    if value.is_number() {
        content.push_str(&format!(
            "\n            <c r=\"{}\"><v>{}</v></c>",
            cell_ref, value
        ));
    } else {
        push_inline_string(content, cell_ref, &value.to_string());
    }
}

fn push_inline_string(content: &mut String, cell_ref: &str, text: &str) {
    let space = if text.trim() != text {
        " xml:space=\"preserve\""
    } else {
        ""
    };
    content.push_str(&format!(
        "\n            <c r=\"{}\" t=\"inlineStr\"><is><t{}>{}</t></is></c>",
        cell_ref,
        space,
        escape_xml(text)
    ));
}

/// Escape text for XML content or attribute values
///
/// Characters XML 1.0 cannot carry at all (most C0 controls, U+FFFE, U+FFFF)
/// are dropped.
pub(crate) fn escape_xml(s: &str) -> Cow<'_, str> {
    if s.chars().all(is_xml_char) {
        quick_xml::escape::escape(s)
    } else {
        let cleaned: String = s.chars().filter(|c| is_xml_char(*c)).collect();
        Cow::Owned(quick_xml::escape::escape(&cleaned).into_owned())
    }
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
        && !matches!(c, '\u{FFFE}' | '\u{FFFF}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::SheetColumn;

    fn items_sheet() -> Sheet {
        let mut sheet = Sheet::new(
            "Items",
            vec![
                SheetColumn::new("name", "Name"),
                SheetColumn::new("qty", "Qty"),
            ],
        );
        sheet.push_values(vec!["Bolt".into(), 12.into()]);
        sheet.push_values(vec!["Nut & <Washer>".into(), 0.5.into()]);
        sheet
    }

    #[test]
    fn test_dimension_covers_header_and_rows() {
        let xml = sheet_xml(&items_sheet());
        assert!(xml.contains("<dimension ref=\"A1:B3\"/>"));
    }

    #[test]
    fn test_header_cells_are_inline_strings() {
        let xml = sheet_xml(&items_sheet());
        assert!(xml.contains("<row r=\"1\">"));
        assert!(xml.contains("<c r=\"A1\" t=\"inlineStr\"><is><t>Name</t></is></c>"));
        assert!(xml.contains("<c r=\"B1\" t=\"inlineStr\"><is><t>Qty</t></is></c>"));
    }

    #[test]
    fn test_numeric_and_text_cells() {
        let xml = sheet_xml(&items_sheet());
        assert!(xml.contains("<row r=\"2\">"));
        assert!(xml.contains("<c r=\"B2\"><v>12</v></c>"));
        assert!(xml.contains("<c r=\"B3\"><v>0.5</v></c>"));
        assert!(xml.contains(
            "<c r=\"A3\" t=\"inlineStr\"><is><t>Nut &amp; &lt;Washer&gt;</t></is></c>"
        ));
    }

    #[test]
    fn test_non_numeric_values_become_strings() {
        let mut sheet = Sheet::new("S", vec![SheetColumn::new("v", "V")]);
        sheet.push_values(vec![FieldValue::Empty]);
        sheet.push_values(vec![f64::NAN.into()]);
        sheet.push_values(vec!["42".into()]);
        sheet.push_values(vec![true.into()]);
        let xml = sheet_xml(&sheet);
        assert!(xml.contains("<c r=\"A2\" t=\"inlineStr\"><is><t></t></is></c>"));
        assert!(xml.contains("<c r=\"A3\" t=\"inlineStr\"><is><t>NaN</t></is></c>"));
        assert!(xml.contains("<c r=\"A4\" t=\"inlineStr\"><is><t>42</t></is></c>"));
        assert!(xml.contains("<c r=\"A5\" t=\"inlineStr\"><is><t>TRUE</t></is></c>"));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("plain"), "plain");
        assert_eq!(
            escape_xml(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&apos;&amp;&apos;&lt;/a&gt;"
        );
        assert_eq!(escape_xml("bell\u{7}tab\t"), "belltab\t");
    }

    #[test]
    fn test_surrounding_whitespace_is_preserved() {
        let mut sheet = Sheet::new("S", vec![SheetColumn::new("v", "V")]);
        sheet.push_values(vec!["  indented".into()]);
        let xml = sheet_xml(&sheet);
        assert!(xml.contains("<t xml:space=\"preserve\">  indented</t>"));
    }

    #[test]
    fn test_wide_sheet_uses_multi_letter_columns() {
        let columns = (0..28)
            .map(|i| SheetColumn::new(format!("k{}", i), format!("L{}", i)))
            .collect();
        let xml = sheet_xml(&Sheet::new("Wide", columns));
        assert!(xml.contains("<dimension ref=\"A1:AB1\"/>"));
        assert!(xml.contains("<c r=\"AB1\" t=\"inlineStr\"><is><t>L27</t></is></c>"));
    }
}
