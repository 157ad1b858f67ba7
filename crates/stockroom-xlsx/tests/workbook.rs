//! End-to-end tests for workbook packaging (write -> unzip -> inspect parts)

use std::collections::HashMap;
use std::io::{Cursor, Read};

use pretty_assertions::assert_eq;
use quick_xml::events::Event;
use quick_xml::Reader;
use stockroom_core::{FieldValue, Sheet, SheetColumn};
use stockroom_xlsx::XlsxWriter;

fn read_parts(bytes: &[u8]) -> HashMap<String, String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut parts = HashMap::new();
    for i in 0..archive.len() {
        let mut file = archive.by_index(i).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        parts.insert(file.name().to_string(), content);
    }
    parts
}

/// (reference, type attribute, text) for every cell of a sheet part
fn read_cells(xml: &str) -> Vec<(String, Option<String>, String)> {
    let mut reader = Reader::from_str(xml);
    let mut cells = Vec::new();
    let mut current: Option<(String, Option<String>, String)> = None;

    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) if e.name().as_ref() == b"c" => {
                let attr = |name: &str| {
                    e.try_get_attribute(name)
                        .unwrap()
                        .map(|a| a.unescape_value().unwrap().into_owned())
                };
                current = Some((attr("r").unwrap(), attr("t"), String::new()));
            }
            Event::Text(t) => {
                if let Some(cell) = current.as_mut() {
                    cell.2.push_str(&t.unescape().unwrap());
                }
            }
            Event::End(e) if e.name().as_ref() == b"c" => {
                cells.extend(current.take());
            }
            Event::Eof => break,
            _ => {}
        }
    }

    cells
}

fn items_sheet() -> Sheet {
    let mut sheet = Sheet::new("Items", vec![SheetColumn::new("name", "Name")]);
    sheet.push_values(vec![FieldValue::from("Widget")]);
    sheet.push_values(vec![FieldValue::from("Gadget")]);
    sheet
}

#[test]
fn test_single_sheet_export() {
    let bytes = XlsxWriter::write_to_vec(&[items_sheet()]).unwrap();
    let parts = read_parts(&bytes);

    let mut names: Vec<&str> = parts.keys().map(String::as_str).collect();
    names.sort_unstable();
    assert_eq!(
        names,
        vec![
            "[Content_Types].xml",
            "_rels/.rels",
            "xl/_rels/workbook.xml.rels",
            "xl/workbook.xml",
            "xl/worksheets/sheet1.xml",
        ]
    );

    let sheet = &parts["xl/worksheets/sheet1.xml"];
    assert!(sheet.contains("<dimension ref=\"A1:A3\"/>"));
    assert_eq!(
        read_cells(sheet),
        vec![
            ("A1".to_string(), Some("inlineStr".to_string()), "Name".to_string()),
            ("A2".to_string(), Some("inlineStr".to_string()), "Widget".to_string()),
            ("A3".to_string(), Some("inlineStr".to_string()), "Gadget".to_string()),
        ]
    );
}

#[test]
fn test_sheet_order_is_consistent_across_parts() {
    let movements = Sheet::new(
        "Stock Movements",
        vec![
            SheetColumn::new("code", "Item Code"),
            SheetColumn::new("qty", "Quantity"),
        ],
    );
    let locations = Sheet::new("Locations & Bins", vec![SheetColumn::new("name", "Name")]);

    let bytes = XlsxWriter::write_to_vec(&[items_sheet(), movements, locations]).unwrap();
    let parts = read_parts(&bytes);

    let workbook = &parts["xl/workbook.xml"];
    assert!(workbook.contains(r#"<sheet name="Items" sheetId="1" r:id="rId1"/>"#));
    assert!(workbook.contains(r#"<sheet name="Stock Movements" sheetId="2" r:id="rId2"/>"#));
    assert!(workbook.contains(r#"<sheet name="Locations &amp; Bins" sheetId="3" r:id="rId3"/>"#));

    let rels = &parts["xl/_rels/workbook.xml.rels"];
    let types = &parts["[Content_Types].xml"];
    for n in 1..=3 {
        assert!(rels.contains(&format!(
            r#"Id="rId{n}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{n}.xml""#
        )));
        assert!(types.contains(&format!(r#"PartName="/xl/worksheets/sheet{n}.xml""#)));
        assert!(parts.contains_key(&format!("xl/worksheets/sheet{n}.xml")));
    }

    assert!(parts["xl/worksheets/sheet2.xml"].contains("<dimension ref=\"A1:B1\"/>"));
    assert!(parts["xl/worksheets/sheet2.xml"].contains("<t>Item Code</t>"));
    assert!(parts["xl/worksheets/sheet3.xml"].contains("<dimension ref=\"A1:A1\"/>"));
}

#[test]
fn test_root_relationship_points_at_workbook() {
    let parts = read_parts(&XlsxWriter::write_to_vec(&[items_sheet()]).unwrap());
    assert!(parts["_rels/.rels"].contains(r#"Target="xl/workbook.xml""#));
    assert!(parts["[Content_Types].xml"].contains(
        r#"<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#
    ));
}

#[test]
fn test_numbers_and_escaped_text_survive() {
    let mut sheet = Sheet::new(
        "Data",
        vec![
            SheetColumn::new("name", "Name <main>"),
            SheetColumn::new("qty", "Qty"),
            SheetColumn::new("price", "Price"),
        ],
    );
    sheet.push_values(vec!["O'Brien & \"Sons\"".into(), 40.into(), 2.75.into()]);
    sheet.push_values(vec![FieldValue::Empty, (-3).into(), f64::INFINITY.into()]);

    let parts = read_parts(&XlsxWriter::write_to_vec(&[sheet]).unwrap());
    let cells = read_cells(&parts["xl/worksheets/sheet1.xml"]);
    let by_ref: HashMap<&str, (&Option<String>, &str)> = cells
        .iter()
        .map(|(r, t, v)| (r.as_str(), (t, v.as_str())))
        .collect();

    assert_eq!(by_ref["A1"].1, "Name <main>");
    assert_eq!(by_ref["A2"].1, "O'Brien & \"Sons\"");
    assert_eq!(by_ref["B2"], (&None, "40"));
    assert_eq!(by_ref["C2"], (&None, "2.75"));
    assert_eq!(by_ref["A3"], (&Some("inlineStr".to_string()), ""));
    assert_eq!(by_ref["B3"], (&None, "-3"));
    assert_eq!(by_ref["C3"], (&Some("inlineStr".to_string()), "inf"));
}

#[test]
fn test_write_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items.xlsx");
    XlsxWriter::write_file(&[items_sheet()], &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(read_parts(&bytes).contains_key("xl/worksheets/sheet1.xml"));
}
