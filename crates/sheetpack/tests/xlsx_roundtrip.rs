//! End-to-end tests for XLSX packages (create -> save -> unzip -> verify)

use pretty_assertions::assert_eq;
use quick_xml::events::Event;
use quick_xml::Reader;
use sheetpack::prelude::*;
use std::io::{Cursor, Read};

/// Write a workbook and return every archive entry as (path, text)
fn package(wb: &Workbook) -> Vec<(String, String)> {
    let mut buf = Vec::new();
    XlsxWriter::write(wb, Cursor::new(&mut buf)).unwrap();

    let mut archive = zip::ZipArchive::new(Cursor::new(buf)).unwrap();
    let mut entries = Vec::new();
    for i in 0..archive.len() {
        let mut file = archive.by_index(i).unwrap();
        let mut text = String::new();
        file.read_to_string(&mut text).unwrap();
        entries.push((file.name().to_string(), text));
    }
    entries
}

fn entry<'a>(entries: &'a [(String, String)], path: &str) -> &'a str {
    entries
        .iter()
        .find(|(name, _)| name == path)
        .map(|(_, text)| text.as_str())
        .unwrap_or_else(|| panic!("{path} missing from package"))
}

fn assert_well_formed(xml: &str) {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("malformed XML: {e}"),
        }
    }
}

#[test]
fn test_minimal_package_layout() {
    let entries = package(&Workbook::new());
    let names: Vec<_> = entries.iter().map(|(name, _)| name.as_str()).collect();

    assert_eq!(
        names,
        vec![
            "[Content_Types].xml",
            "_rels/.rels",
            "xl/workbook.xml",
            "xl/_rels/workbook.xml.rels",
            "xl/styles.xml",
            "xl/theme/theme1.xml",
            "xl/sharedStrings.xml",
            "xl/worksheets/sheet1.xml",
        ]
    );
    for (_, text) in &entries {
        assert_well_formed(text);
    }
}

#[test]
fn test_roundtrip_values() {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();
    sheet.set_cell_value("A1", "hello").unwrap();
    sheet.set_cell_value("B1", 42.0).unwrap();
    sheet.set_cell_value("C1", true).unwrap();
    sheet.set_cell_formula("A2", "=SUM(B1:B1)").unwrap();

    let entries = package(&wb);

    let sst = entry(&entries, "xl/sharedStrings.xml");
    assert!(sst.contains("uniqueCount=\"1\""));
    assert!(sst.contains("<si><t>hello</t></si>"));

    let sheet1 = entry(&entries, "xl/worksheets/sheet1.xml");
    assert!(sheet1.contains("<c r=\"A1\" t=\"s\"><v>0</v></c>"));
    assert!(sheet1.contains("<c r=\"B1\" t=\"n\"><v>42</v></c>"));
    assert!(sheet1.contains("<c r=\"C1\" t=\"b\"><v>1</v></c>"));
    assert!(sheet1.contains("<c r=\"A2\"><f>SUM(B1:B1)</f><v/></c>"));
}

#[test]
fn test_shared_strings_across_sheets() {
    let mut wb = Workbook::new();
    wb.worksheet_mut(0).unwrap().set_cell_value("A1", "shared").unwrap();
    wb.add_worksheet_with_name("Second").unwrap();
    let second = wb.worksheet_mut(1).unwrap();
    second.set_cell_value("A1", "only here").unwrap();
    second.set_cell_value("B1", "shared").unwrap();

    let entries = package(&wb);
    let sheet2 = entry(&entries, "xl/worksheets/sheet2.xml");
    assert!(sheet2.contains("<c r=\"A1\" t=\"s\"><v>1</v></c>"));
    assert!(sheet2.contains("<c r=\"B1\" t=\"s\"><v>0</v></c>"));

    let workbook = entry(&entries, "xl/workbook.xml");
    assert!(workbook.contains("<sheet name=\"Second\" sheetId=\"2\" r:id=\"rId2\"/>"));

    let types = entry(&entries, "[Content_Types].xml");
    assert!(types.contains("PartName=\"/xl/worksheets/sheet2.xml\""));
}

#[test]
fn test_hyperlinks_get_sheet_relationships() {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();
    sheet.set_cell_value("A1", "Docs").unwrap();
    let id = sheet.set_hyperlink("A1", "https://docs.example.com").unwrap();
    assert_eq!(id, "rId1");

    let entries = package(&wb);
    let rels = entry(&entries, "xl/worksheets/_rels/sheet1.xml.rels");
    assert!(rels.contains(
        "<Relationship Id=\"rId1\" Target=\"https://docs.example.com\" Type=\"https://docs.example.com\"/>"
    ));

    let sheet1 = entry(&entries, "xl/worksheets/sheet1.xml");
    assert!(sheet1.contains(
        "<hyperlink ref=\"A1\" r:id=\"rId1\" display=\"https://docs.example.com\"/>"
    ));
}

#[test]
fn test_layout_features() {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();
    sheet.set_cell_value("A1", "Region").unwrap();
    sheet.set_cell_value("B1", "Total").unwrap();
    sheet.set_cell_style("A1", &Style::new().bold(true)).unwrap();
    sheet.set_freeze_panes(1, 0);
    sheet.set_auto_filter(CellRange::parse("A1:B20").unwrap());
    sheet.merge_cells(&CellRange::parse("C1:D1").unwrap()).unwrap();
    sheet.page_setup_mut().orientation = PageOrientation::Landscape;

    let entries = package(&wb);
    let sheet1 = entry(&entries, "xl/worksheets/sheet1.xml");
    assert!(sheet1.contains("activePane=\"bottomLeft\" state=\"frozen\""));
    assert!(sheet1.contains("<autoFilter ref=\"A1:B20\"/>"));
    assert!(sheet1.contains("<mergeCell ref=\"C1:D1\"/>"));
    assert!(sheet1.contains("<c r=\"A1\" s=\"1\" t=\"s\"><v>0</v></c>"));
    assert!(sheet1.contains("<col min=\"1\" max=\"1\" style=\"1\"/>"));
    assert!(sheet1.contains("orientation=\"landscape\""));

    let workbook = entry(&entries, "xl/workbook.xml");
    assert!(workbook.contains("&apos;Sheet1&apos;!$A$1:$B$20"));
}

#[test]
fn test_save_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.xlsx");

    let mut wb = Workbook::new();
    wb.worksheet_mut(0).unwrap().set_cell_value("A1", 1.5).unwrap();
    wb.save(&path).unwrap();

    let file = std::fs::File::open(&path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut sheet = String::new();
    archive
        .by_name("xl/worksheets/sheet1.xml")
        .unwrap()
        .read_to_string(&mut sheet)
        .unwrap();
    assert!(sheet.contains("<v>1.5</v>"));

    assert!(wb.save(dir.path().join("out.ods")).is_err());
}

#[test]
fn test_open_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    std::fs::write(&path, "city,population\nOslo,709037\n").unwrap();

    let wb = Workbook::open(&path).unwrap();
    let sheet = wb.worksheet(0).unwrap();
    assert_eq!(sheet.get_value("B2").unwrap(), CellValue::Number(709037.0));

    let entries = package(&wb);
    let sheet1 = entry(&entries, "xl/worksheets/sheet1.xml");
    assert!(sheet1.contains("<c r=\"B2\" t=\"n\"><v>709037</v></c>"));
}

#[test]
fn test_dangling_hyperlink_is_an_error() {
    let mut wb = Workbook::new();
    wb.worksheet_mut(0)
        .unwrap()
        .add_relationship(sheetpack::Relationship::new("rId3", "https://orphan.example"));

    let mut buf = Vec::new();
    let err = XlsxWriter::write(&wb, Cursor::new(&mut buf)).unwrap_err();
    assert!(matches!(err, XlsxError::MissingHyperlinkCell { .. }));
    assert!(buf.is_empty());
}
