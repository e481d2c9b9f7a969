//! Worksheet part (`xl/worksheets/sheetN.xml`)

use ahash::AHashMap;

use sheetpack_core::{
    CellAddress, CellData, CellRange, CellType, CellValue, FreezePanes, PageSetup, StyleRegistry,
    Worksheet,
};

use super::{escape_xml, ns, text_element, XML_DECLARATION};
use crate::error::{XlsxError, XlsxResult};

/// Style index written for every styled cell and column.
///
/// Index 0 is the default format; the stylesheet written by the package
/// writer defines exactly one further format.
const PLACEHOLDER_STYLE_INDEX: u32 = 1;

/// Value written for numbers that have no literal form
const NON_FINITE_ERROR: &str = "#NUM!";

/// Serialize one worksheet.
///
/// `strings` is the workbook's shared string table. Strings found there are
/// written by index; anything else is written inline. `styles` is the
/// workbook's style registry, and every styled cell must be registered.
pub fn write_worksheet(
    sheet: &Worksheet,
    strings: &[String],
    styles: &StyleRegistry,
) -> XlsxResult<String> {
    let part = format!("worksheet '{}'", sheet.name());
    let string_index = SharedStringIndex::new(strings);

    let mut content = String::with_capacity(1024 + sheet.cell_count() * 48);
    content.push_str(XML_DECLARATION);
    content.push_str(&format!(
        "\n<worksheet xmlns=\"{}\" xmlns:r=\"{}\">",
        ns::SPREADSHEETML,
        ns::OFFICE_RELATIONSHIPS
    ));

    write_sheet_properties(&mut content, sheet.page_setup());
    content.push_str(&format!(
        "\n    <dimension ref=\"{}\"/>",
        relative_ref(&sheet.calculate_dimension())
    ));
    write_sheet_views(&mut content, sheet.freeze_panes());
    content.push_str("\n    <sheetFormatPr baseColWidth=\"10\" defaultRowHeight=\"15\"/>");

    let columns = styled_columns(sheet, styles, &part)?;
    if !columns.is_empty() {
        content.push_str("\n    <cols>");
        for column in columns {
            content.push_str(&format!(
                "\n        <col min=\"{0}\" max=\"{0}\" style=\"{1}\"/>",
                column, PLACEHOLDER_STYLE_INDEX
            ));
        }
        content.push_str("\n    </cols>");
    }

    let hyperlink_cells = write_sheet_data(&mut content, sheet, &string_index);

    if let Some(range) = sheet.auto_filter() {
        content.push_str(&format!(
            "\n    <autoFilter ref=\"{}\"/>",
            relative_ref(range)
        ));
    }

    let merged = sheet.merged_regions();
    if !merged.is_empty() {
        content.push_str(&format!("\n    <mergeCells count=\"{}\">", merged.len()));
        for range in merged {
            content.push_str(&format!(
                "\n        <mergeCell ref=\"{}\"/>",
                relative_ref(range)
            ));
        }
        content.push_str("\n    </mergeCells>");
    }

    let relationships = sheet.relationships();
    if !relationships.is_empty() {
        content.push_str("\n    <hyperlinks>");
        for rel in relationships {
            let cell = hyperlink_cells.get(rel.id.as_str()).ok_or_else(|| {
                XlsxError::MissingHyperlinkCell {
                    part: part.clone(),
                    relationship_id: rel.id.clone(),
                }
            })?;
            content.push_str(&format!(
                "\n        <hyperlink ref=\"{}\" r:id=\"{}\" display=\"{}\"/>",
                cell,
                escape_xml(&rel.id),
                escape_xml(&rel.target_uri)
            ));
        }
        content.push_str("\n    </hyperlinks>");
    }

    let margins = sheet.page_margins();
    content.push_str(&format!(
        "\n    <pageMargins left=\"{}\" right=\"{}\" top=\"{}\" bottom=\"{}\" header=\"{}\" footer=\"{}\"/>",
        margins.left, margins.right, margins.top, margins.bottom, margins.header, margins.footer
    ));

    let setup = sheet.page_setup();
    if !setup.is_default() {
        content.push_str(&format!(
            "\n    <pageSetup orientation=\"{}\" paperSize=\"{}\" fitToHeight=\"{}\" fitToWidth=\"{}\"/>",
            setup.orientation.as_str(),
            setup.paper_size,
            u8::from(setup.fit_to_height),
            u8::from(setup.fit_to_width)
        ));
    }

    content.push_str("\n</worksheet>");
    Ok(content)
}

/// Position of each distinct string in the shared string table.
///
/// Duplicates keep their first position, so lookups agree with a linear
/// scan for the first match.
struct SharedStringIndex<'a> {
    positions: AHashMap<&'a str, usize>,
}

impl<'a> SharedStringIndex<'a> {
    fn new(strings: &'a [String]) -> Self {
        let mut positions = AHashMap::with_capacity(strings.len());
        for (i, s) in strings.iter().enumerate() {
            positions.entry(s.as_str()).or_insert(i);
        }
        Self { positions }
    }

    fn get(&self, s: &str) -> Option<usize> {
        self.positions.get(s).copied()
    }
}

/// Which quadrant of a frozen view has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pane {
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Pane {
    fn for_split(panes: &FreezePanes) -> Option<Pane> {
        match (panes.has_column_split(), panes.has_row_split()) {
            (false, false) => None,
            (true, false) => Some(Pane::TopRight),
            (false, true) => Some(Pane::BottomLeft),
            (true, true) => Some(Pane::BottomRight),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Pane::TopRight => "topRight",
            Pane::BottomLeft => "bottomLeft",
            Pane::BottomRight => "bottomRight",
        }
    }
}

fn write_sheet_properties(content: &mut String, setup: &PageSetup) {
    content.push_str("\n    <sheetPr>");
    content.push_str("\n        <outlinePr summaryBelow=\"1\" summaryRight=\"1\"/>");
    if !setup.is_default() {
        content.push_str(&format!(
            "\n        <pageSetUpPr fitToPage=\"{}\"/>",
            u8::from(setup.fit_to_page)
        ));
    }
    content.push_str("\n    </sheetPr>");
}

fn write_sheet_views(content: &mut String, panes: Option<&FreezePanes>) {
    content.push_str("\n    <sheetViews>");
    content.push_str("\n        <sheetView workbookViewId=\"0\">");

    let active = panes.and_then(Pane::for_split);
    if let (Some(panes), Some(active)) = (panes, active) {
        let mut pane = String::from("\n            <pane");
        if panes.has_column_split() {
            pane.push_str(&format!(" xSplit=\"{}\"", panes.col));
        }
        if panes.has_row_split() {
            pane.push_str(&format!(" ySplit=\"{}\"", panes.row));
        }
        pane.push_str(&format!(
            " topLeftCell=\"{}\" activePane=\"{}\" state=\"frozen\"/>",
            panes.top_left_cell(),
            active.as_str()
        ));
        content.push_str(&pane);

        if active == Pane::BottomRight {
            content.push_str("\n            <selection pane=\"topRight\"/>");
            content.push_str("\n            <selection pane=\"bottomLeft\"/>");
        }
    }

    match active {
        Some(pane) => content.push_str(&format!(
            "\n            <selection pane=\"{}\" activeCell=\"A1\" sqref=\"A1\"/>",
            pane.as_str()
        )),
        None => content.push_str("\n            <selection activeCell=\"A1\" sqref=\"A1\"/>"),
    }

    content.push_str("\n        </sheetView>");
    content.push_str("\n    </sheetViews>");
}

/// 1-based columns holding at least one styled cell, ascending and distinct.
///
/// Also checks that every styled cell's format is registered.
fn styled_columns(sheet: &Worksheet, styles: &StyleRegistry, part: &str) -> XlsxResult<Vec<u32>> {
    let mut columns = Vec::new();
    for (row, col, cell) in sheet.iter_cells() {
        if let Some(hash) = cell.style_hash {
            if !styles.contains(hash) {
                return Err(XlsxError::MissingStyle {
                    part: part.to_string(),
                    cell: CellAddress::new(row, col).to_a1_string(),
                });
            }
            columns.push(u32::from(col) + 1);
        }
    }
    columns.sort_unstable();
    columns.dedup();
    Ok(columns)
}

/// Write `<sheetData>` and return the cell each hyperlink relationship is
/// attached to.
fn write_sheet_data<'s>(
    content: &mut String,
    sheet: &'s Worksheet,
    strings: &SharedStringIndex<'_>,
) -> AHashMap<&'s str, String> {
    let mut hyperlink_cells = AHashMap::new();

    content.push_str("\n    <sheetData>");
    for row in sheet.rows() {
        if !row.cells().any(|(_, cell)| cell.data_type() != CellType::Null) {
            log::trace!(
                "{}: skipping row {} with no values",
                sheet.name(),
                row.index + 1
            );
            continue;
        }

        let emitted: Vec<(CellAddress, &CellData)> = row
            .cells()
            .filter(|(_, cell)| cell.data_type() != CellType::Null || cell.is_merged())
            .collect();
        let (first, last) = match (emitted.first(), emitted.last()) {
            (Some(first), Some(last)) => (first.0.column_number(), last.0.column_number()),
            _ => continue,
        };

        content.push_str(&format!(
            "\n        <row r=\"{}\" spans=\"{}:{}\"",
            row.index + 1,
            first,
            last
        ));
        if let Some(props) = sheet.row_properties(row.index) {
            content.push_str(&format!(
                " customHeight=\"1\" ht=\"{}\"",
                format_height(props.height)
            ));
        }
        content.push('>');

        for (address, cell) in emitted {
            let reference = address.to_a1_string();
            if let Some(id) = cell.hyperlink.as_deref() {
                hyperlink_cells.insert(id, reference.clone());
            }
            write_cell(content, &reference, cell, strings);
        }

        content.push_str("\n        </row>");
    }
    content.push_str("\n    </sheetData>");

    hyperlink_cells
}

fn write_cell(content: &mut String, reference: &str, cell: &CellData, strings: &SharedStringIndex<'_>) {
    let style = if cell.has_style() && !cell.value.is_empty() {
        format!(" s=\"{}\"", PLACEHOLDER_STYLE_INDEX)
    } else {
        String::new()
    };

    let node = match &cell.value {
        CellValue::Empty => format!("<c r=\"{}\"/>", reference),
        CellValue::String(s) => match strings.get(s) {
            Some(index) => format!("<c r=\"{}\"{} t=\"s\"><v>{}</v></c>", reference, style, index),
            None => format!(
                "<c r=\"{}\"{} t=\"inlineStr\"><is>{}</is></c>",
                reference,
                style,
                text_element(s)
            ),
        },
        CellValue::Boolean(b) => format!(
            "<c r=\"{}\"{} t=\"b\"><v>{}</v></c>",
            reference,
            style,
            u8::from(*b)
        ),
        CellValue::Number(n) if !n.is_finite() => {
            log::debug!("cell {} holds {}; writing {}", reference, n, NON_FINITE_ERROR);
            format!(
                "<c r=\"{}\"{} t=\"e\"><v>{}</v></c>",
                reference, style, NON_FINITE_ERROR
            )
        }
        CellValue::Number(n) => format!(
            "<c r=\"{}\"{} t=\"n\"><v>{}</v></c>",
            reference,
            style,
            format_number(*n)
        ),
        CellValue::Formula(text) => {
            let mut chars = text.chars();
            chars.next();
            format!(
                "<c r=\"{}\"{}><f>{}</f><v/></c>",
                reference,
                style,
                escape_xml(chars.as_str())
            )
        }
    };

    content.push_str("\n            ");
    content.push_str(&node);
}

/// Numeric literal: whole values without a fractional part, everything else
/// as the shortest decimal that reads back to the same value. Never uses an
/// exponent.
pub(crate) fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        // f64's Display is shortest round-trip and never exponential
        format!("{}", n)
    }
}

/// Row height: whole values keep a single `.0`
fn format_height(height: f64) -> String {
    if height.fract() == 0.0 {
        format!("{:.1}", height)
    } else {
        format!("{}", height)
    }
}

/// A range reference without `$` markers
fn relative_ref(range: &CellRange) -> String {
    CellRange::from_indices(range.start.row, range.start.col, range.end.row, range.end.col)
        .to_a1_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sheetpack_core::{Style, Workbook};

    fn emit(sheet: &Worksheet, strings: &[String]) -> String {
        write_worksheet(sheet, strings, &StyleRegistry::new()).unwrap()
    }

    fn sheet_data(xml: &str) -> &str {
        let start = xml.find("<sheetData>").unwrap();
        let end = xml.find("</sheetData>").unwrap();
        &xml[start..end + "</sheetData>".len()]
    }

    #[test]
    fn test_round_trip_scenario() {
        let mut sheet = Worksheet::new("Sheet1");
        sheet.set_cell_value("A1", "hello").unwrap();
        sheet.set_cell_value("B1", 42.0).unwrap();
        sheet.set_cell_value("C1", true).unwrap();
        sheet.set_cell_formula("A2", "=SUM(B1:B1)").unwrap();

        let xml = emit(&sheet, &["hello".to_string()]);
        assert!(xml.contains("<dimension ref=\"A1:C2\"/>"));
        assert_eq!(
            sheet_data(&xml),
            "<sheetData>\n        \
             <row r=\"1\" spans=\"1:3\">\n            \
             <c r=\"A1\" t=\"s\"><v>0</v></c>\n            \
             <c r=\"B1\" t=\"n\"><v>42</v></c>\n            \
             <c r=\"C1\" t=\"b\"><v>1</v></c>\n        \
             </row>\n        \
             <row r=\"2\" spans=\"1:1\">\n            \
             <c r=\"A2\"><f>SUM(B1:B1)</f><v/></c>\n        \
             </row>\n    \
             </sheetData>"
        );
        assert!(!xml.contains("<cols>"));
        assert!(!xml.contains("<hyperlinks>"));
    }

    #[test]
    fn test_empty_sheet() {
        let xml = emit(&Worksheet::new("Empty"), &[]);
        assert!(xml.contains("<dimension ref=\"A1\"/>"));
        assert!(xml.contains("<sheetData>\n    </sheetData>"));
        assert!(xml.contains(
            "<pageMargins left=\"0.7\" right=\"0.7\" top=\"0.75\" bottom=\"0.75\" header=\"0.3\" footer=\"0.3\"/>"
        ));
        assert!(!xml.contains("<pageSetup "));
        assert!(!xml.contains("pageSetUpPr"));
        assert!(xml.contains("<selection activeCell=\"A1\" sqref=\"A1\"/>"));
        assert!(!xml.contains("<pane"));
    }

    #[test]
    fn test_merge_scenario() {
        let mut sheet = Worksheet::new("Sheet1");
        sheet.set_cell_value("A1", "x").unwrap();
        sheet.merge_cells(&CellRange::parse("A1:B2").unwrap()).unwrap();

        let xml = emit(&sheet, &["x".to_string()]);
        // Row 2 holds only merged placeholders and is suppressed
        assert_eq!(
            sheet_data(&xml),
            "<sheetData>\n        \
             <row r=\"1\" spans=\"1:2\">\n            \
             <c r=\"A1\" t=\"s\"><v>0</v></c>\n            \
             <c r=\"B1\"/>\n        \
             </row>\n    \
             </sheetData>"
        );
        assert!(xml.contains(
            "<mergeCells count=\"1\">\n        <mergeCell ref=\"A1:B2\"/>\n    </mergeCells>"
        ));
    }

    #[test]
    fn test_hyperlink_scenario() {
        let mut sheet = Worksheet::new("Sheet1");
        sheet.set_cell_value("D1", "site").unwrap();
        sheet.add_relationship(sheetpack_core::Relationship::new(
            "rId7",
            "https://example.com",
        ));
        sheet.set_cell_hyperlink_id("D1", "rId7").unwrap();

        let xml = emit(&sheet, &[]);
        assert!(xml.contains(
            "<hyperlink ref=\"D1\" r:id=\"rId7\" display=\"https://example.com\"/>"
        ));
        let data_end = xml.find("</sheetData>").unwrap();
        let links = xml.find("<hyperlinks>").unwrap();
        let margins = xml.find("<pageMargins").unwrap();
        assert!(data_end < links && links < margins);
    }

    #[test]
    fn test_dangling_hyperlink_fails() {
        let mut sheet = Worksheet::new("Links");
        sheet.add_relationship(sheetpack_core::Relationship::new("rId1", "https://a.example"));

        let err = write_worksheet(&sheet, &[], &StyleRegistry::new()).unwrap_err();
        match err {
            XlsxError::MissingHyperlinkCell {
                part,
                relationship_id,
            } => {
                assert_eq!(part, "worksheet 'Links'");
                assert_eq!(relationship_id, "rId1");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_frozen_pane_states() {
        let cases = [
            ((0, 0), None),
            ((0, 1), Some("<pane xSplit=\"1\" topLeftCell=\"B1\" activePane=\"topRight\" state=\"frozen\"/>")),
            ((1, 0), Some("<pane ySplit=\"1\" topLeftCell=\"A2\" activePane=\"bottomLeft\" state=\"frozen\"/>")),
            (
                (2, 3),
                Some("<pane xSplit=\"3\" ySplit=\"2\" topLeftCell=\"D3\" activePane=\"bottomRight\" state=\"frozen\"/>"),
            ),
        ];

        for ((rows, cols), expected) in cases {
            let mut sheet = Worksheet::new("Frozen");
            sheet.set_freeze_panes(rows, cols);
            let xml = emit(&sheet, &[]);
            match expected {
                None => {
                    assert!(!xml.contains("<pane"));
                    assert!(xml.contains("<selection activeCell=\"A1\" sqref=\"A1\"/>"));
                }
                Some(pane) => {
                    assert!(xml.contains(pane), "missing {pane} in {xml}");
                    assert_eq!(xml.matches("<selection").count(), if rows > 0 && cols > 0 { 3 } else { 1 });
                }
            }
        }
    }

    #[test]
    fn test_bottom_right_selections() {
        let mut sheet = Worksheet::new("Frozen");
        sheet.set_freeze_panes(1, 1);
        let xml = emit(&sheet, &[]);
        assert!(xml.contains(
            "state=\"frozen\"/>\n            \
             <selection pane=\"topRight\"/>\n            \
             <selection pane=\"bottomLeft\"/>\n            \
             <selection pane=\"bottomRight\" activeCell=\"A1\" sqref=\"A1\"/>"
        ));
    }

    #[test]
    fn test_null_rows_and_spans() {
        let mut sheet = Worksheet::new("Rows");
        sheet.set_cell_value("C5", 1.0).unwrap();
        sheet.set_cell_value("F5", 2.0).unwrap();
        sheet.set_cell_style("A9", &Style::new().bold(true)).unwrap();

        let mut wb = Workbook::empty();
        wb.add_existing_worksheet(sheet).unwrap();
        let sheet = wb.worksheet(0).unwrap();
        let xml = write_worksheet(sheet, &[], &StyleRegistry::build(&wb)).unwrap();

        assert!(xml.contains("<row r=\"5\" spans=\"3:6\">"));
        assert!(!xml.contains("<row r=\"9\""));
        // The styled empty cell still marks its column
        assert!(xml.contains("<cols>\n        <col min=\"1\" max=\"1\" style=\"1\"/>\n    </cols>"));
    }

    #[test]
    fn test_inline_string_fallback() {
        let mut sheet = Worksheet::new("Inline");
        sheet.set_cell_value("A1", "missing").unwrap();
        sheet.set_cell_value("A2", "").unwrap();

        let xml = emit(&sheet, &[]);
        assert!(xml.contains("<c r=\"A1\" t=\"inlineStr\"><is><t>missing</t></is></c>"));
        assert!(xml.contains("<c r=\"A2\" t=\"inlineStr\"><is><t></t></is></c>"));
    }

    #[test]
    fn test_first_matching_string_index() {
        let mut sheet = Worksheet::new("Dupes");
        sheet.set_cell_value("A1", "b").unwrap();
        let strings = vec!["a".to_string(), "b".to_string(), "b".to_string()];

        let xml = emit(&sheet, &strings);
        assert!(xml.contains("<c r=\"A1\" t=\"s\"><v>1</v></c>"));
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(3.25), "3.25");
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1.5e-7), "0.00000015");
    }

    #[test]
    fn test_non_finite_numbers() {
        let mut sheet = Worksheet::new("Nan");
        sheet.set_cell_value("A1", f64::NAN).unwrap();
        sheet.set_cell_value("B1", f64::INFINITY).unwrap();

        let xml = emit(&sheet, &[]);
        assert!(xml.contains("<c r=\"A1\" t=\"e\"><v>#NUM!</v></c>"));
        assert!(xml.contains("<c r=\"B1\" t=\"e\"><v>#NUM!</v></c>"));
    }

    #[test]
    fn test_row_heights() {
        let mut sheet = Worksheet::new("Heights");
        sheet.set_cell_value("A1", 1.0).unwrap();
        sheet.set_cell_value("A2", 2.0).unwrap();
        sheet.set_row_height(0, 30.0).unwrap();
        sheet.set_row_height(1, 12.75).unwrap();

        let xml = emit(&sheet, &[]);
        assert!(xml.contains("<row r=\"1\" spans=\"1:1\" customHeight=\"1\" ht=\"30.0\">"));
        assert!(xml.contains("<row r=\"2\" spans=\"1:1\" customHeight=\"1\" ht=\"12.75\">"));
    }

    #[test]
    fn test_styled_cells() {
        let mut wb = Workbook::new();
        let sheet = wb.worksheet_mut(0).unwrap();
        sheet.set_cell_value("B2", 1.0).unwrap();
        sheet.set_cell_style("B2", &Style::new().bold(true)).unwrap();
        sheet.set_cell_value("D3", "x").unwrap();
        sheet.set_cell_style("D3", &Style::new().italic(true)).unwrap();
        sheet.set_cell_value("B4", 2.0).unwrap();
        sheet.set_cell_style("B4", &Style::new().italic(true)).unwrap();

        let registry = StyleRegistry::build(&wb);
        let xml = write_worksheet(wb.worksheet(0).unwrap(), &[], &registry).unwrap();
        assert!(xml.contains("<c r=\"B2\" s=\"1\" t=\"n\"><v>1</v></c>"));
        assert!(xml.contains(
            "<cols>\n        <col min=\"2\" max=\"2\" style=\"1\"/>\n        <col min=\"4\" max=\"4\" style=\"1\"/>\n    </cols>"
        ));
    }

    #[test]
    fn test_unregistered_style_fails() {
        let mut sheet = Worksheet::new("Styled");
        sheet.set_cell_value("C7", 1.0).unwrap();
        sheet.set_cell_style("C7", &Style::new().bold(true)).unwrap();

        let err = write_worksheet(&sheet, &[], &StyleRegistry::new()).unwrap_err();
        assert!(matches!(
            err,
            XlsxError::MissingStyle { ref cell, .. } if cell == "C7"
        ));
    }

    #[test]
    fn test_auto_filter_and_page_setup() {
        let mut sheet = Worksheet::new("Print");
        sheet.set_auto_filter(CellRange::parse("A1:C10").unwrap());
        sheet.page_setup_mut().orientation = sheetpack_core::PageOrientation::Landscape;
        sheet.page_setup_mut().fit_to_page = true;
        sheet.page_setup_mut().fit_to_width = true;

        let xml = emit(&sheet, &[]);
        assert!(xml.contains("<autoFilter ref=\"A1:C10\"/>"));
        assert!(xml.contains("<pageSetUpPr fitToPage=\"1\"/>"));
        assert!(xml.contains(
            "<pageSetup orientation=\"landscape\" paperSize=\"1\" fitToHeight=\"0\" fitToWidth=\"1\"/>"
        ));
        let filter = xml.find("<autoFilter").unwrap();
        let margins = xml.find("<pageMargins").unwrap();
        let setup = xml.find("<pageSetup ").unwrap();
        assert!(filter < margins && margins < setup);
    }

    #[test]
    fn test_escaped_text_and_formula() {
        let mut sheet = Worksheet::new("Escapes");
        sheet.set_cell_value("A1", "<b>&</b>").unwrap();
        sheet.set_cell_formula("B1", "=IF(A1<>\"\",1,0)").unwrap();

        let xml = emit(&sheet, &[]);
        assert!(xml.contains("<t>&lt;b&gt;&amp;&lt;/b&gt;</t>"));
        assert!(xml.contains("<f>IF(A1&lt;&gt;&quot;&quot;,1,0)</f><v/>"));
    }
}
