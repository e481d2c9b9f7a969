//! Workbook part (`xl/workbook.xml`)

use sheetpack_core::{Relationship, Workbook};

use super::{escape_xml, ns, XML_DECLARATION};

/// Serialize the workbook part.
///
/// Sheet `i` is written with `sheetId` `i + 1` and relationship id
/// `rId{i + 1}`, matching [`Workbook::relationships`].
pub fn write_workbook(workbook: &Workbook) -> String {
    let mut content = String::with_capacity(1024);
    content.push_str(XML_DECLARATION);
    content.push_str(&format!(
        "\n<workbook xmlns=\"{}\" xmlns:r=\"{}\">",
        ns::SPREADSHEETML,
        ns::OFFICE_RELATIONSHIPS
    ));

    content.push_str(
        "\n    <fileVersion appName=\"xl\" lastEdited=\"4\" lowestEdited=\"4\" rupBuild=\"4505\"/>",
    );

    let settings = workbook.settings();
    content.push_str("\n    <workbookPr codeName=\"ThisWorkbook\"");
    if settings.date_1904 {
        content.push_str(" date1904=\"1\"");
    }
    content.push_str(" defaultThemeVersion=\"124226\"/>");

    content.push_str("\n    <bookViews>");
    content.push_str(&format!(
        "\n        <workbookView activeTab=\"{}\" autoFilterDateGrouping=\"1\" firstSheet=\"0\" \
         minimized=\"0\" showHorizontalScroll=\"1\" showSheetTabs=\"1\" showVerticalScroll=\"1\" \
         tabRatio=\"600\" visibility=\"visible\"/>",
        workbook.active_sheet()
    ));
    content.push_str("\n    </bookViews>");

    content.push_str("\n    <sheets>");
    for (i, sheet) in workbook.worksheets().enumerate() {
        content.push_str(&format!(
            "\n        <sheet name=\"{}\" sheetId=\"{}\" r:id=\"{}\"/>",
            escape_xml(sheet.name()),
            i + 1,
            Relationship::positional_id(i)
        ));
    }
    content.push_str("\n    </sheets>");

    let filtered: Vec<_> = workbook
        .worksheets()
        .filter_map(|sheet| sheet.auto_filter().map(|range| (sheet.name(), range)))
        .collect();
    if !filtered.is_empty() {
        content.push_str("\n    <definedNames>");
        for (title, range) in filtered {
            // Filter names are always scoped to the first sheet
            let text = format!(
                "'{}'!{}",
                title.replace('\'', "''"),
                range.make_absolute().to_a1_string()
            );
            content.push_str(&format!(
                "\n        <definedName name=\"_xlnm._FilterDatabase\" hidden=\"1\" localSheetId=\"0\">{}</definedName>",
                escape_xml(&text)
            ));
        }
        content.push_str("\n    </definedNames>");
    }

    content.push_str(&format!(
        "\n    <calcPr calcId=\"124519\" calcMode=\"auto\" fullCalcOnLoad=\"{}\"/>",
        if settings.calc_on_open { 1 } else { 0 }
    ));

    content.push_str("\n</workbook>");
    content
}
