//! Example: build a small report and save it as an xlsx file

use sheetpack::prelude::*;

fn main() -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook
        .worksheet_mut(0)
        .ok_or_else(|| Error::other("workbook has no sheet"))?;

    sheet.set_cell_value("A1", "Item")?;
    sheet.set_cell_value("B1", "Value")?;
    sheet.set_cell_value("C1", "Double")?;
    let header = Style::new().bold(true).fill_color(0xDDEBF7);
    for cell in ["A1", "B1", "C1"] {
        sheet.set_cell_style(cell, &header)?;
    }

    sheet.set_cell_value("A2", "Item 1")?;
    sheet.set_cell_value("B2", 100.0)?;
    sheet.set_cell_formula("C2", "=B2*2")?;

    sheet.set_cell_value("A3", "Item 2")?;
    sheet.set_cell_value("B3", 250.5)?;
    sheet.set_cell_formula("C3", "=B3*2")?;

    sheet.set_cell_value("A5", "Source")?;
    sheet.set_hyperlink("B5", "https://example.com/report")?;

    sheet.set_freeze_panes(1, 0);
    sheet.set_auto_filter(CellRange::parse("A1:C3")?);

    workbook.save("report.xlsx")?;
    println!("Wrote report.xlsx");
    Ok(())
}
