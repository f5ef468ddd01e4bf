// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::get_headers;
use crate::export::{MealExport, notify_export_success};
use crate::ui::messages::info;
use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{
    Color, ExcelDateTime, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Typed value of one spreadsheet cell.
enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Date(&'a str),
    Empty,
}

impl Cell<'_> {
    fn display_width(&self) -> usize {
        match self {
            Cell::Text(s) | Cell::Date(s) => UnicodeWidthStr::width(*s),
            Cell::Number(n) => n.to_string().len(),
            Cell::Empty => 0,
        }
    }
}

fn row_cells(r: &MealExport) -> Vec<Cell<'_>> {
    let opt = |v: Option<u32>| v.map(|n| Cell::Number(f64::from(n))).unwrap_or(Cell::Empty);
    vec![
        Cell::Number(r.id as f64),
        Cell::Date(&r.meal_date),
        Cell::Text(&r.mode),
        opt(r.lunch),
        opt(r.dinner),
        Cell::Number(f64::from(r.total_meals)),
        Cell::Number(r.meal_price),
        Cell::Number(r.total_amount),
        Cell::Text(&r.person_name),
    ]
}

/// XLSX export with styled header, banded rows and auto column width.
pub(crate) fn export_xlsx(rows: &[MealExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("meals")?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }

    worksheet.set_freeze_panes(1, 0)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, r) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, cell) in row_cells(r).iter().enumerate() {
            write_xlsx_cell(worksheet, row, col as u16, cell, band_color)?;
            col_widths[col] = col_widths[col].max(cell.display_width());
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }

    workbook.save(path)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell<'_>,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    match cell {
        Cell::Date(s) => {
            let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(s.to_string()))?;
            let excel = ExcelDateTime::from_ymd(date.year() as u16, date.month() as u8, date.day() as u8)?;
            let fmt = base.set_num_format("yyyy-mm-dd");
            worksheet.write_with_format(row, col, &excel, &fmt)?;
        }
        Cell::Number(n) => {
            let fmt = base.set_align(FormatAlign::Right);
            worksheet.write_with_format(row, col, *n, &fmt)?;
        }
        Cell::Text(s) => {
            worksheet.write_with_format(row, col, *s, &base)?;
        }
        Cell::Empty => {
            worksheet.write_blank(row, col, &base)?;
        }
    }

    Ok(())
}
