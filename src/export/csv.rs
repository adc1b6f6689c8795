// src/export/csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{ExportScope, get_headers};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use csv::{QuoteStyle, WriterBuilder};
use std::fs;
use std::path::Path;

/// Spreadsheet tools need the BOM to pick UTF-8 for the accented headers.
const UTF8_BOM: &str = "\u{feff}";

/// Render the CSV document: header, one row per record, the summary row and
/// optionally the schedule configuration row. Every field is quoted.
pub fn render_csv(scope: &ExportScope, with_schedule: bool) -> AppResult<String> {
    let headers = get_headers(with_schedule);
    let width = headers.len();
    let schedule = with_schedule.then_some(scope.profile);

    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .flexible(true)
        .from_writer(Vec::new());

    wtr.write_record(&headers)?;

    for row in scope.rows() {
        wtr.write_record(row.cells(schedule))?;
    }

    wtr.write_record(scope.summary_cells(width))?;

    if with_schedule {
        wtr.write_record(scope.schedule_cells(width))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    let body = String::from_utf8(bytes)
        .map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))?;

    Ok(format!("{UTF8_BOM}{body}"))
}

pub(crate) fn export_csv(scope: &ExportScope, path: &Path, with_schedule: bool) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let content = render_csv(scope, with_schedule)?;
    fs::write(path, content)?;

    notify_export_success("CSV", path);
    Ok(())
}
