// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{DayStatus, ExportScope, get_headers};
use crate::export::notify_export_success;
use crate::export::pdf::{CellTint, PdfManager, TableRow};
use crate::ui::messages::info;
use std::path::Path;

/// Index of the "Diferença da Jornada" column.
const BALANCE_COL: usize = 4;

pub fn build_pdf(scope: &ExportScope, with_schedule: bool) -> PdfManager {
    let headers = get_headers(with_schedule);
    let schedule = with_schedule.then_some(scope.profile);

    let rows: Vec<TableRow> = scope
        .rows()
        .iter()
        .map(|r| TableRow {
            cells: r.cells(schedule),
            tint: match r.status {
                DayStatus::Overtime => Some((BALANCE_COL, CellTint::Positive)),
                DayStatus::Deficit => Some((BALANCE_COL, CellTint::Negative)),
                _ => None,
            },
        })
        .collect();

    let title = format!("Horas Extras - {}", scope.title);
    let subtitle = format!(
        "{} | gerado em {}",
        scope.profile.display_name,
        chrono::Local::now().format("%d/%m/%Y %H:%M")
    );

    let mut pdf = PdfManager::new();
    pdf.write_report(&title, &subtitle, &scope.summary_lines(), &headers, &rows);
    pdf
}

pub(crate) fn export_pdf(scope: &ExportScope, path: &Path, with_schedule: bool) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    build_pdf(scope, with_schedule)
        .save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
