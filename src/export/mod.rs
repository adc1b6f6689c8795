// src/export/mod.rs

pub mod csv;
mod fs_utils;
mod json;
pub mod logic;
pub mod model;
pub mod pdf;
mod pdf_export;

pub use logic::{ExportLogic, ExportTarget};
pub use model::{DayStatus, ExportRow, ExportScope};
pub use pdf_export::build_pdf;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Common completion message for every format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Pdf,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Json => "json",
        }
    }
}
