// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::model::ExportScope;
use crate::export::pdf_export::export_pdf;
use crate::ui::messages::warning;
use crate::utils::date::today;
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the file goes: an explicit path, or the default name inside a directory.
#[derive(Debug, Clone)]
pub enum ExportTarget {
    File(String),
    Dir(String),
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    pub fn resolve_path(scope: &ExportScope, format: &ExportFormat, target: &ExportTarget) -> PathBuf {
        match target {
            ExportTarget::File(f) => expand_tilde(f),
            ExportTarget::Dir(d) => {
                expand_tilde(d).join(scope.default_file_name(format.as_str(), today()))
            }
        }
    }

    /// Write the scope in the requested format. Returns the written path, or
    /// `None` when there was nothing to export.
    pub fn export(
        scope: &ExportScope,
        format: &ExportFormat,
        target: &ExportTarget,
        with_schedule: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        if scope.records.is_empty() {
            warning(format!("No records found for {}.", scope.title));
            return Ok(None);
        }

        let path = Self::resolve_path(scope, format, target);
        prepare_parent(&path)?;
        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(scope, &path, with_schedule)?,
            ExportFormat::Pdf => export_pdf(scope, &path, with_schedule)?,
            ExportFormat::Json => export_json(scope, &path)?,
        }

        Ok(Some(path))
    }
}

fn prepare_parent(path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
