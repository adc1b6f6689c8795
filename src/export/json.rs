// src/export/json.rs

use crate::errors::AppResult;
use crate::export::model::ExportScope;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// Raw records in the stored layout, pretty-printed.
pub(crate) fn export_json(scope: &ExportScope, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&scope.records)?;
    fs::write(path, json_data)?;

    notify_export_success("JSON", path);
    Ok(())
}
