// src/import/logic.rs

use crate::errors::{AppResult, ImportError};
use crate::import::csv::parse_csv;
use crate::models::day_record::DayRecord;
use crate::store::RecordStore;
use crate::store::kv::KeyValueStore;
use crate::ui::messages::warning;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub struct ImportLogic;

impl ImportLogic {
    /// Read and parse a `.csv` file. Nothing is stored yet.
    pub fn read_file(path: &Path) -> AppResult<Vec<DayRecord>> {
        let is_csv = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

        if !is_csv {
            return Err(ImportError::WrongExtension(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)?;
        parse_csv(&content)
    }

    /// Keep the first row of each date; later rows for the same date are
    /// dropped with a warning.
    pub fn dedupe_dates(records: Vec<DayRecord>) -> Vec<DayRecord> {
        let mut seen = HashSet::new();
        records
            .into_iter()
            .filter(|r| {
                let first = seen.insert(r.date);
                if !first {
                    warning(format!("Skipping duplicate row for {}.", r.date));
                }
                first
            })
            .collect()
    }

    /// Replace the whole record set with the imported one.
    pub fn apply<S: KeyValueStore>(
        store: &mut RecordStore<S>,
        records: Vec<DayRecord>,
    ) -> AppResult<usize> {
        let records = Self::dedupe_dates(records);
        let count = records.len();
        store.replace_all(records)?;
        Ok(count)
    }
}
