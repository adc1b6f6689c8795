// src/import/csv.rs

use crate::core::calculator::shift::parse_clock_into_timestamp;
use crate::errors::{AppResult, ImportError};
use crate::models::day_record::DayRecord;
use crate::utils::date::parse_date;
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

/// Positions of the three columns the importer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    date: usize,
    entry: usize,
    exit: usize,
}

fn find_column(header: &StringRecord, names: &[&str]) -> Option<usize> {
    header
        .iter()
        .position(|field| names.iter().any(|n| field.contains(n)))
}

/// Substring match on the header, in any order.
fn locate_columns(header: &StringRecord) -> Result<Columns, ImportError> {
    let date = find_column(header, &["Data"]);
    let entry = find_column(header, &["Entrada"]);
    let exit = find_column(header, &["Saída", "Saida"]);

    match (date, entry, exit) {
        (Some(date), Some(entry), Some(exit)) => Ok(Columns { date, entry, exit }),
        _ => {
            let missing = [(date, "Data"), (entry, "Entrada"), (exit, "Saída")]
                .iter()
                .filter(|(idx, _)| idx.is_none())
                .map(|(_, name)| name.to_string())
                .collect();
            Err(ImportError::MissingColumns(missing))
        }
    }
}

/// Summary/configuration trailers, separators and empty lines.
fn is_skippable(row: &StringRecord) -> bool {
    if row.iter().all(|f| f.trim().is_empty()) {
        return true;
    }

    let first = row.get(0).unwrap_or("").trim();
    first.starts_with("---")
        || row
            .iter()
            .any(|f| f.contains("RESUMO") || f.contains("CONFIGURAÇÃO"))
}

fn parse_row(row: &StringRecord, cols: Columns, line: u64) -> Option<DayRecord> {
    if row.len() < 3 || row.get(0).is_none_or(|f| f.trim().is_empty()) {
        debug!(line, "skipping short or dateless row");
        return None;
    }

    let raw_date = row.get(cols.date).unwrap_or("");
    let Some(date) = parse_date(raw_date) else {
        warn!(line, value = raw_date, "skipping row with unparseable date");
        return None;
    };

    let entry = parse_clock_into_timestamp(date, row.get(cols.entry).unwrap_or(""));
    let exit = parse_clock_into_timestamp(date, row.get(cols.exit).unwrap_or(""));

    Some(DayRecord::with_times(date, entry, exit))
}

/// Parse an exported (or hand-written) CSV into fresh day records.
///
/// The whole input is rejected when it is empty, lacks one of the
/// `Data`/`Entrada`/`Saída` header columns, or yields no valid row.
pub fn parse_csv(content: &str) -> AppResult<Vec<DayRecord>> {
    let content = content.trim_start_matches('\u{feff}');
    if content.trim().is_empty() {
        return Err(ImportError::EmptyFile.into());
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let mut rows = rdr.records();

    let header = loop {
        match rows.next() {
            Some(row) => {
                let row = row?;
                if !row.iter().all(|f| f.is_empty()) {
                    break row;
                }
            }
            None => return Err(ImportError::EmptyFile.into()),
        }
    };

    let cols = locate_columns(&header)?;

    let mut records = Vec::new();
    for row in rows {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        if is_skippable(&row) {
            continue;
        }

        if let Some(record) = parse_row(&row, cols, line) {
            records.push(record);
        }
    }

    if records.is_empty() {
        return Err(ImportError::NoValidRows.into());
    }

    debug!(records = records.len(), "csv parsed");
    Ok(records)
}
