use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Accepts `YYYY-MM-DD` and `DD/MM/YYYY`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d/%m/%Y"))
        .ok()
}

/// Accepts `YYYY-MM` and `MM/YYYY`, returns `(year, month)`.
pub fn parse_month(s: &str) -> Option<(i32, u32)> {
    let s = s.trim();

    let (year, month) = if let Some((y, m)) = s.split_once('-') {
        (y.parse::<i32>().ok()?, m.parse::<u32>().ok()?)
    } else if let Some((m, y)) = s.split_once('/') {
        (y.parse::<i32>().ok()?, m.parse::<u32>().ok()?)
    } else {
        return None;
    };

    NaiveDate::from_ymd_opt(year, month, 1).map(|_| (year, month))
}

/// Month from the CLI argument, current month when absent.
pub fn month_or_current(arg: Option<&str>) -> AppResult<(i32, u32)> {
    match arg {
        Some(m) => parse_month(m).ok_or_else(|| AppError::InvalidMonth(m.to_string())),
        None => {
            let t = today();
            Ok((t.year(), t.month()))
        }
    }
}

pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("?")
}

/// "Março 2024"
pub fn month_label(year: i32, month: u32) -> String {
    format!("{} {}", month_name(month), year)
}
