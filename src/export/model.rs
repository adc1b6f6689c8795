// src/export/model.rs

use crate::core::calculator::calendar::{self, summarize_records};
use crate::core::calculator::shift::{format_clock, format_hours, format_minutes};
use crate::models::day_record::DayRecord;
use crate::models::schedule::ScheduleProfile;
use crate::models::summary::PeriodTotals;
use crate::utils::date::month_label;
use chrono::NaiveDate;

pub const SUMMARY_MARKER: &str = "--- RESUMO DO PERÍODO ---";
pub const SCHEDULE_MARKER: &str = "--- CONFIGURAÇÃO DA ESCALA ---";

/// Status label of a day. Days without worked time are "Sem Registro".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Overtime,
    Deficit,
    Complete,
    NoRecord,
}

impl DayStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DayStatus::Overtime => "Hora Extra",
            DayStatus::Deficit => "Débito",
            DayStatus::Complete => "Completo",
            DayStatus::NoRecord => "Sem Registro",
        }
    }
}

/// Flattened, display-ready view of one record.
#[derive(Debug, Clone)]
pub struct ExportRow {
    pub date: NaiveDate,
    pub entry: String,
    pub exit: String,
    pub worked_minutes: i64,
    pub balance_minutes: i64,
    pub status: DayStatus,
}

impl ExportRow {
    pub fn from_record(record: &DayRecord, profile: &ScheduleProfile) -> Self {
        let worked = record.worked_minutes();
        let balance = if worked > 0 {
            worked - profile.daily_target_minutes
        } else {
            0
        };

        let status = match (worked, balance) {
            (0, _) => DayStatus::NoRecord,
            (_, b) if b > 0 => DayStatus::Overtime,
            (_, b) if b < 0 => DayStatus::Deficit,
            _ => DayStatus::Complete,
        };

        Self {
            date: record.date,
            entry: format_clock(record.entry),
            exit: format_clock(record.exit),
            worked_minutes: worked,
            balance_minutes: balance,
            status,
        }
    }

    pub fn cells(&self, schedule: Option<&ScheduleProfile>) -> Vec<String> {
        let mut cells = vec![
            self.date.format("%d/%m/%Y").to_string(),
            self.entry.clone(),
            self.exit.clone(),
            format_hours(self.worked_minutes),
            format_minutes(self.balance_minutes),
            self.status.label().to_string(),
        ];
        if let Some(p) = schedule {
            cells.push(p.display_name.to_string());
        }
        cells
    }
}

/// Header for CSV / PDF.
pub(crate) fn get_headers(with_schedule: bool) -> Vec<&'static str> {
    let mut headers = vec![
        "Data",
        "Entrada",
        "Saída",
        "Horas Trabalhadas",
        "Diferença da Jornada",
        "Status",
    ];
    if with_schedule {
        headers.push("Escala");
    }
    headers
}

/// What is being exported: a month or the whole record set.
#[derive(Debug, Clone)]
pub struct ExportScope {
    pub title: String,
    pub slug: String,
    pub month: Option<(i32, u32)>,
    pub profile: &'static ScheduleProfile,
    /// Date ascending.
    pub records: Vec<DayRecord>,
}

impl ExportScope {
    pub fn month(
        records: &[DayRecord],
        year: i32,
        month: u32,
        profile: &'static ScheduleProfile,
    ) -> Self {
        let selected = calendar::records_in_month(records, month, year)
            .into_iter()
            .cloned()
            .collect();

        Self::sorted(Self {
            title: month_label(year, month),
            slug: format!("{:04}-{:02}", year, month),
            month: Some((year, month)),
            profile,
            records: selected,
        })
    }

    pub fn all(records: &[DayRecord], profile: &'static ScheduleProfile) -> Self {
        Self::sorted(Self {
            title: "Todos os registros".to_string(),
            slug: "todos".to_string(),
            month: None,
            profile,
            records: records.to_vec(),
        })
    }

    fn sorted(mut self) -> Self {
        self.records.sort_by_key(|r| (r.date, r.entry));
        self
    }

    pub fn rows(&self) -> Vec<ExportRow> {
        self.records
            .iter()
            .map(|r| ExportRow::from_record(r, self.profile))
            .collect()
    }

    pub fn totals(&self) -> PeriodTotals {
        summarize_records(&self.records, self.profile)
    }

    /// `horas-extras-<slug>-<YYYY-MM-DD>.<ext>`
    pub fn default_file_name(&self, ext: &str, today: NaiveDate) -> String {
        format!(
            "horas-extras-{}-{}.{}",
            self.slug,
            today.format("%Y-%m-%d"),
            ext
        )
    }

    /// Human-readable summary lines (PDF block, terminal output).
    pub fn summary_lines(&self) -> Vec<String> {
        let totals = self.totals();
        let mut lines = vec![
            format!("Escala: {}", self.profile.display_name),
            format!("Dias registrados: {}", self.records.len()),
            format!("Horas trabalhadas: {}", format_hours(totals.worked_minutes)),
        ];

        if let Some((year, month)) = self.month {
            let summary =
                calendar::build_monthly_summary(&self.records, month, year, self.profile.id);
            lines.push(format!(
                "Horas esperadas: {} ({} dias úteis)",
                format_hours(summary.expected_minutes),
                summary.business_days_in_month
            ));
            lines.push(format!("Conclusão: {:.1}%", summary.percent_complete));
        }

        lines.push(format!(
            "Horas extras: {}   Débito: {}   Saldo: {}",
            format_minutes(totals.overtime_minutes),
            format_minutes(-totals.deficit_minutes),
            format_minutes(totals.net_balance())
        ));
        lines
    }

    pub(crate) fn summary_cells(&self, width: usize) -> Vec<String> {
        let totals = self.totals();
        let mut cells = vec![
            SUMMARY_MARKER.to_string(),
            format!("Dias: {}", self.records.len()),
            String::new(),
            format_hours(totals.worked_minutes),
            format_minutes(totals.net_balance()),
            format!(
                "Extras: {} | Débito: {}",
                format_minutes(totals.overtime_minutes),
                format_minutes(-totals.deficit_minutes)
            ),
        ];
        cells.resize(width, String::new());
        cells
    }

    pub(crate) fn schedule_cells(&self, width: usize) -> Vec<String> {
        let p = self.profile;
        let mut cells = vec![
            SCHEDULE_MARKER.to_string(),
            p.display_name.to_string(),
            format!("Jornada diária: {}", format_hours(p.daily_target_minutes)),
            format!("Carga semanal: {}h", p.weekly_target_hours),
            format!("Dias: {}", p.weekday_labels()),
            String::new(),
        ];
        cells.resize(width, String::new());
        cells
    }
}
