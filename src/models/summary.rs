use serde::Serialize;

/// Month totals derived from the record set. Recomputed on demand, never stored.
///
/// `net_balance_minutes == total_overtime_minutes - total_deficit_minutes`
/// and both buckets are non-negative.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub total_overtime_minutes: i64,
    pub total_deficit_minutes: i64,
    pub net_balance_minutes: i64,
    pub total_worked_minutes: i64,
    pub business_days_in_month: u32,
    pub days_recorded: u32,
    pub expected_minutes: i64,
    pub percent_complete: f64,
}

/// One point per calendar day of the month, recorded or not.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailyChartPoint {
    pub day: u32,
    pub worked_minutes: i64,
    pub overtime_minutes: i64,
    pub deficit_minutes: i64,
    pub target_minutes: i64,
    pub has_record: bool,
    pub is_business_day: bool,
}

/// Descriptive statistics over days with worked time.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkStats {
    pub mean_minutes: f64,
    pub max_minutes: i64,
    pub min_minutes: i64,
    pub days_above_target: u32,
    pub days_below_target: u32,
    /// 0..=100, higher means more uniform daily durations.
    pub consistency_score: f64,
}

/// Overtime/deficit buckets accumulated over an arbitrary slice of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodTotals {
    pub worked_minutes: i64,
    pub overtime_minutes: i64,
    pub deficit_minutes: i64,
}

impl PeriodTotals {
    pub fn net_balance(&self) -> i64 {
        self.overtime_minutes - self.deficit_minutes
    }
}
