use crate::core::calculator::{calendar, stats};
use crate::models::day_record::DayRecord;
use crate::models::schedule::ScheduleProfile;
use crate::models::summary::{DailyChartPoint, MonthlySummary, WorkStats};

/// Everything the month views need, computed in one go.
#[derive(Debug, Clone)]
pub struct MonthReport {
    pub year: i32,
    pub month: u32,
    pub profile: &'static ScheduleProfile,
    /// Records of the month, date ascending.
    pub records: Vec<DayRecord>,
    pub summary: MonthlySummary,
    pub chart: Vec<DailyChartPoint>,
    pub stats: WorkStats,
}

pub struct Core;

impl Core {
    pub fn build_month_report(
        records: &[DayRecord],
        year: i32,
        month: u32,
        profile: &'static ScheduleProfile,
    ) -> MonthReport {
        let mut in_month: Vec<DayRecord> = calendar::records_in_month(records, month, year)
            .into_iter()
            .cloned()
            .collect();
        in_month.sort_by_key(|r| (r.date, r.entry));

        let summary = calendar::build_monthly_summary(&in_month, month, year, profile.id);
        let chart = calendar::build_chart_dataset(&in_month, month, year, profile.id);
        let stats = stats::compute_stats(&in_month, profile.id);

        MonthReport {
            year,
            month,
            profile,
            records: in_month,
            summary,
            chart,
            stats,
        }
    }
}
