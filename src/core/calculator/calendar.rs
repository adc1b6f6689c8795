//! Month-level aggregation: business days, expected minutes, the monthly
//! summary and the per-day chart dataset.

use crate::core::calculator::schedule::resolve_profile;
use crate::models::day_record::DayRecord;
use crate::models::schedule::ScheduleProfile;
use crate::models::summary::{DailyChartPoint, MonthlySummary, PeriodTotals};
use chrono::{Datelike, NaiveDate};

/// Number of calendar days in the month, 0 for an invalid month.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    month_dates(month, year).count() as u32
}

/// Iterator over every date of the month (empty for an invalid month).
pub fn month_dates(month: u32, year: i32) -> impl Iterator<Item = NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    first
        .into_iter()
        .flat_map(|d| d.iter_days())
        .take_while(move |d| d.month() == month && d.year() == year)
}

pub fn count_business_days_for(profile: &ScheduleProfile, month: u32, year: i32) -> u32 {
    month_dates(month, year)
        .filter(|d| profile.works_on(d.weekday()))
        .count() as u32
}

/// Days of the month whose weekday belongs to the schedule.
pub fn count_business_days(month: u32, year: i32, schedule_id: &str) -> u32 {
    count_business_days_for(resolve_profile(Some(schedule_id)), month, year)
}

pub fn expected_minutes(month: u32, year: i32, schedule_id: &str) -> i64 {
    let profile = resolve_profile(Some(schedule_id));
    count_business_days_for(profile, month, year) as i64 * profile.daily_target_minutes
}

pub fn records_in_month(records: &[DayRecord], month: u32, year: i32) -> Vec<&DayRecord> {
    records
        .iter()
        .filter(|r| r.date.month() == month && r.date.year() == year)
        .collect()
}

/// `(recorded, allowed)` for the month: a new day may be added while
/// `recorded < allowed`.
pub fn day_quota(records: &[DayRecord], month: u32, year: i32, schedule_id: &str) -> (u32, u32) {
    let recorded = records_in_month(records, month, year).len() as u32;
    (recorded, count_business_days(month, year, schedule_id))
}

/// Overtime/deficit split of one day. Days without worked time count in
/// neither bucket.
fn split_balance(worked: i64, target: i64) -> (i64, i64) {
    if worked <= 0 {
        return (0, 0);
    }
    let diff = worked - target;
    (diff.max(0), (-diff).max(0))
}

pub fn summarize_records<'a, I>(records: I, profile: &ScheduleProfile) -> PeriodTotals
where
    I: IntoIterator<Item = &'a DayRecord>,
{
    records
        .into_iter()
        .fold(PeriodTotals::default(), |mut acc, record| {
            let worked = record.worked_minutes();
            let (over, deficit) = split_balance(worked, profile.daily_target_minutes);
            acc.worked_minutes += worked;
            acc.overtime_minutes += over;
            acc.deficit_minutes += deficit;
            acc
        })
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn build_monthly_summary(
    records: &[DayRecord],
    month: u32,
    year: i32,
    schedule_id: &str,
) -> MonthlySummary {
    let profile = resolve_profile(Some(schedule_id));
    let in_month = records_in_month(records, month, year);
    let totals = summarize_records(in_month.iter().copied(), profile);

    let business_days = count_business_days_for(profile, month, year);
    let expected = business_days as i64 * profile.daily_target_minutes;

    let percent_complete = if expected == 0 {
        0.0
    } else {
        round1(100.0 * totals.worked_minutes as f64 / expected as f64)
    };

    MonthlySummary {
        total_overtime_minutes: totals.overtime_minutes,
        total_deficit_minutes: totals.deficit_minutes,
        net_balance_minutes: totals.net_balance(),
        total_worked_minutes: totals.worked_minutes,
        business_days_in_month: business_days,
        days_recorded: in_month.len() as u32,
        expected_minutes: expected,
        percent_complete,
    }
}

/// Exactly one point per calendar day, in day order, whatever the records.
pub fn build_chart_dataset(
    records: &[DayRecord],
    month: u32,
    year: i32,
    schedule_id: &str,
) -> Vec<DailyChartPoint> {
    let profile = resolve_profile(Some(schedule_id));
    let target = profile.daily_target_minutes;

    month_dates(month, year)
        .map(|date| {
            let record = records.iter().find(|r| r.date == date);
            let worked = record.map(DayRecord::worked_minutes).unwrap_or(0);
            let (overtime, deficit) = split_balance(worked, target);

            DailyChartPoint {
                day: date.day(),
                worked_minutes: worked,
                overtime_minutes: overtime,
                deficit_minutes: deficit,
                target_minutes: target,
                has_record: record.is_some(),
                is_business_day: profile.works_on(date.weekday()),
            }
        })
        .collect()
}
