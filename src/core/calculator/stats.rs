use crate::core::calculator::schedule::resolve_profile;
use crate::models::day_record::DayRecord;
use crate::models::summary::WorkStats;

/// Descriptive statistics over records with worked time.
///
/// Records with no worked minutes (in progress, invalid, empty) are ignored.
/// The consistency score is 100 minus the coefficient of variation in
/// percent, floored at 0; a single day scores 100.
pub fn compute_stats(records: &[DayRecord], schedule_id: &str) -> WorkStats {
    let target = resolve_profile(Some(schedule_id)).daily_target_minutes;

    let durations: Vec<i64> = records
        .iter()
        .map(DayRecord::worked_minutes)
        .filter(|m| *m > 0)
        .collect();

    let (Some(&max), Some(&min)) = (durations.iter().max(), durations.iter().min()) else {
        return WorkStats::default();
    };

    let n = durations.len() as f64;
    let mean = durations.iter().sum::<i64>() as f64 / n;

    let consistency = if durations.len() == 1 {
        100.0
    } else {
        let variance = durations
            .iter()
            .map(|m| (*m as f64 - mean).powi(2))
            .sum::<f64>()
            / n;
        (100.0 - 100.0 * variance.sqrt() / mean).max(0.0)
    };

    WorkStats {
        mean_minutes: round1(mean),
        max_minutes: max,
        min_minutes: min,
        days_above_target: durations.iter().filter(|m| **m > target).count() as u32,
        days_below_target: durations.iter().filter(|m| **m < target).count() as u32,
        consistency_score: round1(consistency),
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
