use chrono::Weekday;
use serde::Serialize;

/// Short labels indexed by weekday number (0 = Sunday .. 6 = Saturday).
const WEEKDAY_LABELS: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

/// A named work schedule: which weekdays are worked and how long a full day is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleProfile {
    pub id: &'static str,
    pub display_name: &'static str,
    pub daily_target_minutes: i64,
    /// Weekday indices, 0 = Sunday .. 6 = Saturday.
    pub working_weekdays: &'static [u32],
    pub weekly_target_hours: f64,
}

impl ScheduleProfile {
    pub fn works_on(&self, weekday: Weekday) -> bool {
        self.working_weekdays
            .contains(&weekday.num_days_from_sunday())
    }

    /// Comma-separated weekday labels, e.g. "Seg, Ter, Qua, Qui, Sex".
    pub fn weekday_labels(&self) -> String {
        self.working_weekdays
            .iter()
            .filter_map(|d| WEEKDAY_LABELS.get(*d as usize))
            .copied()
            .collect::<Vec<_>>()
            .join(", ")
    }
}
