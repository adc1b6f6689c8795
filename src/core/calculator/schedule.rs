//! Registry of the available work schedules.

use crate::models::schedule::ScheduleProfile;
use tracing::warn;

/// Registry order matters: the first entry is the default profile.
static PROFILES: [ScheduleProfile; 5] = [
    ScheduleProfile {
        id: "6x1",
        display_name: "Escala 6x1 (Segunda a Sábado)",
        daily_target_minutes: 420,
        working_weekdays: &[1, 2, 3, 4, 5, 6],
        weekly_target_hours: 42.0,
    },
    ScheduleProfile {
        id: "5x2",
        display_name: "Escala 5x2 (Segunda a Sexta)",
        daily_target_minutes: 480,
        working_weekdays: &[1, 2, 3, 4, 5],
        weekly_target_hours: 40.0,
    },
    ScheduleProfile {
        id: "5x2-44h",
        display_name: "Escala 5x2 44h (Segunda a Sexta)",
        daily_target_minutes: 528,
        working_weekdays: &[1, 2, 3, 4, 5],
        weekly_target_hours: 44.0,
    },
    ScheduleProfile {
        id: "4x3",
        display_name: "Escala 4x3 (Segunda a Quinta)",
        daily_target_minutes: 600,
        working_weekdays: &[1, 2, 3, 4],
        weekly_target_hours: 40.0,
    },
    ScheduleProfile {
        id: "personalizada",
        display_name: "Escala Personalizada",
        daily_target_minutes: 480,
        working_weekdays: &[1, 2, 3, 4, 5],
        weekly_target_hours: 40.0,
    },
];

pub fn all_profiles() -> &'static [ScheduleProfile] {
    &PROFILES
}

pub fn default_profile() -> &'static ScheduleProfile {
    &PROFILES[0]
}

/// Strict lookup, `None` when the id is unknown.
pub fn find_profile(id: &str) -> Option<&'static ScheduleProfile> {
    let id = id.trim();
    PROFILES.iter().find(|p| p.id.eq_ignore_ascii_case(id))
}

/// Lookup with fallback: absent or unknown ids resolve to the default profile.
pub fn resolve_profile(schedule_id: Option<&str>) -> &'static ScheduleProfile {
    match schedule_id {
        None => default_profile(),
        Some(id) if id.trim().is_empty() => default_profile(),
        Some(id) => find_profile(id).unwrap_or_else(|| {
            warn!(
                schedule = id,
                fallback = default_profile().id,
                "unknown schedule, using default"
            );
            default_profile()
        }),
    }
}
