use crate::core::calculator::calendar::day_quota;
use crate::core::calculator::shift::{ShiftLimits, validate_shift_with};
use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::store::RecordStore;
use crate::store::kv::KeyValueStore;
use crate::ui::messages::warning;
use chrono::{Datelike, NaiveDate, NaiveTime};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Add a day to the store.
    ///
    /// Refused when the date already has a record, or once every business
    /// day of the month has one.
    /// Shift validation is advisory: problems are reported, the day is stored.
    pub fn apply<S: KeyValueStore>(
        store: &mut RecordStore<S>,
        date: NaiveDate,
        start: Option<NaiveTime>,
        end: Option<NaiveTime>,
        limits: &ShiftLimits,
    ) -> AppResult<DayRecord> {
        let (recorded, allowed) =
            day_quota(store.records(), date.month(), date.year(), store.schedule_id());

        if recorded >= allowed {
            return Err(AppError::DayQuotaReached {
                month: date.month(),
                year: date.year(),
                limit: allowed,
            });
        }

        if store.records().iter().any(|r| r.date == date) {
            return Err(AppError::DuplicateDate(date));
        }

        let record = DayRecord::with_times(
            date,
            start.map(|t| date.and_time(t)),
            end.map(|t| date.and_time(t)),
        );

        let check = validate_shift_with(record.entry, record.exit, limits);
        if let Some(reason) = check.reason() {
            warning(format!("{}: {}", date, reason));
        }

        store.add(record.clone())?;
        Ok(record)
    }
}
