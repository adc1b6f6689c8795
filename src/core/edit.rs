use crate::core::calculator::shift::{ShiftLimits, validate_shift_with};
use crate::errors::AppResult;
use crate::models::day_record::DayRecord;
use crate::store::kv::KeyValueStore;
use crate::store::{RecordStore, UpdateField};
use crate::ui::messages::warning;
use chrono::{NaiveDate, NaiveTime};

/// Requested changes for one record. `Some(None)` clears a clock.
#[derive(Debug, Default, Clone)]
pub struct EditRequest {
    pub date: Option<NaiveDate>,
    pub entry: Option<Option<NaiveTime>>,
    pub exit: Option<Option<NaiveTime>>,
}

impl EditRequest {
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.entry.is_none() && self.exit.is_none()
    }

    /// Field updates in application order: the date first, so new clock
    /// times land on the new date.
    fn into_updates(self, current: &DayRecord) -> Vec<UpdateField> {
        let day = self.date.unwrap_or(current.date);
        let mut updates = Vec::new();

        if let Some(d) = self.date {
            updates.push(UpdateField::Date(d));
        }
        if let Some(t) = self.entry {
            updates.push(UpdateField::Entry(t.map(|t| day.and_time(t))));
        }
        if let Some(t) = self.exit {
            updates.push(UpdateField::Exit(t.map(|t| day.and_time(t))));
        }

        updates
    }
}

pub struct EditLogic;

impl EditLogic {
    pub fn apply<S: KeyValueStore>(
        store: &mut RecordStore<S>,
        id: &str,
        request: EditRequest,
        limits: &ShiftLimits,
    ) -> AppResult<DayRecord> {
        let current = store.find(id)?.clone();
        let updated = store.update_all(&current.id, request.into_updates(&current))?;

        let check = validate_shift_with(updated.entry, updated.exit, limits);
        if let Some(reason) = check.reason() {
            warning(format!("{}: {}", updated.date, reason));
        }

        Ok(updated)
    }
}
