//! Record store: owns the list of day records and keeps it in sync with the
//! key-value storage.
//!
//! Lifecycle: a store starts `Uninitialized`; `load()` reads the stored state
//! (missing keys mean defaults) and moves it to `Loaded`. From then on every
//! successful mutation is persisted immediately. Mutating an unloaded store is
//! refused, so a fresh store can never overwrite what was saved before.

pub mod kv;

use crate::core::calculator::schedule::{find_profile, resolve_profile};
use crate::core::calculator::shift::rebase_to_date;
use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::schedule::ScheduleProfile;
use chrono::{NaiveDate, NaiveDateTime};
use kv::{KeyValueStore, RECORDS_KEY, SCHEDULE_KEY};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    Uninitialized,
    Loaded,
}

/// A single-field edit of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateField {
    /// Present entry/exit timestamps follow the record onto the new date.
    Date(NaiveDate),
    Entry(Option<NaiveDateTime>),
    Exit(Option<NaiveDateTime>),
}

impl UpdateField {
    fn apply(self, record: &mut DayRecord) {
        match self {
            UpdateField::Date(date) => {
                record.entry = record.entry.map(|t| rebase_to_date(t, date));
                record.exit = record.exit.map(|t| rebase_to_date(t, date));
                record.date = date;
            }
            UpdateField::Entry(ts) => record.entry = ts,
            UpdateField::Exit(ts) => record.exit = ts,
        }
    }
}

pub struct RecordStore<S: KeyValueStore> {
    storage: S,
    state: StoreState,
    records: Arc<Vec<DayRecord>>,
    schedule_id: Option<String>,
    default_schedule: String,
}

impl<S: KeyValueStore> RecordStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            state: StoreState::Uninitialized,
            records: Arc::new(Vec::new()),
            schedule_id: None,
            default_schedule: resolve_profile(None).id.to_string(),
        }
    }

    /// Schedule used when none has been selected yet.
    pub fn with_default_schedule(mut self, id: &str) -> Self {
        self.default_schedule = id.to_string();
        self
    }

    pub fn load(&mut self) -> AppResult<()> {
        let records = match self.storage.get_item(RECORDS_KEY)? {
            Some(raw) if !raw.trim().is_empty() => serde_json::from_str::<Vec<DayRecord>>(&raw)
                .map_err(|e| AppError::CorruptState(e.to_string()))?,
            _ => Vec::new(),
        };

        self.schedule_id = self
            .storage
            .get_item(SCHEDULE_KEY)?
            .filter(|s| !s.trim().is_empty());

        debug!(
            records = records.len(),
            schedule = self.schedule_id(),
            "record store loaded"
        );

        self.records = Arc::new(records);
        self.state = StoreState::Loaded;
        Ok(())
    }

    pub fn state(&self) -> StoreState {
        self.state
    }

    pub fn records(&self) -> &[DayRecord] {
        &self.records
    }

    /// Current collection. Later mutations swap in a new vector, so the
    /// returned snapshot never changes under the caller.
    pub fn snapshot(&self) -> Arc<Vec<DayRecord>> {
        Arc::clone(&self.records)
    }

    pub fn schedule_id(&self) -> &str {
        self.schedule_id.as_deref().unwrap_or(&self.default_schedule)
    }

    pub fn profile(&self) -> &'static ScheduleProfile {
        resolve_profile(Some(self.schedule_id()))
    }

    /// Find a record by full id or by an unambiguous id prefix.
    pub fn find(&self, id: &str) -> AppResult<&DayRecord> {
        let id = id.trim();
        if let Some(r) = self.records.iter().find(|r| r.id == id) {
            return Ok(r);
        }

        let mut matches = self
            .records
            .iter()
            .filter(|r| !id.is_empty() && r.id.starts_with(id));

        match (matches.next(), matches.next()) {
            (Some(r), None) => Ok(r),
            (Some(_), Some(_)) => Err(AppError::AmbiguousRecordId(id.to_string())),
            _ => Err(AppError::RecordNotFound(id.to_string())),
        }
    }

    /// One record per date: a second record on a taken date is refused.
    pub fn add(&mut self, record: DayRecord) -> AppResult<()> {
        self.ensure_loaded()?;
        if self.records.iter().any(|r| r.date == record.date) {
            return Err(AppError::DuplicateDate(record.date));
        }

        let mut next = (*self.records).clone();
        next.push(record);
        self.commit(next)
    }

    /// Apply one field edit and return the updated record.
    pub fn update(&mut self, id: &str, field: UpdateField) -> AppResult<DayRecord> {
        self.update_all(id, vec![field])
    }

    /// Apply several field edits in order and persist them as one change:
    /// either all of them are stored or none is.
    pub fn update_all(&mut self, id: &str, fields: Vec<UpdateField>) -> AppResult<DayRecord> {
        self.ensure_loaded()?;
        let full_id = self.find(id)?.id.clone();

        let mut next = (*self.records).clone();
        let Some(record) = next.iter_mut().find(|r| r.id == full_id) else {
            return Err(AppError::RecordNotFound(id.to_string()));
        };
        for field in fields {
            field.apply(record);
        }
        let updated = record.clone();

        if next
            .iter()
            .any(|r| r.id != updated.id && r.date == updated.date)
        {
            return Err(AppError::DuplicateDate(updated.date));
        }

        self.commit(next)?;
        Ok(updated)
    }

    pub fn remove(&mut self, id: &str) -> AppResult<DayRecord> {
        self.ensure_loaded()?;
        let full_id = self.find(id)?.id.clone();

        let mut next = (*self.records).clone();
        let Some(pos) = next.iter().position(|r| r.id == full_id) else {
            return Err(AppError::RecordNotFound(id.to_string()));
        };
        let removed = next.remove(pos);

        self.commit(next)?;
        Ok(removed)
    }

    /// Swap in a whole new record set. Two records on one date are refused.
    pub fn replace_all(&mut self, records: Vec<DayRecord>) -> AppResult<()> {
        self.ensure_loaded()?;

        let mut seen = HashSet::new();
        if let Some(dup) = records.iter().find(|r| !seen.insert(r.date)) {
            return Err(AppError::DuplicateDate(dup.date));
        }

        self.commit(records)
    }

    /// Select a schedule by id. Unlike lookups, an unknown id is rejected here.
    pub fn select_schedule(&mut self, id: &str) -> AppResult<&'static ScheduleProfile> {
        self.ensure_loaded()?;
        let profile = find_profile(id).ok_or_else(|| AppError::UnknownSchedule(id.to_string()))?;

        self.storage.set_item(SCHEDULE_KEY, profile.id)?;
        self.schedule_id = Some(profile.id.to_string());
        debug!(schedule = profile.id, "schedule selected");
        Ok(profile)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn ensure_loaded(&self) -> AppResult<()> {
        match self.state {
            StoreState::Loaded => Ok(()),
            StoreState::Uninitialized => Err(AppError::StoreNotLoaded),
        }
    }

    /// Persist first, swap second: a failed write keeps the previous records.
    /// An empty set drops the key instead of storing `[]`.
    fn commit(&mut self, next: Vec<DayRecord>) -> AppResult<()> {
        if next.is_empty() {
            self.storage.remove_item(RECORDS_KEY)?;
        } else {
            let json = serde_json::to_string(&next)?;
            self.storage.set_item(RECORDS_KEY, &json)?;
        }

        debug!(records = next.len(), "records persisted");
        self.records = Arc::new(next);
        Ok(())
    }
}
