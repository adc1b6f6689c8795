use rovertime::core::add::AddLogic;
use rovertime::core::calculator::shift::ShiftLimits;
use rovertime::core::edit::{EditLogic, EditRequest};
use rovertime::db::pool::DbPool;
use rovertime::db::initialize::init_db;
use rovertime::errors::{AppError, AppResult};
use rovertime::models::day_record::DayRecord;
use rovertime::store::kv::{KeyValueStore, MemoryStorage, RECORDS_KEY, SCHEDULE_KEY};
use rovertime::import::ImportLogic;
use rovertime::store::{RecordStore, StoreState, UpdateField};

mod common;
use common::{date, record};

/// Memory storage that refuses writes once its budget is spent.
struct LimitedStorage {
    inner: MemoryStorage,
    writes_left: usize,
    writes: usize,
}

impl LimitedStorage {
    fn new(writes_left: usize) -> Self {
        Self {
            inner: MemoryStorage::new(),
            writes_left,
            writes: 0,
        }
    }

    fn spend(&mut self) -> AppResult<()> {
        if self.writes_left == 0 {
            return Err(AppError::Other("disk full".into()));
        }
        self.writes_left -= 1;
        self.writes += 1;
        Ok(())
    }
}

impl KeyValueStore for LimitedStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.spend()?;
        self.inner.set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> AppResult<()> {
        self.spend()?;
        self.inner.remove_item(key)
    }
}

fn stored_records<S: KeyValueStore>(storage: &S) -> Vec<DayRecord> {
    storage
        .get_item(RECORDS_KEY)
        .unwrap()
        .map(|raw| serde_json::from_str(&raw).unwrap())
        .unwrap_or_default()
}

fn loaded_store() -> RecordStore<MemoryStorage> {
    let mut store = RecordStore::new(MemoryStorage::new());
    store.load().expect("load empty storage");
    store
}

#[test]
fn mutations_before_load_are_refused() {
    let mut storage = MemoryStorage::new();
    let saved = vec![record(date(2024, 3, 4), "08:00", "16:00")];
    storage
        .set_item(RECORDS_KEY, &serde_json::to_string(&saved).unwrap())
        .unwrap();

    let mut store = RecordStore::new(storage);
    assert_eq!(store.state(), StoreState::Uninitialized);

    let err = store
        .add(record(date(2024, 3, 5), "08:00", "16:00"))
        .unwrap_err();
    assert!(matches!(err, AppError::StoreNotLoaded));
    assert!(matches!(
        store.replace_all(Vec::new()),
        Err(AppError::StoreNotLoaded)
    ));

    // what was saved before is still there
    let storage = store.into_storage();
    let raw = storage.get_item(RECORDS_KEY).unwrap().unwrap();
    let kept: Vec<DayRecord> = serde_json::from_str(&raw).unwrap();
    assert_eq!(kept, saved);
}

#[test]
fn load_without_keys_gives_defaults() {
    let store = loaded_store();
    assert_eq!(store.state(), StoreState::Loaded);
    assert!(store.records().is_empty());
    assert_eq!(store.schedule_id(), "6x1");
    assert_eq!(store.profile().daily_target_minutes, 420);
}

#[test]
fn default_schedule_comes_from_configuration() {
    let mut store = RecordStore::new(MemoryStorage::new()).with_default_schedule("5x2");
    store.load().unwrap();
    assert_eq!(store.profile().id, "5x2");
}

#[test]
fn every_mutation_is_persisted() {
    let mut store = loaded_store();
    let r = record(date(2024, 3, 4), "08:00", "16:00");
    let id = r.id.clone();
    store.add(r).unwrap();

    let storage = store.into_storage();
    assert_eq!(storage.len(), 1);

    let mut reopened = RecordStore::new(storage);
    reopened.load().unwrap();
    assert_eq!(reopened.records().len(), 1);
    assert_eq!(reopened.records()[0].id, id);

    reopened.remove(&id).unwrap();
    let storage = reopened.into_storage();
    assert_eq!(storage.get_item(RECORDS_KEY).unwrap(), None);
    assert!(storage.is_empty());
}

#[test]
fn stored_layout_uses_portuguese_keys() {
    let mut store = loaded_store();
    store
        .add(record(date(2024, 3, 4), "08:00", ""))
        .unwrap();

    let raw = store.storage().get_item(RECORDS_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &value[0];
    assert_eq!(first["data"], "2024-03-04");
    assert_eq!(first["entrada"], "2024-03-04T08:00:00");
    assert_eq!(first["saida"], "");
}

#[test]
fn records_written_by_older_versions_still_load() {
    let mut storage = MemoryStorage::new();
    storage
        .set_item(
            RECORDS_KEY,
            r#"[{"id":"1700000000000","data":"2024-03-04","entrada":"2024-03-04T08:00:00.000Z","saida":""},
                {"id":"1700000000001","data":"2024-03-05T00:00:00.000Z","entrada":"2024-03-05T08:00","saida":"2024-03-05T16:00"}]"#,
        )
        .unwrap();

    let mut store = RecordStore::new(storage);
    store.load().unwrap();
    assert_eq!(store.records().len(), 2);
    assert!(store.records()[0].entry.is_some());
    assert_eq!(store.records()[0].exit, None);
    assert_eq!(store.records()[1].date, date(2024, 3, 5));
    assert_eq!(store.records()[1].worked_minutes(), 480);
}

#[test]
fn corrupt_state_refuses_to_load() {
    let mut storage = MemoryStorage::new();
    storage.set_item(RECORDS_KEY, "{not json").unwrap();

    let mut store = RecordStore::new(storage);
    assert!(matches!(store.load(), Err(AppError::CorruptState(_))));
    assert_eq!(store.state(), StoreState::Uninitialized);
}

#[test]
fn update_date_moves_clock_times() {
    let mut store = loaded_store();
    let r = record(date(2024, 3, 4), "08:00", "16:30");
    let id = r.id.clone();
    store.add(r).unwrap();

    let updated = store
        .update(&id, UpdateField::Date(date(2024, 3, 8)))
        .unwrap();
    assert_eq!(updated.date, date(2024, 3, 8));
    assert_eq!(updated.entry, date(2024, 3, 8).and_hms_opt(8, 0, 0));
    assert_eq!(updated.exit, date(2024, 3, 8).and_hms_opt(16, 30, 0));
    assert_eq!(updated.worked_minutes(), 510);
}

#[test]
fn update_entry_and_exit() {
    let mut store = loaded_store();
    let d = date(2024, 3, 4);
    let r = record(d, "08:00", "");
    let id = r.id.clone();
    store.add(r).unwrap();

    store
        .update(&id, UpdateField::Exit(d.and_hms_opt(17, 0, 0)))
        .unwrap();
    assert_eq!(store.find(&id).unwrap().worked_minutes(), 540);

    let cleared = store.update(&id, UpdateField::Entry(None)).unwrap();
    assert_eq!(cleared.entry, None);
    assert_eq!(cleared.worked_minutes(), 0);
}

#[test]
fn unknown_and_ambiguous_ids() {
    let mut store = loaded_store();
    let mut a = record(date(2024, 3, 4), "08:00", "16:00");
    a.id = "abc-1".to_string();
    let mut b = record(date(2024, 3, 5), "08:00", "16:00");
    b.id = "abc-2".to_string();
    store.replace_all(vec![a, b]).unwrap();

    assert!(matches!(
        store.remove("zzz"),
        Err(AppError::RecordNotFound(_))
    ));
    assert!(matches!(
        store.update("nope", UpdateField::Entry(None)),
        Err(AppError::RecordNotFound(_))
    ));
    assert!(matches!(store.find("abc"), Err(AppError::AmbiguousRecordId(_))));
    assert_eq!(store.find("abc-2").unwrap().date, date(2024, 3, 5));
    assert_eq!(store.records().len(), 2);
}

#[test]
fn snapshots_are_stable_across_mutations() {
    let mut store = loaded_store();
    store
        .add(record(date(2024, 3, 4), "08:00", "16:00"))
        .unwrap();

    let before = store.snapshot();
    store
        .add(record(date(2024, 3, 5), "08:00", "16:00"))
        .unwrap();

    assert_eq!(before.len(), 1);
    assert_eq!(store.records().len(), 2);
}

#[test]
fn replace_all_swaps_the_whole_set() {
    let mut store = loaded_store();
    store
        .add(record(date(2024, 3, 4), "08:00", "16:00"))
        .unwrap();

    let fresh = vec![
        record(date(2024, 4, 1), "09:00", "18:00"),
        record(date(2024, 4, 2), "09:00", "18:00"),
    ];
    store.replace_all(fresh.clone()).unwrap();
    assert_eq!(store.records(), fresh.as_slice());
}

#[test]
fn select_schedule_is_strict_and_persisted() {
    let mut store = loaded_store();
    assert!(matches!(
        store.select_schedule("9x9"),
        Err(AppError::UnknownSchedule(_))
    ));

    let p = store.select_schedule("4x3").unwrap();
    assert_eq!(p.daily_target_minutes, 600);

    let storage = store.into_storage();
    assert_eq!(
        storage.get_item(SCHEDULE_KEY).unwrap().as_deref(),
        Some("4x3")
    );
}

#[test]
fn add_logic_enforces_monthly_quota() {
    let mut store = loaded_store();
    store.select_schedule("4x3").unwrap();

    // 16 Monday-to-Thursday days in March 2024
    let days: Vec<DayRecord> = (1..=16)
        .map(|d| record(date(2024, 3, d), "08:00", "18:00"))
        .collect();
    store.replace_all(days).unwrap();

    let err = AddLogic::apply(
        &mut store,
        date(2024, 3, 20),
        None,
        None,
        &ShiftLimits::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AppError::DayQuotaReached {
            month: 3,
            year: 2024,
            limit: 16
        }
    ));
    assert_eq!(store.records().len(), 16);
}

#[test]
fn add_logic_keeps_implausible_shifts() {
    let mut store = loaded_store();
    let d = date(2024, 3, 4);
    let added = AddLogic::apply(
        &mut store,
        d,
        chrono::NaiveTime::from_hms_opt(17, 0, 0),
        chrono::NaiveTime::from_hms_opt(8, 0, 0),
        &ShiftLimits::default(),
    )
    .unwrap();

    assert_eq!(added.worked_minutes(), 0);
    assert_eq!(store.records().len(), 1);
}

#[test]
fn edit_logic_applies_date_then_times() {
    let mut store = loaded_store();
    let r = record(date(2024, 3, 4), "08:00", "16:00");
    let id = r.id.clone();
    store.add(r).unwrap();

    let request = EditRequest {
        date: Some(date(2024, 3, 9)),
        entry: None,
        exit: Some(chrono::NaiveTime::from_hms_opt(18, 0, 0)),
    };
    let updated = EditLogic::apply(&mut store, &id[..8], request, &ShiftLimits::default()).unwrap();

    assert_eq!(updated.date, date(2024, 3, 9));
    assert_eq!(updated.entry, date(2024, 3, 9).and_hms_opt(8, 0, 0));
    assert_eq!(updated.exit, date(2024, 3, 9).and_hms_opt(18, 0, 0));
}

#[test]
fn sqlite_storage_round_trip() {
    let pool = DbPool::in_memory().unwrap();
    init_db(&pool.conn).unwrap();

    let mut store = RecordStore::new(pool);
    store.load().unwrap();
    store
        .add(record(date(2024, 3, 4), "08:00", "16:00"))
        .unwrap();
    store.select_schedule("5x2").unwrap();

    let pool = store.into_storage();
    let mut reopened = RecordStore::new(pool);
    reopened.load().unwrap();
    assert_eq!(reopened.records().len(), 1);
    assert_eq!(reopened.profile().id, "5x2");
}

#[test]
fn multi_field_edit_is_stored_in_one_write() {
    let mut store = RecordStore::new(LimitedStorage::new(10));
    store.load().unwrap();
    let r = record(date(2024, 3, 4), "08:00", "16:00");
    let id = r.id.clone();
    store.add(r).unwrap();

    let request = EditRequest {
        date: Some(date(2024, 3, 9)),
        entry: None,
        exit: Some(chrono::NaiveTime::from_hms_opt(18, 0, 0)),
    };
    EditLogic::apply(&mut store, &id, request, &ShiftLimits::default()).unwrap();

    assert_eq!(store.storage().writes, 2);
    let saved = stored_records(store.storage());
    assert_eq!(saved[0].date, date(2024, 3, 9));
    assert_eq!(saved[0].exit, date(2024, 3, 9).and_hms_opt(18, 0, 0));
}

#[test]
fn failed_edit_leaves_record_untouched() {
    let mut store = RecordStore::new(LimitedStorage::new(1));
    store.load().unwrap();
    let original = record(date(2024, 3, 4), "08:00", "16:00");
    let id = original.id.clone();
    store.add(original.clone()).unwrap();

    let request = EditRequest {
        date: Some(date(2024, 3, 9)),
        entry: None,
        exit: Some(chrono::NaiveTime::from_hms_opt(18, 0, 0)),
    };
    let err = EditLogic::apply(&mut store, &id, request, &ShiftLimits::default()).unwrap_err();
    assert!(matches!(err, AppError::Other(_)));

    assert_eq!(store.records(), std::slice::from_ref(&original));
    assert_eq!(stored_records(store.storage()), vec![original]);
}

#[test]
fn update_all_applies_fields_in_order() {
    let mut store = loaded_store();
    let r = record(date(2024, 3, 4), "08:00", "16:00");
    let id = r.id.clone();
    store.add(r).unwrap();

    let new_day = date(2024, 3, 6);
    let updated = store
        .update_all(
            &id,
            vec![
                UpdateField::Date(new_day),
                UpdateField::Entry(new_day.and_hms_opt(7, 0, 0)),
            ],
        )
        .unwrap();

    assert_eq!(updated.entry, new_day.and_hms_opt(7, 0, 0));
    assert_eq!(updated.exit, new_day.and_hms_opt(16, 0, 0));
    assert_eq!(updated.worked_minutes(), 540);
}

#[test]
fn one_record_per_date() {
    let mut store = loaded_store();
    store
        .add(record(date(2024, 3, 4), "08:00", "12:00"))
        .unwrap();

    let err = store
        .add(record(date(2024, 3, 4), "13:00", "17:00"))
        .unwrap_err();
    assert!(matches!(err, AppError::DuplicateDate(d) if d == date(2024, 3, 4)));
    assert_eq!(store.records().len(), 1);

    let err = AddLogic::apply(
        &mut store,
        date(2024, 3, 4),
        None,
        None,
        &ShiftLimits::default(),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::DuplicateDate(_)));
}

#[test]
fn date_edit_onto_taken_date_is_refused() {
    let mut store = loaded_store();
    store
        .add(record(date(2024, 3, 4), "08:00", "16:00"))
        .unwrap();
    let other = record(date(2024, 3, 5), "08:00", "16:00");
    let id = other.id.clone();
    store.add(other.clone()).unwrap();

    assert!(matches!(
        store.update(&id, UpdateField::Date(date(2024, 3, 4))),
        Err(AppError::DuplicateDate(_))
    ));
    assert_eq!(store.find(&id).unwrap(), &other);

    // moving onto its own date is fine
    store.update(&id, UpdateField::Date(date(2024, 3, 5))).unwrap();
}

#[test]
fn replace_all_refuses_repeated_dates() {
    let mut store = loaded_store();
    let kept = record(date(2024, 1, 2), "08:00", "16:00");
    store.add(kept.clone()).unwrap();

    let repeated = vec![
        record(date(2024, 3, 4), "08:00", "12:00"),
        record(date(2024, 3, 4), "13:00", "17:00"),
    ];
    assert!(matches!(
        store.replace_all(repeated),
        Err(AppError::DuplicateDate(_))
    ));
    assert_eq!(store.records(), std::slice::from_ref(&kept));
}

#[test]
fn import_keeps_the_first_row_of_each_date() {
    let mut store = loaded_store();
    let incoming = vec![
        record(date(2024, 3, 4), "08:00", "12:00"),
        record(date(2024, 3, 4), "13:00", "17:00"),
        record(date(2024, 3, 5), "08:00", "16:00"),
    ];

    let count = ImportLogic::apply(&mut store, incoming).unwrap();
    assert_eq!(count, 2);
    assert_eq!(store.records()[0].worked_minutes(), 240);
    assert_eq!(store.records()[1].date, date(2024, 3, 5));
}
