use crate::errors::AppResult;
use crate::models::day_record::DayRecord;
use crate::store::RecordStore;
use crate::store::kv::KeyValueStore;
use crate::ui::messages::info;

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply<S: KeyValueStore>(store: &mut RecordStore<S>, id: &str) -> AppResult<DayRecord> {
        let removed = store.remove(id)?;
        info(format!("Deleted record {} ({})", removed.short_id(), removed.date));
        Ok(removed)
    }
}
