//! String-keyed storage behind the record store.

use crate::errors::AppResult;
use std::collections::HashMap;

/// Key under which the JSON array of day records is kept.
pub const RECORDS_KEY: &str = "registrosHorasExtras";

/// Key under which the selected schedule id is kept.
pub const SCHEDULE_KEY: &str = "escalaTrabalhoSelecionada";

/// Minimal get/set/remove contract, mirroring a browser's local storage.
/// A missing key is `Ok(None)`, never an error.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove_item(&mut self, key: &str) -> AppResult<()>;
}

/// In-memory storage, used for tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> AppResult<()> {
        self.items.remove(key);
        Ok(())
    }
}
