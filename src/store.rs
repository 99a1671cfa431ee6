//! The hosted data store, reduced to the get/put surface the engines need.
//!
//! Records are exchanged as JSON documents; the in-memory implementation
//! mirrors that so tests exercise the same (de)serialization path a real
//! backend would.

use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::models::{Account, Category, PlannerSettings, Transaction};

pub trait DataStore {
    fn load_categories(&self) -> EngineResult<Vec<Category>>;
    fn save_categories(&mut self, categories: &[Category]) -> EngineResult<()>;

    fn load_accounts(&self) -> EngineResult<Vec<Account>>;
    fn save_accounts(&mut self, accounts: &[Account]) -> EngineResult<()>;

    fn load_transactions(&self) -> EngineResult<Vec<Transaction>>;
    fn save_transactions(&mut self, transactions: &[Transaction]) -> EngineResult<()>;

    fn load_settings(&self) -> EngineResult<PlannerSettings>;
    fn save_settings(&mut self, settings: &PlannerSettings) -> EngineResult<()>;
}

/// JSON-document store held in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn get<T: serde::de::DeserializeOwned + Default>(&self, key: &str) -> EngineResult<T> {
        match self.documents.get(key) {
            Some(raw) => {
                serde_json::from_str(raw).map_err(|e| EngineError::Store(e.to_string()))
            }
            None => Ok(T::default()),
        }
    }

    fn put<T: serde::Serialize>(&mut self, key: &str, value: &T) -> EngineResult<()> {
        let raw = serde_json::to_string(value).map_err(|e| EngineError::Store(e.to_string()))?;
        self.documents.insert(key.to_string(), raw);
        Ok(())
    }
}

impl DataStore for MemoryStore {
    fn load_categories(&self) -> EngineResult<Vec<Category>> {
        self.get("categories")
    }

    fn save_categories(&mut self, categories: &[Category]) -> EngineResult<()> {
        self.put("categories", &categories)
    }

    fn load_accounts(&self) -> EngineResult<Vec<Account>> {
        self.get("accounts")
    }

    fn save_accounts(&mut self, accounts: &[Account]) -> EngineResult<()> {
        self.put("accounts", &accounts)
    }

    fn load_transactions(&self) -> EngineResult<Vec<Transaction>> {
        self.get("transactions")
    }

    fn save_transactions(&mut self, transactions: &[Transaction]) -> EngineResult<()> {
        self.put("transactions", &transactions)
    }

    fn load_settings(&self) -> EngineResult<PlannerSettings> {
        let map: HashMap<String, String> = self.get("settings")?;
        Ok(PlannerSettings::from_map(map))
    }

    fn save_settings(&mut self, settings: &PlannerSettings) -> EngineResult<()> {
        self.put("settings", &settings.to_map())
    }
}
