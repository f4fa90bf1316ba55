use doc_ledger_store::{error_storage_error, Result};
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

/// In-memory LedgerStorage.  Clones share the same underlying state.
#[derive(Clone, Default)]
pub struct LedgerStorageMock {
    state_ml: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl LedgerStorageMock {
    pub fn new() -> Self {
        Self::default()
    }
    /// Seed a raw value at the given key, bypassing any validation.  This is useful for setting up
    /// blank or malformed ledger states.
    pub fn with_state(self, key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.state_ml
            .write()
            .expect("LedgerStorageMock state was poisoned")
            .insert(key.into(), value.into());
        self
    }
    /// Number of keys holding a value (blank values included).
    pub fn len(&self) -> usize {
        self.state_ml
            .read()
            .expect("LedgerStorageMock state was poisoned")
            .len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl doc_ledger_store::LedgerStorage for LedgerStorageMock {
    async fn read_state(&self, key: &str) -> Result<Option<Vec<u8>>> {
        tracing::debug!("LedgerStorageMock::read_state({:?})", key);
        let state_mg = self
            .state_ml
            .read()
            .map_err(|_| error_storage_error("LedgerStorageMock state was poisoned"))?;
        Ok(state_mg.get(key).cloned())
    }
    async fn write_state(&self, key: &str, value: &[u8]) -> Result<()> {
        tracing::debug!(
            "LedgerStorageMock::write_state({:?}, {} bytes)",
            key,
            value.len()
        );
        let mut state_mg = self
            .state_ml
            .write()
            .map_err(|_| error_storage_error("LedgerStorageMock state was poisoned"))?;
        state_mg.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
