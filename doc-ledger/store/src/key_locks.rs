use crate::{error_internal_error, Result};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, Weak},
};

/// Table of per-key async mutexes, used to serialize read-modify-write sequences against the same
/// ledger key.  Entries hold only a Weak reference, so a key's mutex is freed once no operation
/// holds or awaits it.
#[derive(Clone, Default)]
pub(crate) struct KeyLocks {
    lock_ml: Arc<Mutex<HashMap<String, Weak<tokio::sync::Mutex<()>>>>>,
}

impl KeyLocks {
    pub(crate) fn new() -> Self {
        Self::default()
    }
    /// Wait for exclusive access to `key`.  Access is released when the returned guard is dropped.
    pub(crate) async fn lock(&self, key: &str) -> Result<tokio::sync::OwnedMutexGuard<()>> {
        let key_lock_a = {
            let mut lock_mg = self
                .lock_ml
                .lock()
                .map_err(|_| error_internal_error("key lock table was poisoned"))?;
            // Prune entries whose mutexes are no longer referenced by anyone.
            lock_mg.retain(|_, key_lock_w| key_lock_w.strong_count() > 0);
            match lock_mg.get(key).and_then(Weak::upgrade) {
                Some(key_lock_a) => key_lock_a,
                None => {
                    let key_lock_a = Arc::new(tokio::sync::Mutex::new(()));
                    lock_mg.insert(key.to_string(), Arc::downgrade(&key_lock_a));
                    key_lock_a
                }
            }
        };
        Ok(key_lock_a.lock_owned().await)
    }
    /// Number of keys that currently have a live mutex.
    pub(crate) fn live_key_count(&self) -> Result<usize> {
        let lock_mg = self
            .lock_ml
            .lock()
            .map_err(|_| error_internal_error("key lock table was poisoned"))?;
        Ok(lock_mg
            .values()
            .filter(|key_lock_w| key_lock_w.strong_count() > 0)
            .count())
    }
}
