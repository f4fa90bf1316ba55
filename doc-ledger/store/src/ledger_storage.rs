use crate::Result;

/// Thin interface to the key-value ledger that documents live in.  Implementations provide no
/// caching and no compare-and-swap; each call is atomic only to the extent the backend makes it so.
/// Callers must not assume atomicity between a read_state and a subsequent write_state.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait LedgerStorage: Send + Sync + 'static {
    /// Fetch the raw value currently stored at `key`, or None if there is none.  Note that a
    /// blank value is returned as-is; it's up to the caller to treat it as absent.
    async fn read_state(&self, key: &str) -> Result<Option<Vec<u8>>>;
    /// Unconditionally overwrite the value stored at `key`.
    async fn write_state(&self, key: &str, value: &[u8]) -> Result<()>;
}
