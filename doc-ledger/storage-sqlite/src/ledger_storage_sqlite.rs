use doc_ledger_store::{error_storage_error, Result};
use sqlx::SqlitePool;

/// LedgerStorage backed by a single SQLite table mapping each key to its raw value.
#[derive(Clone)]
pub struct LedgerStorageSQLite {
    sqlite_pool: SqlitePool,
}

impl LedgerStorageSQLite {
    pub async fn open_and_run_migrations(sqlite_pool: SqlitePool) -> Result<Self> {
        sqlx::migrate!().run(&sqlite_pool).await.map_err(|err| {
            error_storage_error(format!(
                "Failed to run SQLite database migrations; error was: {}",
                err
            ))
        })?;
        tracing::info!("LedgerStorageSQLite migrations are up to date");
        Ok(Self { sqlite_pool })
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl doc_ledger_store::LedgerStorage for LedgerStorageSQLite {
    async fn read_state(&self, key: &str) -> Result<Option<Vec<u8>>> {
        tracing::debug!("LedgerStorageSQLite::read_state({:?})", key);
        let value_o = sqlx::query_scalar::<_, Vec<u8>>(
            r#"
                select value from ledger_states
                where key = $1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.sqlite_pool)
        .await?;
        Ok(value_o)
    }
    async fn write_state(&self, key: &str, value: &[u8]) -> Result<()> {
        tracing::debug!(
            "LedgerStorageSQLite::write_state({:?}, {} bytes)",
            key,
            value.len()
        );
        sqlx::query(
            r#"
                insert into ledger_states(key, value)
                values ($1, $2)
                on conflict(key) do update set value = excluded.value
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.sqlite_pool)
        .await?;
        Ok(())
    }
}
