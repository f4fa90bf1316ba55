mod doc_ledger_config;
mod doc_ledger_manager;
mod error;
mod key_locks;
mod ledger_storage;

pub(crate) use crate::key_locks::KeyLocks;
pub use crate::{
    doc_ledger_config::{DocLedgerConfig, DOC_LEDGER_ENV_PREFIX},
    doc_ledger_manager::DocLedger,
    error::{
        error_already_exists, error_internal_error, error_malformed_document, error_not_found,
        error_storage_error, error_validation_error, Error,
    },
    ledger_storage::LedgerStorage,
};
pub type Result<T> = std::result::Result<T, Error>;
