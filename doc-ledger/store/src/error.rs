use std::borrow::Cow;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Already exists: {0}")]
    AlreadyExists(Cow<'static, str>),
    #[error("Internal error: {0}")]
    InternalError(Cow<'static, str>),
    #[error("Malformed document: {0}")]
    MalformedDocument(Cow<'static, str>),
    #[error("Not found: {0}")]
    NotFound(Cow<'static, str>),
    #[error("Storage error: {0}")]
    StorageError(Cow<'static, str>),
    #[error("Validation error: {0}")]
    ValidationError(Cow<'static, str>),
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        Self::StorageError(err.to_string().into())
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::InternalError(format!("failed to load configuration: {}", err).into())
    }
}

pub fn error_already_exists<E: std::fmt::Display>(e: E) -> Error {
    Error::AlreadyExists(e.to_string().into())
}

pub fn error_internal_error<E: std::fmt::Display>(e: E) -> Error {
    Error::InternalError(e.to_string().into())
}

pub fn error_malformed_document<E: std::fmt::Display>(e: E) -> Error {
    Error::MalformedDocument(e.to_string().into())
}

pub fn error_not_found<E: std::fmt::Display>(e: E) -> Error {
    Error::NotFound(e.to_string().into())
}

pub fn error_storage_error<E: std::fmt::Display>(e: E) -> Error {
    Error::StorageError(e.to_string().into())
}

pub fn error_validation_error<E: std::fmt::Display>(e: E) -> Error {
    Error::ValidationError(e.to_string().into())
}

/// Error kind when the offending bytes came from a request payload.
pub(crate) fn from_payload_error(err: doc_ledger::Error) -> Error {
    match err {
        doc_ledger::Error::Invalid(message) | doc_ledger::Error::Malformed(message) => {
            Error::ValidationError(message)
        }
        doc_ledger::Error::Serialization(message) => Error::InternalError(message),
    }
}

/// Error kind when the offending bytes came from the ledger itself.
pub(crate) fn from_stored_document_error(err: doc_ledger::Error) -> Error {
    match err {
        doc_ledger::Error::Invalid(message) | doc_ledger::Error::Malformed(message) => {
            Error::MalformedDocument(message)
        }
        doc_ledger::Error::Serialization(message) => Error::InternalError(message),
    }
}
