use std::borrow::Cow;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid: {0}")]
    Invalid(Cow<'static, str>),
    #[error("Malformed: {0}")]
    Malformed(Cow<'static, str>),
    #[error("Serialization error: {0}")]
    Serialization(Cow<'static, str>),
}

pub fn error_invalid<E: std::fmt::Display>(e: E) -> Error {
    Error::Invalid(e.to_string().into())
}

pub fn error_malformed<E: std::fmt::Display>(e: E) -> Error {
    Error::Malformed(e.to_string().into())
}

pub fn error_serialization<E: std::fmt::Display>(e: E) -> Error {
    Error::Serialization(e.to_string().into())
}
