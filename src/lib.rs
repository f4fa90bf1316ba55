mod codec;
mod document;
mod document_responses;
mod error;
mod malformed_signatures_policy;
mod sign_envelope;
mod signature_entry;
mod signature_params;
mod update_envelope;

pub use crate::{
    codec::{decode, encode, merge_patch},
    document::Document,
    document_responses::{CreateDocumentResponse, SignDocumentResponse, UpdateDocumentResponse},
    error::{error_invalid, error_malformed, error_serialization, Error},
    malformed_signatures_policy::MalformedSignaturesPolicy,
    sign_envelope::SignEnvelope,
    signature_entry::SignatureEntry,
    signature_params::SignatureParams,
    update_envelope::UpdateEnvelope,
};

pub type Result<T> = std::result::Result<T, Error>;

/// Name of the field that identifies a document.  It's also the ledger key the document is stored at.
pub const DOCUMENT_ID_FIELD: &str = "documentId";
/// Name of the reserved, append-only field holding the document's signature entries.
pub const SIGNATURES_FIELD: &str = "signatures";

/// A stored value counts as blank (i.e. equivalent to absent) if it's empty or if it's valid UTF-8
/// consisting only of whitespace.
pub fn is_blank(bytes: &[u8]) -> bool {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.trim().is_empty(),
        Err(_) => false,
    }
}

/// Extract a required, non-blank string field from a JSON object.  The error message names the field.
pub fn require_string<'a>(
    map: &'a serde_json::Map<String, serde_json::Value>,
    field_name: &str,
) -> Result<&'a str> {
    require_string_at(map, field_name, field_name)
}

/// Same as require_string, but `field_path` is used in the error message, e.g. "signature.hash".
pub(crate) fn require_string_at<'a>(
    map: &'a serde_json::Map<String, serde_json::Value>,
    field_name: &str,
    field_path: &str,
) -> Result<&'a str> {
    match map.get(field_name) {
        None | Some(serde_json::Value::Null) => {
            Err(error_invalid(format!("{} is required", field_path)))
        }
        Some(serde_json::Value::String(s)) => {
            if s.trim().is_empty() {
                Err(error_invalid(format!("{} is required", field_path)))
            } else {
                Ok(s.as_str())
            }
        }
        Some(_) => Err(error_invalid(format!("{} must be a string", field_path))),
    }
}
