use crate::{
    error_malformed, error_serialization, require_string, Error, MalformedSignaturesPolicy, Result,
    SignatureEntry, DOCUMENT_ID_FIELD, SIGNATURES_FIELD,
};

/// A versioned JSON document as it's stored in the ledger: a JSON object mapping field names to
/// arbitrary JSON values.  The `documentId` field identifies the document, and the reserved
/// `signatures` field, if present, is an append-only sequence of signature entries.
#[derive(
    Clone,
    Debug,
    Default,
    derive_more::Deref,
    derive_more::DerefMut,
    serde::Deserialize,
    Eq,
    derive_more::From,
    derive_more::Into,
    PartialEq,
    serde::Serialize,
)]
#[serde(transparent)]
pub struct Document(serde_json::Map<String, serde_json::Value>);

impl Document {
    pub fn new() -> Self {
        Self::default()
    }
    /// Returns the non-blank `documentId` field.
    pub fn document_id(&self) -> Result<&str> {
        require_string(&self.0, DOCUMENT_ID_FIELD)
    }
    /// Overlay the top-level fields of `patch` onto this document.  Each patch value replaces the
    /// existing value wholesale (nested objects are not merged), and a null patch value is stored
    /// as null rather than deleting the field.
    pub fn apply_merge_patch(&mut self, patch: Document) {
        for (key, value) in patch.0.into_iter() {
            self.0.insert(key, value);
        }
    }
    /// Consuming version of apply_merge_patch.
    pub fn merge_patch(mut self, patch: Document) -> Self {
        self.apply_merge_patch(patch);
        self
    }
    /// Append a signature entry to the end of the `signatures` field.  If that field is absent, it's
    /// started fresh.  If it's present but isn't an array, then malformed_signatures_policy decides
    /// whether it's replaced by a fresh array or the append fails.
    pub fn append_signature(
        &mut self,
        signature_entry: SignatureEntry,
        malformed_signatures_policy: MalformedSignaturesPolicy,
    ) -> Result<()> {
        let signature_entry_value =
            serde_json::to_value(&signature_entry).map_err(error_serialization)?;
        match self.0.get_mut(SIGNATURES_FIELD) {
            Some(serde_json::Value::Array(signature_entry_v)) => {
                signature_entry_v.push(signature_entry_value);
            }
            None => {
                self.0.insert(
                    SIGNATURES_FIELD.to_string(),
                    serde_json::Value::Array(vec![signature_entry_value]),
                );
            }
            Some(malformed_signatures) => match malformed_signatures_policy {
                MalformedSignaturesPolicy::Discard => {
                    tracing::warn!(
                        "discarding malformed {:?} field (expected an array): {}",
                        SIGNATURES_FIELD,
                        malformed_signatures
                    );
                    *malformed_signatures = serde_json::Value::Array(vec![signature_entry_value]);
                }
                MalformedSignaturesPolicy::Fail => {
                    return Err(error_malformed(format!(
                        "{:?} field is not an array",
                        SIGNATURES_FIELD
                    )));
                }
            },
        }
        Ok(())
    }
    /// Typed view of the `signatures` field.  Returns None if the field is absent, not an array, or
    /// contains something that isn't a well-formed signature entry.
    pub fn signatures(&self) -> Option<Vec<SignatureEntry>> {
        let signatures_value = self.0.get(SIGNATURES_FIELD)?;
        if !signatures_value.is_array() {
            return None;
        }
        serde_json::from_value(signatures_value.clone()).ok()
    }
}

impl TryFrom<serde_json::Value> for Document {
    type Error = Error;
    fn try_from(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Object(map) => Ok(Self(map)),
            other => Err(error_malformed(format!(
                "expected a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

impl From<Document> for serde_json::Value {
    fn from(document: Document) -> Self {
        serde_json::Value::Object(document.0)
    }
}

pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
