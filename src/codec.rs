//! On-ledger representation of documents.  The encoding is compact JSON with object keys in
//! sorted order, so encoding the same Document always produces the same bytes.

use crate::{document::json_type_name, error_malformed, error_serialization, Document, Result};

/// Parse bytes as a JSON object.  Fails with Error::Malformed if the bytes aren't valid JSON or
/// don't encode an object.
pub fn decode(bytes: &[u8]) -> Result<Document> {
    let value: serde_json::Value = serde_json::from_slice(bytes)
        .map_err(|err| error_malformed(format!("invalid JSON: {}", err)))?;
    match value {
        serde_json::Value::Object(map) => Ok(Document::from(map)),
        other => Err(error_malformed(format!(
            "expected a JSON object, got {}",
            json_type_name(&other)
        ))),
    }
}

/// Serialize a Document to its on-ledger bytes.  `decode(&encode(d)?)? == d` for any Document.
pub fn encode(document: &Document) -> Result<Vec<u8>> {
    let bytes = serde_json::to_vec(document).map_err(error_serialization)?;
    tracing::trace!("encoded document: {}", String::from_utf8_lossy(&bytes));
    Ok(bytes)
}

/// Shallow merge: every top-level field of `patch` overwrites (or is inserted into) `base`.
/// There is no recursion into nested objects and no null-means-delete rule.
pub fn merge_patch(base: Document, patch: Document) -> Document {
    base.merge_patch(patch)
}
