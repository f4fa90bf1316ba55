use crate::{error_invalid, require_string, Document, Result, DOCUMENT_ID_FIELD};

/// A request to partially update a document.  `actor` and `timestamp` record who made the edit
/// and when, but only `patch` is merged into the stored document.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEnvelope {
    pub document_id: String,
    pub actor: String,
    pub timestamp: String,
    pub patch: Document,
}

impl UpdateEnvelope {
    /// Validate an update request payload.  Field checks happen in a fixed order (documentId,
    /// actor, timestamp, patch) so the reported error always names the first offending field.
    pub fn from_payload(payload: &Document) -> Result<Self> {
        let document_id = require_string(payload, DOCUMENT_ID_FIELD)?;
        let actor = require_string(payload, "actor")?;
        let timestamp = require_string(payload, "timestamp")?;
        let patch = match payload.get("patch") {
            Some(serde_json::Value::Object(patch_map)) => Document::from(patch_map.clone()),
            _ => return Err(error_invalid("patch is required")),
        };
        let update_envelope = Self {
            document_id: document_id.to_string(),
            actor: actor.to_string(),
            timestamp: timestamp.to_string(),
            patch,
        };
        update_envelope.verify_patch()?;
        Ok(update_envelope)
    }
    /// The patch must never carry `documentId`, since a document's identity is immutable.
    pub fn verify_patch(&self) -> Result<()> {
        if self.patch.contains_key(DOCUMENT_ID_FIELD) {
            return Err(error_invalid(format!(
                "patch must not overwrite {}",
                DOCUMENT_ID_FIELD
            )));
        }
        Ok(())
    }
}
