use crate::{require_string, Document, Result, SignatureEntry, SignatureParams, DOCUMENT_ID_FIELD};

/// A request to append a signature entry to a document.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignEnvelope {
    pub document_id: String,
    pub actor: String,
    pub timestamp: String,
    pub signature: SignatureParams,
}

impl SignEnvelope {
    pub fn from_payload(payload: &Document) -> Result<Self> {
        let document_id = require_string(payload, DOCUMENT_ID_FIELD)?;
        let actor = require_string(payload, "actor")?;
        let timestamp = require_string(payload, "timestamp")?;
        let signature = SignatureParams::from_value(payload.get("signature"))?;
        Ok(Self {
            document_id: document_id.to_string(),
            actor: actor.to_string(),
            timestamp: timestamp.to_string(),
            signature,
        })
    }
    /// Produce the entry that gets appended to the document's `signatures` field.
    pub fn to_signature_entry(&self) -> SignatureEntry {
        SignatureEntry {
            actor: self.actor.clone(),
            timestamp: self.timestamp.clone(),
            hash: self.signature.hash.clone(),
            algo: self.signature.algo.clone(),
        }
    }
}
