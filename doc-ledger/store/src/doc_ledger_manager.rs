use crate::{
    error::{from_payload_error, from_stored_document_error},
    error_already_exists, error_internal_error, error_malformed_document, error_not_found,
    error_validation_error, DocLedgerConfig, KeyLocks, LedgerStorage, Result,
};
use doc_ledger::{
    CreateDocumentResponse, Document, SignDocumentResponse, SignEnvelope, UpdateDocumentResponse,
    UpdateEnvelope,
};
use std::sync::Arc;

/// Manages the lifecycle of documents stored in a key-value ledger: create once, read any number of
/// times, partially update, and append signatures.  Every operation is a single read-decide-write
/// step; all validation happens before the sole write, so a failed operation leaves the ledger
/// untouched.
#[derive(Clone)]
pub struct DocLedger {
    ledger_storage_a: Arc<dyn LedgerStorage>,
    config: DocLedgerConfig,
    key_locks: KeyLocks,
}

impl DocLedger {
    /// Create a new DocLedger using the given LedgerStorage implementation.
    pub fn new(ledger_storage_a: Arc<dyn LedgerStorage>, config: DocLedgerConfig) -> Self {
        Self {
            ledger_storage_a,
            config,
            key_locks: KeyLocks::new(),
        }
    }
    pub fn config(&self) -> &DocLedgerConfig {
        &self.config
    }
    /// Number of document ids that currently have an operation holding or awaiting their lock.
    pub fn live_key_lock_count(&self) -> Result<usize> {
        self.key_locks.live_key_count()
    }

    /// Store a new document.  The payload must be a JSON object with a non-blank `documentId`, and
    /// it's stored verbatim (not re-serialized) at that key.  Fails with AlreadyExists if that key
    /// already holds a non-blank value.
    pub async fn create_document(&self, payload_json: &str) -> Result<String> {
        tracing::trace!("DocLedger::create_document; payload_json: {}", payload_json);
        let payload = doc_ledger::decode(payload_json.as_bytes()).map_err(from_payload_error)?;
        let document_id = payload.document_id().map_err(from_payload_error)?;
        tracing::debug!("DocLedger::create_document; document_id: {:?}", document_id);

        let _key_lock_go = self.lock_key_if_configured(document_id).await?;
        if self.read_present_state(document_id).await?.is_some() {
            return Err(error_already_exists(document_id));
        }
        self.ledger_storage_a
            .write_state(document_id, payload_json.as_bytes())
            .await?;

        to_response_json(&CreateDocumentResponse {
            document_id: document_id.to_string(),
            stored: true,
        })
    }

    /// Return the stored bytes of the document exactly as they were last written.
    pub async fn get_document(&self, document_id: &str) -> Result<Vec<u8>> {
        tracing::debug!("DocLedger::get_document; document_id: {:?}", document_id);
        if document_id.trim().is_empty() {
            return Err(error_validation_error("documentId is required"));
        }
        self.read_present_state(document_id)
            .await?
            .ok_or_else(|| error_not_found(document_id))
    }
    /// Same as get_document, but decodes the stored bytes.
    pub async fn get_document_value(&self, document_id: &str) -> Result<Document> {
        let document_bytes = self.get_document(document_id).await?;
        doc_ledger::decode(&document_bytes).map_err(from_stored_document_error)
    }

    /// Apply an update request payload (`{documentId, actor, timestamp, patch}`) to an existing document.
    pub async fn update_document(&self, payload_json: &str) -> Result<String> {
        tracing::trace!("DocLedger::update_document; payload_json: {}", payload_json);
        let payload = doc_ledger::decode(payload_json.as_bytes()).map_err(from_payload_error)?;
        let update_envelope = UpdateEnvelope::from_payload(&payload).map_err(from_payload_error)?;
        let update_document_response = self.update_document_with(&update_envelope).await?;
        to_response_json(&update_document_response)
    }
    /// Shallow-merge the envelope's patch into the existing document.  The envelope's actor and
    /// timestamp are not written into the document.
    pub async fn update_document_with(
        &self,
        update_envelope: &UpdateEnvelope,
    ) -> Result<UpdateDocumentResponse> {
        tracing::debug!(
            "DocLedger::update_document_with; document_id: {:?}, actor: {:?}, timestamp: {:?}, patched fields: {:?}",
            update_envelope.document_id,
            update_envelope.actor,
            update_envelope.timestamp,
            update_envelope.patch.keys().collect::<Vec<_>>()
        );
        // Envelopes can be constructed directly, so the identity check can't be assumed to have happened.
        update_envelope.verify_patch().map_err(from_payload_error)?;
        let document_id = update_envelope.document_id.as_str();
        if document_id.trim().is_empty() {
            return Err(error_validation_error("documentId is required"));
        }

        let _key_lock_go = self.lock_key_if_configured(document_id).await?;
        let mut document = self.read_existing_document(document_id).await?;
        document.apply_merge_patch(update_envelope.patch.clone());
        self.write_document(document_id, &document).await?;

        Ok(UpdateDocumentResponse {
            document_id: document_id.to_string(),
            updated: true,
        })
    }

    /// Apply a sign request payload (`{documentId, actor, timestamp, signature: {hash, algo}}`),
    /// appending a signature entry to the existing document.
    pub async fn sign_document(&self, payload_json: &str) -> Result<String> {
        tracing::trace!("DocLedger::sign_document; payload_json: {}", payload_json);
        let payload = doc_ledger::decode(payload_json.as_bytes()).map_err(from_payload_error)?;
        let sign_envelope = SignEnvelope::from_payload(&payload).map_err(from_payload_error)?;
        let sign_document_response = self.sign_document_with(&sign_envelope).await?;
        to_response_json(&sign_document_response)
    }
    /// Append the envelope's signature entry to the end of the document's `signatures` field.
    pub async fn sign_document_with(
        &self,
        sign_envelope: &SignEnvelope,
    ) -> Result<SignDocumentResponse> {
        tracing::debug!(
            "DocLedger::sign_document_with; document_id: {:?}, actor: {:?}, algo: {:?}",
            sign_envelope.document_id,
            sign_envelope.actor,
            sign_envelope.signature.algo
        );
        let document_id = sign_envelope.document_id.as_str();
        if document_id.trim().is_empty() {
            return Err(error_validation_error("documentId is required"));
        }

        let _key_lock_go = self.lock_key_if_configured(document_id).await?;
        let mut document = self.read_existing_document(document_id).await?;
        document
            .append_signature(
                sign_envelope.to_signature_entry(),
                self.config.malformed_signatures_policy,
            )
            .map_err(from_stored_document_error)?;
        self.write_document(document_id, &document).await?;

        Ok(SignDocumentResponse {
            document_id: document_id.to_string(),
            signed: true,
        })
    }

    async fn lock_key_if_configured(
        &self,
        document_id: &str,
    ) -> Result<Option<tokio::sync::OwnedMutexGuard<()>>> {
        if self.config.key_locking {
            Ok(Some(self.key_locks.lock(document_id).await?))
        } else {
            Ok(None)
        }
    }
    /// Read the value at `key`, treating a blank value the same as a missing one.
    async fn read_present_state(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let value_o = self.ledger_storage_a.read_state(key).await?;
        Ok(value_o.filter(|value| !doc_ledger::is_blank(value)))
    }
    async fn read_existing_document(&self, document_id: &str) -> Result<Document> {
        let document_bytes = self
            .read_present_state(document_id)
            .await?
            .ok_or_else(|| error_not_found(document_id))?;
        doc_ledger::decode(&document_bytes).map_err(|err| {
            error_malformed_document(format!(
                "stored document {:?} failed to decode: {}",
                document_id, err
            ))
        })
    }
    async fn write_document(&self, document_id: &str, document: &Document) -> Result<()> {
        let document_bytes = doc_ledger::encode(document).map_err(error_internal_error)?;
        self.ledger_storage_a
            .write_state(document_id, &document_bytes)
            .await
    }
}

fn to_response_json<T: serde::Serialize>(response: &T) -> Result<String> {
    serde_json::to_string(response).map_err(error_internal_error)
}
