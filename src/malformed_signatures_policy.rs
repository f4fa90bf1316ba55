/// Determines what happens when a document's existing `signatures` field is present but isn't an array
/// at the time a new signature entry is appended.
#[derive(Clone, Copy, Debug, Default, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedSignaturesPolicy {
    /// Replace the malformed value with a fresh array holding only the new entry.
    #[default]
    Discard,
    /// Fail the append, leaving the document untouched.
    Fail,
}
