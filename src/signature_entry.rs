/// One record of the append-only `signatures` log.  Entries are never modified once appended.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct SignatureEntry {
    pub actor: String,
    pub timestamp: String,
    pub hash: String,
    pub algo: String,
}
