use config::{Config, Environment, File};
use doc_ledger::MalformedSignaturesPolicy;
use serde_inline_default::serde_inline_default;

/// Prefix of the environment variables that DocLedgerConfig::load reads, e.g. `DOC_LEDGER_KEY_LOCKING`.
pub const DOC_LEDGER_ENV_PREFIX: &str = "DOC_LEDGER";

#[serde_inline_default]
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq)]
pub struct DocLedgerConfig {
    /// If true, Create, Update and Sign hold a per-key lock across their read-decide-write sequence,
    /// so that concurrent operations on the same document through this DocLedger can't clobber each
    /// other.  If false, the host ledger is trusted to serialize conflicting operations.
    #[serde_inline_default(true)]
    pub key_locking: bool,
    /// What Sign does when the stored document's `signatures` field isn't an array.
    #[serde_inline_default(MalformedSignaturesPolicy::Discard)]
    pub malformed_signatures_policy: MalformedSignaturesPolicy,
}

impl Default for DocLedgerConfig {
    fn default() -> Self {
        Self {
            key_locking: true,
            malformed_signatures_policy: MalformedSignaturesPolicy::Discard,
        }
    }
}

impl DocLedgerConfig {
    /// Load the config from `DOC_LEDGER_*` environment variables and, if given, a config file
    /// (whose format is determined by its extension).  Values in the file override the environment.
    /// Anything unspecified takes its default value.
    pub fn load(config_path_o: Option<&str>) -> crate::Result<Self> {
        let mut builder = Config::builder().add_source(
            Environment::with_prefix(DOC_LEDGER_ENV_PREFIX)
                .prefix_separator("_")
                .try_parsing(true),
        );
        if let Some(config_path) = config_path_o {
            tracing::info!("Reading DocLedger config from file: {:?}", config_path);
            builder = builder.add_source(File::with_name(config_path));
        }
        let doc_ledger_config: Self = builder.build()?.try_deserialize()?;
        tracing::debug!("Loaded {:?}", doc_ledger_config);
        Ok(doc_ledger_config)
    }
}
