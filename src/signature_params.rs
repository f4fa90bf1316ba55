use crate::{error_invalid, require_string_at, Result};

/// The `signature` object of a sign request.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct SignatureParams {
    pub hash: String,
    pub algo: String,
}

impl SignatureParams {
    pub fn from_value(signature_value_o: Option<&serde_json::Value>) -> Result<Self> {
        let signature_map = match signature_value_o {
            Some(serde_json::Value::Object(signature_map)) => signature_map,
            _ => return Err(error_invalid("signature is required")),
        };
        let hash = require_string_at(signature_map, "hash", "signature.hash")?;
        let algo = require_string_at(signature_map, "algo", "signature.algo")?;
        Ok(Self {
            hash: hash.to_string(),
            algo: algo.to_string(),
        })
    }
}
