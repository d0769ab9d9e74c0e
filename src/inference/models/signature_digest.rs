use serde::Deserialize;
use serde_json::Value;

/// Known fields of a `c0_signature` block. Every field is optional since the
/// client never enforces a schema on it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SignatureDigest {
    #[serde(default)]
    pub input_hash: Option<String>,
    #[serde(default)]
    pub axiom_hash: Option<String>,
    #[serde(default)]
    pub state_trace: Option<String>,
    #[serde(default)]
    pub proof_cert: Option<ProofCertDigest>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProofCertDigest {
    #[serde(default)]
    pub backend: Option<String>,
    #[serde(default)]
    pub prover: Option<String>,
    #[serde(default)]
    pub circuit: Option<String>,
    #[serde(default)]
    pub seal: Option<String>,
    #[serde(default)]
    pub timestamp_utc: Option<i64>,
}

impl SignatureDigest {
    /// `None` unless `value` is a non-empty object whose known fields have the expected types.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value.as_object() {
            Some(object) if !object.is_empty() => serde_json::from_value(value.clone()).ok(),
            _ => None,
        }
    }
}
