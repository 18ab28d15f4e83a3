pub mod session;

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use session::Session;

/// Tokens arrive unpadded but the backend has been seen padding them, so
/// accept either.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// A single capability grant carried in the token's `Permission` claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub id: String,
    #[serde(rename = "ro", default)]
    pub read_only: bool,
}

/// Decodes the payload segment of a compact bearer token without verifying
/// the signature. Any malformed input yields `None`, never an error: the
/// caller treats a token it cannot read the same as no token at all.
pub fn decode_token_claims(token: &str) -> Option<Value> {
    let mut parts = token.split('.');
    let _header = parts.next()?;
    let payload = parts.next()?;

    let bytes = PAYLOAD_ENGINE.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Normalizes the `Permission` claim into a uniform grant list.
///
/// The backend sends the claim either as an array of JSON-encoded strings
/// (`"{\"id\":\"ucAccountManagement\",\"ro\":false}"`) or as an array of
/// plain objects. Unparsable strings and non-object elements are dropped;
/// order is preserved and duplicate ids are kept as-is.
pub fn parse_permissions(raw: Option<&Value>) -> Vec<Permission> {
    let Some(Value::Array(entries)) = raw else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| match entry {
            Value::String(encoded) => serde_json::from_str(encoded).ok(),
            Value::Object(_) => serde_json::from_value(entry.clone()).ok(),
            _ => None,
        })
        .collect()
}
