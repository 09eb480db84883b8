//! Hub API response envelope: `{"data": {"yaml": "..."}}`.
//!
//! Decoded strictly: a body without a string `data.yaml` is an error, never
//! empty content. Any other fields are ignored.

use serde::Deserialize;

use crate::error::ResolveError;

#[derive(Debug, Deserialize)]
pub struct HubResponse {
    pub data: HubData,
}

#[derive(Debug, Deserialize)]
pub struct HubData {
    pub yaml: String,
}

/// Extracts the embedded YAML payload as raw bytes.
pub fn decode_body(body: &[u8]) -> Result<Vec<u8>, ResolveError> {
    let resp: HubResponse = serde_json::from_slice(body).map_err(ResolveError::Decode)?;
    Ok(resp.data.yaml.into_bytes())
}
