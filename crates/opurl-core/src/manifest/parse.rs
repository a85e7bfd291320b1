//! Decode a manifest response body.

use super::Manifest;

/// Parse a JSON response body into a [`Manifest`].
///
/// The top level must be a JSON object; `sources` may be missing or null.
pub fn parse_manifest(body: &[u8]) -> Result<Manifest, serde_json::Error> {
    serde_json::from_slice(body)
}
