//! Photo — the base64-encoded image payload attached to a record.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

use crate::Result;

/// A base64-encoded image.
///
/// The payload stays encoded for its whole trip through the system: the
/// presentation layer encodes raw bytes once at acquisition, the store
/// persists the text verbatim and never decodes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Photo(String);

impl Photo {
  /// Wrap an already-encoded base64 payload.
  pub fn from_base64(encoded: impl Into<String>) -> Self {
    Self(encoded.into())
  }

  /// Encode raw image bytes.
  pub fn from_bytes(bytes: &[u8]) -> Self {
    Self(STANDARD.encode(bytes))
  }

  pub fn as_base64(&self) -> &str {
    &self.0
  }

  /// Decode back to the original image bytes.
  pub fn decode(&self) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(&self.0)?)
  }
}

#[cfg(test)]
mod tests {
  use super::Photo;

  #[test]
  fn encode_decode_roundtrip() {
    let bytes = b"\x89PNG not a real image";
    let photo = Photo::from_bytes(bytes);
    assert_eq!(photo.decode().unwrap(), bytes);
  }

  #[test]
  fn decode_rejects_garbage() {
    let photo = Photo::from_base64("definitely not base64!!!");
    assert!(photo.decode().is_err());
  }
}
