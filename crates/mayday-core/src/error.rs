//! Error types for `mayday-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A required field was empty. Raised by
  /// [`NewRecord::validate`](crate::record::NewRecord::validate) before any
  /// store call, so empty required fields never reach the storage layer.
  #[error("required field `{0}` is empty")]
  EmptyField(&'static str),

  #[error("invalid base64 photo payload: {0}")]
  PhotoDecode(#[from] base64::DecodeError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
