//! Error type for `mayday-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Bootstrap I/O failure (directory creation or seed copy). Fatal at
  /// startup: the application must not proceed to the store against a
  /// missing file.
  #[error("bootstrap i/o error: {0}")]
  Io(#[from] std::io::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
