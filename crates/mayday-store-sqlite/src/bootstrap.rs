//! Database bootstrap — seed the writable database file on first launch.
//!
//! The bundled asset is a pre-populated database with the expected schema.
//! It is copied byte-for-byte into writable storage exactly once; every
//! later launch finds the file already present and leaves user data alone.

use std::path::{Path, PathBuf};

use crate::Result;

/// Fixed database file name, kept stable across releases so existing
/// installs keep their data.
pub const DB_NAME: &str = "parcial2.db";

/// The bundled seed database.
const SEED: &[u8] = include_bytes!("../assets/parcial2.db");

/// Ensure the database file exists at `<base_dir>/SQLite/parcial2.db`,
/// seeding it from the bundled asset if this is the first launch. Idempotent
/// and safe to call on every process start; returns the path to hand to
/// [`SqliteStore::open`](crate::SqliteStore::open).
///
/// Any I/O failure here is fatal to startup: callers must surface it as a
/// blocking error instead of proceeding against a missing file.
pub async fn ensure_database_ready(base_dir: impl AsRef<Path>) -> Result<PathBuf> {
  let dir = base_dir.as_ref().join("SQLite");
  let target = dir.join(DB_NAME);

  if tokio::fs::try_exists(&target).await? {
    tracing::debug!(path = %target.display(), "database present, skipping seed copy");
    return Ok(target);
  }

  tokio::fs::create_dir_all(&dir).await?;

  // Stage the copy and rename into place: a crash mid-write must not leave
  // a truncated file that the next launch would mistake for a database.
  let staging = dir.join(format!("{DB_NAME}.seed-tmp"));
  tokio::fs::write(&staging, SEED).await?;
  tokio::fs::rename(&staging, &target).await?;

  tracing::info!(
    path = %target.display(),
    bytes = SEED.len(),
    "seeded database from bundled asset"
  );
  Ok(target)
}
