//! SQL schema for the `agenda` table.
//!
//! The table is schema-stable: created once, never altered. The creation
//! statement is idempotent and cheap, so every store operation replays it
//! inside its own transaction before running its statement — a fresh file
//! is usable no matter which operation touches it first.

/// Idempotent DDL for the single `agenda` table.
///
/// `AUTOINCREMENT` (not plain rowid assignment) so an id is never reused
/// after its record is deleted. The `photo` column keeps BLOB affinity for
/// compatibility with seeded databases but always holds base64 text.
pub const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS agenda (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    date        TEXT NOT NULL,
    title       TEXT NOT NULL,
    description TEXT,
    photo       BLOB
)";

/// Connection-level pragmas, applied once at open. WAL cannot be switched
/// on from inside a transaction, so these never run alongside a statement.
pub const PRAGMAS: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;
";
