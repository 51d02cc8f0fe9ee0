//! SQLite backend for the Mayday emergency log.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated
//! thread without blocking the async runtime. Also home of the bootstrap
//! step that seeds the writable database file from the bundled asset on
//! first launch.

mod schema;
mod store;

pub mod bootstrap;
pub mod error;

pub use bootstrap::{DB_NAME, ensure_database_ready};
pub use error::{Error, Result};
pub use store::SqliteStore;

#[cfg(test)]
mod tests;
