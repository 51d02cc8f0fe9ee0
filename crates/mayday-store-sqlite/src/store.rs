//! [`SqliteStore`] — the SQLite implementation of [`RecordStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use mayday_core::{
  photo::Photo,
  record::{ListOrder, NewRecord, Record, RecordId, RecordPatch},
  store::RecordStore,
};

use crate::{Result, schema};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An emergency-log store backed by a single SQLite file.
///
/// One connection is opened at startup and shared for the process lifetime;
/// cloning is cheap — the inner connection is reference-counted. Each
/// operation executes the idempotent table-creation statement and its own
/// SQL inside one transaction, committed atomically.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  ///
  /// `path` is normally the file returned by
  /// [`ensure_database_ready`](crate::ensure_database_ready), so the seeded
  /// schema is already in place; a blank file works too.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.apply_pragmas().await?;
    store.ensure_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.apply_pragmas().await?;
    store.ensure_schema().await?;
    Ok(store)
  }

  async fn apply_pragmas(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(schema::PRAGMAS)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Create the `agenda` table if it is absent. Idempotent; `open` runs it,
  /// and every operation replays the same statement inside its own
  /// transaction.
  pub async fn ensure_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(schema::CREATE_TABLE)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── Row mapping ─────────────────────────────────────────────────────────────

fn record_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Record> {
  Ok(Record {
    id:          row.get(0)?,
    date:        row.get(1)?,
    title:       row.get(2)?,
    description: row.get(3)?,
    photo:       row
      .get::<_, Option<String>>(4)?
      .map(Photo::from_base64),
  })
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for SqliteStore {
  type Error = crate::Error;

  async fn list_all(&self, order: ListOrder) -> Result<Vec<Record>> {
    let records = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute_batch(schema::CREATE_TABLE)?;

        let sql = match order {
          ListOrder::Insertion => {
            "SELECT id, date, title, description, photo FROM agenda ORDER BY id ASC"
          }
          ListOrder::NewestFirst => {
            "SELECT id, date, title, description, photo FROM agenda ORDER BY id DESC"
          }
        };

        let records = {
          let mut stmt = tx.prepare(sql)?;
          stmt
            .query_map([], record_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        };

        tx.commit()?;
        Ok(records)
      })
      .await?;

    Ok(records)
  }

  async fn get(&self, id: RecordId) -> Result<Option<Record>> {
    let record = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute_batch(schema::CREATE_TABLE)?;

        let record = tx
          .query_row(
            "SELECT id, date, title, description, photo FROM agenda WHERE id = ?1",
            rusqlite::params![id],
            record_from_row,
          )
          .optional()?;

        tx.commit()?;
        Ok(record)
      })
      .await?;

    Ok(record)
  }

  async fn insert(&self, input: NewRecord) -> Result<Record> {
    let date        = input.date.clone();
    let title       = input.title.clone();
    let description = input.description.clone();
    let photo_b64   = input.photo.as_ref().map(|p| p.as_base64().to_owned());

    let id = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute_batch(schema::CREATE_TABLE)?;
        tx.execute(
          "INSERT INTO agenda (date, title, description, photo) VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![date, title, description, photo_b64],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(id)
      })
      .await?;

    tracing::debug!(id, "inserted record");

    Ok(Record {
      id,
      date: input.date,
      title: input.title,
      description: input.description,
      photo: input.photo,
    })
  }

  async fn update(&self, id: RecordId, input: NewRecord) -> Result<u64> {
    let photo_b64 = input.photo.as_ref().map(|p| p.as_base64().to_owned());
    let NewRecord { date, title, description, .. } = input;

    let affected = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute_batch(schema::CREATE_TABLE)?;
        let affected = tx.execute(
          "UPDATE agenda SET date = ?1, title = ?2, description = ?3, photo = ?4
           WHERE id = ?5",
          rusqlite::params![date, title, description, photo_b64, id],
        )?;
        tx.commit()?;
        Ok(affected as u64)
      })
      .await?;

    tracing::debug!(id, affected, "updated record");
    Ok(affected)
  }

  async fn patch(&self, id: RecordId, patch: RecordPatch) -> Result<u64> {
    let photo_b64 = patch.photo.as_ref().map(|p| p.as_base64().to_owned());
    let RecordPatch { date, title, description, .. } = patch;

    let affected = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute_batch(schema::CREATE_TABLE)?;
        // COALESCE keeps the stored value wherever the patch passes NULL.
        let affected = tx.execute(
          "UPDATE agenda SET
             date        = COALESCE(?1, date),
             title       = COALESCE(?2, title),
             description = COALESCE(?3, description),
             photo       = COALESCE(?4, photo)
           WHERE id = ?5",
          rusqlite::params![date, title, description, photo_b64, id],
        )?;
        tx.commit()?;
        Ok(affected as u64)
      })
      .await?;

    tracing::debug!(id, affected, "patched record");
    Ok(affected)
  }

  async fn delete(&self, id: RecordId) -> Result<u64> {
    let affected = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute_batch(schema::CREATE_TABLE)?;
        let affected =
          tx.execute("DELETE FROM agenda WHERE id = ?1", rusqlite::params![id])?;
        tx.commit()?;
        Ok(affected as u64)
      })
      .await?;

    tracing::debug!(id, affected, "deleted record");
    Ok(affected)
  }
}
