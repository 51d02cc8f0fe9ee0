//! `mayday` — command-line front end for the emergency log.
//!
//! The store is deliberately dumb; this binary owns everything it does not:
//! input validation (non-empty date and title), photo acquisition and
//! base64 encoding, and refreshing the full list after every write.
//!
//! # Usage
//!
//! ```
//! mayday add --title "Fire" --description "Kitchen fire" --photo kitchen.png
//! mayday list --newest-first
//! mayday edit 3 --description "Kitchen fire contained"
//! mayday remove 3
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context as _, bail};
use clap::{Parser, Subcommand};
use mayday_core::{
  photo::Photo,
  record::{ListOrder, NewRecord, Record, RecordId},
  store::RecordStore,
};
use mayday_store_sqlite::{SqliteStore, ensure_database_ready};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "mayday", about = "Local emergency-log record keeper")]
struct Cli {
  /// Base directory for application data (default: the platform data dir).
  #[arg(long, env = "MAYDAY_DATA_DIR", value_name = "DIR")]
  data_dir: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Print all records.
  List {
    /// Most recently added first instead of insertion order.
    #[arg(long)]
    newest_first: bool,

    /// Emit JSON instead of the human-readable listing.
    #[arg(long)]
    json: bool,
  },

  /// Print a single record.
  Show {
    id: RecordId,

    /// Decode the photo and write it to this file.
    #[arg(long, value_name = "FILE")]
    photo_out: Option<PathBuf>,
  },

  /// Add a new record.
  Add {
    /// Date of the emergency (default: today, YYYY-MM-DD).
    #[arg(long)]
    date: Option<String>,

    #[arg(long)]
    title: String,

    #[arg(long)]
    description: Option<String>,

    /// Image file to attach (stored base64-encoded).
    #[arg(long, value_name = "FILE")]
    photo: Option<PathBuf>,
  },

  /// Edit an existing record. Unset flags keep the stored values.
  Edit {
    id: RecordId,

    #[arg(long)]
    date: Option<String>,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    description: Option<String>,

    /// Replacement image file (stored base64-encoded).
    #[arg(long, value_name = "FILE")]
    photo: Option<PathBuf>,
  },

  /// Delete a record.
  Remove { id: RecordId },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let base_dir = match cli.data_dir {
    Some(dir) => dir,
    None => directories::ProjectDirs::from("", "", "mayday")
      .context("cannot determine a data directory for this platform")?
      .data_dir()
      .to_path_buf(),
  };

  // Bootstrap gates everything: no store operation may run against a
  // missing file, so a failed seed copy aborts the whole command.
  let db_path = ensure_database_ready(&base_dir)
    .await
    .context("database bootstrap failed; cannot continue")?;

  let store = SqliteStore::open(&db_path)
    .await
    .with_context(|| format!("failed to open database at {}", db_path.display()))?;

  tracing::debug!(path = %db_path.display(), "store ready");

  match cli.command {
    Command::List { newest_first, json } => list(&store, newest_first, json).await,
    Command::Show { id, photo_out } => show(&store, id, photo_out).await,
    Command::Add { date, title, description, photo } => {
      add(&store, date, title, description, photo).await
    }
    Command::Edit { id, date, title, description, photo } => {
      edit(&store, id, date, title, description, photo).await
    }
    Command::Remove { id } => remove(&store, id).await,
  }
}

// ─── Commands ─────────────────────────────────────────────────────────────────

async fn list(store: &SqliteStore, newest_first: bool, json: bool) -> anyhow::Result<()> {
  let order = if newest_first {
    ListOrder::NewestFirst
  } else {
    ListOrder::Insertion
  };

  let records = store.list_all(order).await?;
  if json {
    println!("{}", serde_json::to_string_pretty(&records)?);
  } else {
    print_records(&records);
  }
  Ok(())
}

async fn show(
  store: &SqliteStore,
  id: RecordId,
  photo_out: Option<PathBuf>,
) -> anyhow::Result<()> {
  let Some(record) = store.get(id).await? else {
    bail!("no record with id {id}");
  };

  print_records(std::slice::from_ref(&record));

  if let Some(out) = photo_out {
    let Some(photo) = &record.photo else {
      bail!("record {id} has no photo");
    };
    let bytes = photo.decode().context("stored photo is not valid base64")?;
    tokio::fs::write(&out, bytes)
      .await
      .with_context(|| format!("writing photo to {}", out.display()))?;
    println!("photo written to {}", out.display());
  }

  Ok(())
}

async fn add(
  store: &SqliteStore,
  date: Option<String>,
  title: String,
  description: Option<String>,
  photo: Option<PathBuf>,
) -> anyhow::Result<()> {
  let date =
    date.unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());

  let mut input = NewRecord::new(date, title);
  input.description = description;
  input.photo = match photo {
    Some(path) => Some(read_photo(&path).await?),
    None => None,
  };

  // Validation happens here, before the store ever sees the input.
  input.validate()?;

  let inserted = store.insert(input).await.context("insert failed")?;
  println!("added record {}", inserted.id);

  // The store has no change notifications: re-read the full list after
  // every write to refresh the view.
  print_records(&store.list_all(ListOrder::Insertion).await?);
  Ok(())
}

async fn edit(
  store: &SqliteStore,
  id: RecordId,
  date: Option<String>,
  title: Option<String>,
  description: Option<String>,
  photo: Option<PathBuf>,
) -> anyhow::Result<()> {
  // Load the record first to pre-populate every field: `update` is a
  // full-row overwrite, and issuing it with missing fields would blank
  // whatever the user left unset.
  let Some(existing) = store.get(id).await? else {
    bail!("no record with id {id}");
  };

  let input = NewRecord {
    date:        date.unwrap_or(existing.date),
    title:       title.unwrap_or(existing.title),
    description: description.or(existing.description),
    photo:       match photo {
      Some(path) => Some(read_photo(&path).await?),
      None => existing.photo,
    },
  };
  input.validate()?;

  let affected = store.update(id, input).await.context("update failed")?;
  if affected == 0 {
    // The record vanished between the read and the write (e.g. removed by
    // a prior action). A normal outcome, not an error.
    println!("record {id} no longer exists; nothing changed");
    return Ok(());
  }

  println!("updated record {id}");
  print_records(&store.list_all(ListOrder::Insertion).await?);
  Ok(())
}

async fn remove(store: &SqliteStore, id: RecordId) -> anyhow::Result<()> {
  let affected = store.delete(id).await.context("delete failed")?;
  if affected == 0 {
    println!("no record with id {id}; nothing removed");
    return Ok(());
  }

  println!("removed record {id}");
  print_records(&store.list_all(ListOrder::Insertion).await?);
  Ok(())
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

async fn read_photo(path: &Path) -> anyhow::Result<Photo> {
  let bytes = tokio::fs::read(path)
    .await
    .with_context(|| format!("reading photo file {}", path.display()))?;
  Ok(Photo::from_bytes(&bytes))
}

fn print_records(records: &[Record]) {
  if records.is_empty() {
    println!("no records");
    return;
  }

  for record in records {
    println!("#{}  {}  {}", record.id, record.date, record.title);
    if let Some(description) = &record.description {
      println!("    {description}");
    }
    if let Some(photo) = &record.photo {
      println!("    [photo: {} base64 chars]", photo.as_base64().len());
    }
  }
}
