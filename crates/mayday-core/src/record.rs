//! Record — one emergency-log entry.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, photo::Photo};

/// Row identity. Assigned by the store exactly once at insertion, stable for
/// the record's lifetime, and never reused after deletion.
pub type RecordId = i64;

/// The order in which [`list_all`](crate::store::RecordStore::list_all)
/// returns records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListOrder {
  /// Insertion order (ascending id) — the default.
  #[default]
  Insertion,
  /// Most recently inserted first (descending id).
  NewestFirst,
}

/// One persisted emergency-log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
  pub id:          RecordId,
  /// Free-form at the storage layer; date-format validation is a caller
  /// concern.
  pub date:        String,
  pub title:       String,
  pub description: Option<String>,
  pub photo:       Option<Photo>,
}

/// Input for [`insert`](crate::store::RecordStore::insert) and
/// [`update`](crate::store::RecordStore::update).
///
/// The store accepts whatever it is given, empty strings included. Callers
/// are expected to run [`NewRecord::validate`] first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecord {
  pub date:        String,
  pub title:       String,
  pub description: Option<String>,
  pub photo:       Option<Photo>,
}

impl NewRecord {
  pub fn new(date: impl Into<String>, title: impl Into<String>) -> Self {
    Self {
      date: date.into(),
      title: title.into(),
      ..Self::default()
    }
  }

  pub fn with_description(mut self, description: impl Into<String>) -> Self {
    self.description = Some(description.into());
    self
  }

  pub fn with_photo(mut self, photo: Photo) -> Self {
    self.photo = Some(photo);
    self
  }

  /// Reject empty required fields. `date` and `title` must be non-empty at
  /// the point of insertion; the store itself does not enforce this.
  pub fn validate(&self) -> Result<()> {
    if self.date.trim().is_empty() {
      return Err(Error::EmptyField("date"));
    }
    if self.title.trim().is_empty() {
      return Err(Error::EmptyField("title"));
    }
    Ok(())
  }
}

/// Partial-update input for [`patch`](crate::store::RecordStore::patch).
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
  pub date:        Option<String>,
  pub title:       Option<String>,
  pub description: Option<String>,
  pub photo:       Option<Photo>,
}

impl RecordPatch {
  /// `true` when the patch names no fields at all.
  pub fn is_empty(&self) -> bool {
    self.date.is_none()
      && self.title.is_none()
      && self.description.is_none()
      && self.photo.is_none()
  }
}
