//! The `RecordStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `mayday-store-sqlite`). The presentation layer depends on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use crate::record::{ListOrder, NewRecord, Record, RecordId, RecordPatch};

/// Abstraction over an emergency-log storage backend.
///
/// Every operation settles exactly once: success with a value or
/// affected-row count, or failure with a cause. A mutation addressing an id
/// that no longer exists resolves to an affected-row count of zero — a
/// normal outcome, never an error.
///
/// The store carries no notification mechanism. Callers keep their view
/// consistent by re-running [`list_all`](RecordStore::list_all) after every
/// successful mutation, never by incremental patching of their own state.
///
/// All methods return `Send` futures so the trait can be used from
/// multi-threaded async runtimes.
pub trait RecordStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Return every record in the requested order. An empty table yields an
  /// empty vec.
  fn list_all(
    &self,
    order: ListOrder,
  ) -> impl Future<Output = Result<Vec<Record>, Self::Error>> + Send + '_;

  /// Fetch a single record by id. Returns `None` if absent.
  ///
  /// This is the "load into the edit form" read: callers pre-populate all
  /// four fields from it before issuing an [`update`](RecordStore::update),
  /// or the overwrite will blank whatever they did not re-supply.
  fn get(
    &self,
    id: RecordId,
  ) -> impl Future<Output = Result<Option<Record>, Self::Error>> + Send + '_;

  /// Persist a new record and return it with its store-assigned id.
  fn insert(
    &self,
    input: NewRecord,
  ) -> impl Future<Output = Result<Record, Self::Error>> + Send + '_;

  /// Overwrite the record at `id` with all four field values of `input` —
  /// a full-row overwrite, not a merge.
  ///
  /// Returns the affected-row count; zero means `id` no longer exists and
  /// nothing changed.
  fn update(
    &self,
    id: RecordId,
    input: NewRecord,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// Change only the fields named in `patch`, keeping the rest.
  ///
  /// Offered as the safer variant for single-field edits;
  /// [`update`](RecordStore::update) remains the primary contract.
  fn patch(
    &self,
    id: RecordId,
    patch: RecordPatch,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// Remove the record at `id`. Returns the affected-row count; deleting an
  /// id that is already gone affects zero rows and is not a failure.
  fn delete(
    &self,
    id: RecordId,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}
