//! Integration tests for `SqliteStore` and the bootstrap step.

use mayday_core::{
  photo::Photo,
  record::{ListOrder, NewRecord, RecordPatch},
  store::RecordStore,
};

use crate::{SqliteStore, bootstrap};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn kitchen_fire() -> NewRecord {
  NewRecord::new("2024-01-01", "Fire")
    .with_description("Kitchen fire")
    .with_photo(Photo::from_bytes(b"\x89PNG fake image bytes"))
}

// ─── Bootstrap ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn fresh_install_seeds_database() {
  let dir = tempfile::tempdir().unwrap();

  let path = bootstrap::ensure_database_ready(dir.path()).await.unwrap();
  assert_eq!(path, dir.path().join("SQLite").join(bootstrap::DB_NAME));
  assert!(path.exists());

  // The seed ships pre-populated rows; they must be visible immediately.
  let s = SqliteStore::open(&path).await.unwrap();
  let records = s.list_all(ListOrder::Insertion).await.unwrap();
  assert_eq!(records.len(), 2);
  assert_eq!(records[0].title, "Power outage");
  assert_eq!(records[1].title, "Gas leak drill");
  assert!(records[1].photo.is_some());
}

#[tokio::test]
async fn bootstrap_is_idempotent() {
  let dir = tempfile::tempdir().unwrap();

  let path = bootstrap::ensure_database_ready(dir.path()).await.unwrap();
  let first = std::fs::read(&path).unwrap();

  // The seed copy happens exactly once; later calls must not touch the file.
  bootstrap::ensure_database_ready(dir.path()).await.unwrap();
  bootstrap::ensure_database_ready(dir.path()).await.unwrap();
  assert_eq!(std::fs::read(&path).unwrap(), first);
}

#[tokio::test]
async fn bootstrap_preserves_user_data_across_restarts() {
  let dir = tempfile::tempdir().unwrap();
  let path = bootstrap::ensure_database_ready(dir.path()).await.unwrap();

  {
    let s = SqliteStore::open(&path).await.unwrap();
    s.insert(kitchen_fire()).await.unwrap();
  }

  // Simulated restart: bootstrap again, reopen, everything still there.
  let path = bootstrap::ensure_database_ready(dir.path()).await.unwrap();
  let s = SqliteStore::open(&path).await.unwrap();
  let records = s.list_all(ListOrder::Insertion).await.unwrap();
  assert_eq!(records.len(), 3);
  assert_eq!(records[2].title, "Fire");
}

// ─── Insert ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_then_list_contains_exactly_the_new_record() {
  let s = store().await;

  let inserted = s.insert(kitchen_fire()).await.unwrap();

  let records = s.list_all(ListOrder::Insertion).await.unwrap();
  assert_eq!(records.len(), 1);
  assert_eq!(records[0], inserted);
  assert_eq!(records[0].date, "2024-01-01");
  assert_eq!(records[0].title, "Fire");
  assert_eq!(records[0].description.as_deref(), Some("Kitchen fire"));
  assert_eq!(
    records[0].photo,
    Some(Photo::from_bytes(b"\x89PNG fake image bytes"))
  );
}

#[tokio::test]
async fn insert_assigns_unique_ids() {
  let s = store().await;

  let a = s.insert(NewRecord::new("2024-01-01", "First")).await.unwrap();
  let b = s.insert(NewRecord::new("2024-01-02", "Second")).await.unwrap();

  assert_ne!(a.id, b.id);
  assert!(b.id > a.id);
}

#[tokio::test]
async fn deleted_ids_are_never_reused() {
  let s = store().await;

  let a = s.insert(NewRecord::new("2024-01-01", "First")).await.unwrap();
  assert_eq!(s.delete(a.id).await.unwrap(), 1);

  let b = s.insert(NewRecord::new("2024-01-02", "Second")).await.unwrap();
  assert!(b.id > a.id);
}

#[tokio::test]
async fn store_accepts_empty_fields_without_validation() {
  // Non-empty date/title is the caller's job; the store itself must not
  // reject empty strings.
  let s = store().await;
  let inserted = s.insert(NewRecord::new("", "")).await.unwrap();
  let fetched = s.get(inserted.id).await.unwrap().unwrap();
  assert_eq!(fetched.date, "");
  assert_eq!(fetched.title, "");
}

// ─── List order ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_empty_table_yields_empty_vec() {
  let s = store().await;
  assert!(s.list_all(ListOrder::Insertion).await.unwrap().is_empty());
}

#[tokio::test]
async fn list_orders_by_id() {
  let s = store().await;
  let a = s.insert(NewRecord::new("2024-01-01", "A")).await.unwrap();
  let b = s.insert(NewRecord::new("2024-01-02", "B")).await.unwrap();
  let c = s.insert(NewRecord::new("2024-01-03", "C")).await.unwrap();

  let insertion = s.list_all(ListOrder::Insertion).await.unwrap();
  let ids: Vec<_> = insertion.iter().map(|r| r.id).collect();
  assert_eq!(ids, vec![a.id, b.id, c.id]);

  let newest = s.list_all(ListOrder::NewestFirst).await.unwrap();
  let ids: Vec<_> = newest.iter().map(|r| r.id).collect();
  assert_eq!(ids, vec![c.id, b.id, a.id]);
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_then_get_matches_arguments() {
  let s = store().await;
  let inserted = s.insert(kitchen_fire()).await.unwrap();

  let replacement = NewRecord::new("2024-01-02", "Fire")
    .with_description("Kitchen fire contained")
    .with_photo(Photo::from_bytes(b"\x89PNG newer image"));
  let affected = s.update(inserted.id, replacement.clone()).await.unwrap();
  assert_eq!(affected, 1);

  let fetched = s.get(inserted.id).await.unwrap().unwrap();
  assert_eq!(fetched.date, "2024-01-02");
  assert_eq!(fetched.title, "Fire");
  assert_eq!(
    fetched.description.as_deref(),
    Some("Kitchen fire contained")
  );
  assert_eq!(fetched.photo, replacement.photo);
}

#[tokio::test]
async fn update_is_a_full_row_overwrite() {
  let s = store().await;
  let inserted = s.insert(kitchen_fire()).await.unwrap();

  // A caller that did not pre-populate description and photo blanks them.
  s.update(inserted.id, NewRecord::new("2024-01-01", "Fire"))
    .await
    .unwrap();

  let fetched = s.get(inserted.id).await.unwrap().unwrap();
  assert!(fetched.description.is_none());
  assert!(fetched.photo.is_none());
}

#[tokio::test]
async fn update_missing_id_affects_zero_rows() {
  let s = store().await;
  let affected = s.update(9999, kitchen_fire()).await.unwrap();
  assert_eq!(affected, 0);
}

// ─── Patch ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn patch_changes_only_named_fields() {
  let s = store().await;
  let inserted = s.insert(kitchen_fire()).await.unwrap();

  let affected = s
    .patch(inserted.id, RecordPatch {
      description: Some("Kitchen fire contained".into()),
      ..RecordPatch::default()
    })
    .await
    .unwrap();
  assert_eq!(affected, 1);

  let fetched = s.get(inserted.id).await.unwrap().unwrap();
  assert_eq!(fetched.date, inserted.date);
  assert_eq!(fetched.title, inserted.title);
  assert_eq!(
    fetched.description.as_deref(),
    Some("Kitchen fire contained")
  );
  assert_eq!(fetched.photo, inserted.photo);
}

#[tokio::test]
async fn patch_missing_id_affects_zero_rows() {
  let s = store().await;
  let affected = s
    .patch(9999, RecordPatch {
      title: Some("Nope".into()),
      ..RecordPatch::default()
    })
    .await
    .unwrap();
  assert_eq!(affected, 0);
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_record_from_list() {
  let s = store().await;
  let keep = s.insert(NewRecord::new("2024-01-01", "Keep")).await.unwrap();
  let gone = s.insert(NewRecord::new("2024-01-02", "Gone")).await.unwrap();

  assert_eq!(s.delete(gone.id).await.unwrap(), 1);

  let records = s.list_all(ListOrder::Insertion).await.unwrap();
  assert!(records.iter().all(|r| r.id != gone.id));
  assert_eq!(records.len(), 1);
  assert_eq!(records[0].id, keep.id);
}

#[tokio::test]
async fn second_delete_is_a_noop_not_a_failure() {
  let s = store().await;
  let r = s.insert(NewRecord::new("2024-01-01", "Once")).await.unwrap();

  assert_eq!(s.delete(r.id).await.unwrap(), 1);
  assert_eq!(s.delete(r.id).await.unwrap(), 0);
}

#[tokio::test]
async fn update_after_delete_affects_zero_rows() {
  let s = store().await;
  let r = s.insert(kitchen_fire()).await.unwrap();

  s.delete(r.id).await.unwrap();
  let affected = s.update(r.id, kitchen_fire()).await.unwrap();
  assert_eq!(affected, 0);
  assert!(s.get(r.id).await.unwrap().is_none());
}

// ─── Get ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get(42).await.unwrap().is_none());
}
