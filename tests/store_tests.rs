//! Persistence-layer tests: seeding, merging, round-trips, corruption
//! recovery, and the session's separate lifecycle.

use std::sync::Arc;

use galleria::db::{MemoryStorage, Snapshot, Store};
use galleria::models::{Role, User};
use galleria::session::Session;

fn as_json(snapshot: &Snapshot) -> serde_json::Value {
    serde_json::to_value(snapshot).expect("snapshot serializes")
}

#[test]
fn load_initializes_from_seed_when_empty() {
    let store = Store::in_memory();
    let snapshot = store.load().expect("load");
    assert_eq!(snapshot.users.len(), 3);
    assert_eq!(snapshot.artists.len(), 2);
    assert_eq!(snapshot.artworks.len(), 3);
    assert_eq!(snapshot.events.len(), 2);
    assert!(snapshot.cart.is_empty());
    assert!(snapshot.artwork_by_id("art1").is_some());
}

#[test]
fn save_then_load_round_trips() {
    let backend = MemoryStorage::default();
    let store = Store::new(Arc::new(backend.clone()));
    let mut snapshot = store.load().expect("load");
    snapshot.users.push(User::visitor(
        "Nia".to_string(),
        "nia@visitor.test".to_string(),
        "pw".to_string(),
    ));
    snapshot.cart.clear();
    store.save(&snapshot).expect("save");

    // Same storage, fresh store: the "next process".
    let reopened = Store::new(Arc::new(backend));
    let loaded = reopened.load().expect("load");
    assert_eq!(as_json(&snapshot), as_json(&loaded));
}

#[test]
fn corrupt_document_reseeds_silently() {
    let backend = MemoryStorage::default();
    {
        use galleria::db::StorageBackend;
        backend.write("{not json at all").expect("write");
    }
    let store = Store::new(Arc::new(backend.clone()));
    let snapshot = store.load().expect("load");
    assert_eq!(snapshot.artworks.len(), 3);

    // The reseeded snapshot was persisted over the corrupt document.
    let again = Store::new(Arc::new(backend)).load().expect("load");
    assert_eq!(as_json(&snapshot), as_json(&again));
}

#[test]
fn seed_merge_is_idempotent() {
    let store = Store::in_memory();
    let once = store.ensure_seed_merged().expect("merge");
    let twice = store.ensure_seed_merged().expect("merge");
    assert_eq!(as_json(&once), as_json(&twice));
}

#[test]
fn seed_merge_backfills_without_overwriting() {
    let store = Store::in_memory();
    let mut snapshot = store.load().expect("load");
    snapshot.artworks.retain(|a| a.id != "art2");
    if let Some(artist) = snapshot.artists.iter_mut().find(|a| a.id == "a1") {
        artist.name = "Renamed Sun".to_string();
    }
    store.save(&snapshot).expect("save");

    let merged = store.ensure_seed_merged().expect("merge");
    // The missing artwork came back, appended at the end.
    assert!(merged.artwork_by_id("art2").is_some());
    assert_eq!(merged.artworks.last().map(|a| a.id.as_str()), Some("art2"));
    // The locally edited artist was not clobbered by the seed.
    assert_eq!(
        merged.artist_by_id("a1").map(|a| a.name.as_str()),
        Some("Renamed Sun")
    );
    assert_eq!(merged.artists.len(), 2);
}

#[test]
fn file_storage_round_trips() {
    let data_dir = std::env::temp_dir().join(format!("galleria-test-{}", uuid::Uuid::new_v4()));
    let store = Store::open(&data_dir);
    let mut snapshot = store.load().expect("load");
    snapshot.events.clear();
    store.save(&snapshot).expect("save");

    let loaded = Store::open(&data_dir).load().expect("load");
    assert_eq!(as_json(&snapshot), as_json(&loaded));
    std::fs::remove_dir_all(&data_dir).ok();
}

#[test]
fn lookups_tolerate_dangling_ids() {
    let store = Store::in_memory();
    let snapshot = store.load().expect("load");
    assert!(snapshot.artist_by_id("a_missing").is_none());
    assert!(snapshot.artwork_by_id("art_missing").is_none());
    assert!(snapshot.event_by_id("e_missing").is_none());
    assert!(snapshot.user_by_email("ghost@gallery.test").is_none());
}

#[test]
fn session_is_independent_of_store() {
    let session = Session::in_memory();
    assert!(session.current_user().expect("read").is_none());

    let user = User::visitor("Asha".to_string(), "asha@visitor.test".to_string(), "pw".to_string());
    session.set_current_user(Some(&user)).expect("set");
    let active = session.current_user().expect("read").expect("active user");
    assert_eq!(active.email, "asha@visitor.test");
    assert_eq!(active.role, Role::Visitor);

    session.set_current_user(None).expect("clear");
    assert!(session.current_user().expect("read").is_none());
}

#[test]
fn malformed_session_entry_reads_as_signed_out() {
    use galleria::session::{MemorySessionStore, SessionStore};
    let backend = MemorySessionStore::default();
    backend.write(Some("{broken")).expect("write");
    let session = Session::new(std::sync::Arc::new(backend));
    assert!(session.current_user().expect("read").is_none());
}
