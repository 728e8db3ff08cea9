//! Search semantics against the seed dataset.

use galleria::db::{Store, seed};
use galleria::services::search;

#[test]
fn empty_query_matches_nothing() {
    let snapshot = seed::snapshot();
    for query in ["", "   ", "\t"] {
        let results = search(&snapshot, query);
        assert!(results.artworks.is_empty());
        assert!(results.artists.is_empty());
    }
}

#[test]
fn sun_matches_the_seed_fixture() {
    let snapshot = seed::snapshot();
    let results = search(&snapshot, "Sun");

    let artwork_ids: Vec<&str> = results.artworks.iter().map(|a| a.id.as_str()).collect();
    let artist_ids: Vec<&str> = results.artists.iter().map(|a| a.id.as_str()).collect();

    assert!(artwork_ids.contains(&"art1"));
    assert!(!artwork_ids.contains(&"art2"));
    assert!(artist_ids.contains(&"a1"));
    assert!(!artist_ids.contains(&"a2"));
}

#[test]
fn matching_is_case_insensitive_substring() {
    let snapshot = seed::snapshot();
    let lower = search(&snapshot, "sun wukong");
    assert_eq!(lower.artworks.len(), 1);
    assert_eq!(lower.artworks[0].id, "art1");

    // Interior substring, not token match.
    let interior = search(&snapshot, "olden");
    assert!(interior.artworks.iter().any(|a| a.id == "art3"));
}

#[test]
fn artworks_match_through_their_artists_text() {
    let snapshot = seed::snapshot();
    // "mythology" appears only in artist a1's bio; both of a1's artworks
    // should surface, in store order.
    let results = search(&snapshot, "mythology");
    let ids: Vec<&str> = results.artworks.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["art1", "art3"]);
    assert_eq!(results.artists.len(), 1);
    assert_eq!(results.artists[0].id, "a1");
}

#[test]
fn dangling_artist_reference_contributes_no_text() {
    let mut snapshot = seed::snapshot();
    snapshot.artists.retain(|a| a.id != "a1");
    let results = search(&snapshot, "mythology");
    assert!(results.artworks.is_empty());
    assert!(results.artists.is_empty());

    // The artwork's own text still matches.
    let own = search(&snapshot, "Wukong");
    assert_eq!(own.artworks.len(), 1);
}

#[test]
fn results_keep_store_order() {
    let store = Store::in_memory();
    let snapshot = store.load().expect("load");
    // "a" is a substring of every title or bio here; order must match the
    // snapshot's collection order with no ranking applied.
    let results = search(&snapshot, "a");
    let ids: Vec<&str> = results.artworks.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["art1", "art2", "art3"]);
}
