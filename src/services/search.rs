//! Pure query function over snapshot data, shared by the router and the
//! search box.

use crate::db::Snapshot;
use crate::models::{Artist, Artwork};

#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    pub artworks: Vec<Artwork>,
    pub artists: Vec<Artist>,
}

/// Case-insensitive substring search. An artwork matches on its own
/// title + description or on its artist's name + bio; an artist matches on
/// name + bio. The empty query matches nothing. Results keep store order,
/// no ranking.
#[must_use]
pub fn search(snapshot: &Snapshot, query: &str) -> SearchResults {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return SearchResults::default();
    }

    let artworks = snapshot
        .artworks
        .iter()
        .filter(|art| {
            let own = format!("{} {}", art.title, art.description).to_lowercase();
            if own.contains(&q) {
                return true;
            }
            // A dangling artist_id contributes no text.
            snapshot.artist_by_id(&art.artist_id).is_some_and(|artist| {
                format!("{} {}", artist.name, artist.bio)
                    .to_lowercase()
                    .contains(&q)
            })
        })
        .cloned()
        .collect();

    let artists = snapshot
        .artists
        .iter()
        .filter(|artist| {
            format!("{} {}", artist.name, artist.bio)
                .to_lowercase()
                .contains(&q)
        })
        .cloned()
        .collect();

    SearchResults { artworks, artists }
}
