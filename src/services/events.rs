//! Curator event management.

use thiserror::Error;
use tracing::info;

use crate::db::Snapshot;
use crate::models::{Artist, Artwork, Event, EventCurator, User};

#[derive(Debug, Error)]
pub enum EventError {
    #[error("Event not found.")]
    NotFound,
}

#[derive(Debug, Clone)]
pub struct EventDraft {
    pub title: String,
    pub venue: String,
    pub date: String,
    pub time: String,
    pub curator_photo: String,
}

/// One artwork to synthesize under the curator's artist profile. Drafts
/// with an empty title are skipped by [`create_event`].
#[derive(Debug, Clone)]
pub struct EventArtworkDraft {
    pub title: String,
    pub image: String,
    pub description: String,
    pub price: f64,
}

/// Creates an event for `curator`. New artworks land under a synthetic
/// per-curator artist profile, created on first use and reused after.
pub fn create_event(
    snapshot: &mut Snapshot,
    curator: &User,
    draft: EventDraft,
    artworks: Vec<EventArtworkDraft>,
) -> Event {
    let artist_id = ensure_curator_artist(snapshot, curator, &draft.curator_photo);

    let mut items = Vec::new();
    for art in artworks {
        if art.title.trim().is_empty() {
            continue;
        }
        let artwork = Artwork::new(
            art.title.trim().to_string(),
            artist_id.clone(),
            art.description.trim().to_string(),
            art.image.trim().to_string(),
            art.price,
            false,
        );
        items.push(artwork.id.clone());
        snapshot.artworks.push(artwork);
    }

    let event = Event::new(
        draft.title,
        draft.venue,
        draft.date,
        draft.time,
        EventCurator {
            name: curator.name.clone(),
            photo: draft.curator_photo,
        },
        items,
    );
    snapshot.events.push(event.clone());
    info!(event = %event.id, curator = %curator.id, "Event created");
    event
}

fn ensure_curator_artist(snapshot: &mut Snapshot, curator: &User, photo: &str) -> String {
    let id = format!("a_curator_{}", curator.id);
    if snapshot.artist_by_id(&id).is_none() {
        snapshot.artists.push(Artist::synthetic_for_curator(
            &curator.id,
            curator.name.clone(),
            photo.to_string(),
        ));
    }
    id
}

pub fn delete_event(snapshot: &mut Snapshot, id: &str) -> Result<Event, EventError> {
    let pos = snapshot
        .events
        .iter()
        .position(|e| e.id == id)
        .ok_or(EventError::NotFound)?;
    let removed = snapshot.events.remove(pos);
    info!(event = %id, "Event removed");
    Ok(removed)
}
