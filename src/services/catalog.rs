//! Artwork upload/removal and admin approvals.

use thiserror::Error;
use tracing::info;

use crate::db::Snapshot;
use crate::models::{Artwork, Role};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Artist profile not found.")]
    ArtistNotFound,

    #[error("Artwork not found.")]
    ArtworkNotFound,

    #[error("Curator not found.")]
    CuratorNotFound,
}

/// Fields collected from the uploader, already coerced (see
/// [`crate::models::artwork::price_or_zero`]).
#[derive(Debug, Clone)]
pub struct ArtworkDraft {
    pub title: String,
    pub image: String,
    pub description: String,
    pub price: f64,
    pub featured: bool,
}

/// Appends a new artwork owned by `artist_id`.
pub fn upload_artwork(
    snapshot: &mut Snapshot,
    artist_id: &str,
    draft: ArtworkDraft,
) -> Result<Artwork, CatalogError> {
    if snapshot.artist_by_id(artist_id).is_none() {
        return Err(CatalogError::ArtistNotFound);
    }
    let artwork = Artwork::new(
        draft.title.trim().to_string(),
        artist_id.to_string(),
        draft.description.trim().to_string(),
        draft.image.trim().to_string(),
        draft.price,
        draft.featured,
    );
    snapshot.artworks.push(artwork.clone());
    info!(artwork = %artwork.id, artist = %artist_id, "Artwork uploaded");
    Ok(artwork)
}

/// Removes an artwork and cascades the removal through every event's item
/// list, so no event is left pointing at it.
pub fn delete_artwork(snapshot: &mut Snapshot, id: &str) -> Result<Artwork, CatalogError> {
    let pos = snapshot
        .artworks
        .iter()
        .position(|a| a.id == id)
        .ok_or(CatalogError::ArtworkNotFound)?;
    let removed = snapshot.artworks.remove(pos);
    for event in &mut snapshot.events {
        event.items.retain(|item| item != id);
    }
    info!(artwork = %id, "Artwork removed");
    Ok(removed)
}

/// Verifies an artist profile and every artist account linked to it.
pub fn approve_artist(snapshot: &mut Snapshot, id: &str) -> Result<(), CatalogError> {
    let artist = snapshot
        .artists
        .iter_mut()
        .find(|a| a.id == id)
        .ok_or(CatalogError::ArtistNotFound)?;
    artist.verified = true;
    for user in &mut snapshot.users {
        if user.role == Role::Artist && user.artist_id.as_deref() == Some(id) {
            user.verified = true;
        }
    }
    info!(artist = %id, "Artist approved");
    Ok(())
}

/// Verifies a curator account.
pub fn approve_curator(snapshot: &mut Snapshot, user_id: &str) -> Result<(), CatalogError> {
    let user = snapshot
        .users
        .iter_mut()
        .find(|u| u.id == user_id && u.role == Role::Curator)
        .ok_or(CatalogError::CuratorNotFound)?;
    user.verified = true;
    info!(curator = %user_id, "Curator approved");
    Ok(())
}
