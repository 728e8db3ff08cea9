//! Page view models handed to the [`super::PageRenderer`]. Owned data,
//! no markup.

use crate::db::Snapshot;
use crate::models::{Artist, Artwork, CartEntry, Event, Role, User};

#[derive(Debug, Clone)]
pub struct HeaderUser {
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Clone)]
pub struct HeaderView {
    pub cart_count: usize,
    pub user: Option<HeaderUser>,
}

impl HeaderView {
    #[must_use]
    pub fn build(snapshot: &Snapshot, user: Option<&User>) -> Self {
        Self {
            cart_count: snapshot.cart.len(),
            user: user.map(|u| HeaderUser {
                name: u.name.clone(),
                role: u.role,
            }),
        }
    }
}

/// Artwork row with the owning artist's name resolved (or `None` when the
/// reference dangles).
#[derive(Debug, Clone)]
pub struct ArtworkCard {
    pub id: String,
    pub title: String,
    pub artist_id: String,
    pub artist_name: Option<String>,
    pub image: String,
    pub price: f64,
}

impl ArtworkCard {
    #[must_use]
    pub fn build(snapshot: &Snapshot, artwork: &Artwork) -> Self {
        Self {
            id: artwork.id.clone(),
            title: artwork.title.clone(),
            artist_id: artwork.artist_id.clone(),
            artist_name: snapshot
                .artist_by_id(&artwork.artist_id)
                .map(|a| a.name.clone()),
            image: artwork.image.clone(),
            price: artwork.price,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArtistCard {
    pub id: String,
    pub name: String,
    pub bio: String,
    pub photo: String,
}

impl From<&Artist> for ArtistCard {
    fn from(artist: &Artist) -> Self {
        Self {
            id: artist.id.clone(),
            name: artist.name.clone(),
            bio: artist.bio.clone(),
            photo: artist.photo.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HomeView {
    pub recent: Vec<ArtworkCard>,
    /// Upload affordance: logged-in, verified artist sessions only.
    pub can_upload: bool,
}

#[derive(Debug, Clone)]
pub struct CarouselSlide {
    pub art_id: String,
    pub title: String,
    pub image: String,
    pub artist_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CarouselView {
    pub slides: Vec<CarouselSlide>,
    pub index: usize,
}

#[derive(Debug, Clone)]
pub struct CalendarDay {
    pub day: u32,
    pub highlighted: bool,
    /// Events falling on this exact date, store order.
    pub event_ids: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct UpcomingEvent {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CalendarView {
    /// e.g. "November 2025".
    pub month_title: String,
    /// Blank cells before day 1, Sunday-first grid.
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay>,
    pub upcoming: Vec<UpcomingEvent>,
}

#[derive(Debug, Clone)]
pub struct SearchView {
    pub query: String,
    pub artworks: Vec<ArtworkCard>,
    pub artists: Vec<ArtistCard>,
}

#[derive(Debug, Clone)]
pub struct ArtistPageView {
    pub artist: Artist,
    pub artworks: Vec<ArtworkCard>,
    /// Delete/upload actions are only shown to the artist's own session.
    pub is_owner: bool,
}

#[derive(Debug, Clone)]
pub struct ArtworkPageView {
    pub artwork: Artwork,
    pub artist: Option<ArtistCard>,
}

#[derive(Debug, Clone)]
pub struct EventPageView {
    pub event: Event,
    pub hero_image: Option<String>,
    pub items: Vec<ArtworkCard>,
}

#[derive(Debug, Clone)]
pub struct CartView {
    pub entries: Vec<CartEntry>,
    pub total: f64,
}

impl CartView {
    #[must_use]
    pub fn build(snapshot: &Snapshot) -> Self {
        Self {
            total: snapshot.cart.iter().map(|c| c.price).sum(),
            entries: snapshot.cart.clone(),
        }
    }
}

/// Unverified curator account awaiting one-click approval.
#[derive(Debug, Clone)]
pub struct PendingCurator {
    pub user_id: String,
    pub name: String,
    pub bio: String,
    pub photo: String,
}

#[derive(Debug, Clone)]
pub struct AdminView {
    pub pending_artists: Vec<ArtistCard>,
    pub pending_curators: Vec<PendingCurator>,
}

#[derive(Debug, Clone)]
pub struct EventRow {
    pub event: Event,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CuratorView {
    pub events: Vec<EventRow>,
}
