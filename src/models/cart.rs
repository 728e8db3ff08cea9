use serde::{Deserialize, Serialize};

use super::Artwork;

/// Title and price are snapshotted at add time, so the cart stays
/// renderable even if the artwork is deleted afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartEntry {
    pub art_id: String,
    pub title: String,
    pub price: f64,
}

impl From<&Artwork> for CartEntry {
    fn from(art: &Artwork) -> Self {
        Self {
            art_id: art.id.clone(),
            title: art.title.clone(),
            price: art.price,
        }
    }
}
