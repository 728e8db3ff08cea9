use serde::{Deserialize, Serialize};

/// Denormalized curator snapshot taken at event creation. Deliberately not
/// a user id: the original dataset carries guest curators with no account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCurator {
    pub name: String,
    pub photo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub venue: String,
    /// ISO date string (`YYYY-MM-DD`); calendar highlighting matches on the
    /// exact string.
    pub date: String,
    /// Free text, e.g. "6:00 PM".
    pub time: String,
    pub curator: EventCurator,
    /// Artwork ids on display, in curation order. May dangle after an
    /// artwork is deleted elsewhere.
    pub items: Vec<String>,
}

impl Event {
    #[must_use]
    pub fn new(
        title: String,
        venue: String,
        date: String,
        time: String,
        curator: EventCurator,
        items: Vec<String>,
    ) -> Self {
        Self {
            id: super::fresh_id("e"),
            title,
            venue,
            date,
            time,
            curator,
            items,
        }
    }
}
