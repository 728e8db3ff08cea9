//! The fixed baseline dataset used to initialize or backfill a missing
//! store. Ids and values are stable; seed merging matches on them.

use crate::models::{Artist, Artwork, Event, EventCurator, Role, User};

use super::Snapshot;

#[must_use]
pub fn snapshot() -> Snapshot {
    Snapshot {
        users: users(),
        artists: artists(),
        artworks: artworks(),
        events: events(),
        cart: Vec::new(),
    }
}

fn user(id: &str, name: &str, email: &str, password: &str, role: Role) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        role,
        verified: true,
        artist_id: None,
        bio: None,
        photo: None,
    }
}

fn users() -> Vec<User> {
    vec![
        user("u_admin", "Admin", "admin@gallery.test", "adminpass", Role::Admin),
        user("u_v1", "Asha Visitor", "asha@visitor.test", "pass123", Role::Visitor),
        user("u_curator", "K. Curator", "curator@gallery.test", "curpass", Role::Curator),
    ]
}

fn artists() -> Vec<Artist> {
    vec![
        Artist {
            id: "a1".to_string(),
            name: "John Sun".to_string(),
            bio: "Contemporary painter exploring light and mythology.".to_string(),
            verified: true,
            photo: "https://images.unsplash.com/photo-1607746882042-944635dfe10e?auto=format&fit=crop&w=300&q=60".to_string(),
            email: None,
        },
        Artist {
            id: "a2".to_string(),
            name: "Meera Rao".to_string(),
            bio: "Textile & folk art revivalist.".to_string(),
            verified: true,
            photo: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?auto=format&fit=crop&w=300&q=60".to_string(),
            email: None,
        },
    ]
}

fn artwork(
    id: &str,
    title: &str,
    artist_id: &str,
    description: &str,
    image: &str,
    price: f64,
    featured: bool,
) -> Artwork {
    Artwork {
        id: id.to_string(),
        title: title.to_string(),
        artist_id: artist_id.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        price,
        featured,
        videos: Vec::new(),
    }
}

fn artworks() -> Vec<Artwork> {
    vec![
        artwork(
            "art1",
            "Sun Wukong's Might",
            "a1",
            "A dramatic oil painting inspired by myth and sunlight. Cultural notes: references to East Asian myth of the Great Monkey King.",
            "https://www.outregallery.com/cdn/shop/files/JedHenry-TheDestinedOn1.jpg?v=1730171536&width=949",
            1200.0,
            true,
        ),
        artwork(
            "art2",
            "Threads of Home",
            "a2",
            "A woven tapestry reimagining rural patterns. Cultural notes: traditional weaving motifs.",
            "https://images.unsplash.com/photo-1501004318641-b39e6451bec6?auto=format&fit=crop&w=900&q=80",
            800.0,
            true,
        ),
        artwork(
            "art3",
            "Golden Hour Study",
            "a1",
            "Study in light and shadow, capturing late afternoon.",
            "https://images.unsplash.com/photo-1481349518771-20055b2a7b24?auto=format&fit=crop&w=900&q=80",
            450.0,
            false,
        ),
    ]
}

fn events() -> Vec<Event> {
    vec![
        Event {
            id: "e1".to_string(),
            title: "Solar Narratives - An Exhibition".to_string(),
            venue: "City Art Hall".to_string(),
            date: "2025-11-13".to_string(),
            time: "4:00 PM".to_string(),
            curator: EventCurator {
                name: "R. Sen".to_string(),
                photo: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?auto=format&fit=crop&w=100&q=60".to_string(),
            },
            items: vec!["art1".to_string(), "art3".to_string()],
        },
        Event {
            id: "e2".to_string(),
            title: "Weave & Pattern".to_string(),
            venue: "Studio 12".to_string(),
            date: "2025-11-29".to_string(),
            time: "6:00 PM".to_string(),
            curator: EventCurator {
                name: "Leena Gupta".to_string(),
                photo: "https://images.unsplash.com/photo-1545996124-1b4b9ba6fdb4?auto=format&fit=crop&w=100&q=60".to_string(),
            },
            items: vec!["art2".to_string()],
        },
    ]
}
