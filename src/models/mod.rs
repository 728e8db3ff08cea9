pub mod artist;
pub mod artwork;
pub mod cart;
pub mod event;
pub mod user;

pub use artist::Artist;
pub use artwork::Artwork;
pub use cart::CartEntry;
pub use event::{Event, EventCurator};
pub use user::{Role, User};

use uuid::Uuid;

/// Generates a collision-free entity id with a type prefix (`u_`, `a_`,
/// `art_`, `e_`).
pub fn fresh_id(prefix: &str) -> String {
    format!("{prefix}_{}", Uuid::new_v4().simple())
}
