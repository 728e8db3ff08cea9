pub mod auth;
pub use auth::{AuthError, Credentials, RegistrationForm, RegistrationOutcome};

pub mod cart;
pub use cart::CartError;

pub mod catalog;
pub use catalog::{ArtworkDraft, CatalogError};

pub mod events;
pub use events::{EventArtworkDraft, EventDraft, EventError};

pub mod search;
pub use search::{SearchResults, search};
