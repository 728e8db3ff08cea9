//! Cart mutations. Purchase is simulated end to end; no payment exists.

use thiserror::Error;

use crate::db::Snapshot;
use crate::models::{Artwork, CartEntry, Role, User};

#[derive(Debug, Error)]
pub enum CartError {
    #[error("Artist accounts cannot buy items. Please use a visitor account.")]
    ArtistsCannotPurchase,
}

fn ensure_buyer(user: &User) -> Result<(), CartError> {
    if user.role == Role::Artist {
        return Err(CartError::ArtistsCannotPurchase);
    }
    Ok(())
}

/// Appends a snapshot entry for the artwork at its current price.
pub fn add(snapshot: &mut Snapshot, user: &User, artwork: &Artwork) -> Result<(), CartError> {
    ensure_buyer(user)?;
    snapshot.cart.push(CartEntry::from(artwork));
    Ok(())
}

/// Simulated immediate purchase: succeeds and empties the cart.
pub fn buy_now(snapshot: &mut Snapshot, user: &User) -> Result<(), CartError> {
    ensure_buyer(user)?;
    snapshot.cart.clear();
    Ok(())
}

/// Simulated checkout: succeeds and empties the cart wholesale.
pub fn checkout(snapshot: &mut Snapshot, user: &User) -> Result<(), CartError> {
    ensure_buyer(user)?;
    snapshot.cart.clear();
    Ok(())
}
