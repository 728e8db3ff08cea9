//! Login and registration over snapshot data. Plaintext credential
//! comparison is a prototype carve-out, not an oversight.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db::Snapshot;
use crate::models::{Artist, Role, User};

/// Error display strings double as the user-visible rejection messages.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid {0} credentials or account not found.")]
    InvalidCredentials(Role),

    #[error("{0} account pending verification by admin.")]
    PendingVerification(Role),

    #[error("Fill required fields.")]
    MissingFields,

    #[error("Email already registered.")]
    DuplicateEmail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Finds a user matching email + password + role. Artist logins require
/// both the account and the linked artist profile to be verified; curator
/// logins require the account to be verified. The session is the caller's
/// to set on success.
pub fn login(snapshot: &Snapshot, role: Role, credentials: &Credentials) -> Result<User, AuthError> {
    let email = credentials.email.trim();
    let user = snapshot
        .users
        .iter()
        .find(|u| u.email == email && u.password == credentials.password && u.role == role)
        .ok_or(AuthError::InvalidCredentials(role))?;

    match role {
        Role::Artist => {
            let profile = snapshot
                .artists
                .iter()
                .find(|a| a.email.as_deref() == Some(email) || Some(&a.id) == user.artist_id.as_ref());
            let profile_verified = profile.is_some_and(|a| a.verified);
            if !user.verified || !profile_verified {
                return Err(AuthError::PendingVerification(role));
            }
        }
        Role::Curator => {
            if !user.verified {
                return Err(AuthError::PendingVerification(role));
            }
        }
        Role::Visitor | Role::Admin => {}
    }

    Ok(user.clone())
}

#[derive(Debug, Clone)]
pub enum RegistrationForm {
    Visitor {
        name: String,
        email: String,
        password: String,
    },
    Artist {
        name: String,
        email: String,
        password: String,
        bio: String,
    },
    Curator {
        name: String,
        email: String,
        password: String,
        bio: String,
        photo: String,
    },
}

impl RegistrationForm {
    fn required_fields(&self) -> (&str, &str, &str) {
        match self {
            Self::Visitor { name, email, password }
            | Self::Artist { name, email, password, .. }
            | Self::Curator { name, email, password, .. } => (name, email, password),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegistrationOutcome {
    pub user: User,
    /// Visitor accounts are active immediately and sign in on the spot;
    /// artist/curator accounts wait for admin approval.
    pub auto_login: bool,
}

/// Creates the account (and, for artists, the linked unverified profile).
/// No mutation happens on rejection.
pub fn register(
    snapshot: &mut Snapshot,
    form: RegistrationForm,
) -> Result<RegistrationOutcome, AuthError> {
    let (name, email, password) = form.required_fields();
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err(AuthError::MissingFields);
    }
    if snapshot.user_by_email(email.trim()).is_some() {
        return Err(AuthError::DuplicateEmail);
    }

    let outcome = match form {
        RegistrationForm::Visitor { name, email, password } => {
            let user = User::visitor(name.trim().to_string(), email.trim().to_string(), password);
            snapshot.users.push(user.clone());
            RegistrationOutcome { user, auto_login: true }
        }
        RegistrationForm::Artist { name, email, password, bio } => {
            let profile = Artist::pending(name.trim().to_string(), bio, email.trim().to_string());
            let user = User::artist(
                name.trim().to_string(),
                email.trim().to_string(),
                password,
                profile.id.clone(),
            );
            snapshot.artists.push(profile);
            snapshot.users.push(user.clone());
            RegistrationOutcome { user, auto_login: false }
        }
        RegistrationForm::Curator { name, email, password, bio, photo } => {
            let user = User::curator(
                name.trim().to_string(),
                email.trim().to_string(),
                password,
                bio,
                photo,
            );
            snapshot.users.push(user.clone());
            RegistrationOutcome { user, auto_login: false }
        }
    };

    Ok(outcome)
}
