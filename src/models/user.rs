use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Visitor,
    Artist,
    Curator,
    Admin,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Visitor => "visitor",
            Self::Artist => "artist",
            Self::Curator => "curator",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An account. Role-specific fields stay `None` for the other roles:
/// `artist_id` links an artist account to its [`super::Artist`] profile,
/// `bio`/`photo` are carried directly on curator accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl User {
    /// Visitor accounts are active immediately.
    #[must_use]
    pub fn visitor(name: String, email: String, password: String) -> Self {
        Self {
            id: super::fresh_id("u"),
            name,
            email,
            password,
            role: Role::Visitor,
            verified: true,
            artist_id: None,
            bio: None,
            photo: None,
        }
    }

    /// Artist accounts start unverified and are linked 1:1 to an artist
    /// profile awaiting admin approval.
    #[must_use]
    pub fn artist(name: String, email: String, password: String, artist_id: String) -> Self {
        Self {
            id: super::fresh_id("u"),
            name,
            email,
            password,
            role: Role::Artist,
            verified: false,
            artist_id: Some(artist_id),
            bio: None,
            photo: None,
        }
    }

    /// Curator accounts start unverified and carry their bio/photo directly.
    #[must_use]
    pub fn curator(
        name: String,
        email: String,
        password: String,
        bio: String,
        photo: String,
    ) -> Self {
        Self {
            id: super::fresh_id("u"),
            name,
            email,
            password,
            role: Role::Curator,
            verified: false,
            artist_id: None,
            bio: Some(bio),
            photo: Some(photo),
        }
    }
}
