use serde::{Deserialize, Serialize};

/// An artist profile. The `verified` flag gates both artist login and
/// upload rights; it is flipped by admin approval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub bio: String,
    pub verified: bool,
    pub photo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Artist {
    /// Profile created at artist registration; unverified until an admin
    /// approves it.
    #[must_use]
    pub fn pending(name: String, bio: String, email: String) -> Self {
        Self {
            id: super::fresh_id("a"),
            name,
            bio,
            verified: false,
            photo: String::new(),
            email: Some(email),
        }
    }

    /// Synthetic profile owning the artworks a curator adds directly to an
    /// event. Deterministic id so each curator gets exactly one.
    #[must_use]
    pub fn synthetic_for_curator(curator_user_id: &str, name: String, photo: String) -> Self {
        Self {
            id: format!("a_curator_{curator_user_id}"),
            name,
            bio: "Works added by curator".to_string(),
            verified: true,
            photo,
            email: None,
        }
    }
}
