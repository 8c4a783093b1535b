//! Shared test fixtures

use super::{Settings, Viewer};

/// Commenters used across tests
pub fn users() -> Vec<Viewer> {
    vec![
        Viewer {
            id: "user-0".to_string(),
            username: "Markus".to_string(),
            bio: Some("Hello".to_string()),
        },
        Viewer {
            id: "user-1".to_string(),
            username: "Lukas".to_string(),
            bio: None,
        },
        Viewer {
            id: "user-2".to_string(),
            username: "Isabelle".to_string(),
            bio: Some("Hi".to_string()),
        },
    ]
}

/// Look up a fixture user by id
pub fn viewer(id: &str) -> Viewer {
    users()
        .into_iter()
        .find(|user| user.id == id)
        .unwrap_or_else(|| panic!("no fixture user {id}"))
}

pub fn settings(member_bios: bool) -> Settings {
    Settings { member_bios }
}
