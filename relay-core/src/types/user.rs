//! User identity type for core messages.

use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// First and last name joined by a space; empty when neither is set.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }

    /// `@username`, or None when the user has no public username.
    pub fn mention(&self) -> Option<String> {
        self.username.as_ref().map(|u| format!("@{}", u))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: Option<&str>, last: Option<&str>, username: Option<&str>) -> User {
        User {
            id: 1,
            username: username.map(str::to_string),
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
        }
    }

    #[test]
    fn test_full_name_joins_and_trims() {
        assert_eq!(user(Some("Ali"), Some("Valiyev"), None).full_name(), "Ali Valiyev");
        assert_eq!(user(Some("Ali"), None, None).full_name(), "Ali");
        assert_eq!(user(None, Some("Valiyev"), None).full_name(), "Valiyev");
        assert_eq!(user(None, None, None).full_name(), "");
    }

    #[test]
    fn test_mention() {
        assert_eq!(user(None, None, Some("ali")).mention(), Some("@ali".to_string()));
        assert_eq!(user(None, None, None).mention(), None);
    }
}
