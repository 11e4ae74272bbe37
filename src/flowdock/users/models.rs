//! User data models

use serde::{Deserialize, Serialize};

/// User record from the Flowdock API
///
/// The same shape is returned inside an organization's `users` array and by
/// the audit endpoint; only the latter reliably carries `accessed_at`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub email: String,
    pub name: Option<String>,
    pub nick: Option<String>,
    /// Last access time (RFC 3339, e.g. `2020-01-01T00:00:00.000Z`); `None` if never recorded
    pub accessed_at: Option<String>,
}

impl User {
    /// Check if this user's email equals `email`, ignoring case
    ///
    /// A blank email never matches, on either side.
    pub fn email_matches(&self, email: &str) -> bool {
        let email = email.trim();
        if email.is_empty() || self.email.trim().is_empty() {
            return false;
        }
        self.email.to_lowercase() == email.to_lowercase()
    }

    /// Display name, falling back to nick and then email
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.nick.as_deref().filter(|n| !n.is_empty()))
            .unwrap_or(&self.email)
    }

    /// Last access time as shown to the user
    pub fn last_access(&self) -> &str {
        self.accessed_at.as_deref().unwrap_or("never")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_email_never_matches() {
        let no_email: User = serde_json::from_value(serde_json::json!({ "id": 5 })).unwrap();
        assert_eq!(no_email.email, "");
        assert!(!no_email.email_matches(""));
        assert!(!no_email.email_matches("   "));
        assert!(!no_email.email_matches("a@acme.com"));
    }

    #[test]
    fn test_deserialize_user() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 42,
            "email": "jane@acme.com",
            "name": "Jane Doe",
            "nick": "jane",
            "accessed_at": "2024-03-01T12:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(user.id, 42);
        assert_eq!(user.email, "jane@acme.com");
        assert_eq!(user.display_name(), "Jane Doe");
        assert_eq!(user.last_access(), "2024-03-01T12:00:00.000Z");
    }

    #[test]
    fn test_deserialize_minimal_user() {
        let user: User = serde_json::from_value(serde_json::json!({ "id": 7 })).unwrap();

        assert_eq!(user.id, 7);
        assert_eq!(user.email, "");
        assert!(user.accessed_at.is_none());
        assert_eq!(user.last_access(), "never");
    }

    #[test]
    fn test_null_accessed_at_is_none() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 1,
            "email": "a@b.com",
            "accessed_at": null
        }))
        .unwrap();
        assert!(user.accessed_at.is_none());
    }

    #[test]
    fn test_email_matches_ignores_case() {
        let user: User =
            serde_json::from_value(serde_json::json!({ "id": 1, "email": "a@b.com" })).unwrap();
        assert!(user.email_matches("A@B.com"));
        assert!(user.email_matches("a@b.com"));
        assert!(!user.email_matches("a@b.co"));
    }

    #[test]
    fn test_display_name_fallbacks() {
        let mut user: User = serde_json::from_value(serde_json::json!({
            "id": 1,
            "email": "a@b.com",
            "nick": "ab"
        }))
        .unwrap();
        assert_eq!(user.display_name(), "ab");

        user.nick = None;
        assert_eq!(user.display_name(), "a@b.com");
    }
}
