//! Organization data models

use serde::{Deserialize, Serialize};

use crate::flowdock::users::User;

/// Organization data from the Flowdock API
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    pub id: Option<u64>,
    /// URL-safe slug, unique per organization
    pub parameterized_name: String,
    pub name: String,
    pub user_limit: Option<u32>,
    pub active: Option<bool>,
    pub url: Option<String>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl Organization {
    /// Number of members listed in this organization
    pub fn member_count(&self) -> usize {
        self.users.len()
    }

    /// Check if the organization matches by slug or display name
    pub fn matches(&self, input: &str) -> bool {
        self.parameterized_name == input || self.name == input
    }
}
