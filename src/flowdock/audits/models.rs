//! Audit data models

use serde::Serialize;

use crate::flowdock::users::User;

/// Inactive users found in one organization
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct InactiveInOrganization {
    /// Organization display name
    pub organization: String,
    /// Organization slug
    pub parameterized_name: String,
    pub users: Vec<User>,
}
