//! Membership lookups over already-fetched organizations
//!
//! Nothing here talks to the API; every function works on data the caller
//! passes in.

use crate::flowdock::organizations::Organization;

use super::models::User;

/// Check if any member of `organization` has the given email (case-insensitive)
pub fn user_in_org(email: &str, organization: &Organization) -> bool {
    organization.users.iter().any(|u| u.email_matches(email))
}

/// Organization whose record for the user carries a different id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdMismatch {
    /// Organization slug
    pub organization: String,
    /// Id found in that organization
    pub id: u64,
}

/// Canonical user record resolved from a set of organizations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUser {
    /// First matching record in sequence order
    pub user: User,
    /// Slug of the organization the canonical record came from
    pub source_organization: String,
    /// Organizations whose record disagrees with the canonical id
    pub mismatches: Vec<IdMismatch>,
}

impl ResolvedUser {
    /// True when every organization reported the same id
    pub fn is_consistent(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Resolve the user record for `email` across `organizations`
///
/// The first match in sequence order becomes the canonical record used for
/// deletes in every organization. All organizations are scanned so that a
/// differing id elsewhere is reported instead of silently ignored. `None`
/// means the user is not a member of any of them.
pub fn resolve_user_by_email(organizations: &[Organization], email: &str) -> Option<ResolvedUser> {
    let mut resolved: Option<ResolvedUser> = None;

    for org in organizations {
        let Some(found) = org.users.iter().find(|u| u.email_matches(email)) else {
            continue;
        };

        match resolved.as_mut() {
            None => {
                resolved = Some(ResolvedUser {
                    user: found.clone(),
                    source_organization: org.parameterized_name.clone(),
                    mismatches: Vec::new(),
                });
            }
            Some(r) if r.user.id != found.id => r.mismatches.push(IdMismatch {
                organization: org.parameterized_name.clone(),
                id: found.id,
            }),
            Some(_) => {}
        }
    }

    resolved
}
