//! Audit API operations
//!
//! The audit endpoint is not part of Flowdock's documented API and may change
//! or disappear without notice.

use chrono::Utc;
use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::flowdock::users::User;
use crate::flowdock::FlowdockClient;

use super::inactivity::{filter_inactive, InactivityCriteria};

impl FlowdockClient {
    /// Get per-user last-access records for an organization
    pub async fn get_user_audits(&self, org_slug: &str) -> Result<Vec<User>> {
        let url = format!(
            "{}/{}/{}/{}",
            self.base_url(),
            api::ORGANIZATIONS,
            urlencoding::encode(org_slug),
            api::AUDITS_USERS
        );
        debug!("Fetching user audits from: {}", url);

        let response = self.get(&url)?.send().await?;
        self.parse_api_response(
            response,
            &format!("fetch user audits for organization '{}'", org_slug),
        )
        .await
    }

    /// List inactive users of an organization
    ///
    /// With `include_unknown` returns the users whose last access was never
    /// recorded; otherwise those who have not been active during the last
    /// `days` days.
    pub async fn list_inactive_users(
        &self,
        org_slug: &str,
        days: u32,
        include_unknown: bool,
    ) -> Result<Vec<User>> {
        let audits = self.get_user_audits(org_slug).await?;
        let total = audits.len();
        let inactive = filter_inactive(
            audits,
            &InactivityCriteria::new(days, include_unknown),
            Utc::now(),
        )?;

        debug!(
            "{} of {} users inactive in {}",
            inactive.len(),
            total,
            org_slug
        );
        Ok(inactive)
    }
}
