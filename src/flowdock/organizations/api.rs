//! Organization API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::flowdock::FlowdockClient;

use super::models::Organization;

impl FlowdockClient {
    /// Get all organizations the API key has access to, with their members
    ///
    /// Every call hits the API; results are never cached.
    pub async fn list_organizations(&self) -> Result<Vec<Organization>> {
        let url = format!("{}/{}", self.base_url(), api::ORGANIZATIONS);
        debug!("Fetching organizations from: {}", url);

        let response = self.get(&url)?.send().await?;
        let orgs: Vec<Organization> = self
            .parse_api_response(response, "fetch organizations")
            .await?;

        debug!("Fetched {} organizations", orgs.len());
        Ok(orgs)
    }
}
