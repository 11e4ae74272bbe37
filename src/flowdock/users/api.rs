//! User membership API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::flowdock::organizations::Organization;
use crate::flowdock::FlowdockClient;

use super::models::User;
use super::query::user_in_org;

impl FlowdockClient {
    /// Get the organizations `email` belongs to (case-insensitive match)
    ///
    /// Only organizations visible to the API key are searched. Returns an
    /// empty list when the email matches nobody.
    pub async fn find_user_organizations(&self, email: &str) -> Result<Vec<Organization>> {
        let orgs = self.list_organizations().await?;
        let matching: Vec<Organization> = orgs
            .into_iter()
            .filter(|org| user_in_org(email, org))
            .collect();

        debug!(
            "User {} is a member of {} organization(s)",
            email,
            matching.len()
        );
        Ok(matching)
    }

    /// Remove a user from an organization
    pub async fn delete_user_from_organization(
        &self,
        user: &User,
        organization: &Organization,
    ) -> Result<()> {
        let url = format!(
            "{}/{}/{}/{}/{}",
            self.base_url(),
            api::ORGANIZATIONS,
            urlencoding::encode(&organization.parameterized_name),
            api::USERS,
            user.id
        );

        debug!(
            "Deleting user {} ({}) from organization {}",
            user.id, user.email, organization.parameterized_name
        );

        let response = self.delete(&url)?.send().await?;
        Self::check_status(
            &response,
            &format!(
                "delete user {} from organization '{}'",
                user.id, organization.parameterized_name
            ),
        )?;

        debug!(
            "Successfully deleted user {} from {}",
            user.id, organization.parameterized_name
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlowdockError;
    use crate::flowdock::test_support::{org, user};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn orgs_json() -> serde_json::Value {
        serde_json::json!([
            {
                "parameterized_name": "acme",
                "name": "Acme",
                "users": [{ "id": 1, "email": "a@acme.com" }]
            },
            {
                "parameterized_name": "globex",
                "name": "Globex",
                "users": [{ "id": 2, "email": "b@globex.com" }]
            },
            {
                "parameterized_name": "initech",
                "name": "Initech",
                "users": [
                    { "id": 3, "email": "c@initech.com" },
                    { "id": 1, "email": "A@Acme.com" }
                ]
            }
        ])
    }

    async fn mount_orgs(mock_server: &MockServer, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/organizations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(mock_server)
            .await;
    }

    #[tokio::test]
    async fn test_find_user_organizations_case_insensitive() {
        let mock_server = MockServer::start().await;
        mount_orgs(&mock_server, orgs_json()).await;

        let client = FlowdockClient::test_client(&mock_server.uri());
        let orgs = client.find_user_organizations("A@ACME.com").await.unwrap();

        let names: Vec<&str> = orgs.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Acme", "Initech"]);
    }

    #[tokio::test]
    async fn test_find_user_organizations_single_org_scenario() {
        let mock_server = MockServer::start().await;
        mount_orgs(
            &mock_server,
            serde_json::json!([{
                "name": "Acme",
                "parameterized_name": "acme",
                "users": [{ "id": 1, "email": "a@acme.com" }]
            }]),
        )
        .await;

        let client = FlowdockClient::test_client(&mock_server.uri());
        let orgs = client.find_user_organizations("A@ACME.com").await.unwrap();

        assert_eq!(orgs.len(), 1);
        assert_eq!(orgs[0].name, "Acme");
    }

    #[tokio::test]
    async fn test_find_user_organizations_no_match_is_empty() {
        let mock_server = MockServer::start().await;
        mount_orgs(&mock_server, orgs_json()).await;

        let client = FlowdockClient::test_client(&mock_server.uri());
        let orgs = client
            .find_user_organizations("nobody@nowhere.com")
            .await
            .unwrap();

        assert!(orgs.is_empty());
    }

    #[tokio::test]
    async fn test_find_user_organizations_is_subset_of_listing() {
        let mock_server = MockServer::start().await;
        mount_orgs(&mock_server, orgs_json()).await;

        let client = FlowdockClient::test_client(&mock_server.uri());
        let all = client.list_organizations().await.unwrap();
        let found = client.find_user_organizations("b@globex.com").await.unwrap();

        assert!(found.iter().all(|o| all.contains(o)));
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn test_find_user_organizations_propagates_http_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/organizations"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = FlowdockClient::test_client(&mock_server.uri());
        let err = client
            .find_user_organizations("a@acme.com")
            .await
            .unwrap_err();

        assert!(matches!(err, FlowdockError::Api { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_delete_user_from_organization() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/organizations/acme/users/1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = FlowdockClient::test_client(&mock_server.uri());
        let target = user(1, "a@acme.com", None);
        let acme = org("acme", "Acme", vec![target.clone()]);

        client
            .delete_user_from_organization(&target, &acme)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_user_from_organization_forbidden() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/organizations/acme/users/1"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let client = FlowdockClient::test_client(&mock_server.uri());
        let target = user(1, "a@acme.com", None);
        let acme = org("acme", "Acme", vec![target.clone()]);

        match client
            .delete_user_from_organization(&target, &acme)
            .await
            .unwrap_err()
        {
            FlowdockError::Api { status, message } => {
                assert_eq!(status, 403);
                assert!(message.contains("acme"));
            }
            other => panic!("Expected FlowdockError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_then_find_is_empty() {
        let mock_server = MockServer::start().await;

        // First listing still contains the user, later listings reflect the deletes
        Mock::given(method("GET"))
            .and(path("/organizations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(orgs_json()))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/organizations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "parameterized_name": "acme", "name": "Acme", "users": [] },
                {
                    "parameterized_name": "globex",
                    "name": "Globex",
                    "users": [{ "id": 2, "email": "b@globex.com" }]
                },
                {
                    "parameterized_name": "initech",
                    "name": "Initech",
                    "users": [{ "id": 3, "email": "c@initech.com" }]
                }
            ])))
            .mount(&mock_server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/organizations/acme/users/1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/organizations/initech/users/1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = FlowdockClient::test_client(&mock_server.uri());
        let orgs = client.find_user_organizations("a@acme.com").await.unwrap();
        assert_eq!(orgs.len(), 2);

        let resolved = crate::flowdock::users::resolve_user_by_email(&orgs, "a@acme.com").unwrap();
        for org in &orgs {
            client
                .delete_user_from_organization(&resolved.user, org)
                .await
                .unwrap();
        }

        assert!(client
            .find_user_organizations("a@acme.com")
            .await
            .unwrap()
            .is_empty());
    }
}
