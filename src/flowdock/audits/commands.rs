//! Audit command handlers

use log::debug;

use crate::cli::{Cli, ListInactiveArgs};
use crate::flowdock::FlowdockClient;
use crate::output::output_inactive_users;
use crate::ui::{create_spinner, finish_spinner};

use super::models::InactiveInOrganization;

/// Run the list-inactive command
///
/// Organizations are checked one after another; the first failure aborts
/// the whole listing.
pub async fn run_list_inactive_command(
    client: &FlowdockClient,
    cli: &Cli,
    args: &ListInactiveArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    eprintln!("\x1b[1;31mWARNING! This command is not supported by Flowdock!\x1b[0m");
    if args.null {
        eprintln!("Listing users that have not been active at all");
    } else {
        eprintln!(
            "Listing users who have not been active during last {} days",
            args.days
        );
    }

    let spinner = create_spinner("Getting organization list...", cli.quiet());
    let result = client.list_organizations().await;
    finish_spinner(spinner);
    let mut orgs = result?;

    if let Some(filter) = &args.org {
        orgs.retain(|org| org.matches(filter));
        if orgs.is_empty() {
            return Err(format!("Organization '{}' not found", filter).into());
        }
    }

    let mut groups = Vec::with_capacity(orgs.len());
    for org in orgs {
        let spinner = create_spinner(
            &format!("Checking activity in '{}'...", org.name),
            cli.quiet(),
        );
        let result = client
            .list_inactive_users(&org.parameterized_name, args.days, args.null)
            .await;
        finish_spinner(spinner);
        let users = result?;

        debug!(
            "{} inactive users in {}",
            users.len(),
            org.parameterized_name
        );
        groups.push(InactiveInOrganization {
            organization: org.name,
            parameterized_name: org.parameterized_name,
            users,
        });
    }

    output_inactive_users(&groups, args.output)
}
