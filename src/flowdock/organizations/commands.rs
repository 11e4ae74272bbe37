//! Organization command handlers

use log::debug;

use crate::cli::{Cli, ListOrgsArgs};
use crate::flowdock::FlowdockClient;
use crate::output::output_organizations;
use crate::ui::{create_spinner, finish_spinner};

/// Run the list-orgs command
pub async fn run_list_orgs_command(
    client: &FlowdockClient,
    cli: &Cli,
    args: &ListOrgsArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    debug!("Listing organizations");

    let spinner = create_spinner("Getting organization list...", cli.quiet());
    let result = client.list_organizations().await;
    finish_spinner(spinner);
    let orgs = result?;

    output_organizations(&orgs, args.output)
}
