//! User command handlers

use log::{debug, info, warn};

use crate::cli::{Cli, DeleteUserArgs, FindUserArgs, OutputFormat};
use crate::flowdock::organizations::Organization;
use crate::flowdock::FlowdockClient;
use crate::output::output_organizations;
use crate::ui::{confirm_action, create_spinner, finish_spinner, ConfirmMode};

use super::query::{resolve_user_by_email, ResolvedUser};

/// Printed when the email matches no member of any organization
const USER_NOT_FOUND: &str = "User not found!";

async fn fetch_user_organizations(
    client: &FlowdockClient,
    cli: &Cli,
    email: &str,
) -> crate::error::Result<Vec<Organization>> {
    let spinner = create_spinner(
        &format!("Listing the organizations {} belongs to...", email),
        cli.quiet(),
    );
    let result = client.find_user_organizations(email).await;
    finish_spinner(spinner);
    result
}

fn print_org_names(orgs: &[Organization]) {
    println!("User is part of the following Flowdock organizations:");
    for org in orgs {
        println!("  {}", org.name);
    }
}

/// Run the find-user command
pub async fn run_find_user_command(
    client: &FlowdockClient,
    cli: &Cli,
    args: &FindUserArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let orgs = fetch_user_organizations(client, cli, &args.email).await?;

    // Structured formats always emit a (possibly empty) document
    if args.output != OutputFormat::Table {
        return output_organizations(&orgs, args.output);
    }

    if orgs.is_empty() {
        println!("{}", USER_NOT_FOUND);
        return Ok(());
    }

    print_org_names(&orgs);
    Ok(())
}

fn report_mismatches(resolved: &ResolvedUser) {
    for mismatch in &resolved.mismatches {
        warn!(
            "User id {} in organization '{}' differs from id {} found in '{}'",
            mismatch.id, mismatch.organization, resolved.user.id, resolved.source_organization
        );
        eprintln!(
            "Warning: '{}' has id {} in organization '{}' but id {} in '{}'; using {}",
            resolved.user.email,
            mismatch.id,
            mismatch.organization,
            resolved.user.id,
            resolved.source_organization,
            resolved.user.id
        );
    }
}

/// Run the delete-user command
///
/// Lists the organizations the user belongs to, asks for confirmation, then
/// removes the user from each one in turn. The first failing delete aborts
/// the remaining ones.
pub async fn run_delete_user_command(
    client: &FlowdockClient,
    cli: &Cli,
    args: &DeleteUserArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    info!("Deleting user {} from all organizations", args.email);

    let orgs = fetch_user_organizations(client, cli, &args.email).await?;

    let Some(resolved) = resolve_user_by_email(&orgs, &args.email) else {
        println!("{}", USER_NOT_FOUND);
        return Ok(());
    };
    report_mismatches(&resolved);

    print_org_names(&orgs);

    let prompt = format!(
        "Are you sure you want to delete user {} from {} organization(s)?",
        resolved.user.email,
        orgs.len()
    );
    if !confirm_action(&prompt, ConfirmMode::from_flags(args.yes, cli.batch))? {
        println!("Cancelled");
        return Ok(());
    }

    for org in &orgs {
        let spinner = create_spinner(
            &format!("Removing {} from '{}'...", resolved.user.email, org.name),
            cli.quiet(),
        );
        let result = client
            .delete_user_from_organization(&resolved.user, org)
            .await;
        finish_spinner(spinner);
        result?;

        debug!("Removed user {} from {}", resolved.user.id, org.parameterized_name);
        println!("✓ Removed {} from '{}'", resolved.user.email, org.name);
    }

    println!("Done!");
    Ok(())
}
