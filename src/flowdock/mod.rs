//! Flowdock API client module
//!
//! This module provides functionality to interact with the Flowdock REST API.

pub mod audits;
mod client;
mod credentials;
pub mod organizations;
pub mod users;

pub use audits::{
    filter_inactive, parse_accessed_at, run_list_inactive_command, InactiveInOrganization,
    InactivityCriteria,
};
pub use client::{ClientSettings, DebugSink, FlowdockClient};
pub use credentials::{mask_api_key, ApiKeyResolver};
pub use organizations::{run_list_orgs_command, Organization};
pub use users::{
    resolve_user_by_email, run_delete_user_command, run_find_user_command, user_in_org,
    IdMismatch, ResolvedUser, User,
};

use crate::cli::{Cli, Command};

/// Dispatch the parsed command to its handler
pub async fn run_command(
    client: &FlowdockClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Command::ListOrgs(args) => run_list_orgs_command(client, cli, args).await,
        Command::FindUser(args) => run_find_user_command(client, cli, args).await,
        Command::DeleteUser(args) => run_delete_user_command(client, cli, args).await,
        Command::ListInactive(args) => run_list_inactive_command(client, cli, args).await,
    }
}
