//! CLI argument parsing

mod common;
mod orgs;
mod users;

use clap::{Parser, Subcommand};

use crate::config::{api, credentials, defaults};

pub use common::OutputFormat;
pub use orgs::ListOrgsArgs;
pub use users::{DeleteUserArgs, FindUserArgs, ListInactiveArgs};

const LONG_ABOUT: &str = "Simple command line utility for managing Flowdock users.

Needs a personal Flowdock API key. Get one from https://flowdock.com/account/tokens
and pass it either as --api-key or in the FLOWDOCK_API_KEY environment variable.

For help on a command run \"flowdock COMMAND --help\", e.g. \"flowdock find-user --help\".";

/// Flowdock user management CLI
#[derive(Parser, Debug)]
#[command(name = "flowdock")]
#[command(version)]
#[command(about = "Manage users across Flowdock organizations", long_about = LONG_ABOUT)]
pub struct Cli {
    /// Flowdock API key of the acting user
    #[arg(
        long = "api-key",
        visible_alias = "api_key",
        env = credentials::API_KEY_ENV_VAR,
        hide_env_values = true,
        global = true
    )]
    pub api_key: Option<String>,

    /// Print every API request as it is sent
    #[arg(
        long,
        env = credentials::DEBUG_ENV_VAR,
        value_parser = clap::builder::BoolishValueParser::new(),
        default_value_t = false,
        global = true
    )]
    pub debug: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL, global = true)]
    pub log_level: String,

    /// Request timeout in seconds
    #[arg(
        long,
        env = credentials::TIMEOUT_ENV_VAR,
        default_value_t = api::DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..),
        global = true
    )]
    pub timeout: u64,

    /// Flowdock API base URL
    #[arg(
        long,
        env = credentials::API_URL_ENV_VAR,
        default_value = api::BASE_URL,
        hide = true,
        global = true
    )]
    pub api_url: String,

    /// Batch mode: no spinners, no interactive prompts
    #[arg(long, default_value_t = false, global = true)]
    pub batch: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Spinners would interleave with debug lines and are useless in batch mode
    pub fn quiet(&self) -> bool {
        self.batch || self.debug
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List Flowdock organizations you are part of
    #[command(visible_alias = "list_orgs")]
    ListOrgs(ListOrgsArgs),

    /// List the organizations a user belongs to
    ///
    /// Only organizations both you and the user are part of are searched.
    #[command(visible_alias = "find_user")]
    FindUser(FindUserArgs),

    /// Delete a user from all your Flowdock organizations
    ///
    /// The user can only be removed from organizations you are an admin of.
    #[command(visible_alias = "delete_user")]
    DeleteUser(DeleteUserArgs),

    /// List inactive users
    ///
    /// WARNING! THIS IS NOT OFFICIALLY SUPPORTED BY THE FLOWDOCK API!
    ///
    /// Users are considered inactive if they have not used the organization
    /// during the last 90 days (see --days). With --null, lists users who were
    /// never active or were last active before Flowdock started collecting
    /// statistics.
    #[command(visible_alias = "list_inactive")]
    ListInactive(ListInactiveArgs),
}
