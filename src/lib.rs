//! flowdock-users - manage users across Flowdock organizations
//!
//! A CLI tool that talks to the Flowdock REST API with a personal API key.
//!
//! # Features
//!
//! - List the organizations you are part of
//! - Find which organizations a user belongs to (email match ignores case)
//! - Remove a user from all of your organizations
//! - List inactive users via the (unofficial) audit endpoint
//! - Multiple output formats (table, CSV, JSON, YAML)
//!
//! # Example
//!
//! ```bash
//! export FLOWDOCK_API_KEY=...
//!
//! # List all organizations
//! flowdock list-orgs
//!
//! # Where is this user a member?
//! flowdock find-user jane@example.com
//!
//! # Remove the user everywhere (asks for confirmation)
//! flowdock delete-user jane@example.com
//!
//! # Users not seen in 180 days, as JSON
//! flowdock list-inactive --days 180 -o json
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod flowdock;
pub mod output;
pub mod ui;

pub use cli::{
    Cli, Command, DeleteUserArgs, FindUserArgs, ListInactiveArgs, ListOrgsArgs, OutputFormat,
};
pub use error::{FlowdockError, Result};
pub use flowdock::{
    filter_inactive, resolve_user_by_email, run_command, user_in_org, ApiKeyResolver,
    ClientSettings, FlowdockClient, InactivityCriteria, Organization, ResolvedUser, User,
};
pub use output::{render_inactive_users, render_organizations};
