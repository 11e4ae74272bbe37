//! User command arguments

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;

use super::common::OutputFormat;
use crate::config::defaults;

/// Arguments for 'find-user'
#[derive(Parser, Debug)]
pub struct FindUserArgs {
    /// Email address of the user (case-insensitive)
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub email: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'delete-user'
#[derive(Parser, Debug)]
pub struct DeleteUserArgs {
    /// Email address of the user to remove (case-insensitive)
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub email: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'list-inactive'
#[derive(Parser, Debug)]
pub struct ListInactiveArgs {
    /// How many days since last access is considered inactive
    #[arg(long, default_value_t = defaults::INACTIVE_DAYS)]
    pub days: u32,

    /// List users whose last access is unknown instead
    ///
    /// These users have not been active at all, or were last active before
    /// Flowdock started collecting statistics.
    #[arg(long, default_value_t = false)]
    pub null: bool,

    /// Only check this organization (slug or name)
    #[arg(long)]
    pub org: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
