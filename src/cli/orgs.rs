//! Organization command arguments

use clap::Parser;

use super::common::OutputFormat;

/// Arguments for 'list-orgs'
#[derive(Parser, Debug)]
pub struct ListOrgsArgs {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
