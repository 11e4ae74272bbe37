//! Organization module

mod api;
mod commands;
mod models;

pub use commands::run_list_orgs_command;
pub use models::Organization;
