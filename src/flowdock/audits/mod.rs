//! Audit module - last-access records and inactivity filtering

mod api;
mod commands;
mod inactivity;
mod models;

pub use commands::run_list_inactive_command;
pub use inactivity::{filter_inactive, parse_accessed_at, InactivityCriteria};
pub use models::InactiveInOrganization;
