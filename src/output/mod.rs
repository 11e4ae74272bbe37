//! Output formatting module
//!
//! Handles different output formats: table, CSV, JSON, YAML

pub mod common;
pub mod organizations;
pub mod users;

pub use organizations::{output_organizations, render_organizations};
pub use users::{output_inactive_users, render_inactive_users};
