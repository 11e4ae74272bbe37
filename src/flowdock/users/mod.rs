//! User module - membership lookup and removal

mod api;
mod commands;
mod models;
mod query;

pub use commands::{run_delete_user_command, run_find_user_command};
pub use models::User;
pub use query::{resolve_user_by_email, user_in_org, IdMismatch, ResolvedUser};
