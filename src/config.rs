/// Configuration constants for the Flowdock REST API
pub mod api {
    /// Base URL of the public Flowdock API
    pub const BASE_URL: &str = "https://api.flowdock.com";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Users collection inside an organization
    pub const USERS: &str = "users";

    /// Per-user audit records inside an organization (undocumented, trailing slash required)
    pub const AUDITS_USERS: &str = "audits/users/";

    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable holding the personal API key
    pub const API_KEY_ENV_VAR: &str = "FLOWDOCK_API_KEY";

    /// Environment variable overriding the API base URL
    pub const API_URL_ENV_VAR: &str = "FLOWDOCK_API_URL";

    /// Environment variable overriding the request timeout
    pub const TIMEOUT_ENV_VAR: &str = "FLOWDOCK_TIMEOUT";

    /// Environment variable enabling request diagnostics (`true`, `1`, `yes`, `on`)
    pub const DEBUG_ENV_VAR: &str = "FLOWDOCK_DEBUG";

    /// Where users create personal API tokens
    pub const TOKENS_URL: &str = "https://flowdock.com/account/tokens";
}

/// Default values for CLI
pub mod defaults {
    /// Days without access after which a user counts as inactive
    pub const INACTIVE_DAYS: u32 = 90;

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_has_no_trailing_slash() {
        assert!(api::BASE_URL.starts_with("https://"));
        assert!(!api::BASE_URL.ends_with('/'));
    }

    #[test]
    fn test_audits_path_keeps_trailing_slash() {
        assert!(api::AUDITS_USERS.ends_with('/'));
    }

    #[test]
    fn test_api_key_env_var() {
        assert_eq!(credentials::API_KEY_ENV_VAR, "FLOWDOCK_API_KEY");
    }

    #[test]
    fn test_default_inactive_days() {
        assert_eq!(defaults::INACTIVE_DAYS, 90);
    }
}
