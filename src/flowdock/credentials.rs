//! Flowdock API key resolution

use log::debug;

use crate::config::credentials;
use crate::error::{FlowdockError, Result};

/// API key resolution with fallback logic
#[derive(Debug, Default)]
pub struct ApiKeyResolver;

impl ApiKeyResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the API key:
    /// 1. CLI argument (clap also fills this from FLOWDOCK_API_KEY)
    /// 2. FLOWDOCK_API_KEY environment variable
    ///
    /// Blank values count as missing.
    pub fn resolve(&self, cli_key: Option<&str>) -> Result<String> {
        let env_key = std::env::var(credentials::API_KEY_ENV_VAR).ok();
        self.resolve_with_env(cli_key, env_key.as_deref())
    }

    fn resolve_with_env(&self, cli_key: Option<&str>, env_key: Option<&str>) -> Result<String> {
        if let Some(key) = non_blank(cli_key) {
            debug!("Using API key from CLI argument");
            return Ok(key.to_string());
        }

        if let Some(key) = non_blank(env_key) {
            debug!(
                "Using API key from {} environment variable",
                credentials::API_KEY_ENV_VAR
            );
            return Ok(key.to_string());
        }

        Err(FlowdockError::MissingCredentials(Self::missing_key_message()))
    }

    fn missing_key_message() -> String {
        format!(
            "No Flowdock API key provided! Please provide one using:\n\
             \n\
             1. CLI argument:         flowdock --api-key <KEY> <COMMAND>\n\
             2. Environment variable: export {}=<KEY>\n\
             \n\
             Get a personal API key from {}",
            credentials::API_KEY_ENV_VAR,
            credentials::TOKENS_URL
        )
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Mask an API key for diagnostic output, keeping the first four characters
pub fn mask_api_key(key: &str) -> String {
    let len = key.chars().count();
    if len <= 4 {
        return "*".repeat(len);
    }
    let visible: String = key.chars().take(4).collect();
    format!("{}{}", visible, "*".repeat(8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_from_cli() {
        let key = ApiKeyResolver::new().resolve(Some("abc123")).unwrap();
        assert_eq!(key, "abc123");
    }

    #[test]
    fn test_resolve_trims_cli_value() {
        let key = ApiKeyResolver::new().resolve(Some("  abc123\n")).unwrap();
        assert_eq!(key, "abc123");
    }

    #[test]
    fn test_missing_key_message_mentions_env_var() {
        let msg = ApiKeyResolver::missing_key_message();
        assert!(msg.contains("No Flowdock API key provided"));
        assert!(msg.contains(credentials::API_KEY_ENV_VAR));
        assert!(msg.contains("--api-key"));
    }

    #[test]
    fn test_blank_keys_are_missing_credentials() {
        let resolver = ApiKeyResolver::new();
        for (cli, env) in [(Some("   "), None), (None, Some("\t\n")), (Some(""), Some(" "))] {
            match resolver.resolve_with_env(cli, env) {
                Err(FlowdockError::MissingCredentials(msg)) => {
                    assert!(msg.contains("No Flowdock API key provided"))
                }
                other => panic!("Expected MissingCredentials, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_blank_cli_key_falls_back_to_env() {
        let key = ApiKeyResolver::new()
            .resolve_with_env(Some("  "), Some(" env-key "))
            .unwrap();
        assert_eq!(key, "env-key");
    }

    #[test]
    fn test_cli_key_wins_over_env() {
        let key = ApiKeyResolver::new()
            .resolve_with_env(Some("cli-key"), Some("env-key"))
            .unwrap();
        assert_eq!(key, "cli-key");
    }

    #[test]
    fn test_mask_api_key() {
        assert_eq!(mask_api_key("abcdef123456"), "abcd********");
        assert_eq!(mask_api_key("abc"), "***");
        assert_eq!(mask_api_key(""), "");
    }
}
