use anyhow::{Context, Result};

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_RUST_LOG: &str = "info";

/// Application configuration loaded from environment variables.
///
/// The provider key is optional at startup: without it the service still boots,
/// and every completion request fails with a configuration error instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    /// Per-attempt transport timeout for provider calls.
    pub llm_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: optional_env("OPENAI_API_KEY"),
            openai_base_url: optional_env("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            llm_timeout_secs: match optional_env("LLM_TIMEOUT_SECS") {
                Some(raw) => raw
                    .parse::<u64>()
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
                None => DEFAULT_LLM_TIMEOUT_SECS,
            },
            port: parse_port(optional_env("PORT"))?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| DEFAULT_RUST_LOG.to_string()),
        })
    }
}

fn parse_port(raw: Option<String>) -> Result<u16> {
    match raw {
        Some(raw) => raw.parse::<u16>().context("PORT must be a valid port number"),
        None => Ok(DEFAULT_PORT),
    }
}

/// Reads a variable, treating an empty or whitespace-only value as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_env_treats_blank_as_unset() {
        std::env::set_var("HRDESK_TEST_BLANK_VAR", "   ");
        assert_eq!(optional_env("HRDESK_TEST_BLANK_VAR"), None);
        std::env::remove_var("HRDESK_TEST_BLANK_VAR");
    }

    #[test]
    fn test_optional_env_trims_value() {
        std::env::set_var("HRDESK_TEST_KEY_VAR", "  sk-test  ");
        assert_eq!(
            optional_env("HRDESK_TEST_KEY_VAR").as_deref(),
            Some("sk-test")
        );
        std::env::remove_var("HRDESK_TEST_KEY_VAR");
    }

    #[test]
    fn test_blank_port_falls_back_to_default() {
        std::env::set_var("HRDESK_TEST_BLANK_PORT", "  ");
        assert_eq!(
            parse_port(optional_env("HRDESK_TEST_BLANK_PORT")).unwrap(),
            8080
        );
        std::env::remove_var("HRDESK_TEST_BLANK_PORT");
    }

    #[test]
    fn test_port_parses_and_rejects_garbage() {
        assert_eq!(parse_port(Some("3000".to_string())).unwrap(), 3000);
        assert!(parse_port(Some("eighty".to_string())).is_err());
    }

    #[test]
    fn test_optional_env_missing_is_none() {
        assert_eq!(optional_env("HRDESK_TEST_DEFINITELY_MISSING"), None);
    }
}
