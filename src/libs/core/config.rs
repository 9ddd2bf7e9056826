use crate::libs::core::validation::{FormLimits, MAX_BIO_CHARS, MAX_USERNAME_CHARS};
use std::{env, fmt::Display, str::FromStr};
use tracing::warn;

pub const DEFAULT_AVATAR_PLACEHOLDER: &str = "/api/placeholder/100/100";
pub const DEFAULT_MEDIA_PLACEHOLDER: &str = "/api/placeholder/400/300";
pub const DEFAULT_DATABASE_PATH: &str = "socialfi_client.db";

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub database_path: String,
    pub avatar_placeholder_uri: String,
    pub media_placeholder_uri: String,
    pub max_username_chars: usize,
    pub max_bio_chars: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            avatar_placeholder_uri: DEFAULT_AVATAR_PLACEHOLDER.to_string(),
            media_placeholder_uri: DEFAULT_MEDIA_PLACEHOLDER.to_string(),
            max_username_chars: MAX_USERNAME_CHARS,
            max_bio_chars: MAX_BIO_CHARS,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database_path: try_load("SOCIALFI_DB_PATH", defaults.database_path),
            avatar_placeholder_uri: try_load(
                "SOCIALFI_AVATAR_PLACEHOLDER",
                defaults.avatar_placeholder_uri,
            ),
            media_placeholder_uri: try_load(
                "SOCIALFI_MEDIA_PLACEHOLDER",
                defaults.media_placeholder_uri,
            ),
            max_username_chars: try_load("SOCIALFI_MAX_USERNAME_CHARS", defaults.max_username_chars),
            max_bio_chars: try_load("SOCIALFI_MAX_BIO_CHARS", defaults.max_bio_chars),
        }
    }

    pub fn form_limits(&self) -> FormLimits {
        FormLimits {
            max_username_chars: self.max_username_chars,
            max_bio_chars: self.max_bio_chars,
        }
    }
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
        }),
        Err(_) => {
            warn!("{key} not set, using default: {default}");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_form_limits() {
        let config = ClientConfig::default();
        assert_eq!(config.form_limits(), FormLimits::default());
        assert_eq!(config.avatar_placeholder_uri, "/api/placeholder/100/100");
        assert_eq!(config.media_placeholder_uri, "/api/placeholder/400/300");
    }

    #[test]
    fn test_unparsable_value_falls_back() {
        env::set_var("SOCIALFI_TEST_BAD_NUMBER", "not-a-number");
        let value: usize = try_load("SOCIALFI_TEST_BAD_NUMBER", 42);
        assert_eq!(value, 42);
        env::remove_var("SOCIALFI_TEST_BAD_NUMBER");
    }

    #[test]
    fn test_set_value_is_parsed() {
        env::set_var("SOCIALFI_TEST_GOOD_NUMBER", "7");
        let value: usize = try_load("SOCIALFI_TEST_GOOD_NUMBER", 42);
        assert_eq!(value, 7);
        env::remove_var("SOCIALFI_TEST_GOOD_NUMBER");
    }

    #[test]
    fn test_from_env_reads_overrides() {
        let vars = [
            ("SOCIALFI_DB_PATH", "/tmp/socialfi-env.db"),
            ("SOCIALFI_AVATAR_PLACEHOLDER", "ipfs://avatar"),
            ("SOCIALFI_MEDIA_PLACEHOLDER", "ipfs://media"),
            ("SOCIALFI_MAX_USERNAME_CHARS", "12"),
            ("SOCIALFI_MAX_BIO_CHARS", "oops"),
        ];
        for (key, value) in vars {
            env::set_var(key, value);
        }

        let config = ClientConfig::from_env();

        for (key, _) in vars {
            env::remove_var(key);
        }
        assert_eq!(config.database_path, "/tmp/socialfi-env.db");
        assert_eq!(config.avatar_placeholder_uri, "ipfs://avatar");
        assert_eq!(config.media_placeholder_uri, "ipfs://media");
        assert_eq!(config.max_username_chars, 12);
        assert_eq!(config.max_bio_chars, MAX_BIO_CHARS);
    }
}
