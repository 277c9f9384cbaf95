//! Application configuration
//!
//! Defaults come from [`crate::consts`]. The browser build can override the
//! log level with a `?log=<level>` query string.

use std::str::FromStr;

use log::LevelFilter;

use crate::consts;

/// Storage keys for the two persisted values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    /// JSON array of recipes
    pub recipes: String,
    /// Plain-string display name
    pub profile: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            recipes: consts::RECIPES_KEY.to_string(),
            profile: consts::PROFILE_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub keys: StorageKeys,
    /// Domain appended to the lowercased display name to derive an email
    pub email_domain: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            keys: StorageKeys::default(),
            email_domain: consts::EMAIL_DOMAIN.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Apply overrides from a URL query string such as `?log=debug`.
    ///
    /// Unknown keys and unparsable values are ignored.
    pub fn apply_query(&mut self, query: &str) {
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if key == "log" {
                match LevelFilter::from_str(value) {
                    Ok(level) => self.log_level = level,
                    Err(_) => log::warn!("Ignoring unknown log level: {}", value),
                }
            }
        }
    }

    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        config.apply_query(query);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_persisted_layout() {
        let config = AppConfig::default();
        assert_eq!(config.keys.recipes, "receitas");
        assert_eq!(config.keys.profile, "usuario");
        assert_eq!(config.email_domain, "email.com");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_query_sets_log_level() {
        let config = AppConfig::from_query("?log=debug");
        assert_eq!(config.log_level, LevelFilter::Debug);

        let config = AppConfig::from_query("foo=1&log=WARN");
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_query_ignores_garbage() {
        let config = AppConfig::from_query("?log=loud&&=x&bare");
        assert_eq!(config, AppConfig::default());
    }
}
