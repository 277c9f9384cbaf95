//! Logged-in display name
//!
//! Only the name is persisted, as a plain string. The email is derived on
//! every read so a change to the derivation rule never leaves stale data.

use crate::config::AppConfig;
use crate::consts;
use crate::platform::KeyValueStore;

/// The logged-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    email_domain: String,
}

impl UserProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_domain(name, consts::EMAIL_DOMAIN)
    }

    pub fn with_domain(name: impl Into<String>, email_domain: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email_domain: email_domain.into(),
        }
    }

    /// `lowercase(name)@domain`
    pub fn email(&self) -> String {
        format!("{}@{}", self.name.to_lowercase(), self.email_domain)
    }
}

/// Session state. There is no logout, so `LoggedIn` is terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    LoggedOut,
    LoggedIn(UserProfile),
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Session::LoggedIn(_))
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            Session::LoggedOut => None,
            Session::LoggedIn(profile) => Some(profile),
        }
    }
}

/// Store for the single persisted display name
#[derive(Debug, Clone)]
pub struct UserProfileStore<S> {
    storage: S,
    key: String,
    email_domain: String,
}

impl<S: KeyValueStore> UserProfileStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, &AppConfig::default())
    }

    pub fn with_config(storage: S, config: &AppConfig) -> Self {
        Self {
            storage,
            key: config.keys.profile.clone(),
            email_domain: config.email_domain.clone(),
        }
    }

    /// Overwrite the stored name unconditionally, empty string included
    pub fn login(&self, name: &str) {
        match self.storage.set_item(&self.key, name) {
            Ok(()) => log::info!("Logged in as '{}'", name),
            Err(e) => log::warn!("Login not saved: {}", e),
        }
    }

    /// The logged-in profile, or `None` when no non-empty name is stored
    pub fn current_profile(&self) -> Option<UserProfile> {
        let name = match self.storage.get_item(&self.key) {
            Ok(name) => name?,
            Err(e) => {
                log::warn!("Could not read profile: {}", e);
                return None;
            }
        };

        if name.is_empty() {
            return None;
        }
        Some(UserProfile::with_domain(name, self.email_domain.as_str()))
    }

    pub fn session(&self) -> Session {
        match self.current_profile() {
            Some(profile) => Session::LoggedIn(profile),
            None => Session::LoggedOut,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStorage;

    #[test]
    fn test_no_profile_before_login() {
        let profiles = UserProfileStore::new(MemoryStorage::new());
        assert_eq!(profiles.current_profile(), None);
        assert_eq!(profiles.session(), Session::LoggedOut);
    }

    #[test]
    fn test_login_then_profile() {
        let storage = MemoryStorage::new();
        let profiles = UserProfileStore::new(storage.clone());
        profiles.login("Ana");

        let profile = profiles.current_profile().unwrap();
        assert_eq!(profile.name, "Ana");
        assert_eq!(profile.email(), "ana@email.com");
        assert_eq!(storage.get_item("usuario").unwrap().as_deref(), Some("Ana"));
    }

    #[test]
    fn test_login_overwrites() {
        let profiles = UserProfileStore::new(MemoryStorage::new());
        profiles.login("Ana");
        profiles.login("José Maria");

        let session = profiles.session();
        assert!(session.is_logged_in());
        assert_eq!(session.profile().unwrap().email(), "josé maria@email.com");
    }

    #[test]
    fn test_empty_login_reads_as_absent() {
        let storage = MemoryStorage::new();
        let profiles = UserProfileStore::new(storage.clone());
        profiles.login("Ana");
        profiles.login("");

        assert_eq!(storage.get_item("usuario").unwrap().as_deref(), Some(""));
        assert_eq!(profiles.current_profile(), None);
    }

    #[test]
    fn test_email_follows_configured_domain() {
        let config = AppConfig {
            email_domain: "vovo.com.br".to_string(),
            ..AppConfig::default()
        };
        let storage = MemoryStorage::new();
        let profiles = UserProfileStore::with_config(storage.clone(), &config);
        profiles.login("ANA");

        assert_eq!(profiles.current_profile().unwrap().email(), "ana@vovo.com.br");
        // email is never persisted
        assert_eq!(storage.len(), 1);
        assert_eq!(storage.get_item("usuario").unwrap().as_deref(), Some("ANA"));
    }

    #[test]
    fn test_shares_storage_with_recipes() {
        use crate::platform::ManualClock;
        use crate::recipes::RecipeStore;

        let storage = MemoryStorage::new();
        let clock = ManualClock::new(1);
        let recipes = RecipeStore::new(storage.clone(), &clock);
        let profiles = UserProfileStore::new(storage.clone());

        recipes.create("Bolo", "Asse");
        profiles.login("Ana");

        assert_eq!(recipes.list_all().len(), 1);
        assert_eq!(profiles.current_profile().map(|p| p.name), Some("Ana".to_string()));
        assert_eq!(storage.len(), 2);
    }
}
