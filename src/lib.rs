//! Receitas da Vovó - a browser recipe manager
//!
//! Core modules:
//! - `recipes`: Recipe collection persisted as one JSON array
//! - `profile`: Logged-in display name and derived email
//! - `platform`: Browser/native platform abstraction (storage, clock)
//! - `config`: Storage keys, email domain, log level
//! - `routes`: Screen routes
//! - `ui`: Per-screen state, independent of the DOM

pub mod config;
pub mod platform;
pub mod profile;
pub mod recipes;
pub mod routes;
pub mod ui;

pub use config::{AppConfig, StorageKeys};
pub use profile::{Session, UserProfile, UserProfileStore};
pub use recipes::{Recipe, RecipeId, RecipeStore, filter_by_name};
pub use routes::Route;

/// Persisted layout constants
pub mod consts {
    /// LocalStorage key for the recipe array. Existing data lives here; do
    /// not rename without a migration.
    pub const RECIPES_KEY: &str = "receitas";
    /// LocalStorage key for the display name
    pub const PROFILE_KEY: &str = "usuario";
    /// Domain for derived emails
    pub const EMAIL_DOMAIN: &str = "email.com";
}
