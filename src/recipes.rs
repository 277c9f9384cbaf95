//! Recipe collection
//!
//! Persisted to LocalStorage as a JSON array under a single key. Every write
//! is a full read-modify-write of the whole array.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::StorageKeys;
use crate::platform::{Clock, KeyValueStore};

/// Recipe identity, a Unix timestamp in milliseconds at creation
pub type RecipeId = i64;

/// A single recipe entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    /// Display name, may be empty
    #[serde(rename = "nome")]
    pub name: String,
    /// Preparation instructions, free text
    #[serde(rename = "modo")]
    pub preparation: String,
    /// Fields written by other clients; round-tripped untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Recipe {
    pub fn new(id: RecipeId, name: impl Into<String>, preparation: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            preparation: preparation.into(),
            extra: Map::new(),
        }
    }
}

/// Case-insensitive substring match of `query` against each recipe name.
///
/// An empty query matches everything. Input order is kept.
pub fn filter_by_name<'a>(recipes: &'a [Recipe], query: &str) -> Vec<&'a Recipe> {
    let needle = query.to_lowercase();
    recipes
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .collect()
}

/// Store for the persisted recipe collection
#[derive(Debug, Clone)]
pub struct RecipeStore<S, C> {
    storage: S,
    clock: C,
    key: String,
}

impl<S: KeyValueStore, C: Clock> RecipeStore<S, C> {
    pub fn new(storage: S, clock: C) -> Self {
        Self::with_keys(storage, clock, &StorageKeys::default())
    }

    pub fn with_keys(storage: S, clock: C, keys: &StorageKeys) -> Self {
        Self {
            storage,
            clock,
            key: keys.recipes.clone(),
        }
    }

    /// Every stored recipe, in insertion order.
    ///
    /// Missing, unreadable or malformed data reads as an empty collection.
    pub fn list_all(&self) -> Vec<Recipe> {
        let json = match self.storage.get_item(&self.key) {
            Ok(Some(json)) => json,
            Ok(None) => {
                log::debug!("No recipes stored under '{}'", self.key);
                return Vec::new();
            }
            Err(e) => {
                log::warn!("Could not read recipes: {}", e);
                return Vec::new();
            }
        };

        // `null` is what an old client writes for "nothing yet"
        match serde_json::from_str::<Option<Vec<Recipe>>>(&json) {
            Ok(recipes) => {
                let recipes = recipes.unwrap_or_default();
                log::debug!("Loaded {} recipes", recipes.len());
                recipes
            }
            Err(e) => {
                log::warn!("Stored recipes are malformed, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Look up a single recipe by id
    pub fn find(&self, id: RecipeId) -> Option<Recipe> {
        self.list_all().into_iter().find(|r| r.id == id)
    }

    /// Append a new recipe and persist the collection.
    ///
    /// The id is the current clock reading, bumped past the largest stored
    /// id when two creations land on the same millisecond.
    pub fn create(&self, name: &str, preparation: &str) -> Recipe {
        let mut recipes = self.list_all();

        let now = self.clock.now_millis();
        let id = match recipes.iter().map(|r| r.id).max() {
            Some(max_id) if now <= max_id => match max_id.checked_add(1) {
                Some(next) => {
                    log::debug!("Clock reading {} collides with id {}, bumping", now, max_id);
                    next
                }
                None => {
                    log::warn!("Stored id {} cannot be bumped, using clock reading {}", max_id, now);
                    now
                }
            },
            _ => now,
        };

        let recipe = Recipe::new(id, name, preparation);
        recipes.push(recipe.clone());
        self.save(&recipes);

        log::info!("Created recipe {} ({} total)", id, recipes.len());
        recipe
    }

    /// Replace the name of the recipe with `id`, persist and return the
    /// updated collection.
    ///
    /// An unknown id leaves the collection unchanged; it is still written back.
    pub fn rename(&self, id: RecipeId, new_name: &str) -> Vec<Recipe> {
        let mut recipes = self.list_all();

        match recipes.iter_mut().find(|r| r.id == id) {
            Some(recipe) => {
                recipe.name = new_name.to_string();
                log::info!("Renamed recipe {}", id);
            }
            None => log::debug!("Rename of unknown recipe {} ignored", id),
        }

        self.save(&recipes);
        recipes
    }

    fn save(&self, recipes: &[Recipe]) {
        let json = match serde_json::to_string(recipes) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Could not serialize recipes: {}", e);
                return;
            }
        };

        if let Err(e) = self.storage.set_item(&self.key, &json) {
            log::warn!("Recipes not saved: {}", e);
        }
    }
}
