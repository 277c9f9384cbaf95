//! Input forms: new recipe and login

use crate::platform::{Clock, KeyValueStore};
use crate::profile::UserProfileStore;
use crate::recipes::{Recipe, RecipeStore};
use crate::routes::Route;

/// `/nova` form drafts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRecipeForm {
    pub name: String,
    pub preparation: String,
}

impl NewRecipeForm {
    /// Save the recipe and return it with the route to navigate to.
    ///
    /// No validation: empty fields are saved as-is.
    pub fn submit<S: KeyValueStore, C: Clock>(
        &mut self,
        store: &RecipeStore<S, C>,
    ) -> (Recipe, Route) {
        let recipe = store.create(&self.name, &self.preparation);
        *self = Self::default();
        (recipe, Route::Recipes)
    }
}

/// `/login` form draft
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub name: String,
}

impl LoginForm {
    pub fn submit<S: KeyValueStore>(&mut self, store: &UserProfileStore<S>) -> Route {
        store.login(&self.name);
        self.name.clear();
        Route::Profile
    }
}
