//! List, edit and profile screens

use crate::platform::{Clock, KeyValueStore};
use crate::profile::{UserProfile, UserProfileStore};
use crate::recipes::{Recipe, RecipeId, RecipeStore, filter_by_name};

/// `/receitas`: snapshot plus search box
#[derive(Debug, Clone, Default)]
pub struct RecipeListScreen {
    recipes: Vec<Recipe>,
    pub query: String,
}

impl RecipeListScreen {
    pub fn load<S: KeyValueStore, C: Clock>(store: &RecipeStore<S, C>) -> Self {
        Self {
            recipes: store.list_all(),
            query: String::new(),
        }
    }

    /// Recipes matching the current query, in stored order
    pub fn visible(&self) -> Vec<&Recipe> {
        filter_by_name(&self.recipes, &self.query)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// `/editar`: snapshot with at most one row being renamed
#[derive(Debug, Clone, Default)]
pub struct EditScreen {
    recipes: Vec<Recipe>,
    editing: Option<RecipeId>,
    /// Name being typed for the row in edit
    pub draft: String,
}

impl EditScreen {
    pub fn load<S: KeyValueStore, C: Clock>(store: &RecipeStore<S, C>) -> Self {
        Self {
            recipes: store.list_all(),
            editing: None,
            draft: String::new(),
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn editing(&self) -> Option<RecipeId> {
        self.editing
    }

    /// Open a row for editing, seeding the draft with its current name.
    ///
    /// Ids missing from the snapshot are ignored.
    pub fn start_edit(&mut self, id: RecipeId) {
        if let Some(recipe) = self.recipes.iter().find(|r| r.id == id) {
            self.draft = recipe.name.clone();
            self.editing = Some(id);
        }
    }

    /// Persist the draft name for the row in edit and close it.
    ///
    /// Does nothing when no row is open.
    pub fn save<S: KeyValueStore, C: Clock>(&mut self, store: &RecipeStore<S, C>) {
        let Some(id) = self.editing.take() else {
            return;
        };
        self.recipes = store.rename(id, &self.draft);
        self.draft.clear();
    }
}

/// `/perfil`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileScreen {
    pub profile: Option<UserProfile>,
}

impl ProfileScreen {
    pub fn load<S: KeyValueStore>(store: &UserProfileStore<S>) -> Self {
        Self {
            profile: store.current_profile(),
        }
    }

    /// (name, email) when someone is logged in
    pub fn details(&self) -> Option<(String, String)> {
        self.profile.as_ref().map(|p| (p.name.clone(), p.email()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{ManualClock, MemoryStorage};

    fn seeded(clock: &ManualClock) -> RecipeStore<MemoryStorage, &ManualClock> {
        let store = RecipeStore::new(MemoryStorage::new(), clock);
        store.create("Bolo de Cenoura", "Asse por 40 min");
        clock.advance(1);
        store.create("Pão de Queijo", "Misture e asse");
        clock.advance(1);
        store.create("Bolo de Fubá", "Asse");
        store
    }

    #[test]
    fn test_list_screen_filters_snapshot() {
        let clock = ManualClock::new(10);
        let store = seeded(&clock);
        let mut screen = RecipeListScreen::load(&store);
        assert_eq!(screen.visible().len(), 3);

        screen.query = "BOLO".to_string();
        let names: Vec<_> = screen.visible().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Bolo de Cenoura", "Bolo de Fubá"]);

        // snapshot does not follow later writes
        store.create("Bolo de Milho", "");
        assert_eq!(screen.visible().len(), 2);
        assert_eq!(screen.len(), 3);
    }

    #[test]
    fn test_edit_flow() {
        let clock = ManualClock::new(10);
        let store = seeded(&clock);
        let mut screen = EditScreen::load(&store);

        screen.start_edit(11);
        assert_eq!(screen.editing(), Some(11));
        assert_eq!(screen.draft, "Pão de Queijo");

        screen.draft = "Pão de Queijo Mineiro".to_string();
        screen.save(&store);

        assert_eq!(screen.editing(), None);
        assert_eq!(screen.recipes()[1].name, "Pão de Queijo Mineiro");
        assert_eq!(screen.recipes()[1].preparation, "Misture e asse");
        assert_eq!(store.list_all(), screen.recipes());
    }

    #[test]
    fn test_edit_save_without_open_row() {
        let clock = ManualClock::new(10);
        let store = seeded(&clock);
        let before = store.list_all();
        let mut screen = EditScreen::load(&store);

        screen.draft = "ignored".to_string();
        screen.save(&store);
        screen.start_edit(999);
        screen.save(&store);

        assert_eq!(screen.editing(), None);
        assert_eq!(store.list_all(), before);
    }

    #[test]
    fn test_edit_switches_rows() {
        let clock = ManualClock::new(10);
        let store = seeded(&clock);
        let mut screen = EditScreen::load(&store);

        screen.start_edit(10);
        screen.draft = "half typed".to_string();
        screen.start_edit(12);
        assert_eq!(screen.editing(), Some(12));
        assert_eq!(screen.draft, "Bolo de Fubá");
    }

    #[test]
    fn test_profile_screen() {
        let store = UserProfileStore::new(MemoryStorage::new());
        assert_eq!(ProfileScreen::load(&store).details(), None);

        store.login("Ana");
        assert_eq!(
            ProfileScreen::load(&store).details(),
            Some(("Ana".to_string(), "ana@email.com".to_string()))
        );
    }
}
