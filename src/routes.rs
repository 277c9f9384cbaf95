//! Screen routes
//!
//! The browser shell routes on the URL hash (`#/receitas`) so the app can be
//! served from any static host.

/// One screen of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Recipes,
    NewRecipe,
    EditRecipes,
    Profile,
    Login,
}

impl Route {
    /// Navigation order
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Recipes,
        Route::NewRecipe,
        Route::EditRecipes,
        Route::Profile,
        Route::Login,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Recipes => "/receitas",
            Route::NewRecipe => "/nova",
            Route::EditRecipes => "/editar",
            Route::Profile => "/perfil",
            Route::Login => "/login",
        }
    }

    /// Navigation bar label
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Recipes => "Receitas",
            Route::NewRecipe => "Nova Receita",
            Route::EditRecipes => "Editar",
            Route::Profile => "Perfil",
            Route::Login => "Login",
        }
    }

    /// Parse a path; unknown paths fall back to `Home`
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        Self::ALL
            .into_iter()
            .find(|r| r.path().trim_end_matches('/') == path)
            .unwrap_or_default()
    }

    /// Parse a `location.hash` value such as `#/nova`
    pub fn from_hash(hash: &str) -> Self {
        Self::from_path(hash.strip_prefix('#').unwrap_or(hash))
    }

    pub fn hash(&self) -> String {
        format!("#{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), route);
            assert_eq!(Route::from_hash(&route.hash()), route);
        }
    }

    #[test]
    fn test_unknown_and_empty_paths() {
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_hash(""), Route::Home);
        assert_eq!(Route::from_hash("#"), Route::Home);
        assert_eq!(Route::from_path("/sobremesas"), Route::Home);
    }

    #[test]
    fn test_trailing_slash() {
        assert_eq!(Route::from_path("/receitas/"), Route::Recipes);
        assert_eq!(Route::from_hash("#/perfil/"), Route::Profile);
    }
}
