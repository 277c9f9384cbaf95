//! Screen state for each route
//!
//! Each screen holds a snapshot read from a store on mount and the form
//! drafts the user is typing. Nothing here touches the DOM; the browser
//! shell in `main.rs` renders these and forwards input events.

pub mod forms;
pub mod screens;

pub use forms::{LoginForm, NewRecipeForm};
pub use screens::{EditScreen, ProfileScreen, RecipeListScreen};

/// Page title shown on the home screen
pub const TITLE: &str = "🍲 Receitas da Vovó";
pub const SUBTITLE: &str = "Descubra e compartilhe receitas deliciosas.";
/// Shown on the profile screen when nobody has logged in
pub const NO_USER: &str = "Nenhum usuário logado.";
