//! Receitas da Vovó entry point
//!
//! Mounts the app into the page on wasm32. The native build runs a short
//! scripted session against in-memory storage.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlInputElement, HtmlTextAreaElement};

    use recipe_box::platform::{KeyValueStore, LocalStorage, MemoryStorage, SystemClock};
    use recipe_box::ui::{
        self, EditScreen, LoginForm, NewRecipeForm, ProfileScreen, RecipeListScreen,
    };
    use recipe_box::{AppConfig, Recipe, RecipeStore, Route, UserProfileStore};

    type Storage = Rc<dyn KeyValueStore>;

    /// App instance holding stores and the mounted screen
    struct App {
        recipes: RecipeStore<Storage, SystemClock>,
        profiles: UserProfileStore<Storage>,
        route: Route,
        list: RecipeListScreen,
        edit: EditScreen,
        new_recipe: NewRecipeForm,
        login: LoginForm,
        profile: ProfileScreen,
    }

    impl App {
        fn new(storage: Storage, config: &AppConfig) -> Self {
            Self {
                recipes: RecipeStore::with_keys(storage.clone(), SystemClock, &config.keys),
                profiles: UserProfileStore::with_config(storage, config),
                route: Route::Home,
                list: RecipeListScreen::default(),
                edit: EditScreen::default(),
                new_recipe: NewRecipeForm::default(),
                login: LoginForm::default(),
                profile: ProfileScreen::default(),
            }
        }

        /// Switch screens, taking a fresh snapshot from storage
        fn mount(&mut self, route: Route) {
            self.route = route;
            match route {
                Route::Home => {}
                Route::Recipes => self.list = RecipeListScreen::load(&self.recipes),
                Route::NewRecipe => self.new_recipe = NewRecipeForm::default(),
                Route::EditRecipes => self.edit = EditScreen::load(&self.recipes),
                Route::Profile => self.profile = ProfileScreen::load(&self.profiles),
                Route::Login => self.login = LoginForm::default(),
            }
            log::debug!("Mounted {}", route.path());
        }
    }

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn element(doc: &Document, tag: &str, class: &str, text: Option<&str>) -> Option<Element> {
        let el = doc.create_element(tag).ok()?;
        if !class.is_empty() {
            el.set_class_name(class);
        }
        if text.is_some() {
            el.set_text_content(text);
        }
        Some(el)
    }

    fn input(doc: &Document, placeholder: &str, value: &str) -> Option<HtmlInputElement> {
        let el: HtmlInputElement = doc.create_element("input").ok()?.dyn_into().ok()?;
        el.set_class_name("input");
        el.set_placeholder(placeholder);
        el.set_value(value);
        Some(el)
    }

    fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F)
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Mount `route`, redraw, and point the URL hash at it
    fn navigate(app: &Rc<RefCell<App>>, route: Route) {
        app.borrow_mut().mount(route);
        render(app);
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(route.path());
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();

        let window = web_sys::window();
        let search = window
            .as_ref()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let config = AppConfig::from_query(&search);
        if let Some(level) = config.log_level.to_level() {
            let _ = console_log::init_with_level(level);
        }

        log::info!("Receitas da Vovó starting...");

        let storage: Storage = match LocalStorage::open() {
            Ok(storage) => Rc::new(storage),
            Err(e) => {
                log::warn!("{}; recipes will not survive a reload", e);
                Rc::new(MemoryStorage::new())
            }
        };

        let app = Rc::new(RefCell::new(App::new(storage, &config)));

        let hash = window
            .as_ref()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        app.borrow_mut().mount(Route::from_hash(&hash));
        render(&app);

        // Back/forward and nav links
        if let Some(window) = window {
            let app = app.clone();
            listen(&window, "hashchange", move |_event| {
                let hash = web_sys::window()
                    .and_then(|w| w.location().hash().ok())
                    .unwrap_or_default();
                let route = Route::from_hash(&hash);
                if app.borrow().route != route {
                    app.borrow_mut().mount(route);
                    render(&app);
                }
            });
        }

        log::info!("Receitas da Vovó running!");
    }

    fn render(app: &Rc<RefCell<App>>) {
        let Some(doc) = document() else {
            return;
        };
        let route = app.borrow().route;

        if let Some(nav) = doc.get_element_by_id("nav") {
            render_nav(&doc, &nav, route);
        }

        let Some(container) = doc.get_element_by_id("page") else {
            log::error!("No #page element to render into");
            return;
        };
        container.set_inner_html("");

        let page = match route {
            Route::Home => render_home(&doc),
            Route::Recipes => render_recipes(&doc, app),
            Route::NewRecipe => render_new_recipe(&doc, app),
            Route::EditRecipes => render_edit(&doc, app),
            Route::Profile => render_profile(&doc, app),
            Route::Login => render_login(&doc, app),
        };
        if let Some(page) = page {
            let _ = container.append_child(&page);
        }
    }

    fn render_nav(doc: &Document, nav: &Element, current: Route) {
        nav.set_inner_html("");
        for route in Route::ALL {
            let class = if route == current {
                "nav-link active"
            } else {
                "nav-link"
            };
            if let Some(link) = element(doc, "a", class, Some(route.label())) {
                let _ = link.set_attribute("href", &route.hash());
                let _ = nav.append_child(&link);
            }
        }
    }

    fn page(doc: &Document, title: &str) -> Option<Element> {
        let page = element(doc, "div", "page", None)?;
        page.append_child(&element(doc, "h1", "title", Some(title))?).ok()?;
        Some(page)
    }

    fn render_home(doc: &Document) -> Option<Element> {
        let page = page(doc, ui::TITLE)?;
        page.append_child(&element(doc, "p", "subtitle", Some(ui::SUBTITLE))?)
            .ok()?;
        Some(page)
    }

    fn render_recipes(doc: &Document, app: &Rc<RefCell<App>>) -> Option<Element> {
        let page = page(doc, "📋 Lista de Receitas")?;
        let search = input(doc, "Buscar receita...", &app.borrow().list.query)?;
        let list = element(doc, "ul", "recipe-list", None)?;
        fill_recipe_list(doc, &list, &app.borrow().list.visible());

        // Only the list is redrawn so the search box keeps focus
        {
            let app = app.clone();
            let doc = doc.clone();
            let list = list.clone();
            let search_el = search.clone();
            listen(&search, "input", move |_event| {
                app.borrow_mut().list.query = search_el.value();
                list.set_inner_html("");
                fill_recipe_list(&doc, &list, &app.borrow().list.visible());
            });
        }

        page.append_child(&search).ok()?;
        page.append_child(&list).ok()?;
        Some(page)
    }

    fn fill_recipe_list(doc: &Document, list: &Element, recipes: &[&Recipe]) {
        for recipe in recipes {
            if let Some(item) = element(doc, "li", "recipe-item", Some(recipe.name.as_str())) {
                let _ = list.append_child(&item);
            }
        }
    }

    fn render_new_recipe(doc: &Document, app: &Rc<RefCell<App>>) -> Option<Element> {
        let page = page(doc, "➕ Nova Receita")?;
        let form = element(doc, "form", "form", None)?;

        let name = input(doc, "Nome da receita", &app.borrow().new_recipe.name)?;
        let preparation: HtmlTextAreaElement =
            doc.create_element("textarea").ok()?.dyn_into().ok()?;
        preparation.set_class_name("textarea");
        preparation.set_placeholder("Modo de preparo");
        preparation.set_value(&app.borrow().new_recipe.preparation);

        let button = element(doc, "button", "button", Some("Salvar"))?;
        let _ = button.set_attribute("type", "submit");

        {
            let app = app.clone();
            let name = name.clone();
            let preparation = preparation.clone();
            listen(&form, "submit", move |event| {
                event.prevent_default();
                let next = {
                    let mut guard = app.borrow_mut();
                    let state = &mut *guard;
                    state.new_recipe.name = name.value();
                    state.new_recipe.preparation = preparation.value();
                    state.new_recipe.submit(&state.recipes).1
                };
                navigate(&app, next);
            });
        }

        form.append_child(&name).ok()?;
        form.append_child(&preparation).ok()?;
        form.append_child(&button).ok()?;
        page.append_child(&form).ok()?;
        Some(page)
    }

    fn render_edit(doc: &Document, app: &Rc<RefCell<App>>) -> Option<Element> {
        let page = page(doc, "✏️ Editar Receitas")?;
        let list = element(doc, "ul", "recipe-list", None)?;

        let (recipes, editing, draft) = {
            let state = app.borrow();
            (
                state.edit.recipes().to_vec(),
                state.edit.editing(),
                state.edit.draft.clone(),
            )
        };

        for recipe in &recipes {
            let item = element(doc, "li", "recipe-item", None)?;

            if editing == Some(recipe.id) {
                let field = input(doc, "", &draft)?;
                let save = element(doc, "button", "button", Some("Salvar"))?;
                {
                    let app = app.clone();
                    let field = field.clone();
                    listen(&save, "click", move |_event| {
                        {
                            let mut guard = app.borrow_mut();
                            let state = &mut *guard;
                            state.edit.draft = field.value();
                            state.edit.save(&state.recipes);
                        }
                        render(&app);
                    });
                }
                item.append_child(&field).ok()?;
                item.append_child(&save).ok()?;
            } else {
                let name = element(doc, "strong", "", Some(recipe.name.as_str()))?;
                let edit = element(doc, "button", "edit-button", Some("Editar"))?;
                {
                    let app = app.clone();
                    let id = recipe.id;
                    listen(&edit, "click", move |_event| {
                        app.borrow_mut().edit.start_edit(id);
                        render(&app);
                    });
                }
                item.append_child(&name).ok()?;
                item.append_child(&edit).ok()?;
            }

            list.append_child(&item).ok()?;
        }

        page.append_child(&list).ok()?;
        Some(page)
    }

    fn render_profile(doc: &Document, app: &Rc<RefCell<App>>) -> Option<Element> {
        let page = page(doc, "👤 Perfil do Usuário")?;

        match app.borrow().profile.details() {
            Some((name, email)) => {
                for (label, value) in [("Nome:", name), ("Email:", email)] {
                    let line = element(doc, "p", "", None)?;
                    line.append_child(&element(doc, "strong", "", Some(label))?)
                        .ok()?;
                    let text = doc.create_text_node(&format!(" {}", value));
                    line.append_child(&text).ok()?;
                    page.append_child(&line).ok()?;
                }
            }
            None => {
                page.append_child(&element(doc, "p", "", Some(ui::NO_USER))?)
                    .ok()?;
            }
        }

        Some(page)
    }

    fn render_login(doc: &Document, app: &Rc<RefCell<App>>) -> Option<Element> {
        let page = page(doc, "🔐 Login")?;
        let form = element(doc, "form", "form", None)?;
        let name = input(doc, "Nome de usuário", &app.borrow().login.name)?;
        let button = element(doc, "button", "button", Some("Entrar"))?;
        let _ = button.set_attribute("type", "submit");

        {
            let app = app.clone();
            let name = name.clone();
            listen(&form, "submit", move |event| {
                event.prevent_default();
                let next = {
                    let mut guard = app.borrow_mut();
                    let state = &mut *guard;
                    state.login.name = name.value();
                    state.login.submit(&state.profiles)
                };
                navigate(&app, next);
            });
        }

        form.append_child(&name).ok()?;
        form.append_child(&button).ok()?;
        page.append_child(&form).ok()?;
        Some(page)
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Receitas da Vovó (native) starting...");
    log::info!("The app runs in the browser - build with `trunk serve` for the web version");

    println!("\nRunning a scripted session against in-memory storage...");
    scripted_session();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn scripted_session() {
    use recipe_box::platform::{MemoryStorage, SystemClock};
    use recipe_box::ui::{EditScreen, LoginForm, NewRecipeForm, ProfileScreen, RecipeListScreen};
    use recipe_box::{RecipeStore, UserProfileStore};

    let storage = MemoryStorage::new();
    let recipes = RecipeStore::new(storage.clone(), SystemClock);
    let profiles = UserProfileStore::new(storage.clone());

    for (name, preparation) in [
        ("Pão de Queijo", "Misture e asse"),
        ("Bolo de Cenoura", "Bata e asse por 40 minutos"),
    ] {
        let mut form = NewRecipeForm {
            name: name.to_string(),
            preparation: preparation.to_string(),
        };
        let (recipe, _) = form.submit(&recipes);
        println!("  created {} -> {}", recipe.id, recipe.name);
    }

    let mut edit = EditScreen::load(&recipes);
    if let Some(first) = edit.recipes().first().map(|r| r.id) {
        edit.start_edit(first);
        edit.draft = "Pão de Queijo Mineiro".to_string();
        edit.save(&recipes);
    }

    let mut list = RecipeListScreen::load(&recipes);
    list.query = "queijo".to_string();
    for recipe in list.visible() {
        println!("  search 'queijo': {}", recipe.name);
    }

    LoginForm {
        name: "Ana".to_string(),
    }
    .submit(&profiles);
    if let Some((name, email)) = ProfileScreen::load(&profiles).details() {
        println!("  logged in: {} <{}>", name, email);
    }

    println!("✓ {} recipes stored", recipes.list_all().len());
}
