use crate::catalogue::Catalogue;
use crate::model::{AppState, TestResult};
use crate::session::QuizSession;
use crate::storage::ResultStore;
use serde::{Deserialize, Serialize};

// Per-concern impl blocks
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod view_models;

pub use crate::view_models::{CategoryInfo, ResultRow, ReviewRow, TestCardInfo};

/// Whole application state. Only the theme survives restarts through eframe
/// storage; results live in [`ResultStore`].
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct QuizApp {
    pub dark_mode: bool,
    #[serde(skip)]
    pub catalogue: Catalogue,
    #[serde(skip)]
    pub store: ResultStore,
    #[serde(skip)]
    pub results: Vec<TestResult>,
    #[serde(skip)]
    pub state: AppState,
    #[serde(skip)]
    pub session: Option<QuizSession>,
    #[serde(skip)]
    pub search_query: String,
    #[serde(skip)]
    pub confirm_submit: bool,
    #[serde(skip)]
    pub confirm_clear: bool,
    #[serde(skip)]
    pub message: String,
    /// Route last written to the page URL (web build).
    #[serde(skip)]
    pub synced_path: String,
}

impl Default for QuizApp {
    fn default() -> Self {
        Self {
            dark_mode: true,
            catalogue: Catalogue::default(),
            store: ResultStore::default(),
            results: Vec::new(),
            state: AppState::Home,
            session: None,
            search_query: String::new(),
            confirm_submit: false,
            confirm_clear: false,
            message: String::new(),
            synced_path: String::new(),
        }
    }
}

impl QuizApp {
    /// Builds the app around an explicit catalogue and result store.
    pub fn with_store(catalogue: Catalogue, store: ResultStore) -> Self {
        let mut app = Self {
            catalogue,
            store,
            ..Self::default()
        };
        app.reload_results();
        app
    }

    /// Entry point used by eframe: restores preferences, opens the platform
    /// store and jumps to the initial route.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: QuizApp = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        app.catalogue = Catalogue::embedded().unwrap_or_else(|e| {
            log::error!("embedded catalogue is invalid: {e}");
            Catalogue::default()
        });
        app.store = platform_store();
        app.reload_results();
        log::info!(
            "loaded {} tests, {} stored results",
            app.catalogue.tests().len(),
            app.results.len()
        );

        app.apply_theme(&cc.egui_ctx);
        #[cfg(target_arch = "wasm32")]
        crate::web::install_hash_listener(&cc.egui_ctx);
        app.navigate(initial_route());
        app
    }

    pub fn apply_theme(&self, ctx: &egui::Context) {
        if self.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }
    }

    pub fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.dark_mode = !self.dark_mode;
        self.apply_theme(ctx);
    }

    /// Re-reads the result list, as every screen showing history does on entry.
    pub fn reload_results(&mut self) {
        self.results = self.store.load();
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_store() -> ResultStore {
    let config = crate::config::AppConfig::from_env();
    log::debug!("storing results in {}", config.data_dir.display());
    ResultStore::new(crate::storage::FileStore::new(config.data_dir))
}

#[cfg(target_arch = "wasm32")]
fn platform_store() -> ResultStore {
    ResultStore::new(crate::storage::LocalStorage)
}

#[cfg(not(target_arch = "wasm32"))]
fn initial_route() -> AppState {
    AppState::Home
}

#[cfg(target_arch = "wasm32")]
fn initial_route() -> AppState {
    crate::web::current_route().unwrap_or_default()
}
