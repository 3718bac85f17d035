//! Browser glue: the current route lives in the URL hash (`#/results/…`).

use eframe::wasm_bindgen::JsCast as _;
use eframe::wasm_bindgen::closure::Closure;

use crate::app::QuizApp;
use crate::model::AppState;

pub fn current_route() -> Option<AppState> {
    let hash = web_sys::window()?.location().hash().ok()?;
    if hash.trim_start_matches('#').is_empty() {
        return None;
    }
    Some(AppState::from_path(&hash))
}

/// Repaints on `hashchange` so back / forward are picked up without input.
pub fn install_hash_listener(ctx: &egui::Context) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let ctx = ctx.clone();
    let on_change = Closure::<dyn FnMut()>::new(move || ctx.request_repaint());
    window.set_onhashchange(Some(on_change.as_ref().unchecked_ref()));
    // Lives as long as the page
    on_change.forget();
}

/// Follows a changed URL hash, or writes the app's route into it.
pub fn sync_route(app: &mut QuizApp) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let hash = location.hash().unwrap_or_default();
    if let Some(path) = app.sync_with_location(&hash) {
        if let Err(e) = location.set_hash(&path) {
            log::warn!("could not update location hash: {e:?}");
        }
    }
}
