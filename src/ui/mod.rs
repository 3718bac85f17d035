mod helpers;
pub mod layout;
pub mod views;

use std::time::Duration;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Countdown: keep frames coming while a quiz is running
        let now = ctx.input(|i| i.time);
        if self.tick_timer(now) {
            ctx.request_repaint_after(Duration::from_millis(250));
        }

        top_panel(self, ctx);

        // No bottom navigation while taking a quiz
        if !matches!(self.state, AppState::Quiz { .. }) {
            bottom_panel(self, ctx);
        }

        // One view per screen
        match self.state.clone() {
            AppState::Home => views::home::ui_home(self, ctx),
            AppState::Tests { .. } => views::test_list::ui_test_list(self, ctx),
            AppState::Quiz { .. } => views::quiz::ui_quiz(self, ctx),
            AppState::Results => views::results::ui_results(self, ctx),
            AppState::ResultDetail { result_id } => {
                views::result_detail::ui_result_detail(self, ctx, &result_id)
            }
            AppState::Profile => views::profile::ui_profile(self, ctx),
        }

        if self.confirm_submit {
            views::quiz::confirm_submit(self, ctx);
        }
        if self.confirm_clear {
            views::profile::confirm_clear(self, ctx);
        }

        #[cfg(target_arch = "wasm32")]
        crate::web::sync_route(self);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, self);
    }
}
