use egui::{Color32, Context, RichText};

use crate::QuizApp;
use crate::config::{APP_NAME, app_version};
use crate::ui::helpers::stat_grid;
use crate::ui::layout::{simple_panel, two_button_row};

pub fn ui_profile(app: &mut QuizApp, ctx: &Context) {
    let stats = app.stats();
    let has_results = !app.results.is_empty();
    let message = app.message.clone();
    let mut clear = false;

    simple_panel(ctx, |ui| {
        ui.heading("Profil");
        ui.add_space(8.0);

        if !message.is_empty() {
            ui.colored_label(Color32::from_rgb(248, 113, 113), &message);
            ui.add_space(6.0);
        }

        stat_grid(
            ui,
            &[
                ("Yechilgan testlar", stats.tests_taken.to_string(), None),
                ("O'rtacha ball", format!("{}%", stats.average_score), None),
                ("Eng yaxshi natija", format!("{}%", stats.best_score), None),
                ("Umumiy vaqt", stats.total_minutes.to_string(), Some("daqiqa")),
            ],
        );

        ui.add_space(16.0);
        ui.label(RichText::new("Sozlamalar").strong().size(16.0));
        ui.add_space(6.0);
        clear = ui
            .add_enabled(
                has_results,
                egui::Button::new(RichText::new("🗑 Barcha natijalarni o'chirish").color(Color32::from_rgb(248, 113, 113)))
                    .min_size(egui::vec2(ui.available_width(), 36.0)),
            )
            .clicked();

        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(format!("{APP_NAME} v{}", app_version())).small().weak());
        });
    });

    if clear {
        app.request_clear_results();
    }
}

/// Irreversible "delete all results" dialog.
pub fn confirm_clear(app: &mut QuizApp, ctx: &Context) {
    let mut confirm = false;
    let mut cancel = false;
    egui::Window::new("⚠ Natijalarni o'chirish")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label("Barcha test natijalari o'chiriladi. Bu amalni qaytarib bo'lmaydi.");
            ui.add_space(8.0);
            let width = ui.available_width().max(240.0);
            let (no, yes) = two_button_row(ui, width, ("Bekor qilish", true), ("O'chirish", true));
            cancel = no;
            confirm = yes;
        });

    if confirm {
        app.clear_results();
    } else if cancel {
        app.cancel_clear_results();
    }
}
