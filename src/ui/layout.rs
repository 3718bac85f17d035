use egui::{Button, CentralPanel, Context, Frame, RichText, ScrollArea, Ui};

use crate::QuizApp;
use crate::config::APP_NAME;
use crate::model::AppState;

pub const MAX_CONTENT_WIDTH: f32 = 640.0;

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            let title = ui.add(
                Button::new(RichText::new(format!("📝 {APP_NAME}")).heading().strong()).frame(false),
            );
            // Leaving a running quiz from the header is not allowed
            if title.clicked() && !matches!(app.state, AppState::Quiz { .. }) {
                app.go_home();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if app.dark_mode {
                    "☀ Kunduzgi rejim"
                } else {
                    "🌙 Tungi rejim"
                };
                if ui.button(label).clicked() {
                    app.toggle_theme(ctx);
                }
            });
        });
    });
}

pub fn bottom_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("nav_panel").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.columns(4, |cols| {
            let entries = [
                ("🏠", "Bosh sahifa", matches!(app.state, AppState::Home)),
                ("📚", "Testlar", matches!(app.state, AppState::Tests { .. })),
                (
                    "🏆",
                    "Natijalar",
                    matches!(app.state, AppState::Results | AppState::ResultDetail { .. }),
                ),
                ("👤", "Profil", matches!(app.state, AppState::Profile)),
            ];
            for (i, (icon, label, active)) in entries.into_iter().enumerate() {
                let text = RichText::new(format!("{icon}\n{label}"));
                let text = if active { text.strong() } else { text };
                let clicked = cols[i]
                    .vertical_centered(|ui| ui.selectable_label(active, text).clicked())
                    .inner;
                if clicked {
                    match i {
                        0 => app.go_home(),
                        1 => app.open_tests(None),
                        2 => app.open_results(),
                        _ => app.open_profile(),
                    }
                }
            }
        });
        ui.add_space(4.0);
    });
}

/// Scrollable central column, capped at `MAX_CONTENT_WIDTH`.
pub fn simple_panel(ctx: &Context, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                let w = ui.available_width().min(MAX_CONTENT_WIDTH);
                Frame::default()
                    .inner_margin(egui::Margin::symmetric(12, 12))
                    .show(ui, |ui| {
                        ui.set_width(w);
                        ui.with_layout(egui::Layout::top_down(egui::Align::Min), inner);
                    });
            });
        });
    });
}

/// Vertically and horizontally centred box for short messages.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    ui.vertical_centered(inner);
                });
        });
    });
}

/// Two equal buttons side by side, each with its enabled flag. Returns (left, right) clicks.
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left: (&str, bool),
    right: (&str, bool),
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_enabled(left.1, Button::new(left.0).min_size(egui::vec2(btn_w, 40.0)))
            .clicked();
        clicked_right = ui
            .add_enabled(right.1, Button::new(right.0).min_size(egui::vec2(btn_w, 40.0)))
            .clicked();
    });
    (clicked_left, clicked_right)
}
