use egui::{Button, Context, RichText};

use crate::QuizApp;
use crate::config::APP_NAME;
use crate::ui::helpers::{big_list_button, stat_grid};
use crate::ui::layout::simple_panel;

pub fn ui_home(app: &mut QuizApp, ctx: &Context) {
    // Precomputed so the closures below only need `app` for actions
    let stats = app.stats();
    let available = app.catalogue.tests().len();
    let categories = app.category_infos();

    let mut open_tests: Option<Option<String>> = None;

    simple_panel(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.heading(RichText::new(APP_NAME).size(30.0).strong());
            ui.add_space(6.0);
            ui.label(
                "Bilimingizni sinab ko'ring! Turli fanlar bo'yicha testlarni yeching va o'z natijalaringizni kuzating.",
            );
            ui.add_space(10.0);
            if ui
                .add(Button::new("Testlarni boshlash ➡").min_size(egui::vec2(220.0, 40.0)))
                .clicked()
            {
                open_tests = Some(None);
            }
        });

        ui.add_space(16.0);
        ui.label(RichText::new("Statistika").strong().size(18.0));
        ui.add_space(6.0);
        stat_grid(
            ui,
            &[
                ("Yechilgan", stats.tests_taken.to_string(), None),
                ("O'rtacha ball", format!("{}%", stats.average_score), None),
                ("Vaqt", stats.total_minutes.to_string(), Some("daqiqa")),
                ("Mavjud", available.to_string(), Some("test")),
            ],
        );

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Fanlar").strong().size(18.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.link("Hammasi").clicked() {
                    open_tests = Some(None);
                }
            });
        });
        ui.add_space(6.0);

        let btn_w = (ui.available_width() - 8.0) / 2.0;
        for pair in categories.chunks(2) {
            ui.horizontal(|ui| {
                for category in pair {
                    if big_list_button(ui, category.label(), btn_w, 64.0, true) {
                        open_tests = Some(Some(category.id.clone()));
                    }
                }
            });
            ui.add_space(4.0);
        }
    });

    if let Some(category) = open_tests {
        app.open_tests(category);
    }
}
