use egui::{Button, Context, Frame, RichText, TextEdit};

use crate::QuizApp;
use crate::ui::helpers::difficulty_color;
use crate::ui::layout::simple_panel;

enum Action {
    Filter(Option<String>),
    Start(String),
}

pub fn ui_test_list(app: &mut QuizApp, ctx: &Context) {
    let selected = app.selected_category().map(str::to_owned);
    let categories = app.category_infos();
    let mut action = None;

    simple_panel(ctx, |ui| {
        ui.heading("Testlar");
        ui.add_space(8.0);

        ui.add(
            TextEdit::singleline(&mut app.search_query)
                .hint_text("🔍 Test qidirish...")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            if ui.selectable_label(selected.is_none(), "Hammasi").clicked() {
                action = Some(Action::Filter(None));
            }
            for category in &categories {
                let is_selected = selected.as_deref() == Some(category.id.as_str());
                let label = format!("{} {}", category.icon, category.name);
                if ui.selectable_label(is_selected, label).clicked() {
                    action = Some(Action::Filter(Some(category.id.clone())));
                }
            }
        });
        ui.add_space(12.0);

        let cards = app.test_cards();
        if cards.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label(RichText::new("Test topilmadi").strong());
                ui.label("Boshqa kalit so'z yoki fan tanlab ko'ring.");
            });
            return;
        }

        for card in &cards {
            Frame::group(ui.style())
                .inner_margin(egui::Margin::symmetric(12, 10))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("{} {}", card.category_icon, card.title))
                                .strong()
                                .size(16.0),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                RichText::new(card.difficulty.label())
                                    .color(difficulty_color(card.difficulty)),
                            );
                        });
                    });
                    ui.label(RichText::new(&card.description).weak());
                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        ui.label(format!("❓ {} savol", card.question_count));
                        ui.label(format!("⏱ {} daqiqa", card.duration_min));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.add(Button::new("Boshlash")).clicked() {
                                action = Some(Action::Start(card.id.clone()));
                            }
                        });
                    });
                });
            ui.add_space(6.0);
        }
    });

    match action {
        Some(Action::Filter(category)) => app.set_category_filter(category),
        Some(Action::Start(test_id)) => app.start_quiz(&test_id),
        None => {}
    }
}
