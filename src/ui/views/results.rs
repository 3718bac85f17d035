use egui::{Context, Frame, RichText, Sense};

use crate::QuizApp;
use crate::ui::helpers::score_color;
use crate::ui::layout::simple_panel;

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let rows = app.result_rows();
    let mut open: Option<String> = None;
    let mut browse = false;

    simple_panel(ctx, |ui| {
        ui.heading("Natijalar");
        ui.add_space(8.0);

        if rows.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(32.0);
                ui.label(RichText::new("📊").size(36.0));
                ui.label(RichText::new("Hali natijalar yo'q").strong());
                ui.label("Birinchi testni yechib ko'ring!");
                ui.add_space(8.0);
                browse = ui.button("Testlarni ko'rish").clicked();
            });
            return;
        }

        for row in &rows {
            let response = Frame::group(ui.style())
                .inner_margin(egui::Margin::symmetric(12, 10))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(&row.test_title).strong());
                            ui.label(RichText::new(row.summary_line()).small().weak());
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                RichText::new(format!("{}%", row.score))
                                    .size(20.0)
                                    .strong()
                                    .color(score_color(row.band())),
                            );
                        });
                    });
                })
                .response
                .interact(Sense::click());
            if response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                open = Some(row.id.clone());
            }
            ui.add_space(6.0);
        }
    });

    if let Some(id) = open {
        app.open_result(&id);
    } else if browse {
        app.open_tests(None);
    }
}
