use egui::{Color32, Context, Frame, RichText};

use crate::QuizApp;
use crate::scoring::{ScoreBand, score_message};
use crate::ui::helpers::score_color;
use crate::ui::layout::{simple_panel, two_button_row};
use crate::ui::views::not_found::ui_not_found;
use crate::view_models::{OptionMark, format_duration_long, option_letter};

enum Action {
    Retake(String),
    MoreTests,
}

pub fn ui_result_detail(app: &mut QuizApp, ctx: &Context, result_id: &str) {
    let Some(result) = app.result_by_id(result_id).cloned() else {
        if ui_not_found(ctx, "Natija topilmadi", "Natijalarga qaytish") {
            app.open_results();
        }
        return;
    };
    // The test may have left the catalogue; the summary still shows.
    let review = app.review_rows(result_id).unwrap_or_default();
    let message = app.message.clone();
    let band = ScoreBand::of(result.score);
    let mut action = None;

    simple_panel(ctx, |ui| {
        if !message.is_empty() {
            ui.colored_label(Color32::from_rgb(250, 204, 21), &message);
            ui.add_space(6.0);
        }

        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&result.test_title).strong().size(18.0));
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("{}%", result.score))
                    .size(44.0)
                    .strong()
                    .color(score_color(band)),
            );
            ui.label(score_message(result.score));
            ui.add_space(4.0);
            ui.label(format!(
                "{} / {} to'g'ri javob",
                result.correct_answers, result.total_questions
            ));
            ui.label(RichText::new(format!("⏱ {}", format_duration_long(result.time_taken))).weak());
        });
        ui.add_space(10.0);

        let width = ui.available_width();
        let (retake, more) = two_button_row(ui, width, ("🔄 Qayta yechish", true), ("Boshqa testlar", true));
        if retake {
            action = Some(Action::Retake(result.test_id.clone()));
        } else if more {
            action = Some(Action::MoreTests);
        }

        if review.is_empty() {
            return;
        }
        ui.add_space(14.0);
        ui.label(RichText::new("Javoblar tahlili").strong().size(16.0));
        ui.add_space(6.0);

        for row in &review {
            Frame::group(ui.style())
                .inner_margin(egui::Margin::symmetric(12, 10))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    let (icon, color) = if row.is_correct {
                        ("✔", score_color(ScoreBand::High))
                    } else {
                        ("✖", score_color(ScoreBand::Low))
                    };
                    ui.horizontal_wrapped(|ui| {
                        ui.label(RichText::new(icon).color(color).strong());
                        ui.label(RichText::new(format!("{}. {}", row.number, row.question)).strong());
                    });
                    ui.add_space(4.0);
                    for (i, (text, mark)) in row.options.iter().enumerate() {
                        let line = format!("{}. {}", option_letter(i), text);
                        match mark {
                            OptionMark::Correct => {
                                ui.label(RichText::new(line).color(score_color(ScoreBand::High)).strong());
                            }
                            OptionMark::WrongPick => {
                                ui.label(RichText::new(line).color(score_color(ScoreBand::Low)).strikethrough());
                            }
                            OptionMark::Plain => {
                                ui.label(RichText::new(line).weak());
                            }
                        }
                    }
                });
            ui.add_space(6.0);
        }
    });

    match action {
        Some(Action::Retake(test_id)) => app.start_quiz(&test_id),
        Some(Action::MoreTests) => app.open_tests(None),
        None => {}
    }
}
