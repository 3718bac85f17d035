use egui::{Button, Color32, Context, Frame, ProgressBar, RichText, ScrollArea, Stroke};

use crate::QuizApp;
use crate::ui::layout::{simple_panel, two_button_row};
use crate::ui::views::not_found::ui_not_found;
use crate::view_models::{format_clock, option_letter};

enum Action {
    Select(usize),
    GoTo(usize),
    Previous,
    Next,
    Finish,
}

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let Some(session) = app.session.as_ref() else {
        if ui_not_found(ctx, "Test topilmadi", "Testlarga qaytish") {
            app.open_tests(None);
        }
        return;
    };

    let title = session.test().title.clone();
    let total = session.question_count();
    let current = session.current_index();
    let answered = session.answered_count();
    let progress = session.progress();
    let remaining = session.remaining_secs();
    let warning = session.is_time_warning();
    let is_first = session.is_first();
    let is_last = session.is_last();
    let submitted = session.is_submitted();
    let marks: Vec<bool> = (0..total).map(|i| session.selected(i).is_some()).collect();
    let selected_now = session.selected(current);
    let Some(question) = session.current_question().cloned() else {
        if ui_not_found(ctx, "Testda savollar yo'q", "Testlarga qaytish") {
            app.open_tests(None);
        }
        return;
    };

    let mut action = None;

    simple_panel(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(&title).strong().size(18.0));
                ui.label(RichText::new(format!("Savol {} / {}", current + 1, total)).small());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let color = if warning {
                    Color32::from_rgb(248, 113, 113)
                } else {
                    ui.visuals().strong_text_color()
                };
                ui.label(
                    RichText::new(format!("⏱ {}", format_clock(remaining)))
                        .monospace()
                        .size(18.0)
                        .color(color),
                );
            });
        });
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label(RichText::new("Jarayon").small());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(format!("{answered} / {total}")).small().strong());
            });
        });
        ui.add(ProgressBar::new(progress).desired_height(8.0));
        ui.add_space(8.0);

        // Question strip: current, answered, unanswered
        ScrollArea::horizontal().id_salt("question_strip").show(ui, |ui| {
            ui.horizontal(|ui| {
                for (i, is_answered) in marks.iter().enumerate() {
                    let text = RichText::new((i + 1).to_string()).strong();
                    let mut button = Button::new(text).min_size(egui::vec2(32.0, 32.0));
                    if i == current {
                        button = button.fill(ui.visuals().selection.bg_fill);
                    } else if *is_answered {
                        button = button.fill(ui.visuals().widgets.active.weak_bg_fill);
                    }
                    if ui.add(button).clicked() {
                        action = Some(Action::GoTo(i));
                    }
                }
            });
        });
        ui.add_space(10.0);

        Frame::group(ui.style())
            .inner_margin(egui::Margin::symmetric(14, 14))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(&question.question).strong().size(16.0));
                ui.add_space(10.0);

                for (i, option) in question.options.iter().enumerate() {
                    let is_selected = selected_now == Some(i);
                    let mut text = format!("{}   {}", option_letter(i), option);
                    if is_selected {
                        text.push_str("   ✔");
                    }
                    let mut button = Button::new(RichText::new(text).size(15.0))
                        .min_size(egui::vec2(ui.available_width(), 40.0))
                        .selected(is_selected);
                    if is_selected {
                        button = button.stroke(Stroke::new(2.0, ui.visuals().selection.stroke.color));
                    }
                    if ui.add_enabled(!submitted, button).clicked() {
                        action = Some(Action::Select(i));
                    }
                    ui.add_space(4.0);
                }
            });
        ui.add_space(10.0);

        let width = ui.available_width();
        let right = if is_last { "✔ Yakunlash" } else { "Keyingi ▶" };
        let (prev, next) = two_button_row(ui, width, ("◀ Oldingi", !is_first), (right, !submitted));
        if prev {
            action = Some(Action::Previous);
        }
        if next {
            action = Some(if is_last { Action::Finish } else { Action::Next });
        }
    });

    match action {
        Some(Action::Select(option)) => app.select_answer(option),
        Some(Action::GoTo(index)) => app.go_to_question(index),
        Some(Action::Previous) => app.previous_question(),
        Some(Action::Next) => app.next_question(),
        Some(Action::Finish) => app.request_submit(),
        None => {}
    }
}

/// "Finish the test?" dialog with the answered / unanswered counts.
pub fn confirm_submit(app: &mut QuizApp, ctx: &Context) {
    let Some(session) = app.session.as_ref() else {
        app.cancel_submit();
        return;
    };
    let answered = session.answered_count();
    let unanswered = session.unanswered_count();

    let mut confirm = false;
    let mut cancel = false;
    egui::Window::new("⚠ Testni yakunlash")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label(format!("{answered} ta savolga javob berildi"));
            if unanswered > 0 {
                ui.label(
                    RichText::new(format!("{unanswered} ta savol javobsiz!"))
                        .color(Color32::from_rgb(250, 204, 21)),
                );
            }
            ui.add_space(8.0);
            let width = ui.available_width().max(240.0);
            let (no, yes) = two_button_row(ui, width, ("Bekor", true), ("Tasdiqlash", true));
            cancel = no;
            confirm = yes;
        });

    if confirm {
        app.submit_quiz();
    } else if cancel {
        app.cancel_submit();
    }
}
