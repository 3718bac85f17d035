// src/ui/helpers.rs
use egui::{Button, Color32, Frame, RichText, Ui, Vec2};

use crate::model::Difficulty;
use crate::scoring::ScoreBand;

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

pub fn score_color(band: ScoreBand) -> Color32 {
    match band {
        ScoreBand::High => Color32::from_rgb(74, 222, 128),
        ScoreBand::Medium => Color32::from_rgb(250, 204, 21),
        ScoreBand::Low => Color32::from_rgb(248, 113, 113),
    }
}

pub fn difficulty_color(difficulty: Difficulty) -> Color32 {
    match difficulty {
        Difficulty::Easy => score_color(ScoreBand::High),
        Difficulty::Medium => score_color(ScoreBand::Medium),
        Difficulty::Hard => score_color(ScoreBand::Low),
    }
}

/// Card with a large value, a title and an optional unit line.
pub fn stat_tile(ui: &mut Ui, width: f32, title: &str, value: String, subtitle: Option<&str>) {
    Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(8, 8))
        .show(ui, |ui| {
            ui.set_width(width);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(value).size(22.0).strong());
                if let Some(sub) = subtitle {
                    ui.label(RichText::new(sub).small());
                }
                ui.label(RichText::new(title).weak());
            });
        });
}

/// Grid of stat tiles, two per row.
pub fn stat_grid(ui: &mut Ui, tiles: &[(&str, String, Option<&str>)]) {
    let tile_w = (ui.available_width() - 32.0) / 2.0;
    for pair in tiles.chunks(2) {
        ui.horizontal(|ui| {
            for (title, value, subtitle) in pair {
                stat_tile(ui, tile_w, title, value.clone(), *subtitle);
            }
        });
        ui.add_space(4.0);
    }
}
