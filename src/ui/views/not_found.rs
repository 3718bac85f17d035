use egui::{Context, RichText};

use crate::ui::layout::centered_panel;

/// "Not found" card with one button back to a list. Returns true when clicked.
pub fn ui_not_found(ctx: &Context, title: &str, back_label: &str) -> bool {
    let mut back = false;
    centered_panel(ctx, 160.0, 360.0, |ui| {
        ui.label(RichText::new("🔍").size(36.0));
        ui.add_space(6.0);
        ui.label(RichText::new(title).strong().size(18.0));
        ui.add_space(12.0);
        back = ui.button(back_label).clicked();
    });
    back
}
