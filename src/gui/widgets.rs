use eframe::egui::{
    self,
    Color32,
    Response,
    RichText,
    Stroke,
};

use super::theme::Theme;

/// Five stars, the first `filled` of them golden, with an optional review
/// count trailing.
pub fn star_row(ui: &mut egui::Ui, theme: &Theme, filled: usize, reviews: Option<u32>) {
    let gold = theme.gold(ui.ctx());
    let faint = theme.muted(ui.ctx()).gamma_multiply(0.4);

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;
        for i in 0..5 {
            let color = if i < filled { gold } else { faint };
            ui.label(RichText::new("★").color(color).size(15.0));
        }
        if let Some(count) = reviews {
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("({} reviews)", count))
                    .color(theme.muted(ui.ctx()))
                    .size(12.5),
            );
        }
    });
}

/// Solid rounded call-to-action button.
pub fn filled_pill(ui: &mut egui::Ui, label: &str, fill: Color32) -> Response {
    ui.add(
        egui::Button::new(RichText::new(label).color(Color32::WHITE).strong())
            .fill(fill)
            .corner_radius(999.0)
            .min_size(egui::vec2(0.0, 34.0)),
    )
}

/// Outlined rounded button in the accent color.
pub fn outlined_pill(ui: &mut egui::Ui, label: &str, accent: Color32) -> Response {
    ui.add(
        egui::Button::new(RichText::new(label).color(accent).strong())
            .fill(Color32::TRANSPARENT)
            .stroke(Stroke::new(1.5, accent))
            .corner_radius(999.0)
            .min_size(egui::vec2(0.0, 34.0)),
    )
}

/// Small circular button for steppers and the favorite toggle.
pub fn round_button(ui: &mut egui::Ui, glyph: &str, accent: Color32) -> Response {
    ui.add(
        egui::Button::new(RichText::new(glyph).color(accent))
            .fill(Color32::TRANSPARENT)
            .stroke(Stroke::new(1.0, accent))
            .corner_radius(999.0)
            .min_size(egui::vec2(30.0, 30.0)),
    )
}

/// Static tag chip, used for ingredients and feature claims.
pub fn chip(ui: &mut egui::Ui, label: &str, fill: Color32, text: Color32) {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(999.0)
        .inner_margin(egui::Margin::symmetric(10, 5))
        .show(ui, |ui| {
            ui.label(RichText::new(label).color(text).size(13.0));
        });
}

/// Centered section header: a big muted title over a one-line subtitle.
pub fn section_heading(ui: &mut egui::Ui, theme: &Theme, title: &str, subtitle: &str) {
    ui.vertical_centered(|ui| {
        let ctx = ui.ctx().clone();
        ui.label(theme.heading(&ctx, title).size(34.0));
        ui.add_space(6.0);
        ui.label(RichText::new(subtitle).size(16.0).color(theme.ink(&ctx)));
    });
}
