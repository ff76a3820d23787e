use eframe::egui::{
    self,
    Color32,
    Rect,
    RichText,
    Stroke,
};
use egui_flex::{
    item,
    Flex,
};

use super::{
    reveal,
    theme::Theme,
    widgets,
};
use crate::catalog::{
    Catalog,
    Hamper,
};

const CARD_WIDTH: f32 = 330.0;
const CARD_IMAGE_HEIGHT: f32 = 210.0;

pub enum CardAction {
    OpenDetail(u32),
}

/// One card per record, catalog order, wrapping to the window width. Cards
/// ripple in as they scroll into view.
pub fn show(ui: &mut egui::Ui, theme: &Theme, catalog: &Catalog) -> Option<CardAction> {
    let mut action = None;

    Flex::horizontal().wrap(true).show(ui, |flex| {
        for (index, hamper) in catalog.hampers().iter().enumerate() {
            flex.add_ui(item(), |ui| {
                reveal::fade_in(ui, ("hamper_card", hamper.id), index, |ui| {
                    if card(ui, theme, hamper) {
                        action = Some(CardAction::OpenDetail(hamper.id));
                    }
                });
            });
        }
    });

    action
}

/// Returns true when either "Quick View" or "View Details" was clicked; the
/// two are the same door into the detail overlay.
fn card(ui: &mut egui::Ui, theme: &Theme, hamper: &Hamper) -> bool {
    let ctx = ui.ctx().clone();
    let mut open = false;

    egui::Frame::new()
        .fill(theme.surface(&ctx))
        .stroke(Stroke::new(1.0, theme.muted(&ctx).gamma_multiply(0.25)))
        .corner_radius(18.0)
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.spacing_mut().item_spacing.y = 0.0;

            let image_response = ui.add(
                egui::Image::new(hamper.image.as_str())
                    .fit_to_exact_size(egui::vec2(CARD_WIDTH, CARD_IMAGE_HEIGHT))
                    .corner_radius(egui::CornerRadius { nw: 18, ne: 18, sw: 0, se: 0 })
                    .show_loading_spinner(true),
            );
            let image_rect = image_response.rect;

            let painter = ui.painter().clone();
            let galley = painter.layout_no_wrap(
                hamper.badge.clone(),
                egui::FontId::proportional(12.0),
                Color32::WHITE,
            );
            let badge_rect = Rect::from_min_size(
                image_rect.min + egui::vec2(12.0, 12.0),
                galley.size() + egui::vec2(16.0, 8.0),
            );
            painter.rect_filled(badge_rect, 999.0, theme.copper(&ctx));
            painter.galley(badge_rect.min + egui::vec2(8.0, 4.0), galley, Color32::WHITE);

            // Favorite is hover feedback only: there is no favorites list.
            let heart_rect = Rect::from_min_size(
                egui::pos2(image_rect.right() - 44.0, image_rect.top() + 12.0),
                egui::vec2(32.0, 32.0),
            );
            let _ = ui.put(
                heart_rect,
                egui::Button::new(RichText::new("♡").color(theme.gold(&ctx)))
                    .fill(theme.surface(&ctx))
                    .corner_radius(999.0),
            );

            if ui.rect_contains_pointer(image_rect) {
                let quick_rect = Rect::from_min_size(
                    egui::pos2(image_rect.left() + 16.0, image_rect.bottom() - 46.0),
                    egui::vec2(image_rect.width() - 32.0, 34.0),
                );
                let quick = ui.put(
                    quick_rect,
                    egui::Button::new(
                        RichText::new("Quick View").strong().color(theme.ink(&ctx)),
                    )
                    .fill(theme.surface(&ctx))
                    .corner_radius(999.0),
                );
                if quick.clicked() {
                    open = true;
                }
            }

            egui::Frame::new().inner_margin(16).show(ui, |ui| {
                widgets::star_row(ui, theme, hamper.filled_stars(), Some(hamper.reviews));
                ui.add_space(6.0);
                ui.label(RichText::new(&hamper.name).size(20.0).strong().color(theme.ink(&ctx)));
                ui.add_space(4.0);
                ui.label(RichText::new(&hamper.description).color(theme.muted(&ctx)));
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    // Cart is decoration: there is no cart to add to.
                    let _ = widgets::filled_pill(ui, "🛒  Add to Cart", theme.copper(&ctx));
                    if widgets::outlined_pill(ui, "View Details", theme.gold(&ctx)).clicked() {
                        open = true;
                    }
                });
            });
        });

    open
}
