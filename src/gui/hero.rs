use eframe::egui::{
    self,
    Align2,
    Color32,
    FontId,
    RichText,
    Sense,
    Stroke,
};
use egui_flex::{
    item,
    Flex,
};

use super::{
    theme::Theme,
    widgets,
};

pub enum HeroAction {
    ExploreCollection,
}

struct CategoryTile {
    name: &'static str,
    glyph: &'static str,
    count: u32,
    accent: Color32,
}

// Decorative only: the tiles advertise collection sizes but there is no
// category filtering behind them.
const CATEGORY_TILES: [CategoryTile; 5] = [
    CategoryTile {
        name: "Chocolate Hampers",
        glyph: "👑",
        count: 25,
        accent: Color32::from_rgb(0xf5, 0x9e, 0x0b),
    },
    CategoryTile {
        name: "Snack Collections",
        glyph: "📦",
        count: 18,
        accent: Color32::from_rgb(0x10, 0xb9, 0x81),
    },
    CategoryTile {
        name: "Tea & Coffee",
        glyph: "🎁",
        count: 22,
        accent: Color32::from_rgb(0xa8, 0x55, 0xf7),
    },
    CategoryTile {
        name: "Wellness",
        glyph: "♥",
        count: 14,
        accent: Color32::from_rgb(0x06, 0xb6, 0xd4),
    },
    CategoryTile {
        name: "Festive Specials",
        glyph: "✨",
        count: 32,
        accent: Color32::from_rgb(0xf4, 0x3f, 0x5e),
    },
];

/// The opening screen: gift mark, display title, tagline, the two big
/// actions and the category tiles.
pub fn show(ui: &mut egui::Ui, theme: &Theme) -> Option<HeroAction> {
    let mut action = None;
    let ctx = ui.ctx().clone();

    ui.add_space(56.0);
    ui.vertical_centered(|ui| {
        // Gentle pulse on the gift mark, driven by the frame clock.
        let pulse = ((ctx.input(|i| i.time) * 2.0).sin() * 3.0) as f32;
        ui.label(RichText::new("🎁").size(52.0 + pulse).color(theme.gold(&ctx)));
        ui.add_space(16.0);

        ui.label(RichText::new("Exquisite").size(64.0).strong().color(theme.gold(&ctx)));
        ui.label(RichText::new("Gift Hampers").size(48.0).strong().color(theme.copper(&ctx)));
        ui.add_space(12.0);
        ui.label(
            RichText::new("Thoughtfully curated collections that transform moments into memories")
                .size(19.0)
                .color(theme.muted(&ctx)),
        );
        ui.add_space(28.0);

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 14.0;
            // Rough centering for the two buttons.
            let pad = (ui.available_width() - 380.0).max(0.0) / 2.0;
            ui.add_space(pad);
            if widgets::filled_pill(ui, "Explore Collection  ➡", theme.copper(&ctx)).clicked() {
                action = Some(HeroAction::ExploreCollection);
            }
            // Custom hampers are quoted by hand; the button is decoration.
            let _ = widgets::outlined_pill(ui, "Custom Hampers", theme.gold(&ctx));
        });
    });

    ui.add_space(40.0);
    Flex::horizontal().wrap(true).show(ui, |flex| {
        for tile in &CATEGORY_TILES {
            flex.add_ui(item(), |ui| {
                category_tile(ui, theme, tile);
            });
        }
    });
    ui.add_space(48.0);

    action
}

fn category_tile(ui: &mut egui::Ui, theme: &Theme, tile: &CategoryTile) {
    let ctx = ui.ctx().clone();
    egui::Frame::new()
        .fill(theme.surface(&ctx))
        .stroke(Stroke::new(1.0, theme.muted(&ctx).gamma_multiply(0.25)))
        .corner_radius(16.0)
        .inner_margin(14)
        .show(ui, |ui| {
            ui.set_width(158.0);
            ui.vertical_centered(|ui| {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(44.0, 44.0), Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, tile.accent);
                ui.painter().text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    tile.glyph,
                    FontId::proportional(20.0),
                    Color32::WHITE,
                );
                ui.add_space(8.0);
                ui.label(RichText::new(tile.name).strong().color(theme.ink(&ctx)));
                ui.label(
                    RichText::new(format!("{} premium items", tile.count))
                        .size(12.0)
                        .color(theme.muted(&ctx)),
                );
            });
        });
}
