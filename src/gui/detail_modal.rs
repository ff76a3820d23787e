use eframe::egui::{
    self,
    RichText,
};
use egui_flex::{
    item,
    Flex,
};

use super::{
    theme::Theme,
    view_state::{
        ViewEvent,
        ViewState,
    },
    widgets,
};
use crate::catalog::Hamper;

const TRUST_STRIP: [(&str, &str); 3] = [
    ("🚚", "Free Delivery"),
    ("↺", "Easy Returns"),
    ("🛡", "Quality Assured"),
];

/// The quick-view overlay. It renders whatever record the view state points
/// at and reports the user's intent as [`ViewEvent`]s; it never mutates the
/// state itself. Closing comes from the ✕ button, a click on the backdrop or
/// Escape.
pub struct DetailModal;

impl DetailModal {
    pub fn show(
        ctx: &egui::Context,
        theme: &Theme,
        hamper: &Hamper,
        view: &ViewState,
        events: &mut Vec<ViewEvent>,
    ) {
        let modal = egui::Modal::new(egui::Id::new("hamper_detail")).show(ctx, |ui| {
            ui.set_width((ctx.screen_rect().width() - 120.0).clamp(480.0, 880.0));

            ui.horizontal(|ui| {
                ui.label(RichText::new(&hamper.name).size(24.0).strong().color(theme.ink(ctx)));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if widgets::round_button(ui, "✕", theme.muted(ctx)).clicked() {
                        events.push(ViewEvent::CloseDetail);
                    }
                });
            });
            ui.separator();

            egui::ScrollArea::vertical()
                .max_height(ctx.screen_rect().height() * 0.75)
                .show(ui, |ui| {
                    ui.columns(2, |columns| {
                        gallery_column(&mut columns[0], hamper, view, events);
                        details_column(&mut columns[1], theme, hamper, view, events);
                    });

                    ui.add_space(14.0);
                    ui.separator();
                    ui.add_space(14.0);

                    ui.columns(2, |columns| {
                        ingredients_column(&mut columns[0], theme, hamper);
                        nutrition_column(&mut columns[1], theme, hamper);
                    });
                });
        });

        if modal.should_close() {
            events.push(ViewEvent::CloseDetail);
        }
    }
}

fn gallery_column(
    ui: &mut egui::Ui,
    hamper: &Hamper,
    view: &ViewState,
    events: &mut Vec<ViewEvent>,
) {
    // The cursor is reset on every open and thumbnails only offer in-range
    // indices, so this lookup cannot miss.
    let active = view.active_image();
    let width = ui.available_width();

    ui.add(
        egui::Image::new(hamper.gallery[active].as_str())
            .fit_to_exact_size(egui::vec2(width, 300.0))
            .corner_radius(14.0)
            .show_loading_spinner(true),
    );
    ui.add_space(10.0);

    ui.horizontal_wrapped(|ui| {
        for (index, url) in hamper.gallery.iter().enumerate() {
            let thumb = egui::ImageButton::new(
                egui::Image::new(url.as_str())
                    .fit_to_exact_size(egui::vec2(74.0, 56.0))
                    .corner_radius(8.0),
            )
            .selected(index == active);

            if ui.add(thumb).clicked() {
                events.push(ViewEvent::SelectImage(index));
            }
        }
    });
}

fn details_column(
    ui: &mut egui::Ui,
    theme: &Theme,
    hamper: &Hamper,
    view: &ViewState,
    events: &mut Vec<ViewEvent>,
) {
    let ctx = ui.ctx().clone();

    widgets::star_row(ui, theme, hamper.filled_stars(), Some(hamper.reviews));
    ui.add_space(8.0);
    ui.label(RichText::new(&hamper.description).size(15.0).color(theme.muted(&ctx)));
    ui.add_space(14.0);

    ui.label(RichText::new("What's Inside").size(20.0).strong().color(theme.ink(&ctx)));
    ui.add_space(6.0);
    for entry in &hamper.contents {
        ui.horizontal(|ui| {
            ui.label(RichText::new("•").color(theme.gold(&ctx)));
            ui.label(RichText::new(entry).color(theme.muted(&ctx)));
        });
    }
    ui.add_space(14.0);

    ui.label(RichText::new("Special Features").size(20.0).strong().color(theme.ink(&ctx)));
    ui.add_space(6.0);
    Flex::horizontal().wrap(true).show(ui, |flex| {
        for feature in &hamper.features {
            flex.add_ui(item(), |ui| {
                widgets::chip(
                    ui,
                    feature,
                    theme.gold(ui.ctx()).gamma_multiply(0.15),
                    theme.ink(ui.ctx()),
                );
            });
        }
    });
    ui.add_space(14.0);

    ui.label(RichText::new("Our Story").size(20.0).strong().color(theme.ink(&ctx)));
    ui.add_space(6.0);
    ui.label(RichText::new(&hamper.story).color(theme.muted(&ctx)));
    ui.add_space(16.0);

    ui.horizontal(|ui| {
        ui.label(RichText::new("Quantity:").strong().color(theme.ink(&ctx)));
        ui.add_space(6.0);
        if widgets::round_button(ui, "−", theme.gold(&ctx)).clicked() {
            events.push(ViewEvent::DecrementQuantity);
        }
        ui.add_sized(
            egui::vec2(34.0, 30.0),
            egui::Label::new(
                RichText::new(view.quantity().to_string())
                    .size(17.0)
                    .strong()
                    .color(theme.ink(&ctx)),
            ),
        );
        if widgets::round_button(ui, "+", theme.gold(&ctx)).clicked() {
            events.push(ViewEvent::IncrementQuantity);
        }
    });
    ui.add_space(14.0);

    ui.horizontal(|ui| {
        // Decorative pair: no cart, no favorites list.
        let _ = widgets::filled_pill(ui, "🛒  Add to Cart", theme.copper(&ctx));
        let _ = widgets::round_button(ui, "♡", theme.gold(&ctx));
    });
    ui.add_space(16.0);

    ui.columns(TRUST_STRIP.len(), |columns| {
        for (column, (glyph, label)) in columns.iter_mut().zip(TRUST_STRIP) {
            column.vertical_centered(|ui| {
                ui.label(RichText::new(glyph).size(18.0).color(theme.gold(ui.ctx())));
                ui.label(RichText::new(label).size(12.5).color(theme.muted(ui.ctx())));
            });
        }
    });
}

fn ingredients_column(ui: &mut egui::Ui, theme: &Theme, hamper: &Hamper) {
    let ctx = ui.ctx().clone();
    ui.label(RichText::new("Ingredients").size(20.0).strong().color(theme.ink(&ctx)));
    ui.add_space(6.0);
    Flex::horizontal().wrap(true).show(ui, |flex| {
        for ingredient in &hamper.ingredients {
            flex.add_ui(item(), |ui| {
                widgets::chip(
                    ui,
                    ingredient,
                    theme.gold(ui.ctx()).gamma_multiply(0.15),
                    theme.ink(ui.ctx()),
                );
            });
        }
    });
}

fn nutrition_column(ui: &mut egui::Ui, theme: &Theme, hamper: &Hamper) {
    let ctx = ui.ctx().clone();
    ui.label(RichText::new("Nutritional Info").size(20.0).strong().color(theme.ink(&ctx)));
    ui.add_space(6.0);

    // Rows render in authored order; the order is part of the content.
    egui::Grid::new(("nutrition", hamper.id)).num_columns(2).spacing([28.0, 6.0]).show(
        ui,
        |ui| {
            for (label, value) in &hamper.nutritional_info {
                ui.label(RichText::new(format!("{}:", label)).color(theme.muted(&ctx)));
                ui.label(RichText::new(value).strong().color(theme.ink(&ctx)));
                ui.end_row();
            }
        },
    );
}
