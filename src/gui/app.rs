use eframe::egui;

use super::{
    card_grid::{
        self,
        CardAction,
    },
    detail_modal::DetailModal,
    hero::{
        self,
        HeroAction,
    },
    particles::ParticleField,
    reveal,
    sections,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::TopBar,
    view_state::{
        ViewEvent,
        ViewState,
    },
    widgets,
};
use crate::catalog::Catalog;

const PAGE_MAX_WIDTH: f32 = 1120.0;

/// The whole storefront: an immutable catalog, one view-state value, the
/// boutique theme and the decorative backdrop. Widgets report intent as
/// [`ViewEvent`]s; the state is replaced once per frame, at the end.
pub struct HamperApp {
    catalog: Catalog,
    view: ViewState,
    theme: Theme,
    particles: ParticleField,
    scroll_offset: f32,
    hero_height: f32,
    scroll_to_products: bool,
}

impl HamperApp {
    pub fn new(cc: &eframe::CreationContext<'_>, catalog: Catalog) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let theme = Theme::boutique();
        set_theme(&cc.egui_ctx, theme.clone());
        // The storefront opens in its light look; the top-bar switch flips it
        // for the session only.
        cc.egui_ctx.set_theme(egui::Theme::Light);

        Self {
            catalog,
            view: ViewState::default(),
            theme,
            particles: ParticleField::new(),
            scroll_offset: 0.0,
            hero_height: 640.0,
            scroll_to_products: false,
        }
    }

    fn hero_scroll_progress(&self) -> f32 {
        (self.scroll_offset / self.hero_height.max(1.0)).clamp(0.0, 1.0)
    }
}

impl eframe::App for HamperApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events: Vec<ViewEvent> = Vec::new();

        TopBar::show(ctx, &self.theme);

        egui::CentralPanel::default().show(ctx, |ui| {
            // The backdrop paints first so the content stacks over it; it
            // stays fixed while the page scrolls past.
            let backdrop = ui.max_rect();
            let painter = ui.painter().clone();
            self.particles.paint(
                ctx,
                &painter,
                backdrop,
                &self.theme,
                self.hero_scroll_progress(),
            );

            let modal_open = self.view.is_open();
            let output = egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                // Scroll lock: the page holds still underneath the modal.
                .enable_scrolling(!modal_open)
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(PAGE_MAX_WIDTH);
                        self.page(ui, &mut events);
                    });
                });
            self.scroll_offset = output.state.offset.y;
        });

        if let Some(id) = self.view.selected() {
            if let Some(hamper) = self.catalog.get(id) {
                DetailModal::show(ctx, &self.theme, hamper, &self.view, &mut events);
            }
        }

        for event in events {
            self.view = self.view.apply(&self.catalog, event);
        }

        // The backdrop never rests.
        ctx.request_repaint();
    }
}

impl HamperApp {
    fn page(&mut self, ui: &mut egui::Ui, events: &mut Vec<ViewEvent>) {
        let hero_top = ui.cursor().min.y;
        if let Some(HeroAction::ExploreCollection) = hero::show(ui, &self.theme) {
            self.scroll_to_products = true;
        }
        self.hero_height = (ui.cursor().min.y - hero_top).max(1.0);

        let heading = ui
            .scope(|ui| {
                widgets::section_heading(
                    ui,
                    &self.theme,
                    "Premium Collections",
                    "Each hamper tells a story of craftsmanship, quality, and the art of gifting",
                );
            })
            .response;
        if self.scroll_to_products {
            heading.scroll_to_me(Some(egui::Align::Min));
            self.scroll_to_products = false;
        }

        ui.add_space(24.0);
        if let Some(CardAction::OpenDetail(id)) = card_grid::show(ui, &self.theme, &self.catalog) {
            events.push(ViewEvent::OpenDetail(id));
        }

        ui.add_space(64.0);
        reveal::fade_in(ui, "why_choose_us", 0, |ui| sections::why_choose_us(ui, &self.theme));
        ui.add_space(64.0);
        reveal::fade_in(ui, "testimonials", 0, |ui| sections::testimonials(ui, &self.theme));
        ui.add_space(64.0);
        reveal::fade_in(ui, "process", 0, |ui| sections::process(ui, &self.theme));
        ui.add_space(64.0);
        reveal::fade_in(ui, "call_to_action", 0, |ui| sections::call_to_action(ui, &self.theme));
        ui.add_space(64.0);
        reveal::fade_in(ui, "contact", 0, |ui| sections::contact(ui, &self.theme));
        ui.add_space(48.0);
    }
}
