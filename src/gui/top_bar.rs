use eframe::egui::{
    self,
    containers,
};

use super::theme::Theme;

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context, theme: &Theme) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(theme.accent(ctx, "🎁 Hamperly").strong());
                });
            });
        });
    }
}
