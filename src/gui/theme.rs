use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

/// Boutique palette in a dark and a light cut. The light variant is the
/// storefront look (parchment backgrounds, cocoa text); the dark variant
/// keeps the same golds over espresso.
#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::boutique()
    }
}

impl Theme {
    pub fn boutique() -> Self {
        Theme { dark: ThemeDetails::espresso(), light: ThemeDetails::parchment() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        match ctx.theme() {
            egui::Theme::Dark => &self.dark,
            egui::Theme::Light => &self.light,
        }
    }

    pub fn gold(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).gold
    }

    pub fn copper(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).copper
    }

    pub fn rosewood(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).rosewood
    }

    pub fn ink(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).foreground
    }

    pub fn muted(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).muted
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).red
    }

    pub fn surface(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).background_light
    }

    pub fn surface_faint(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).background_dark
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).muted).strong()
    }

    pub fn accent(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).gold)
    }
}

#[derive(Clone)]
pub struct ThemeDetails {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    muted: Color32,
    red: Color32,
    gold: Color32,
    copper: Color32,
    rosewood: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
    background_lighter: Color32,
}

impl ThemeDetails {
    // The storefront colors: gold 0xb89433, copper 0xc87c38,
    // rosewood 0xa07e7e, cocoa 0x3a2f25.
    fn parchment() -> Self {
        Self {
            background: Color32::from_rgb(0xff, 0xfe, 0xfa),
            foreground: Color32::from_rgb(0x3a, 0x2f, 0x25),
            selection: Color32::from_rgb(0xf0, 0xe6, 0xcc),
            muted: Color32::from_rgb(0x7a, 0x7a, 0x7a),
            red: Color32::from_rgb(0xc8, 0x50, 0x50),
            gold: Color32::from_rgb(0xb8, 0x94, 0x33),
            copper: Color32::from_rgb(0xc8, 0x7c, 0x38),
            rosewood: Color32::from_rgb(0xa0, 0x7e, 0x7e),
            background_darker: Color32::from_rgb(0xec, 0xe8, 0xde),
            background_dark: Color32::from_rgb(0xf6, 0xf3, 0xeb),
            background_light: Color32::from_rgb(0xff, 0xff, 0xfd),
            background_lighter: Color32::from_rgb(0xff, 0xff, 0xff),
        }
    }

    fn espresso() -> Self {
        Self {
            background: Color32::from_rgb(0x23, 0x1d, 0x16),
            foreground: Color32::from_rgb(0xf2, 0xea, 0xdc),
            selection: Color32::from_rgb(0x4a, 0x3c, 0x2a),
            muted: Color32::from_rgb(0xa8, 0x9f, 0x92),
            red: Color32::from_rgb(0xe0, 0x6c, 0x5e),
            gold: Color32::from_rgb(0xd4, 0xaf, 0x4f),
            copper: Color32::from_rgb(0xd8, 0x8c, 0x48),
            rosewood: Color32::from_rgb(0xb8, 0x96, 0x96),
            background_darker: Color32::from_rgb(0x17, 0x12, 0x0d),
            background_dark: Color32::from_rgb(0x1d, 0x18, 0x12),
            background_light: Color32::from_rgb(0x2e, 0x26, 0x1d),
            background_lighter: Color32::from_rgb(0x3a, 0x30, 0x25),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

pub fn blend_colors(color_a: Color32, color_b: Color32, t: f32) -> Color32 {
    let blend_channel = |a: u8, b: u8| ((1.0 - t) * (a as f32) + t * (b as f32)).round() as u8;
    Color32::from_rgba_unmultiplied(
        blend_channel(color_a.r(), color_b.r()),
        blend_channel(color_a.g(), color_b.g()),
        blend_channel(color_a.b(), color_b.b()),
        blend_channel(color_a.a(), color_b.a()),
    )
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: WidgetVisuals {
                    bg_fill: theme.background,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke {
                        color: theme.background_darker,
                        ..default.widgets.noninteractive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.noninteractive.fg_stroke
                    },
                    ..default.widgets.noninteractive
                },
                inactive: WidgetVisuals {
                    bg_fill: theme.background_light,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke {
                        color: theme.background_darker,
                        ..default.widgets.inactive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.inactive.fg_stroke
                    },
                    ..default.widgets.inactive
                },
                hovered: WidgetVisuals {
                    bg_fill: theme.selection,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke { color: theme.gold, ..default.widgets.hovered.bg_stroke },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.hovered.fg_stroke
                    },
                    ..default.widgets.hovered
                },
                active: WidgetVisuals {
                    bg_fill: theme.selection,
                    weak_bg_fill: theme.background_light,
                    bg_stroke: Stroke { color: theme.copper, ..default.widgets.active.bg_stroke },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.active.fg_stroke
                    },
                    ..default.widgets.active
                },
                open: WidgetVisuals {
                    bg_fill: theme.background_dark,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke { color: theme.gold, ..default.widgets.open.bg_stroke },
                    fg_stroke: Stroke { color: theme.foreground, ..default.widgets.open.fg_stroke },
                    ..default.widgets.open
                },
            },
            selection: Selection {
                bg_fill: theme.selection,
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.copper,
            faint_bg_color: match is_dark {
                true => theme.background_darker,
                false => theme.background_dark,
            },
            extreme_bg_color: theme.background_darker,
            code_bg_color: theme.background_dark,
            error_fg_color: theme.red,
            warn_fg_color: theme.copper,
            window_shadow: Shadow { color: theme.background_darker, ..default.window_shadow },
            window_fill: theme.background,
            window_stroke: Stroke { color: theme.background_light, ..default.window_stroke },
            panel_fill: theme.background,
            popup_shadow: Shadow { color: theme.background_dark, ..default.popup_shadow },
            collapsing_header_frame: true,
            ..default
        },
    );
}
