use eframe::egui::{
    self,
    Align2,
    Color32,
    FontId,
    RichText,
    Sense,
    Stroke,
};

use super::{
    theme::Theme,
    widgets,
};

struct Testimonial {
    name: &'static str,
    location: &'static str,
    rating: usize,
    comment: &'static str,
    image: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Priya Sharma",
        location: "Mumbai",
        rating: 5,
        comment: "Absolutely stunning hampers! The quality exceeded my expectations and the \
                  packaging was beautiful.",
        image: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=150",
    },
    Testimonial {
        name: "Rajesh Kumar",
        location: "Delhi",
        rating: 5,
        comment: "Perfect for gifting! My family loved every item in the hamper. Will definitely \
                  order again.",
        image: "https://images.pexels.com/photos/1222271/pexels-photo-1222271.jpeg?auto=compress&cs=tinysrgb&w=150",
    },
    Testimonial {
        name: "Anita Patel",
        location: "Bangalore",
        rating: 5,
        comment: "The chocolate hamper was divine! Each piece was crafted to perfection. Highly \
                  recommended!",
        image: "https://images.pexels.com/photos/1130626/pexels-photo-1130626.jpeg?auto=compress&cs=tinysrgb&w=150",
    },
];

const WHY_CHOOSE: [(&str, &str, &str); 4] = [
    ("🏆", "Premium Quality", "Only the finest products make it into our collections"),
    ("📦", "Elegant Packaging", "Beautiful presentation that makes every gift special"),
    ("🚚", "Fast Delivery", "Quick and secure delivery to your doorstep"),
    ("🛡", "Quality Guarantee", "100% satisfaction guaranteed or money back"),
];

const PROCESS: [(&str, &str, &str, &str); 4] = [
    ("01", "👑", "Curate", "Expert selection of premium products"),
    ("02", "📦", "Package", "Beautiful presentation and packaging"),
    ("03", "🛡", "Quality Check", "Rigorous quality assurance"),
    ("04", "🚚", "Deliver", "Safe and timely delivery"),
];

const CONTACT: [(&str, &str, &str, &str); 3] = [
    ("📞", "Call Us", "+91 98765 43210", "Mon-Sat 9AM-8PM"),
    ("✉", "Email Us", "hello@gifthampers.com", "We reply within 24 hours"),
    ("📍", "Visit Us", "123 Gift Street", "Mumbai, India 400001"),
];

pub fn why_choose_us(ui: &mut egui::Ui, theme: &Theme) {
    widgets::section_heading(
        ui,
        theme,
        "Why Choose Our Hampers?",
        "Excellence in every detail, from sourcing to delivery",
    );
    ui.add_space(28.0);

    ui.columns(WHY_CHOOSE.len(), |columns| {
        for (column, (glyph, title, description)) in columns.iter_mut().zip(WHY_CHOOSE) {
            column.vertical_centered(|ui| {
                glyph_disc(ui, theme.surface(ui.ctx()), theme.gold(ui.ctx()), glyph, 30.0);
                ui.add_space(10.0);
                ui.label(RichText::new(title).size(18.0).strong().color(theme.ink(ui.ctx())));
                ui.add_space(4.0);
                ui.label(RichText::new(description).color(theme.muted(ui.ctx())));
            });
        }
    });
}

pub fn testimonials(ui: &mut egui::Ui, theme: &Theme) {
    widgets::section_heading(
        ui,
        theme,
        "What Our Customers Say",
        "Real experiences from our valued customers",
    );
    ui.add_space(28.0);

    ui.columns(TESTIMONIALS.len(), |columns| {
        for (column, testimonial) in columns.iter_mut().zip(&TESTIMONIALS) {
            let ctx = column.ctx().clone();
            egui::Frame::new()
                .fill(theme.surface(&ctx))
                .stroke(Stroke::new(1.0, theme.muted(&ctx).gamma_multiply(0.25)))
                .corner_radius(18.0)
                .inner_margin(16)
                .show(column, |ui| {
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::Image::new(testimonial.image)
                                .fit_to_exact_size(egui::vec2(44.0, 44.0))
                                .corner_radius(999.0),
                        );
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(testimonial.name)
                                    .strong()
                                    .color(theme.ink(ui.ctx())),
                            );
                            ui.label(
                                RichText::new(testimonial.location)
                                    .size(12.5)
                                    .color(theme.muted(ui.ctx())),
                            );
                        });
                    });
                    ui.add_space(6.0);
                    widgets::star_row(ui, theme, testimonial.rating, None);
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(format!("\u{201c}{}\u{201d}", testimonial.comment))
                            .italics()
                            .color(theme.ink(ui.ctx())),
                    );
                });
        }
    });
}

pub fn process(ui: &mut egui::Ui, theme: &Theme) {
    widgets::section_heading(
        ui,
        theme,
        "Our Process",
        "From selection to delivery, every step is crafted with care",
    );
    ui.add_space(28.0);

    ui.columns(PROCESS.len(), |columns| {
        for (column, (step, glyph, title, description)) in columns.iter_mut().zip(PROCESS) {
            column.vertical_centered(|ui| {
                glyph_disc(ui, theme.copper(ui.ctx()), Color32::WHITE, step, 26.0);
                ui.add_space(6.0);
                ui.label(RichText::new(glyph).size(20.0).color(theme.gold(ui.ctx())));
                ui.add_space(4.0);
                ui.label(RichText::new(title).size(18.0).strong().color(theme.ink(ui.ctx())));
                ui.label(RichText::new(description).color(theme.muted(ui.ctx())));
            });
        }
    });
}

pub fn call_to_action(ui: &mut egui::Ui, theme: &Theme) {
    let ctx = ui.ctx().clone();
    egui::Frame::new()
        .fill(theme.copper(&ctx))
        .corner_radius(24.0)
        .inner_margin(36)
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("✨").size(40.0).color(Color32::WHITE));
                ui.add_space(8.0);
                ui.label(
                    RichText::new("Create Your Perfect Hamper")
                        .size(32.0)
                        .strong()
                        .color(Color32::WHITE),
                );
                ui.add_space(8.0);
                ui.label(
                    RichText::new(
                        "Can't find exactly what you're looking for? Let our experts create a \
                         personalized hamper tailored to your preferences",
                    )
                    .size(16.0)
                    .color(Color32::WHITE.gamma_multiply(0.95)),
                );
                ui.add_space(20.0);
                ui.horizontal(|ui| {
                    let pad = (ui.available_width() - 360.0).max(0.0) / 2.0;
                    ui.add_space(pad);
                    // Both lead to the concierge desk, which lives outside
                    // this app; decoration here.
                    let _ = ui.add(
                        egui::Button::new(
                            RichText::new("Start Customizing")
                                .strong()
                                .color(theme.gold(ui.ctx())),
                        )
                        .fill(Color32::WHITE)
                        .corner_radius(999.0)
                        .min_size(egui::vec2(0.0, 34.0)),
                    );
                    let _ = widgets::outlined_pill(ui, "Contact Expert", Color32::WHITE);
                });
            });
        });
}

pub fn contact(ui: &mut egui::Ui, theme: &Theme) {
    widgets::section_heading(
        ui,
        theme,
        "Get in Touch",
        "We're here to help you create the perfect gift experience",
    );
    ui.add_space(28.0);

    ui.columns(CONTACT.len(), |columns| {
        for (column, (glyph, title, first, second)) in columns.iter_mut().zip(CONTACT) {
            column.vertical_centered(|ui| {
                glyph_disc(ui, theme.gold(ui.ctx()), Color32::WHITE, glyph, 26.0);
                ui.add_space(8.0);
                ui.label(RichText::new(title).size(18.0).strong().color(theme.ink(ui.ctx())));
                ui.label(RichText::new(first).color(theme.muted(ui.ctx())));
                ui.label(RichText::new(second).color(theme.muted(ui.ctx())));
            });
        }
    });
}

fn glyph_disc(ui: &mut egui::Ui, fill: Color32, glyph_color: Color32, glyph: &str, radius: f32) {
    let side = radius * 2.0;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(side, side), Sense::hover());
    ui.painter().circle_filled(rect.center(), radius, fill);
    ui.painter().text(
        rect.center(),
        Align2::CENTER_CENTER,
        glyph,
        FontId::proportional(radius * 0.8),
        glyph_color,
    );
}
