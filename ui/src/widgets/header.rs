//! Top bar with the brand, navigation labels and the user avatar.

use egui::{Align, Color32, Layout, RichText, Sense, Ui, vec2};

use crate::utils::colors::{COLOR_BRAND, COLOR_MUTED};

pub const NAV_ITEMS: [&str; 3] = ["Dashboard", "Customers", "Analytics"];

/// The navigation item matching the only page this app has.
const ACTIVE_NAV: &str = "Customers";

const AVATAR_SIZE: f32 = 32.0;

pub fn header(ui: &mut Ui) {
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new("Inkle").size(22.0).strong().color(COLOR_BRAND));

        ui.add_space(32.0);
        for item in NAV_ITEMS {
            let text = RichText::new(item);
            let text = if item == ACTIVE_NAV {
                text.color(COLOR_BRAND).strong()
            } else {
                text.color(COLOR_MUTED)
            };
            ui.add(egui::Label::new(text).sense(Sense::hover()));
            ui.add_space(16.0);
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new("User").strong());
                ui.label(RichText::new("Admin").small().color(COLOR_MUTED));
            });
            avatar(ui, "U");
        });
    });
    ui.add_space(8.0);
}

fn avatar(ui: &mut Ui, initial: &str) {
    let (rect, _response) = ui.allocate_exact_size(vec2(AVATAR_SIZE, AVATAR_SIZE), Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), AVATAR_SIZE / 2.0, COLOR_BRAND);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initial,
        egui::FontId::proportional(14.0),
        Color32::WHITE,
    );
}
