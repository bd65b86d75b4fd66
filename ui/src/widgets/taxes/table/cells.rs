//! Cell rendering functions for the customers table.

use egui::{Color32, CornerRadius, Frame, Margin, RichText, Ui};
use inkle_business::date::format_request_date;
use inkle_business::{PLACEHOLDER, TaxRecord};

use crate::utils::colors::{
    COLOR_BRAND, COLOR_MUTED, MALE_BADGE_BG, MALE_BADGE_FG, OTHER_BADGE_BG, OTHER_BADGE_FG,
};

#[inline]
pub fn render_entity_cell(ui: &mut Ui, record: &TaxRecord) {
    ui.label(RichText::new(record.display_name()).color(COLOR_BRAND).strong());
}

/// Colors for the gender badge: (background, text).
#[inline]
pub fn badge_colors(is_male: bool) -> (Color32, Color32) {
    if is_male {
        (MALE_BADGE_BG, MALE_BADGE_FG)
    } else {
        (OTHER_BADGE_BG, OTHER_BADGE_FG)
    }
}

/// Renders the gender as a pill badge, or the placeholder when absent.
#[inline]
pub fn render_gender_cell(ui: &mut Ui, record: &TaxRecord) {
    let Some(gender) = record.gender.as_deref().filter(|gender| !gender.is_empty()) else {
        ui.label(PLACEHOLDER);
        return;
    };

    let (fill, text) = badge_colors(record.is_male());
    Frame::NONE
        .fill(fill)
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::symmetric(10, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(gender).color(text).small().strong());
        });
}

#[inline]
pub fn render_date_cell(ui: &mut Ui, record: &TaxRecord) {
    ui.label(format_request_date(record.request_date.as_deref()));
}

#[inline]
pub fn render_country_cell(ui: &mut Ui, record: &TaxRecord) {
    ui.label(record.display_country());
}

/// Renders the edit action. Returns `true` if it was clicked.
#[inline]
pub fn render_edit_button(ui: &mut Ui) -> bool {
    ui.button(RichText::new("✏").color(COLOR_MUTED))
        .on_hover_text("Edit")
        .clicked()
}
