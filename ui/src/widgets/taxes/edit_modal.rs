//! Edit Customer modal.

use egui::{Button, ComboBox, Context, Id, Modal, RichText, TextEdit, Ui};
use inkle_business::{CountryOptions, TaxesPage};
use log::warn;

use crate::utils::colors::{COLOR_BRAND, COLOR_MUTED, COLOR_RED};

pub const MODAL_TITLE: &str = "Edit Customer";
const MODAL_WIDTH: f32 = 420.0;

pub fn save_button_label(is_saving: bool) -> &'static str {
    if is_saving { "Saving..." } else { "Save" }
}

/// Shows the modal while the edit workflow is open.
pub fn edit_modal(page: &mut TaxesPage, ctx: &Context) {
    if !page.edit.is_open() {
        return;
    }

    let response = Modal::new(Id::new("edit_customer_modal")).show(ctx, |ui| {
        ui.set_width(MODAL_WIDTH);
        modal_contents(page, ui);
    });

    if response.should_close() {
        page.cancel_edit();
    }
}

fn modal_contents(page: &mut TaxesPage, ui: &mut Ui) {
    let saving = page.edit.is_saving();

    ui.horizontal(|ui| {
        ui.heading(MODAL_TITLE);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add_enabled(!saving, Button::new("✖").frame(false)).clicked() {
                page.cancel_edit();
            }
        });
    });
    ui.separator();
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label("Name");
        ui.label(RichText::new("*").color(COLOR_RED));
    });
    ui.add_enabled(
        !saving,
        TextEdit::singleline(page.edit.name_mut())
            .hint_text("Enter name")
            .desired_width(f32::INFINITY),
    );
    if page.edit.name().trim().is_empty() {
        ui.label(RichText::new("Name is required").small().color(COLOR_RED));
    }

    ui.add_space(12.0);
    ui.label("Country");
    country_dropdown(page, saving, ui);

    if let Some(error) = page.edit.error() {
        ui.add_space(8.0);
        ui.colored_label(COLOR_RED, error);
    }

    ui.add_space(16.0);
    ui.separator();
    ui.horizontal(|ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = RichText::new(save_button_label(saving)).color(egui::Color32::WHITE);
            let save = Button::new(label).fill(COLOR_BRAND);
            if ui.add_enabled(page.edit.can_save(), save).clicked()
                && let Err(err) = page.save_edit()
            {
                warn!("Save rejected: {err}");
            }
            if ui.add_enabled(!saving, Button::new("Cancel")).clicked() {
                page.cancel_edit();
            }
        });
    });
}

fn country_dropdown(page: &mut TaxesPage, saving: bool, ui: &mut Ui) {
    let current = page.edit.country().to_owned();
    let selected_text = if current.is_empty() {
        RichText::new("Select country").color(COLOR_MUTED)
    } else {
        RichText::new(current.as_str())
    };

    let mut choice: Option<String> = None;
    ui.add_enabled_ui(!saving, |ui| {
        ComboBox::from_id_salt("edit_country")
            .selected_text(selected_text)
            .width(ui.available_width())
            .show_ui(ui, |ui| match page.edit.countries() {
                CountryOptions::NotLoaded | CountryOptions::Loading => {
                    ui.label(RichText::new("Loading countries...").color(COLOR_MUTED));
                }
                CountryOptions::Loaded(countries) if countries.is_empty() => {
                    ui.label(RichText::new("No countries available").color(COLOR_MUTED));
                }
                CountryOptions::Loaded(countries) => {
                    for country in countries {
                        if ui
                            .selectable_label(country.name == current, &country.name)
                            .clicked()
                        {
                            choice = Some(country.name.clone());
                        }
                    }
                }
            });
    });

    if let Some(country) = choice {
        page.edit.select_country(country);
    }
}
