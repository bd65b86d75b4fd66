//! Row rendering for the customers table.

use egui::Ui;
use inkle_business::TaxRecord;

use super::cells::{
    render_country_cell, render_date_cell, render_edit_button, render_entity_cell,
    render_gender_cell,
};
use super::data_cell;

/// Renders a single record row. Returns `true` if its edit button was clicked.
pub fn render_record_row(ui: &mut Ui, record: &TaxRecord) -> bool {
    data_cell(ui, |ui| render_entity_cell(ui, record));
    data_cell(ui, |ui| render_gender_cell(ui, record));
    data_cell(ui, |ui| render_date_cell(ui, record));
    data_cell(ui, |ui| render_country_cell(ui, record));
    let edit = data_cell(ui, render_edit_button).inner;
    ui.end_row();
    edit
}
