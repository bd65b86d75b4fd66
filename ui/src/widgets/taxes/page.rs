//! The customers page: search, table and pager over the page controller's state.

use egui::{RichText, Ui};
use inkle_business::TaxesPage;

use super::pagination::pagination;
use super::search_bar::search_bar;
use super::table::records_table;
use crate::utils::colors::COLOR_MUTED;

pub const LOADING_TEXT: &str = "Loading...";

pub fn taxes_page(page: &mut TaxesPage, ui: &mut Ui) {
    ui.add_space(16.0);

    if page.is_loading() {
        ui.vertical_centered(|ui| {
            ui.add_space(48.0);
            ui.spinner();
            ui.label(RichText::new(LOADING_TEXT).color(COLOR_MUTED));
        });
        return;
    }

    if let Some(error) = page.load_error() {
        ui.label(RichText::new(error).small().color(COLOR_MUTED));
        ui.add_space(4.0);
    }

    search_bar(&mut page.table, ui);
    ui.add_space(12.0);

    records_table(page, ui);
    ui.add_space(12.0);

    let summary = page.summary();
    pagination(&mut page.table, &summary, ui);
    ui.add_space(16.0);
}
