//! Table header rendering for the customers table.

use egui::{Button, RichText, Ui};
use inkle_business::{SortColumn, TaxesPage};

use super::columns::{COLUMNS, Column, sort_indicator};
use super::header_cell;
use crate::utils::colors::{COLOR_BRAND, COLOR_MUTED};
use crate::widgets::taxes::country_filter::country_filter;

/// Renders one header row. Sortable headers toggle the sort when clicked.
pub fn render_table_header(page: &mut TaxesPage, ui: &mut Ui) {
    for column in COLUMNS {
        header_cell(ui, |ui| match column {
            Column::Country => country_filter(page, ui),
            _ => match column.sort_column() {
                Some(sort) => {
                    if sortable_header(page, sort, column.label(), ui) {
                        page.table.toggle_sort(sort);
                    }
                }
                None => {
                    ui.strong(column.label());
                }
            },
        });
    }
    ui.end_row();
}

/// Returns `true` if the header was clicked.
fn sortable_header(page: &TaxesPage, sort: SortColumn, label: &str, ui: &mut Ui) -> bool {
    let direction = page.table.sort_direction(sort);
    let indicator = RichText::new(sort_indicator(direction));
    let indicator = if direction.is_some() {
        indicator.color(COLOR_BRAND)
    } else {
        indicator.color(COLOR_MUTED)
    };

    ui.horizontal(|ui| {
        let label = ui.add(Button::new(RichText::new(label).strong()).frame(false));
        let arrow = ui.add(Button::new(indicator).frame(false));
        label.clicked() || arrow.clicked()
    })
    .inner
}
