//! Table components for the customers page.
//!
//! - `columns`: Column order, labels and sort keys
//! - `header`: Sortable header row with the country filter
//! - `row`: Record row rendering
//! - `cells`: Cell rendering functions for each column type

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Frame, InnerResponse, Margin, RichText, Stroke, Ui};
use inkle_business::{RowModel, TaxesPage};

use self::columns::{COLUMNS, MIN_COL_WIDTH};
use self::header::render_table_header;
use self::row::render_record_row;
use crate::utils::colors::{COLOR_MUTED, HEADER_BG_COLOR, TABLE_BORDER_COLOR};

pub const EMPTY_TABLE_TEXT: &str = "No data available";

/// Helper to create a header cell with background.
fn header_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(12, 10))
        .show(ui, add_contents)
}

/// Helper to create a data cell with padding.
fn data_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .inner_margin(Margin::symmetric(12, 8))
        .show(ui, add_contents)
}

/// Renders the current page of rows. Opens the edit modal when a row's edit button is clicked.
pub fn records_table(page: &mut TaxesPage, ui: &mut Ui) {
    let mut edit_id: Option<String> = None;

    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .corner_radius(6.0)
        .show(ui, |ui| {
            egui::Grid::new("taxes_table")
                .num_columns(COLUMNS.len())
                .striped(true)
                .spacing([8.0, 0.0])
                .min_col_width(MIN_COL_WIDTH)
                .show(ui, |ui| {
                    render_table_header(page, ui);

                    // Derived after the header so a sort click shows this frame.
                    let model: RowModel<'_> = page.row_model();
                    if model.is_empty() {
                        data_cell(ui, |ui| {
                            ui.label(RichText::new(EMPTY_TABLE_TEXT).color(COLOR_MUTED));
                        });
                        ui.end_row();
                        return;
                    }

                    for record in &model.rows {
                        if render_record_row(ui, record) {
                            edit_id = Some(record.id.clone());
                        }
                    }
                });
        });

    if let Some(id) = edit_id {
        page.open_edit(&id);
    }
}
