//! Pagination controls, page-size selector and the result summary.

use egui::{Button, ComboBox, RichText, Ui};
use inkle_business::{PAGE_SIZE_OPTIONS, PageSummary, TableState};

use crate::utils::colors::{COLOR_BRAND, COLOR_MUTED};

pub fn page_label(page_index: usize, page_count: usize) -> String {
    format!("Page {} of {}", page_index + 1, page_count)
}

pub fn page_size_label(page_size: usize) -> String {
    format!("Show {page_size}")
}

pub fn summary_label(summary: &PageSummary) -> String {
    format!(
        "Showing {} of {} results",
        summary.visible_count, summary.filtered_count
    )
}

pub fn filtered_from_label(total: usize) -> String {
    format!("(filtered from {total} total)")
}

/// Renders the pager for `summary` and applies clicks to `table`.
pub fn pagination(table: &mut TableState, summary: &PageSummary, ui: &mut Ui) {
    let page_count = summary.page_count;

    ui.horizontal_wrapped(|ui| {
        if ui
            .add_enabled(summary.can_previous_page(), Button::new("⏮"))
            .on_hover_text("First page")
            .clicked()
        {
            table.first_page();
        }
        if ui
            .add_enabled(summary.can_previous_page(), Button::new("◀"))
            .on_hover_text("Previous page")
            .clicked()
        {
            table.previous_page();
        }
        if ui
            .add_enabled(summary.can_next_page(), Button::new("▶"))
            .on_hover_text("Next page")
            .clicked()
        {
            table.next_page(page_count);
        }
        if ui
            .add_enabled(summary.can_next_page(), Button::new("⏭"))
            .on_hover_text("Last page")
            .clicked()
        {
            table.last_page(page_count);
        }

        ui.add_space(16.0);
        ui.label(RichText::new(page_label(summary.page_index, page_count)).strong());

        ui.add_space(16.0);
        let mut page_size = table.page_size();
        ComboBox::from_id_salt("page_size")
            .selected_text(page_size_label(page_size))
            .show_ui(ui, |ui| {
                for option in PAGE_SIZE_OPTIONS {
                    ui.selectable_value(&mut page_size, option, page_size_label(option));
                }
            });
        if page_size != table.page_size() {
            table.set_page_size(page_size);
        }

        ui.add_space(16.0);
        ui.label(RichText::new(summary_label(summary)).color(COLOR_MUTED));
        if summary.is_searching {
            ui.label(RichText::new(filtered_from_label(summary.total_count)).color(COLOR_BRAND));
        }
    });
}
