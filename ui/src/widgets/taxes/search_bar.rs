//! Global search input with a clear button.

use egui::{TextEdit, Ui};
use inkle_business::TableState;

pub const SEARCH_HINT: &str = "Search by entity, gender, country, or date...";

pub fn search_bar(table: &mut TableState, ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.label("🔍");

        let mut term = table.search().to_owned();
        let clear_width = if term.is_empty() { 0.0 } else { 28.0 };
        let response = ui.add(
            TextEdit::singleline(&mut term)
                .hint_text(SEARCH_HINT)
                .desired_width(ui.available_width() - clear_width),
        );
        if response.changed() {
            table.set_search(term);
        }

        if !table.search().is_empty()
            && ui
                .small_button("✖")
                .on_hover_text("Clear search")
                .clicked()
        {
            table.clear_search();
        }
    });
}
