//! Country multi-select hosted in the Country column header.
//!
//! The popup closes when a click lands outside both its toggle button and the
//! popup itself. The check only looks at this instance's two rects.

use egui::{Area, Frame, Id, Order, Pos2, Rect, RichText, ScrollArea, Ui, vec2};
use inkle_business::TaxesPage;

use crate::utils::colors::{COLOR_BRAND, COLOR_MUTED};

const POPUP_MIN_WIDTH: f32 = 200.0;
const POPUP_MAX_HEIGHT: f32 = 240.0;

/// Whether a click at `click` dismisses a popup toggled by `button`.
pub fn is_outside_click(click: Option<Pos2>, button: Rect, popup: Rect) -> bool {
    click.is_some_and(|pos| !button.contains(pos) && !popup.contains(pos))
}

pub fn toggle_label(selected: usize) -> String {
    if selected == 0 {
        "▼".to_owned()
    } else {
        format!("▼ {selected}")
    }
}

/// Renders the "Country" header label, the toggle button and, when open, the popup.
pub fn country_filter(page: &mut TaxesPage, ui: &mut Ui) {
    let selected = page.table.country_filter().len();

    let button = ui
        .horizontal(|ui| {
            ui.strong("Country");
            let text = RichText::new(toggle_label(selected));
            let text = if selected > 0 {
                text.color(COLOR_BRAND).strong()
            } else {
                text
            };
            ui.button(text).on_hover_text("Filter by country")
        })
        .inner;

    if button.clicked() {
        page.toggle_country_filter();
    }

    if !page.is_country_filter_open() {
        return;
    }

    let countries = page.filter_countries();
    let popup = Area::new(Id::new("country_filter_popup"))
        .order(Order::Foreground)
        .fixed_pos(button.rect.left_bottom() + vec2(0.0, 4.0))
        .show(ui.ctx(), |ui| {
            Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_min_width(POPUP_MIN_WIDTH);
                if countries.is_empty() {
                    ui.label(RichText::new("No countries available").color(COLOR_MUTED));
                    return;
                }
                ScrollArea::vertical()
                    .max_height(POPUP_MAX_HEIGHT)
                    .show(ui, |ui| {
                        for country in &countries {
                            let mut checked = page.table.is_country_selected(country);
                            if ui.checkbox(&mut checked, country.as_str()).changed() {
                                page.table.toggle_country(country);
                            }
                        }
                    });
            });
        });

    let click = ui.input(|i| {
        if i.pointer.any_pressed() {
            i.pointer.interact_pos()
        } else {
            None
        }
    });
    if !button.clicked() && is_outside_click(click, button.rect, popup.response.rect) {
        page.close_country_filter();
    }
}
