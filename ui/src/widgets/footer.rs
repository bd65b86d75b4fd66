//! Page footer: brand blurb, link columns and the copyright line.

use chrono::{Datelike, Local};
use egui::{RichText, Ui};

use crate::utils::colors::{COLOR_BRAND, COLOR_MUTED};

const BLURB: &str = "Streamline your business operations with our powerful and intuitive \
                     customer management platform. Built for modern teams.";

const QUICK_LINKS: [&str; 4] = ["Dashboard", "Customers", "Analytics", "Settings"];
const SUPPORT_LINKS: [&str; 4] = ["Documentation", "Help Center", "Contact Us", "Privacy Policy"];

pub fn copyright_line(year: i32) -> String {
    format!("© {year} Inkle. All rights reserved.")
}

pub fn footer(ui: &mut Ui) {
    ui.add_space(12.0);
    ui.columns(3, |columns| {
        columns[0].label(RichText::new("Inkle").size(18.0).strong().color(COLOR_BRAND));
        columns[0].label(RichText::new(BLURB).color(COLOR_MUTED));

        link_column(&mut columns[1], "Quick Links", &QUICK_LINKS);
        link_column(&mut columns[2], "Support", &SUPPORT_LINKS);
    });

    ui.separator();
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(copyright_line(Local::now().year()))
                .small()
                .color(COLOR_MUTED),
        );
    });
    ui.add_space(8.0);
}

fn link_column(ui: &mut Ui, title: &str, links: &[&str]) {
    ui.label(RichText::new(title).strong());
    ui.add_space(4.0);
    for link in links {
        ui.label(RichText::new(*link).color(COLOR_MUTED));
    }
}
