mod footer;
mod header;
pub mod taxes;

pub use footer::{copyright_line, footer};
pub use header::{NAV_ITEMS, header};
pub use taxes::{edit_modal, taxes_page};
