//! Customers page widgets.
//!
//! - `search_bar`: Global search input
//! - `country_filter`: Country multi-select in the Country header
//! - `table`: Sortable record grid
//! - `pagination`: Pager, page-size selector and result summary
//! - `edit_modal`: Edit Customer modal
//! - `page`: Composes the above

pub mod country_filter;
pub mod edit_modal;
mod page;
pub mod pagination;
pub mod search_bar;
pub mod table;

pub use edit_modal::edit_modal;
pub use page::{LOADING_TEXT, taxes_page};
