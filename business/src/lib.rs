pub mod api;
pub mod config;
pub mod date;
pub mod edit;
pub mod error;
pub mod http;
pub mod model;
pub mod page;
pub mod table;

pub use config::BusinessConfig;
pub use edit::{CountryOptions, EditError, EditPhase, EditWorkflow, SAVE_FAILED_MESSAGE};
pub use error::{ApiError, ApiResult};
pub use model::{Country, PLACEHOLDER, RecordPatch, TaxRecord};
pub use page::{LoadStatus, PageEvent, TaxesPage};
pub use table::{
    DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, PageSummary, RowModel, SortColumn, SortDirection,
    Sorting, TableState,
};
