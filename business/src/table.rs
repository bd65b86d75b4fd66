//! Table state composition: country filter, global search, sort, paginate.
//!
//! The whole record collection is held in memory and the visible page is
//! re-derived from scratch on every call to [`TableState::derive`].

use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::date::parse_request_date;
use crate::model::TaxRecord;

/// Page sizes offered by the page-size selector.
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [5, 10, 20, 30, 50];

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Columns that can be sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Name,
    Gender,
    RequestDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sorting {
    pub column: SortColumn,
    pub direction: SortDirection,
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Text(String),
    Date(NaiveDate),
}

fn sort_key(record: &TaxRecord, column: SortColumn) -> Option<SortKey> {
    match column {
        SortColumn::Name => record.name.as_deref().map(|s| SortKey::Text(s.to_lowercase())),
        SortColumn::Gender => record
            .gender
            .as_deref()
            .map(|s| SortKey::Text(s.to_lowercase())),
        SortColumn::RequestDate => record
            .request_date
            .as_deref()
            .and_then(parse_request_date)
            .map(SortKey::Date),
    }
}

/// Orders present keys by `direction`; absent keys always go last.
fn compare_present<T: Ord>(a: Option<&T>, b: Option<&T>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => direction.apply(a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort of `rows`; `None` leaves filter order untouched.
pub fn sort_rows(rows: &mut Vec<&TaxRecord>, sorting: Option<Sorting>) {
    let Some(Sorting { column, direction }) = sorting else {
        return;
    };

    let mut keyed: Vec<_> = rows
        .drain(..)
        .map(|record| (sort_key(record, column), record))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare_present(a.as_ref(), b.as_ref(), direction));
    rows.extend(keyed.into_iter().map(|(_, record)| record));
}

/// Case-insensitive substring match over name, gender, country and raw request date.
pub fn matches_search(record: &TaxRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    [
        record.name.as_deref(),
        record.gender.as_deref(),
        record.country.as_deref(),
        record.request_date.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Exact, case-sensitive membership; an empty selection matches everything.
pub fn matches_countries(record: &TaxRecord, selected: &[String]) -> bool {
    selected.is_empty()
        || record
            .country
            .as_ref()
            .is_some_and(|country| selected.contains(country))
}

/// Sorted, de-duplicated, non-empty countries present in `records`.
pub fn unique_countries(records: &[TaxRecord]) -> Vec<String> {
    records
        .iter()
        .filter_map(|record| record.country.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn page_count(row_count: usize, page_size: usize) -> usize {
    row_count.div_ceil(page_size.max(1))
}

/// User-controlled inputs of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    search: String,
    country_filter: Vec<String>,
    sorting: Option<Sorting>,
    page_index: usize,
    page_size: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            search: String::new(),
            country_filter: Vec::new(),
            sorting: None,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term != self.search {
            self.search = term;
            self.page_index = 0;
        }
    }

    pub fn clear_search(&mut self) {
        self.set_search(String::new());
    }

    pub fn country_filter(&self) -> &[String] {
        &self.country_filter
    }

    pub fn is_country_selected(&self, country: &str) -> bool {
        self.country_filter.iter().any(|c| c == country)
    }

    /// Adds `country` to the selection, or removes it if already selected.
    pub fn toggle_country(&mut self, country: &str) {
        if let Some(pos) = self.country_filter.iter().position(|c| c == country) {
            self.country_filter.remove(pos);
        } else {
            self.country_filter.push(country.to_owned());
        }
        self.page_index = 0;
    }

    pub fn set_country_filter(&mut self, countries: Vec<String>) {
        self.country_filter = countries;
        self.page_index = 0;
    }

    pub fn sorting(&self) -> Option<Sorting> {
        self.sorting
    }

    pub fn set_sorting(&mut self, sorting: Option<Sorting>) {
        self.sorting = sorting;
    }

    /// Current direction if `column` is the active sort.
    pub fn sort_direction(&self, column: SortColumn) -> Option<SortDirection> {
        self.sorting
            .filter(|sorting| sorting.column == column)
            .map(|sorting| sorting.direction)
    }

    /// Header click: ascending unless the column is already ascending.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        let direction = match self.sort_direction(column) {
            Some(SortDirection::Ascending) => SortDirection::Descending,
            Some(SortDirection::Descending) | None => SortDirection::Ascending,
        };
        self.sorting = Some(Sorting { column, direction });
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Changes the page size, keeping the first visible row on the new page.
    pub fn set_page_size(&mut self, page_size: usize) {
        let page_size = page_size.max(1);
        let first_row = self.page_index.saturating_mul(self.page_size);
        self.page_size = page_size;
        self.page_index = first_row / page_size;
    }

    pub fn set_page_index(&mut self, page_index: usize) {
        self.page_index = page_index;
    }

    pub fn first_page(&mut self) {
        self.page_index = 0;
    }

    pub fn previous_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    pub fn next_page(&mut self, page_count: usize) {
        if self.page_index + 1 < page_count {
            self.page_index += 1;
        }
    }

    pub fn last_page(&mut self, page_count: usize) {
        self.page_index = page_count.saturating_sub(1);
    }

    /// Pulls the page index back inside `0..page_count` (0 when there are no pages).
    pub fn clamp_page_index(&mut self, page_count: usize) {
        self.page_index = self.page_index.min(page_count.saturating_sub(1));
    }

    /// Country filter, then search, then sort. Not paginated.
    pub fn filtered_rows<'a>(&self, records: &'a [TaxRecord]) -> Vec<&'a TaxRecord> {
        let mut rows: Vec<&TaxRecord> = records
            .iter()
            .filter(|record| matches_countries(record, &self.country_filter))
            .filter(|record| matches_search(record, &self.search))
            .collect();
        sort_rows(&mut rows, self.sorting);
        rows
    }

    /// Derives the rows of the current page.
    pub fn derive<'a>(&self, records: &'a [TaxRecord]) -> RowModel<'a> {
        let filtered = self.filtered_rows(records);
        let filtered_count = filtered.len();
        let page_count = page_count(filtered_count, self.page_size);
        let page_index = self.page_index.min(page_count.saturating_sub(1));

        let rows = filtered
            .into_iter()
            .skip(page_index * self.page_size)
            .take(self.page_size)
            .collect();

        RowModel {
            rows,
            filtered_count,
            total_count: records.len(),
            page_index,
            page_count,
            is_searching: !self.search.is_empty(),
        }
    }
}

/// The filtered, sorted and paginated view of the record collection.
#[derive(Debug, Clone, PartialEq)]
pub struct RowModel<'a> {
    pub rows: Vec<&'a TaxRecord>,
    pub filtered_count: usize,
    pub total_count: usize,
    pub page_index: usize,
    pub page_count: usize,
    pub is_searching: bool,
}

impl<'a> RowModel<'a> {
    pub fn can_previous_page(&self) -> bool {
        self.summary().can_previous_page()
    }

    pub fn can_next_page(&self) -> bool {
        self.summary().can_next_page()
    }

    /// Counts and page position without the borrowed rows.
    pub fn summary(&self) -> PageSummary {
        PageSummary {
            visible_count: self.rows.len(),
            filtered_count: self.filtered_count,
            total_count: self.total_count,
            page_index: self.page_index,
            page_count: self.page_count,
            is_searching: self.is_searching,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ids(&self) -> Vec<&'a str> {
        self.rows.iter().map(|record| record.id.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    pub visible_count: usize,
    pub filtered_count: usize,
    pub total_count: usize,
    pub page_index: usize,
    pub page_count: usize,
    pub is_searching: bool,
}

impl PageSummary {
    pub fn can_previous_page(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next_page(&self) -> bool {
        self.page_index + 1 < self.page_count
    }
}
