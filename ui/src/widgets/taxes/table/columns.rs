//! Column definitions for the customers table.

use inkle_business::{SortColumn, SortDirection};

pub const MIN_COL_WIDTH: f32 = 120.0;

/// Table columns in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Entity,
    Gender,
    RequestDate,
    Country,
    Edit,
}

pub const COLUMNS: [Column; 5] = [
    Column::Entity,
    Column::Gender,
    Column::RequestDate,
    Column::Country,
    Column::Edit,
];

impl Column {
    pub fn label(self) -> &'static str {
        match self {
            Self::Entity => "Entity",
            Self::Gender => "Gender",
            Self::RequestDate => "Request date",
            Self::Country => "Country",
            Self::Edit => "Edit",
        }
    }

    /// The sort key behind a clickable header, if the column is sortable.
    pub fn sort_column(self) -> Option<SortColumn> {
        match self {
            Self::Entity => Some(SortColumn::Name),
            Self::Gender => Some(SortColumn::Gender),
            Self::RequestDate => Some(SortColumn::RequestDate),
            Self::Country | Self::Edit => None,
        }
    }
}

#[inline]
pub fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => "↑",
        Some(SortDirection::Descending) => "↓",
        None => "↕",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_data_columns_sort() {
        let sortable: Vec<&str> = COLUMNS
            .iter()
            .filter(|column| column.sort_column().is_some())
            .map(|column| column.label())
            .collect();
        assert_eq!(sortable, vec!["Entity", "Gender", "Request date"]);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(sort_indicator(None), "↕");
        assert_eq!(sort_indicator(Some(SortDirection::Ascending)), "↑");
        assert_eq!(sort_indicator(Some(SortDirection::Descending)), "↓");
    }
}
