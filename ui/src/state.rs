use inkle_business::{BusinessConfig, TaxesPage};

/// The main application state.
#[derive(Debug, Default)]
pub struct State {
    /// Records, table inputs and the edit workflow of the customers page.
    pub taxes: TaxesPage,
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        Self {
            taxes: TaxesPage::new(config),
        }
    }

    pub fn test(base_url: String) -> Self {
        Self::new(BusinessConfig::new(base_url))
    }
}
