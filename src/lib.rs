// CreditWise - Core Library
// Card catalog filtering, bounded comparison selection and the compare hand-off.
// Used by the TUI/CLI binary, the API server and the tests.

pub mod card;
pub mod catalog;
pub mod compare;
pub mod config;
pub mod filters;
pub mod format;
pub mod selection;
pub mod state;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use card::{Card, CardId, load_cards, load_csv, load_json};
pub use catalog::{
    seed_cards, bank_options, category_options, distinct_banks, distinct_categories,
    BANKS, CATEGORIES, FEE_MAX, FEE_MIN,
};
pub use compare::{
    compare_link, parse_card_ids, resolve, resolve_reference, share_query,
    Comparison, ComparisonRow,
};
pub use config::AppConfig;
pub use filters::{filter_cards, FeeRange, FilterCriteria, IncomeRange};
pub use selection::{
    clear_selection, selected_cards, selected_count, selected_ids, toggle_selection,
    SelectionPolicy, ToggleOutcome, MAX_SELECTED,
};
pub use state::{project, update, CatalogEvent, CatalogState, CatalogView};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
