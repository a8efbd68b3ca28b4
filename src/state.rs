// 🔁 Catalog state - model / update / view
//
// One explicit state object per session. Events produce a new snapshot;
// `project` derives everything the views render. Nothing is patched incrementally.

use crate::card::{Card, CardId};
use crate::compare::compare_link;
use crate::filters::{FeeRange, FilterCriteria, IncomeRange};
use crate::selection::{self, SelectionPolicy, ToggleOutcome};
use serde::{Deserialize, Serialize};

// ============================================================================
// MODEL
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogState {
    /// Full record set: the single source of truth, selection flags included
    pub cards: Vec<Card>,
    pub criteria: FilterCriteria,
    pub policy: SelectionPolicy,
    /// Blocking notice from the last event, if any
    pub notice: Option<String>,
}

impl CatalogState {
    pub fn new(cards: Vec<Card>, policy: SelectionPolicy) -> Self {
        CatalogState {
            cards,
            criteria: FilterCriteria::default(),
            policy,
            notice: None,
        }
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }
}

// ============================================================================
// EVENTS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CatalogEvent {
    SetSearch { text: String },
    ToggleBank { bank: String },
    ToggleCategory { category: String },
    SetFeeRange {
        low: u64,
        #[serde(default = "crate::filters::open_upper", with = "crate::filters::open_upper_bound")]
        high: u64,
    },
    SetIncomeRange { range: IncomeRange },
    ClearFilters,
    ToggleSelection { id: CardId },
    ClearSelection,
    DismissNotice,
}

/// Apply one event, returning the next state
pub fn update(state: &CatalogState, event: CatalogEvent) -> CatalogState {
    let mut next = state.clone();
    next.notice = None;

    match event {
        CatalogEvent::SetSearch { text } => next.criteria.search_text = text,
        CatalogEvent::ToggleBank { bank } => next.criteria.toggle_bank(&bank),
        CatalogEvent::ToggleCategory { category } => next.criteria.toggle_category(&category),
        CatalogEvent::SetFeeRange { low, high } => next.criteria.fee_range = FeeRange::new(low, high),
        CatalogEvent::SetIncomeRange { range } => next.criteria.income_range = range,
        CatalogEvent::ClearFilters => next.criteria.clear(),
        CatalogEvent::ToggleSelection { id } => {
            let (cards, outcome) = selection::toggle_selection(&state.cards, id, state.policy);
            next.cards = cards;
            next.notice = outcome.notice().map(str::to_string);
        }
        CatalogEvent::ClearSelection => next.cards = selection::clear_selection(&state.cards),
        CatalogEvent::DismissNotice => {}
    }

    next
}

/// Apply a toggle and also report what happened (TUI status line)
pub fn toggle(state: &CatalogState, id: CardId) -> (CatalogState, ToggleOutcome) {
    let (cards, outcome) = selection::toggle_selection(&state.cards, id, state.policy);
    let next = CatalogState {
        cards,
        criteria: state.criteria.clone(),
        policy: state.policy,
        notice: outcome.notice().map(str::to_string),
    };
    (next, outcome)
}

// ============================================================================
// VIEW
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogView {
    /// Cards passing the current criteria, record-set order
    pub filtered: Vec<Card>,
    /// Selected cards over the FULL set, independent of filters
    pub selected: Vec<Card>,
    pub total: usize,
    pub criteria: FilterCriteria,
    /// Present once at least one card is selected
    pub compare_link: Option<String>,
    pub notice: Option<String>,
}

/// Derive the rendered view from a state snapshot
pub fn project(state: &CatalogState) -> CatalogView {
    let filtered = state.criteria.apply(&state.cards);
    let selected = selection::selected_cards(&state.cards);
    let compare = if selected.is_empty() {
        None
    } else {
        let ids: Vec<CardId> = selected.iter().map(|c| c.id).collect();
        Some(compare_link(&ids))
    };

    CatalogView {
        filtered,
        selected,
        total: state.cards.len(),
        criteria: state.criteria.clone(),
        compare_link: compare,
        notice: state.notice.clone(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
