// ☑️ Bounded Selection Set - at most 3 cards flagged for comparison
//
// The `selected` flag on each card IS the state; there is no separate store.
// Every toggle returns a fresh snapshot of the record set, so an evict-then-set
// pair is observed as one transition.

use crate::card::{Card, CardId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound on simultaneously selected cards
pub const MAX_SELECTED: usize = 3;

/// Notice shown when the reject policy refuses a 4th selection
pub const MAX_SELECTED_NOTICE: &str = "You can select a maximum of 3 cards for comparison.";

// ============================================================================
// POLICY
// ============================================================================

/// What happens when a 4th card is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Deselect the first selected card in record-set order, then select
    #[default]
    EvictOldest,

    /// Leave the selection unchanged and surface a notice
    Reject,
}

impl SelectionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionPolicy::EvictOldest => "evict",
            SelectionPolicy::Reject => "reject",
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "evict" | "evict_oldest" | "evict-oldest" => Ok(SelectionPolicy::EvictOldest),
            "reject" => Ok(SelectionPolicy::Reject),
            other => Err(anyhow::anyhow!(
                "Unknown selection policy '{}' (expected 'evict' or 'reject')",
                other
            )),
        }
    }
}

// ============================================================================
// TOGGLE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ToggleOutcome {
    Selected,
    Deselected,
    /// Selected after deselecting `evicted`
    Evicted { evicted: CardId },
    /// Bound reached under `SelectionPolicy::Reject`; nothing changed
    Rejected,
    /// No card with that id; nothing changed
    NotFound,
}

impl ToggleOutcome {
    /// User-visible notice, if this outcome needs one
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            ToggleOutcome::Rejected => Some(MAX_SELECTED_NOTICE),
            _ => None,
        }
    }

    pub fn changed(&self) -> bool {
        !matches!(self, ToggleOutcome::Rejected | ToggleOutcome::NotFound)
    }
}

/// Flip the selection of card `id`, honoring the 3-card bound.
///
/// Returns the next snapshot of the full record set; `cards` is untouched.
pub fn toggle_selection(
    cards: &[Card],
    id: CardId,
    policy: SelectionPolicy,
) -> (Vec<Card>, ToggleOutcome) {
    let mut next = cards.to_vec();

    let Some(target) = next.iter().position(|c| c.id == id) else {
        return (next, ToggleOutcome::NotFound);
    };

    if next[target].selected {
        next[target].selected = false;
        return (next, ToggleOutcome::Deselected);
    }

    if selected_count(&next) < MAX_SELECTED {
        next[target].selected = true;
        return (next, ToggleOutcome::Selected);
    }

    match policy {
        SelectionPolicy::Reject => {
            tracing::debug!(card_id = id, "selection rejected: bound reached");
            (next, ToggleOutcome::Rejected)
        }
        SelectionPolicy::EvictOldest => {
            // First selected card in record-set order gives way
            let Some(oldest) = next.iter().position(|c| c.selected) else {
                next[target].selected = true;
                return (next, ToggleOutcome::Selected);
            };
            let evicted = next[oldest].id;
            next[oldest].selected = false;
            next[target].selected = true;
            tracing::debug!(card_id = id, evicted, "selection evicted oldest");
            (next, ToggleOutcome::Evicted { evicted })
        }
    }
}

/// Deselect everything
pub fn clear_selection(cards: &[Card]) -> Vec<Card> {
    cards
        .iter()
        .cloned()
        .map(|mut c| {
            c.selected = false;
            c
        })
        .collect()
}

// ============================================================================
// PROJECTION
// ============================================================================

/// Selected cards, in record-set order
pub fn selected_cards(cards: &[Card]) -> Vec<Card> {
    cards.iter().filter(|c| c.selected).cloned().collect()
}

pub fn selected_ids(cards: &[Card]) -> Vec<CardId> {
    cards.iter().filter(|c| c.selected).map(|c| c.id).collect()
}

pub fn selected_count(cards: &[Card]) -> usize {
    cards.iter().filter(|c| c.selected).count()
}

// ============================================================================
// TESTS
// ============================================================================
