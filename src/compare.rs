// ⚖️ Comparison View Resolver
//
// Hand-off format: comma-separated decimal ids in a `cards` query parameter
// (`cards=1,3,7`). Bad tokens are dropped silently, never reported.

use crate::card::{Card, CardId};
use crate::format;
use serde::Serialize;

/// Query parameter carrying the id list
pub const CARDS_PARAM: &str = "cards";

// ============================================================================
// HAND-OFF ENCODING
// ============================================================================

/// Parse an id list from `1,3,7`, `cards=1,3,7` or `?view=grid&cards=1,3,7`.
///
/// Non-numeric and empty tokens are ignored; repeated ids are kept once.
pub fn parse_card_ids(reference: &str) -> Vec<CardId> {
    let trimmed = reference.trim().trim_start_matches('?');

    let list = if trimmed.contains('=') {
        trimmed
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| key.trim() == CARDS_PARAM)
            .map(|(_, value)| value)
            .unwrap_or("")
    } else {
        trimmed
    };

    let mut ids = Vec::new();
    for token in list.split(',') {
        if let Ok(id) = token.trim().parse::<CardId>() {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }
    ids
}

/// `cards=1,3,7`
pub fn share_query(ids: &[CardId]) -> String {
    let list: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    format!("{}={}", CARDS_PARAM, list.join(","))
}

/// Link from the catalog to the comparison view
pub fn compare_link(ids: &[CardId]) -> String {
    format!("/compare?{}", share_query(ids))
}

// ============================================================================
// RESOLUTION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "cards", rename_all = "snake_case")]
pub enum Comparison {
    /// No requested id resolved to a card
    NothingSelected,
    /// Resolved cards, in source order
    Cards(Vec<Card>),
}

/// One labelled line of the side-by-side view; one value per card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub values: Vec<String>,
}

/// Resolve requested ids against a record source.
///
/// The result follows the source's order, not the request's. Unknown ids drop out.
pub fn resolve(ids: &[CardId], source: &[Card]) -> Comparison {
    let cards: Vec<Card> = source
        .iter()
        .filter(|card| ids.contains(&card.id))
        .cloned()
        .map(|mut card| {
            card.selected = false;
            card
        })
        .collect();

    // A source with repeated ids would otherwise leak duplicates
    let mut unique: Vec<Card> = Vec::with_capacity(cards.len());
    for card in cards {
        if !unique.iter().any(|c| c.id == card.id) {
            unique.push(card);
        }
    }

    if unique.is_empty() {
        Comparison::NothingSelected
    } else {
        Comparison::Cards(unique)
    }
}

/// Parse a hand-off reference and resolve it in one step
pub fn resolve_reference(reference: &str, source: &[Card]) -> Comparison {
    resolve(&parse_card_ids(reference), source)
}

impl Comparison {
    pub fn cards(&self) -> &[Card] {
        match self {
            Comparison::NothingSelected => &[],
            Comparison::Cards(cards) => cards,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Comparison::NothingSelected)
    }

    /// Side-by-side rows; empty when nothing was selected
    pub fn rows(&self) -> Vec<ComparisonRow> {
        let cards = self.cards();
        if cards.is_empty() {
            return Vec::new();
        }

        vec![
            row("Bank", cards, |c| c.bank.clone()),
            row("Categories", cards, |c| c.category.join(", ")),
            row("Annual Fee", cards, |c| format::annual_fee(c.annual_fee)),
            row("Min. Income", cards, |c| format::lakhs(c.income_requirement)),
            row("Key Benefits", cards, |c| c.benefits.join("; ")),
        ]
    }
}

fn row(label: &'static str, cards: &[Card], value: impl Fn(&Card) -> String) -> ComparisonRow {
    ComparisonRow {
        label,
        values: cards.iter().map(value).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_cards;

    fn ids(comparison: &Comparison) -> Vec<CardId> {
        comparison.cards().iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_parse_plain_and_query_forms() {
        assert_eq!(parse_card_ids("1,3,7"), vec![1, 3, 7]);
        assert_eq!(parse_card_ids("cards=1,3,7"), vec![1, 3, 7]);
        assert_eq!(parse_card_ids("?view=grid&cards=2, 4"), vec![2, 4]);
    }

    #[test]
    fn test_parse_ignores_bad_tokens() {
        assert_eq!(parse_card_ids("1,abc,,3,-2,1"), vec![1, 3]);
        assert!(parse_card_ids("").is_empty());
        assert!(parse_card_ids("view=grid").is_empty());
    }

    #[test]
    fn test_share_query_round_trip() {
        assert_eq!(share_query(&[1, 3, 7]), "cards=1,3,7");
        assert_eq!(compare_link(&[2]), "/compare?cards=2");
        assert_eq!(parse_card_ids(&share_query(&[1, 3, 7])), vec![1, 3, 7]);
    }

    #[test]
    fn test_resolve_exact_ids() {
        let comparison = resolve(&[1, 3, 7], &seed_cards());
        assert_eq!(ids(&comparison), vec![1, 3, 7]);
    }

    #[test]
    fn test_resolve_drops_unknown() {
        let comparison = resolve(&[1, 999], &seed_cards());
        assert_eq!(ids(&comparison), vec![1]);
    }

    #[test]
    fn test_resolve_uses_source_order() {
        let comparison = resolve_reference("cards=7,3,1,3", &seed_cards());
        assert_eq!(ids(&comparison), vec![1, 3, 7]);
    }

    #[test]
    fn test_nothing_selected() {
        let comparison = resolve(&[999], &seed_cards());
        assert_eq!(comparison, Comparison::NothingSelected);
        assert!(comparison.rows().is_empty());
        assert!(resolve(&[], &seed_cards()).is_empty());
    }

    #[test]
    fn test_rows_one_value_per_card() {
        let comparison = resolve(&[4, 10], &seed_cards());
        let rows = comparison.rows();

        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r.values.len() == 2));

        let fee = rows.iter().find(|r| r.label == "Annual Fee").unwrap();
        assert_eq!(fee.values, vec!["FREE", "₹12,500"]);

        let income = rows.iter().find(|r| r.label == "Min. Income").unwrap();
        assert_eq!(income.values, vec!["₹2.5L", "₹30.0L"]);
    }
}
