// 🔍 Catalog Filter Engine
//
// Derives the displayed subset of cards from the full record set.
// All criteria are pure predicates combined with AND; categories combine with OR.
// Output keeps the record-set order (stable filter, never sorted).

use crate::card::Card;
use crate::catalog::FEE_MIN;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// INCOME RANGE
// ============================================================================

/// Annual income bracket; brackets are half-open `[low, high)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IncomeRange {
    #[default]
    #[serde(rename = "all", alias = "All")]
    All,

    #[serde(rename = "under-3l", alias = "Under ₹3,00,000")]
    Under3L,

    #[serde(rename = "3l-6l", alias = "₹3,00,000 - ₹6,00,000")]
    From3LTo6L,

    #[serde(rename = "6l-12l", alias = "₹6,00,000 - ₹12,00,000")]
    From6LTo12L,

    #[serde(rename = "over-12l", alias = "Over ₹12,00,000")]
    Over12L,
}

impl IncomeRange {
    /// Every option, in filter-panel order
    pub const ALL_OPTIONS: [IncomeRange; 5] = [
        IncomeRange::All,
        IncomeRange::Under3L,
        IncomeRange::From3LTo6L,
        IncomeRange::From6LTo12L,
        IncomeRange::Over12L,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IncomeRange::All => "All",
            IncomeRange::Under3L => "Under ₹3,00,000",
            IncomeRange::From3LTo6L => "₹3,00,000 - ₹6,00,000",
            IncomeRange::From6LTo12L => "₹6,00,000 - ₹12,00,000",
            IncomeRange::Over12L => "Over ₹12,00,000",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            IncomeRange::All => "all",
            IncomeRange::Under3L => "under-3l",
            IncomeRange::From3LTo6L => "3l-6l",
            IncomeRange::From6LTo12L => "6l-12l",
            IncomeRange::Over12L => "over-12l",
        }
    }

    /// Accepts either the display label or the short key
    pub fn from_label(text: &str) -> Option<IncomeRange> {
        let trimmed = text.trim();
        Self::ALL_OPTIONS
            .iter()
            .copied()
            .find(|r| r.label() == trimmed || r.key().eq_ignore_ascii_case(trimmed))
    }

    /// `[low, high)` bounds in rupees; `None` for the sentinel
    pub fn bounds(&self) -> Option<(u64, Option<u64>)> {
        match self {
            IncomeRange::All => None,
            IncomeRange::Under3L => Some((0, Some(300_000))),
            IncomeRange::From3LTo6L => Some((300_000, Some(600_000))),
            IncomeRange::From6LTo12L => Some((600_000, Some(1_200_000))),
            IncomeRange::Over12L => Some((1_200_000, None)),
        }
    }

    pub fn contains(&self, income: u64) -> bool {
        match self.bounds() {
            None => true,
            Some((low, Some(high))) => income >= low && income < high,
            Some((low, None)) => income >= low,
        }
    }
}

impl fmt::Display for IncomeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for IncomeRange {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IncomeRange::from_label(s).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown income range '{}' (expected one of: all, under-3l, 3l-6l, 6l-12l, over-12l)",
                s
            )
        })
    }
}

// ============================================================================
// FEE RANGE
// ============================================================================

/// Inclusive annual-fee bounds. Always active; `full()` is the no-op bound.
///
/// An open `high` (`u64::MAX`) travels as JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRange {
    pub low: u64,
    #[serde(default = "open_upper", with = "open_upper_bound")]
    pub high: u64,
}

pub(crate) fn open_upper() -> u64 {
    u64::MAX
}

/// `u64::MAX` <-> `null`, so the bound stays inside JSON's safe integer range
pub(crate) mod open_upper_bound {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(high: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        if *high == u64::MAX {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(high)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(u64::MAX))
    }
}

impl FeeRange {
    pub fn new(low: u64, high: u64) -> Self {
        FeeRange { low, high }
    }

    pub fn full() -> Self {
        FeeRange { low: FEE_MIN, high: u64::MAX }
    }

    pub fn is_full(&self) -> bool {
        self.low == FEE_MIN && self.high == u64::MAX
    }

    pub fn contains(&self, fee: u64) -> bool {
        self.low <= fee && fee <= self.high
    }
}

impl Default for FeeRange {
    fn default() -> Self {
        Self::full()
    }
}

// ============================================================================
// CRITERIA BUNDLE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Case-insensitive substring on name or bank; empty = inactive
    pub search_text: String,

    /// Empty = inactive
    pub banks: BTreeSet<String>,

    /// Empty = inactive; otherwise at least one shared tag
    pub categories: BTreeSet<String>,

    pub fee_range: FeeRange,

    pub income_range: IncomeRange,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: &str) -> Self {
        self.search_text = text.to_string();
        self
    }

    pub fn with_bank(mut self, bank: &str) -> Self {
        self.banks.insert(bank.to_string());
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.categories.insert(category.to_string());
        self
    }

    pub fn with_fee_range(mut self, low: u64, high: u64) -> Self {
        self.fee_range = FeeRange::new(low, high);
        self
    }

    pub fn with_income_range(mut self, range: IncomeRange) -> Self {
        self.income_range = range;
        self
    }

    /// Add the bank if absent, remove it if present
    pub fn toggle_bank(&mut self, bank: &str) {
        if !self.banks.remove(bank) {
            self.banks.insert(bank.to_string());
        }
    }

    /// Add the category if absent, remove it if present
    pub fn toggle_category(&mut self, category: &str) {
        if !self.categories.remove(category) {
            self.categories.insert(category.to_string());
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Does a single card pass every active criterion?
    pub fn matches(&self, card: &Card) -> bool {
        // Membership and range checks first, substring search last
        if !self.banks.is_empty() && !self.banks.contains(&card.bank) {
            return false;
        }

        if !self.categories.is_empty()
            && !self.categories.iter().any(|tag| card.has_category(tag))
        {
            return false;
        }

        if !self.fee_range.contains(card.annual_fee) {
            return false;
        }

        if !self.income_range.contains(card.income_requirement) {
            return false;
        }

        if self.search_text.is_empty() {
            return true;
        }

        let needle = self.search_text.to_lowercase();
        card.name.to_lowercase().contains(&needle) || card.bank.to_lowercase().contains(&needle)
    }

    /// Ordered subsequence of `cards` satisfying all criteria
    pub fn apply(&self, cards: &[Card]) -> Vec<Card> {
        cards.iter().filter(|card| self.matches(card)).cloned().collect()
    }

    /// Short human summary of active criteria (status bars, CLI)
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        if !self.search_text.is_empty() {
            parts.push(format!("search \"{}\"", self.search_text));
        }
        if !self.banks.is_empty() {
            parts.push(format!("banks: {}", join(&self.banks)));
        }
        if !self.categories.is_empty() {
            parts.push(format!("categories: {}", join(&self.categories)));
        }
        if !self.fee_range.is_full() {
            if self.fee_range.high == u64::MAX {
                parts.push(format!("fee ≥ ₹{}", self.fee_range.low));
            } else {
                parts.push(format!("fee ₹{}-₹{}", self.fee_range.low, self.fee_range.high));
            }
        }
        if self.income_range != IncomeRange::All {
            parts.push(format!("income: {}", self.income_range.label()));
        }

        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" | ")
        }
    }
}

fn join(set: &BTreeSet<String>) -> String {
    set.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

/// Free-function form of `FilterCriteria::apply`
pub fn filter_cards(cards: &[Card], criteria: &FilterCriteria) -> Vec<Card> {
    criteria.apply(cards)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_cards;

    fn ids(cards: &[Card]) -> Vec<u32> {
        cards.iter().map(|c| c.id).collect()
    }

    fn is_subsequence(sub: &[Card], full: &[Card]) -> bool {
        let mut it = full.iter();
        sub.iter().all(|s| it.any(|f| f.id == s.id))
    }

    #[test]
    fn test_default_criteria_match_everything() {
        let cards = seed_cards();
        let result = filter_cards(&cards, &FilterCriteria::default());
        assert_eq!(ids(&result), ids(&cards));
    }

    #[test]
    fn test_search_sapphiro_case_insensitive() {
        let cards = seed_cards();
        let result = FilterCriteria::new().with_search("sapphiro").apply(&cards);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].bank, "ICICI Bank");
        assert_eq!(result[0].name, "Sapphiro");
    }

    #[test]
    fn test_search_matches_bank_name() {
        let cards = seed_cards();
        let result = FilterCriteria::new().with_search("AMERICAN").apply(&cards);
        assert_eq!(ids(&result), vec![9, 14]);
    }

    #[test]
    fn test_bank_filter_preserves_order() {
        let cards = seed_cards();
        let result = FilterCriteria::new().with_bank("HDFC Bank").apply(&cards);

        assert_eq!(ids(&result), vec![1, 7, 10, 12, 15]);
        assert!(result.iter().all(|c| c.bank == "HDFC Bank"));
    }

    #[test]
    fn test_categories_are_or_within_group() {
        let cards = seed_cards();
        let result = FilterCriteria::new()
            .with_category("Luxury")
            .with_category("UPI")
            .apply(&cards);

        assert_eq!(ids(&result), vec![8, 9, 10, 12, 15]);
    }

    #[test]
    fn test_groups_are_and_across() {
        let cards = seed_cards();
        let result = FilterCriteria::new()
            .with_bank("HDFC Bank")
            .with_category("Luxury")
            .apply(&cards);

        assert_eq!(ids(&result), vec![10, 15]);
    }

    #[test]
    fn test_income_under_3l() {
        let cards = seed_cards();
        let result = FilterCriteria::new()
            .with_income_range(IncomeRange::Under3L)
            .apply(&cards);

        assert_eq!(ids(&result), vec![4, 12, 15]);
        assert!(result.iter().all(|c| c.income_requirement < 300_000));
    }

    #[test]
    fn test_income_brackets_are_half_open() {
        assert!(!IncomeRange::Under3L.contains(300_000));
        assert!(IncomeRange::From3LTo6L.contains(300_000));
        assert!(!IncomeRange::From3LTo6L.contains(600_000));
        assert!(IncomeRange::From6LTo12L.contains(600_000));
        assert!(IncomeRange::Over12L.contains(1_200_000));
        assert!(IncomeRange::All.contains(0));
    }

    #[test]
    fn test_fee_range_inclusive() {
        let cards = seed_cards();
        let result = FilterCriteria::new().with_fee_range(0, 499).apply(&cards);
        assert_eq!(ids(&result), vec![3, 4, 8, 13]);
    }

    #[test]
    fn test_full_fee_range_is_noop() {
        let cards = seed_cards();
        let max_fee = cards.iter().map(|c| c.annual_fee).max().unwrap();

        let base = FilterCriteria::new().with_category("Travel");
        let bounded = base.clone().with_fee_range(0, max_fee);

        assert_eq!(ids(&base.apply(&cards)), ids(&bounded.apply(&cards)));
    }

    #[test]
    fn test_inverted_fee_range_matches_nothing() {
        let cards = seed_cards();
        assert!(FilterCriteria::new().with_fee_range(5000, 100).apply(&cards).is_empty());
    }

    #[test]
    fn test_empty_category_card_tolerated() {
        let cards = vec![Card::new(1, "Yes Bank", "Plain"), Card::new(2, "Yes Bank", "Tagged").with_categories(&["Travel"])];

        assert_eq!(ids(&FilterCriteria::new().apply(&cards)), vec![1, 2]);
        assert_eq!(ids(&FilterCriteria::new().with_category("Travel").apply(&cards)), vec![2]);
    }

    #[test]
    fn test_filter_is_idempotent_and_stable() {
        let cards = seed_cards();
        let combos = vec![
            FilterCriteria::new().with_search("card"),
            FilterCriteria::new().with_category("Cashback").with_fee_range(0, 1000),
            FilterCriteria::new().with_bank("Axis Bank").with_income_range(IncomeRange::From3LTo6L),
            FilterCriteria::new().with_search("m").with_category("Rewards").with_category("Dining"),
        ];

        for criteria in combos {
            let once = criteria.apply(&cards);
            let twice = criteria.apply(&once);
            assert_eq!(ids(&once), ids(&twice));
            assert!(is_subsequence(&once, &cards));
        }
    }

    #[test]
    fn test_toggle_and_clear() {
        let mut criteria = FilterCriteria::new();
        criteria.toggle_bank("SBI Card");
        criteria.toggle_category("Travel");
        assert!(criteria.banks.contains("SBI Card"));

        criteria.toggle_bank("SBI Card");
        assert!(criteria.banks.is_empty());

        criteria.search_text = "x".to_string();
        criteria.clear();
        assert!(criteria.is_default());
    }

    #[test]
    fn test_open_fee_bound_is_null_in_json() {
        let json = serde_json::to_value(FilterCriteria::default()).unwrap();
        assert!(json["fee_range"]["high"].is_null());

        let back: FilterCriteria = serde_json::from_value(json).unwrap();
        assert!(back.fee_range.is_full());

        let capped: FeeRange = serde_json::from_str(r#"{"low": 0, "high": 5000}"#).unwrap();
        assert_eq!(capped, FeeRange::new(0, 5000));
        let open: FeeRange = serde_json::from_str(r#"{"low": 500}"#).unwrap();
        assert_eq!(open, FeeRange::new(500, u64::MAX));
    }

    #[test]
    fn test_income_range_parsing() {
        assert_eq!("under-3l".parse::<IncomeRange>().unwrap(), IncomeRange::Under3L);
        assert_eq!(IncomeRange::from_label("Over ₹12,00,000"), Some(IncomeRange::Over12L));
        assert!("lots".parse::<IncomeRange>().is_err());
    }

    #[test]
    fn test_criteria_summary() {
        assert_eq!(FilterCriteria::new().summary(), "none");
        let summary = FilterCriteria::new().with_bank("HDFC Bank").summary();
        assert!(summary.contains("HDFC Bank"));
    }
}
