// 💳 Card Record - the single entity of the catalog
// Loaders for alternate static record sources (CSV / JSON)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Stable identifier of a card within a record set
pub type CardId = u32;

// ============================================================================
// CARD RECORD
// ============================================================================

/// A single credit-card entry.
///
/// Everything except `selected` is read-only for the lifetime of a session.
/// `selected` is only ever changed through `selection::toggle_selection`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub bank: String,
    pub name: String,

    /// Tags; membership is what matters, not order
    #[serde(default)]
    pub category: Vec<String>,

    /// Whole rupees
    pub annual_fee: u64,

    /// Annual income threshold, whole rupees
    pub income_requirement: u64,

    #[serde(default)]
    pub benefits: Vec<String>,

    #[serde(default)]
    pub image_prompt: String,

    #[serde(default)]
    pub selected: bool,
}

impl Card {
    pub fn new(id: CardId, bank: &str, name: &str) -> Self {
        Card {
            id,
            bank: bank.to_string(),
            name: name.to_string(),
            category: Vec::new(),
            annual_fee: 0,
            income_requirement: 0,
            benefits: Vec::new(),
            image_prompt: String::new(),
            selected: false,
        }
    }

    pub fn with_categories(mut self, categories: &[&str]) -> Self {
        self.category = categories.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn with_fee(mut self, annual_fee: u64) -> Self {
        self.annual_fee = annual_fee;
        self
    }

    pub fn with_income(mut self, income_requirement: u64) -> Self {
        self.income_requirement = income_requirement;
        self
    }

    pub fn with_benefits(mut self, benefits: &[&str]) -> Self {
        self.benefits = benefits.iter().map(|b| b.to_string()).collect();
        self
    }

    pub fn with_image_prompt(mut self, prompt: &str) -> Self {
        self.image_prompt = prompt.to_string();
        self
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.category.iter().any(|c| c == category)
    }
}

// ============================================================================
// RECORD SOURCES
// ============================================================================

/// Flat CSV row; list columns are `|`-separated
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CardRow {
    id: CardId,
    bank: String,
    name: String,
    #[serde(default)]
    category: String,
    annual_fee: u64,
    income_requirement: u64,
    #[serde(default)]
    benefits: String,
    #[serde(default)]
    image_prompt: String,
}

fn split_list(field: &str) -> Vec<String> {
    field
        .split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl From<CardRow> for Card {
    fn from(row: CardRow) -> Self {
        Card {
            id: row.id,
            bank: row.bank.trim().to_string(),
            name: row.name.trim().to_string(),
            category: split_list(&row.category),
            annual_fee: row.annual_fee,
            income_requirement: row.income_requirement,
            benefits: split_list(&row.benefits),
            image_prompt: row.image_prompt,
            selected: false,
        }
    }
}

/// Load a record set from CSV
pub fn load_csv(csv_path: &Path) -> Result<Vec<Card>> {
    let mut rdr = csv::Reader::from_path(csv_path)
        .with_context(|| format!("Failed to open CSV file: {}", csv_path.display()))?;

    let mut cards = Vec::new();
    for (line, result) in rdr.deserialize::<CardRow>().enumerate() {
        let row = result.with_context(|| {
            format!("Failed to deserialize card at row {} of {}", line + 1, csv_path.display())
        })?;
        cards.push(Card::from(row));
    }

    Ok(cards)
}

/// Load a record set from a JSON array of cards
pub fn load_json(json_path: &Path) -> Result<Vec<Card>> {
    let content = fs::read_to_string(json_path)
        .with_context(|| format!("Failed to read card file: {}", json_path.display()))?;

    let cards: Vec<Card> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse cards JSON from {}", json_path.display()))?;

    Ok(cards)
}

/// Load a record source, picking the format from the file extension.
///
/// Ids must be unique. Selection never survives a reload, so every
/// `selected` flag comes back `false`.
pub fn load_cards(path: &Path) -> Result<Vec<Card>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let mut cards = match extension.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        other => {
            return Err(anyhow::anyhow!(
                "Unsupported card source format '{}' for {}",
                other,
                path.display()
            ))
        }
    };

    ensure_unique_ids(&cards)?;

    for card in &mut cards {
        card.selected = false;
    }

    tracing::debug!(count = cards.len(), path = %path.display(), "loaded card source");
    Ok(cards)
}

/// Reject record sets where two cards share an id
pub fn ensure_unique_ids(cards: &[Card]) -> Result<()> {
    let mut seen = HashSet::new();
    for card in cards {
        if !seen.insert(card.id) {
            anyhow::bail!("Duplicate card id {} ({} {})", card.id, card.bank, card.name);
        }
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
