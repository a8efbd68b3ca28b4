// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use creditwise::{
    format, resolve_reference, AppConfig, Card, Comparison, FilterCriteria, IncomeRange,
    SelectionPolicy,
};

#[derive(Debug, Parser)]
#[command(name = "creditwise")]
#[command(about = "Browse, filter and compare credit cards")]
struct Cli {
    /// JSON config file (overrides CREDITWISE_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Card source (CSV or JSON); defaults to the built-in catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Overflow policy for a 4th selection: evict | reject
    #[arg(long, global = true)]
    policy: Option<SelectionPolicy>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the catalog, filtered
    List {
        /// Case-insensitive match on card or bank name
        #[arg(long)]
        search: Option<String>,

        /// Issuer to include (repeatable)
        #[arg(long = "bank")]
        banks: Vec<String>,

        /// Category tag to include (repeatable, any match)
        #[arg(long = "category")]
        categories: Vec<String>,

        #[arg(long)]
        fee_min: Option<u64>,

        #[arg(long)]
        fee_max: Option<u64>,

        /// all | under-3l | 3l-6l | 6l-12l | over-12l
        #[arg(long)]
        income: Option<IncomeRange>,
    },

    /// Print a side-by-side comparison for `1,3,7` or `cards=1,3,7`
    Compare {
        reference: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(catalog) = cli.catalog {
        config.catalog_path = Some(catalog);
    }
    if let Some(policy) = cli.policy {
        config.selection_policy = policy;
    }

    let cards = config.load_cards()?;

    match cli.command {
        Some(Command::List { search, banks, categories, fee_min, fee_max, income }) => {
            let mut criteria = FilterCriteria::new();
            if let Some(search) = search {
                criteria.search_text = search;
            }
            criteria.banks = banks.into_iter().collect();
            criteria.categories = categories.into_iter().collect();
            criteria.fee_range.low = fee_min.unwrap_or(criteria.fee_range.low);
            criteria.fee_range.high = fee_max.unwrap_or(criteria.fee_range.high);
            if let Some(income) = income {
                criteria.income_range = income;
            }
            run_list(&cards, &criteria);
        }
        Some(Command::Compare { reference }) => run_compare(&cards, &reference),
        None => run_ui_mode(cards, config.selection_policy)?,
    }

    Ok(())
}

fn run_list(cards: &[Card], criteria: &FilterCriteria) {
    let results = criteria.apply(cards);

    println!("💳 Available Cards ({} of {})", results.len(), cards.len());
    println!("   Filters: {}", criteria.summary());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    if results.is_empty() {
        println!("No cards found. Try adjusting your filters or search criteria.");
        return;
    }

    println!("{:>3}  {:<18} {:<22} {:>10} {:>12}  {}", "ID", "Bank", "Card", "Fee", "Min Income", "Categories");
    for card in &results {
        println!(
            "{:>3}  {:<18} {:<22} {:>10} {:>12}  {}",
            card.id,
            card.bank,
            card.name,
            format::annual_fee(card.annual_fee),
            format::rupees(card.income_requirement),
            card.category.join(", ")
        );
    }
}

fn run_compare(cards: &[Card], reference: &str) {
    let comparison = resolve_reference(reference, cards);

    let selected = match &comparison {
        Comparison::NothingSelected => {
            println!("No cards selected for comparison.");
            return;
        }
        Comparison::Cards(selected) => selected,
    };

    println!("⚖️  Comparing {} card{}", selected.len(), if selected.len() > 1 { "s" } else { "" });
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    print!("{:<14}", "");
    for card in selected {
        print!("│ {:<30}", card.name);
    }
    println!();

    for row in comparison.rows() {
        print!("{:<14}", row.label);
        for value in &row.values {
            print!("│ {:<30}", value);
        }
        println!();
    }
}

#[cfg(feature = "tui")]
fn run_ui_mode(cards: Vec<Card>, policy: SelectionPolicy) -> Result<()> {
    println!("🖥️  Loading CreditWise...\n");
    println!("✓ Loaded {} cards (selection policy: {})\n", cards.len(), policy);

    let mut app = ui::App::new(cards, policy);
    ui::run_ui(&mut app)?;

    println!("\n✅ UI closed successfully");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_cards: Vec<Card>, _policy: SelectionPolicy) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use: creditwise list / creditwise compare 1,3,7");
    std::process::exit(1);
}
