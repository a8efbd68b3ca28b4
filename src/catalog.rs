// 🗂️ Catalog - static seed dataset and filter option lists
//
// The seed is populated once per session and never re-fetched.
// A deployment that wants a different catalog points the config at a CSV/JSON file.

use crate::card::Card;

/// Issuers offered in the filter panel
pub const BANKS: [&str; 6] = [
    "HDFC Bank",
    "ICICI Bank",
    "SBI Card",
    "Axis Bank",
    "Kotak Mahindra",
    "Yes Bank",
];

/// Category tags offered in the filter panel
pub const CATEGORIES: [&str; 7] = [
    "Travel",
    "Cashback",
    "Student",
    "Rewards",
    "No Annual Fee",
    "Luxury",
    "Dining",
];

/// Fee slider bounds (whole rupees)
pub const FEE_MIN: u64 = 0;
pub const FEE_MAX: u64 = 12000;

/// The 15-card seed catalog, in display order
pub fn seed_cards() -> Vec<Card> {
    vec![
        Card::new(1, "HDFC Bank", "Regalia First")
            .with_categories(&["Travel", "Rewards"])
            .with_fee(1000)
            .with_income(400000)
            .with_benefits(&["Priority Pass for lounge access", "5x reward points on dining", "Fuel surcharge waiver"])
            .with_image_prompt("Premium blue credit card with metallic finish"),
        Card::new(2, "ICICI Bank", "Sapphiro")
            .with_categories(&["Rewards", "Dining", "Travel"])
            .with_fee(3500)
            .with_income(800000)
            .with_benefits(&["4x reward points on dining", "BOGO on movie tickets", "Complimentary golf sessions"])
            .with_image_prompt("Elegant gold metal credit card"),
        Card::new(3, "SBI Card", "SimplySAVE")
            .with_categories(&["Cashback", "Rewards"])
            .with_fee(499)
            .with_income(300000)
            .with_benefits(&["10x rewards on dining & movies", "1% cashback on all other spends", "Welcome gift vouchers"])
            .with_image_prompt("Modern white credit card with blue accents"),
        Card::new(4, "Amazon Pay", "ICICI Bank Card")
            .with_categories(&["Cashback", "Shopping", "No Annual Fee"])
            .with_fee(0)
            .with_income(250000)
            .with_benefits(&["5% cashback on Amazon for Prime members", "2% on partner merchants", "No joining or annual fees"])
            .with_image_prompt("Amazon branded credit card with a smile logo"),
        Card::new(5, "Axis Bank", "Flipkart Card")
            .with_categories(&["Cashback", "Shopping"])
            .with_fee(500)
            .with_income(300000)
            .with_benefits(&["5% cashback on Flipkart", "4% cashback on Swiggy, PVR, Uber", "Airport lounge access"])
            .with_image_prompt("Flipkart branded blue and yellow credit card"),
        Card::new(6, "SBI Card", "Cashback Card")
            .with_categories(&["Cashback"])
            .with_fee(999)
            .with_income(350000)
            .with_benefits(&["5% cashback on all online spends", "1% cashback on offline spends", "No merchant restrictions for online cashback"])
            .with_image_prompt("A vibrant green and blue gradient credit card"),
        Card::new(7, "HDFC Bank", "Millennia")
            .with_categories(&["Cashback", "Shopping"])
            .with_fee(1000)
            .with_income(350000)
            .with_benefits(&["5% cashback on Amazon, Flipkart, etc.", "1% cashback on all other spends", "8 domestic lounge visits per year"])
            .with_image_prompt("A stylish millennial-focused credit card with pastel colors"),
        Card::new(8, "Axis Bank", "ACE Card")
            .with_categories(&["Cashback", "UPI"])
            .with_fee(499)
            .with_income(300000)
            .with_benefits(&["5% on bill pays, DTH via Google Pay", "4% on Swiggy, Zomato, Ola", "2% flat cashback on all other spends"])
            .with_image_prompt("A minimal and clean white credit card"),
        Card::new(9, "American Express", "Platinum Travel")
            .with_categories(&["Travel", "Rewards", "Luxury"])
            .with_fee(3500)
            .with_income(600000)
            .with_benefits(&["Milestone rewards up to 40,000 points", "Complimentary domestic lounge visits", "Taj & Marriott vouchers on reaching milestones"])
            .with_image_prompt("The iconic American Express platinum card design"),
        Card::new(10, "HDFC Bank", "Infinia")
            .with_categories(&["Luxury", "Travel", "Rewards"])
            .with_fee(12500)
            .with_income(3000000)
            .with_benefits(&["Unlimited airport lounge access worldwide", "Complimentary golf games", "Low 2% forex markup fee"])
            .with_image_prompt("An exclusive, metallic black credit card"),
        Card::new(11, "Axis Bank", "Atlas")
            .with_categories(&["Travel", "Rewards"])
            .with_fee(5000)
            .with_income(900000)
            .with_benefits(&["Earn Edge Miles on spends", "Tier-based travel benefits", "Transfer miles to various airline/hotel partners"])
            .with_image_prompt("A credit card with a world map or globe design"),
        Card::new(12, "HDFC Bank", "Tata Neu Infinity")
            .with_categories(&["Shopping", "Rewards", "UPI"])
            .with_fee(1499)
            .with_income(120000)
            .with_benefits(&["5% back as NeuCoins on Tata Neu", "1.5% back on other spends", "Domestic and International lounge access"])
            .with_image_prompt("A card co-branded with the Tata Neu logo"),
        Card::new(13, "IDFC FIRST Bank", "Millennia")
            .with_categories(&["Rewards", "No Annual Fee"])
            .with_fee(0)
            .with_income(300000)
            .with_benefits(&["Up to 10x rewards that never expire", "Low interest rates", "Free for life"])
            .with_image_prompt("A modern red and white themed credit card"),
        Card::new(14, "American Express", "MRCC")
            .with_categories(&["Rewards"])
            .with_fee(1500)
            .with_income(500000)
            .with_benefits(&["1000 bonus points on 4 transactions/month", "24K Gold Collection rewards", "Flexible points transfer partners"])
            .with_image_prompt("Classic American Express card with gold detailing"),
        Card::new(15, "HDFC Bank", "Diners Club Black")
            .with_categories(&["Luxury", "Travel", "Dining"])
            .with_fee(10000)
            .with_income(175000)
            .with_benefits(&["10X rewards via SmartBuy", "Unlimited lounge access", "6 free golf games quarterly"])
            .with_image_prompt("A premium, sleek black card for dining"),
    ]
}

/// Banks present in a record set, first-seen order
pub fn distinct_banks(cards: &[Card]) -> Vec<String> {
    let mut banks: Vec<String> = Vec::new();
    for card in cards {
        if !banks.contains(&card.bank) {
            banks.push(card.bank.clone());
        }
    }
    banks
}

/// Category tags present in a record set, first-seen order
pub fn distinct_categories(cards: &[Card]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for tag in cards.iter().flat_map(|c| c.category.iter()) {
        if !categories.contains(tag) {
            categories.push(tag.clone());
        }
    }
    categories
}

/// Filter-panel bank options: the fixed list, then any other issuer in the data
pub fn bank_options(cards: &[Card]) -> Vec<String> {
    merge_options(&BANKS, distinct_banks(cards))
}

/// Filter-panel category options: the fixed list, then any other tag in the data
pub fn category_options(cards: &[Card]) -> Vec<String> {
    merge_options(&CATEGORIES, distinct_categories(cards))
}

fn merge_options(fixed: &[&str], found: Vec<String>) -> Vec<String> {
    let mut options: Vec<String> = fixed.iter().map(|s| s.to_string()).collect();
    for item in found {
        if !options.contains(&item) {
            options.push(item);
        }
    }
    options
}
