// ₹ Rupee formatting (en-IN digit grouping)

/// Group digits the Indian way: last three, then pairs (12,34,567)
pub fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

pub fn rupees(n: u64) -> String {
    format!("₹{}", group_indian(n))
}

/// Annual fee as shown on cards: zero reads as FREE
pub fn annual_fee(n: u64) -> String {
    if n == 0 {
        "FREE".to_string()
    } else {
        rupees(n)
    }
}

/// Income in lakhs with one decimal (₹4.0L)
pub fn lakhs(n: u64) -> String {
    format!("₹{:.1}L", n as f64 / 100_000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian(0), "0");
        assert_eq!(group_indian(999), "999");
        assert_eq!(group_indian(1000), "1,000");
        assert_eq!(group_indian(12000), "12,000");
        assert_eq!(group_indian(300000), "3,00,000");
        assert_eq!(group_indian(12000000), "1,20,00,000");
    }

    #[test]
    fn test_fee_and_income_display() {
        assert_eq!(annual_fee(0), "FREE");
        assert_eq!(annual_fee(3500), "₹3,500");
        assert_eq!(lakhs(400000), "₹4.0L");
        assert_eq!(lakhs(250000), "₹2.5L");
    }
}
