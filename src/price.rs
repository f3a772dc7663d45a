use regex::Regex;

use crate::category::{suffix_for, Category};

/// Pull a usable numeric price out of a free-text price field.
///
/// Plan prices arrive as text like "₹ 12,500 " or "15000.00"; currency glyphs,
/// separators and whitespace are stripped and the remainder parsed. A value
/// that is missing, unparseable or not strictly positive is no price at all —
/// a zero is never a real price in this domain, so `> 0` is enforced here and
/// nowhere else.
pub fn extract_price(text: &str) -> Option<f64> {
    if text.trim().is_empty() {
        return None;
    }

    let re = Regex::new(r"[^0-9.]").unwrap();
    let cleaned = re.replace_all(text, "");
    let price = cleaned.parse::<f64>().ok()?;

    if price.is_finite() && price > 0.0 {
        Some(price)
    } else {
        None
    }
}

/// Render an amount as a grouped integer the way the site does (en-IN
/// grouping: last three digits, then groups of two — 1234567 → "12,34,567").
pub fn format_inr(amount: f64) -> String {
    let digits = (amount.round() as u64).to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Full display string for a resolved price: rupee glyph, grouped amount,
/// category suffix.
pub fn display_price(amount: f64, category: Option<Category>) -> String {
    format!("₹ {}{}", format_inr(amount), suffix_for(category))
}
