//! Pure display and validation helpers used by every list page.
//!
//! These are the Rust counterparts of the dashboard's formatting utilities:
//! price and date rendering in the French locale, text truncation, email
//! validation, and the stock-level banding shown next to each product.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Stock-level band derived from a product's current stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    /// Stock is exactly zero.
    Rupture,
    /// Fewer than 10 units left.
    Faible,
    /// Between 10 and 49 units.
    Moyen,
    /// 50 units or more.
    Bon,
}

impl StockStatus {
    /// User-facing label, as rendered in the stock column.
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::Rupture => "Rupture",
            StockStatus::Faible => "Faible",
            StockStatus::Moyen => "Moyen",
            StockStatus::Bon => "Bon",
        }
    }

    /// Badge color name associated with the band.
    pub fn color(self) -> &'static str {
        match self {
            StockStatus::Rupture => "red",
            StockStatus::Faible => "orange",
            StockStatus::Moyen => "yellow",
            StockStatus::Bon => "green",
        }
    }
}

/// Band a stock count: 0 is out of stock, under 10 is low, under 50 medium.
pub fn stock_status(stock: i64) -> StockStatus {
    if stock <= 0 {
        StockStatus::Rupture
    } else if stock < 10 {
        StockStatus::Faible
    } else if stock < 50 {
        StockStatus::Moyen
    } else {
        StockStatus::Bon
    }
}

/// Format a price in MAD with French digit grouping: `1 234,56 MAD`.
pub fn format_price(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped},{frac:02} MAD")
}

const FRENCH_MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Format a timestamp as a French long date with time: `12 mars 2025 à 14:05`.
pub fn format_date(date: DateTime<Utc>) -> String {
    let month = FRENCH_MONTHS[date.month0() as usize];
    format!(
        "{} {} {} à {:02}:{:02}",
        date.day(),
        month,
        date.year(),
        date.hour(),
        date.minute()
    )
}

/// Truncate `text` to `max_length` characters, appending `...` when cut.
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_length).collect();
    format!("{cut}...")
}

/// Minimal email shape check: `local@domain.tld` with no whitespace and a
/// dotted domain. Matches the form validation of the original client.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let clean = |s: &str| !s.is_empty() && !s.contains(char::is_whitespace) && !s.contains('@');
    if !clean(local) || !clean(domain) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((before, after)) => !before.is_empty() && !after.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn stock_banding_thresholds() {
        assert_eq!(stock_status(0), StockStatus::Rupture);
        assert_eq!(stock_status(9), StockStatus::Faible);
        assert_eq!(stock_status(10), StockStatus::Moyen);
        assert_eq!(stock_status(49), StockStatus::Moyen);
        assert_eq!(stock_status(50), StockStatus::Bon);
    }

    #[test]
    fn stock_banding_example_products() {
        // [{nom:"A", stock:0}, {nom:"B", stock:15}, {nom:"C", stock:60}]
        assert_eq!(stock_status(0).label(), "Rupture");
        assert_eq!(stock_status(15).label(), "Moyen");
        assert_eq!(stock_status(60).label(), "Bon");
    }

    #[test]
    fn price_formatting() {
        assert_eq!(format_price(250.0), "250,00 MAD");
        assert_eq!(format_price(1234.56), "1 234,56 MAD");
        assert_eq!(format_price(1_000_000.0), "1 000 000,00 MAD");
        assert_eq!(format_price(-42.5), "-42,50 MAD");
    }

    #[test]
    fn date_formatting() {
        let date = Utc.with_ymd_and_hms(2025, 3, 12, 14, 5, 0).unwrap();
        assert_eq!(format_date(date), "12 mars 2025 à 14:05");
    }

    #[test]
    fn truncation() {
        assert_eq!(truncate_text("court", 10), "court");
        assert_eq!(truncate_text("Lunettes Aviator", 8), "Lunettes...");
    }

    #[test]
    fn email_validation() {
        assert!(is_valid_email("yasmine@optique.ma"));
        assert!(!is_valid_email("pas-un-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@b@c.d"));
        assert!(!is_valid_email("@optique.ma"));
    }
}
