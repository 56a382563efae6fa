use serde::{Deserialize, Serialize};

/// Placeholder shown for a missing name or price
pub const MISSING_CELL: &str = "-";

/// A supplier column in the comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub name: String,
    /// Our own column, drawn with a highlighted background
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub highlight: bool,
}

/// What one vendor offers for a row: product name and unit price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub item: Option<String>,
    pub price: Option<f64>,
}

impl Offer {
    pub fn item_label(&self) -> &str {
        match self.item.as_deref() {
            Some(item) if !item.is_empty() => item,
            _ => MISSING_CELL,
        }
    }

    pub fn price_label(&self) -> String {
        format_currency(self.price)
    }
}

/// One comparison row: one offer per vendor, in vendor order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRow {
    pub offers: Vec<Offer>,
}

impl PriceRow {
    /// Offer for vendor column `i`, or an empty offer when the row is short.
    pub fn offer(&self, i: usize) -> Offer {
        self.offers.get(i).cloned().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSection {
    pub title: String,
    pub rows: Vec<PriceRow>,
}

/// The supplementary price comparison (machinery, connectors, consumables).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    pub vendors: Vec<Vendor>,
    pub sections: Vec<PriceSection>,
}

/// Formats a unit price as Mexican pesos: `$202,500.00`.
/// A missing or non-finite price becomes the placeholder dash.
pub fn format_currency(value: Option<f64>) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return MISSING_CELL.to_string();
    };

    let fixed = format!("{:.2}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let grouped = group_thousands(integer);

    // Values that round to zero are not shown as negative
    if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        format!("-${}.{}", grouped, fraction)
    } else {
        format!("${}.{}", grouped, fraction)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_pesos_with_grouping_and_two_decimals() {
        assert_eq!(format_currency(Some(202_500.0)), "$202,500.00");
        assert_eq!(format_currency(Some(94.34)), "$94.34");
        assert_eq!(format_currency(Some(1_600.0)), "$1,600.00");
        assert_eq!(format_currency(Some(45.0)), "$45.00");
        assert_eq!(format_currency(Some(0.0)), "$0.00");
        assert_eq!(format_currency(Some(1_234_567.891)), "$1,234,567.89");
    }

    #[test]
    fn negative_prices_carry_a_leading_sign() {
        assert_eq!(format_currency(Some(-1_234.5)), "-$1,234.50");
        assert_eq!(format_currency(Some(-0.001)), "$0.00");
    }

    #[test]
    fn missing_or_nan_price_is_a_dash() {
        assert_eq!(format_currency(None), "-");
        assert_eq!(format_currency(Some(f64::NAN)), "-");
        assert_eq!(format_currency(Some(f64::INFINITY)), "-");
    }

    #[test]
    fn missing_item_names_are_dashes() {
        let row = PriceRow {
            offers: vec![
                Offer {
                    item: Some(String::new()),
                    price: None,
                },
                Offer {
                    item: Some("Sierra Cinta".to_string()),
                    price: Some(70_000.0),
                },
            ],
        };

        assert_eq!(row.offer(0).item_label(), "-");
        assert_eq!(row.offer(0).price_label(), "-");
        assert_eq!(row.offer(1).item_label(), "Sierra Cinta");
        assert_eq!(row.offer(1).price_label(), "$70,000.00");
        // Short row: third vendor column is empty
        assert_eq!(row.offer(2).item_label(), "-");
    }
}
