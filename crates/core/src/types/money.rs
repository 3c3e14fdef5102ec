//! Money helpers.
//!
//! All monetary arithmetic in the client uses [`rust_decimal::Decimal`];
//! floats never touch a price. These helpers cover the two cross-crate
//! concerns: display formatting and the checkout tax constant.

use rust_decimal::Decimal;

/// Flat tax applied to every order at checkout, in dollars.
pub const FLAT_TAX: Decimal = Decimal::from_parts(1050, 0, 0, false, 2);

/// Format a decimal amount as a price string (e.g., "$19.98").
///
/// ```
/// use rust_decimal::Decimal;
/// use pawly_core::format_amount;
///
/// assert_eq!(format_amount(Decimal::new(1998, 2)), "$19.98");
/// assert_eq!(format_amount(Decimal::ZERO), "$0.00");
/// ```
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Decimal::new(2900, 2)), "$29.00");
        assert_eq!(format_amount(Decimal::new(95, 1)), "$9.50");
    }

    #[test]
    fn test_flat_tax_value() {
        assert_eq!(FLAT_TAX, Decimal::new(1050, 2));
        assert_eq!(format_amount(FLAT_TAX), "$10.50");
    }
}
