//! Type-safe price representation using decimal arithmetic.
//!
//! Menu prices are stored as plain rupiah amounts without minor units and are
//! always displayed with zero fractional digits, grouped the way `id-ID`
//! writes them (`Rp 25.000`).

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Separator placed between the currency symbol and the amount.
///
/// Matches what browsers emit for `id-ID` currency formatting.
const NO_BREAK_SPACE: char = '\u{a0}';

const SYMBOL: &str = "Rp";
const GROUP_SEPARATOR: char = '.';

/// A rupiah price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price {
    /// Amount in whole rupiah; fractions are tolerated and rounded on display.
    pub amount: Decimal,
}

impl Price {
    /// Create a rupiah price.
    #[must_use]
    pub const fn idr(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Format for display with no fractional digits.
    ///
    /// Halves round away from zero.
    ///
    /// ```
    /// use meteen_core::Price;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(Price::idr(Decimal::from(25_000)).display(), "Rp\u{a0}25.000");
    /// ```
    #[must_use]
    pub fn display(&self) -> String {
        let rounded = self
            .amount
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let digits = rounded.abs().trunc().to_string();
        let grouped = group_digits(&digits, GROUP_SEPARATOR);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        format!("{sign}{SYMBOL}{NO_BREAK_SPACE}{grouped}")
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Insert a separator every three digits from the right.
fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idr(s: &str) -> String {
        Price::idr(s.parse().unwrap_or_default()).display()
    }

    #[test]
    fn test_idr_grouping() {
        assert_eq!(idr("25000"), "Rp\u{a0}25.000");
        assert_eq!(idr("5000"), "Rp\u{a0}5.000");
        assert_eq!(idr("1250000"), "Rp\u{a0}1.250.000");
        assert_eq!(idr("999"), "Rp\u{a0}999");
        assert_eq!(idr("0"), "Rp\u{a0}0");
    }

    #[test]
    fn test_idr_drops_fraction() {
        assert_eq!(idr("25000.00"), "Rp\u{a0}25.000");
        assert_eq!(idr("25000.4"), "Rp\u{a0}25.000");
        assert_eq!(idr("25000.5"), "Rp\u{a0}25.001");
        assert_eq!(idr("999.5"), "Rp\u{a0}1.000");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(idr("-5000"), "-Rp\u{a0}5.000");
        assert_eq!(idr("-0.2"), "Rp\u{a0}0");
    }

    #[test]
    fn test_display_trait_matches_display() {
        let price = Price::idr(Decimal::from(1250));
        assert_eq!(price.to_string(), "Rp\u{a0}1.250");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1", '.'), "1");
        assert_eq!(group_digits("1234", '.'), "1.234");
        assert_eq!(group_digits("123456", ','), "123,456");
    }
}
