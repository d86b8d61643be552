//! Currency amounts.
//!
//! Every monetary value in the platform is a [`rust_decimal::Decimal`] so
//! sums and differences of cent values stay exact.

use rust_decimal::Decimal;

pub type Amount = Decimal;

/// Number of decimal places shown to residents.
pub const DISPLAY_SCALE: u32 = 2;

/// Render an amount the way the dashboards show it, e.g. `₹24.40`.
///
/// Negative amounts keep their sign in front of the symbol (`-₹19.10`).
pub fn format_amount(amount: Amount, symbol: &str) -> String {
    let rounded = amount.round_dp(DISPLAY_SCALE);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{symbol}{:.2}", rounded.abs())
    } else {
        format!("{symbol}{:.2}", rounded.abs())
    }
}

/// Sum an iterator of amounts, `None` if the total leaves `Decimal` range.
pub fn checked_sum<I>(amounts: I) -> Option<Amount>
where
    I: IntoIterator<Item = Amount>,
{
    amounts
        .into_iter()
        .try_fold(Amount::ZERO, |acc, a| acc.checked_add(a))
}

/// Sum an iterator of amounts, pinning at `Amount::MAX` / `Amount::MIN`
/// instead of panicking on overflow.
pub fn saturating_sum<I>(amounts: I) -> Amount
where
    I: IntoIterator<Item = Amount>,
{
    amounts
        .into_iter()
        .fold(Amount::ZERO, |acc, a| match acc.checked_add(a) {
            Some(total) => total,
            None if a.is_sign_negative() => Amount::MIN,
            None => Amount::MAX,
        })
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn formats_two_places() {
        assert_eq!(format_amount(dec!(24.4), "₹"), "₹24.40");
        assert_eq!(format_amount(dec!(0), "$"), "$0.00");
    }

    #[test]
    fn formats_negative_with_leading_sign() {
        assert_eq!(format_amount(dec!(-19.10), "₹"), "-₹19.10");
    }

    #[test]
    fn rounds_half_to_even() {
        assert_eq!(format_amount(dec!(1.005), "$"), "$1.00");
        assert_eq!(format_amount(dec!(2.675), "$"), "$2.68");
    }

    #[test]
    fn sums_exactly() {
        let parts = [dec!(12.50), dec!(4.20), dec!(2.40)];
        assert_eq!(checked_sum(parts), Some(dec!(19.10)));
        assert_eq!(saturating_sum(parts), dec!(19.10));
        assert_eq!(saturating_sum(Vec::new()), Amount::ZERO);
    }

    #[test]
    fn overflowing_sum_is_detected() {
        let half = Amount::MAX / dec!(2) + dec!(1);
        assert_eq!(checked_sum([half, half]), None);
        assert_eq!(saturating_sum([half, half]), Amount::MAX);
    }

    #[test]
    fn saturated_sum_stays_pinned() {
        let total = saturating_sum([Amount::MAX, dec!(1), dec!(5)]);
        assert_eq!(total, Amount::MAX);
    }
}
