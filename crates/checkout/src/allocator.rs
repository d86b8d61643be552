//! Bill-payment checkout allocation.
//!
//! [`calculate_checkout`] turns the resident's selected bills, their
//! reward ledger and wallet balance into a [`Quote`]: how much is owed,
//! how much reward credit offsets it, and how the remainder splits between
//! the wallet and an external payment method.  It is a pure function over
//! borrowed inputs; applying the quote to wallet state is the job of
//! [`crate::settlement`].

use serde::{Deserialize, Serialize};

use wm_domain::config::CheckoutConfig;
use wm_domain::{total_bills, total_rewards, Amount, Bill, Reward, Wallet};

/// Carry-over balance from earlier billing cycles. Supplied by the backend
/// in the future; always zero locally.
pub const PREVIOUS_DUES: Amount = Amount::ZERO;

/// Tax on collection charges. Not computed locally.
pub const TAX: Amount = Amount::ZERO;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Types
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The two checkout toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutPolicy {
    pub apply_rewards: bool,
    pub use_wallet_first: bool,
}

impl Default for CheckoutPolicy {
    fn default() -> Self {
        Self {
            apply_rewards: true,
            use_wallet_first: true,
        }
    }
}

impl From<&CheckoutConfig> for CheckoutPolicy {
    fn from(cfg: &CheckoutConfig) -> Self {
        Self {
            apply_rewards: cfg.apply_rewards,
            use_wallet_first: cfg.use_wallet_first,
        }
    }
}

/// Breakdown of how a set of selected bills will be paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub subtotal: Amount,
    pub rewards_applied: Amount,
    pub previous_dues: Amount,
    pub tax: Amount,
    pub net_payable: Amount,
    pub wallet_use: Amount,
    pub external_pay: Amount,
    /// Reward credit exceeding the subtotal, returned to the wallet.
    ///
    /// `rewards_applied` is capped at `subtotal`, so this is `None` for
    /// every quote produced today.  Kept so consumers of the quote JSON do
    /// not break if the cap is ever lifted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_credit_overflow: Option<Amount>,
}

impl Quote {
    /// A quote with every field zero.
    pub fn zero() -> Self {
        Self {
            subtotal: Amount::ZERO,
            rewards_applied: Amount::ZERO,
            previous_dues: PREVIOUS_DUES,
            tax: TAX,
            net_payable: Amount::ZERO,
            wallet_use: Amount::ZERO,
            external_pay: Amount::ZERO,
            wallet_credit_overflow: None,
        }
    }

    /// True when nothing needs to be charged outside the wallet.
    pub fn is_covered_by_wallet(&self) -> bool {
        self.external_pay.is_zero()
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Allocation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Compute the payment quote for `selected_bills`.
///
/// Never fails and has no side effects.  Negative amounts that slipped past
/// [`crate::guard::apply_guard`] count as zero, and totals beyond the
/// `Decimal` range saturate at `Amount::MAX`.
pub fn calculate_checkout(
    selected_bills: &[Bill],
    rewards: &[Reward],
    wallet: &Wallet,
    policy: CheckoutPolicy,
) -> Quote {
    let subtotal = total_bills(selected_bills);
    let total_rewards_available = total_rewards(rewards);

    let rewards_applied = if policy.apply_rewards {
        total_rewards_available.min(subtotal)
    } else {
        Amount::ZERO
    };

    let net_payable = subtotal - rewards_applied + PREVIOUS_DUES + TAX;

    let wallet_credit_overflow = (rewards_applied > subtotal).then(|| rewards_applied - subtotal);

    let (wallet_use, external_pay) = if policy.use_wallet_first {
        let wallet_use = wallet.balance.max(Amount::ZERO).min(net_payable);
        (wallet_use, net_payable - wallet_use)
    } else {
        (Amount::ZERO, net_payable)
    };

    Quote {
        subtotal,
        rewards_applied,
        previous_dues: PREVIOUS_DUES,
        tax: TAX,
        net_payable,
        wallet_use,
        external_pay,
        wallet_credit_overflow,
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use wm_domain::BillStatus;

    fn bills(amounts: &[Amount]) -> Vec<Bill> {
        amounts
            .iter()
            .enumerate()
            .map(|(i, a)| Bill::new(format!("B{i}"), *a, BillStatus::Due))
            .collect()
    }

    fn rewards(amounts: &[Amount]) -> Vec<Reward> {
        amounts
            .iter()
            .enumerate()
            .map(|(i, a)| Reward::new(format!("R{i}"), *a))
            .collect()
    }

    #[test]
    fn reward_cap_never_exceeds_subtotal() {
        let q = calculate_checkout(
            &bills(&[dec!(10)]),
            &rewards(&[dec!(30), dec!(20)]),
            &Wallet::default(),
            CheckoutPolicy::default(),
        );
        assert_eq!(q.rewards_applied, dec!(10));
        assert_eq!(q.net_payable, dec!(0));
        assert_eq!(q.wallet_credit_overflow, None);
    }

    #[test]
    fn rewards_below_subtotal_apply_fully() {
        let q = calculate_checkout(
            &bills(&[dec!(40)]),
            &rewards(&[dec!(7.25)]),
            &Wallet::default(),
            CheckoutPolicy::default(),
        );
        assert_eq!(q.rewards_applied, dec!(7.25));
        assert_eq!(q.net_payable, dec!(32.75));
    }

    #[test]
    fn wallet_split_sums_to_net() {
        for balance in [dec!(0), dec!(5.55), dec!(24.40), dec!(100)] {
            let q = calculate_checkout(
                &bills(&[dec!(28.50), dec!(15.00)]),
                &rewards(&[dec!(12.50), dec!(4.20), dec!(2.40)]),
                &Wallet::new(balance),
                CheckoutPolicy::default(),
            );
            assert_eq!(q.wallet_use, balance.min(q.net_payable));
            assert_eq!(q.wallet_use + q.external_pay, q.net_payable);
        }
    }

    #[test]
    fn wallet_ignored_when_not_first() {
        let q = calculate_checkout(
            &bills(&[dec!(20)]),
            &[],
            &Wallet::new(dec!(50)),
            CheckoutPolicy {
                apply_rewards: true,
                use_wallet_first: false,
            },
        );
        assert_eq!(q.wallet_use, dec!(0));
        assert_eq!(q.external_pay, dec!(20));
    }

    #[test]
    fn negative_amounts_are_clamped() {
        let q = calculate_checkout(
            &bills(&[dec!(10), dec!(-4)]),
            &rewards(&[dec!(-3)]),
            &Wallet::new(dec!(-1)),
            CheckoutPolicy::default(),
        );
        assert_eq!(q.subtotal, dec!(10));
        assert_eq!(q.rewards_applied, dec!(0));
        assert_eq!(q.wallet_use, dec!(0));
        assert_eq!(q.external_pay, dec!(10));
    }

    #[test]
    fn huge_bills_saturate_instead_of_panicking() {
        let half = Amount::MAX / dec!(2) + dec!(1);
        let q = calculate_checkout(
            &bills(&[half, half]),
            &rewards(&[dec!(1)]),
            &Wallet::new(dec!(2)),
            CheckoutPolicy::default(),
        );
        assert_eq!(q.subtotal, Amount::MAX);
        assert_eq!(q.rewards_applied, dec!(1));
        assert_eq!(q.wallet_use, dec!(2));
        assert_eq!(q.wallet_use + q.external_pay, q.net_payable);
    }

    #[test]
    fn reserved_fields_are_zero() {
        let q = calculate_checkout(
            &bills(&[dec!(12)]),
            &[],
            &Wallet::default(),
            CheckoutPolicy::default(),
        );
        assert_eq!(q.previous_dues, dec!(0));
        assert_eq!(q.tax, dec!(0));
    }

    #[test]
    fn quote_serializes_camel_case_without_overflow() {
        let v = serde_json::to_value(Quote::zero()).unwrap();
        assert!(v.get("rewardsApplied").is_some());
        assert!(v.get("externalPay").is_some());
        assert!(v.get("walletCreditOverflow").is_none());
    }

    #[test]
    fn policy_from_config() {
        let cfg = CheckoutConfig {
            apply_rewards: false,
            use_wallet_first: true,
            ..CheckoutConfig::default()
        };
        let policy = CheckoutPolicy::from(&cfg);
        assert!(!policy.apply_rewards);
        assert!(policy.use_wallet_first);
    }
}
