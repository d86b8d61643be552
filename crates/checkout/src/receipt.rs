//! Receipts for confirmed checkouts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wm_domain::trace::TraceEvent;
use wm_domain::{Bill, BillId, BillStatus, Error, PaymentMethod, Result, Wallet};

use crate::allocator::Quote;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub bill_ids: Vec<BillId>,
    pub quote: Quote,
    /// Channel charged for `quote.external_pay`; `wallet` when nothing was
    /// charged externally.
    pub method: PaymentMethod,
    pub wallet_balance_after: Wallet,
}

impl Receipt {
    /// Fails when `wallet` is named as the channel for a non-zero external
    /// remainder; the wallet share is already in `quote.wallet_use`.
    pub fn issue(
        bills: &[Bill],
        quote: Quote,
        method: PaymentMethod,
        wallet_after: Wallet,
    ) -> Result<Self> {
        let method = if quote.is_covered_by_wallet() {
            PaymentMethod::Wallet
        } else if method == PaymentMethod::Wallet {
            return Err(Error::WalletNotExternal {
                external_pay: quote.external_pay,
            });
        } else {
            method
        };

        let receipt = Self {
            id: Uuid::new_v4(),
            issued_at: Utc::now(),
            bill_ids: bills.iter().map(|b| b.id.clone()).collect(),
            quote,
            method,
            wallet_balance_after: wallet_after,
        };

        TraceEvent::ReceiptIssued {
            receipt_id: receipt.id.to_string(),
            bills: receipt.bill_ids.len(),
            method: method.to_string(),
            total: receipt.quote.net_payable,
        }
        .emit();

        Ok(receipt)
    }
}

/// Copies of `bills` with every bill on the receipt marked paid.
pub fn mark_paid(bills: &[Bill], receipt: &Receipt) -> Vec<Bill> {
    bills
        .iter()
        .map(|b| {
            let mut b = b.clone();
            if receipt.bill_ids.contains(&b.id) {
                b.status = BillStatus::Paid;
            }
            b
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bills() -> Vec<Bill> {
        vec![
            Bill::new("B1", dec!(28.50), BillStatus::Overdue),
            Bill::new("B2", dec!(15.00), BillStatus::Due),
        ]
    }

    #[test]
    fn external_remainder_keeps_method() {
        let quote = Quote {
            net_payable: dec!(24.40),
            external_pay: dec!(24.40),
            ..Quote::zero()
        };
        let r = Receipt::issue(&bills(), quote, PaymentMethod::Card, Wallet::default()).unwrap();
        assert_eq!(r.method, PaymentMethod::Card);
        assert_eq!(r.bill_ids, vec![BillId::from("B1"), BillId::from("B2")]);
    }

    #[test]
    fn wallet_covered_quote_forces_wallet_method() {
        let quote = Quote {
            net_payable: dec!(24.40),
            wallet_use: dec!(24.40),
            ..Quote::zero()
        };
        let r = Receipt::issue(&bills(), quote, PaymentMethod::Upi, Wallet::new(dec!(5.60)))
            .unwrap();
        assert_eq!(r.method, PaymentMethod::Wallet);
        assert_eq!(r.wallet_balance_after.balance, dec!(5.60));
    }

    #[test]
    fn wallet_method_refused_for_external_remainder() {
        let quote = Quote {
            net_payable: dec!(24.40),
            external_pay: dec!(24.40),
            ..Quote::zero()
        };
        let err = Receipt::issue(&bills(), quote, PaymentMethod::Wallet, Wallet::default())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::WalletNotExternal { external_pay } if external_pay == dec!(24.40)
        ));
    }

    #[test]
    fn receipts_get_distinct_ids() {
        let a = Receipt::issue(&bills(), Quote::zero(), PaymentMethod::Cash, Wallet::default())
            .unwrap();
        let b = Receipt::issue(&bills(), Quote::zero(), PaymentMethod::Cash, Wallet::default())
            .unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn mark_paid_only_touches_receipt_bills() {
        let all = {
            let mut v = bills();
            v.push(Bill::new("B3", dec!(5), BillStatus::Due));
            v
        };
        let r = Receipt::issue(&all[..2], Quote::zero(), PaymentMethod::Cash, Wallet::default())
            .unwrap();
        let updated = mark_paid(&all, &r);
        assert_eq!(updated[0].status, BillStatus::Paid);
        assert_eq!(updated[1].status, BillStatus::Paid);
        assert_eq!(updated[2].status, BillStatus::Due);
        assert_eq!(all[0].status, BillStatus::Overdue);
    }
}
