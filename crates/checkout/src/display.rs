use serde::Serialize;

use wm_domain::{format_amount, Amount};

use crate::allocator::Quote;

/// One row of the checkout summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteLine {
    pub label: &'static str,
    pub amount: Amount,
    pub formatted: String,
}

impl QuoteLine {
    fn new(label: &'static str, amount: Amount, symbol: &str) -> Self {
        Self {
            label,
            amount,
            formatted: format_amount(amount, symbol),
        }
    }
}

/// Summary rows in the order the checkout screen lists them.
///
/// Rewards are shown as a deduction.  The wallet credit row only appears
/// when the quote carries an overflow.
pub fn quote_lines(quote: &Quote, symbol: &str) -> Vec<QuoteLine> {
    let mut lines = vec![
        QuoteLine::new("Subtotal", quote.subtotal, symbol),
        QuoteLine::new("Rewards applied", -quote.rewards_applied, symbol),
        QuoteLine::new("Previous dues", quote.previous_dues, symbol),
        QuoteLine::new("Tax", quote.tax, symbol),
        QuoteLine::new("Net payable", quote.net_payable, symbol),
        QuoteLine::new("Wallet", quote.wallet_use, symbol),
        QuoteLine::new("External payment", quote.external_pay, symbol),
    ];
    if let Some(credit) = quote.wallet_credit_overflow {
        lines.push(QuoteLine::new("Wallet credit", credit, symbol));
    }
    lines
}
