use serde::Serialize;

use crate::money::Amount;

/// Structured trace events emitted across all wastepay crates.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event")]
pub enum TraceEvent {
    QuoteComputed {
        bills: usize,
        subtotal: Amount,
        rewards_applied: Amount,
        net_payable: Amount,
        wallet_use: Amount,
        external_pay: Amount,
    },
    InputClamped {
        field: String,
        original: Amount,
    },
    WalletSettled {
        balance_before: Amount,
        balance_after: Amount,
        credited: Amount,
    },
    ReceiptIssued {
        receipt_id: String,
        bills: usize,
        method: String,
        total: Amount,
    },
}

impl TraceEvent {
    pub fn emit(&self) {
        let json = serde_json::to_string(self).unwrap_or_default();
        match self {
            Self::InputClamped { .. } => tracing::warn!(trace_event = %json, "wm_event"),
            Self::QuoteComputed { .. } => tracing::debug!(trace_event = %json, "wm_event"),
            _ => tracing::info!(trace_event = %json, "wm_event"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn serializes_with_event_tag() {
        let ev = TraceEvent::InputClamped {
            field: "wallet.balance".into(),
            original: dec!(-5),
        };
        let v = serde_json::to_value(&ev).unwrap();
        assert_eq!(v["event"], "InputClamped");
        assert_eq!(v["field"], "wallet.balance");
    }
}
