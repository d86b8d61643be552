use serde::{Deserialize, Serialize};

use wm_domain::{Bill, Reward, Wallet};

/// Everything the checkout screen holds for one resident: their bill list,
/// available rewards and wallet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub bills: Vec<Bill>,
    #[serde(default)]
    pub rewards: Vec<Reward>,
    #[serde(default)]
    pub wallet: Wallet,
}

impl Cart {
    pub fn from_json(raw: &str) -> wm_domain::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn missing_sections_default_to_empty() {
        let cart = Cart::from_json(r#"{"bills":[]}"#).unwrap();
        assert!(cart.rewards.is_empty());
        assert_eq!(cart.wallet.balance, dec!(0));
    }

    #[test]
    fn accepts_numeric_and_string_amounts() {
        let raw = r#"{
            "bills": [{"id":"B1","amount":28.5,"status":"due"}],
            "rewards": [{"id":"R1","amount":"4.20"}],
            "wallet": {"balance": 30}
        }"#;
        let cart = Cart::from_json(raw).unwrap();
        assert_eq!(cart.bills[0].amount, dec!(28.50));
        assert_eq!(cart.rewards[0].amount, dec!(4.20));
        assert_eq!(cart.wallet.balance, dec!(30));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = Cart::from_json("{").unwrap_err();
        assert!(matches!(err, wm_domain::Error::Json(_)));
    }
}
