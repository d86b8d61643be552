use std::fmt;

use serde::{Deserialize, Serialize};

/// Channel used to settle the part of a quote not covered by the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Upi,
    Bank,
    Cash,
    /// Fully covered by wallet balance; no external charge.
    Wallet,
}

impl PaymentMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Upi => "upi",
            Self::Bank => "bank",
            Self::Cash => "cash",
            Self::Wallet => "wallet",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "card" => Ok(Self::Card),
            "upi" => Ok(Self::Upi),
            "bank" => Ok(Self::Bank),
            "cash" => Ok(Self::Cash),
            "wallet" => Ok(Self::Wallet),
            other => Err(format!(
                "unknown payment method \"{other}\" (expected card, upi, bank, cash or wallet)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("UPI".parse::<PaymentMethod>().unwrap(), PaymentMethod::Upi);
        assert_eq!("card".parse::<PaymentMethod>().unwrap(), PaymentMethod::Card);
        assert!("cheque".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn display_matches_wire_name() {
        for m in [
            PaymentMethod::Card,
            PaymentMethod::Upi,
            PaymentMethod::Bank,
            PaymentMethod::Cash,
            PaymentMethod::Wallet,
        ] {
            let json = serde_json::to_string(&m).unwrap();
            assert_eq!(json, format!("\"{m}\""));
        }
    }
}
