use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Display
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "d_symbol")]
    pub currency_symbol: String,
    #[serde(default = "d_code")]
    pub currency_code: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: d_symbol(),
            currency_code: d_code(),
        }
    }
}

fn d_symbol() -> String {
    "₹".into()
}

fn d_code() -> String {
    "INR".into()
}
