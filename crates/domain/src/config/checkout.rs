use serde::{Deserialize, Serialize};

use crate::payment::PaymentMethod;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Checkout policy
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// What to do with negative amounts arriving at the checkout boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputGuard {
    /// Refuse the cart with an error naming the offending field.
    #[default]
    Reject,
    /// Replace negative amounts with zero and carry on.
    Clamp,
}

/// Defaults for the checkout toggles shown to residents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Offset the bill total with available reward credit.
    #[serde(default = "d_true")]
    pub apply_rewards: bool,

    /// Draw from the wallet before charging an external method.
    #[serde(default = "d_true")]
    pub use_wallet_first: bool,

    #[serde(default)]
    pub input_guard: InputGuard,

    /// Method used for the external remainder when none is given.
    #[serde(default = "d_method")]
    pub default_method: PaymentMethod,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            apply_rewards: true,
            use_wallet_first: true,
            input_guard: InputGuard::Reject,
            default_method: d_method(),
        }
    }
}

fn d_true() -> bool {
    true
}

fn d_method() -> PaymentMethod {
    PaymentMethod::Upi
}
