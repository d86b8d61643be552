//! Resident-facing billing records: bills, rewards and the prepaid wallet.
//!
//! These mirror the JSON returned by the platform's `/api/bills`,
//! `/api/rewards` and `/api/wallet` endpoints.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::money::{self, Amount};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Identifiers
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BillId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RewardId(pub String);

impl From<&str> for BillId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<&str> for RewardId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl fmt::Display for BillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for RewardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Bills
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Due,
    Overdue,
    Paid,
}

impl BillStatus {
    /// Due and overdue bills can still be settled.
    pub fn is_payable(self) -> bool {
        matches!(self, Self::Due | Self::Overdue)
    }
}

/// A charge owed by a resident for a waste-collection service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: BillId,
    pub amount: Amount,
    pub status: BillStatus,
}

/// Sum of the given bills, with the same clamping and saturation as
/// [`total_rewards`].
pub fn total_bills(bills: &[Bill]) -> Amount {
    money::saturating_sum(bills.iter().map(|b| b.amount.max(Amount::ZERO)))
}

impl Bill {
    pub fn new(id: impl Into<String>, amount: Amount, status: BillStatus) -> Self {
        Self {
            id: BillId(id.into()),
            amount,
            status,
        }
    }

    pub fn is_payable(&self) -> bool {
        self.status.is_payable()
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Rewards & wallet
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Credit earned by a resident, e.g. for recycling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    pub id: RewardId,
    pub amount: Amount,
}

impl Reward {
    pub fn new(id: impl Into<String>, amount: Amount) -> Self {
        Self {
            id: RewardId(id.into()),
            amount,
        }
    }
}

/// Sum of every reward currently available to the resident.
///
/// Negative amounts count as zero and the total saturates at
/// `Amount::MAX`, so this never panics.
pub fn total_rewards(rewards: &[Reward]) -> Amount {
    money::saturating_sum(rewards.iter().map(|r| r.amount.max(Amount::ZERO)))
}

/// A resident's prepaid balance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Wallet {
    pub balance: Amount,
}

impl Wallet {
    pub fn new(balance: Amount) -> Self {
        Self { balance }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
