//! Shared types for the wastepay checkout: money, billing records,
//! payment methods, configuration, errors and trace events.

pub mod billing;
pub mod config;
pub mod error;
pub mod money;
pub mod payment;
pub mod trace;

pub use billing::{total_bills, total_rewards, Bill, BillId, BillStatus, Reward, RewardId, Wallet};
pub use error::{Error, Result};
pub use money::{format_amount, Amount};
pub use payment::PaymentMethod;
