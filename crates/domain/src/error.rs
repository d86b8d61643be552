use crate::money::Amount;

/// Shared error type used across all wastepay crates.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("config: {0}")]
    Config(String),

    #[error("negative amount in {field}: {value}")]
    NegativeAmount { field: String, value: Amount },

    #[error("bill not found: {0}")]
    BillNotFound(String),

    #[error("bill already paid: {0}")]
    BillAlreadyPaid(String),

    #[error("bill selected more than once: {0}")]
    DuplicateBill(String),

    #[error("total of {field} exceeds the representable range")]
    AmountOverflow { field: String },

    #[error("wallet cannot pay an external remainder of {external_pay}")]
    WalletNotExternal { external_pay: Amount },

    #[error("wallet balance {balance} cannot cover wallet use {requested}")]
    InsufficientWallet { balance: Amount, requested: Amount },
}

pub type Result<T> = std::result::Result<T, Error>;
