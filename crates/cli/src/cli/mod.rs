pub mod config;
pub mod pay;
pub mod quote;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use wm_checkout::{Cart, CheckoutRequest};
use wm_domain::config::Config;
use wm_domain::{BillId, PaymentMethod};

/// wastepay — quote and settle waste-collection bills.
#[derive(Debug, Parser)]
#[command(name = "wastepay", version, about)]
pub struct Cli {
    /// Emit logs as JSON instead of compact text.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show how the selected bills would be paid.
    Quote {
        #[command(flatten)]
        cart: CartArgs,
        /// Print the quote as JSON instead of a summary table.
        #[arg(long)]
        json: bool,
    },
    /// Confirm payment and print the receipt, updated wallet and bills as JSON.
    Pay {
        #[command(flatten)]
        cart: CartArgs,
        /// Channel for the external remainder (card, upi, bank, cash). Defaults
        /// to `checkout.default_method`.
        #[arg(long)]
        method: Option<PaymentMethod>,
    },
    /// Configuration utilities.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Print version information.
    Version,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Parse the config file and report any errors.
    Validate,
    /// Dump the resolved configuration (with defaults) as TOML.
    Show,
}

#[derive(Debug, Args)]
pub struct CartArgs {
    /// Cart file: {"bills": [...], "rewards": [...], "wallet": {...}}.
    pub cart: PathBuf,
    /// Bill ids to pay (defaults to every due or overdue bill).
    #[arg(long = "select", num_args = 1..)]
    pub select: Vec<String>,
    /// Do not offset the total with reward credit.
    #[arg(long)]
    pub no_rewards: bool,
    /// Charge the external method without drawing on the wallet.
    #[arg(long)]
    pub no_wallet: bool,
}

impl CartArgs {
    /// Build the checkout request, starting from the configured defaults.
    pub fn request(&self, config: &Config) -> CheckoutRequest {
        let mut request = CheckoutRequest::from_config(&config.checkout);
        if !self.select.is_empty() {
            request.selection = Some(self.select.iter().map(|s| BillId(s.clone())).collect());
        }
        if self.no_rewards {
            request.policy.apply_rewards = false;
        }
        if self.no_wallet {
            request.policy.use_wallet_first = false;
        }
        request
    }

    pub fn load_cart(&self) -> anyhow::Result<Cart> {
        read_cart(&self.cart)
    }
}

pub fn read_cart(path: &Path) -> anyhow::Result<Cart> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading cart {}", path.display()))?;
    Cart::from_json(&raw).with_context(|| format!("parsing cart {}", path.display()))
}

// ── Config loading helper ─────────────────────────────────────────────

/// Load the configuration from the path specified by `WM_CONFIG` (or
/// `wastepay.toml` by default).  Returns the parsed [`Config`] and the
/// path that was used.
pub fn load_config() -> anyhow::Result<(Config, String)> {
    let config_path = std::env::var("WM_CONFIG").unwrap_or_else(|_| "wastepay.toml".into());
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("loading {config_path}"))?;
    Ok((config, config_path))
}
