use wm_checkout::{confirm, prepare};
use wm_domain::config::Config;
use wm_domain::PaymentMethod;

use super::CartArgs;

pub fn run(config: &Config, args: &CartArgs, method: Option<PaymentMethod>) -> anyhow::Result<()> {
    let method = method.unwrap_or(config.checkout.default_method);
    let prepared = prepare(args.load_cart()?, &args.request(config))?;
    if prepared.selected.is_empty() {
        anyhow::bail!("no payable bills selected");
    }
    let confirmation = confirm(prepared, method)?;
    tracing::info!(
        receipt_id = %confirmation.receipt.id,
        method = %confirmation.receipt.method,
        "payment confirmed"
    );
    println!("{}", serde_json::to_string_pretty(&confirmation)?);
    Ok(())
}
