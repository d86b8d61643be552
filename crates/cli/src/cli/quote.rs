use wm_checkout::display::quote_lines;
use wm_checkout::{prepare, PreparedCheckout};
use wm_domain::config::Config;

use super::CartArgs;

pub fn run(config: &Config, args: &CartArgs, json: bool) -> anyhow::Result<()> {
    let prepared = prepare(args.load_cart()?, &args.request(config))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&prepared)?);
    } else {
        print!("{}", render(&prepared, &config.display.currency_symbol));
    }
    Ok(())
}

/// Plain-text summary: selected bills, then the quote rows.
pub fn render(prepared: &PreparedCheckout, symbol: &str) -> String {
    let mut out = String::new();
    for bill in &prepared.selected {
        out.push_str(&format!(
            "  {:<16} {:>12}\n",
            bill.id.to_string(),
            wm_domain::format_amount(bill.amount, symbol)
        ));
    }
    if !prepared.selected.is_empty() {
        out.push_str(&format!("  {}\n", "-".repeat(29)));
    }
    for line in quote_lines(&prepared.quote, symbol) {
        out.push_str(&format!("  {:<16} {:>12}\n", line.label, line.formatted));
    }
    out
}
