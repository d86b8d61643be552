//! Applying a confirmed quote to the resident's wallet.

use wm_domain::trace::TraceEvent;
use wm_domain::{Amount, Error, Result, Wallet};

use crate::allocator::Quote;

/// Return the wallet as it stands after paying `quote`.
///
/// Debits `wallet_use` and credits any `wallet_credit_overflow`.  Fails
/// when the quote draws more than the wallet holds, which means the
/// balance changed after the quote was computed.
pub fn settle_wallet(wallet: &Wallet, quote: &Quote) -> Result<Wallet> {
    if quote.wallet_use > wallet.balance {
        return Err(Error::InsufficientWallet {
            balance: wallet.balance,
            requested: quote.wallet_use,
        });
    }

    let credited = quote.wallet_credit_overflow.unwrap_or(Amount::ZERO);
    let balance = (wallet.balance - quote.wallet_use)
        .checked_add(credited)
        .ok_or_else(|| Error::AmountOverflow {
            field: "wallet.balance".into(),
        })?;
    let after = Wallet::new(balance);

    TraceEvent::WalletSettled {
        balance_before: wallet.balance,
        balance_after: after.balance,
        credited,
    }
    .emit();

    Ok(after)
}
