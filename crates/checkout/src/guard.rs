//! Boundary checks for carts arriving from the API or a file.
//!
//! The allocator itself never fails; negative amounts must be dealt with
//! here, either by refusing the cart or by clamping them to zero,
//! according to `checkout.input_guard`.

pub use wm_domain::config::InputGuard;
use wm_domain::trace::TraceEvent;
use wm_domain::{money, Amount, Error, Result};

use crate::cart::Cart;

/// Apply `guard` to every amount in the cart.
///
/// Carts whose bill or reward totals leave the `Decimal` range are refused
/// under either guard.
pub fn apply_guard(guard: InputGuard, mut cart: Cart) -> Result<Cart> {
    for bill in &mut cart.bills {
        let (id, amount) = (&bill.id, &mut bill.amount);
        check(guard, amount, || format!("bill[{id}].amount"))?;
    }
    for reward in &mut cart.rewards {
        let (id, amount) = (&reward.id, &mut reward.amount);
        check(guard, amount, || format!("reward[{id}].amount"))?;
    }
    check(guard, &mut cart.wallet.balance, || "wallet.balance".into())?;

    if money::checked_sum(cart.bills.iter().map(|b| b.amount)).is_none() {
        return Err(Error::AmountOverflow {
            field: "bills".into(),
        });
    }
    if money::checked_sum(cart.rewards.iter().map(|r| r.amount)).is_none() {
        return Err(Error::AmountOverflow {
            field: "rewards".into(),
        });
    }
    Ok(cart)
}

fn check(guard: InputGuard, amount: &mut Amount, field: impl FnOnce() -> String) -> Result<()> {
    if !amount.is_sign_negative() || amount.is_zero() {
        return Ok(());
    }
    match guard {
        InputGuard::Reject => Err(Error::NegativeAmount {
            field: field(),
            value: *amount,
        }),
        InputGuard::Clamp => {
            TraceEvent::InputClamped {
                field: field(),
                original: *amount,
            }
            .emit();
            *amount = Amount::ZERO;
            Ok(())
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
