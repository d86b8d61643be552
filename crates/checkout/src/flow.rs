//! The quote-then-confirm sequence the checkout screen walks through.
//!
//! [`prepare`] guards the cart, resolves the selection and computes the
//! quote.  [`confirm`] settles the wallet, issues a receipt and marks the
//! bills paid.  Neither step touches the network; persisting the outcome
//! belongs to the caller.

use serde::Serialize;

use wm_domain::config::CheckoutConfig;
use wm_domain::trace::TraceEvent;
use wm_domain::{Bill, BillId, PaymentMethod, Result, Wallet};

use crate::allocator::{calculate_checkout, CheckoutPolicy, Quote};
use crate::cart::Cart;
use crate::guard::{apply_guard, InputGuard};
use crate::receipt::{mark_paid, Receipt};
use crate::selection::{payable_bills, select_bills};
use crate::settlement::settle_wallet;

#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    /// Bills to pay; `None` selects every payable bill.
    pub selection: Option<Vec<BillId>>,
    pub policy: CheckoutPolicy,
    pub guard: InputGuard,
}

impl CheckoutRequest {
    pub fn from_config(cfg: &CheckoutConfig) -> Self {
        Self {
            selection: None,
            policy: CheckoutPolicy::from(cfg),
            guard: cfg.input_guard,
        }
    }
}

/// A computed quote together with the inputs it was computed from.
#[derive(Debug, Clone, Serialize)]
pub struct PreparedCheckout {
    #[serde(skip)]
    pub cart: Cart,
    pub selected: Vec<Bill>,
    pub quote: Quote,
}

/// Result of a confirmed checkout.
#[derive(Debug, Clone, Serialize)]
pub struct Confirmation {
    pub receipt: Receipt,
    pub wallet: Wallet,
    pub bills: Vec<Bill>,
}

pub fn prepare(cart: Cart, request: &CheckoutRequest) -> Result<PreparedCheckout> {
    let cart = apply_guard(request.guard, cart)?;
    let selected = match &request.selection {
        Some(ids) => select_bills(&cart.bills, ids)?,
        None => payable_bills(&cart.bills),
    };
    let quote = calculate_checkout(&selected, &cart.rewards, &cart.wallet, request.policy);

    TraceEvent::QuoteComputed {
        bills: selected.len(),
        subtotal: quote.subtotal,
        rewards_applied: quote.rewards_applied,
        net_payable: quote.net_payable,
        wallet_use: quote.wallet_use,
        external_pay: quote.external_pay,
    }
    .emit();

    Ok(PreparedCheckout {
        cart,
        selected,
        quote,
    })
}

pub fn confirm(prepared: PreparedCheckout, method: PaymentMethod) -> Result<Confirmation> {
    let wallet = settle_wallet(&prepared.cart.wallet, &prepared.quote)?;
    let receipt = Receipt::issue(&prepared.selected, prepared.quote, method, wallet)?;
    let bills = mark_paid(&prepared.cart.bills, &receipt);
    Ok(Confirmation {
        receipt,
        wallet,
        bills,
    })
}
