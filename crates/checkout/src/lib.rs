//! Resident bill checkout for the waste-management platform.
//!
//! The core is [`allocator::calculate_checkout`]; the other modules cover
//! the steps around it: guarding inputs, resolving the selected bills,
//! settling the wallet, issuing receipts and rendering summary lines.

pub mod allocator;
pub mod cart;
pub mod display;
pub mod flow;
pub mod guard;
pub mod receipt;
pub mod selection;
pub mod settlement;

pub use allocator::{calculate_checkout, CheckoutPolicy, Quote};
pub use cart::Cart;
pub use flow::{confirm, prepare, CheckoutRequest, Confirmation, PreparedCheckout};
