//! Turning the resident's checkbox selection into the bill list handed to
//! the allocator.

use std::collections::HashSet;

use wm_domain::{Bill, BillId, Error, Result};

/// Resolve `ids` against `all`, preserving the order of `ids`.
///
/// Fails on unknown ids, bills that are already paid, and ids listed twice.
pub fn select_bills(all: &[Bill], ids: &[BillId]) -> Result<Vec<Bill>> {
    let mut seen = HashSet::with_capacity(ids.len());
    let mut selected = Vec::with_capacity(ids.len());

    for id in ids {
        if !seen.insert(id) {
            return Err(Error::DuplicateBill(id.to_string()));
        }
        let bill = all
            .iter()
            .find(|b| &b.id == id)
            .ok_or_else(|| Error::BillNotFound(id.to_string()))?;
        if !bill.is_payable() {
            return Err(Error::BillAlreadyPaid(id.to_string()));
        }
        selected.push(bill.clone());
    }

    tracing::debug!(requested = ids.len(), "bills selected");
    Ok(selected)
}

/// Every bill still awaiting payment ("select all").
pub fn payable_bills(all: &[Bill]) -> Vec<Bill> {
    all.iter().filter(|b| b.is_payable()).cloned().collect()
}
