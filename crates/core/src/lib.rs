//! Core settlement logic for Splitledger.
//!
//! This crate contains pure computation with ZERO I/O, web, or database
//! dependencies. Callers hand in one consistent snapshot of a group and get
//! back balances and a transfer plan; nothing is retained between calls, so
//! every operation is safe to call concurrently.
//!
//! # Modules
//!
//! - `precision` - Minor-unit conversion, rounding, and exact allocation
//! - `ledger` - Balance aggregation and settlement minimization

pub mod ledger;
pub mod precision;

pub use ledger::{GroupSettlement, LedgerError, SettlementService, compute_group_settlement};
