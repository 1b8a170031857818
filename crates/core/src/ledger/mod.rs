//! Balance ledger and settlement engine.
//!
//! This module implements the core computation over a group snapshot:
//! - Domain types for expenses, shares, balances, and transfers
//! - Expense validation (lenient or strict)
//! - Balance aggregation per member
//! - Greedy settlement minimization
//! - The facade combining both for callers
//! - Split builders and single-member views

pub mod balance;
pub mod error;
pub mod service;
pub mod settlement;
pub mod split;
pub mod summary;
pub mod types;
pub mod validation;

#[cfg(test)]
mod service_props;
#[cfg(test)]
mod settlement_props;
#[cfg(test)]
mod validation_props;

pub use balance::BalanceAggregator;
pub use error::{LedgerError, LedgerErrorKind};
pub use service::{SettlementService, compute_group_settlement};
pub use settlement::SettlementOptimizer;
pub use split::SplitBuilder;
pub use summary::{GroupBalance, MemberSummary, member_balance, settlements_for};
pub use types::{Balances, Expense, GroupSettlement, Settlement, SplitEntry, group_total};
