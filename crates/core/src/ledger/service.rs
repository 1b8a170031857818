//! Ledger facade.
//!
//! The only entry point external collaborators should call. Composes the
//! balance aggregator and the settlement optimizer over one consistent
//! snapshot of a group; no state is kept between calls.

use std::collections::BTreeSet;

use splitledger_shared::types::MemberId;
use splitledger_shared::{LedgerConfig, ValidationMode};

use super::balance::BalanceAggregator;
use super::error::LedgerError;
use super::settlement::SettlementOptimizer;
use super::types::{Expense, GroupSettlement};

/// Settlement service for a group snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettlementService {
    mode: ValidationMode,
}

impl SettlementService {
    /// Creates a service with the given validation mode.
    #[must_use]
    pub const fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    /// Creates a service from the ledger section of the app config.
    #[must_use]
    pub const fn from_config(config: &LedgerConfig) -> Self {
        Self::new(config.validation_mode)
    }

    /// Returns the validation mode in effect.
    #[must_use]
    pub const fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Compute balances for every roster member and the transfers that settle them.
    ///
    /// # Errors
    ///
    /// Surfaces any error from [`BalanceAggregator::compute_balances`] or
    /// [`SettlementOptimizer::minimize_settlements`]. No partial result is
    /// returned.
    #[tracing::instrument(
        skip_all,
        fields(members = members.len(), expenses = expenses.len(), mode = ?self.mode)
    )]
    pub fn compute_group_settlement(
        &self,
        members: &BTreeSet<MemberId>,
        expenses: &[Expense],
    ) -> Result<GroupSettlement, LedgerError> {
        let balances = BalanceAggregator::compute_balances(members, expenses, self.mode)?;
        let settlements = SettlementOptimizer::minimize_settlements(&balances)?;

        Ok(GroupSettlement {
            balances,
            settlements,
        })
    }
}

/// Compute a group settlement with the default validation mode.
///
/// # Errors
///
/// See [`SettlementService::compute_group_settlement`].
pub fn compute_group_settlement(
    members: &BTreeSet<MemberId>,
    expenses: &[Expense],
) -> Result<GroupSettlement, LedgerError> {
    SettlementService::default().compute_group_settlement(members, expenses)
}
