//! Expense construction from equal or custom splits.
//!
//! The payer's own share is always recorded as settled.

use std::collections::BTreeSet;

use splitledger_shared::types::{ExpenseId, MemberId, Money};

use super::error::LedgerError;
use super::types::{Expense, SplitEntry};
use crate::precision::AllocationUtil;

/// Builds [`Expense`] snapshots the way the expense store records them.
pub struct SplitBuilder;

impl SplitBuilder {
    /// Split `total` equally between `members`.
    ///
    /// Shares sum exactly to `total`; leftover minor units go one each to the
    /// members with the lowest ids.
    ///
    /// # Errors
    ///
    /// `NegativeTotal` for a negative total, `EmptySplit` for no members.
    pub fn equal(
        id: ExpenseId,
        payer: MemberId,
        total: Money,
        members: &BTreeSet<MemberId>,
    ) -> Result<Expense, LedgerError> {
        if total.is_negative() {
            return Err(LedgerError::NegativeTotal {
                expense_id: id,
                amount: total,
            });
        }
        if members.is_empty() {
            return Err(LedgerError::EmptySplit { expense_id: id });
        }

        let shares = AllocationUtil::allocate_equal(total, members.len());
        let splits = members
            .iter()
            .zip(shares)
            .map(|(&member, owed_amount)| SplitEntry {
                member,
                owed_amount,
                settled: member == payer,
            })
            .collect();

        Ok(Expense {
            id,
            payer,
            total_amount: total,
            splits,
        })
    }

    /// Record caller-chosen shares, in the given order.
    ///
    /// Shares are not required to sum to `total`; strict validation catches
    /// that at aggregation time.
    ///
    /// # Errors
    ///
    /// `NegativeTotal`, `NegativeShare`, or `EmptySplit`.
    pub fn custom(
        id: ExpenseId,
        payer: MemberId,
        total: Money,
        shares: &[(MemberId, Money)],
    ) -> Result<Expense, LedgerError> {
        if total.is_negative() {
            return Err(LedgerError::NegativeTotal {
                expense_id: id,
                amount: total,
            });
        }
        if shares.is_empty() {
            return Err(LedgerError::EmptySplit { expense_id: id });
        }
        if let Some(&(member, amount)) = shares.iter().find(|(_, amount)| amount.is_negative()) {
            return Err(LedgerError::NegativeShare {
                expense_id: id,
                member,
                amount,
            });
        }

        let splits = shares
            .iter()
            .map(|&(member, owed_amount)| SplitEntry {
                member,
                owed_amount,
                settled: member == payer,
            })
            .collect();

        Ok(Expense {
            id,
            payer,
            total_amount: total,
            splits,
        })
    }
}
