//! Net balance aggregation over a group's expenses.

use std::collections::BTreeSet;

use splitledger_shared::ValidationMode;
use splitledger_shared::types::{MemberId, Money};
use tracing::debug;

use super::error::LedgerError;
use super::types::{Balances, Expense};
use super::validation::{checked_apply, validate_expense};

/// Folds expense shares into one signed balance per member.
pub struct BalanceAggregator;

impl BalanceAggregator {
    /// Compute every roster member's net balance.
    ///
    /// - Every member in `members` appears in the result, at zero if inactive.
    /// - Each unsettled share owed by someone other than the payer moves
    ///   `owed_amount` from that member to the payer.
    /// - Settled shares and the payer's own share contribute nothing.
    ///
    /// Runs in O(total split entries). Nothing is returned on failure.
    ///
    /// # Errors
    ///
    /// - `UnknownMember` if a payer or share references someone outside `members`
    /// - a validation error for negative amounts, overflow, or (strict mode)
    ///   broken split invariants
    pub fn compute_balances(
        members: &BTreeSet<MemberId>,
        expenses: &[Expense],
        mode: ValidationMode,
    ) -> Result<Balances, LedgerError> {
        let mut balances: Balances = members.iter().map(|m| (*m, Money::ZERO)).collect();
        let mut applied = 0usize;

        for expense in expenses {
            validate_expense(expense, members, mode)?;

            for split in &expense.splits {
                if split.settled || split.member == expense.payer {
                    continue;
                }

                Self::shift(&mut balances, expense.payer, split.owed_amount)?;
                Self::shift(&mut balances, split.member, -split.owed_amount)?;
                applied += 1;
            }
        }

        debug!(
            members = balances.len(),
            expenses = expenses.len(),
            applied_shares = applied,
            "computed balances"
        );

        Ok(balances)
    }

    fn shift(balances: &mut Balances, member: MemberId, delta: Money) -> Result<(), LedgerError> {
        let entry = balances.entry(member).or_insert(Money::ZERO);
        *entry = checked_apply(*entry, delta)?;
        Ok(())
    }
}
