//! Expense validation rules.

use std::collections::BTreeSet;

use splitledger_shared::ValidationMode;
use splitledger_shared::types::{MemberId, Money};

use super::error::LedgerError;
use super::types::Expense;

/// Rejects negative totals and negative shares. Applies in every mode.
pub fn validate_amounts(expense: &Expense) -> Result<(), LedgerError> {
    if expense.total_amount.is_negative() {
        return Err(LedgerError::NegativeTotal {
            expense_id: expense.id,
            amount: expense.total_amount,
        });
    }

    if let Some(split) = expense.splits.iter().find(|s| s.owed_amount.is_negative()) {
        return Err(LedgerError::NegativeShare {
            expense_id: expense.id,
            member: split.member,
            amount: split.owed_amount,
        });
    }

    Ok(())
}

/// Rejects payers or split members outside the roster.
pub fn validate_roster(
    expense: &Expense,
    members: &BTreeSet<MemberId>,
) -> Result<(), LedgerError> {
    let unknown = std::iter::once(expense.payer)
        .chain(expense.splits.iter().map(|s| s.member))
        .find(|member| !members.contains(member));

    match unknown {
        Some(member) => Err(LedgerError::UnknownMember {
            expense_id: expense.id,
            member,
        }),
        None => Ok(()),
    }
}

/// Checks the split invariants enforced in strict mode only.
///
/// - shares sum to the expense total
/// - the payer appears at most once
pub fn validate_split_invariants(expense: &Expense) -> Result<(), LedgerError> {
    if expense.payer_share_count() > 1 {
        return Err(LedgerError::DuplicatePayerShare {
            expense_id: expense.id,
            payer: expense.payer,
        });
    }

    let split_sum = expense.split_sum().ok_or(LedgerError::AmountOverflow)?;
    if split_sum != expense.total_amount {
        return Err(LedgerError::SplitSumMismatch {
            expense_id: expense.id,
            total: expense.total_amount,
            split_sum,
        });
    }

    Ok(())
}

/// Validates one expense against the roster and the configured mode.
///
/// Roster membership is checked first, then amounts, then strict invariants.
///
/// # Errors
///
/// The first rule the expense breaks.
pub fn validate_expense(
    expense: &Expense,
    members: &BTreeSet<MemberId>,
    mode: ValidationMode,
) -> Result<(), LedgerError> {
    validate_roster(expense, members)?;
    validate_amounts(expense)?;

    if mode == ValidationMode::Strict {
        validate_split_invariants(expense)?;
    }

    Ok(())
}

/// Guards against overflow when a share is credited or debited.
pub(crate) fn checked_apply(balance: Money, delta: Money) -> Result<Money, LedgerError> {
    balance.checked_add(delta).ok_or(LedgerError::AmountOverflow)
}
