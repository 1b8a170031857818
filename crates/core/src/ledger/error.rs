//! Ledger error types.
//!
//! Three kinds of failure exist: malformed input (validation), an expense
//! that references someone outside the roster, and a ledger whose debts and
//! credits do not cancel. The last one always means an upstream bug.

use splitledger_shared::AppError;
use splitledger_shared::types::{ExpenseId, MemberId, Money};
use thiserror::Error;

/// Coarse classification of a [`LedgerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerErrorKind {
    /// Input is malformed.
    Validation,
    /// Input references a member outside the roster.
    UnknownMember,
    /// Internal invariant violated.
    ImbalancedLedger,
}

/// Errors that can occur while computing balances or settlements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    // ========== Validation Errors ==========
    /// Expense total cannot be negative.
    #[error("Expense {expense_id} has a negative total: {amount}")]
    NegativeTotal {
        /// The offending expense.
        expense_id: ExpenseId,
        /// The total in minor units.
        amount: Money,
    },

    /// Split share cannot be negative.
    #[error("Expense {expense_id} has a negative share for member {member}: {amount}")]
    NegativeShare {
        /// The offending expense.
        expense_id: ExpenseId,
        /// Member owning the share.
        member: MemberId,
        /// The share in minor units.
        amount: Money,
    },

    /// Split shares do not add up to the expense total (strict mode).
    #[error("Expense {expense_id} splits sum to {split_sum}, expected {total}")]
    SplitSumMismatch {
        /// The offending expense.
        expense_id: ExpenseId,
        /// Expense total in minor units.
        total: Money,
        /// Sum of all split shares in minor units.
        split_sum: Money,
    },

    /// Payer appears more than once in the splits (strict mode).
    #[error("Expense {expense_id} lists payer {payer} in more than one split")]
    DuplicatePayerShare {
        /// The offending expense.
        expense_id: ExpenseId,
        /// The payer.
        payer: MemberId,
    },

    /// An expense must be split between at least one member.
    #[error("Expense {expense_id} has no members to split between")]
    EmptySplit {
        /// The offending expense.
        expense_id: ExpenseId,
    },

    /// Amounts exceed the representable range.
    #[error("Amount overflow while aggregating")]
    AmountOverflow,

    // ========== Roster Errors ==========
    /// Member referenced by an expense is not in the roster.
    #[error("Expense {expense_id} references unknown member {member}")]
    UnknownMember {
        /// The offending expense.
        expense_id: ExpenseId,
        /// The unknown member.
        member: MemberId,
    },

    // ========== Invariant Errors ==========
    /// Debtor and creditor magnitudes do not cancel.
    #[error("Ledger is not balanced. Debits: {debits}, Credits: {credits}")]
    ImbalancedLedger {
        /// Total owed by debtors in minor units.
        debits: Money,
        /// Total owed to creditors in minor units.
        credits: Money,
    },
}

impl LedgerError {
    /// Returns the error kind.
    #[must_use]
    pub fn kind(&self) -> LedgerErrorKind {
        match self {
            Self::NegativeTotal { .. }
            | Self::NegativeShare { .. }
            | Self::SplitSumMismatch { .. }
            | Self::DuplicatePayerShare { .. }
            | Self::EmptySplit { .. }
            | Self::AmountOverflow => LedgerErrorKind::Validation,
            Self::UnknownMember { .. } => LedgerErrorKind::UnknownMember,
            Self::ImbalancedLedger { .. } => LedgerErrorKind::ImbalancedLedger,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NegativeTotal { .. } => "NEGATIVE_TOTAL",
            Self::NegativeShare { .. } => "NEGATIVE_SHARE",
            Self::SplitSumMismatch { .. } => "SPLIT_SUM_MISMATCH",
            Self::DuplicatePayerShare { .. } => "DUPLICATE_PAYER_SHARE",
            Self::EmptySplit { .. } => "EMPTY_SPLIT",
            Self::AmountOverflow => "AMOUNT_OVERFLOW",
            Self::UnknownMember { .. } => "UNKNOWN_MEMBER",
            Self::ImbalancedLedger { .. } => "IMBALANCED_LEDGER",
        }
    }

    /// Returns true if this error is retryable.
    ///
    /// Computation is pure, so the same input always fails the same way.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err.kind() {
            LedgerErrorKind::Validation => Self::Validation(err.to_string()),
            LedgerErrorKind::UnknownMember => Self::NotFound(err.to_string()),
            LedgerErrorKind::ImbalancedLedger => Self::Internal(err.to_string()),
        }
    }
}
