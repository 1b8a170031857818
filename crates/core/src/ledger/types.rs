//! Ledger domain types.
//!
//! These are read-only snapshots supplied by the expense store. The core
//! never mutates them; the `settled` flag is flipped elsewhere when a
//! transfer is confirmed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use splitledger_shared::types::{ExpenseId, MemberId, Money};

/// Net position per member.
///
/// Positive means the member is owed money (creditor), negative means the
/// member owes money (debtor). Sums to zero over a valid ledger.
pub type Balances = BTreeMap<MemberId, Money>;

/// One member's share of one expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitEntry {
    /// The member who owes the share.
    pub member: MemberId,
    /// The share in minor units.
    pub owed_amount: Money,
    /// Whether the share has already been paid back.
    #[serde(default)]
    pub settled: bool,
}

impl SplitEntry {
    /// Creates an outstanding share.
    #[must_use]
    pub const fn unsettled(member: MemberId, owed_amount: Money) -> Self {
        Self {
            member,
            owed_amount,
            settled: false,
        }
    }

    /// Creates a share that has already been paid back.
    #[must_use]
    pub const fn settled(member: MemberId, owed_amount: Money) -> Self {
        Self {
            member,
            owed_amount,
            settled: true,
        }
    }
}

/// A shared expense paid by one member and split between several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Expense identifier.
    pub id: ExpenseId,
    /// Member who paid.
    pub payer: MemberId,
    /// Amount paid in minor units.
    pub total_amount: Money,
    /// Per-member shares, in the order they were recorded.
    pub splits: Vec<SplitEntry>,
}

impl Expense {
    /// Sum of every share, settled or not. `None` on overflow.
    #[must_use]
    pub fn split_sum(&self) -> Option<Money> {
        self.splits
            .iter()
            .try_fold(Money::ZERO, |acc, split| acc.checked_add(split.owed_amount))
    }

    /// What the payer is still owed on this expense. `None` on overflow.
    ///
    /// Counts unsettled shares of everyone except the payer.
    #[must_use]
    pub fn outstanding(&self) -> Option<Money> {
        self.splits
            .iter()
            .filter(|split| !split.settled && split.member != self.payer)
            .try_fold(Money::ZERO, |acc, split| acc.checked_add(split.owed_amount))
    }

    /// Number of splits that reference the payer.
    #[must_use]
    pub fn payer_share_count(&self) -> usize {
        self.splits
            .iter()
            .filter(|split| split.member == self.payer)
            .count()
    }
}

/// Sum of expense totals for a group. `None` on overflow.
#[must_use]
pub fn group_total(expenses: &[Expense]) -> Option<Money> {
    expenses
        .iter()
        .try_fold(Money::ZERO, |acc, expense| acc.checked_add(expense.total_amount))
}

/// A recommended transfer from a debtor to a creditor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// The debtor who pays.
    pub from: MemberId,
    /// The creditor who receives.
    pub to: MemberId,
    /// Amount in minor units, always positive.
    pub amount: Money,
}

impl Settlement {
    /// Returns true if `member` pays or receives in this transfer.
    #[must_use]
    pub fn involves(&self, member: MemberId) -> bool {
        self.from == member || self.to == member
    }
}

/// Result of the ledger facade: balances plus the transfer plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSettlement {
    /// Net position of every roster member.
    pub balances: Balances,
    /// Ordered transfers that zero every balance.
    pub settlements: Vec<Settlement>,
}
