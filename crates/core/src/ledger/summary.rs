//! Single-member views over the ledger.

use serde::{Deserialize, Serialize};
use splitledger_shared::types::{GroupId, MemberId, Money};

use super::error::LedgerError;
use super::types::{Expense, Settlement};
use super::validation::{checked_apply, validate_amounts};

/// Net position of one member across a group's expenses.
///
/// Same rules as the group aggregator but needs no roster: shares owed to
/// the member as payer count up, the member's own unsettled shares on other
/// people's expenses count down.
pub fn member_balance(member: MemberId, expenses: &[Expense]) -> Result<Money, LedgerError> {
    let mut balance = Money::ZERO;

    for expense in expenses {
        validate_amounts(expense)?;

        for split in &expense.splits {
            if split.settled || split.member == expense.payer {
                continue;
            }
            if expense.payer == member {
                balance = checked_apply(balance, split.owed_amount)?;
            } else if split.member == member {
                balance = checked_apply(balance, -split.owed_amount)?;
            }
        }
    }

    Ok(balance)
}

/// Transfers where `member` pays or receives, in plan order.
#[must_use]
pub fn settlements_for(member: MemberId, settlements: &[Settlement]) -> Vec<Settlement> {
    settlements
        .iter()
        .filter(|s| s.involves(member))
        .copied()
        .collect()
}

/// A member's balance inside one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupBalance {
    /// The group.
    pub group_id: GroupId,
    /// Net position in that group.
    pub balance: Money,
}

/// Totals of a member's balances across all their groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSummary {
    /// Sum of positive group balances (others owe the member).
    pub total_owed: Money,
    /// Sum of magnitudes of negative group balances (the member owes).
    pub total_owe: Money,
    /// `total_owed - total_owe`.
    pub net_balance: Money,
    /// Per-group balances in input order.
    pub groups: Vec<GroupBalance>,
}

impl MemberSummary {
    /// Totals per-group balances.
    ///
    /// # Errors
    ///
    /// `AmountOverflow` if a total exceeds the representable range.
    pub fn from_group_balances<I>(balances: I) -> Result<Self, LedgerError>
    where
        I: IntoIterator<Item = GroupBalance>,
    {
        let mut total_owed = Money::ZERO;
        let mut total_owe = Money::ZERO;
        let mut groups = Vec::new();

        for group in balances {
            if group.balance.is_positive() {
                total_owed = checked_apply(total_owed, group.balance)?;
            } else if group.balance.is_negative() {
                let magnitude = Money::ZERO
                    .checked_sub(group.balance)
                    .ok_or(LedgerError::AmountOverflow)?;
                total_owe = checked_apply(total_owe, magnitude)?;
            }
            groups.push(group);
        }

        let net_balance = total_owed
            .checked_sub(total_owe)
            .ok_or(LedgerError::AmountOverflow)?;

        Ok(Self {
            total_owed,
            total_owe,
            net_balance,
            groups,
        })
    }
}
