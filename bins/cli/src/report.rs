//! JSON report printed by the CLI.

use rust_decimal::Decimal;
use serde::Serialize;
use splitledger_core::ledger::{
    Expense, GroupSettlement, LedgerError, Settlement, group_total, member_balance,
    settlements_for,
};
use splitledger_core::precision::PrecisionGuard;
use splitledger_shared::types::{Currency, MemberId, Money};
use splitledger_shared::{AppError, AppResult, ValidationMode};

/// Balances and transfers with amounts in major units.
#[derive(Debug, Serialize)]
pub struct Report {
    pub currency: Currency,
    pub validation_mode: ValidationMode,
    pub group_total: Decimal,
    pub balances: Vec<BalanceLine>,
    pub settlements: Vec<TransferLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<MemberView>,
}

#[derive(Debug, Serialize)]
pub struct BalanceLine {
    pub member: MemberId,
    pub balance: Decimal,
}

#[derive(Debug, Serialize)]
pub struct TransferLine {
    pub from: MemberId,
    pub to: MemberId,
    pub amount: Decimal,
}

/// One member's balance and the transfers they pay or receive.
#[derive(Debug, Serialize)]
pub struct MemberView {
    pub member: MemberId,
    pub balance: Decimal,
    pub settlements: Vec<TransferLine>,
}

fn to_major(amount: Money, currency: Currency) -> Decimal {
    PrecisionGuard::from_minor_units(amount, currency)
}

impl TransferLine {
    fn new(settlement: &Settlement, currency: Currency) -> Self {
        Self {
            from: settlement.from,
            to: settlement.to,
            amount: to_major(settlement.amount, currency),
        }
    }
}

impl Report {
    /// Builds the report for one computed settlement.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the expense totals overflow.
    pub fn new(
        result: &GroupSettlement,
        expenses: &[Expense],
        currency: Currency,
        validation_mode: ValidationMode,
    ) -> AppResult<Self> {
        let total = group_total(expenses).ok_or(LedgerError::AmountOverflow)?;

        Ok(Self {
            currency,
            validation_mode,
            group_total: to_major(total, currency),
            balances: result
                .balances
                .iter()
                .map(|(&member, &balance)| BalanceLine {
                    member,
                    balance: to_major(balance, currency),
                })
                .collect(),
            settlements: result
                .settlements
                .iter()
                .map(|s| TransferLine::new(s, currency))
                .collect(),
            member: None,
        })
    }

    /// Adds the view for `member`.
    ///
    /// # Errors
    ///
    /// `NotFound` if the member is not on the roster, or a validation error
    /// if their balance overflows.
    pub fn with_member(
        mut self,
        member: MemberId,
        result: &GroupSettlement,
        expenses: &[Expense],
    ) -> AppResult<Self> {
        if !result.balances.contains_key(&member) {
            return Err(AppError::NotFound(format!(
                "Member {member} is not in the group"
            )));
        }

        let balance = member_balance(member, expenses)?;
        self.member = Some(MemberView {
            member,
            balance: to_major(balance, self.currency),
            settlements: settlements_for(member, &result.settlements)
                .iter()
                .map(|s| TransferLine::new(s, self.currency))
                .collect(),
        });
        Ok(self)
    }
}
