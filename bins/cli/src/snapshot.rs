//! Wire format of a group snapshot as exported by the expense store.
//!
//! Amounts arrive as decimal strings (or JSON numbers) in major units and are
//! converted to minor units here, before anything reaches the core.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::Deserialize;
use splitledger_core::ledger::{Expense, SplitBuilder};
use splitledger_core::precision::PrecisionGuard;
use splitledger_shared::AppResult;
use splitledger_shared::types::{Currency, ExpenseId, MemberId};

/// One group: its roster and every expense recorded against it.
#[derive(Debug, Deserialize)]
pub struct Snapshot {
    /// Overrides the configured currency when present.
    #[serde(default)]
    pub currency: Option<Currency>,
    pub members: BTreeSet<MemberId>,
    #[serde(default)]
    pub expenses: Vec<ExpenseRecord>,
}

#[derive(Debug, Deserialize)]
pub struct ExpenseRecord {
    pub id: ExpenseId,
    pub payer: MemberId,
    pub total_amount: Decimal,
    pub split: SplitRecord,
}

/// How the expense was divided when it was recorded.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SplitRecord {
    /// Equal shares; the whole roster when `participants` is omitted.
    Equal {
        #[serde(default)]
        participants: Option<BTreeSet<MemberId>>,
        /// Members who already paid their share back.
        #[serde(default)]
        settled: BTreeSet<MemberId>,
    },
    /// Explicit per-member shares. The payer's own share counts as settled.
    Custom { shares: Vec<ShareRecord> },
}

#[derive(Debug, Deserialize)]
pub struct ShareRecord {
    pub member: MemberId,
    pub amount: Decimal,
    #[serde(default)]
    pub settled: bool,
}

impl Snapshot {
    /// Converts the snapshot into the roster and minor-unit expenses.
    ///
    /// # Errors
    ///
    /// Returns a validation error for amounts that cannot be represented or
    /// splits that cannot be built.
    pub fn into_ledger(self, currency: Currency) -> AppResult<(BTreeSet<MemberId>, Vec<Expense>)> {
        let Self {
            members, expenses, ..
        } = self;

        let expenses = expenses
            .into_iter()
            .map(|record| record.into_expense(&members, currency))
            .collect::<AppResult<Vec<_>>>()?;

        Ok((members, expenses))
    }
}

impl ExpenseRecord {
    fn into_expense(self, roster: &BTreeSet<MemberId>, currency: Currency) -> AppResult<Expense> {
        let total = PrecisionGuard::to_minor_units(self.total_amount, currency)?;

        match self.split {
            SplitRecord::Equal {
                participants,
                settled,
            } => {
                let participants = participants.unwrap_or_else(|| roster.clone());
                let mut expense = SplitBuilder::equal(self.id, self.payer, total, &participants)?;
                for split in &mut expense.splits {
                    split.settled |= settled.contains(&split.member);
                }
                Ok(expense)
            }
            SplitRecord::Custom { shares } => {
                let amounts = shares
                    .iter()
                    .map(|share| {
                        PrecisionGuard::to_minor_units(share.amount, currency)
                            .map(|amount| (share.member, amount))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                let mut expense = SplitBuilder::custom(self.id, self.payer, total, &amounts)?;
                for (split, share) in expense.splits.iter_mut().zip(&shares) {
                    split.settled |= share.settled;
                }
                Ok(expense)
            }
        }
    }
}
