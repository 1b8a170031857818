//! Greedy debt netting.
//!
//! Turns a balance mapping into a short list of point-to-point transfers.
//! This is a heuristic: it emits at most `n - 1` transfers for `n` members
//! with a non-zero balance, but does not search for the global minimum
//! (which is NP-hard in general).

use std::cmp::Ordering;

use splitledger_shared::types::{MemberId, Money};
use tracing::debug;

use super::error::LedgerError;
use super::types::{Balances, Settlement};
use super::validation::checked_apply;
use crate::precision::{MINOR_UNIT_EPSILON, PrecisionGuard};

/// A member's remaining magnitude on one side of the ledger.
#[derive(Debug, Clone, Copy)]
pub(super) struct Position {
    pub(super) member: MemberId,
    pub(super) remaining: Money,
}

/// Largest magnitude first; equal magnitudes by member id ascending.
pub(super) fn by_magnitude_then_id(a: &Position, b: &Position) -> Ordering {
    b.remaining
        .cmp(&a.remaining)
        .then_with(|| a.member.cmp(&b.member))
}

/// Settlement optimizer.
pub struct SettlementOptimizer;

impl SettlementOptimizer {
    /// Compute an ordered transfer plan that drives every balance to zero.
    ///
    /// 1. Split members into debtors and creditors by magnitude; zero
    ///    balances are dropped.
    /// 2. Sort each side largest first, ties by `MemberId` ascending.
    /// 3. Repeatedly match the current debtor with the current creditor for
    ///    the smaller of the two remaining magnitudes, advancing whichever
    ///    side reaches zero.
    ///
    /// Output is a pure function of the input: identical balances always
    /// produce the identical sequence.
    ///
    /// # Errors
    ///
    /// Returns `ImbalancedLedger` if total debts and total credits differ,
    /// and `AmountOverflow` if either total exceeds the representable range.
    pub fn minimize_settlements(balances: &Balances) -> Result<Vec<Settlement>, LedgerError> {
        let mut debtors = Vec::new();
        let mut creditors = Vec::new();

        for (&member, &balance) in balances {
            if balance < -MINOR_UNIT_EPSILON {
                debtors.push(Position {
                    member,
                    remaining: balance.abs(),
                });
            } else if balance > MINOR_UNIT_EPSILON {
                creditors.push(Position {
                    member,
                    remaining: balance,
                });
            }
        }

        let debits = total(&debtors)?;
        let credits = total(&creditors)?;
        if !PrecisionGuard::within_tolerance(debits, credits) {
            return Err(LedgerError::ImbalancedLedger { debits, credits });
        }

        debtors.sort_by(by_magnitude_then_id);
        creditors.sort_by(by_magnitude_then_id);

        let mut settlements = Vec::with_capacity(debtors.len() + creditors.len());
        let (mut i, mut j) = (0, 0);

        while i < debtors.len() && j < creditors.len() {
            let debtor = &mut debtors[i];
            let creditor = &mut creditors[j];
            let amount = debtor.remaining.min(creditor.remaining);

            settlements.push(Settlement {
                from: debtor.member,
                to: creditor.member,
                amount,
            });

            debtor.remaining -= amount;
            creditor.remaining -= amount;

            if debtor.remaining <= MINOR_UNIT_EPSILON {
                i += 1;
            }
            if creditor.remaining <= MINOR_UNIT_EPSILON {
                j += 1;
            }
        }

        debug!(
            debtors = debtors.len(),
            creditors = creditors.len(),
            transfers = settlements.len(),
            "minimized settlements"
        );

        Ok(settlements)
    }

    /// Apply a transfer plan to a balance mapping and return the result.
    ///
    /// Paying `amount` raises the debtor's balance and lowers the creditor's,
    /// so a plan produced by [`Self::minimize_settlements`] leaves every
    /// member at zero. Members missing from `balances` start at zero.
    pub fn apply_settlements(
        balances: &Balances,
        settlements: &[Settlement],
    ) -> Result<Balances, LedgerError> {
        let mut result = balances.clone();

        for settlement in settlements {
            let from = result.entry(settlement.from).or_insert(Money::ZERO);
            *from = checked_apply(*from, settlement.amount)?;

            let to = result.entry(settlement.to).or_insert(Money::ZERO);
            *to = checked_apply(*to, -settlement.amount)?;
        }

        Ok(result)
    }
}

fn total(positions: &[Position]) -> Result<Money, LedgerError> {
    positions
        .iter()
        .try_fold(Money::ZERO, |acc, p| acc.checked_add(p.remaining))
        .ok_or(LedgerError::AmountOverflow)
}
