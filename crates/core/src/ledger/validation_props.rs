//! Property-based tests for expense validation rules.

use std::collections::BTreeSet;

use proptest::prelude::*;
use splitledger_shared::ValidationMode;
use splitledger_shared::types::{ExpenseId, MemberId, Money};

use super::error::LedgerError;
use super::types::{Expense, SplitEntry};
use super::validation::validate_expense;

/// Strategy to generate a valid non-negative amount (0.00 to 10,000.00).
fn non_negative_amount() -> impl Strategy<Value = Money> {
    (0i64..1_000_000i64).prop_map(Money::from_minor)
}

/// Strategy to generate a negative amount.
fn negative_amount() -> impl Strategy<Value = Money> {
    (1i64..1_000_000i64).prop_map(|cents| Money::from_minor(-cents))
}

fn mode_strategy() -> impl Strategy<Value = ValidationMode> {
    prop_oneof![Just(ValidationMode::Lenient), Just(ValidationMode::Strict)]
}

fn payer() -> MemberId {
    MemberId::from_u128(1)
}

fn other() -> MemberId {
    MemberId::from_u128(2)
}

fn roster() -> BTreeSet<MemberId> {
    [payer(), other()].into()
}

fn make_expense(total: Money, splits: Vec<SplitEntry>) -> Expense {
    Expense {
        id: ExpenseId::from_u128(1),
        payer: payer(),
        total_amount: total,
        splits,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Negative totals are rejected in every mode.
    #[test]
    fn prop_negative_total_rejected(total in negative_amount(), mode in mode_strategy()) {
        let expense = make_expense(total, vec![]);
        let result = validate_expense(&expense, &roster(), mode);
        prop_assert!(
            matches!(result, Err(LedgerError::NegativeTotal { .. })),
            "Negative total should be rejected, got: {:?}",
            result
        );
    }

    /// Negative shares are rejected in every mode.
    #[test]
    fn prop_negative_share_rejected(
        total in non_negative_amount(),
        share in negative_amount(),
        mode in mode_strategy(),
    ) {
        let expense = make_expense(total, vec![SplitEntry::unsettled(other(), share)]);
        let result = validate_expense(&expense, &roster(), mode);
        prop_assert!(
            matches!(result, Err(LedgerError::NegativeShare { .. })),
            "Negative share should be rejected, got: {:?}",
            result
        );
    }

    /// Shares summing to the total pass strict validation.
    #[test]
    fn prop_matching_sum_accepted_in_strict_mode(
        own in non_negative_amount(),
        owed in non_negative_amount(),
    ) {
        let expense = make_expense(
            own + owed,
            vec![SplitEntry::settled(payer(), own), SplitEntry::unsettled(other(), owed)],
        );
        prop_assert!(validate_expense(&expense, &roster(), ValidationMode::Strict).is_ok());
    }

    /// Shares not summing to the total fail only in strict mode.
    #[test]
    fn prop_mismatched_sum_depends_on_mode(
        total in non_negative_amount(),
        owed in non_negative_amount(),
    ) {
        prop_assume!(total != owed);

        let expense = make_expense(total, vec![SplitEntry::unsettled(other(), owed)]);
        prop_assert!(validate_expense(&expense, &roster(), ValidationMode::Lenient).is_ok());
        let is_mismatch = matches!(
            validate_expense(&expense, &roster(), ValidationMode::Strict),
            Err(LedgerError::SplitSumMismatch { .. })
        );
        prop_assert!(is_mismatch);
    }
}
