//! Property-based tests for the settlement optimizer.
//!
//! - Settlement correctness: applying the plan zeroes every balance
//! - Bounded output: at most `n - 1` transfers for `n` non-zero members
//! - No self-transfer, strictly positive amounts
//! - Ordering: largest magnitude first, ties by ascending member id,
//!   whatever order the positions arrive in

use proptest::prelude::*;
use splitledger_shared::types::{MemberId, Money};

use super::error::LedgerError;
use super::settlement::{Position, SettlementOptimizer, by_magnitude_then_id};
use super::types::Balances;

/// Strategy for a balanced ledger of 1..=12 members.
///
/// The last member absorbs the negated sum of the others.
fn balanced_ledger() -> impl Strategy<Value = Balances> {
    prop::collection::vec(-1_000_000i64..1_000_000i64, 0..12).prop_map(|amounts| {
        let closing = -amounts.iter().sum::<i64>();
        amounts
            .into_iter()
            .chain(std::iter::once(closing))
            .enumerate()
            .map(|(i, amount)| (MemberId::from_u128(i as u128 + 1), Money::from_minor(amount)))
            .collect()
    })
}

/// Strategy for balances built from a few repeated magnitudes, so ties are common.
fn tie_heavy_ledger() -> impl Strategy<Value = Balances> {
    prop::collection::vec(prop_oneof![Just(50i64), Just(100i64), Just(150i64)], 1..8)
        .prop_map(|magnitudes| {
            let mut balances = Balances::new();
            for (i, magnitude) in magnitudes.into_iter().enumerate() {
                let base = (i as u128) * 2 + 1;
                balances.insert(MemberId::from_u128(base), Money::from_minor(magnitude));
                balances.insert(MemberId::from_u128(base + 1), Money::from_minor(-magnitude));
            }
            balances
        })
}

/// Strategy for tie-heavy positions with distinct ids, in random order.
fn shuffled_positions() -> impl Strategy<Value = Vec<Position>> {
    prop::collection::vec(prop_oneof![Just(50i64), Just(100i64), Just(150i64)], 2..10)
        .prop_map(|magnitudes| {
            magnitudes
                .into_iter()
                .enumerate()
                .map(|(i, magnitude)| Position {
                    member: MemberId::from_u128(i as u128 + 1),
                    remaining: Money::from_minor(magnitude),
                })
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
}

/// Members with a balance on one side, largest magnitude first, ties by id.
fn expected_order(balances: &Balances, debtors: bool) -> Vec<MemberId> {
    let mut side: Vec<(Money, MemberId)> = balances
        .iter()
        .filter(|(_, b)| if debtors { b.is_negative() } else { b.is_positive() })
        .map(|(m, b)| (b.abs(), *m))
        .collect();
    side.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    side.into_iter().map(|(_, m)| m).collect()
}

/// Members in order of first appearance.
fn first_seen(members: impl Iterator<Item = MemberId>) -> Vec<MemberId> {
    let mut seen = Vec::new();
    for member in members {
        if !seen.contains(&member) {
            seen.push(member);
        }
    }
    seen
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Applying every emitted transfer leaves all balances at zero.
    #[test]
    fn prop_plan_zeroes_ledger(balances in balanced_ledger()) {
        let plan = SettlementOptimizer::minimize_settlements(&balances).unwrap();
        let after = SettlementOptimizer::apply_settlements(&balances, &plan).unwrap();

        prop_assert!(
            after.values().all(|b| b.is_zero()),
            "Balances not zeroed: {:?}",
            after
        );
    }

    /// Output never exceeds non-zero members minus one.
    #[test]
    fn prop_plan_is_bounded(balances in balanced_ledger()) {
        let plan = SettlementOptimizer::minimize_settlements(&balances).unwrap();
        let non_zero = balances.values().filter(|b| !b.is_zero()).count();

        prop_assert!(plan.len() <= non_zero.saturating_sub(1));
    }

    /// Every transfer goes from a debtor to a different creditor for a positive amount.
    #[test]
    fn prop_transfers_are_well_formed(balances in balanced_ledger()) {
        let plan = SettlementOptimizer::minimize_settlements(&balances).unwrap();

        for transfer in &plan {
            prop_assert_ne!(transfer.from, transfer.to);
            prop_assert!(transfer.amount.is_positive());
            prop_assert!(balances[&transfer.from].is_negative());
            prop_assert!(balances[&transfer.to].is_positive());
        }
    }

    /// Sorting ignores arrival order: magnitude descending, then id ascending.
    #[test]
    fn prop_positions_sort_by_magnitude_then_id(positions in shuffled_positions()) {
        let mut sorted = positions;
        sorted.sort_by(by_magnitude_then_id);

        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(
                a.remaining > b.remaining || (a.remaining == b.remaining && a.member < b.member),
                "Out of order: {:?} before {:?}",
                a,
                b
            );
        }
    }

    /// Debtors and creditors enter the plan largest first, ties by id.
    #[test]
    fn prop_plan_visits_members_largest_first(balances in tie_heavy_ledger()) {
        let plan = SettlementOptimizer::minimize_settlements(&balances).unwrap();

        prop_assert_eq!(
            first_seen(plan.iter().map(|t| t.from)),
            expected_order(&balances, true)
        );
        prop_assert_eq!(
            first_seen(plan.iter().map(|t| t.to)),
            expected_order(&balances, false)
        );
    }

    /// Any non-zero residue is reported instead of being coerced.
    #[test]
    fn prop_imbalance_is_rejected(
        balances in balanced_ledger(),
        drift in prop_oneof![-1_000i64..0, 1i64..1_000],
    ) {
        let mut skewed = balances;
        let first = *skewed.keys().next().unwrap();
        *skewed.get_mut(&first).unwrap() += Money::from_minor(drift);

        let result = SettlementOptimizer::minimize_settlements(&skewed);
        prop_assert!(
            matches!(result, Err(LedgerError::ImbalancedLedger { .. })),
            "Expected imbalance, got: {:?}",
            result
        );
    }
}
