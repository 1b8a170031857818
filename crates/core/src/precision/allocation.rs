//! Amount allocation in minor units.
//!
//! Splitting a total across N recipients must never lose or invent a unit:
//! every recipient gets `total / N` and the leftover units go one each to
//! the first recipients in order.

use splitledger_shared::types::Money;

/// Allocation utility for distributing amounts.
pub struct AllocationUtil;

impl AllocationUtil {
    /// Allocate `total` equally across `count` recipients.
    ///
    /// The sum of the result is exactly `total`. Shares differ by at most one
    /// minor unit, with the larger shares first.
    ///
    /// # Example
    ///
    /// ```
    /// use splitledger_core::precision::AllocationUtil;
    /// use splitledger_shared::types::Money;
    ///
    /// // 100.00 / 3 = [33.34, 33.33, 33.33]
    /// let shares = AllocationUtil::allocate_equal(Money::from_minor(10_000), 3);
    /// assert_eq!(shares.iter().sum::<Money>(), Money::from_minor(10_000));
    /// ```
    #[must_use]
    pub fn allocate_equal(total: Money, count: usize) -> Vec<Money> {
        let Ok(divisor) = i64::try_from(count) else {
            return vec![];
        };
        if divisor == 0 {
            return vec![];
        }

        let minor = total.minor_units();
        let base = minor.div_euclid(divisor);
        let extra = minor.rem_euclid(divisor);

        (0..divisor)
            .map(|i| Money::from_minor(if i < extra { base + 1 } else { base }))
            .collect()
    }
}
