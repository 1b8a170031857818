//! Minor-unit conversion and the single rounding rule.
//!
//! All ledger arithmetic happens on [`Money`] (integer minor units). Decimals
//! only exist at the boundary, and every decimal that crosses into the core
//! is rounded here with Banker's Rounding (`MidpointNearestEven`).

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use splitledger_shared::types::{Currency, Money};

use super::error::PrecisionError;

/// Tolerance for comparing decimal amounts that have not been converted yet.
pub const DECIMAL_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Tolerance used once amounts are integral. Exact.
pub const MINOR_UNIT_EPSILON: Money = Money::ZERO;

/// Precision guard shared by the aggregator and the optimizer.
pub struct PrecisionGuard;

impl PrecisionGuard {
    /// Round a decimal to the currency's minor unit using Banker's Rounding.
    ///
    /// - 2.345 USD → 2.34
    /// - 2.355 USD → 2.36
    /// - 2.5 JPY → 2
    #[must_use]
    pub fn round(amount: Decimal, currency: Currency) -> Decimal {
        amount.round_dp_with_strategy(
            currency.decimal_places(),
            RoundingStrategy::MidpointNearestEven,
        )
    }

    /// Convert a decimal amount into integer minor units.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use splitledger_core::precision::PrecisionGuard;
    /// use splitledger_shared::types::{Currency, Money};
    ///
    /// let cents = PrecisionGuard::to_minor_units(dec!(12.345), Currency::Usd).unwrap();
    /// assert_eq!(cents, Money::from_minor(1234));
    /// ```
    ///
    /// # Errors
    ///
    /// `OutOfRange` if the rounded amount does not fit in `i64` minor units.
    pub fn to_minor_units(amount: Decimal, currency: Currency) -> Result<Money, PrecisionError> {
        let mut rounded = Self::round(amount, currency);
        rounded.rescale(currency.decimal_places());

        i64::try_from(rounded.mantissa())
            .map(Money::from_minor)
            .map_err(|_| PrecisionError::OutOfRange { amount })
    }

    /// Convert minor units back into a decimal with the currency's exact scale.
    #[must_use]
    pub fn from_minor_units(money: Money, currency: Currency) -> Decimal {
        Decimal::new(money.minor_units(), currency.decimal_places())
    }

    /// Parse a user-supplied decimal string (`.` or `,` separator) into minor units.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` for blank or non-numeric text, `OutOfRange` as for
    /// [`Self::to_minor_units`].
    pub fn parse_amount(text: &str, currency: Currency) -> Result<Money, PrecisionError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(PrecisionError::InvalidAmount(text.to_string()));
        }

        let amount = Decimal::from_str(&trimmed.replace(',', "."))
            .map_err(|_| PrecisionError::InvalidAmount(text.to_string()))?;
        Self::to_minor_units(amount, currency)
    }

    /// Equality within `epsilon` for decimal amounts.
    ///
    /// Returns false if the difference overflows.
    #[must_use]
    pub fn approx_eq(a: Decimal, b: Decimal, epsilon: Decimal) -> bool {
        a.checked_sub(b).is_some_and(|diff| diff.abs() <= epsilon)
    }

    /// Equality within [`MINOR_UNIT_EPSILON`] for integral amounts.
    #[must_use]
    pub fn within_tolerance(a: Money, b: Money) -> bool {
        a.checked_sub(b)
            .is_some_and(|diff| diff.abs() <= MINOR_UNIT_EPSILON)
    }
}
