//! Boundary conversion errors.

use rust_decimal::Decimal;
use splitledger_shared::AppError;
use thiserror::Error;

/// Errors raised while turning decimal input into minor units.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrecisionError {
    /// Input is not a decimal number.
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    /// Amount does not fit in 64-bit minor units.
    #[error("Amount {amount} is out of range")]
    OutOfRange {
        /// The rejected amount.
        amount: Decimal,
    },
}

impl PrecisionError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::OutOfRange { .. } => "AMOUNT_OUT_OF_RANGE",
        }
    }
}

impl From<PrecisionError> for AppError {
    fn from(err: PrecisionError) -> Self {
        Self::Validation(err.to_string())
    }
}
