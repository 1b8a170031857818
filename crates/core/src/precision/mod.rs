//! Shared numeric policy.
//!
//! - Decimal ↔ minor-unit conversion with Banker's Rounding
//! - Tolerance comparisons
//! - Exact allocation of a total across recipients

pub mod allocation;
pub mod error;
pub mod service;

pub use allocation::AllocationUtil;
pub use error::PrecisionError;
pub use service::{DECIMAL_EPSILON, MINOR_UNIT_EPSILON, PrecisionGuard};
