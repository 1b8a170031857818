//! Shared types, errors, and configuration for Splitledger.
//!
//! This crate provides common types used across all other crates:
//! - Money stored as integer minor units
//! - Typed IDs for members, groups, and expenses
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, LedgerConfig, ValidationMode};
pub use error::{AppError, AppResult};
