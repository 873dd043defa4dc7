#![forbid(unsafe_code)]

//! Core domain model and calculators for fitcalc.
//!
//! This crate provides:
//! - Domain types (inputs, results, shared enums)
//! - Maintenance-calorie estimator (Mifflin–St Jeor)
//! - Body-fat estimator (U.S. Navy method)
//! - Workout-split generator and its exercise catalog
//! - Configuration and logging setup for the CLI
//!
//! Every calculator is a pure function: it returns a complete result or an
//! [`Error::InvalidInput`], never a partially filled record.

pub mod types;
pub mod error;
pub mod units;
pub mod energy;
pub mod body_fat;
pub mod catalog;
pub mod split;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use energy::compute_energy;
pub use body_fat::{classify, compute_body_fat};
pub use split::select_split;
pub use catalog::get_default_catalog;
pub use config::Config;
