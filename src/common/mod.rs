//! Common utilities and shared functionality.
//!
//! # Utilities
//!
//! - Log level parsing and logging setup
//!
//! # Data Structures
//!
//! - `CustomError` - Generic error type for boot-time failures
//!
//! # Example
//!
//! ```rust,ignore
//! use bootstrap_actix::common::common::setup_logging;
//!
//! setup_logging(&config)?;
//! ```

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

mod tests;
