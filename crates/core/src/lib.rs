//! Mailroom Core - Pure donor bookkeeping with no external dependencies
//!
//! This crate contains the donor data model, the donor collection aggregate,
//! the report and letter formatting, and the command vocabulary a driver
//! issues against a collection. It performs no I/O and no logging - those
//! are handled by the `mailroom` binary.

pub mod domain;
pub mod app;
pub mod error;

// Re-exports for ergonomics
pub use domain::*;
pub use error::*;
