//! Mailroom application library
//!
//! This exposes the driver modules of the Mailroom binary for testing and external usage.

pub mod app;
pub mod cli;
pub mod config;
