//! Command-line interface for the Isolation agent.
//! This module is not part of the public library API.

pub mod args;
pub mod commands;

pub use args::Isolation;
