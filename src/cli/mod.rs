//! Command Line Interface (CLI) layer for tabconv.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that expands glob patterns and
//! feeds every match to `tabconv::Converter`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::{init_logging, run};
