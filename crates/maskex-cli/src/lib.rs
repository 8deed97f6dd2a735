//! Shared utilities for maskex-cli
//!
//! Path handling and input expansion reused by the CLI commands.

pub mod processing;

pub use processing::{determine_output_path, expand_inputs, SUPPORTED_EXTENSIONS};
