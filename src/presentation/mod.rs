//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Output rendering

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands, ThresholdArgs};
pub use output::{OutputFormat, TextRenderer};
