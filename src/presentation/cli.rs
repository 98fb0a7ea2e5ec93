//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --root) are inherited by all subcommands
//! - Threshold flags override settings and `LINTHOLD_*` variables

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::application::AnalysisOverrides;

/// Linthold - uniform static-analysis configuration for multi-module builds
#[derive(Parser, Debug)]
#[command(name = "linthold")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Build root (default: discovered from the current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Threshold ceilings shared by `resolve` and `check`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ThresholdArgs {
    /// Maximum number of errors allowed
    #[arg(long, value_name = "N")]
    pub max_errors: Option<u64>,

    /// Maximum number of warnings allowed
    #[arg(long, value_name = "N")]
    pub max_warnings: Option<u64>,
}

impl From<&ThresholdArgs> for AnalysisOverrides {
    fn from(args: &ThresholdArgs) -> Self {
        Self {
            max_errors: args.max_errors,
            max_warnings: args.max_warnings,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the analysis configuration of each module
    Resolve {
        /// Module directory (repeatable; default: all discovered modules)
        #[arg(short, long = "module", value_name = "DIR")]
        modules: Vec<PathBuf>,

        #[command(flatten)]
        thresholds: ThresholdArgs,
    },

    /// Evaluate a finding report against the thresholds (exits 1 on failure)
    Check {
        /// JSON finding report written by the analysis tool
        #[arg(short, long, value_name = "FILE")]
        report: PathBuf,

        /// Module directory (default: the current directory)
        #[arg(short, long, value_name = "DIR")]
        module: Option<PathBuf>,

        #[command(flatten)]
        thresholds: ThresholdArgs,
    },

    /// Look up a version catalog entry
    Catalog {
        /// Catalog key (e.g. checkstyle)
        #[arg(required_unless_present = "list", conflicts_with = "list")]
        key: Option<String>,

        /// List every entry
        #[arg(long)]
        list: bool,
    },

    /// List the modules of the build
    Modules,
}
