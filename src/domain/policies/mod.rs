//! Domain Policies
//!
//! Business rules that govern behavior.
//! These are pure functions that operate on domain values.

mod threshold;

pub use threshold::{ThresholdPolicy, Verdict};
