//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ResolveUseCase` - Configure every module of a build
//! - `CheckUseCase` - Evaluate a finding report for one module
//! - `CatalogQueryUseCase` - Look up catalog entries

pub mod catalog;
pub mod check;
pub mod resolve;
pub mod workspace;

pub use catalog::CatalogQueryUseCase;
pub use check::{CheckOptions, CheckResult, CheckUseCase};
pub use resolve::{ResolveOptions, ResolveResult, ResolveUseCase};
pub use workspace::{AnalysisOverrides, Workspace};
