//! Domain Layer
//!
//! The core of Linthold: catalog lookup, path resolution, threshold policy
//! and per-module config propagation.
//!
//! ## Structure
//!
//! - `entities/` - Version catalog and per-module config
//! - `value_objects/` - Immutable value types (CatalogKey, Severity, Fingerprint)
//! - `services/` - Resolvers and the config propagator
//! - `policies/` - Threshold policy
//! - `ports/` - Interface definitions for infrastructure
//!
//! Filesystem access only happens through the `FileSystem` port.

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
