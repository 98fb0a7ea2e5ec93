//! Domain Services
//!
//! Stateless resolution logic. Filesystem access goes through the
//! `FileSystem` port; the catalog is injected, never looked up globally.

mod catalog_resolver;
mod config_propagator;
mod path_resolver;

pub use catalog_resolver::CatalogResolver;
pub use config_propagator::{ConfigPropagator, DEFAULT_CONFIG_FILE, DEFAULT_TOOL};
pub use path_resolver::PathResolver;

#[cfg(test)]
pub(crate) mod test_support;
