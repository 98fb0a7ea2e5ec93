//! Version catalog sources

mod toml_catalog;

pub use toml_catalog::TomlCatalogSource;
