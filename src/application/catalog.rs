//! Catalog query use case

use std::sync::Arc;

use crate::domain::entities::VersionCatalogEntry;
use crate::domain::ports::CatalogSource;
use crate::domain::services::CatalogResolver;
use crate::domain::value_objects::CatalogKey;
use crate::error::LintholdResult;

pub struct CatalogQueryUseCase<CS>
where
    CS: CatalogSource,
{
    catalog_source: CS,
}

impl<CS> CatalogQueryUseCase<CS>
where
    CS: CatalogSource,
{
    pub fn new(catalog_source: CS) -> Self {
        Self { catalog_source }
    }

    fn resolver(&self) -> LintholdResult<CatalogResolver> {
        Ok(CatalogResolver::new(Arc::new(self.catalog_source.load()?)))
    }

    /// Entry for one raw key
    pub fn lookup(&self, key: &str) -> LintholdResult<VersionCatalogEntry> {
        let key = CatalogKey::parse(key)?;
        Ok(self.resolver()?.lookup(&key)?.clone())
    }

    /// Every entry, sorted by key
    pub fn list(&self) -> LintholdResult<Vec<VersionCatalogEntry>> {
        Ok(self.resolver()?.catalog().entries().cloned().collect())
    }
}
