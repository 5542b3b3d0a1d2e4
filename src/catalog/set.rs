use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use crate::error::CatalogError;

use super::builtin::builtin_catalogs;
use super::load::load_catalog_dir;
use super::types::Catalog;

/// All catalogs available to a presentation, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct CatalogSet {
    catalogs: BTreeMap<String, Arc<Catalog>>,
}

impl CatalogSet {
    /// Built-in catalogs plus any found in `extra_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error when a catalog fails to load or validate, or when two
    /// catalogs share an id.
    pub fn load(extra_dir: Option<&Path>) -> Result<Self, CatalogError> {
        let mut set = Self::default();
        for catalog in builtin_catalogs()? {
            set.insert(catalog)?;
        }
        if let Some(dir) = extra_dir {
            for catalog in load_catalog_dir(dir)? {
                set.insert(catalog)?;
            }
        }
        Ok(set)
    }

    /// # Errors
    ///
    /// Returns an error when a catalog with the same id is already present.
    pub fn insert(&mut self, catalog: Catalog) -> Result<(), CatalogError> {
        if self.catalogs.contains_key(catalog.id()) {
            return Err(CatalogError::DuplicateCatalog {
                catalog: catalog.id().to_owned(),
            });
        }
        self.catalogs
            .insert(catalog.id().to_owned(), Arc::new(catalog));
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<Arc<Catalog>> {
        self.catalogs.get(id).cloned()
    }

    /// # Errors
    ///
    /// Returns an error when no catalog has the given id.
    pub fn require(&self, id: &str) -> Result<Arc<Catalog>, CatalogError> {
        self.get(id).ok_or_else(|| CatalogError::UnknownCatalog {
            catalog: id.to_owned(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Catalog>> {
        self.catalogs.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }
}
