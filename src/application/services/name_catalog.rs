use rand::seq::IndexedRandom;

use crate::domain::{FullName, Gender, GenderFilter, NameRecord};

/// Read-only view over a static name table.
#[derive(Debug, Clone, Copy)]
pub struct NameCatalog {
    records: &'static [NameRecord],
}

impl NameCatalog {
    pub fn new(records: &'static [NameRecord]) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &'static [NameRecord] {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn filtered(&self, filter: GenderFilter) -> Vec<&'static NameRecord> {
        self.records
            .iter()
            .filter(|r| filter.matches(r.gender))
            .collect()
    }

    /// Uniform pick over every record matching `filter`.
    pub fn select_random(&self, filter: GenderFilter) -> Result<NameRecord, CatalogError> {
        let candidates = self.filtered(filter);
        candidates
            .choose(&mut rand::rng())
            .map(|r| **r)
            .ok_or(CatalogError::Empty(filter))
    }

    pub fn random_full_name(
        &self,
        filter: GenderFilter,
        last_name: &str,
    ) -> Result<FullName, CatalogError> {
        let record = self.select_random(filter)?;
        Ok(FullName::compose(record, last_name))
    }

    pub fn by_tribe(&self, tribe: &str) -> Vec<&'static NameRecord> {
        let tribe = tribe.trim();
        self.records
            .iter()
            .filter(|r| r.tribe.eq_ignore_ascii_case(tribe))
            .collect()
    }

    pub fn by_gender(&self, gender: Gender) -> Vec<&'static NameRecord> {
        self.filtered(GenderFilter::Only(gender))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("no names match gender filter '{0}'")]
    Empty(GenderFilter),
}
