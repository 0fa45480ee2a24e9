//! Sparse ERI store with a linear-scan resolver

use super::symmetry::permutations;
use super::EriResolver;
use crate::error::{EnergyError, Result};
use serde::{Deserialize, Serialize};

/// One stored integral: an orbital index quadruplet and its value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EriRecord {
    pub index: [usize; 4],
    pub value: f64,
}

impl EriRecord {
    pub fn new(i: usize, j: usize, k: usize, l: usize, value: f64) -> Self {
        EriRecord {
            index: [i, j, k, l],
            value,
        }
    }
}

/// Immutable, ordered collection of symmetry-distinct ERI records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EriTable {
    records: Vec<EriRecord>,
}

impl EriTable {
    pub fn new(records: Vec<EriRecord>) -> Self {
        EriTable { records }
    }

    /// Build a table and check that every index lies in `[0, mo_num)`
    pub fn with_orbital_count(records: Vec<EriRecord>, mo_num: usize) -> Result<Self> {
        if let Some((n, record)) = records
            .iter()
            .enumerate()
            .find(|(_, record)| record.index.iter().any(|&p| p >= mo_num))
        {
            return Err(EnergyError::invalid(format!(
                "ERI record {} has index {:?} outside [0, {})",
                n, record.index, mo_num
            )));
        }
        Ok(EriTable { records })
    }

    pub fn records(&self) -> &[EriRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EriRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a EriTable {
    type Item = &'a EriRecord;
    type IntoIter = std::slice::Iter<'a, EriRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Scan `table` once for any of the 8 orderings of (p,q,r,s)
///
/// The first matching record wins. An integral that is not stored under any
/// ordering is an implicit zero, not missing data.
pub fn get_eri(p: usize, q: usize, r: usize, s: usize, table: &EriTable) -> f64 {
    let wanted = permutations(p, q, r, s);
    table
        .iter()
        .find(|record| wanted.contains(&record.index))
        .map(|record| record.value)
        .unwrap_or(0.0)
}

impl EriResolver for EriTable {
    fn get_eri(&self, p: usize, q: usize, r: usize, s: usize) -> f64 {
        get_eri(p, q, r, s, self)
    }
}
