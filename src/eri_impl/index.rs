//! Hashed ERI lookup keyed by canonical index order

use super::symmetry::canonicalize;
use super::table::EriTable;
use super::EriResolver;
use std::collections::HashMap;
use tracing::debug;

/// O(1) resolver over an [`EriTable`]
///
/// Every record is stored under its canonical quadruplet. When several records
/// share a symmetry class the first one is kept, matching the first-match rule
/// of the linear scan.
#[derive(Debug, Clone, Default)]
pub struct EriIndex {
    integrals: HashMap<[usize; 4], f64>,
}

impl EriIndex {
    pub fn from_table(table: &EriTable) -> Self {
        let mut integrals = HashMap::with_capacity(table.len());
        let mut duplicates = 0usize;
        for record in table {
            let [p, q, r, s] = record.index;
            let key = canonicalize(p, q, r, s);
            if integrals.contains_key(&key) {
                duplicates += 1;
                continue;
            }
            integrals.insert(key, record.value);
        }
        if duplicates > 0 {
            debug!(
                "EriIndex: {} records shadowed by an earlier symmetry-equivalent record",
                duplicates
            );
        }
        EriIndex { integrals }
    }

    /// Number of distinct symmetry classes stored
    pub fn len(&self) -> usize {
        self.integrals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.integrals.is_empty()
    }
}

impl From<&EriTable> for EriIndex {
    fn from(table: &EriTable) -> Self {
        EriIndex::from_table(table)
    }
}

impl EriResolver for EriIndex {
    fn get_eri(&self, p: usize, q: usize, r: usize, s: usize) -> f64 {
        self.integrals
            .get(&canonicalize(p, q, r, s))
            .copied()
            .unwrap_or(0.0)
    }
}
