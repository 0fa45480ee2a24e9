//! Construction and indexing of the dense (occ, occ, virt, virt) tensor

use crate::eri_impl::{canonicalize, EriTable};
use crate::error::{EnergyError, Result};
use std::ops::Index;
use tracing::info;

/// Dense G(i, j, a, b) block of two-electron integrals
///
/// Stored as a flat vector in row-major order with b varying fastest:
/// offset = b + n_virt * (a + n_virt * (j + n_occ * i)).
/// Dimensions: (num_occ, num_occ, num_virt, num_virt)
#[derive(Debug, Clone, PartialEq)]
pub struct OvTensor {
    num_occ: usize,
    num_virt: usize,
    data: Vec<f64>,
}

impl OvTensor {
    /// All-zero tensor for the given block dimensions
    pub fn zeros(num_occ: usize, num_virt: usize) -> Self {
        OvTensor {
            num_occ,
            num_virt,
            data: vec![0.0; num_occ * num_occ * num_virt * num_virt],
        }
    }

    pub fn num_occ(&self) -> usize {
        self.num_occ
    }

    pub fn num_virt(&self) -> usize {
        self.num_virt
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn offset(&self, i: usize, j: usize, a: usize, b: usize) -> usize {
        debug_assert!(i < self.num_occ && j < self.num_occ);
        debug_assert!(a < self.num_virt && b < self.num_virt);
        b + self.num_virt * (a + self.num_virt * (j + self.num_occ * i))
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize, a: usize, b: usize) -> f64 {
        self.data[self.offset(i, j, a, b)]
    }

    fn accumulate(&mut self, i: usize, j: usize, a: usize, b: usize, value: f64) {
        let pos = self.offset(i, j, a, b);
        self.data[pos] += value;
    }
}

impl Index<(usize, usize, usize, usize)> for OvTensor {
    type Output = f64;

    fn index(&self, (i, j, a, b): (usize, usize, usize, usize)) -> &f64 {
        &self.data[self.offset(i, j, a, b)]
    }
}

/// Fold the sparse table into the occupied-virtual block
///
/// Each record is canonicalized; when its first pair is occupied and its second
/// pair virtual the value is added to G(i', j', k' - n_occ, l' - n_occ).
/// Values are accumulated, so two records landing in the same element sum.
pub fn build_ov_tensor(table: &EriTable, num_occ: usize, num_virt: usize) -> Result<OvTensor> {
    let mo_num = num_occ + num_virt;
    let mut tensor = OvTensor::zeros(num_occ, num_virt);
    if tensor.data.is_empty() {
        info!("Occupied-virtual block is empty (n_occ = {}, n_virt = {})", num_occ, num_virt);
        return Ok(tensor);
    }

    let mut kept = 0usize;
    for record in table {
        if record.index.iter().any(|&p| p >= mo_num) {
            return Err(EnergyError::invalid(format!(
                "ERI record {:?} references an orbital outside [0, {})",
                record.index, mo_num
            )));
        }
        let [i, j, k, l] = record.index;
        let [i, j, k, l] = canonicalize(i, j, k, l);
        if i < num_occ && j < num_occ && k >= num_occ && l >= num_occ {
            tensor.accumulate(i, j, k - num_occ, l - num_occ, record.value);
            kept += 1;
        }
    }

    info!(
        "Built occupied-virtual tensor G({} x {} x {} x {}): {} of {} records in block, {:.2} MB",
        num_occ,
        num_occ,
        num_virt,
        num_virt,
        kept,
        table.len(),
        (tensor.data.len() * 8) as f64 / 1_048_576.0
    );

    Ok(tensor)
}
