//! Reading and validating a complete system from an [`IntegralSource`]

extern crate nalgebra as na;

use super::source::IntegralSource;
use crate::eri_impl::{EriRecord, EriTable};
use crate::error::{EnergyError, Result};
use na::{DMatrix, DVector};
use tracing::{debug, info, warn};

/// Number of sparse integrals requested per read
pub const DEFAULT_ERI_CHUNK_SIZE: usize = 4096;

/// Everything the HF and MP2 assemblers consume, owned and validated
#[derive(Debug, Clone)]
pub struct MolecularSystem {
    pub nuclear_repulsion: f64,
    /// Doubly occupied orbitals (= spin-up electrons for a closed shell)
    pub num_occ: usize,
    pub num_mo: usize,
    pub orbital_energies: DVector<f64>,
    pub core_hamiltonian: DMatrix<f64>,
    pub eri: EriTable,
}

impl MolecularSystem {
    pub fn num_virt(&self) -> usize {
        self.num_mo - self.num_occ
    }
}

fn to_count(quantity: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| {
        EnergyError::invalid(format!("'{}' must be non-negative, got {}", quantity, value))
    })
}

/// Perform every read the engine needs and validate the result
///
/// Sparse integrals are fetched in pages of `chunk_size` records. A source
/// that delivers an empty page before `eri_count` records arrived ends the read
/// early; the integrals received so far are kept.
///
/// # Errors
///
/// `UpstreamReadFailure` for any error of the source, `InvalidConfiguration`
/// for negative counts, `n_occ > mo_num`, an `mo_num` too large to square,
/// wrongly sized arrays or orbital indices outside `[0, mo_num)`.
pub fn load_system<S: IntegralSource>(source: &S, chunk_size: usize) -> Result<MolecularSystem> {
    if chunk_size == 0 {
        return Err(EnergyError::invalid("ERI chunk size must be positive"));
    }

    let nuclear_repulsion = source
        .read_nuclear_repulsion()
        .map_err(|e| EnergyError::upstream("nuclear_repulsion_energy", e))?;
    info!("E_nn = {:.10}", nuclear_repulsion);

    let num_occ = source
        .read_electron_up_count()
        .map_err(|e| EnergyError::upstream("electron_up_count", e))
        .and_then(|n| to_count("electron_up_count", n))?;
    let num_mo = source
        .read_mo_count()
        .map_err(|e| EnergyError::upstream("molecular_orbital_count", e))
        .and_then(|n| to_count("molecular_orbital_count", n))?;
    if num_occ > num_mo {
        return Err(EnergyError::invalid(format!(
            "number of occupied orbitals ({}) exceeds number of molecular orbitals ({})",
            num_occ, num_mo
        )));
    }
    let num_h_core = num_mo.checked_mul(num_mo).ok_or_else(|| {
        EnergyError::invalid(format!(
            "molecular orbital count {} is too large for a core Hamiltonian matrix",
            num_mo
        ))
    })?;
    info!("n_occ = {}, mo_num = {}, n_virt = {}", num_occ, num_mo, num_mo - num_occ);

    let energies = source
        .read_orbital_energies(num_mo)
        .map_err(|e| EnergyError::upstream("orbital_energies", e))?;
    if energies.len() != num_mo {
        return Err(EnergyError::invalid(format!(
            "expected {} orbital energies, got {}",
            num_mo,
            energies.len()
        )));
    }
    for (p, eps) in energies.iter().enumerate() {
        debug!("  eps[{}] = {:.10}", p, eps);
    }
    let orbital_energies = DVector::from_vec(energies);

    let h_core = source
        .read_core_hamiltonian(num_mo)
        .map_err(|e| EnergyError::upstream("core_hamiltonian", e))?;
    if h_core.len() != num_h_core {
        return Err(EnergyError::invalid(format!(
            "expected {} core Hamiltonian elements, got {}",
            num_h_core,
            h_core.len()
        )));
    }
    let core_hamiltonian = DMatrix::from_row_slice(num_mo, num_mo, &h_core);

    let num_integrals = source
        .read_eri_count()
        .map_err(|e| EnergyError::upstream("eri_count", e))
        .and_then(|n| to_count("eri_count", n))?;
    let eri = read_eri_table(source, num_integrals, num_mo, chunk_size)?;
    info!("n_integrals read = {}", eri.len());

    Ok(MolecularSystem {
        nuclear_repulsion,
        num_occ,
        num_mo,
        orbital_energies,
        core_hamiltonian,
        eri,
    })
}

fn read_eri_table<S: IntegralSource>(
    source: &S,
    num_integrals: usize,
    num_mo: usize,
    chunk_size: usize,
) -> Result<EriTable> {
    // eri_count is only an announcement; reserve one page and grow from there
    let mut records = Vec::with_capacity(num_integrals.min(chunk_size));
    let mut offset = 0;

    while offset < num_integrals {
        let max_count = chunk_size.min(num_integrals - offset);
        let chunk = source
            .read_sparse_eri(offset, max_count)
            .map_err(|e| EnergyError::upstream("sparse_eri", e))?;

        if chunk.values.len() != chunk.indices.len() || chunk.len() > max_count {
            return Err(EnergyError::invalid(format!(
                "ERI page at offset {} returned {} indices and {} values for at most {} integrals",
                offset,
                chunk.indices.len(),
                chunk.values.len(),
                max_count
            )));
        }
        if chunk.is_empty() {
            warn!(
                "Integral source ran dry after {} of {} integrals",
                offset, num_integrals
            );
            break;
        }

        for (quad, &value) in chunk.indices.iter().zip(chunk.values.iter()) {
            let mut index = [0usize; 4];
            for (slot, &p) in index.iter_mut().zip(quad.iter()) {
                *slot = usize::try_from(p).map_err(|_| {
                    EnergyError::invalid(format!("negative orbital index in ERI record {:?}", quad))
                })?;
            }
            records.push(EriRecord { index, value });
        }

        debug!("Read ERI page: offset {}, {} integrals", offset, chunk.len());
        offset += chunk.len();
    }

    EriTable::with_orbital_count(records, num_mo)
}
