//! HF energy assembly

extern crate nalgebra as na;

use crate::eri_impl::EriResolver;
use crate::error::{EnergyError, Result};
use na::DMatrix;
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

/// Components of the closed-shell HF total energy
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HfEnergy {
    /// E_nn
    pub nuclear_repulsion: f64,
    /// E1 = 2 Σ_i h_ii
    pub one_electron: f64,
    /// E2 = Σ_ij (2 J_ij - K_ij)
    pub two_electron: f64,
    /// E_nn + E1 + E2
    pub total: f64,
}

impl HfEnergy {
    pub fn electronic(&self) -> f64 {
        self.one_electron + self.two_electron
    }

    pub fn print_summary(&self) {
        info!("===========================================");
        info!("      Hartree-Fock Energy Components");
        info!("===========================================");
        info!("Nuclear repulsion E_nn:    {:.10} Eh", self.nuclear_repulsion);
        info!("One-electron E1:           {:.10} Eh", self.one_electron);
        info!("Two-electron E2:           {:.10} Eh", self.two_electron);
        info!("Hartree-Fock energy:       {:.10} Eh", self.total);
        info!("===========================================");
    }
}

/// Assemble the restricted closed-shell HF energy
///
/// # Arguments
///
/// * `nuclear_repulsion` - Nuclear repulsion energy E_nn
/// * `h_core` - Core Hamiltonian in the MO basis (mo_num x mo_num); only the
///   occupied diagonal is read
/// * `num_occ` - Number of doubly occupied orbitals
/// * `eri` - Two-electron integral resolver
///
/// # Errors
///
/// `InvalidConfiguration` when `h_core` is not square or `num_occ` exceeds the
/// number of molecular orbitals.
pub fn hartree_fock_energy<R>(
    nuclear_repulsion: f64,
    h_core: &DMatrix<f64>,
    num_occ: usize,
    eri: &R,
) -> Result<HfEnergy>
where
    R: EriResolver + Sync,
{
    let mo_num = h_core.nrows();
    if h_core.ncols() != mo_num {
        return Err(EnergyError::invalid(format!(
            "core Hamiltonian must be square, got {} x {}",
            h_core.nrows(),
            h_core.ncols()
        )));
    }
    if num_occ > mo_num {
        return Err(EnergyError::invalid(format!(
            "number of occupied orbitals ({}) exceeds number of molecular orbitals ({})",
            num_occ, mo_num
        )));
    }

    let one_electron = 2.0 * (0..num_occ).map(|i| h_core[(i, i)]).sum::<f64>();

    // Per-row partial sums, combined in row order to keep the result reproducible
    let rows: Vec<f64> = (0..num_occ)
        .into_par_iter()
        .map(|i| {
            (0..num_occ)
                .map(|j| {
                    let coulomb = eri.get_eri(i, j, i, j);
                    let exchange = eri.get_eri(i, j, j, i);
                    2.0 * coulomb - exchange
                })
                .sum::<f64>()
        })
        .collect();
    let two_electron: f64 = rows.iter().sum();

    let energy = HfEnergy {
        nuclear_repulsion,
        one_electron,
        two_electron,
        total: nuclear_repulsion + one_electron + two_electron,
    };

    info!(
        "HF energy assembled over {} occupied orbitals: E_HF = {:.10} Eh",
        num_occ, energy.total
    );
    Ok(energy)
}
