//! Core MP2 implementation

extern crate nalgebra as na;

use crate::eri_impl::EriResolver;
use crate::error::{EnergyError, Result};
use crate::tensor_impl::OvTensor;
use na::DVector;
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

/// Smallest |ε_i + ε_j - ε_a - ε_b| accepted by default
pub const DEFAULT_DEGENERACY_THRESHOLD: f64 = 1e-10;

/// MP2 calculation structure
///
/// Holds the orbital partitioning and orbital energies of a converged
/// closed-shell reference and computes the MP2 correlation energy either from
/// a precomputed [`OvTensor`] or directly through an [`EriResolver`].
pub struct MP2 {
    /// Number of molecular orbitals
    pub num_mo: usize,

    /// Number of occupied orbitals
    pub num_occ: usize,

    /// Number of virtual orbitals
    pub num_virt: usize,

    /// Orbital energies, index-aligned with the orbital index
    pub orbital_energies: DVector<f64>,

    /// Denominators with |D| at or below this value are rejected
    pub degeneracy_threshold: f64,

    /// MP2 correlation energy (calculated)
    pub correlation_energy: Option<f64>,
}

/// MP2 energies of a finished calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Mp2Energy {
    pub correlation: f64,
    pub hf_total: f64,
    pub total: f64,
}

impl Mp2Energy {
    pub fn new(correlation: f64, hf_total: f64) -> Self {
        Mp2Energy {
            correlation,
            hf_total,
            total: hf_total + correlation,
        }
    }
}

impl MP2 {
    /// Create a new MP2 calculator
    ///
    /// # Arguments
    ///
    /// * `num_occ` - Number of doubly occupied orbitals
    /// * `orbital_energies` - Canonical orbital energies for all MOs
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` when there are more occupied orbitals than
    /// orbital energies.
    pub fn new(num_occ: usize, orbital_energies: DVector<f64>) -> Result<Self> {
        let num_mo = orbital_energies.len();
        if num_occ > num_mo {
            return Err(EnergyError::invalid(format!(
                "number of occupied orbitals ({}) exceeds number of orbital energies ({})",
                num_occ, num_mo
            )));
        }
        let num_virt = num_mo - num_occ;

        info!("MP2 Initialization:");
        info!("  Number of molecular orbitals: {}", num_mo);
        info!("  Number of occupied orbitals: {}", num_occ);
        info!("  Number of virtual orbitals: {}", num_virt);

        Ok(MP2 {
            num_mo,
            num_occ,
            num_virt,
            orbital_energies,
            degeneracy_threshold: DEFAULT_DEGENERACY_THRESHOLD,
            correlation_energy: None,
        })
    }

    pub fn with_degeneracy_threshold(mut self, threshold: f64) -> Self {
        self.degeneracy_threshold = threshold;
        self
    }

    /// ε_i + ε_j - ε_a - ε_b for virtual-local a, b
    fn denominator(&self, i: usize, j: usize, a: usize, b: usize) -> Result<f64> {
        let eps = &self.orbital_energies;
        let denominator = eps[i] + eps[j] - eps[self.num_occ + a] - eps[self.num_occ + b];

        // NaN fails the comparison as well
        if !(denominator.abs() > self.degeneracy_threshold) {
            return Err(EnergyError::DegenerateDenominator {
                i,
                j,
                a,
                b,
                orbital_a: self.num_occ + a,
                orbital_b: self.num_occ + b,
                denominator,
                threshold: self.degeneracy_threshold,
            });
        }
        Ok(denominator)
    }

    /// Sum the MP2 expression for integrals supplied by `g(i, j, a, b)`
    ///
    /// The outer occupied index runs in parallel; partial sums are combined in
    /// index order, and the first degenerate term in (i, j, a, b) order is the
    /// one reported.
    fn sum_terms<F>(&self, g: F) -> Result<f64>
    where
        F: Fn(usize, usize, usize, usize) -> f64 + Sync,
    {
        let partial: Vec<Result<f64>> = (0..self.num_occ)
            .into_par_iter()
            .map(|i| -> Result<f64> {
                let mut energy = 0.0;
                for j in 0..self.num_occ {
                    for a in 0..self.num_virt {
                        for b in 0..self.num_virt {
                            let denominator = self.denominator(i, j, a, b)?;
                            let ijab = g(i, j, a, b);
                            let ijba = g(i, j, b, a);
                            energy += ijab * (2.0 * ijab - ijba) / denominator;
                        }
                    }
                }
                Ok(energy)
            })
            .collect();

        partial.into_iter().sum()
    }

    fn has_empty_block(&mut self) -> bool {
        if self.num_occ == 0 || self.num_virt == 0 {
            info!("No occupied or virtual orbitals - MP2 correlation energy is zero.");
            self.correlation_energy = Some(0.0);
            return true;
        }
        false
    }

    /// Calculate the MP2 correlation energy from the dense occupied-virtual block
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if the tensor dimensions do not match this
    /// calculation, `DegenerateDenominator` for a vanishing denominator.
    pub fn calculate_mp2_energy(&mut self, g: &OvTensor) -> Result<f64> {
        info!("Starting MP2 correlation energy calculation (dense tensor)...");

        if g.num_occ() != self.num_occ || g.num_virt() != self.num_virt {
            return Err(EnergyError::invalid(format!(
                "tensor block {} x {} does not match {} occupied / {} virtual orbitals",
                g.num_occ(),
                g.num_virt(),
                self.num_occ,
                self.num_virt
            )));
        }
        if self.has_empty_block() {
            return Ok(0.0);
        }

        info!(
            "Computing MP2 energy for {} terms...",
            self.num_occ * self.num_occ * self.num_virt * self.num_virt
        );
        let correlation_energy = self.sum_terms(|i, j, a, b| g.get(i, j, a, b))?;

        info!("MP2 correlation energy: {:.12} Eh", correlation_energy);
        self.correlation_energy = Some(correlation_energy);
        Ok(correlation_energy)
    }

    /// Calculate the MP2 correlation energy by querying each integral directly
    ///
    /// G(i,j,a,b) is taken as `eri.get_eri(i, j, n_occ + a, n_occ + b)`. With a
    /// linear-scan resolver every query costs O(n_integrals); pair this with a
    /// hashed resolver for anything beyond toy systems.
    pub fn calculate_mp2_energy_direct<R>(&mut self, eri: &R) -> Result<f64>
    where
        R: EriResolver + Sync,
    {
        info!("Starting MP2 correlation energy calculation (direct method)...");

        if self.has_empty_block() {
            return Ok(0.0);
        }

        let num_occ = self.num_occ;
        let correlation_energy =
            self.sum_terms(|i, j, a, b| eri.get_eri(i, j, num_occ + a, num_occ + b))?;

        info!("MP2 correlation energy: {:.12} Eh", correlation_energy);
        self.correlation_energy = Some(correlation_energy);
        Ok(correlation_energy)
    }

    /// Print a summary of the MP2 calculation
    pub fn print_summary(&self, hf_energy: f64) {
        info!("===========================================");
        info!("        MP2 Calculation Summary");
        info!("===========================================");
        info!("Hartree-Fock energy:       {:.12} Eh", hf_energy);
        if let Some(corr_e) = self.correlation_energy {
            info!("MP2 correlation energy:    {:.12} Eh", corr_e);
            info!("Total MP2 energy:          {:.12} Eh", hf_energy + corr_e);
        } else {
            info!("MP2 correlation energy not yet calculated.");
        }
        info!("===========================================");
    }
}
