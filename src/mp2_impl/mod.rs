//! MP2 (Møller-Plesset perturbation theory, second order) implementation
//!
//! This module provides the closed-shell MP2 correlation energy on top of the
//! HF reference described by the orbital energies and the two-electron
//! integrals.
//!
//! # Theory
//!
//! E_MP2 = Σ_{ijab} [G(i,j,a,b) * (2*G(i,j,a,b) - G(i,j,b,a))] / (ε_i + ε_j - ε_a - ε_b)
//!
//! where:
//! - i, j are occupied molecular orbitals
//! - a, b are virtual molecular orbitals (virtual-local indices)
//! - G(i,j,a,b) = ⟨ij|ab⟩ = (ia|jb) is the occupied-virtual integral block
//! - ε are orbital energies
//!
//! A denominator that vanishes (degenerate occupied and virtual levels) is
//! reported as [`EnergyError::DegenerateDenominator`](crate::error::EnergyError)
//! instead of producing an infinite or NaN energy.
//!
//! # Usage
//!
//! ```ignore
//! let g = build_ov_tensor(&table, num_occ, num_virt)?;
//! let mut mp2 = MP2::new(num_occ, orbital_energies)?;
//! let correlation_energy = mp2.calculate_mp2_energy(&g)?;
//! let total_energy = hf.total + correlation_energy;
//! ```

mod mp2;

pub use mp2::{Mp2Energy, DEFAULT_DEGENERACY_THRESHOLD, MP2};
