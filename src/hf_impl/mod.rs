//! Closed-shell Hartree-Fock energy from molecular-orbital integrals
//!
//! With canonical HF orbitals the restricted closed-shell energy is
//!
//! E_HF = E_nn + 2 Σ_i h_ii + Σ_ij [2 J_ij - K_ij]
//!
//! where i, j run over the occupied orbitals. Integral records are stored in
//! physicist notation, so J_ij = ⟨ij|ij⟩ and K_ij = ⟨ij|ji⟩ as returned by an
//! [`EriResolver`](crate::eri_impl::EriResolver).

mod hf;

pub use hf::{hartree_fock_energy, HfEnergy};
