//! Closed-shell Hartree-Fock and MP2 energies from molecular-orbital integrals

pub mod app;
pub mod config;
pub mod dataset;
pub mod eri_impl;
pub mod error;
pub mod hf_impl;
pub mod io;
pub mod mp2_impl;
pub mod tensor_impl;

pub use dataset::{load_system, Dataset, IntegralSource, MolecularSystem};
pub use eri_impl::{canonicalize, get_eri, EriIndex, EriRecord, EriResolver, EriTable};
pub use error::{EnergyError, Result};
pub use hf_impl::{hartree_fock_energy, HfEnergy};
pub use mp2_impl::{Mp2Energy, MP2};
pub use tensor_impl::{build_ov_tensor, OvTensor};
