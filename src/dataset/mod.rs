//! Access to the integral dataset
//!
//! The energy engine consumes a handful of named quantities from an external
//! dataset: nuclear repulsion energy, electron and orbital counts, orbital
//! energies, the core Hamiltonian and the sparse ERI list. [`IntegralSource`]
//! is the seam to that collaborator; [`Dataset`] is the YAML-backed source used
//! by the command-line program and the tests, and [`load_system`] performs all
//! reads, validates them and returns an owned [`MolecularSystem`].

mod loader;
mod source;
mod yaml;
#[cfg(test)]
mod tests;

pub use loader::{load_system, MolecularSystem, DEFAULT_ERI_CHUNK_SIZE};
pub use source::{EriChunk, IntegralSource};
pub use yaml::{Dataset, DatasetError};
