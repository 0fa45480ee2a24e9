//! Interface of the dataset-access collaborator

/// A page of sparse ERIs returned by [`IntegralSource::read_sparse_eri`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EriChunk {
    /// Orbital index quadruplets, one per integral
    pub indices: Vec<[i32; 4]>,
    /// Integral values, index-aligned with `indices`
    pub values: Vec<f64>,
}

impl EriChunk {
    /// Number of integrals actually delivered
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Read access to the quantities the energy engine needs
///
/// Counts are returned signed so that a corrupt source can be told apart from
/// a valid empty one. Any error is fatal for the calculation.
pub trait IntegralSource {
    type Error: std::error::Error + Send + Sync + 'static;

    fn read_nuclear_repulsion(&self) -> Result<f64, Self::Error>;

    fn read_electron_up_count(&self) -> Result<i64, Self::Error>;

    fn read_mo_count(&self) -> Result<i64, Self::Error>;

    /// Orbital energies; `mo_num` is the expected length
    fn read_orbital_energies(&self, mo_num: usize) -> Result<Vec<f64>, Self::Error>;

    /// Row-major `mo_num x mo_num` core Hamiltonian
    fn read_core_hamiltonian(&self, mo_num: usize) -> Result<Vec<f64>, Self::Error>;

    fn read_eri_count(&self) -> Result<i64, Self::Error>;

    /// At most `max_count` integrals starting at record `offset`
    fn read_sparse_eri(&self, offset: usize, max_count: usize) -> Result<EriChunk, Self::Error>;
}
