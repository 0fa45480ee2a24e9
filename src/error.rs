//! Error taxonomy for the energy engine
//!
//! Every variant is fatal for the current run: either the full set of
//! energies is produced or a single identified error is returned.

use thiserror::Error;

/// Errors raised while loading integral data or assembling energies
#[derive(Debug, Error)]
pub enum EnergyError {
    /// Inconsistent sizes or counts (e.g. `n_occ > mo_num`, negative counts,
    /// orbital indices outside `[0, mo_num)`)
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An MP2 energy denominator is zero or within the configured threshold
    ///
    /// `i` and `j` are occupied orbitals. `a` and `b` are virtual-local
    /// offsets counted from the first virtual orbital; `orbital_a` and
    /// `orbital_b` are the same orbitals numbered from zero over all MOs.
    #[error(
        "degenerate MP2 denominator {denominator:e} for term (i={i}, j={j}, \
         a={a} (orbital {orbital_a}), b={b} (orbital {orbital_b})); \
         |D| must exceed {threshold:e}"
    )]
    DegenerateDenominator {
        i: usize,
        j: usize,
        a: usize,
        b: usize,
        orbital_a: usize,
        orbital_b: usize,
        denominator: f64,
        threshold: f64,
    },

    /// The dataset-access collaborator failed to deliver a quantity
    #[error("failed to read '{quantity}' from the integral source")]
    UpstreamReadFailure {
        quantity: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl EnergyError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        EnergyError::InvalidConfiguration(msg.into())
    }

    pub(crate) fn upstream<E>(quantity: &'static str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        EnergyError::UpstreamReadFailure {
            quantity,
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, EnergyError>;
