//! Sparse two-electron repulsion integral (ERI) storage and retrieval
//!
//! Integrals are handed over as a sparse list of symmetry-distinct records.
//! A record `[p, q, r, s]` holds the physicist-notation integral ⟨pq|rs⟩,
//! the convention of the integral source. Lookups treat the 8 orderings
//!
//! ⟨pq|rs⟩ ⟨qp|rs⟩ ⟨pq|sr⟩ ⟨qp|sr⟩ ⟨rs|pq⟩ ⟨sr|pq⟩ ⟨rs|qp⟩ ⟨sr|qp⟩
//!
//! as one class, so any of them resolves to the stored value. Note that this
//! set swaps indices within a pair, which merges ⟨01|01⟩ with ⟨01|10⟩.
//! Quadruplets that are not stored under any ordering are implicit zeros: the
//! storage format drops integrals below a negligible magnitude.
//!
//! Two resolvers are provided:
//!
//! - [`EriTable`] scans the records linearly (O(n_integrals) per query)
//! - [`EriIndex`] hashes the canonical form of every record (O(1) per query)
//!
//! Both implement [`EriResolver`] and return identical values.

mod index;
mod symmetry;
mod table;

pub use index::EriIndex;
pub use symmetry::{canonicalize, permutations};
pub use table::{get_eri, EriRecord, EriTable};

/// Symmetry-aware lookup of a single two-electron integral
pub trait EriResolver {
    /// Value of the integral (pq|rs), or 0.0 when it is not stored
    fn get_eri(&self, p: usize, q: usize, r: usize, s: usize) -> f64;
}
