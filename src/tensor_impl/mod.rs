//! Dense occupied-virtual integral block for the MP2 energy loop
//!
//! The sparse ERI table is folded once into a dense 4-index tensor
//! G(i, j, a, b) with i, j occupied and a, b virtual (virtual-local indices,
//! a = k - n_occ). MP2 then reads every element in O(1) instead of scanning
//! the sparse table for each of the n_occ² n_virt² terms.

mod ov_tensor;

pub use ov_tensor::{build_ov_tensor, OvTensor};
