//! Index permutations and canonical ordering of ERI quadruplets

/// The 8 index quadruplets equivalent to (p,q,r,s) under permutational symmetry
pub fn permutations(p: usize, q: usize, r: usize, s: usize) -> [[usize; 4]; 8] {
    [
        [p, q, r, s],
        [q, p, r, s],
        [p, q, s, r],
        [q, p, s, r],
        [r, s, p, q],
        [s, r, p, q],
        [r, s, q, p],
        [s, r, q, p],
    ]
}

/// Map a quadruplet to the unique representative of its symmetry class
///
/// Each pair is ordered first (p <= q, r <= s), then the two pairs are ordered
/// against each other so that (p,q) <= (r,s) lexicographically. The result is a
/// fixed point and is shared by all 8 permutations returned by [`permutations`].
pub fn canonicalize(p: usize, q: usize, r: usize, s: usize) -> [usize; 4] {
    let (mut p, mut q, mut r, mut s) = (p, q, r, s);
    if q < p {
        std::mem::swap(&mut p, &mut q);
    }
    if s < r {
        std::mem::swap(&mut r, &mut s);
    }
    if r < p || (r == p && s < q) {
        std::mem::swap(&mut p, &mut r);
        std::mem::swap(&mut q, &mut s);
    }
    [p, q, r, s]
}
