//! Sparse binary diffusion matrices and their GF(2) matrix-vector product.
//!
//! Row `i` of a width-`w` matrix has up to three set bits at columns
//! `(alpha_k * i + beta_k) mod w`. Collisions between the three columns are
//! preserved exactly as the construction produces them (see `DESIGN.md`) —
//! a row can legitimately have weight 1 or 2 instead of 3.

use crate::bitops::parity;
use crate::key::Key128;

/// One `(alpha, beta)` parameter triple for the row-construction formula.
struct Params {
    alpha: [u32; 3],
    beta: [u32; 3],
}

const STATE_PARAMS: Params = Params {
    alpha: [11, 11, 11],
    beta: [5, 9, 12],
};
const PRF_PARAMS: Params = Params {
    alpha: [11, 11, 11],
    beta: [1, 26, 30],
};
const STATE40_PARAMS: Params = Params {
    alpha: [17, 17, 17],
    beta: [1, 9, 30],
};
const TWEAK_PARAMS: Params = Params {
    alpha: [3, 3, 3],
    beta: [1, 26, 50],
};
const KEY_PARAMS: Params = Params {
    alpha: [17, 17, 17],
    beta: [7, 11, 14],
};

/// Generates an `N`-row, width-`N` matrix (`N` in `{32, 40, 64}`) so a
/// single `const fn` covers all three non-128-bit lanes instead of three
/// copies of the same loop.
const fn generate_matrix<const N: usize>(params: &Params) -> [u64; N] {
    let width = N as u32;
    let mut rows = [0u64; N];
    let mut i = 0;
    while i < N {
        rows[i] = row_bits(params, i as u32, width);
        i += 1;
    }
    rows
}

const fn row_bits(params: &Params, i: u32, width: u32) -> u64 {
    let mut row = 0u64;
    let mut k = 0;
    while k < 3 {
        let col = (params.alpha[k] * i + params.beta[k]) % width;
        row |= 1u64 << col;
        k += 1;
    }
    row
}

/// The 128-bit matrix is stored as 128 `(lo, hi)` pairs since no single
/// shift can place a bit at column 127 in a `u64`.
const fn generate_matrix128(params: &Params) -> [(u64, u64); 128] {
    let mut rows = [(0u64, 0u64); 128];
    let mut i = 0;
    while i < 128 {
        let mut lo = 0u64;
        let mut hi = 0u64;
        let mut k = 0;
        while k < 3 {
            let col = (params.alpha[k] * i as u32 + params.beta[k]) % 128;
            if col < 64 {
                lo |= 1u64 << col;
            } else {
                hi |= 1u64 << (col - 64);
            }
            k += 1;
        }
        rows[i] = (lo, hi);
        i += 1;
    }
    rows
}

pub(crate) const STATE32: [u64; 32] = generate_matrix(&STATE_PARAMS);
pub(crate) const PRF32: [u64; 32] = generate_matrix(&PRF_PARAMS);
pub(crate) const STATE40: [u64; 40] = generate_matrix(&STATE40_PARAMS);
pub(crate) const TWEAK64: [u64; 64] = generate_matrix(&TWEAK_PARAMS);
pub(crate) const KEY128: [(u64, u64); 128] = generate_matrix128(&KEY_PARAMS);

/// Applies a width-`N` matrix to `x`: output bit `i` is the parity of
/// `rows[i] AND x`.
pub(crate) fn apply(x: u64, rows: &[u64]) -> u64 {
    let mut y = 0u64;
    for (i, row) in rows.iter().enumerate() {
        y |= parity(row & x) << i;
    }
    y
}

/// Applies the 128-bit key matrix to a [`Key128`] lane.
pub(crate) fn apply128(x: Key128, rows: &[(u64, u64); 128]) -> Key128 {
    let mut lo = 0u64;
    let mut hi = 0u64;
    for (i, &(row_lo, row_hi)) in rows.iter().enumerate() {
        let bit = parity(row_lo & x.lo) ^ parity(row_hi & x.hi);
        if i < 64 {
            lo |= bit << i;
        } else {
            hi |= bit << (i - 64);
        }
    }
    Key128::new(hi, lo)
}
