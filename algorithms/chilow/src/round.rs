//! The round function shared by both variants: nonlinear layer, linear
//! layer, round-constant injection, and the cross-lane interaction layer.
//!
//! The 32+tau and 40-bit variants differ only in data-lane width, the
//! `chichi` split point `m`, the data linear matrix, and whether a second
//! (Tag/PRF) lane exists — so one [`Variant`] description plus one
//! [`State`] drive both, instead of four near-identical routines.

use crate::chi::chichi;
use crate::key::Key128;
use crate::linear::{self, KEY128, TWEAK64};
use crate::masks::{MASK15, MASK17, MASK19, MASK21, MASK31, MASK32, MASK33, MASK40};

/// Round constants for the 32+tau variant, indexed by round number.
pub(crate) const ROUND_CONSTANTS: [u64; 8] = [
    0x0000_0010_0000_0000,
    0x0000_0021_0000_0000,
    0x0000_0042_0000_0000,
    0x0000_0083_0000_0000,
    0x0000_0104_0000_0000,
    0x0000_0205_0000_0000,
    0x0000_0406_0000_0000,
    0x0000_0807_0000_0000,
];

/// Round constants for the 40-bit variant: the same sequence with the top
/// bit set in every entry. The source leaves this asymmetry undocumented;
/// it is preserved verbatim rather than unified with [`ROUND_CONSTANTS`].
pub(crate) const ROUND_CONSTANTS_40: [u64; 8] = [
    0x8000_0010_0000_0000,
    0x8000_0021_0000_0000,
    0x8000_0042_0000_0000,
    0x8000_0083_0000_0000,
    0x8000_0104_0000_0000,
    0x8000_0205_0000_0000,
    0x8000_0406_0000_0000,
    0x8000_0807_0000_0000,
];

/// The per-variant shape of the round function: everything that
/// distinguishes the 32+tau lanes from the 40-bit lanes.
pub(crate) struct Variant {
    pub(crate) data_mask: u64,
    pub(crate) chichi_mask_lo: u64,
    pub(crate) chichi_mask_hi: u64,
    pub(crate) chichi_m: u32,
    pub(crate) data_matrix: &'static [u64],
    pub(crate) tag_matrix: Option<&'static [u64]>,
    pub(crate) round_constants: &'static [u64; 8],
}

/// The 32+tau variant: data and Tag lanes each 32 bits, split at `m = 16`.
pub(crate) const VARIANT_32: Variant = Variant {
    data_mask: MASK32,
    chichi_mask_lo: MASK15,
    chichi_mask_hi: MASK17,
    chichi_m: 16,
    data_matrix: &linear::STATE32,
    tag_matrix: Some(&linear::PRF32),
    round_constants: &ROUND_CONSTANTS,
};

/// The 40-bit variant: a single 40-bit data lane, split at `m = 20`.
pub(crate) const VARIANT_40: Variant = Variant {
    data_mask: MASK40,
    chichi_mask_lo: MASK19,
    chichi_mask_hi: MASK21,
    chichi_m: 20,
    data_matrix: &linear::STATE40,
    tag_matrix: None,
    round_constants: &ROUND_CONSTANTS_40,
};

/// The four working lanes threaded through the round function: data (`p`),
/// the optional Tag/PRF lane, the tweak (`t`), and the key schedule (`k`).
#[derive(Debug, Clone, Copy)]
pub(crate) struct State {
    pub(crate) p: u64,
    pub(crate) tag: Option<u64>,
    pub(crate) t: u64,
    pub(crate) k: Key128,
}

impl State {
    /// Initial whitening: XORs the ciphertext and tweak with the key before
    /// the first round.
    pub(crate) fn whiten(ciphertext: u64, tweak: u64, key: Key128, variant: &Variant) -> Self {
        let p = ciphertext ^ (key.hi & variant.data_mask);
        let tag = variant
            .tag_matrix
            .is_some()
            .then(|| ciphertext ^ ((key.hi >> 32) & MASK32));
        let t = tweak ^ key.lo;
        Self { p, tag, t, k: key }
    }

    /// One full round body: round-constant injection, nonlinear layer,
    /// linear layer, interaction layer. Used for every round but the last.
    pub(crate) fn step(&mut self, variant: &Variant, round: usize) {
        self.k.hi ^= variant.round_constants[round];

        self.p = chichi(
            self.p,
            variant.chichi_mask_lo,
            variant.chichi_mask_hi,
            variant.chichi_m,
        );
        if let Some(tag) = self.tag {
            self.tag = Some(chichi(tag, MASK15, MASK17, 16));
        }
        self.t = chichi(self.t, MASK31, MASK33, 32);
        self.k = self.k.chichi128();

        self.p = linear::apply(self.p, variant.data_matrix);
        if let (Some(tag), Some(matrix)) = (self.tag, variant.tag_matrix) {
            self.tag = Some(linear::apply(tag, matrix));
        }
        self.t = linear::apply(self.t, &TWEAK64);
        self.k = linear::apply128(self.k, &KEY128);

        self.p ^= self.t & variant.data_mask;
        if let Some(tag) = self.tag {
            self.tag = Some(tag ^ ((self.t >> 32) & MASK32));
        }
        self.t ^= self.k.lo;
    }

    /// The distinguished final round: nonlinear layer on the data lane(s),
    /// an optional linear layer on the tweak, then the interaction XOR.
    /// No round constant and no key update.
    ///
    /// `apply_tweak_linear = false` yields the half-reduced variant used by
    /// integral cryptanalysis, which XORs the raw tweak in instead.
    pub(crate) fn finish(&mut self, variant: &Variant, apply_tweak_linear: bool) {
        self.p = chichi(
            self.p,
            variant.chichi_mask_lo,
            variant.chichi_mask_hi,
            variant.chichi_m,
        );
        if let Some(tag) = self.tag {
            self.tag = Some(chichi(tag, MASK15, MASK17, 16));
        }
        if apply_tweak_linear {
            self.t = linear::apply(self.t, &TWEAK64);
        }

        self.p = (self.p ^ (self.t & variant.data_mask)) & variant.data_mask;
        if let Some(tag) = self.tag {
            self.tag = Some(tag ^ ((self.t >> 32) & MASK32));
        }
    }
}
