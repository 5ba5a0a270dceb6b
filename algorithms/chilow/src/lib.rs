#![cfg_attr(docsrs, feature(doc_cfg))]

//! # chilow
//!
//! The ChiLow tweakable low-latency block cipher, a decryption-only
//! primitive published in two widths: a 32-bit data lane paired with a
//! 32-bit PRF/Tag lane ("32+tau"), and a plain 40-bit data lane ("40").
//! Both share the same nonlinear `chichi` layer, sparse linear diffusion,
//! and tweak/key interaction structure; they differ only in lane width
//! and in whether the Tag lane exists.
//!
//! ```rust
//! let out = chilow::decrypt32(
//!     0x0123_4567,
//!     0x0011_2233_4455_6677,
//!     0xFEDC_BA98_7654_3210,
//!     0x7766_5544_3322_1100,
//! );
//! assert_eq!(out, 0x0FBC_7E64_2E75_D127);
//! ```

mod bitops;
mod chi;
mod key;
mod linear;
mod masks;
mod round;

use key::Key128;
use round::{State, Variant, VARIANT_32, VARIANT_40};

/// Lowest valid round count accepted by the reduced-round entry points.
pub const MIN_ROUNDS: u8 = 1;
/// Highest valid round count; equals the full, unreduced cipher.
pub const MAX_ROUNDS: u8 = 8;

/// Prepares the cipher for use.
///
/// The linear-diffusion matrices are generated at compile time as `const`
/// values rather than populated by a runtime one-time-init routine, so
/// there is no mutable global state to set up. This function exists purely
/// so callers ported from an implementation that required an explicit
/// initialization step have somewhere to put that call; it does nothing
/// and may be called any number of times, including never, from any
/// number of threads.
pub fn init() {}

/// Clamps a caller-supplied round count into the `1..=8` range the round
/// function is defined for.
const fn clamp_rounds(rounds: u8) -> u8 {
    if rounds < MIN_ROUNDS {
        MIN_ROUNDS
    } else if rounds > MAX_ROUNDS {
        MAX_ROUNDS
    } else {
        rounds
    }
}

fn run(ciphertext: u64, tweak: u64, key_hi: u64, key_lo: u64, variant: &Variant, rounds: u8, apply_final_tweak_linear: bool) -> State {
    let rounds = clamp_rounds(rounds);
    let key = Key128::new(key_hi, key_lo);
    let mut state = State::whiten(ciphertext, tweak, key, variant);
    for round in 0..usize::from(rounds) - 1 {
        state.step(variant, round);
    }
    state.finish(variant, apply_final_tweak_linear);
    state
}

/// Packs the data and (optional) Tag lanes into the 64-bit return value
/// used by every 32+tau entry point: `(Tag << 32) | (P & mask32)`.
fn pack_32(state: &State) -> u64 {
    let tag = state.tag.unwrap_or(0);
    (tag << 32) | (state.p & 0xFFFF_FFFF)
}

/// Full, unreduced 32+tau decryption (8 rounds).
///
/// Returns the Tag lane packed into the high 32 bits and the data lane
/// packed into the low 32 bits of the result.
#[must_use]
pub fn decrypt32(ciphertext: u32, tweak: u64, key_hi: u64, key_lo: u64) -> u64 {
    decrypt32_reduced(ciphertext, tweak, key_hi, key_lo, MAX_ROUNDS)
}

/// Full, unreduced 40-bit decryption (8 rounds).
///
/// Returns the 40-bit plaintext in the low bits of the result; bits 40..63
/// of the return value are always zero.
#[must_use]
pub fn decrypt40(ciphertext: u64, tweak: u64, key_hi: u64, key_lo: u64) -> u64 {
    decrypt40_reduced(ciphertext, tweak, key_hi, key_lo, MAX_ROUNDS)
}

/// 32+tau decryption truncated to `rounds` rounds (`1..=8`), with the final
/// round's tweak linear layer applied.
#[must_use]
pub fn decrypt32_reduced(ciphertext: u32, tweak: u64, key_hi: u64, key_lo: u64, rounds: u8) -> u64 {
    let state = run(u64::from(ciphertext), tweak, key_hi, key_lo, &VARIANT_32, rounds, true);
    pack_32(&state)
}

/// 40-bit decryption truncated to `rounds` rounds (`1..=8`), with the final
/// round's tweak linear layer applied.
#[must_use]
pub fn decrypt40_reduced(ciphertext: u64, tweak: u64, key_hi: u64, key_lo: u64, rounds: u8) -> u64 {
    let state = run(ciphertext, tweak, key_hi, key_lo, &VARIANT_40, rounds, true);
    state.p & 0xFF_FFFF_FFFF
}

/// 32+tau decryption truncated to `rounds` rounds, with the final round's
/// tweak linear layer skipped (the raw tweak is XORed in instead).
///
/// Used by integral-cryptanalysis callers that need the final round's
/// nonlinear and interaction layers without its diffusion step.
#[must_use]
pub fn decrypt32_half_reduced(ciphertext: u32, tweak: u64, key_hi: u64, key_lo: u64, rounds: u8) -> u64 {
    let state = run(u64::from(ciphertext), tweak, key_hi, key_lo, &VARIANT_32, rounds, false);
    pack_32(&state)
}

/// 40-bit decryption truncated to `rounds` rounds, with the final round's
/// tweak linear layer skipped (the raw tweak is XORed in instead).
#[must_use]
pub fn decrypt40_half_reduced(ciphertext: u64, tweak: u64, key_hi: u64, key_lo: u64, rounds: u8) -> u64 {
    let state = run(ciphertext, tweak, key_hi, key_lo, &VARIANT_40, rounds, false);
    state.p & 0xFF_FFFF_FFFF
}

#[cfg(test)]
mod tests {
    use super::{
        decrypt32, decrypt32_half_reduced, decrypt32_reduced, decrypt40, decrypt40_half_reduced,
        decrypt40_reduced, MAX_ROUNDS,
    };

    const C32: u32 = 0x0123_4567;
    const T: u64 = 0x0011_2233_4455_6677;
    const K_HI: u64 = 0xFEDC_BA98_7654_3210;
    const K_LO: u64 = 0x7766_5544_3322_1100;
    const C40: u64 = 0x317C_83E4_A7;

    #[test]
    fn known_answer_32bit() {
        assert_eq!(decrypt32(C32, T, K_HI, K_LO), 0x0FBC_7E64_2E75_D127);
    }

    #[test]
    fn known_answer_40bit() {
        assert_eq!(decrypt40(C40, T, K_HI, K_LO), 0x0090_5457_06);
    }

    #[test]
    fn reduced_at_max_rounds_matches_full() {
        assert_eq!(
            decrypt32_reduced(C32, T, K_HI, K_LO, MAX_ROUNDS),
            decrypt32(C32, T, K_HI, K_LO)
        );
        assert_eq!(
            decrypt40_reduced(C40, T, K_HI, K_LO, MAX_ROUNDS),
            decrypt40(C40, T, K_HI, K_LO)
        );
    }

    #[test]
    fn forty_bit_output_never_sets_high_bits() {
        assert_eq!(decrypt40(C40, T, K_HI, K_LO) & !0xFF_FFFF_FFFF, 0);
        assert_eq!(
            decrypt40_half_reduced(C40, T, K_HI, K_LO, MAX_ROUNDS) & !0xFF_FFFF_FFFF,
            0
        );
    }

    #[test]
    fn half_reduced_differs_from_reduced_only_in_final_tweak_step() {
        let full = decrypt32_reduced(C32, T, K_HI, K_LO, MAX_ROUNDS);
        let half = decrypt32_half_reduced(C32, T, K_HI, K_LO, MAX_ROUNDS);
        // They iterate the same main rounds; only the final round's tweak
        // linear application differs, so the two outputs are generally
        // unequal but both still 64-bit packed Tag|P values.
        assert_ne!(full, half);
    }

    #[test]
    fn rounds_below_minimum_clamp_to_one_round() {
        let clamped = decrypt32_reduced(C32, T, K_HI, K_LO, 0);
        let one_round = decrypt32_reduced(C32, T, K_HI, K_LO, 1);
        assert_eq!(clamped, one_round);
    }
}
