use bolero::check;

#[test]
fn fuzz_reduced_at_eight_rounds_matches_full_32() {
    check!()
        .with_type::<(u32, u64, u64, u64)>()
        .for_each(|&(c, t, k_hi, k_lo)| {
            assert_eq!(
                chilow::decrypt32_reduced(c, t, k_hi, k_lo, chilow::MAX_ROUNDS),
                chilow::decrypt32(c, t, k_hi, k_lo)
            );
        });
}

#[test]
fn fuzz_reduced_at_eight_rounds_matches_full_40() {
    check!()
        .with_type::<(u64, u64, u64, u64)>()
        .for_each(|&(c, t, k_hi, k_lo)| {
            let c = c & 0xFF_FFFF_FFFF;
            assert_eq!(
                chilow::decrypt40_reduced(c, t, k_hi, k_lo, chilow::MAX_ROUNDS),
                chilow::decrypt40(c, t, k_hi, k_lo)
            );
        });
}

#[test]
fn fuzz_round_count_is_always_clamped_into_range() {
    check!()
        .with_type::<(u32, u64, u64, u64, u8)>()
        .for_each(|&(c, t, k_hi, k_lo, rounds)| {
            let out = chilow::decrypt32_reduced(c, t, k_hi, k_lo, rounds);
            let clamped = rounds.clamp(chilow::MIN_ROUNDS, chilow::MAX_ROUNDS);
            assert_eq!(out, chilow::decrypt32_reduced(c, t, k_hi, k_lo, clamped));
        });
}
