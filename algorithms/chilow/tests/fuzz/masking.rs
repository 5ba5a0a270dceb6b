use bolero::check;

#[test]
fn fuzz_decrypt40_output_stays_within_forty_bits() {
    check!()
        .with_type::<(u64, u64, u64, u64)>()
        .for_each(|&(c, t, k_hi, k_lo)| {
            let out = chilow::decrypt40(c, t, k_hi, k_lo);
            assert_eq!(out & !0xFF_FFFF_FFFF, 0, "decrypt40 leaked bits above 40");
        });
}

#[test]
fn fuzz_decrypt32_is_deterministic() {
    check!()
        .with_type::<(u32, u64, u64, u64)>()
        .for_each(|&(c, t, k_hi, k_lo)| {
            let a = chilow::decrypt32(c, t, k_hi, k_lo);
            let b = chilow::decrypt32(c, t, k_hi, k_lo);
            assert_eq!(a, b, "decrypt32 is not deterministic");
        });
}
