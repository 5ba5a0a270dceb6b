#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 28 {
        return;
    }

    let c32 = u32::from_le_bytes(data[0..4].try_into().unwrap());
    let c40 = u64::from_le_bytes(data[4..12].try_into().unwrap()) & 0xFF_FFFF_FFFF;
    let tweak = u64::from_le_bytes(data[12..20].try_into().unwrap());
    let key_hi = u64::from_le_bytes(data[20..28].try_into().unwrap());
    let key_lo = if data.len() >= 36 {
        u64::from_le_bytes(data[28..36].try_into().unwrap())
    } else {
        0
    };

    assert_eq!(
        chilow::decrypt32_reduced(c32, tweak, key_hi, key_lo, chilow::MAX_ROUNDS),
        chilow::decrypt32(c32, tweak, key_hi, key_lo),
        "decrypt32_reduced at MAX_ROUNDS diverged from decrypt32"
    );
    assert_eq!(
        chilow::decrypt40_reduced(c40, tweak, key_hi, key_lo, chilow::MAX_ROUNDS),
        chilow::decrypt40(c40, tweak, key_hi, key_lo),
        "decrypt40_reduced at MAX_ROUNDS diverged from decrypt40"
    );
    assert_eq!(chilow::decrypt40(c40, tweak, key_hi, key_lo) & !0xFF_FFFF_FFFF, 0);
});
