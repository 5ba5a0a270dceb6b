//! Decrypt Commands
//!
//! Invoke the ChiLow core's reduced-round entry points with hex-encoded
//! arguments, clamping the round count exactly as the core does.

use anyhow::Result;
use clap::Args;

fn parse_hex_u64(s: &str) -> Result<u64, String> {
    let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
    u64::from_str_radix(digits, 16).map_err(|e| format!("invalid hex value {s:?}: {e}"))
}

fn parse_hex_u32(s: &str) -> Result<u32, String> {
    let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
    u32::from_str_radix(digits, 16).map_err(|e| format!("invalid hex value {s:?}: {e}"))
}

#[derive(Args)]
pub struct Decrypt32Args {
    /// 32-bit ciphertext, hex (e.g. 0x01234567)
    #[arg(long, value_parser = parse_hex_u32)]
    ciphertext: u32,
    /// 64-bit tweak, hex
    #[arg(long, value_parser = parse_hex_u64)]
    tweak: u64,
    /// High 64 bits of the 128-bit key, hex
    #[arg(long = "key-hi", value_parser = parse_hex_u64)]
    key_hi: u64,
    /// Low 64 bits of the 128-bit key, hex
    #[arg(long = "key-lo", value_parser = parse_hex_u64)]
    key_lo: u64,
    /// Round count, 1..=8 (default: full 8-round cipher)
    #[arg(long, default_value_t = chilow::MAX_ROUNDS)]
    rounds: u8,
    /// Skip the final round's linear layer on the tweak
    #[arg(long = "half-reduced")]
    half_reduced: bool,
}

#[derive(Args)]
pub struct Decrypt40Args {
    /// 40-bit ciphertext, hex (e.g. 0x317C83E4A7)
    #[arg(long, value_parser = parse_hex_u64)]
    ciphertext: u64,
    /// 64-bit tweak, hex
    #[arg(long, value_parser = parse_hex_u64)]
    tweak: u64,
    /// High 64 bits of the 128-bit key, hex
    #[arg(long = "key-hi", value_parser = parse_hex_u64)]
    key_hi: u64,
    /// Low 64 bits of the 128-bit key, hex
    #[arg(long = "key-lo", value_parser = parse_hex_u64)]
    key_lo: u64,
    /// Round count, 1..=8 (default: full 8-round cipher)
    #[arg(long, default_value_t = chilow::MAX_ROUNDS)]
    rounds: u8,
    /// Skip the final round's linear layer on the tweak
    #[arg(long = "half-reduced")]
    half_reduced: bool,
}

/// Runs `decrypt32`/`decrypt32_reduced`/`decrypt32_half_reduced` depending
/// on the supplied flags and prints the packed `Tag | P` result.
pub fn decrypt32(args: &Decrypt32Args) -> Result<()> {
    if args.rounds < chilow::MIN_ROUNDS || args.rounds > chilow::MAX_ROUNDS {
        anyhow::bail!(
            "--rounds must be in {}..={}, got {}",
            chilow::MIN_ROUNDS,
            chilow::MAX_ROUNDS,
            args.rounds
        );
    }

    let result = if args.half_reduced {
        chilow::decrypt32_half_reduced(args.ciphertext, args.tweak, args.key_hi, args.key_lo, args.rounds)
    } else {
        chilow::decrypt32_reduced(args.ciphertext, args.tweak, args.key_hi, args.key_lo, args.rounds)
    };

    let tag = result >> 32;
    let plaintext = result & 0xFFFF_FFFF;
    println!("result: 0x{result:016X}");
    println!("  tag:       0x{tag:08X}");
    println!("  plaintext: 0x{plaintext:08X}");
    Ok(())
}

/// Runs `decrypt40`/`decrypt40_reduced`/`decrypt40_half_reduced` and prints
/// the 40-bit plaintext.
pub fn decrypt40(args: &Decrypt40Args) -> Result<()> {
    if args.rounds < chilow::MIN_ROUNDS || args.rounds > chilow::MAX_ROUNDS {
        anyhow::bail!(
            "--rounds must be in {}..={}, got {}",
            chilow::MIN_ROUNDS,
            chilow::MAX_ROUNDS,
            args.rounds
        );
    }
    let result = if args.half_reduced {
        chilow::decrypt40_half_reduced(args.ciphertext, args.tweak, args.key_hi, args.key_lo, args.rounds)
    } else {
        chilow::decrypt40_reduced(args.ciphertext, args.tweak, args.key_hi, args.key_lo, args.rounds)
    };

    println!("plaintext: 0x{result:010X}");
    Ok(())
}
