//! ChiLow CLI
//!
//! Decrypts with the ChiLow tweakable block cipher from the command line.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{decrypt32, decrypt40, Decrypt32Args, Decrypt40Args};

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "chilow")]
#[command(about = "ChiLow tweakable low-latency block cipher", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Decrypt with the 32-bit data + 32-bit tag variant
    Decrypt32(Decrypt32Args),
    /// Decrypt with the 40-bit variant
    Decrypt40(Decrypt40Args),
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Decrypt32(args)) => decrypt32(&args)?,
        Some(Commands::Decrypt40(args)) => decrypt40(&args)?,
        None => {
            let result = chilow::decrypt32(
                0x0123_4567,
                0x0011_2233_4455_6677,
                0xFEDC_BA98_7654_3210,
                0x7766_5544_3322_1100,
            );
            println!("ChiLow-(32+tau) published test vector:");
            println!("  ciphertext: 0x01234567");
            println!("  tweak:      0x0011223344556677");
            println!("  key:        0xFEDCBA98765432107766554433221100");
            println!("  result:     0x{result:016X}");
            println!();
            println!("Run `chilow --help` for the decrypt32/decrypt40 subcommands.");
        }
    }

    Ok(())
}
