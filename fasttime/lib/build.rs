// Licensed under the Apache-2.0 license

//! Build script for fasttime
//! Resolves the CPU frequency used by the default converters.
//!
//! Lookup order:
//! - `FASTTIME_FREQ_HZ`
//! - `F_CPU` (Arduino-style, an `L` / `UL` suffix is accepted)
//! - 240 MHz on `xtensa` / `riscv32`
//! - 1 GHz elsewhere, the nanosecond tick rate of the host counter

use std::env;
use std::fs;
use std::path::PathBuf;

const FALLBACK_FREQ_HZ: u64 = 240_000_000;
// Must match HOST_TICK_HZ in fasttime-drivers.
const HOST_FALLBACK_FREQ_HZ: u64 = 1_000_000_000;
const MIN_FREQ_HZ: u64 = 1_000_000;

fn parse_freq(name: &str, raw: &str) -> u64 {
    let trimmed = raw
        .trim()
        .trim_end_matches(|c: char| c == 'L' || c == 'l' || c == 'U' || c == 'u')
        .replace('_', "");
    let hz: u64 = trimmed
        .parse()
        .unwrap_or_else(|_| panic!("{name}={raw:?} is not an integer frequency in Hz"));
    if hz < MIN_FREQ_HZ {
        panic!("{name}={hz} is below {MIN_FREQ_HZ} Hz; cycle->us conversion needs at least 1 MHz");
    }
    hz
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=FASTTIME_FREQ_HZ");
    println!("cargo:rerun-if-env-changed=F_CPU");

    let freq_hz = ["FASTTIME_FREQ_HZ", "F_CPU"]
        .iter()
        .find_map(|name| env::var(name).ok().map(|raw| parse_freq(name, &raw)))
        .unwrap_or_else(|| {
            let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
            match arch.as_str() {
                "xtensa" | "riscv32" => FALLBACK_FREQ_HZ,
                _ => HOST_FALLBACK_FREQ_HZ,
            }
        });

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(
        out_dir.join("default_freq.rs"),
        format!("pub const DEFAULT_FREQ_HZ: u64 = {freq_hz};\n"),
    )
    .unwrap();
}
