// Licensed under the Apache-2.0 license.

//! Cycle counter drivers.
//!
//! Exactly one reader is compiled in, chosen by the target architecture:
//!
//! | Target                   | Reader          | Tick  |
//! |--------------------------|-----------------|-------|
//! | `xtensa`                 | `Ccount`        | `u32` |
//! | `riscv32`                | `Mcycle`        | `u64` |
//! | other, with an OS        | `HostCounter`   | `u64` |
//!
//! Any other bare-metal target fails to build.

#![no_std]

use fasttime_hil::CycleCounter;

#[cfg(target_arch = "xtensa")]
pub mod ccount;
#[cfg(target_arch = "xtensa")]
pub use ccount::Ccount;
/// The cycle counter compiled in for this target.
#[cfg(target_arch = "xtensa")]
pub type Counter = Ccount;

#[cfg(target_arch = "riscv32")]
pub mod mcycle;
#[cfg(target_arch = "riscv32")]
pub use mcycle::Mcycle;
/// The cycle counter compiled in for this target.
#[cfg(target_arch = "riscv32")]
pub type Counter = Mcycle;

#[cfg(all(
    not(any(target_arch = "xtensa", target_arch = "riscv32")),
    not(target_os = "none")
))]
pub mod host;
#[cfg(all(
    not(any(target_arch = "xtensa", target_arch = "riscv32")),
    not(target_os = "none")
))]
pub use host::{HostCounter, HOST_TICK_HZ};
/// The cycle counter compiled in for this target.
#[cfg(all(
    not(any(target_arch = "xtensa", target_arch = "riscv32")),
    not(target_os = "none")
))]
pub type Counter = HostCounter;

#[cfg(all(
    not(any(target_arch = "xtensa", target_arch = "riscv32")),
    target_os = "none"
))]
compile_error!("Unsupported bare-metal target: no cycle counter driver for this architecture.");

/// Raw tick type of [`Counter`].
pub type CounterTick = <Counter as CycleCounter>::Tick;

/// Reads the compiled-in cycle counter.
#[inline(always)]
pub fn read_counter() -> CounterTick {
    Counter::read()
}
