/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    Low-overhead cycle timestamps with wrap-safe arithmetic and
    cycle->time conversion for microcontrollers.

--*/

//! Cycle-counter timing.
//!
//! Capture with [`Timestamp::now`], measure with [`cycles_between`], order
//! with [`before`], and convert with either [`DivisionConverter`] (simple,
//! one division per call) or [`FixedPointConverter`] (multiply and shift,
//! for hot paths).
//!
//! | Target  | Counter          | Width | Wraps after (240 MHz) |
//! |---------|------------------|-------|-----------------------|
//! | Xtensa  | `CCOUNT`         | 32    | ~17.9 s               |
//! | RV32    | `mcycle(h)`      | 64    | never in practice     |
//!
//! All conversions assume a fixed CPU frequency (see [`config`]).

#![no_std]

pub mod config;
pub mod convert;
pub mod error;
pub mod fixed_point;
pub mod timestamp;

pub use config::{CpuFrequency, DEFAULT_FREQ_HZ};
pub use convert::{cycles_to_ms, cycles_to_us, elapsed_ms, elapsed_us, DivisionConverter};
pub use error::{FastTimeError, FastTimeResult};
pub use fasttime_drivers::{Counter, CounterTick};
#[cfg(all(
    not(any(target_arch = "xtensa", target_arch = "riscv32")),
    not(target_os = "none")
))]
pub use fasttime_drivers::HOST_TICK_HZ;
pub use fasttime_hil::{CycleCounter, Tick};
pub use fixed_point::{FixedPointConverter, DEFAULT_PRECISION_BITS};
pub use timestamp::{before, cycles_between, Timestamp};
