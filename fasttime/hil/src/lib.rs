/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    Hardware Interface Layer (HIL) for CPU cycle counters.

--*/

#![no_std]

pub mod counter;
pub mod tick;

pub use counter::{read_tear_free, CycleCounter, SplitCounter};
pub use tick::Tick;
