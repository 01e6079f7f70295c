/*++

Licensed under the Apache-2.0 license.

File Name:

    ccount.rs

Abstract:

    Cycle counter driver for Xtensa cores (ESP32, ESP32-S2, ESP32-S3).

    CCOUNT is a single 32-bit special register. One read is atomic; the
    counter wraps roughly every 17.9 s at 240 MHz.

--*/

use fasttime_hil::CycleCounter;

/// Xtensa `CCOUNT` special register.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ccount;

impl CycleCounter for Ccount {
    type Tick = u32;

    #[inline(always)]
    fn read() -> u32 {
        xtensa_lx::timer::get_cycle_count()
    }
}
