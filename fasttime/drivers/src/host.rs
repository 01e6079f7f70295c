/*++

Licensed under the Apache-2.0 license.

File Name:

    host.rs

Abstract:

    Development counter for hosted targets (x86_64, aarch64 with an OS).

    There is no architectural cycle counter to read portably here, so ticks
    are nanoseconds of the OS monotonic clock since the first read. This
    lets the workspace build and run its tests off-target.

--*/

extern crate std;

use fasttime_hil::CycleCounter;
use std::sync::OnceLock;
use std::time::Instant;

/// Tick rate of [`HostCounter`].
pub const HOST_TICK_HZ: u64 = 1_000_000_000;

static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Monotonic 64-bit counter backed by [`Instant`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HostCounter;

impl CycleCounter for HostCounter {
    type Tick = u64;

    #[inline]
    fn read() -> u64 {
        let epoch = EPOCH.get_or_init(Instant::now);
        // 584 years of nanoseconds fit in a u64.
        epoch.elapsed().as_nanos() as u64
    }
}
