/*++

Licensed under the Apache-2.0 license.

File Name:

    counter.rs

Abstract:

    Hardware Interface Layer traits for free-running cycle counters.

--*/

use crate::tick::Tick;

/// Hardware Interface Layer trait for CPU cycle counters.
///
/// A cycle counter is core-local, free-running hardware state. Reading it has
/// no side effects and never blocks. Exactly one implementation is compiled in
/// per target; there is no runtime dispatch between them.
pub trait CycleCounter {
    /// Raw value produced by one read.
    type Tick: Tick;

    /// Counter width in bits.
    const WIDTH: u32 = <Self::Tick as Tick>::BITS;

    /// Reads the current cycle count.
    ///
    /// # Returns
    ///
    /// The counter value at some instant strictly inside the call.
    fn read() -> Self::Tick;
}

/// A 64-bit counter exposed as two separately readable 32-bit halves.
///
/// The halves are not latched together: a carry out of the low half can land
/// between two reads. Use [`read_tear_free`] to assemble a consistent value.
pub trait SplitCounter {
    /// Reads the upper 32 bits.
    fn read_high(&self) -> u32;

    /// Reads the lower 32 bits.
    fn read_low(&self) -> u32;
}

/// Reads a [`SplitCounter`] without tearing.
///
/// Reads high, low, high and retries the whole triple whenever the two high
/// reads disagree, which means the low half carried mid-read. The retry loop
/// has no cap: a second carry would need 2^32 cycles to elapse within the
/// three reads.
///
/// Safe to call with interrupts enabled on the same core. Not meant to race a
/// reader on another core against the same register.
#[inline(always)]
pub fn read_tear_free<S: SplitCounter + ?Sized>(counter: &S) -> u64 {
    loop {
        let hi1 = counter.read_high();
        let lo = counter.read_low();
        let hi2 = counter.read_high();
        if hi1 == hi2 {
            return (u64::from(hi2) << 32) | u64::from(lo);
        }
    }
}
