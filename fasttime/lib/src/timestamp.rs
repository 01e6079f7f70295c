// Licensed under the Apache-2.0 license

//! Timestamps and wrap-safe cycle arithmetic.

use fasttime_drivers::{read_counter, CounterTick};
use fasttime_hil::Tick;

/// One raw cycle counter reading.
///
/// The width `T` defaults to the counter compiled in for this target. Other
/// widths are only reachable through [`Timestamp::from_ticks`], which is how
/// captures are simulated off-target.
///
/// # Correctness
///
/// A timestamp is meaningful only against another one from the same core's
/// counter, taken less than half the counter range apart (2^31 cycles on a
/// 32-bit counter, about 8.9 s at 240 MHz).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp<T: Tick = CounterTick> {
    ticks: T,
}

impl Timestamp {
    /// Captures the cycle counter.
    #[inline(always)]
    pub fn now() -> Self {
        Self {
            ticks: read_counter(),
        }
    }

    /// Cycles elapsed since `self`.
    #[inline(always)]
    pub fn elapsed_cycles(self) -> u64 {
        cycles_between(self, Self::now())
    }
}

impl<T: Tick> Timestamp<T> {
    #[inline(always)]
    pub const fn from_ticks(ticks: T) -> Self {
        Self { ticks }
    }

    #[inline(always)]
    pub fn ticks(self) -> T {
        self.ticks
    }

    /// The timestamp `cycles` after `self`, wrapping at the counter width.
    #[inline(always)]
    pub fn wrapping_add_cycles(self, cycles: u64) -> Self {
        Self {
            ticks: self.ticks.wrapping_advance(cycles),
        }
    }

    /// See [`before`].
    #[inline(always)]
    pub fn is_before(self, other: Self) -> bool {
        before(self, other)
    }

    /// See [`cycles_between`].
    #[inline(always)]
    pub fn cycles_until(self, later: Self) -> u64 {
        cycles_between(self, later)
    }
}

/// Returns true if `a` was captured before `b`.
///
/// On a 32-bit counter this stays correct across a wrap as long as the two
/// captures are less than 2^31 cycles apart. On a 64-bit counter it is a
/// plain comparison; that counter does not wrap within any realistic uptime.
#[inline(always)]
pub fn before<T: Tick>(a: Timestamp<T>, b: Timestamp<T>) -> bool {
    a.ticks.precedes(b.ticks)
}

/// Cycles elapsed from `a` to `b`, modulo the counter width.
///
/// Correct across one wrap under the same half-range bound as [`before`].
#[inline(always)]
pub fn cycles_between<T: Tick>(a: Timestamp<T>, b: Timestamp<T>) -> u64 {
    a.ticks.cycles_until(b.ticks)
}
