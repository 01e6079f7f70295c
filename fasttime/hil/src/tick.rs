/*++

Licensed under the Apache-2.0 license.

File Name:

    tick.rs

Abstract:

    Raw counter widths and the wrap-safe arithmetic defined on them.

--*/

use core::fmt::Debug;

mod sealed {
    pub trait Sealed {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// A raw cycle counter value.
///
/// Only meaningful relative to another value read from the same counter.
/// Implemented for the two hardware widths: `u32` (free-running counter that
/// wraps every few seconds) and `u64` (split counter read tear-free).
///
/// # Correctness
///
/// Both `precedes` and `cycles_until` assume the real distance between the
/// two readings is below `2^(BITS - 1)` cycles. Past that bound the result is
/// silently wrong; nothing detects it.
pub trait Tick: Copy + Eq + Ord + Debug + sealed::Sealed {
    /// Counter width in bits.
    const BITS: u32;

    /// Returns true if `self` was read strictly before `later`.
    fn precedes(self, later: Self) -> bool;

    /// Cycles elapsed from `self` to `later`, i.e. `(later - self) mod 2^BITS`.
    fn cycles_until(self, later: Self) -> u64;

    /// The value the counter holds `cycles` after `self`, modulo `2^BITS`.
    fn wrapping_advance(self, cycles: u64) -> Self;
}

impl Tick for u32 {
    const BITS: u32 = u32::BITS;

    #[inline(always)]
    fn precedes(self, later: Self) -> bool {
        (self.wrapping_sub(later) as i32) < 0
    }

    #[inline(always)]
    fn cycles_until(self, later: Self) -> u64 {
        u64::from(later.wrapping_sub(self))
    }

    #[inline(always)]
    fn wrapping_advance(self, cycles: u64) -> Self {
        // Truncation is the modulo.
        self.wrapping_add(cycles as u32)
    }
}

// A 64-bit cycle counter takes centuries to wrap at MHz rates, so ordering is
// a plain comparison. This is an accepted approximation, not wrap-safety.
impl Tick for u64 {
    const BITS: u32 = u64::BITS;

    #[inline(always)]
    fn precedes(self, later: Self) -> bool {
        self < later
    }

    #[inline(always)]
    fn cycles_until(self, later: Self) -> u64 {
        later.wrapping_sub(self)
    }

    #[inline(always)]
    fn wrapping_advance(self, cycles: u64) -> Self {
        self.wrapping_add(cycles)
    }
}
