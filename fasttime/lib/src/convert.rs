// Licensed under the Apache-2.0 license

//! Division-based cycle->time conversion.
//!
//! Each conversion is one 64-bit integer division. On a microcontroller that
//! costs dozens of cycles, so keep these out of tight loops: accumulate in
//! cycles and convert once per report, or use
//! [`FixedPointConverter`](crate::FixedPointConverter) on hot paths.
//!
//! Results assume the configured frequency stays constant.

use crate::config::CpuFrequency;
use crate::timestamp::{cycles_between, Timestamp};
use core::time::Duration;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Converts cycle counts to time units by runtime division.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionConverter {
    freq: CpuFrequency,
    cycles_per_us: u64,
    cycles_per_ms: u64,
}

impl DivisionConverter {
    /// Converter for the build-time default frequency.
    pub const DEFAULT: DivisionConverter = DivisionConverter::new(CpuFrequency::DEFAULT);

    pub const fn new(freq: CpuFrequency) -> Self {
        Self {
            freq,
            cycles_per_us: freq.cycles_per_us(),
            cycles_per_ms: freq.cycles_per_ms(),
        }
    }

    pub const fn frequency(&self) -> CpuFrequency {
        self.freq
    }

    /// `cycles / (hz / 1e6)`.
    #[inline]
    pub fn cycles_to_us(&self, cycles: u64) -> u64 {
        cycles / self.cycles_per_us
    }

    /// `cycles / (hz / 1e3)`.
    #[inline]
    pub fn cycles_to_ms(&self, cycles: u64) -> u64 {
        cycles / self.cycles_per_ms
    }

    /// Exact conversion to a [`Duration`], truncated to whole nanoseconds.
    pub fn cycles_to_duration(&self, cycles: u64) -> Duration {
        let nanos = u128::from(cycles) * NANOS_PER_SEC / u128::from(self.freq.hz());
        let secs = (nanos / NANOS_PER_SEC) as u64;
        let subsec = (nanos % NANOS_PER_SEC) as u32;
        Duration::new(secs, subsec)
    }

    /// Microseconds since `start`. Reads the counter and divides.
    #[inline]
    pub fn elapsed_us(&self, start: Timestamp) -> u64 {
        self.cycles_to_us(cycles_between(start, Timestamp::now()))
    }

    /// Milliseconds since `start`. Reads the counter and divides.
    #[inline]
    pub fn elapsed_ms(&self, start: Timestamp) -> u64 {
        self.cycles_to_ms(cycles_between(start, Timestamp::now()))
    }
}

impl Default for DivisionConverter {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// [`DivisionConverter::cycles_to_us`] at the default frequency.
#[inline]
pub fn cycles_to_us(cycles: u64) -> u64 {
    DivisionConverter::DEFAULT.cycles_to_us(cycles)
}

/// [`DivisionConverter::cycles_to_ms`] at the default frequency.
#[inline]
pub fn cycles_to_ms(cycles: u64) -> u64 {
    DivisionConverter::DEFAULT.cycles_to_ms(cycles)
}

/// [`DivisionConverter::elapsed_us`] at the default frequency.
#[inline]
pub fn elapsed_us(start: Timestamp) -> u64 {
    DivisionConverter::DEFAULT.elapsed_us(start)
}

/// [`DivisionConverter::elapsed_ms`] at the default frequency.
#[inline]
pub fn elapsed_ms(start: Timestamp) -> u64 {
    DivisionConverter::DEFAULT.elapsed_ms(start)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converter(hz: u64) -> DivisionConverter {
        DivisionConverter::new(CpuFrequency::from_hz(hz).unwrap())
    }

    #[test]
    fn test_one_second_at_240mhz() {
        let cvt = converter(240_000_000);
        assert_eq!(cvt.cycles_to_us(240_000_000), 1_000_000);
        assert_eq!(cvt.cycles_to_ms(240_000_000), 1_000);
        assert_eq!(cvt.cycles_to_duration(240_000_000), Duration::from_secs(1));
    }

    #[test]
    fn test_truncates_partial_units() {
        let cvt = converter(80_000_000);
        assert_eq!(cvt.cycles_to_us(79), 0);
        assert_eq!(cvt.cycles_to_us(80), 1);
        assert_eq!(cvt.cycles_to_us(159), 1);
        assert_eq!(cvt.cycles_to_ms(79_999), 0);
        assert_eq!(cvt.cycles_to_ms(80_000), 1);
    }

    #[test]
    fn test_duration_keeps_sub_microsecond_part() {
        let cvt = converter(160_000_000);
        // 1.5 us plus one cycle (6.25 ns).
        assert_eq!(cvt.cycles_to_duration(241), Duration::from_nanos(1_506));
        assert_eq!(cvt.cycles_to_us(241), 1);
    }

    #[test]
    fn test_ms_agrees_with_us_over_1000() {
        for hz in [80_000_000, 160_000_000, 240_000_000] {
            let cvt = converter(hz);
            for cycles in [0, 1, 999, 239_999, 240_000, 1 << 20, 17_179_869_184, u64::MAX] {
                assert_eq!(cvt.cycles_to_ms(cycles), cvt.cycles_to_us(cycles) / 1000);
            }
        }
    }

    #[test]
    fn test_default_free_functions_use_default_frequency() {
        let per_us = CpuFrequency::DEFAULT.cycles_per_us();
        assert_eq!(cycles_to_us(per_us * 7), 7);
        assert_eq!(cycles_to_ms(CpuFrequency::DEFAULT.cycles_per_ms() * 3), 3);
        assert_eq!(DivisionConverter::default(), DivisionConverter::DEFAULT);
    }

    #[test]
    fn test_elapsed_is_small_right_after_capture() {
        let start = Timestamp::now();
        assert!(elapsed_ms(start) < 1_000);
        assert!(elapsed_us(start) < 1_000_000);
    }
}
