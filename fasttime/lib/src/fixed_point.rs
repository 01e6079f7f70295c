// Licensed under the Apache-2.0 license

//! Division-free cycle->microsecond conversion.
//!
//! A [`FixedPointConverter`] holds `k ~= (1e6 / hz) * 2^q` and converts with
//! one widened multiply, one add and one shift. Build it once at init and
//! reuse it in hot paths:
//!
//! ```
//! use fasttime::{cycles_between, FixedPointConverter, Timestamp};
//!
//! let cvt = FixedPointConverter::make(240_000_000, 32);
//! let t0 = Timestamp::now();
//! // ... timed work ...
//! let us = cvt.to_us(cycles_between(t0, Timestamp::now()));
//! # let _ = us;
//! ```

use crate::config::{CpuFrequency, DEFAULT_FREQ_HZ};
use crate::error::{FastTimeError, FastTimeResult};
use crate::timestamp::{cycles_between, Timestamp};
use log::{debug, warn};

/// Default fixed-point scale (Q32).
pub const DEFAULT_PRECISION_BITS: u32 = 32;

const US_PER_SEC: u128 = 1_000_000;
const MAX_PRECISION_BITS: u32 = 64;

// Below this, the rounding of k alone biases results by more than 1 us per
// second of cycles.
const MIN_ACCURATE_RECIPROCAL: u64 = 500_000;

/// Precomputed reciprocal for cycles->microseconds.
///
/// # Accuracy
///
/// `k` is rounded to nearest at construction, and `to_us` rounds to nearest
/// at the shift. Against exact division the result stays within 1 us for
/// spans of seconds at MHz clocks and Q32.
///
/// # Overflow
///
/// The product is formed in 128 bits and cannot overflow. `k` itself must fit
/// in 64 bits, which [`make`](Self::make) does not check; use
/// [`try_make`](Self::try_make) for untrusted parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPointConverter {
    k: u64,
    shift: u32,
}

impl FixedPointConverter {
    /// Derives `k = round((1e6 << precision_bits) / frequency_hz)`.
    ///
    /// Unchecked: `frequency_hz` must be non-zero, `precision_bits` at most
    /// 64, and `k` must fit in 64 bits.
    pub const fn make(frequency_hz: u64, precision_bits: u32) -> Self {
        Self {
            k: reciprocal(frequency_hz, precision_bits) as u64,
            shift: precision_bits,
        }
    }

    /// Checked form of [`make`](Self::make).
    pub fn try_make(frequency_hz: u64, precision_bits: u32) -> FastTimeResult<Self> {
        if frequency_hz == 0 {
            return Err(FastTimeError::FrequencyTooLow { hz: 0 });
        }
        if precision_bits > MAX_PRECISION_BITS {
            return Err(FastTimeError::PrecisionTooHigh {
                bits: precision_bits,
            });
        }
        let k = reciprocal(frequency_hz, precision_bits);
        if k > u128::from(u64::MAX) {
            return Err(FastTimeError::ReciprocalOverflow {
                frequency_hz,
                precision_bits,
            });
        }
        if k == 0 {
            return Err(FastTimeError::ReciprocalUnderflow {
                frequency_hz,
                precision_bits,
            });
        }
        let cvt = Self {
            k: k as u64,
            shift: precision_bits,
        };
        debug!(
            "fixed-point converter: {} Hz, Q{}, k = {}",
            frequency_hz, precision_bits, cvt.k
        );
        if cvt.k < MIN_ACCURATE_RECIPROCAL {
            warn!(
                "fixed-point converter: k = {} at Q{} is coarse; raise the precision",
                cvt.k, precision_bits
            );
        }
        Ok(cvt)
    }

    /// Converter for `freq` at [`DEFAULT_PRECISION_BITS`].
    pub const fn new(freq: CpuFrequency) -> Self {
        Self::make(freq.hz(), DEFAULT_PRECISION_BITS)
    }

    pub const fn k(&self) -> u64 {
        self.k
    }

    pub const fn shift(&self) -> u32 {
        self.shift
    }

    /// `(cycles * k + 2^(shift - 1)) >> shift`, without division.
    #[inline(always)]
    pub fn to_us(&self, cycles: u64) -> u64 {
        let half = (1u128 << self.shift) >> 1;
        ((u128::from(cycles) * u128::from(self.k) + half) >> self.shift) as u64
    }

    /// Microseconds since `start`.
    #[inline(always)]
    pub fn elapsed_us(&self, start: Timestamp) -> u64 {
        self.to_us(cycles_between(start, Timestamp::now()))
    }
}

impl Default for FixedPointConverter {
    fn default() -> Self {
        Self::make(DEFAULT_FREQ_HZ, DEFAULT_PRECISION_BITS)
    }
}

const fn reciprocal(frequency_hz: u64, precision_bits: u32) -> u128 {
    let f = frequency_hz as u128;
    ((US_PER_SEC << precision_bits) + f / 2) / f
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::DivisionConverter;

    const FREQS: [u64; 3] = [80_000_000, 160_000_000, 240_000_000];

    #[test]
    fn test_one_second_at_240mhz_q32() {
        let cvt = FixedPointConverter::make(240_000_000, 32);
        assert_eq!(cvt.shift(), 32);
        assert_eq!(cvt.k(), 17_895_697);
        assert_eq!(cvt.to_us(240_000_000), 1_000_000);
    }

    #[test]
    fn test_one_second_at_common_clocks() {
        for hz in FREQS {
            let cvt = FixedPointConverter::make(hz, DEFAULT_PRECISION_BITS);
            assert_eq!(cvt.to_us(hz), 1_000_000, "{} Hz", hz);
        }
    }

    #[test]
    fn test_reciprocal_is_rounded() {
        // 1e6 * 2^32 / 160e6 = 26843545.6
        assert_eq!(FixedPointConverter::make(160_000_000, 32).k(), 26_843_546);
        // 1e6 * 2^32 / 80e6 = 53687091.2
        assert_eq!(FixedPointConverter::make(80_000_000, 32).k(), 53_687_091);
    }

    #[test]
    fn test_within_one_us_of_division() {
        for hz in FREQS {
            let fixed = FixedPointConverter::make(hz, DEFAULT_PRECISION_BITS);
            let div = DivisionConverter::new(CpuFrequency::from_hz(hz).unwrap());
            let per_us = hz / 1_000_000;
            for cycles in [
                0,
                1,
                per_us - 1,
                per_us,
                per_us * 1_000 + 17,
                hz / 3,
                hz,
                hz * 5 + 12_345,
                hz * 10,
            ] {
                let a = fixed.to_us(cycles);
                let b = div.cycles_to_us(cycles);
                assert!(a.abs_diff(b) <= 1, "{} Hz, {} cycles: {} vs {}", hz, cycles, a, b);
            }
        }
    }

    #[test]
    fn test_zero_precision_degrades_gracefully() {
        let cvt = FixedPointConverter::make(1_000_000, 0);
        assert_eq!(cvt.k(), 1);
        assert_eq!(cvt.to_us(1234), 1234);
    }

    #[test]
    fn test_try_make_validates() {
        assert_eq!(
            FixedPointConverter::try_make(0, 32),
            Err(FastTimeError::FrequencyTooLow { hz: 0 })
        );
        assert_eq!(
            FixedPointConverter::try_make(240_000_000, 65),
            Err(FastTimeError::PrecisionTooHigh { bits: 65 })
        );
        assert_eq!(
            FixedPointConverter::try_make(1_000_000, 64),
            Err(FastTimeError::ReciprocalOverflow {
                frequency_hz: 1_000_000,
                precision_bits: 64
            })
        );
        assert_eq!(
            FixedPointConverter::try_make(240_000_000, 0),
            Err(FastTimeError::ReciprocalUnderflow {
                frequency_hz: 240_000_000,
                precision_bits: 0
            })
        );
        assert_eq!(
            FixedPointConverter::try_make(240_000_000, 32),
            Ok(FixedPointConverter::make(240_000_000, 32))
        );
    }

    #[test]
    fn test_new_and_default() {
        let cvt = FixedPointConverter::new(CpuFrequency::DEFAULT);
        assert_eq!(cvt, FixedPointConverter::default());
        assert_eq!(cvt.shift(), DEFAULT_PRECISION_BITS);
    }
}
