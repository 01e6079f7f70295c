// Licensed under the Apache-2.0 license

use thiserror_no_std::Error;

/// Errors reported by the validating constructors.
///
/// Capture, comparison and conversion never fail; only configuration does.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FastTimeError {
    #[error("CPU frequency {hz} Hz is below 1 MHz")]
    FrequencyTooLow { hz: u64 },
    #[error("fixed-point precision of {bits} bits exceeds 64")]
    PrecisionTooHigh { bits: u32 },
    #[error("reciprocal for {frequency_hz} Hz at Q{precision_bits} does not fit in 64 bits")]
    ReciprocalOverflow {
        frequency_hz: u64,
        precision_bits: u32,
    },
    #[error("reciprocal for {frequency_hz} Hz at Q{precision_bits} rounds to zero")]
    ReciprocalUnderflow {
        frequency_hz: u64,
        precision_bits: u32,
    },
}

pub type FastTimeResult<T> = Result<T, FastTimeError>;
