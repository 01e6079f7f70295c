// Licensed under the Apache-2.0 license

//! CPU frequency configuration.
//!
//! Every cycle->time conversion assumes one fixed frequency. The default is
//! resolved at build time from `FASTTIME_FREQ_HZ`, then `F_CPU`, then
//! 240 MHz on Xtensa and RV32. Hosted builds fall back to 1 GHz, the tick
//! rate of the host counter. Firmware that knows its clock at runtime builds a
//! [`CpuFrequency`] once at init and hands it to the converters.
//!
//! Nothing here tracks clock changes. With DVFS enabled, converted times
//! drift; keep measurements in cycles or use a wall-clock source instead.

use crate::error::{FastTimeError, FastTimeResult};
use log::warn;

include!(concat!(env!("OUT_DIR"), "/default_freq.rs"));

const HZ_PER_MHZ: u64 = 1_000_000;
const HZ_PER_KHZ: u64 = 1_000;

/// A CPU clock frequency of at least 1 MHz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CpuFrequency(u64);

impl CpuFrequency {
    /// The build-time default, see [`DEFAULT_FREQ_HZ`].
    pub const DEFAULT: CpuFrequency = CpuFrequency(DEFAULT_FREQ_HZ);

    /// Validates `hz` as a conversion frequency.
    ///
    /// Frequencies that are not a whole number of MHz are accepted, but the
    /// division converter truncates its per-microsecond divisor for them.
    pub fn from_hz(hz: u64) -> FastTimeResult<Self> {
        if hz < HZ_PER_MHZ {
            return Err(FastTimeError::FrequencyTooLow { hz });
        }
        if hz % HZ_PER_MHZ != 0 {
            warn!(
                "CPU frequency {} Hz is not a whole number of MHz; cycles_to_us divides by {}",
                hz,
                hz / HZ_PER_MHZ
            );
        }
        Ok(Self(hz))
    }

    pub const fn hz(self) -> u64 {
        self.0
    }

    /// Whole cycles per microsecond (truncated).
    pub const fn cycles_per_us(self) -> u64 {
        self.0 / HZ_PER_MHZ
    }

    /// Whole cycles per millisecond (truncated).
    pub const fn cycles_per_ms(self) -> u64 {
        self.0 / HZ_PER_KHZ
    }
}

impl Default for CpuFrequency {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u64> for CpuFrequency {
    type Error = FastTimeError;

    fn try_from(hz: u64) -> FastTimeResult<Self> {
        Self::from_hz(hz)
    }
}
