/*++

Licensed under the Apache-2.0 license.

File Name:

    mcycle.rs

Abstract:

    Cycle counter driver for RV32 cores (ESP32-C2/C3/C6/H2 and similar).

    The 64-bit machine cycle counter is exposed through two 32-bit CSRs,
    mcycle and mcycleh, which are not latched together. Reads go through
    read_tear_free so a carry between the halves is never observed.

--*/

use fasttime_hil::{read_tear_free, CycleCounter, SplitCounter};
use riscv_csr::csr::{ReadWriteRiscvCsr, MCYCLE, MCYCLEH};
use tock_registers::interfaces::Readable;
use tock_registers::register_bitfields;

register_bitfields![usize,
    value [
        value OFFSET(0) NUMBITS(32) [],
    ],
];

/// The `mcycleh` / `mcycle` CSR pair.
struct McycleCsrs {
    low: ReadWriteRiscvCsr<usize, value::Register, { MCYCLE }>,
    high: ReadWriteRiscvCsr<usize, value::Register, { MCYCLEH }>,
}

impl McycleCsrs {
    #[inline(always)]
    fn new() -> Self {
        Self {
            low: ReadWriteRiscvCsr::new(),
            high: ReadWriteRiscvCsr::new(),
        }
    }
}

impl SplitCounter for McycleCsrs {
    #[inline(always)]
    fn read_high(&self) -> u32 {
        self.high.get() as u32
    }

    #[inline(always)]
    fn read_low(&self) -> u32 {
        self.low.get() as u32
    }
}

/// RISC-V machine cycle counter, read tear-free as 64 bits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mcycle;

impl CycleCounter for Mcycle {
    type Tick = u64;

    #[inline(always)]
    fn read() -> u64 {
        read_tear_free(&McycleCsrs::new())
    }
}
