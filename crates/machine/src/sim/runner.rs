//! Run-to-halt execution loop.
//!
//! The runner owns the machine and the CPU core. It resets the core once at
//! construction and then does exactly one thing: step until the core reports
//! halted. There is no instruction limit, timeout, or cancellation; a
//! hosted program that never halts runs forever by design.
//!
//! On halt the output stream is finalized exactly once: console mode just
//! flushes, memory-dump mode writes the 64 KiB image first.

use tracing::debug;

use crate::config::OutputMode;
use crate::core::{CoreRegisters, CpuCore};
use crate::soc::Machine;

/// What a completed run looked like.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    /// Number of `step` calls until the core reported halted.
    pub steps: u64,
    /// Register snapshot at halt (accumulator and DE).
    pub registers: CoreRegisters,
}

/// Execution loop around a CPU core and the machine it is bound to.
#[derive(Debug)]
pub struct Runner<C> {
    machine: Machine,
    core: C,
    output: OutputMode,
}

impl<C: CpuCore> Runner<C> {
    /// Binds `core` to `machine` and resets it, leaving the pair ready to
    /// run.
    pub fn new(machine: Machine, mut core: C, output: OutputMode) -> Self {
        core.reset();
        Self {
            machine,
            core,
            output,
        }
    }

    /// Steps the core until it halts, then finalizes output.
    pub fn run(&mut self) -> RunSummary {
        let mut steps = 0u64;
        while !self.core.halted() {
            self.core.step(&mut self.machine);
            steps += 1;
        }

        self.finish();

        let registers = self.core.registers();
        debug!(a = registers.a, de = registers.de, steps, "halted");
        RunSummary { steps, registers }
    }

    /// One-shot output finalization after halt.
    ///
    /// The sink is fire-and-forget at this point; a failing dump or flush
    /// cannot un-halt the machine, so errors are dropped.
    fn finish(&mut self) {
        if self.output == OutputMode::MemoryDump {
            let _ = self.machine.dump_memory();
        }
        let _ = self.machine.bus.console_mut().flush();
    }

    /// The machine, for post-run inspection.
    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    /// The CPU core, for post-run inspection.
    pub fn core(&self) -> &C {
        &self.core
    }
}
