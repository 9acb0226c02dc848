//! Scripted CPU core.
//!
//! Each scripted step is a closure receiving the machine, standing in for
//! one instruction's worth of memory/port accesses. The core reports halted
//! once the script is exhausted, which lets tests pin the exact number of
//! steps the execution loop performs.

use std::collections::VecDeque;

use zhost_core::core::{CoreRegisters, CpuCore};
use zhost_core::soc::Machine;

type StepFn = Box<dyn FnMut(&mut Machine)>;

/// CPU core driven by a pre-recorded script of per-step closures.
pub struct ScriptedCore {
    script: VecDeque<StepFn>,
    steps_executed: u64,
    resets: u32,
    regs: CoreRegisters,
}

impl ScriptedCore {
    /// Creates a core with an empty script (immediately halted).
    pub fn new() -> Self {
        Self {
            script: VecDeque::new(),
            steps_executed: 0,
            resets: 0,
            regs: CoreRegisters::default(),
        }
    }

    /// Appends one scripted step.
    pub fn then(mut self, op: impl FnMut(&mut Machine) + 'static) -> Self {
        self.script.push_back(Box::new(op));
        self
    }

    /// Appends `n` steps that touch nothing.
    pub fn nop_steps(self, n: usize) -> Self {
        (0..n).fold(self, |core, _| core.then(|_| {}))
    }

    /// Sets the register snapshot reported at halt.
    pub fn with_registers(mut self, regs: CoreRegisters) -> Self {
        self.regs = regs;
        self
    }

    /// Number of `step` calls made against this core.
    pub fn steps_executed(&self) -> u64 {
        self.steps_executed
    }

    /// Number of `reset` calls made against this core.
    pub fn resets(&self) -> u32 {
        self.resets
    }
}

impl Default for ScriptedCore {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuCore for ScriptedCore {
    fn reset(&mut self) {
        self.resets += 1;
    }

    fn step(&mut self, machine: &mut Machine) {
        if let Some(mut op) = self.script.pop_front() {
            op(machine);
        }
        self.steps_executed += 1;
    }

    fn halted(&self) -> bool {
        self.script.is_empty()
    }

    fn registers(&mut self) -> CoreRegisters {
        self.regs
    }
}
