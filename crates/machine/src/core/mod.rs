//! CPU core contract.
//!
//! The instruction engine itself is an external collaborator; this module
//! only fixes the boundary the execution loop drives it through. A core is
//! reset once, stepped one instruction at a time against the machine state,
//! and observed for its halt signal. Everything an instruction does to the
//! outside world happens synchronously inside `step` through the machine's
//! memory and port accessors.

use crate::soc::Machine;

/// Architectural registers reported in the halt summary.
///
/// The hosted image leaves its result status in the accumulator and a byte
/// count in DE, so those two are the only registers worth surfacing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoreRegisters {
    /// Accumulator.
    pub a: u8,
    /// DE register pair.
    pub de: u16,
}

/// An 8-bit CPU engine bound to the machine's memory and port callbacks.
pub trait CpuCore {
    /// Returns the core to its power-on state (PC at 0x0000).
    fn reset(&mut self);

    /// Executes exactly one instruction.
    ///
    /// Any memory or port accesses the instruction performs are made
    /// synchronously against `machine` before this call returns.
    fn step(&mut self, machine: &mut Machine);

    /// Whether the hosted program has signalled completion.
    fn halted(&self) -> bool;

    /// Snapshot of the registers reported at halt.
    fn registers(&mut self) -> CoreRegisters;
}
