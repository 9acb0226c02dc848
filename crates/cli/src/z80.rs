//! Z80 engine adapter.
//!
//! Binds the `iz80` instruction engine to the harness's machine state. The
//! engine sees the machine through a short-lived `BusView` borrow per step;
//! instruction semantics stay entirely inside `iz80`.

use iz80::{Cpu, Machine as Z80Bus, Reg16, Reg8};

use zhost_core::core::{CoreRegisters, CpuCore};
use zhost_core::soc::Machine;

/// Machine-state borrow presented to `iz80` for one instruction.
struct BusView<'a>(&'a mut Machine);

impl Z80Bus for BusView<'_> {
    fn peek(&mut self, address: u16) -> u8 {
        self.0.mem_read(address)
    }

    fn poke(&mut self, address: u16, value: u8) {
        self.0.mem_write(address, value);
    }

    fn port_in(&mut self, address: u16) -> u8 {
        self.0.io_read(address)
    }

    fn port_out(&mut self, address: u16, value: u8) {
        self.0.io_write(address, value);
    }
}

/// The concrete CPU core: an `iz80` Z80.
pub struct Z80Core {
    cpu: Cpu,
}

impl Z80Core {
    /// Creates a Z80 core in its power-on state.
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new_z80(),
        }
    }
}

impl Default for Z80Core {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuCore for Z80Core {
    fn reset(&mut self) {
        self.cpu.registers().set_pc(0x0000);
    }

    fn step(&mut self, machine: &mut Machine) {
        let mut bus = BusView(machine);
        self.cpu.execute_instruction(&mut bus);
    }

    fn halted(&self) -> bool {
        self.cpu.is_halted()
    }

    fn registers(&mut self) -> CoreRegisters {
        let regs = self.cpu.registers();
        CoreRegisters {
            a: regs.get8(Reg8::A),
            de: regs.get16(Reg16::DE),
        }
    }
}
