mod alu;
pub(crate) mod instructions;
mod registers;


use crate::cpu::instructions::ParseError;
use crate::memory::{addresses, Mmu};

pub use registers::CpuRegisters;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptType {
    VBlank,
    LcdStatus,
    Timer,
    Serial,
    Joypad,
}

impl InterruptType {
    // Dispatch priority, highest first
    const PRIORITY_ORDER: [Self; 5] = [
        Self::VBlank,
        Self::LcdStatus,
        Self::Timer,
        Self::Serial,
        Self::Joypad,
    ];

    pub fn to_bit(self) -> u8 {
        match self {
            Self::VBlank => 1 << 0,
            Self::LcdStatus => 1 << 1,
            Self::Timer => 1 << 2,
            Self::Serial => 1 << 3,
            Self::Joypad => 1 << 4,
        }
    }

    pub fn handler_address(self) -> u16 {
        match self {
            Self::VBlank => 0x0040,
            Self::LcdStatus => 0x0048,
            Self::Timer => 0x0050,
            Self::Serial => 0x0058,
            Self::Joypad => 0x0060,
        }
    }

    /// Pick the highest-priority interrupt out of a pending bit mask
    /// (IF & IE).
    fn highest_priority(pending: u8) -> Option<Self> {
        Self::PRIORITY_ORDER
            .into_iter()
            .find(|interrupt_type| pending & interrupt_type.to_bit() != 0)
    }
}

/// Fetch, decode, and execute one instruction, then run the interrupt
/// service stage. Returns the number of T-states consumed.
///
/// Returns 0 while the CPU is halted so that the frame driver can cut a
/// frame short instead of spinning.
pub(crate) fn tick(mmu: &mut Mmu, cpu_registers: &mut CpuRegisters) -> Result<u64, ParseError> {
    if cpu_registers.halted {
        // TODO: wake from HALT once an enabled interrupt becomes pending
        return Ok(0);
    }

    let (instruction, next_pc) = instructions::parse_next_instruction(mmu, cpu_registers.pc)?;
    let cycles = u64::from(instruction.cycles_required(cpu_registers));

    cpu_registers.pc = next_pc;
    instruction.execute(mmu, cpu_registers);

    Ok(cycles + service_interrupts(mmu, cpu_registers))
}

/// Dispatch the highest-priority pending interrupt, if the master enable
/// allows it. At most one interrupt is serviced per instruction boundary.
fn service_interrupts(mmu: &mut Mmu, cpu_registers: &mut CpuRegisters) -> u64 {
    // An EI in the instruction that just executed is not visible until the
    // next boundary
    if !cpu_registers.ime || cpu_registers.interrupt_delay {
        return 0;
    }

    let pending = mmu.read(addresses::IF_REGISTER) & mmu.ie_register();
    let Some(interrupt_type) = InterruptType::highest_priority(pending) else {
        return 0;
    };

    cpu_registers.ime = false;
    mmu.io_registers_mut().interrupt_flags().clear(interrupt_type);

    cpu_registers.sp = cpu_registers.sp.wrapping_sub(2);
    mmu.write_u16(cpu_registers.sp, cpu_registers.pc);
    cpu_registers.pc = interrupt_type.handler_address();

    4
}
