//! Emulator core for the original Game Boy: LR35902 CPU, memory map unit,
//! pixel processing unit, and the frame driver binding them together.
//!
//! The core performs no I/O of its own. The host loads BIOS/cartridge
//! images, calls [`Emulator::next_frame`] at its own cadence, and blits
//! [`Emulator::frame_buffer`] however it sees fit.

mod cpu;
mod memory;
mod ppu;
mod timer;

use thiserror::Error;

pub use crate::cpu::instructions::ParseError;
pub use crate::cpu::{CpuRegisters, InterruptType};
pub use crate::memory::{LoadError, Mmu, BIOS_SIZE, ROM_BANK_SIZE};
pub use crate::ppu::{FrameBuffer, PpuMode, PpuState, SCREEN_HEIGHT, SCREEN_WIDTH};

use crate::memory::addresses;

/// Master clock rate in T-states per second.
pub const CLOCK_RATE: u64 = 4_194_304;

const DEFAULT_FPS: u32 = 60;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResetError {
    #[error("error loading image: {source}")]
    Load {
        #[from]
        source: LoadError,
    },
    #[error("cartridge header logo does not match the BIOS copy")]
    LogoMismatch,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    #[error("error parsing CPU instruction: {source}")]
    InstructionParse {
        #[from]
        source: ParseError,
    },
}

/// One Game Boy: the four core subsystems plus the frame-budget
/// accumulator.
pub struct Emulator {
    mmu: Mmu,
    cpu_registers: CpuRegisters,
    ppu_state: PpuState,
    frame_cycles: u64,
    counter: u64,
}

impl Emulator {
    /// Create a powered-off emulator whose frame driver emits
    /// `CLOCK_RATE / fps` T-states per frame. An fps of 0 selects the
    /// default of 60.
    pub fn new(fps: u32) -> Self {
        let fps = if fps == 0 { DEFAULT_FPS } else { fps };
        Self {
            mmu: Mmu::new(),
            cpu_registers: CpuRegisters::new(),
            ppu_state: PpuState::new(),
            frame_cycles: CLOCK_RATE / u64::from(fps),
            counter: 0,
        }
    }

    /// Prime memory with the given BIOS and cartridge images and return
    /// every subsystem to its power-on state.
    ///
    /// Both images are validated, and the Nintendo logo bitmap baked into
    /// the BIOS must match the copy in the cartridge header, the same check
    /// the BIOS itself performs before handing control to the game.
    pub fn reset(&mut self, bios: &[u8], cartridge: &[u8]) -> Result<(), ResetError> {
        let mut mmu = Mmu::new();
        mmu.load_bios(bios)?;
        mmu.load_cartridge(cartridge)?;

        let bios_logo =
            &bios[addresses::BIOS_LOGO_START as usize..=addresses::BIOS_LOGO_END as usize];
        let header_logo =
            &cartridge[addresses::HEADER_LOGO_START as usize..=addresses::HEADER_LOGO_END as usize];
        if bios_logo != header_logo {
            return Err(ResetError::LogoMismatch);
        }

        log::info!("Reset with {}-byte cartridge image", cartridge.len());

        self.mmu = mmu;
        self.cpu_registers = CpuRegisters::new();
        self.ppu_state = PpuState::new();
        self.counter = 0;

        Ok(())
    }

    /// Execute exactly one instruction plus the downstream MMU and PPU
    /// updates for its T-state cost. Returns that cost; 0 means the CPU is
    /// halted.
    pub fn next_step(&mut self) -> Result<u64, StepError> {
        let cycles = cpu::tick(&mut self.mmu, &mut self.cpu_registers)?;
        if cycles > 0 {
            self.mmu.step(cycles);
            ppu::tick(&mut self.ppu_state, &mut self.mmu, cycles);
        }

        Ok(cycles)
    }

    /// Run one frame's worth of T-states and return how many were actually
    /// consumed. Returns early if the CPU halts mid-frame.
    pub fn next_frame(&mut self) -> Result<u64, StepError> {
        let mut elapsed = 0;

        while self.counter < self.frame_cycles {
            let cycles = self.next_step()?;
            if cycles == 0 {
                return Ok(elapsed);
            }
            self.counter += cycles;
            elapsed += cycles;
        }
        self.counter -= self.frame_cycles;

        Ok(elapsed)
    }

    /// Borrow the current 160x144 RGBA framebuffer.
    pub fn frame_buffer(&self) -> &FrameBuffer {
        self.ppu_state.frame_buffer()
    }

    /// Read-only view of the CPU register file.
    pub fn registers(&self) -> &CpuRegisters {
        &self.cpu_registers
    }

    /// Read-through for debugger front ends.
    pub fn read_memory(&self, address: u16) -> u8 {
        self.mmu.read(address)
    }
}
