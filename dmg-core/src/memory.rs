pub(crate) mod addresses;
pub(crate) mod ioregisters;

use crate::memory::ioregisters::IoRegisters;
use crate::timer::{self, TimerCounters};
use thiserror::Error;

pub const BIOS_SIZE: usize = 256;
pub const ROM_BANK_SIZE: usize = 0x8000;

const VRAM_SIZE: usize = 8192;
const CARTRIDGE_RAM_SIZE: usize = 8192;
const WORKING_RAM_SIZE: usize = 8192;
const OAM_SIZE: usize = 160;
const HRAM_SIZE: usize = 127;

// One byte per T-state
const OAM_DMA_CYCLES: u64 = 160;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("BIOS image must be exactly {BIOS_SIZE} bytes, was {len} bytes")]
    BiosSize { len: usize },
    #[error("cartridge image must be a non-empty multiple of {ROM_BANK_SIZE} bytes, was {len} bytes")]
    CartridgeSize { len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OamDmaTransfer {
    source_address: u16,
    cycles_remaining: u64,
}

/// The memory map unit: all processor-visible addresses resolve through
/// here. Owns every backing buffer plus the divider/timer counters and any
/// in-flight OAM DMA transfer.
pub struct Mmu {
    bios: [u8; BIOS_SIZE],
    bios_unmapped: bool,
    rom: Vec<u8>,
    vram: [u8; VRAM_SIZE],
    cartridge_ram: [u8; CARTRIDGE_RAM_SIZE],
    working_ram: [u8; WORKING_RAM_SIZE],
    oam: [u8; OAM_SIZE],
    io_registers: IoRegisters,
    hram: [u8; HRAM_SIZE],
    ie_register: u8,
    timer_counters: TimerCounters,
    oam_dma: Option<OamDmaTransfer>,
}

impl Mmu {
    pub fn new() -> Self {
        Self {
            bios: [0; BIOS_SIZE],
            bios_unmapped: false,
            rom: Vec::new(),
            vram: [0; VRAM_SIZE],
            cartridge_ram: [0; CARTRIDGE_RAM_SIZE],
            working_ram: [0; WORKING_RAM_SIZE],
            oam: [0; OAM_SIZE],
            io_registers: IoRegisters::new(),
            hram: [0; HRAM_SIZE],
            ie_register: 0,
            timer_counters: TimerCounters::new(),
            oam_dma: None,
        }
    }

    /// Install a BIOS image. It stays visible at 0x0000..=0x00FF until the
    /// latch at 0xFF50 is written with bit 0 set.
    pub fn load_bios(&mut self, image: &[u8]) -> Result<(), LoadError> {
        if image.len() != BIOS_SIZE {
            return Err(LoadError::BiosSize { len: image.len() });
        }

        self.bios.copy_from_slice(image);
        self.bios_unmapped = false;

        Ok(())
    }

    /// Install a flat cartridge ROM image mapped at 0x0000..=0x7FFF. Only
    /// the first bank is reachable without a bank controller.
    pub fn load_cartridge(&mut self, image: &[u8]) -> Result<(), LoadError> {
        if image.is_empty() || image.len() % ROM_BANK_SIZE != 0 {
            return Err(LoadError::CartridgeSize { len: image.len() });
        }

        log::info!("Loaded {}-byte cartridge image", image.len());
        self.rom = image.to_vec();

        Ok(())
    }

    /// Read the value at the given address from the perspective of the CPU.
    pub fn read(&self, address: u16) -> u8 {
        match address {
            address @ addresses::ROM_START..=addresses::ROM_END => {
                if address <= addresses::BIOS_END && !self.bios_unmapped {
                    self.bios[address as usize]
                } else {
                    self.rom.get(address as usize).copied().unwrap_or(0xFF)
                }
            }
            address @ addresses::VRAM_START..=addresses::VRAM_END => {
                self.vram[(address - addresses::VRAM_START) as usize]
            }
            address @ addresses::CARTRIDGE_RAM_START..=addresses::CARTRIDGE_RAM_END => {
                self.cartridge_ram[(address - addresses::CARTRIDGE_RAM_START) as usize]
            }
            address @ addresses::WORKING_RAM_START..=addresses::WORKING_RAM_END => {
                self.working_ram[(address - addresses::WORKING_RAM_START) as usize]
            }
            address @ addresses::ECHO_RAM_START..=addresses::ECHO_RAM_END => {
                self.working_ram[(address - addresses::ECHO_RAM_START) as usize]
            }
            address @ addresses::OAM_START..=addresses::OAM_END => {
                self.oam[(address - addresses::OAM_START) as usize]
            }
            addresses::UNUSABLE_START..=addresses::UNUSABLE_END => 0x00,
            address @ addresses::IO_REGISTERS_START..=addresses::IO_REGISTERS_END => {
                self.io_registers.read_address(address)
            }
            address @ addresses::HRAM_START..=addresses::HRAM_END => {
                self.hram[(address - addresses::HRAM_START) as usize]
            }
            addresses::IE_REGISTER => self.ie_register,
        }
    }

    /// Assign a value to the given address from the perspective of the CPU.
    /// Region policy applies: ROM and the unusable range drop writes, echo
    /// RAM aliases working RAM, and a handful of I/O registers have side
    /// effects.
    pub fn write(&mut self, address: u16, value: u8) {
        match address {
            addresses::ROM_START..=addresses::ROM_END => {}
            address @ addresses::VRAM_START..=addresses::VRAM_END => {
                self.vram[(address - addresses::VRAM_START) as usize] = value;
            }
            address @ addresses::CARTRIDGE_RAM_START..=addresses::CARTRIDGE_RAM_END => {
                self.cartridge_ram[(address - addresses::CARTRIDGE_RAM_START) as usize] = value;
            }
            address @ addresses::WORKING_RAM_START..=addresses::WORKING_RAM_END => {
                self.working_ram[(address - addresses::WORKING_RAM_START) as usize] = value;
            }
            address @ addresses::ECHO_RAM_START..=addresses::ECHO_RAM_END => {
                self.working_ram[(address - addresses::ECHO_RAM_START) as usize] = value;
            }
            address @ addresses::OAM_START..=addresses::OAM_END => {
                self.oam[(address - addresses::OAM_START) as usize] = value;
            }
            addresses::UNUSABLE_START..=addresses::UNUSABLE_END => {}
            addresses::DMA_REGISTER => {
                self.io_registers.write_address(address, value);
                self.oam_dma = Some(OamDmaTransfer {
                    source_address: u16::from(value) << 8,
                    cycles_remaining: OAM_DMA_CYCLES,
                });
            }
            addresses::BIOS_LATCH_REGISTER => {
                self.io_registers.write_address(address, value);
                if value & 0x01 != 0 && !self.bios_unmapped {
                    log::info!("BIOS unmapped; 0x0000..=0x00FF now reads cartridge ROM");
                    self.bios_unmapped = true;
                }
            }
            address @ addresses::IO_REGISTERS_START..=addresses::IO_REGISTERS_END => {
                self.io_registers.write_address(address, value);
            }
            address @ addresses::HRAM_START..=addresses::HRAM_END => {
                self.hram[(address - addresses::HRAM_START) as usize] = value;
            }
            addresses::IE_REGISTER => {
                self.ie_register = value;
            }
        }
    }

    /// Read the value at the given address and the following address as a
    /// little-endian 16-bit value.
    pub fn read_u16(&self, address: u16) -> u16 {
        let lsb = self.read(address);
        let msb = self.read(address.wrapping_add(1));
        u16::from_le_bytes([lsb, msb])
    }

    /// Assign a 16-bit value to the given address and the following address,
    /// using little-endian.
    pub fn write_u16(&mut self, address: u16, value: u16) {
        let [lsb, msb] = value.to_le_bytes();
        self.write(address, lsb);
        self.write(address.wrapping_add(1), msb);
    }

    /// Advance the divider/timer counters and any pending OAM DMA transfer
    /// by the given number of T-states.
    ///
    /// The DMA transfer is byte-per-T-state in real hardware; here the full
    /// 160 bytes land atomically in whichever step exhausts the countdown.
    pub fn step(&mut self, cycles: u64) {
        if let Some(dma) = self.oam_dma {
            if cycles >= dma.cycles_remaining {
                self.oam_dma = None;
                for i in 0..OAM_SIZE as u16 {
                    self.oam[i as usize] = self.read(dma.source_address.wrapping_add(i));
                }
            } else {
                self.oam_dma = Some(OamDmaTransfer {
                    cycles_remaining: dma.cycles_remaining - cycles,
                    ..dma
                });
            }
        }

        timer::update_timer_registers(&mut self.io_registers, &mut self.timer_counters, cycles);
    }

    /// Borrow the 160-byte object attribute table.
    pub fn oam_view(&self) -> &[u8; OAM_SIZE] {
        &self.oam
    }

    pub fn io_registers(&self) -> &IoRegisters {
        &self.io_registers
    }

    pub fn io_registers_mut(&mut self) -> &mut IoRegisters {
        &mut self.io_registers
    }

    /// Retrieve the current value of the IE register (interrupt enable
    /// mask).
    pub fn ie_register(&self) -> u8 {
        self.ie_register
    }
}

impl Default for Mmu {
    fn default() -> Self {
        Self::new()
    }
}
