use clap::Parser;
use dmg_core::Emulator;
use std::error::Error;
use std::fs;
use std::time::Instant;

#[derive(Parser)]
struct Cli {
    /// Path to a 256-byte BIOS image
    #[arg(short = 'b', long = "bios")]
    bios_path: String,
    /// Path to a flat cartridge ROM image
    #[arg(short = 'r', long = "rom")]
    rom_path: String,
    /// Number of frames to emulate before exiting
    #[arg(short = 'n', long = "frames", default_value_t = 600)]
    frames: u64,
    #[arg(long = "fps", default_value_t = 60)]
    fps: u32,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Cli::parse();

    let bios = fs::read(&args.bios_path)?;
    let rom = fs::read(&args.rom_path)?;

    let mut emulator = Emulator::new(args.fps);
    emulator.reset(&bios, &rom)?;

    let start = Instant::now();
    let mut total_cycles = 0u64;
    let mut frames_run = 0u64;

    for _ in 0..args.frames {
        let cycles = emulator.next_frame()?;
        total_cycles += cycles;
        frames_run += 1;

        if cycles == 0 {
            log::info!("CPU halted at PC=0x{:04X}; stopping", emulator.registers().pc);
            break;
        }
    }

    let wall = start.elapsed();
    log::info!(
        "Emulated {frames_run} frames ({total_cycles} T-states) in {:.3}s",
        wall.as_secs_f64()
    );

    let registers = emulator.registers();
    println!(
        "PC={:04X} SP={:04X} AF={:04X} BC={:04X} DE={:04X} HL={:04X} IME={}",
        registers.pc,
        registers.sp,
        registers.af(),
        registers.bc(),
        registers.de(),
        registers.hl(),
        u8::from(registers.ime),
    );

    Ok(())
}
