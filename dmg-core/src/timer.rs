//! Divider and timer counters, ticked by the MMU on every instruction's
//! T-state cost.

use crate::cpu::InterruptType;
use crate::memory::ioregisters::{IoRegister, IoRegisters};

// DIV advances once per 4194304 / 16384 T-states
const DIV_PERIOD: u64 = 256;

/// Internal T-state accumulators backing the DIV and TIMA registers.
///
/// Both counters are monotonic; register increments happen whenever the
/// running total crosses a period boundary, so the schedule is exact no
/// matter how the elapsed time is sliced up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TimerCounters {
    divider: u64,
    timer: u64,
}

impl TimerCounters {
    pub(crate) fn new() -> Self {
        Self { divider: 0, timer: 0 }
    }
}

/// TIMA period in T-states as selected by the low two bits of TAC.
fn tima_period(timer_control: u8) -> u64 {
    match timer_control & 0x03 {
        0x00 => 1024, // 4096 Hz
        0x01 => 16,   // 262144 Hz
        0x02 => 64,   // 65536 Hz
        0x03 => 256,  // 16384 Hz
        _ => unreachable!("two-bit value"),
    }
}

pub(crate) fn update_timer_registers(
    io_registers: &mut IoRegisters,
    counters: &mut TimerCounters,
    cycles: u64,
) {
    let old_divider = counters.divider;
    let new_divider = old_divider + cycles;
    counters.divider = new_divider;

    let div_increments = new_divider / DIV_PERIOD - old_divider / DIV_PERIOD;
    if div_increments != 0 {
        let old_div = io_registers.read_register(IoRegister::DIV);
        io_registers.privileged_set_div(old_div.wrapping_add(div_increments as u8));
    }

    let timer_control = io_registers.read_register(IoRegister::TAC);
    if timer_control & 0x04 == 0 {
        // Disabling the timer resets its sub-count
        counters.timer = 0;
        return;
    }

    let period = tima_period(timer_control);
    let old_timer = counters.timer;
    let new_timer = old_timer + cycles;
    counters.timer = new_timer;

    let tima_increments = new_timer / period - old_timer / period;

    // Generally 0 or 1; only a starved caller would see more
    for _ in 0..tima_increments {
        let old_tima = io_registers.read_register(IoRegister::TIMA);
        match old_tima.overflowing_add(1) {
            (new_tima, false) => {
                io_registers.privileged_set_tima(new_tima);
            }
            (_, true) => {
                let timer_modulo = io_registers.read_register(IoRegister::TMA);
                io_registers.privileged_set_tima(timer_modulo);
                io_registers.interrupt_flags().set(InterruptType::Timer);
            }
        }
    }
}
