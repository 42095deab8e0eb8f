use super::{hash_map, run_test, ExpectedState};

#[test]
fn rotate_left_accumulator() {
    run_test(
        // LD A, 0x85; RLCA
        "3E8507",
        &ExpectedState {
            a: Some(0x0B),
            f: Some(0x10),
            ..ExpectedState::empty()
        },
    );

    run_test(
        // LD A, 0x00; RLCA -- the accumulator form never sets Z
        "3E0007",
        &ExpectedState {
            a: Some(0x00),
            f: Some(0x00),
            ..ExpectedState::empty()
        },
    );
}

#[test]
fn rotate_left_accumulator_thru_carry() {
    run_test(
        // SCF; LD A, 0x2A; RLA -- carry shifts into bit 0
        "373E2A17",
        &ExpectedState {
            a: Some(0x55),
            f: Some(0x00),
            ..ExpectedState::empty()
        },
    );

    run_test(
        // LD A, 0x80; RLA
        "3E8017",
        &ExpectedState {
            a: Some(0x00),
            f: Some(0x10),
            ..ExpectedState::empty()
        },
    );
}

#[test]
fn rotate_right_accumulator() {
    run_test(
        // LD A, 0x01; RRCA
        "3E010F",
        &ExpectedState {
            a: Some(0x80),
            f: Some(0x10),
            ..ExpectedState::empty()
        },
    );

    run_test(
        // LD A, 0x01; RRA -- nothing rotates into bit 7
        "3E011F",
        &ExpectedState {
            a: Some(0x00),
            f: Some(0x10),
            ..ExpectedState::empty()
        },
    );

    run_test(
        // SCF; LD A, 0x00; RRA
        "373E001F",
        &ExpectedState {
            a: Some(0x80),
            f: Some(0x00),
            ..ExpectedState::empty()
        },
    );
}

#[test]
fn cb_rotate_left_register() {
    run_test(
        // LD B, 0xF5; RLC B
        "06F5CB00",
        &ExpectedState {
            b: Some(0xEB),
            f: Some(0x10),
            ..ExpectedState::empty()
        },
    );

    run_test(
        // LD B, 0x00; RLC B -- the CB form does set Z
        "0600CB00",
        &ExpectedState {
            b: Some(0x00),
            f: Some(0x80),
            ..ExpectedState::empty()
        },
    );

    run_test(
        // SCF; LD C, 0x80; RL C
        "370E80CB11",
        &ExpectedState {
            c: Some(0x01),
            f: Some(0x10),
            ..ExpectedState::empty()
        },
    );
}

#[test]
fn cb_rotate_right_register() {
    run_test(
        // LD D, 0x01; RRC D
        "1601CB0A",
        &ExpectedState {
            d: Some(0x80),
            f: Some(0x10),
            ..ExpectedState::empty()
        },
    );

    run_test(
        // SCF; LD E, 0x00; RR E
        "371E00CB1B",
        &ExpectedState {
            e: Some(0x80),
            f: Some(0x00),
            ..ExpectedState::empty()
        },
    );
}

#[test]
fn rlc_rrc_round_trip() {
    run_test(
        // LD B, 0x3C; RLC B; RRC B
        "063CCB00CB08",
        &ExpectedState {
            b: Some(0x3C),
            f: Some(0x00),
            ..ExpectedState::empty()
        },
    );
}

#[test]
fn shift_left_arithmetic() {
    run_test(
        // LD A, 0x80; SLA A
        "3E80CB27",
        &ExpectedState {
            a: Some(0x00),
            f: Some(0x90),
            ..ExpectedState::empty()
        },
    );

    run_test(
        // LD H, 0x41; SLA H
        "2641CB24",
        &ExpectedState {
            h: Some(0x82),
            f: Some(0x00),
            ..ExpectedState::empty()
        },
    );
}

#[test]
fn shift_right_arithmetic() {
    run_test(
        // LD A, 0x81; SRA A -- bit 7 sticks
        "3E81CB2F",
        &ExpectedState {
            a: Some(0xC0),
            f: Some(0x10),
            ..ExpectedState::empty()
        },
    );
}

#[test]
fn shift_right_logical() {
    run_test(
        // LD A, 0x01; SRL A
        "3E01CB3F",
        &ExpectedState {
            a: Some(0x00),
            f: Some(0x90),
            ..ExpectedState::empty()
        },
    );

    run_test(
        // LD A, 0x81; SRL A -- bit 7 does not stick
        "3E81CB3F",
        &ExpectedState {
            a: Some(0x40),
            f: Some(0x10),
            ..ExpectedState::empty()
        },
    );
}

#[test]
fn swap_nibbles() {
    run_test(
        // LD A, 0xA5; SWAP A
        "3EA5CB37",
        &ExpectedState {
            a: Some(0x5A),
            f: Some(0x00),
            ..ExpectedState::empty()
        },
    );

    run_test(
        // LD A, 0x00; SWAP A
        "3E00CB37",
        &ExpectedState {
            a: Some(0x00),
            f: Some(0x80),
            ..ExpectedState::empty()
        },
    );

    run_test(
        // LD A, 0x12; SWAP A; SWAP A -- double swap restores A
        "3E12CB37CB37",
        &ExpectedState {
            a: Some(0x12),
            f: Some(0x00),
            ..ExpectedState::empty()
        },
    );
}

#[test]
fn shifts_through_indirect_hl() {
    run_test(
        // LD HL, 0xC000; LD (HL), 0xF0; SLA (HL)
        "2100C036F0CB26",
        &ExpectedState {
            f: Some(0x10),
            memory: hash_map! { 0xC000: 0xE0 },
            ..ExpectedState::empty()
        },
    );

    run_test(
        // LD HL, 0xC000; LD (HL), 0x01; SCF; RR (HL)
        "2100C0360137CB1E",
        &ExpectedState {
            f: Some(0x10),
            memory: hash_map! { 0xC000: 0x80 },
            ..ExpectedState::empty()
        },
    );

    run_test(
        // LD HL, 0xC000; LD (HL), 0x18; SWAP (HL)
        "2100C03618CB36",
        &ExpectedState {
            f: Some(0x00),
            memory: hash_map! { 0xC000: 0x81 },
            ..ExpectedState::empty()
        },
    );
}
