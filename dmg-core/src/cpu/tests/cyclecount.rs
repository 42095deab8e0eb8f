use crate::cpu::instructions::{
    Instruction as I, JumpCondition, ModifyTarget, ReadTarget, WriteTarget,
};
use crate::cpu::registers::{CpuRegister, CpuRegisterPair, CpuRegisters};

const R: ReadTarget = ReadTarget::Register(CpuRegister::B);
const W: WriteTarget = WriteTarget::Register(CpuRegister::B);
const M: ModifyTarget = ModifyTarget::Register(CpuRegister::B);

#[test]
fn validate_cycles_required() {
    let cr = CpuRegisters::new();

    // 8-bit load instructions
    assert_eq!(4, I::Load(W, R).cycles_required(&cr));
    assert_eq!(8, I::Load(W, ReadTarget::Immediate(0)).cycles_required(&cr));
    assert_eq!(8, I::Load(W, ReadTarget::IndirectHL).cycles_required(&cr));
    assert_eq!(8, I::Load(WriteTarget::IndirectHL, R).cycles_required(&cr));
    assert_eq!(
        12,
        I::Load(WriteTarget::IndirectHL, ReadTarget::Immediate(0)).cycles_required(&cr)
    );
    assert_eq!(
        8,
        I::Load(WriteTarget::Accumulator, ReadTarget::IndirectBC).cycles_required(&cr)
    );
    assert_eq!(
        8,
        I::Load(WriteTarget::IndirectDE, ReadTarget::Accumulator).cycles_required(&cr)
    );
    assert_eq!(
        8,
        I::Load(WriteTarget::IndirectHLInc, ReadTarget::Accumulator).cycles_required(&cr)
    );
    assert_eq!(
        8,
        I::Load(WriteTarget::Accumulator, ReadTarget::IndirectHLDec).cycles_required(&cr)
    );
    assert_eq!(
        16,
        I::Load(WriteTarget::Direct(0), ReadTarget::Accumulator).cycles_required(&cr)
    );
    assert_eq!(
        16,
        I::Load(WriteTarget::Accumulator, ReadTarget::Direct(0)).cycles_required(&cr)
    );
    assert_eq!(
        8,
        I::Load(WriteTarget::Accumulator, ReadTarget::FFIndirectC).cycles_required(&cr)
    );
    assert_eq!(
        12,
        I::Load(WriteTarget::FFDirect(0), ReadTarget::Accumulator).cycles_required(&cr)
    );
    assert_eq!(
        12,
        I::Load(WriteTarget::Accumulator, ReadTarget::FFDirect(0)).cycles_required(&cr)
    );

    // 16-bit load instructions
    assert_eq!(
        12,
        I::LoadRegisterPairImmediate(CpuRegisterPair::BC, 0).cycles_required(&cr)
    );
    assert_eq!(20, I::LoadDirectStackPointer(0).cycles_required(&cr));
    assert_eq!(8, I::LoadStackPointerHL.cycles_required(&cr));
    assert_eq!(16, I::PushStack(CpuRegisterPair::BC).cycles_required(&cr));
    assert_eq!(12, I::PopStack(CpuRegisterPair::BC).cycles_required(&cr));

    // 8-bit arithmetic/logical instructions
    assert_eq!(4, I::Add(R).cycles_required(&cr));
    assert_eq!(8, I::Add(ReadTarget::IndirectHL).cycles_required(&cr));
    assert_eq!(8, I::Add(ReadTarget::Immediate(0)).cycles_required(&cr));
    assert_eq!(4, I::AddWithCarry(R).cycles_required(&cr));
    assert_eq!(4, I::Subtract(R).cycles_required(&cr));
    assert_eq!(8, I::SubtractWithCarry(ReadTarget::Immediate(0)).cycles_required(&cr));
    assert_eq!(4, I::Compare(R).cycles_required(&cr));
    assert_eq!(8, I::Compare(ReadTarget::IndirectHL).cycles_required(&cr));
    assert_eq!(4, I::Increment(M).cycles_required(&cr));
    assert_eq!(12, I::Increment(ModifyTarget::IndirectHL).cycles_required(&cr));
    assert_eq!(4, I::Decrement(M).cycles_required(&cr));
    assert_eq!(12, I::Decrement(ModifyTarget::IndirectHL).cycles_required(&cr));
    assert_eq!(4, I::And(R).cycles_required(&cr));
    assert_eq!(8, I::Or(ReadTarget::Immediate(0)).cycles_required(&cr));
    assert_eq!(8, I::Xor(ReadTarget::IndirectHL).cycles_required(&cr));
    assert_eq!(4, I::ComplementCarryFlag.cycles_required(&cr));
    assert_eq!(4, I::SetCarryFlag.cycles_required(&cr));
    assert_eq!(4, I::DecimalAdjustAccumulator.cycles_required(&cr));
    assert_eq!(4, I::ComplementAccumulator.cycles_required(&cr));

    // 16-bit arithmetic instructions
    assert_eq!(8, I::AddHLRegister(CpuRegisterPair::BC).cycles_required(&cr));
    assert_eq!(8, I::IncRegisterPair(CpuRegisterPair::BC).cycles_required(&cr));
    assert_eq!(8, I::DecRegisterPair(CpuRegisterPair::BC).cycles_required(&cr));
    assert_eq!(16, I::AddSPImmediate(0).cycles_required(&cr));
    assert_eq!(12, I::LoadHLStackPointerOffset(0).cycles_required(&cr));

    // Bit rotate/shift instructions
    assert_eq!(4, I::RotateLeft(ModifyTarget::Accumulator).cycles_required(&cr));
    assert_eq!(
        4,
        I::RotateLeftThruCarry(ModifyTarget::Accumulator).cycles_required(&cr)
    );
    assert_eq!(4, I::RotateRight(ModifyTarget::Accumulator).cycles_required(&cr));
    assert_eq!(
        4,
        I::RotateRightThruCarry(ModifyTarget::Accumulator).cycles_required(&cr)
    );
    assert_eq!(8, I::RotateLeft(M).cycles_required(&cr));
    assert_eq!(16, I::RotateLeft(ModifyTarget::IndirectHL).cycles_required(&cr));
    assert_eq!(8, I::RotateRightThruCarry(M).cycles_required(&cr));
    assert_eq!(
        16,
        I::RotateRightThruCarry(ModifyTarget::IndirectHL).cycles_required(&cr)
    );
    assert_eq!(8, I::ShiftLeft(M).cycles_required(&cr));
    assert_eq!(16, I::ShiftLeft(ModifyTarget::IndirectHL).cycles_required(&cr));
    assert_eq!(8, I::ArithmeticShiftRight(M).cycles_required(&cr));
    assert_eq!(8, I::LogicalShiftRight(M).cycles_required(&cr));
    assert_eq!(16, I::LogicalShiftRight(ModifyTarget::IndirectHL).cycles_required(&cr));
    assert_eq!(8, I::Swap(M).cycles_required(&cr));
    assert_eq!(16, I::Swap(ModifyTarget::IndirectHL).cycles_required(&cr));

    // Single bit instructions; the (HL) forms all cost 16 here,
    // BIT included
    assert_eq!(8, I::TestBit(0, M).cycles_required(&cr));
    assert_eq!(16, I::TestBit(0, ModifyTarget::IndirectHL).cycles_required(&cr));
    assert_eq!(8, I::SetBit(0, M).cycles_required(&cr));
    assert_eq!(16, I::SetBit(0, ModifyTarget::IndirectHL).cycles_required(&cr));
    assert_eq!(8, I::ResetBit(0, M).cycles_required(&cr));
    assert_eq!(16, I::ResetBit(0, ModifyTarget::IndirectHL).cycles_required(&cr));

    // Unconditional control flow instructions
    assert_eq!(16, I::Jump(0).cycles_required(&cr));
    assert_eq!(4, I::JumpHL.cycles_required(&cr));
    assert_eq!(12, I::RelativeJump(0).cycles_required(&cr));
    assert_eq!(24, I::Call(0).cycles_required(&cr));
    assert_eq!(16, I::Return.cycles_required(&cr));
    assert_eq!(16, I::ReturnFromInterruptHandler.cycles_required(&cr));
    assert_eq!(16, I::RestartCall(0).cycles_required(&cr));
    assert_eq!(4, I::DisableInterrupts.cycles_required(&cr));
    assert_eq!(4, I::EnableInterrupts.cycles_required(&cr));
    assert_eq!(4, I::NoOp.cycles_required(&cr));
    assert_eq!(4, I::Halt.cycles_required(&cr));
    assert_eq!(4, I::Stop.cycles_required(&cr));
}

#[test]
fn conditional_cycles_depend_on_flags() {
    let mut all_flags_false = CpuRegisters::new();
    all_flags_false.flags = 0x00;

    assert_eq!(
        12,
        I::JumpCond(JumpCondition::Z, 0).cycles_required(&all_flags_false)
    );
    assert_eq!(
        16,
        I::JumpCond(JumpCondition::NZ, 0).cycles_required(&all_flags_false)
    );

    assert_eq!(
        8,
        I::RelativeJumpCond(JumpCondition::C, 0).cycles_required(&all_flags_false)
    );
    assert_eq!(
        12,
        I::RelativeJumpCond(JumpCondition::NC, 0).cycles_required(&all_flags_false)
    );

    assert_eq!(
        12,
        I::CallCond(JumpCondition::Z, 0).cycles_required(&all_flags_false)
    );
    assert_eq!(
        24,
        I::CallCond(JumpCondition::NZ, 0).cycles_required(&all_flags_false)
    );

    assert_eq!(
        8,
        I::ReturnCond(JumpCondition::Z).cycles_required(&all_flags_false)
    );
    assert_eq!(
        20,
        I::ReturnCond(JumpCondition::NZ).cycles_required(&all_flags_false)
    );
}
