use crosshdr_abi::arch::ia64::{HintMode, PsrBits};
use crosshdr_abi::{IntrinError, IntrinResult};

use super::cpu::{bad_param, Ia64Cpu};
use super::insn::Insn;

/// Set system mask bits. Bits above the 24-bit immediate are ignored.
#[inline]
pub fn ssm<C: Ia64Cpu + ?Sized>(cpu: &mut C, mask: PsrBits) {
    cpu.execute(Insn::Ssm(mask));
}

/// Reset system mask bits.
#[inline]
pub fn rsm<C: Ia64Cpu + ?Sized>(cpu: &mut C, mask: PsrBits) {
    cpu.execute(Insn::Rsm(mask));
}

/// Set user mask bits.
#[inline]
pub fn sum<C: Ia64Cpu + ?Sized>(cpu: &mut C, mask: PsrBits) {
    cpu.execute(Insn::Sum(mask));
}

/// Reset user mask bits.
#[inline]
pub fn rum<C: Ia64Cpu + ?Sized>(cpu: &mut C, mask: PsrBits) {
    cpu.execute(Insn::Rum(mask));
}

/// Re-enable interrupts if `flag` is non-zero, disable them otherwise.
#[inline]
pub fn local_irq_restore<C: Ia64Cpu + ?Sized>(cpu: &mut C, flag: u64) {
    cpu.execute(Insn::IrqRestore { flag });
}

/// Flush dirty stacked registers to the backing store.
#[inline]
pub fn flushrs<C: Ia64Cpu + ?Sized>(cpu: &mut C) {
    cpu.execute(Insn::Flushrs);
}

#[inline]
pub fn loadrs<C: Ia64Cpu + ?Sized>(cpu: &mut C) {
    cpu.execute(Insn::Loadrs);
}

#[inline]
pub fn hint<C: Ia64Cpu + ?Sized>(cpu: &mut C, mode: HintMode) {
    cpu.execute(Insn::Hint(mode));
}

pub fn hint_raw<C: Ia64Cpu + ?Sized>(cpu: &mut C, mode: u8) -> IntrinResult<()> {
    match HintMode::from_raw(mode) {
        Some(mode) => {
            hint(cpu, mode);
            Ok(())
        }
        None => Err(bad_param(cpu, IntrinError::BadHintMode, u32::from(mode))),
    }
}
