//! `getreg`/`setreg`: selector → register class → one instruction.

use crosshdr_abi::arch::ia64::{GetReg, SetReg};
use crosshdr_abi::{IntrinError, IntrinResult};

use super::cpu::{bad_param, Ia64Cpu};
use super::insn::Insn;

/// The instruction that reads `class`.
pub const fn read_insn(class: GetReg) -> Insn {
    match class {
        GetReg::Gp => Insn::MovFromGp,
        GetReg::Ip => Insn::MovFromIp,
        GetReg::Psr => Insn::MovFromPsr,
        GetReg::Tp => Insn::ReadTp,
        GetReg::Ar(ar) => Insn::MovFromAr { ar },
        GetReg::Cr(cr) => Insn::MovFromCr { cr },
        GetReg::Sp => Insn::MovFromSp,
    }
}

/// The instruction that writes `val` to `class`.
pub const fn write_insn(class: SetReg, val: u64) -> Insn {
    match class {
        SetReg::PsrL => Insn::MovToPsrL { val },
        SetReg::Ar(ar) => Insn::MovToAr { ar, val },
        SetReg::Cr(cr) => Insn::MovToCr { cr, val },
        SetReg::Sp => Insn::MovToSp { val },
        SetReg::Gp => Insn::MovToGp { val },
    }
}

#[inline]
pub fn read_class<C: Ia64Cpu + ?Sized>(cpu: &mut C, class: GetReg) -> u64 {
    cpu.execute(read_insn(class))
}

#[inline]
pub fn write_class<C: Ia64Cpu + ?Sized>(cpu: &mut C, class: SetReg, val: u64) {
    cpu.execute(write_insn(class, val));
}

/// Read the register named by `selector`.
///
/// A selector with no readable class is reported once through
/// [`Ia64Cpu::report_bad_param`] and nothing is executed.
pub fn getreg<C: Ia64Cpu + ?Sized>(cpu: &mut C, selector: u32) -> IntrinResult<u64> {
    match GetReg::classify(selector) {
        Some(class) => Ok(read_class(cpu, class)),
        None => Err(bad_param(cpu, IntrinError::BadGetRegParam, selector)),
    }
}

/// Write `val` to the register named by `selector`.
pub fn setreg<C: Ia64Cpu + ?Sized>(cpu: &mut C, selector: u32, val: u64) -> IntrinResult<()> {
    match SetReg::classify(selector) {
        Some(class) => {
            write_class(cpu, class, val);
            Ok(())
        }
        None => Err(bad_param(cpu, IntrinError::BadSetRegParam, selector)),
    }
}

/// [`getreg`] with the selector fixed at compile time. An unreadable
/// selector fails the build.
#[inline]
pub fn getreg_const<const R: u32>(cpu: &mut (impl Ia64Cpu + ?Sized)) -> u64 {
    let class = const {
        match GetReg::classify(R) {
            Some(class) => class,
            None => panic!("getreg: selector has no readable class"),
        }
    };
    read_class(cpu, class)
}

/// [`setreg`] with the selector fixed at compile time.
#[inline]
pub fn setreg_const<const R: u32>(cpu: &mut (impl Ia64Cpu + ?Sized), val: u64) {
    let class = const {
        match SetReg::classify(R) {
            Some(class) => class,
            None => panic!("setreg: selector has no writable class"),
        }
    };
    write_class(cpu, class, val);
}
