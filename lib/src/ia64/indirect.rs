//! Indirect register files: `cpuid`, `dbr`, `ibr`, `pkr`, `pmc`, `pmd`, `rr`.
//!
//! CPUID is readable only, so it has a getter and no setter.

use crosshdr_abi::arch::ia64::IndirectFile;
use crosshdr_abi::{IntrinError, IntrinResult};

use super::cpu::{bad_param, Ia64Cpu};
use super::insn::Insn;

macro_rules! define_indirect_get {
    ($($file:ident),* $(,)?) => {
        $crate::paste::paste! {
            $(
                #[inline]
                pub fn [<get_ $file:lower>]<C: Ia64Cpu + ?Sized>(cpu: &mut C, index: u64) -> u64 {
                    cpu.execute(Insn::MovFromInd { file: IndirectFile::$file, index })
                }
            )*
        }
    };
}

macro_rules! define_indirect_set {
    ($($file:ident),* $(,)?) => {
        $crate::paste::paste! {
            $(
                #[inline]
                pub fn [<set_ $file:lower>]<C: Ia64Cpu + ?Sized>(cpu: &mut C, index: u64, val: u64) {
                    cpu.execute(Insn::MovToInd { file: IndirectFile::$file, index, val });
                }
            )*
        }
    };
}

define_indirect_get!(Cpuid, Dbr, Ibr, Pkr, Pmc, Pmd, Rr);
define_indirect_set!(Dbr, Ibr, Pkr, Pmc, Pmd, Rr);

#[inline]
pub fn get_indirect<C: Ia64Cpu + ?Sized>(cpu: &mut C, file: IndirectFile, index: u64) -> u64 {
    cpu.execute(Insn::MovFromInd { file, index })
}

/// Write one entry of `file`. CPUID is rejected without emitting.
pub fn set_indirect<C: Ia64Cpu + ?Sized>(
    cpu: &mut C,
    file: IndirectFile,
    index: u64,
    val: u64,
) -> IntrinResult<()> {
    if !file.is_writable() {
        return Err(bad_param(cpu, IntrinError::BadSetRegParam, file.selector()));
    }
    cpu.execute(Insn::MovToInd { file, index, val });
    Ok(())
}

/// Read an indirect register by its `IA64_REG_INDR_*` selector.
pub fn getindreg<C: Ia64Cpu + ?Sized>(cpu: &mut C, selector: u32, index: u64) -> IntrinResult<u64> {
    match IndirectFile::from_selector(selector) {
        Some(file) => Ok(get_indirect(cpu, file, index)),
        None => Err(bad_param(cpu, IntrinError::BadGetRegParam, selector)),
    }
}

/// Write an indirect register by its `IA64_REG_INDR_*` selector.
pub fn setindreg<C: Ia64Cpu + ?Sized>(
    cpu: &mut C,
    selector: u32,
    index: u64,
    val: u64,
) -> IntrinResult<()> {
    match IndirectFile::from_selector(selector) {
        Some(file) => set_indirect(cpu, file, index, val),
        None => Err(bad_param(cpu, IntrinError::BadSetRegParam, selector)),
    }
}
