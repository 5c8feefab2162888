//! Integer and floating-point data movement.

use crosshdr_abi::arch::ia64::Mux1Mode;
use crosshdr_abi::{IntrinError, IntrinResult};

use super::cpu::{bad_param, Ia64Cpu};
use super::insn::{FpLoad, FpStore, Insn};

#[inline]
pub fn mux1<C: Ia64Cpu + ?Sized>(cpu: &mut C, src: u64, mode: Mux1Mode) -> u64 {
    cpu.execute(Insn::Mux1 { mode, src })
}

pub fn mux1_raw<C: Ia64Cpu + ?Sized>(cpu: &mut C, src: u64, mode: u8) -> IntrinResult<u64> {
    match Mux1Mode::from_raw(mode) {
        Some(mode) => Ok(mux1(cpu, src, mode)),
        None => Err(bad_param(cpu, IntrinError::BadMux1Mode, u32::from(mode))),
    }
}

#[inline]
pub fn popcnt<C: Ia64Cpu + ?Sized>(cpu: &mut C, src: u64) -> u64 {
    cpu.execute(Insn::Popcnt { src })
}

/// Low 64 bits of `a:b` shifted right by `count`.
#[inline]
pub fn shrp<C: Ia64Cpu + ?Sized>(cpu: &mut C, a: u64, b: u64, count: u8) -> u64 {
    cpu.execute(Insn::Shrp { a, b, count: count & 0x3f })
}

/// Sign and biased exponent of `x` in register format.
#[inline]
pub fn getf_exp<C: Ia64Cpu + ?Sized>(cpu: &mut C, x: f64) -> u64 {
    cpu.execute(Insn::GetfExp { src: x.to_bits() })
}

#[inline]
pub fn nop<C: Ia64Cpu + ?Sized>(cpu: &mut C, imm: u32) {
    cpu.execute(Insn::Nop(imm));
}

/// Release store with a non-temporal hint.
#[inline]
pub fn st4_rel_nta<C: Ia64Cpu + ?Sized>(cpu: &mut C, addr: u64, val: u32) {
    cpu.execute(Insn::St4RelNta { addr, val: u64::from(val) });
}

macro_rules! define_fp_access {
    ($($load:ident => $lkind:ident, $store:ident => $skind:ident;)*) => {
        $(
            #[inline]
            pub fn $load<C: Ia64Cpu + ?Sized>(cpu: &mut C, regnum: u8, addr: u64) {
                cpu.execute(Insn::Ldf { kind: FpLoad::$lkind, fr: regnum, addr });
            }

            #[inline]
            pub fn $store<C: Ia64Cpu + ?Sized>(cpu: &mut C, addr: u64, regnum: u8) {
                cpu.execute(Insn::Stf { kind: FpStore::$skind, fr: regnum, addr });
            }
        )*
    };
}

define_fp_access! {
    ldfs => Single, stfs => Single;
    ldfd => Double, stfd => Double;
    ldfe => Extended, stfe => Extended;
    ldf8 => Eight, stf8 => Eight;
    ldf_fill => Fill, stf_spill => Spill;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ia64::{InsnTrace, SimCpu};
    use std::vec;

    #[test]
    fn text() {
        let mut cpu = InsnTrace::new();
        mux1(&mut cpu, 0, Mux1Mode::Rev);
        shrp(&mut cpu, 0, 0, 16);
        ldf_fill(&mut cpu, 6, 0);
        stf_spill(&mut cpu, 0, 6);
        st4_rel_nta(&mut cpu, 0, 0);
        nop(&mut cpu, 0);
        assert_eq!(
            cpu.render(),
            vec![
                "mux1 {res}={src},@rev",
                "shrp {res}={a},{b},16",
                "ldf.fill f6=[{addr}]",
                "stf.spill [{addr}]=f6",
                "st4.rel.nta [{addr}] = {val}",
                "nop 0",
            ]
        );
    }

    #[test]
    fn bad_mux1_mode_emits_nothing() {
        let mut cpu = InsnTrace::new();
        assert_eq!(mux1_raw(&mut cpu, 0, 3), Err(IntrinError::BadMux1Mode));
        assert!(cpu.is_empty());
        assert_eq!(cpu.reports().len(), 1);
    }

    #[test]
    fn sim_values() {
        let mut cpu = SimCpu::new();
        assert_eq!(popcnt(&mut cpu, 0xf0f0), 8);
        assert_eq!(mux1_raw(&mut cpu, 0x0102_0304_0506_0708, 11), Ok(0x0807_0605_0403_0201));
        assert_eq!(shrp(&mut cpu, 0xaa, 0, 8), 0xaa00_0000_0000_0000);
        assert_eq!(getf_exp(&mut cpu, 1.0), 0xffff);
        assert_eq!(getf_exp(&mut cpu, -0.5), (1 << 17) | 0xfffe);

        st4_rel_nta(&mut cpu, 0x10, 0xdead_beef);
        ldfs(&mut cpu, 8, 0x10);
        stfs(&mut cpu, 0x20, 8);
        assert_eq!(cpu.read_mem(0x20, crate::ia64::AccessSize::B4), 0xdead_beef);
    }
}
