//! Atomic memory operations.
//!
//! `fetchadd` only encodes the increments in [`FetchAddInc`]. `cmpxchg`
//! compares against `ar.ccv`, so every compare-exchange is two instructions:
//! load `ar.ccv`, then the exchange.

use crosshdr_abi::arch::ia64::FetchAddInc;

use super::cpu::Ia64Cpu;
use super::insn::{AccessSize, Insn, Sem};

macro_rules! define_fetchadd {
    ($($bits:literal => $size:ident),* $(,)?) => {
        $crate::paste::paste! {
            $(
                /// Add `inc` to the value at `addr`, returning the old value.
                #[inline]
                pub fn [<fetchadd $bits _acq>]<C: Ia64Cpu + ?Sized>(cpu: &mut C, inc: FetchAddInc, addr: u64) -> u64 {
                    cpu.execute(Insn::FetchAdd { size: AccessSize::$size, sem: Sem::Acq, addr, inc })
                }

                #[inline]
                pub fn [<fetchadd $bits _rel>]<C: Ia64Cpu + ?Sized>(cpu: &mut C, inc: FetchAddInc, addr: u64) -> u64 {
                    cpu.execute(Insn::FetchAdd { size: AccessSize::$size, sem: Sem::Rel, addr, inc })
                }
            )*
        }
    };
}

macro_rules! define_xchg {
    ($($bits:literal => $size:ident),* $(,)?) => {
        $crate::paste::paste! {
            $(
                /// Store `val` at `addr`, returning the old value. Acquire semantics.
                #[inline]
                pub fn [<xchg $bits>]<C: Ia64Cpu + ?Sized>(cpu: &mut C, addr: u64, val: u64) -> u64 {
                    cpu.execute(Insn::Xchg { size: AccessSize::$size, addr, val })
                }
            )*
        }
    };
}

macro_rules! define_cmpxchg {
    ($($bits:literal => $size:ident),* $(,)?) => {
        $crate::paste::paste! {
            $(
                /// Store `new` at `addr` if it holds `old`. Returns the value found.
                #[inline]
                pub fn [<cmpxchg $bits _acq>]<C: Ia64Cpu + ?Sized>(cpu: &mut C, addr: u64, new: u64, old: u64) -> u64 {
                    cmpxchg(cpu, AccessSize::$size, Sem::Acq, addr, new, old)
                }

                #[inline]
                pub fn [<cmpxchg $bits _rel>]<C: Ia64Cpu + ?Sized>(cpu: &mut C, addr: u64, new: u64, old: u64) -> u64 {
                    cmpxchg(cpu, AccessSize::$size, Sem::Rel, addr, new, old)
                }
            )*
        }
    };
}

define_fetchadd!(4 => B4, 8 => B8);
define_xchg!(1 => B1, 2 => B2, 4 => B4, 8 => B8);
define_cmpxchg!(1 => B1, 2 => B2, 4 => B4, 8 => B8);

fn cmpxchg<C: Ia64Cpu + ?Sized>(
    cpu: &mut C,
    size: AccessSize,
    sem: Sem,
    addr: u64,
    new: u64,
    old: u64,
) -> u64 {
    cpu.execute(Insn::MovToCcv { val: old });
    cpu.execute(Insn::Cmpxchg { size, sem, addr, new })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ia64::{InsnTrace, SimCpu};
    use std::vec;

    #[test]
    fn cmpxchg_loads_ccv_first() {
        let mut cpu = InsnTrace::new();
        cmpxchg4_acq(&mut cpu, 0x100, 2, 1);
        assert_eq!(
            cpu.render(),
            vec!["mov ar.ccv={val};;", "cmpxchg4.acq {res}=[{addr}],{new},ar.ccv"]
        );
        assert_eq!(cpu.insns()[0], Insn::MovToCcv { val: 1 });
    }

    #[test]
    fn fetchadd_text() {
        let mut cpu = InsnTrace::new();
        fetchadd8_rel(&mut cpu, FetchAddInc::Minus16, 0);
        xchg1(&mut cpu, 0, 0);
        assert_eq!(
            cpu.render(),
            vec!["fetchadd8.rel {res}=[{addr}],-16", "xchg1 {res}=[{addr}],{val}"]
        );
    }

    #[test]
    fn sim_semantics() {
        let mut cpu = SimCpu::new();
        cpu.write_mem(0x80, AccessSize::B8, 10);
        assert_eq!(fetchadd8_acq(&mut cpu, FetchAddInc::Plus4, 0x80), 10);
        assert_eq!(fetchadd8_acq(&mut cpu, FetchAddInc::Minus1, 0x80), 14);
        assert_eq!(cpu.read_mem(0x80, AccessSize::B8), 13);

        assert_eq!(cmpxchg8_rel(&mut cpu, 0x80, 99, 12), 13);
        assert_eq!(cpu.read_mem(0x80, AccessSize::B8), 13);
        assert_eq!(cmpxchg8_rel(&mut cpu, 0x80, 99, 13), 13);
        assert_eq!(cpu.read_mem(0x80, AccessSize::B8), 99);

        assert_eq!(xchg2(&mut cpu, 0x80, 0xbeef), 99);
        assert_eq!(cpu.read_mem(0x80, AccessSize::B8), 0xbeef);
        // ar.ccv is compared in full against the zero-extended byte.
        assert_eq!(cmpxchg1_acq(&mut cpu, 0x80, 0x11, 0x1ef), 0xef);
        assert_eq!(cpu.read_mem(0x80, AccessSize::B2), 0xbeef);
        assert_eq!(cmpxchg1_acq(&mut cpu, 0x80, 0x11, 0xef), 0xef);
        assert_eq!(cpu.read_mem(0x80, AccessSize::B2), 0xbe11);
    }

    #[test]
    fn ccv_carries_old_unmasked() {
        let mut cpu = InsnTrace::new();
        cmpxchg1_acq(&mut cpu, 0x80, 0x11, 0x1ef);
        assert_eq!(cpu.insns()[0], Insn::MovToCcv { val: 0x1ef });
    }
}
