//! Cache and TLB maintenance.

use super::cpu::Ia64Cpu;
use super::insn::Insn;

/// Global purge of the translation cache. Always followed by a data
/// serialization point.
#[inline]
pub fn ptcga<C: Ia64Cpu + ?Sized>(cpu: &mut C, addr: u64, size: u64) {
    cpu.execute(Insn::PtcGa { addr, size });
    cpu.execute(Insn::SerializeData);
}

/// Local purge of the translation cache. Always followed by a data
/// serialization point.
#[inline]
pub fn ptcl<C: Ia64Cpu + ?Sized>(cpu: &mut C, addr: u64, size: u64) {
    cpu.execute(Insn::PtcL { addr, size });
    cpu.execute(Insn::SerializeData);
}

/// Purge the whole local translation cache.
#[inline]
pub fn ptce<C: Ia64Cpu + ?Sized>(cpu: &mut C, addr: u64) {
    cpu.execute(Insn::PtcE { addr });
}

#[inline]
pub fn ptri<C: Ia64Cpu + ?Sized>(cpu: &mut C, addr: u64, size: u64) {
    cpu.execute(Insn::PtrI { addr, size });
}

#[inline]
pub fn ptrd<C: Ia64Cpu + ?Sized>(cpu: &mut C, addr: u64, size: u64) {
    cpu.execute(Insn::PtrD { addr, size });
}

/// Flush the cache line containing `addr`.
#[inline]
pub fn fc<C: Ia64Cpu + ?Sized>(cpu: &mut C, addr: u64) {
    cpu.execute(Insn::Fc { addr });
}

/// Insert into the instruction translation cache at `cr.ifa`/`cr.itir`.
#[inline]
pub fn itci<C: Ia64Cpu + ?Sized>(cpu: &mut C, pte: u64) {
    cpu.execute(Insn::ItcI { pte });
}

#[inline]
pub fn itcd<C: Ia64Cpu + ?Sized>(cpu: &mut C, pte: u64) {
    cpu.execute(Insn::ItcD { pte });
}

/// Insert into instruction translation register `slot`.
#[inline]
pub fn itri<C: Ia64Cpu + ?Sized>(cpu: &mut C, slot: u64, pte: u64) {
    cpu.execute(Insn::ItrI { slot, pte });
}

#[inline]
pub fn itrd<C: Ia64Cpu + ?Sized>(cpu: &mut C, slot: u64, pte: u64) {
    cpu.execute(Insn::ItrD { slot, pte });
}

/// Translate a virtual address to physical.
#[inline]
pub fn tpa<C: Ia64Cpu + ?Sized>(cpu: &mut C, addr: u64) -> u64 {
    cpu.execute(Insn::Tpa { addr })
}

/// VHPT entry address for `addr`.
#[inline]
pub fn thash<C: Ia64Cpu + ?Sized>(cpu: &mut C, addr: u64) -> u64 {
    cpu.execute(Insn::Thash { addr })
}

#[inline]
pub fn ttag<C: Ia64Cpu + ?Sized>(cpu: &mut C, addr: u64) -> u64 {
    cpu.execute(Insn::Ttag { addr })
}

/// Invalidate the whole ALAT.
#[inline]
pub fn invala<C: Ia64Cpu + ?Sized>(cpu: &mut C) {
    cpu.execute(Insn::Invala);
}

#[inline]
pub fn invala_gr<C: Ia64Cpu + ?Sized>(cpu: &mut C, regno: u8) {
    cpu.execute(Insn::InvalaGr(regno));
}

#[inline]
pub fn invala_fr<C: Ia64Cpu + ?Sized>(cpu: &mut C, regno: u8) {
    cpu.execute(Insn::InvalaFr(regno));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ia64::{setreg, InsnTrace, SimCpu};
    use crosshdr_abi::arch::ia64::regs::{IA64_REG_CR_IFA, IA64_REG_CR_ITIR, IA64_REG_CR_PTA};
    use std::vec;

    #[test]
    fn purges_are_followed_by_serialize_data() {
        let mut cpu = InsnTrace::new();
        ptcga(&mut cpu, 0x4000, 14 << 2);
        ptcl(&mut cpu, 0x8000, 14 << 2);
        assert_eq!(
            cpu.render(),
            vec!["ptc.ga {addr},{size}", ".serialize.data", "ptc.l {addr},{size}", ".serialize.data"]
        );
    }

    #[test]
    fn insert_text() {
        let mut cpu = InsnTrace::new();
        itri(&mut cpu, 1, 0);
        itrd(&mut cpu, 2, 0);
        itci(&mut cpu, 0);
        invala_gr(&mut cpu, 14);
        invala_fr(&mut cpu, 6);
        assert_eq!(
            cpu.render(),
            vec!["itr.i itr[{slot}]={pte}", "itr.d dtr[{slot}]={pte}", "itc.i {pte};;", "invala.e r14", "invala.e f6"]
        );
    }

    #[test]
    fn sim_translate_and_hash() {
        let mut cpu = SimCpu::new();
        setreg(&mut cpu, IA64_REG_CR_ITIR, 14 << 2).unwrap();
        setreg(&mut cpu, IA64_REG_CR_IFA, 0x2000_0000_0000_8000).unwrap();
        itcd(&mut cpu, 0x0000_0000_0050_0661);
        assert_eq!(tpa(&mut cpu, 0x2000_0000_0000_8010), 0x50_0010);

        // 32KB VHPT at 0x100000, walker enabled.
        setreg(&mut cpu, IA64_REG_CR_PTA, 0x10_0000 | (15 << 2) | 1).unwrap();
        let hash = thash(&mut cpu, 0x2000_0000_0000_8000);
        assert_eq!(hash, 0x2000_0000_0010_0010);
        assert_ne!(ttag(&mut cpu, 0x8000), ttag(&mut cpu, 0xc000));

        ptcga(&mut cpu, 0x2000_0000_0000_8000, 14 << 2);
        assert!(cpu.tlb().is_empty());
    }
}
