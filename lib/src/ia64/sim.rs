//! Deterministic software model of the ia64 state the intrinsics touch.
//!
//! Modeled: the special registers, the application and control register
//! files, floating-point registers as raw memory images, the indirect files,
//! byte-addressed little-endian memory, PSR masks and the TLB (insert, purge,
//! translate). Caches, the ALAT and the register stack engine are not modeled,
//! so their maintenance instructions have no effect.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crosshdr_abi::arch::ia64::regs::{
    ar_index, cr_index, AR_BSP, AR_CCV, AR_ITC, CR_IRR0, CR_IRR3, CR_IVR, CR_PTA,
    IA64_REG_AR_BSPSTORE, IA64_REG_CR_IFA, IA64_REG_CR_ITIR,
};
use crosshdr_abi::arch::ia64::{IndirectFile, PsrBits};
use crosshdr_abi::IntrinError;

use super::cpu::{log_bad_param, Ia64Cpu};
use super::insn::{AccessSize, Insn};
use crate::{klog_debug, klog_warn};

const AR_BSPSTORE: u8 = ar_index(IA64_REG_AR_BSPSTORE);
const CR_IFA: u8 = cr_index(IA64_REG_CR_IFA);
const CR_ITIR: u8 = cr_index(IA64_REG_CR_ITIR);

const REGION_MASK: u64 = 0xe000_0000_0000_0000;
const REGION_SHIFT: u32 = 61;
/// Region 7 is identity mapped by the kernel.
const IDENTITY_REGION: u64 = 7;
/// Physical page number field of a PTE.
const PTE_PPN_MASK: u64 = 0x0003_ffff_ffff_f000;
/// Page shift used when a region register carries none.
const DEFAULT_PAGE_SHIFT: u32 = 14;
/// `ivr` value when no interrupt is pending.
const SPURIOUS_VECTOR: u64 = 15;

/// Which TLB an entry lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TlbSide {
    Instruction,
    Data,
}

/// One translation. `slot` is set for translation registers, which purges of
/// the translation cache leave alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TlbEntry {
    pub side: TlbSide,
    pub vaddr: u64,
    pub page_shift: u32,
    pub pte: u64,
    pub slot: Option<u64>,
}

impl TlbEntry {
    #[inline]
    pub fn page_mask(&self) -> u64 {
        page_mask(self.page_shift)
    }

    #[inline]
    pub fn contains(&self, addr: u64) -> bool {
        addr & !self.page_mask() == self.vaddr
    }

    fn overlaps(&self, base: u64, shift: u32) -> bool {
        let mask = page_mask(shift.max(self.page_shift));
        self.vaddr & !mask == base & !mask
    }

    fn translate(&self, addr: u64) -> u64 {
        (self.pte & PTE_PPN_MASK & !self.page_mask()) | (addr & self.page_mask())
    }
}

#[inline]
fn page_mask(shift: u32) -> u64 {
    if shift >= 64 { u64::MAX } else { (1u64 << shift) - 1 }
}

/// An instruction the model refused to carry out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimFault {
    /// Write to a read-only register or file, or an out-of-range register.
    IllegalOperation(Insn),
    /// `tpa` of an address with no data translation.
    DataTlbMiss(u64),
}

#[derive(Debug, Clone)]
pub struct SimCpu {
    ip: u64,
    psr: u64,
    gp: u64,
    sp: u64,
    tp: u64,
    ar: [u64; 128],
    cr: [u64; 128],
    fr: [u128; 128],
    indirect: BTreeMap<(IndirectFile, u64), u64>,
    mem: BTreeMap<u64, u8>,
    tlb: Vec<TlbEntry>,
    itc_step: u64,
    faults: Vec<SimFault>,
    reports: Vec<(IntrinError, u32)>,
}

impl Default for SimCpu {
    fn default() -> Self {
        Self::new()
    }
}

impl SimCpu {
    pub fn new() -> Self {
        let mut indirect = BTreeMap::new();
        let vendor = *b"GenuineIntel\0\0\0\0";
        let mut lo = [0u8; 8];
        let mut hi = [0u8; 8];
        lo.copy_from_slice(&vendor[..8]);
        hi.copy_from_slice(&vendor[8..]);
        indirect.insert((IndirectFile::Cpuid, 0), u64::from_le_bytes(lo));
        indirect.insert((IndirectFile::Cpuid, 1), u64::from_le_bytes(hi));
        // Index of the last implemented CPUID register.
        indirect.insert((IndirectFile::Cpuid, 3), 4);

        let mut fr = [0u128; 128];
        fr[1] = u128::from(1.0f64.to_bits());

        Self {
            ip: 0xa000_0000_0001_0000,
            psr: (PsrBits::IC | PsrBits::DT | PsrBits::IT | PsrBits::RT).bits(),
            gp: 0,
            sp: 0,
            tp: 0,
            ar: [0; 128],
            cr: [0; 128],
            fr,
            indirect,
            mem: BTreeMap::new(),
            tlb: Vec::new(),
            itc_step: 1,
            faults: Vec::new(),
            reports: Vec::new(),
        }
    }

    pub fn ip(&self) -> u64 {
        self.ip
    }

    pub fn set_ip(&mut self, ip: u64) {
        self.ip = ip;
    }

    pub fn psr(&self) -> PsrBits {
        PsrBits::from_bits_retain(self.psr)
    }

    pub fn gp(&self) -> u64 {
        self.gp
    }

    pub fn sp(&self) -> u64 {
        self.sp
    }

    pub fn tp(&self) -> u64 {
        self.tp
    }

    /// r13 has no setreg form; the kernel loads it on entry.
    pub fn set_tp(&mut self, tp: u64) {
        self.tp = tp;
    }

    pub fn ar(&self, n: u8) -> u64 {
        self.ar.get(usize::from(n)).copied().unwrap_or(0)
    }

    pub fn cr(&self, n: u8) -> u64 {
        self.cr.get(usize::from(n)).copied().unwrap_or(0)
    }

    /// Raw register image of `fN`.
    pub fn fr(&self, n: u8) -> u128 {
        self.fr.get(usize::from(n)).copied().unwrap_or(0)
    }

    /// Load state the hardware sets on its own, such as `ar.bsp` or pending
    /// interrupts in `cr.irr0-3`.
    pub fn preset_ar(&mut self, n: u8, val: u64) {
        if let Some(slot) = self.ar.get_mut(usize::from(n)) {
            *slot = val;
        }
    }

    pub fn preset_cr(&mut self, n: u8, val: u64) {
        if let Some(slot) = self.cr.get_mut(usize::from(n)) {
            *slot = val;
        }
    }

    pub fn indirect(&self, file: IndirectFile, index: u64) -> u64 {
        self.indirect.get(&(file, index)).copied().unwrap_or(0)
    }

    /// Amount `ar.itc` advances per read.
    pub fn set_itc_step(&mut self, step: u64) {
        self.itc_step = step;
    }

    pub fn read_mem(&self, addr: u64, size: AccessSize) -> u64 {
        let mut bytes = [0u8; 8];
        for (i, b) in bytes.iter_mut().take(size.bytes()).enumerate() {
            *b = self.mem.get(&addr.wrapping_add(i as u64)).copied().unwrap_or(0);
        }
        u64::from_le_bytes(bytes)
    }

    pub fn write_mem(&mut self, addr: u64, size: AccessSize, val: u64) {
        self.write_bytes(addr, &val.to_le_bytes()[..size.bytes()]);
    }

    pub fn write_bytes(&mut self, addr: u64, bytes: &[u8]) {
        for (i, b) in bytes.iter().enumerate() {
            self.mem.insert(addr.wrapping_add(i as u64), *b);
        }
    }

    pub fn tlb(&self) -> &[TlbEntry] {
        &self.tlb
    }

    pub fn faults(&self) -> &[SimFault] {
        &self.faults
    }

    pub fn reports(&self) -> &[(IntrinError, u32)] {
        &self.reports
    }

    fn fault(&mut self, fault: SimFault) -> u64 {
        klog_warn!("ia64 sim: {:?}", fault);
        self.faults.push(fault);
        0
    }

    fn read_bytes128(&self, addr: u64, len: usize) -> u128 {
        let mut bytes = [0u8; 16];
        for (i, b) in bytes.iter_mut().take(len).enumerate() {
            *b = self.mem.get(&addr.wrapping_add(i as u64)).copied().unwrap_or(0);
        }
        u128::from_le_bytes(bytes)
    }

    fn region_page_shift(&self, addr: u64) -> u32 {
        let rr = self.indirect(IndirectFile::Rr, addr >> REGION_SHIFT);
        match ((rr >> 2) & 0x3f) as u32 {
            0 => DEFAULT_PAGE_SHIFT,
            ps => ps,
        }
    }

    fn region_id(&self, addr: u64) -> u64 {
        (self.indirect(IndirectFile::Rr, addr >> REGION_SHIFT) >> 8) & 0xff_ffff
    }

    fn read_ar(&mut self, ar: u8) -> Option<u64> {
        let idx = usize::from(ar);
        let val = *self.ar.get(idx)?;
        if ar == AR_ITC {
            self.ar[idx] = val.wrapping_add(self.itc_step);
        }
        Some(val)
    }

    fn read_cr(&self, cr: u8) -> Option<u64> {
        if cr == CR_IVR {
            return Some(self.pending_vector());
        }
        self.cr.get(usize::from(cr)).copied()
    }

    /// Highest pending vector in `irr0-3`.
    fn pending_vector(&self) -> u64 {
        (CR_IRR0..=CR_IRR3)
            .rev()
            .map(|cr| (cr - CR_IRR0, self.cr[usize::from(cr)]))
            .find(|&(_, irr)| irr != 0)
            .map_or(SPURIOUS_VECTOR, |(word, irr)| {
                u64::from(word) * 64 + u64::from(63 - irr.leading_zeros())
            })
    }

    fn insert_tlb(&mut self, side: TlbSide, pte: u64, slot: Option<u64>) {
        let page_shift = ((self.cr[usize::from(CR_ITIR)] >> 2) & 0x3f) as u32;
        let vaddr = self.cr[usize::from(CR_IFA)] & !page_mask(page_shift);
        if slot.is_some() {
            self.tlb.retain(|e| !(e.side == side && e.slot == slot));
        }
        self.tlb.retain(|e| !(e.side == side && e.slot.is_none() && e.overlaps(vaddr, page_shift)));
        klog_debug!("ia64 sim: insert {:?} {:#x}/{} pte {:#x}", side, vaddr, page_shift, pte);
        self.tlb.push(TlbEntry { side, vaddr, page_shift, pte, slot });
    }

    /// `size` uses the purge operand encoding: page shift in bits 2-7.
    fn purge_tlb(&mut self, addr: u64, size: u64, pinned: bool, side: Option<TlbSide>) {
        let shift = ((size >> 2) & 0x3f) as u32;
        self.tlb.retain(|e| {
            let hit = e.slot.is_some() == pinned
                && side.is_none_or(|s| s == e.side)
                && e.overlaps(addr, shift);
            !hit
        });
    }

    fn tpa(&mut self, addr: u64) -> u64 {
        if let Some(entry) = self
            .tlb
            .iter()
            .rev()
            .find(|e| e.side == TlbSide::Data && e.contains(addr))
        {
            return entry.translate(addr);
        }
        if addr >> REGION_SHIFT == IDENTITY_REGION {
            return addr & !REGION_MASK;
        }
        self.fault(SimFault::DataTlbMiss(addr))
    }

    /// Short-format VHPT entry address.
    fn thash(&self, addr: u64) -> u64 {
        let pta = self.cr[usize::from(CR_PTA)];
        let size = ((pta >> 2) & 0x3f).clamp(15, 61) as u32;
        let table_mask = page_mask(size);
        let base = pta & !REGION_MASK & !table_mask;
        let vpn = (addr & !REGION_MASK) >> self.region_page_shift(addr);
        (addr & REGION_MASK) | base | ((vpn << 3) & table_mask)
    }

    /// Model tag: virtual page number folded with the region id.
    fn ttag(&self, addr: u64) -> u64 {
        let vpn = (addr & !REGION_MASK) >> self.region_page_shift(addr);
        (vpn ^ (self.region_id(addr) << 39)) & !(1 << 63)
    }

    fn set_psr_bits(&mut self, mask: u64, on: bool) {
        if on {
            self.psr |= mask;
        } else {
            self.psr &= !mask;
        }
    }
}

/// Exponent field of `getf.exp`: 17-bit register-format exponent (bias 65535)
/// with the sign in bit 17. `src` is an IEEE double.
pub(crate) fn register_exponent(src: u64) -> u64 {
    const REG_BIAS: u64 = 0xffff;
    const DBL_BIAS: u64 = 0x3ff;
    let sign = (src >> 63) << 17;
    let exp = (src >> 52) & 0x7ff;
    let mant = src & ((1 << 52) - 1);
    let field = match exp {
        0x7ff => 0x1ffff,
        0 if mant == 0 => 0,
        // Double denormals keep the minimum double exponent, unnormalized.
        0 => REG_BIAS - DBL_BIAS + 1,
        e => e + REG_BIAS - DBL_BIAS,
    };
    sign | field
}

pub(crate) fn shift_pair(a: u64, b: u64, count: u8) -> u64 {
    match count & 0x3f {
        0 => b,
        n => (b >> n) | (a << (64 - n)),
    }
}

pub(crate) fn permute_bytes(src: u64, perm: [u8; 8]) -> u64 {
    let bytes = src.to_le_bytes();
    let mut out = [0u8; 8];
    for (dst, &from) in out.iter_mut().zip(perm.iter()) {
        *dst = bytes[usize::from(from & 7)];
    }
    u64::from_le_bytes(out)
}

impl Ia64Cpu for SimCpu {
    fn execute(&mut self, insn: Insn) -> u64 {
        match insn {
            Insn::Stop
            | Insn::InvalaGr(_)
            | Insn::InvalaFr(_)
            | Insn::Invala
            | Insn::Loadrs
            | Insn::Hint(_)
            | Insn::Nop(_)
            | Insn::Mf
            | Insn::MfA
            | Insn::SrlzI
            | Insn::SrlzD
            | Insn::SyncI
            | Insn::SerializeData
            | Insn::SerializeInstruction
            | Insn::Fc { .. }
            | Insn::Lfetch { .. } => 0,
            Insn::Flushrs => {
                self.ar[usize::from(AR_BSPSTORE)] = self.ar[usize::from(AR_BSP)];
                0
            }

            Insn::MovToPsrL { val } => {
                self.psr = (self.psr & !PsrBits::LOWER_HALF) | (val & PsrBits::LOWER_HALF);
                0
            }
            Insn::MovToAr { ar, .. } if ar == AR_BSP => {
                self.fault(SimFault::IllegalOperation(insn))
            }
            Insn::MovToAr { ar, val } => match self.ar.get_mut(usize::from(ar)) {
                Some(slot) => {
                    *slot = val;
                    0
                }
                None => self.fault(SimFault::IllegalOperation(insn)),
            },
            Insn::MovToCr { cr, .. } if cr == CR_IVR || (CR_IRR0..=CR_IRR3).contains(&cr) => {
                self.fault(SimFault::IllegalOperation(insn))
            }
            Insn::MovToCr { cr, val } => match self.cr.get_mut(usize::from(cr)) {
                Some(slot) => {
                    *slot = val;
                    0
                }
                None => self.fault(SimFault::IllegalOperation(insn)),
            },
            Insn::MovToSp { val } => {
                self.sp = val;
                0
            }
            Insn::MovToGp { val } => {
                self.gp = val;
                0
            }
            Insn::MovFromGp => self.gp,
            Insn::MovFromIp => self.ip,
            Insn::MovFromPsr => self.psr,
            Insn::ReadTp => self.tp,
            Insn::MovFromAr { ar } => match self.read_ar(ar) {
                Some(val) => val,
                None => self.fault(SimFault::IllegalOperation(insn)),
            },
            Insn::MovFromCr { cr } => match self.read_cr(cr) {
                Some(val) => val,
                None => self.fault(SimFault::IllegalOperation(insn)),
            },
            Insn::MovFromSp => self.sp,

            Insn::Mux1 { mode, src } => permute_bytes(src, mode.permutation()),
            Insn::Popcnt { src } => u64::from(src.count_ones()),
            Insn::GetfExp { src } => register_exponent(src),
            Insn::Shrp { a, b, count } => shift_pair(a, b, count),

            Insn::Ldf { fr, .. } if fr < 2 => self.fault(SimFault::IllegalOperation(insn)),
            Insn::Ldf { kind, fr, addr } => {
                let image = self.read_bytes128(addr, kind.bytes());
                match self.fr.get_mut(usize::from(fr)) {
                    Some(slot) => {
                        *slot = image;
                        0
                    }
                    None => self.fault(SimFault::IllegalOperation(insn)),
                }
            }
            Insn::Stf { kind, fr, addr } => match self.fr.get(usize::from(fr)).copied() {
                Some(image) => {
                    self.write_bytes(addr, &image.to_le_bytes()[..kind.bytes()]);
                    0
                }
                None => self.fault(SimFault::IllegalOperation(insn)),
            },
            Insn::St4RelNta { addr, val } => {
                self.write_mem(addr, AccessSize::B4, val);
                0
            }

            Insn::FetchAdd { size, addr, inc, .. } => {
                let old = self.read_mem(addr, size);
                self.write_mem(addr, size, old.wrapping_add(inc.get() as u64) & size.mask());
                old
            }
            Insn::Xchg { size, addr, val } => {
                let old = self.read_mem(addr, size);
                self.write_mem(addr, size, val);
                old
            }
            Insn::MovToCcv { val } => {
                self.ar[usize::from(AR_CCV)] = val;
                0
            }
            Insn::Cmpxchg { size, addr, new, .. } => {
                let old = self.read_mem(addr, size);
                if old == self.ar[usize::from(AR_CCV)] {
                    self.write_mem(addr, size, new);
                }
                old
            }

            Insn::Thash { addr } => self.thash(addr),
            Insn::Ttag { addr } => self.ttag(addr),
            Insn::Tpa { addr } => self.tpa(addr),
            Insn::ItcI { pte } => {
                self.insert_tlb(TlbSide::Instruction, pte, None);
                0
            }
            Insn::ItcD { pte } => {
                self.insert_tlb(TlbSide::Data, pte, None);
                0
            }
            Insn::ItrI { slot, pte } => {
                self.insert_tlb(TlbSide::Instruction, pte, Some(slot));
                0
            }
            Insn::ItrD { slot, pte } => {
                self.insert_tlb(TlbSide::Data, pte, Some(slot));
                0
            }
            Insn::PtcE { .. } => {
                self.tlb.retain(|e| e.slot.is_some());
                0
            }
            Insn::PtcGa { addr, size } | Insn::PtcL { addr, size } => {
                self.purge_tlb(addr, size, false, None);
                0
            }
            Insn::PtrI { addr, size } => {
                self.purge_tlb(addr, size, true, Some(TlbSide::Instruction));
                0
            }
            Insn::PtrD { addr, size } => {
                self.purge_tlb(addr, size, true, Some(TlbSide::Data));
                0
            }

            Insn::MovToInd { file, .. } if !file.is_writable() => {
                self.fault(SimFault::IllegalOperation(insn))
            }
            Insn::MovToInd { file, index, val } => {
                self.indirect.insert((file, index), val);
                0
            }
            Insn::MovFromInd { file, index } => self.indirect(file, index),

            Insn::Ssm(mask) => {
                self.set_psr_bits(mask.bits() & PsrBits::SYSTEM_MASK_RANGE, true);
                0
            }
            Insn::Rsm(mask) => {
                self.set_psr_bits(mask.bits() & PsrBits::SYSTEM_MASK_RANGE, false);
                0
            }
            Insn::Sum(mask) => {
                self.set_psr_bits((mask & PsrBits::USER_MASK).bits(), true);
                0
            }
            Insn::Rum(mask) => {
                self.set_psr_bits((mask & PsrBits::USER_MASK).bits(), false);
                0
            }
            Insn::IrqRestore { flag } => {
                self.set_psr_bits(PsrBits::I.bits(), flag != 0);
                0
            }
        }
    }

    fn report_bad_param(&mut self, err: IntrinError, param: u32) {
        log_bad_param(err, param);
        self.reports.push((err, param));
    }
}
