//! Instruction forms emitted by the intrinsics.
//!
//! Immediates are part of the instruction and appear in its text. Register
//! operands carry the runtime value the caller passed and render as a named
//! slot (`{val}`, `{addr}`, `{res}`), the way an `asm!` template names them.

use core::fmt;

use crosshdr_abi::arch::ia64::{FetchAddInc, HintMode, IndirectFile, LfHint, Mux1Mode, PsrBits};

/// Operand width of a memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessSize {
    B1,
    B2,
    B4,
    B8,
}

impl AccessSize {
    #[inline]
    pub const fn bytes(self) -> usize {
        match self {
            Self::B1 => 1,
            Self::B2 => 2,
            Self::B4 => 4,
            Self::B8 => 8,
        }
    }

    /// Mask of the bits an access of this size touches.
    #[inline]
    pub const fn mask(self) -> u64 {
        match self {
            Self::B8 => u64::MAX,
            _ => (1u64 << (self.bytes() * 8)) - 1,
        }
    }
}

/// Ordering semantics of an atomic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sem {
    Acq,
    Rel,
}

impl Sem {
    #[inline]
    pub const fn completer(self) -> &'static str {
        match self {
            Self::Acq => ".acq",
            Self::Rel => ".rel",
        }
    }
}

/// Floating-point load forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FpLoad {
    Single,
    Double,
    Extended,
    /// Integer significand.
    Eight,
    /// Spill image, NaT preserving.
    Fill,
}

impl FpLoad {
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Single => "ldfs",
            Self::Double => "ldfd",
            Self::Extended => "ldfe",
            Self::Eight => "ldf8",
            Self::Fill => "ldf.fill",
        }
    }

    /// Bytes read from memory.
    pub const fn bytes(self) -> usize {
        match self {
            Self::Single => 4,
            Self::Double | Self::Eight => 8,
            Self::Extended => 10,
            Self::Fill => 16,
        }
    }
}

/// Floating-point store forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FpStore {
    Single,
    Double,
    Extended,
    Eight,
    Spill,
}

impl FpStore {
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Single => "stfs",
            Self::Double => "stfd",
            Self::Extended => "stfe",
            Self::Eight => "stf8",
            Self::Spill => "stf.spill",
        }
    }

    /// Bytes written to memory.
    pub const fn bytes(self) -> usize {
        match self {
            Self::Single => 4,
            Self::Double | Self::Eight => 8,
            Self::Extended => 10,
            Self::Spill => 16,
        }
    }
}

/// Fault and exclusivity completers of `lfetch`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LfetchKind {
    Plain,
    Excl,
    Fault,
    FaultExcl,
}

impl LfetchKind {
    pub const ALL: [Self; 4] = [Self::Plain, Self::Excl, Self::Fault, Self::FaultExcl];

    pub const fn completer(self) -> &'static str {
        match self {
            Self::Plain => "",
            Self::Excl => ".excl",
            Self::Fault => ".fault",
            Self::FaultExcl => ".fault.excl",
        }
    }
}

/// One ia64 instruction, or a fixed sequence emitted as a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Insn {
    /// Instruction group stop.
    Stop,
    InvalaGr(u8),
    InvalaFr(u8),
    Invala,
    Flushrs,
    Loadrs,

    MovToPsrL { val: u64 },
    MovToAr { ar: u8, val: u64 },
    MovToCr { cr: u8, val: u64 },
    MovToSp { val: u64 },
    MovToGp { val: u64 },
    MovFromGp,
    MovFromIp,
    MovFromPsr,
    /// Read of the r13 register variable; no instruction text of its own.
    ReadTp,
    MovFromAr { ar: u8 },
    MovFromCr { cr: u8 },
    MovFromSp,

    Hint(HintMode),
    Mux1 { mode: Mux1Mode, src: u64 },
    Popcnt { src: u64 },
    /// `src` is the IEEE double image of the floating-point register.
    GetfExp { src: u64 },
    Shrp { a: u64, b: u64, count: u8 },
    Nop(u32),

    Ldf { kind: FpLoad, fr: u8, addr: u64 },
    Stf { kind: FpStore, fr: u8, addr: u64 },
    St4RelNta { addr: u64, val: u64 },

    FetchAdd { size: AccessSize, sem: Sem, addr: u64, inc: FetchAddInc },
    Xchg { size: AccessSize, addr: u64, val: u64 },
    MovToCcv { val: u64 },
    Cmpxchg { size: AccessSize, sem: Sem, addr: u64, new: u64 },

    Mf,
    MfA,
    SrlzI,
    SrlzD,
    SyncI,
    SerializeData,
    SerializeInstruction,

    Thash { addr: u64 },
    Ttag { addr: u64 },
    Tpa { addr: u64 },
    ItcI { pte: u64 },
    ItcD { pte: u64 },
    ItrI { slot: u64, pte: u64 },
    ItrD { slot: u64, pte: u64 },
    PtcE { addr: u64 },
    PtcGa { addr: u64, size: u64 },
    PtcL { addr: u64, size: u64 },
    PtrI { addr: u64, size: u64 },
    PtrD { addr: u64, size: u64 },
    Fc { addr: u64 },

    MovToInd { file: IndirectFile, index: u64, val: u64 },
    MovFromInd { file: IndirectFile, index: u64 },

    Ssm(PsrBits),
    Rsm(PsrBits),
    Sum(PsrBits),
    Rum(PsrBits),
    /// Predicated `ssm psr.i`/`rsm psr.i` on `flag != 0`.
    IrqRestore { flag: u64 },

    Lfetch { kind: LfetchKind, hint: LfHint, addr: u64 },
}

impl Insn {
    /// Whether the instruction writes a general register the caller reads back.
    pub const fn has_result(&self) -> bool {
        matches!(
            self,
            Self::MovFromGp
                | Self::MovFromIp
                | Self::MovFromPsr
                | Self::ReadTp
                | Self::MovFromAr { .. }
                | Self::MovFromCr { .. }
                | Self::MovFromSp
                | Self::Mux1 { .. }
                | Self::Popcnt { .. }
                | Self::GetfExp { .. }
                | Self::Shrp { .. }
                | Self::FetchAdd { .. }
                | Self::Xchg { .. }
                | Self::Cmpxchg { .. }
                | Self::Thash { .. }
                | Self::Ttag { .. }
                | Self::Tpa { .. }
                | Self::MovFromInd { .. }
        )
    }

    /// Serialization and fence forms.
    pub const fn is_ordering(&self) -> bool {
        matches!(
            self,
            Self::Mf
                | Self::MfA
                | Self::SrlzI
                | Self::SrlzD
                | Self::SyncI
                | Self::SerializeData
                | Self::SerializeInstruction
        )
    }
}

impl fmt::Display for Insn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stop => f.write_str(";;"),
            Self::InvalaGr(n) => write!(f, "invala.e r{n}"),
            Self::InvalaFr(n) => write!(f, "invala.e f{n}"),
            Self::Invala => f.write_str("invala"),
            Self::Flushrs => f.write_str("flushrs;;"),
            Self::Loadrs => f.write_str("loadrs;;"),

            Self::MovToPsrL { .. } => f.write_str("mov psr.l={val}"),
            Self::MovToAr { ar, .. } => write!(f, "mov ar{ar}={{val}}"),
            Self::MovToCr { cr, .. } => write!(f, "mov cr{cr}={{val}}"),
            Self::MovToSp { .. } => f.write_str("mov r12={val}"),
            Self::MovToGp { .. } => f.write_str("mov gp={val}"),
            Self::MovFromGp => f.write_str("mov {res}=gp"),
            Self::MovFromIp => f.write_str("mov {res}=ip"),
            Self::MovFromPsr => f.write_str("mov {res}=psr"),
            Self::ReadTp => f.write_str("mov {res}=r13"),
            Self::MovFromAr { ar } => write!(f, "mov {{res}}=ar{ar}"),
            Self::MovFromCr { cr } => write!(f, "mov {{res}}=cr{cr}"),
            Self::MovFromSp => f.write_str("mov {res}=sp"),

            Self::Hint(HintMode::Pause) => f.write_str("hint @pause"),
            Self::Mux1 { mode, .. } => write!(f, "mux1 {{res}}={{src}},{}", mode.mnemonic()),
            Self::Popcnt { .. } => f.write_str("popcnt {res}={src}"),
            Self::GetfExp { .. } => f.write_str("getf.exp {res}={src}"),
            Self::Shrp { count, .. } => write!(f, "shrp {{res}}={{a}},{{b}},{count}"),
            Self::Nop(imm) => write!(f, "nop {imm}"),

            Self::Ldf { kind, fr, .. } => write!(f, "{} f{fr}=[{{addr}}]", kind.mnemonic()),
            Self::Stf { kind, fr, .. } => write!(f, "{} [{{addr}}]=f{fr}", kind.mnemonic()),
            Self::St4RelNta { .. } => f.write_str("st4.rel.nta [{addr}] = {val}"),

            Self::FetchAdd { size, sem, inc, .. } => write!(
                f,
                "fetchadd{}{} {{res}}=[{{addr}}],{}",
                size.bytes(),
                sem.completer(),
                inc.get()
            ),
            Self::Xchg { size, .. } => write!(f, "xchg{} {{res}}=[{{addr}}],{{val}}", size.bytes()),
            Self::MovToCcv { .. } => f.write_str("mov ar.ccv={val};;"),
            Self::Cmpxchg { size, sem, .. } => write!(
                f,
                "cmpxchg{}{} {{res}}=[{{addr}}],{{new}},ar.ccv",
                size.bytes(),
                sem.completer()
            ),

            Self::Mf => f.write_str("mf"),
            Self::MfA => f.write_str("mf.a"),
            Self::SrlzI => f.write_str(";; srlz.i ;;"),
            Self::SrlzD => f.write_str(";; srlz.d"),
            Self::SyncI => f.write_str(";; sync.i"),
            Self::SerializeData => f.write_str(".serialize.data"),
            Self::SerializeInstruction => f.write_str(".serialize.instruction"),

            Self::Thash { .. } => f.write_str("thash {res}={addr}"),
            Self::Ttag { .. } => f.write_str("ttag {res}={addr}"),
            Self::Tpa { .. } => f.write_str("tpa {res} = {addr}"),
            Self::ItcI { .. } => f.write_str("itc.i {pte};;"),
            Self::ItcD { .. } => f.write_str("itc.d {pte};;"),
            Self::ItrI { .. } => f.write_str("itr.i itr[{slot}]={pte}"),
            Self::ItrD { .. } => f.write_str("itr.d dtr[{slot}]={pte}"),
            Self::PtcE { .. } => f.write_str("ptc.e {addr}"),
            Self::PtcGa { .. } => f.write_str("ptc.ga {addr},{size}"),
            Self::PtcL { .. } => f.write_str("ptc.l {addr},{size}"),
            Self::PtrI { .. } => f.write_str("ptr.i {addr},{size}"),
            Self::PtrD { .. } => f.write_str("ptr.d {addr},{size}"),
            Self::Fc { .. } => f.write_str("fc {addr}"),

            Self::MovToInd { file, .. } => write!(f, "mov {}[{{index}}]={{val}}", file.mnemonic()),
            Self::MovFromInd { file, .. } => {
                write!(f, "mov {{res}}={}[{{index}}]", file.mnemonic())
            }

            Self::Ssm(mask) => write!(f, "ssm {:#x}", mask.bits()),
            Self::Rsm(mask) => write!(f, "rsm {:#x}", mask.bits()),
            Self::Sum(mask) => write!(f, "sum {:#x}", mask.bits()),
            Self::Rum(mask) => write!(f, "rum {:#x}", mask.bits()),
            Self::IrqRestore { .. } => f.write_str(
                ";;   cmp.ne p6,p7={flag},r0;;(p6) ssm psr.i;(p7) rsm psr.i;;(p6) srlz.d",
            ),

            Self::Lfetch { kind, hint, .. } => {
                write!(f, "lfetch{}{} [{{addr}}]", kind.completer(), hint.completer())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn register_moves_substitute_immediates() {
        assert_eq!(Insn::MovToAr { ar: 36, val: 7 }.to_string(), "mov ar36={val}");
        assert_eq!(Insn::MovFromCr { cr: 8 }.to_string(), "mov {res}=cr8");
        assert_eq!(Insn::MovToPsrL { val: 0 }.to_string(), "mov psr.l={val}");
        assert_eq!(Insn::ReadTp.to_string(), "mov {res}=r13");
    }

    #[test]
    fn atomic_text() {
        let insn = Insn::FetchAdd {
            size: AccessSize::B4,
            sem: Sem::Acq,
            addr: 0,
            inc: FetchAddInc::Minus1,
        };
        assert_eq!(insn.to_string(), "fetchadd4.acq {res}=[{addr}],-1");
        let insn = Insn::Cmpxchg {
            size: AccessSize::B8,
            sem: Sem::Rel,
            addr: 0,
            new: 0,
        };
        assert_eq!(insn.to_string(), "cmpxchg8.rel {res}=[{addr}],{new},ar.ccv");
        assert_eq!(
            Insn::Xchg { size: AccessSize::B2, addr: 0, val: 0 }.to_string(),
            "xchg2 {res}=[{addr}],{val}"
        );
    }

    #[test]
    fn lfetch_text() {
        let insn = Insn::Lfetch {
            kind: LfetchKind::FaultExcl,
            hint: LfHint::Nt2,
            addr: 0,
        };
        assert_eq!(insn.to_string(), "lfetch.fault.excl.nt2 [{addr}]");
        let insn = Insn::Lfetch {
            kind: LfetchKind::Plain,
            hint: LfHint::None,
            addr: 0,
        };
        assert_eq!(insn.to_string(), "lfetch [{addr}]");
    }

    #[test]
    fn system_mask_text() {
        assert_eq!(Insn::Ssm(PsrBits::I).to_string(), "ssm 0x4000");
        assert_eq!(Insn::Rum(PsrBits::UP).to_string(), "rum 0x4");
        assert_eq!(
            Insn::MovFromInd { file: IndirectFile::Cpuid, index: 3 }.to_string(),
            "mov {res}=cpuid[{index}]"
        );
    }

    #[test]
    fn access_size_masks() {
        assert_eq!(AccessSize::B1.mask(), 0xff);
        assert_eq!(AccessSize::B4.mask(), 0xffff_ffff);
        assert_eq!(AccessSize::B8.mask(), u64::MAX);
    }

    #[test]
    fn result_and_ordering_classes() {
        assert!(Insn::MovFromSp.has_result());
        assert!(!Insn::MovToSp { val: 0 }.has_result());
        assert!(Insn::SerializeData.is_ordering());
        assert!(!Insn::Stop.is_ordering());
    }
}
