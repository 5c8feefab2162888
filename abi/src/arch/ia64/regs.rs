//! ia64 `asm/ia64regs.h` (5.4.x): register selectors for getreg/setreg.
//!
//! Selectors are partitioned into classes by numeric range. Classification is
//! a pure `const fn` so that a selector known at compile time can be rejected
//! at compile time, and so the emitting side matches exhaustively on a closed
//! set of variants instead of on raw numbers.

use crate::catalog::{Arch, KernelSeries};

crate::uapi_table! {
    /// Symbols of ia64 `asm/ia64regs.h`.
    pub static CATALOG = (Arch::Ia64, "asm/ia64regs.h", KernelSeries::V5_4);

    /// Instruction pointer, readable only.
    pub const IA64_REG_IP: u32 = 1016;
    pub const IA64_REG_PSR: u32 = 1019;
    /// Lower half of PSR, writable only.
    pub const IA64_REG_PSR_L: u32 = 1019;

    /// r1
    pub const IA64_REG_GP: u32 = 1025;
    /// r8
    pub const IA64_REG_R8: u32 = 1032;
    /// r9
    pub const IA64_REG_R9: u32 = 1033;
    /// r12
    pub const IA64_REG_SP: u32 = 1036;
    /// r13, holds `current`.
    pub const IA64_REG_TP: u32 = 1037;

    pub const IA64_REG_AR_KR0: u32 = 3072;
    pub const IA64_REG_AR_KR1: u32 = 3073;
    pub const IA64_REG_AR_KR2: u32 = 3074;
    pub const IA64_REG_AR_KR3: u32 = 3075;
    pub const IA64_REG_AR_KR4: u32 = 3076;
    pub const IA64_REG_AR_KR5: u32 = 3077;
    pub const IA64_REG_AR_KR6: u32 = 3078;
    pub const IA64_REG_AR_KR7: u32 = 3079;
    pub const IA64_REG_AR_RSC: u32 = 3088;
    pub const IA64_REG_AR_BSP: u32 = 3089;
    pub const IA64_REG_AR_BSPSTORE: u32 = 3090;
    pub const IA64_REG_AR_RNAT: u32 = 3091;
    pub const IA64_REG_AR_FCR: u32 = 3093;
    pub const IA64_REG_AR_EFLAG: u32 = 3096;
    pub const IA64_REG_AR_CSD: u32 = 3097;
    pub const IA64_REG_AR_SSD: u32 = 3098;
    pub const IA64_REG_AR_CFLAG: u32 = 3099;
    pub const IA64_REG_AR_FSR: u32 = 3100;
    pub const IA64_REG_AR_FIR: u32 = 3101;
    pub const IA64_REG_AR_FDR: u32 = 3102;
    pub const IA64_REG_AR_CCV: u32 = 3104;
    pub const IA64_REG_AR_UNAT: u32 = 3108;
    pub const IA64_REG_AR_FPSR: u32 = 3112;
    pub const IA64_REG_AR_ITC: u32 = 3116;
    pub const IA64_REG_AR_PFS: u32 = 3136;
    pub const IA64_REG_AR_LC: u32 = 3137;
    pub const IA64_REG_AR_EC: u32 = 3138;

    pub const IA64_REG_CR_DCR: u32 = 4096;
    pub const IA64_REG_CR_ITM: u32 = 4097;
    pub const IA64_REG_CR_IVA: u32 = 4098;
    pub const IA64_REG_CR_PTA: u32 = 4104;
    pub const IA64_REG_CR_IPSR: u32 = 4112;
    pub const IA64_REG_CR_ISR: u32 = 4113;
    pub const IA64_REG_CR_IIP: u32 = 4115;
    pub const IA64_REG_CR_IFA: u32 = 4116;
    pub const IA64_REG_CR_ITIR: u32 = 4117;
    pub const IA64_REG_CR_IIPA: u32 = 4118;
    pub const IA64_REG_CR_IFS: u32 = 4119;
    pub const IA64_REG_CR_IIM: u32 = 4120;
    pub const IA64_REG_CR_IHA: u32 = 4121;
    pub const IA64_REG_CR_LID: u32 = 4160;
    /// Interrupt vector, readable only.
    pub const IA64_REG_CR_IVR: u32 = 4161;
    pub const IA64_REG_CR_TPR: u32 = 4162;
    pub const IA64_REG_CR_EOI: u32 = 4163;
    /// Interrupt request registers, readable only.
    pub const IA64_REG_CR_IRR0: u32 = 4164;
    pub const IA64_REG_CR_IRR1: u32 = 4165;
    pub const IA64_REG_CR_IRR2: u32 = 4166;
    pub const IA64_REG_CR_IRR3: u32 = 4167;
    pub const IA64_REG_CR_ITV: u32 = 4168;
    pub const IA64_REG_CR_PMV: u32 = 4169;
    pub const IA64_REG_CR_CMCV: u32 = 4170;
    pub const IA64_REG_CR_LRR0: u32 = 4176;
    pub const IA64_REG_CR_LRR1: u32 = 4177;

    /// CPUID registers, readable only.
    pub const IA64_REG_INDR_CPUID: u32 = 9000;
    pub const IA64_REG_INDR_DBR: u32 = 9001;
    pub const IA64_REG_INDR_IBR: u32 = 9002;
    pub const IA64_REG_INDR_PKR: u32 = 9003;
    pub const IA64_REG_INDR_PMC: u32 = 9004;
    pub const IA64_REG_INDR_PMD: u32 = 9005;
    pub const IA64_REG_INDR_RR: u32 = 9006;
}

/// Application register number of a selector in the `ar.k0 ..= ar.ec` range.
#[inline]
pub const fn ar_index(selector: u32) -> u8 {
    (selector - IA64_REG_AR_KR0) as u8
}

/// Control register number of a selector in the `cr.dcr ..= cr.lrr1` range.
#[inline]
pub const fn cr_index(selector: u32) -> u8 {
    (selector - IA64_REG_CR_DCR) as u8
}

/// Application register numbers of the named ARs used by the intrinsics.
pub const AR_BSP: u8 = ar_index(IA64_REG_AR_BSP);
pub const AR_CCV: u8 = ar_index(IA64_REG_AR_CCV);
pub const AR_ITC: u8 = ar_index(IA64_REG_AR_ITC);

/// Control register numbers with a fixed role.
pub const CR_PTA: u8 = cr_index(IA64_REG_CR_PTA);
pub const CR_IVR: u8 = cr_index(IA64_REG_CR_IVR);
pub const CR_IRR0: u8 = cr_index(IA64_REG_CR_IRR0);
pub const CR_IRR3: u8 = cr_index(IA64_REG_CR_IRR3);

/// Register classes readable through getreg.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GetReg {
    Gp,
    Ip,
    Psr,
    /// Thread pointer (r13), read without an instruction.
    Tp,
    /// `arN`, `N` in `0..=66`.
    Ar(u8),
    /// `crN`, `N` in `0..=81`.
    Cr(u8),
    Sp,
}

impl GetReg {
    /// Map a selector to its readable class.
    pub const fn classify(selector: u32) -> Option<Self> {
        match selector {
            IA64_REG_GP => Some(Self::Gp),
            IA64_REG_IP => Some(Self::Ip),
            IA64_REG_PSR => Some(Self::Psr),
            IA64_REG_TP => Some(Self::Tp),
            IA64_REG_AR_KR0..=IA64_REG_AR_EC => Some(Self::Ar(ar_index(selector))),
            IA64_REG_CR_DCR..=IA64_REG_CR_LRR1 => Some(Self::Cr(cr_index(selector))),
            IA64_REG_SP => Some(Self::Sp),
            _ => None,
        }
    }

    /// The selector this class was classified from.
    pub const fn selector(self) -> u32 {
        match self {
            Self::Gp => IA64_REG_GP,
            Self::Ip => IA64_REG_IP,
            Self::Psr => IA64_REG_PSR,
            Self::Tp => IA64_REG_TP,
            Self::Ar(n) => IA64_REG_AR_KR0 + n as u32,
            Self::Cr(n) => IA64_REG_CR_DCR + n as u32,
            Self::Sp => IA64_REG_SP,
        }
    }
}

/// Register classes writable through setreg.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SetReg {
    /// PSR bits 0-31.
    PsrL,
    Ar(u8),
    Cr(u8),
    Sp,
    Gp,
}

impl SetReg {
    /// Map a selector to its writable class.
    ///
    /// `ar.bsp`, `cr.ivr` and `cr.irr0-3` sit inside the AR/CR ranges but are
    /// read-only in hardware, so they have no writable class.
    pub const fn classify(selector: u32) -> Option<Self> {
        match selector {
            IA64_REG_PSR_L => Some(Self::PsrL),
            IA64_REG_AR_BSP => None,
            IA64_REG_AR_KR0..=IA64_REG_AR_EC => Some(Self::Ar(ar_index(selector))),
            IA64_REG_CR_IVR | IA64_REG_CR_IRR0..=IA64_REG_CR_IRR3 => None,
            IA64_REG_CR_DCR..=IA64_REG_CR_LRR1 => Some(Self::Cr(cr_index(selector))),
            IA64_REG_SP => Some(Self::Sp),
            IA64_REG_GP => Some(Self::Gp),
            _ => None,
        }
    }

    pub const fn selector(self) -> u32 {
        match self {
            Self::PsrL => IA64_REG_PSR_L,
            Self::Ar(n) => IA64_REG_AR_KR0 + n as u32,
            Self::Cr(n) => IA64_REG_CR_DCR + n as u32,
            Self::Sp => IA64_REG_SP,
            Self::Gp => IA64_REG_GP,
        }
    }
}

/// Indirect register files, addressed by an index register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IndirectFile {
    Cpuid,
    /// Data breakpoint registers.
    Dbr,
    /// Instruction breakpoint registers.
    Ibr,
    /// Protection key registers.
    Pkr,
    /// Performance monitor configuration.
    Pmc,
    /// Performance monitor data.
    Pmd,
    /// Region registers.
    Rr,
}

impl IndirectFile {
    pub const ALL: [Self; 7] = [
        Self::Cpuid,
        Self::Dbr,
        Self::Ibr,
        Self::Pkr,
        Self::Pmc,
        Self::Pmd,
        Self::Rr,
    ];

    pub const fn from_selector(selector: u32) -> Option<Self> {
        match selector {
            IA64_REG_INDR_CPUID => Some(Self::Cpuid),
            IA64_REG_INDR_DBR => Some(Self::Dbr),
            IA64_REG_INDR_IBR => Some(Self::Ibr),
            IA64_REG_INDR_PKR => Some(Self::Pkr),
            IA64_REG_INDR_PMC => Some(Self::Pmc),
            IA64_REG_INDR_PMD => Some(Self::Pmd),
            IA64_REG_INDR_RR => Some(Self::Rr),
            _ => None,
        }
    }

    pub const fn selector(self) -> u32 {
        match self {
            Self::Cpuid => IA64_REG_INDR_CPUID,
            Self::Dbr => IA64_REG_INDR_DBR,
            Self::Ibr => IA64_REG_INDR_IBR,
            Self::Pkr => IA64_REG_INDR_PKR,
            Self::Pmc => IA64_REG_INDR_PMC,
            Self::Pmd => IA64_REG_INDR_PMD,
            Self::Rr => IA64_REG_INDR_RR,
        }
    }

    /// Assembler name of the file, as in `mov pmd[r2]=r3`.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Cpuid => "cpuid",
            Self::Dbr => "dbr",
            Self::Ibr => "ibr",
            Self::Pkr => "pkr",
            Self::Pmc => "pmc",
            Self::Pmd => "pmd",
            Self::Rr => "rr",
        }
    }

    /// CPUID has no write form.
    #[inline]
    pub const fn is_writable(self) -> bool {
        !matches!(self, Self::Cpuid)
    }
}
