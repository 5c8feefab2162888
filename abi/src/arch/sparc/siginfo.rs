//! sparc `asm/siginfo.h` (4.19.x).
//!
//! sparc tunes the generic `siginfo_t` layout: 64-bit userland gets a
//! four-int preamble and an `int` `si_band`, and every variant carries the
//! trap number of the faulting instruction.

use core::mem::size_of;

use crate::catalog::{Arch, KernelSeries};

crate::uapi_table! {
    /// Symbols of sparc `asm/siginfo.h`.
    pub static CATALOG = (Arch::Sparc, "asm/siginfo.h", KernelSeries::V4_19);

    /// No information in `siginfo_t`.
    pub const SI_NOINFO: i32 = 32767;

    /// `SIGEMT` si_code: tag overflow.
    pub const EMT_TAGOVF: i32 = 1;
    pub const NSIGEMT: i32 = 1;
}

/// `__ARCH_SI_TRAPNO` is defined for both sparc ABIs.
pub const ARCH_SI_TRAPNO: bool = true;

/// Total size of `siginfo_t` on every architecture.
pub const SI_MAX_SIZE: usize = 128;

/// Which sparc userland the layout is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SparcAbi {
    /// 32-bit sparc, or sparc64 compat tasks.
    Sparc32,
    /// `__sparc__ && __arch64__`.
    Sparc64,
}

/// Width of the `si_band` member.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BandType {
    Int,
    Long,
}

/// Layout parameters of `siginfo_t` for one sparc ABI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiginfoLayout {
    pub abi: SparcAbi,
    /// `__ARCH_SI_PREAMBLE_SIZE`: bytes before the `_sifields` union.
    pub preamble_size: usize,
    pub band: BandType,
    pub has_trapno: bool,
}

impl SiginfoLayout {
    pub const SPARC32: Self = Self::for_abi(SparcAbi::Sparc32);
    pub const SPARC64: Self = Self::for_abi(SparcAbi::Sparc64);

    pub const fn for_abi(abi: SparcAbi) -> Self {
        match abi {
            SparcAbi::Sparc64 => Self {
                abi,
                preamble_size: 4 * size_of::<i32>(),
                band: BandType::Int,
                has_trapno: ARCH_SI_TRAPNO,
            },
            // Generic preamble: si_signo, si_errno, si_code.
            SparcAbi::Sparc32 => Self {
                abi,
                preamble_size: 3 * size_of::<i32>(),
                band: BandType::Long,
                has_trapno: ARCH_SI_TRAPNO,
            },
        }
    }

    /// Bytes of `si_band` on this ABI.
    #[inline]
    pub const fn band_size(self) -> usize {
        match (self.band, self.abi) {
            (BandType::Int, _) => size_of::<i32>(),
            (BandType::Long, SparcAbi::Sparc32) => 4,
            (BandType::Long, SparcAbi::Sparc64) => 8,
        }
    }

    /// `SI_PAD_SIZE`: ints of padding that make up the `_sifields` union.
    #[inline]
    pub const fn pad_words(self) -> usize {
        (SI_MAX_SIZE - self.preamble_size) / size_of::<i32>()
    }
}
