//! tile `asm/signal.h` (4.14.x).
//!
//! tile adds two flags to the generic `sa_flags` set; the generic values it
//! inherits from `asm-generic/signal.h` are listed alongside so a caller can
//! build a complete `sa_flags` word for this architecture.

use crate::catalog::{Arch, KernelSeries};

crate::uapi_table! {
    /// Symbols of tile `asm/signal.h` plus the generic `sa_flags` it includes.
    pub static CATALOG = (Arch::Tile, "asm/signal.h", KernelSeries::V4_14);

    /// Do not notify a ptracer when this signal is handled.
    pub const SA_NOPTRACE: u32 = 0x0200_0000;
    /// Used in earlier Tilera releases, kept for binary compatibility.
    pub const SA_RESTORER: u32 = 0x0400_0000;

    pub const SA_NOCLDSTOP: u32 = 0x0000_0001;
    pub const SA_NOCLDWAIT: u32 = 0x0000_0002;
    pub const SA_SIGINFO: u32 = 0x0000_0004;
    pub const SA_ONSTACK: u32 = 0x0800_0000;
    pub const SA_RESTART: u32 = 0x1000_0000;
    pub const SA_NODEFER: u32 = 0x4000_0000;
    pub const SA_RESETHAND: u32 = 0x8000_0000;

    pub const SA_NOMASK: u32 = SA_NODEFER => alias;
    pub const SA_ONESHOT: u32 = SA_RESETHAND => alias;
}

bitflags::bitflags! {
    /// `sa_flags` word of `struct sigaction` on tile.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SigActionFlags: u32 {
        const NOCLDSTOP = SA_NOCLDSTOP;
        const NOCLDWAIT = SA_NOCLDWAIT;
        const SIGINFO = SA_SIGINFO;
        const NOPTRACE = SA_NOPTRACE;
        const RESTORER = SA_RESTORER;
        const ONSTACK = SA_ONSTACK;
        const RESTART = SA_RESTART;
        const NODEFER = SA_NODEFER;
        const RESETHAND = SA_RESETHAND;
    }
}

impl SigActionFlags {
    /// Flags tile defines on top of the generic set.
    pub const ARCH_SPECIFIC: Self = Self::NOPTRACE.union(Self::RESTORER);

    /// Whether delivery of this signal is hidden from a ptracer.
    #[inline]
    pub const fn hides_from_tracer(self) -> bool {
        self.contains(Self::NOPTRACE)
    }
}
