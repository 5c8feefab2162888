//! xtensa `asm/ptrace.h` (4.14.x).
//!
//! Register numbers are the `addr` argument of `PTRACE_PEEKUSR`/`PTRACE_POKEUSR`
//! as used by strace. The request codes fill holes in the generic
//! `linux/ptrace.h` numbering, which owns 0-9, 16, 17 and 24.

use crate::catalog::{Arch, KernelSeries};

crate::uapi_table! {
    /// Symbols of xtensa `asm/ptrace.h`.
    pub static CATALOG = (Arch::Xtensa, "asm/ptrace.h", KernelSeries::V4_14);

    pub const REG_A_BASE: u32 = 0x0000;
    pub const REG_AR_BASE: u32 = 0x0100;
    pub const REG_PC: u32 = 0x0020;
    pub const REG_PS: u32 = 0x02e6;
    pub const REG_WB: u32 = 0x0248;
    pub const REG_WS: u32 = 0x0249;
    pub const REG_LBEG: u32 = 0x0200;
    pub const REG_LEND: u32 = 0x0201;
    pub const REG_LCOUNT: u32 = 0x0202;
    pub const REG_SAR: u32 = 0x0203;

    pub const SYSCALL_NR: u32 = 0x00ff;

    pub const PTRACE_GETREGS: i32 = 12;
    pub const PTRACE_SETREGS: i32 = 13;
    pub const PTRACE_GETXTREGS: i32 = 18;
    pub const PTRACE_SETXTREGS: i32 = 19;
    pub const PTRACE_GETHBPREGS: i32 = 20;
    pub const PTRACE_SETHBPREGS: i32 = 21;
}

/// Request codes owned by the generic `linux/ptrace.h`.
pub const GENERIC_PTRACE_REQUESTS: [i32; 13] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 16, 17, 24];

/// Window registers visible through `REG_A_BASE`.
pub const NUM_A_REGS: u32 = 16;

/// Largest physical address-register file of any xtensa configuration.
pub const MAX_AR_REGS: u32 = 64;

/// Whether `request` is one of the xtensa-specific ptrace requests.
#[inline]
pub const fn is_arch_request(request: i32) -> bool {
    matches!(
        request,
        PTRACE_GETREGS
            | PTRACE_SETREGS
            | PTRACE_GETXTREGS
            | PTRACE_SETXTREGS
            | PTRACE_GETHBPREGS
            | PTRACE_SETHBPREGS
    )
}

/// Register number in the strace `PEEKUSR` space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct XtensaReg(pub u32);

/// What a `PEEKUSR` register number refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XtensaRegKind {
    /// Window register `aN` of the current window.
    A(u8),
    /// Physical address register `arN`.
    Ar(u8),
    Pc,
    Ps,
    WindowBase,
    WindowStart,
    LoopBegin,
    LoopEnd,
    LoopCount,
    ShiftAmount,
    SyscallNr,
}

impl XtensaReg {
    pub const PC: Self = Self(REG_PC);
    pub const PS: Self = Self(REG_PS);
    pub const WB: Self = Self(REG_WB);
    pub const WS: Self = Self(REG_WS);
    pub const LBEG: Self = Self(REG_LBEG);
    pub const LEND: Self = Self(REG_LEND);
    pub const LCOUNT: Self = Self(REG_LCOUNT);
    pub const SAR: Self = Self(REG_SAR);
    pub const SYSCALL_NR: Self = Self(SYSCALL_NR);

    /// Window register `aN`, `n < 16`.
    #[inline]
    pub const fn a(n: u32) -> Option<Self> {
        if n < NUM_A_REGS {
            Some(Self(REG_A_BASE + n))
        } else {
            None
        }
    }

    /// Physical address register `arN`, `n < 64`.
    #[inline]
    pub const fn ar(n: u32) -> Option<Self> {
        if n < MAX_AR_REGS {
            Some(Self(REG_AR_BASE + n))
        } else {
            None
        }
    }

    #[inline]
    pub const fn number(self) -> u32 {
        self.0
    }

    /// Decode a register number; `None` for numbers the kernel rejects.
    pub const fn kind(self) -> Option<XtensaRegKind> {
        let n = self.0;
        if n >= REG_AR_BASE && n < REG_AR_BASE + MAX_AR_REGS {
            return Some(XtensaRegKind::Ar((n - REG_AR_BASE) as u8));
        }
        if n < REG_A_BASE + NUM_A_REGS {
            return Some(XtensaRegKind::A((n - REG_A_BASE) as u8));
        }
        match n {
            REG_PC => Some(XtensaRegKind::Pc),
            REG_PS => Some(XtensaRegKind::Ps),
            REG_WB => Some(XtensaRegKind::WindowBase),
            REG_WS => Some(XtensaRegKind::WindowStart),
            REG_LBEG => Some(XtensaRegKind::LoopBegin),
            REG_LEND => Some(XtensaRegKind::LoopEnd),
            REG_LCOUNT => Some(XtensaRegKind::LoopCount),
            REG_SAR => Some(XtensaRegKind::ShiftAmount),
            SYSCALL_NR => Some(XtensaRegKind::SyscallNr),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ptrace_request_values() {
        assert_eq!(PTRACE_GETREGS, 12);
        assert_eq!(PTRACE_SETREGS, 13);
        assert_eq!(PTRACE_GETXTREGS, 18);
        assert_eq!(PTRACE_SETXTREGS, 19);
        assert_eq!(PTRACE_GETHBPREGS, 20);
        assert_eq!(PTRACE_SETHBPREGS, 21);
    }

    #[test]
    fn arch_requests_avoid_generic_numbers() {
        for req in GENERIC_PTRACE_REQUESTS {
            assert!(!is_arch_request(req));
        }
        assert!(is_arch_request(PTRACE_GETHBPREGS));
        assert!(!is_arch_request(14));
    }

    #[test]
    fn register_decoding() {
        assert_eq!(XtensaReg::a(3).and_then(XtensaReg::kind), Some(XtensaRegKind::A(3)));
        assert_eq!(XtensaReg::ar(63).map(XtensaReg::number), Some(0x13f));
        assert_eq!(XtensaReg::ar(64), None);
        assert_eq!(XtensaReg::a(16), None);
        assert_eq!(XtensaReg::PS.kind(), Some(XtensaRegKind::Ps));
        assert_eq!(XtensaReg::SAR.kind(), Some(XtensaRegKind::ShiftAmount));
        assert_eq!(XtensaReg::SYSCALL_NR.kind(), Some(XtensaRegKind::SyscallNr));
        assert_eq!(XtensaReg(0x0204).kind(), None);
    }

    #[test]
    fn register_offsets() {
        assert_eq!(REG_PC, 0x20);
        assert_eq!(REG_PS, 0x2e6);
        assert_eq!(REG_WB, 0x248);
        assert_eq!(REG_WS, 0x249);
        assert_eq!(REG_LBEG, 0x200);
        assert_eq!(SYSCALL_NR, 0xff);
        assert_eq!(CATALOG.validate(), Ok(()));
        assert_eq!(CATALOG.get("REG_SAR"), Some(0x203));
    }

    /// Every symbol of the header with its literal value.
    const HEADER: &[(&str, i64)] = &[
        ("REG_A_BASE", 0x0000),
        ("REG_AR_BASE", 0x0100),
        ("REG_PC", 0x0020),
        ("REG_PS", 0x02e6),
        ("REG_WB", 0x0248),
        ("REG_WS", 0x0249),
        ("REG_LBEG", 0x0200),
        ("REG_LEND", 0x0201),
        ("REG_LCOUNT", 0x0202),
        ("REG_SAR", 0x0203),
        ("SYSCALL_NR", 0x00ff),
        ("PTRACE_GETREGS", 12),
        ("PTRACE_SETREGS", 13),
        ("PTRACE_GETXTREGS", 18),
        ("PTRACE_SETXTREGS", 19),
        ("PTRACE_GETHBPREGS", 20),
        ("PTRACE_SETHBPREGS", 21),
    ];

    #[test]
    fn every_header_literal() {
        for &(name, literal) in HEADER {
            assert_eq!(CATALOG.get(name), Some(literal), "{}", name);
        }
        assert_eq!(CATALOG.len(), HEADER.len());
    }
}
