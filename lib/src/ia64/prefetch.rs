//! `lfetch` in its four fault/exclusivity forms.
//!
//! The typed entry points take an [`LfHint`] and cannot fail. The `_raw`
//! forms take the hint as a number and reject anything outside the four
//! hints before emitting.

use crosshdr_abi::arch::ia64::LfHint;
use crosshdr_abi::{IntrinError, IntrinResult};

use super::cpu::{bad_param, Ia64Cpu};
use super::insn::{Insn, LfetchKind};

macro_rules! define_lfetch {
    ($($name:ident => $kind:ident),* $(,)?) => {
        $crate::paste::paste! {
            $(
                #[inline]
                pub fn $name<C: Ia64Cpu + ?Sized>(cpu: &mut C, hint: LfHint, addr: u64) {
                    cpu.execute(Insn::Lfetch { kind: LfetchKind::$kind, hint, addr });
                }

                pub fn [<$name _raw>]<C: Ia64Cpu + ?Sized>(
                    cpu: &mut C,
                    hint: u8,
                    addr: u64,
                ) -> IntrinResult<()> {
                    lfetch_checked(cpu, LfetchKind::$kind, hint, addr)
                }
            )*
        }
    };
}

define_lfetch! {
    lfetch => Plain,
    lfetch_excl => Excl,
    lfetch_fault => Fault,
    lfetch_fault_excl => FaultExcl,
}

fn lfetch_checked<C: Ia64Cpu + ?Sized>(
    cpu: &mut C,
    kind: LfetchKind,
    hint: u8,
    addr: u64,
) -> IntrinResult<()> {
    match LfHint::from_raw(hint) {
        Some(hint) => {
            cpu.execute(Insn::Lfetch { kind, hint, addr });
            Ok(())
        }
        None => Err(bad_param(cpu, IntrinError::BadHint, u32::from(hint))),
    }
}
