use crosshdr_abi::IntrinError;

use super::insn::Insn;
use crate::{klog_error, klog_warn};

/// Executes ia64 instructions on behalf of the intrinsics.
///
/// `execute` returns the value of the result register for instruction forms
/// that have one (see [`Insn::has_result`]) and `0` otherwise.
pub trait Ia64Cpu {
    fn execute(&mut self, insn: Insn) -> u64;

    /// Called once for every rejected selector or operand, before the
    /// intrinsic returns its error. Nothing has been executed at that point.
    fn report_bad_param(&mut self, err: IntrinError, param: u32) {
        log_bad_param(err, param);
    }
}

impl<C: Ia64Cpu + ?Sized> Ia64Cpu for &mut C {
    #[inline]
    fn execute(&mut self, insn: Insn) -> u64 {
        (**self).execute(insn)
    }

    #[inline]
    fn report_bad_param(&mut self, err: IntrinError, param: u32) {
        (**self).report_bad_param(err, param)
    }
}

pub(crate) fn log_bad_param(err: IntrinError, param: u32) {
    match err {
        IntrinError::BadHint => klog_warn!("ia64: {} {}, lfetch dropped", err, param),
        _ => klog_error!("ia64: {} {}", err, param),
    }
}

/// Report `param` on `cpu` and hand back `err` for the caller to return.
#[inline]
pub(crate) fn bad_param<C: Ia64Cpu + ?Sized>(cpu: &mut C, err: IntrinError, param: u32) -> IntrinError {
    cpu.report_bad_param(err, param);
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        executed: usize,
        reports: usize,
    }

    impl Ia64Cpu for Counter {
        fn execute(&mut self, _insn: Insn) -> u64 {
            self.executed += 1;
            0
        }

        fn report_bad_param(&mut self, _err: IntrinError, _param: u32) {
            self.reports += 1;
        }
    }

    #[test]
    fn forwards_through_mut_ref() {
        let mut inner = Counter { executed: 0, reports: 0 };
        {
            let mut cpu = &mut inner;
            cpu.execute(Insn::Mf);
            assert_eq!(bad_param(&mut cpu, IntrinError::BadHint, 9), IntrinError::BadHint);
        }
        assert_eq!(inner.executed, 1);
        assert_eq!(inner.reports, 1);
    }
}
