use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crosshdr_abi::IntrinError;

use super::cpu::{log_bad_param, Ia64Cpu};
use super::insn::Insn;
use crate::klog_trace;

/// Records every instruction it is asked to execute.
///
/// Results come from a script queued with [`InsnTrace::push_result`]; once the
/// script runs dry every result is `0`.
#[derive(Debug, Default)]
pub struct InsnTrace {
    insns: Vec<Insn>,
    results: VecDeque<u64>,
    reports: Vec<(IntrinError, u32)>,
}

impl InsnTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_results(results: impl IntoIterator<Item = u64>) -> Self {
        Self {
            results: results.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn push_result(&mut self, value: u64) {
        self.results.push_back(value);
    }

    pub fn insns(&self) -> &[Insn] {
        &self.insns
    }

    /// Bad-parameter reports in arrival order.
    pub fn reports(&self) -> &[(IntrinError, u32)] {
        &self.reports
    }

    pub fn last(&self) -> Option<&Insn> {
        self.insns.last()
    }

    pub fn len(&self) -> usize {
        self.insns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insns.is_empty()
    }

    /// Assembler text of the recorded stream.
    pub fn render(&self) -> Vec<String> {
        self.insns.iter().map(ToString::to_string).collect()
    }

    pub fn clear(&mut self) {
        self.insns.clear();
        self.reports.clear();
    }
}

impl Ia64Cpu for InsnTrace {
    fn execute(&mut self, insn: Insn) -> u64 {
        klog_trace!("ia64: {}", insn);
        self.insns.push(insn);
        if insn.has_result() {
            self.results.pop_front().unwrap_or(0)
        } else {
            0
        }
    }

    fn report_bad_param(&mut self, err: IntrinError, param: u32) {
        log_bad_param(err, param);
        self.reports.push((err, param));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_results_feed_result_forms_only() {
        let mut cpu = InsnTrace::with_results([7, 9]);
        assert_eq!(cpu.execute(Insn::Mf), 0);
        assert_eq!(cpu.execute(Insn::MovFromIp), 7);
        assert_eq!(cpu.execute(Insn::MovFromSp), 9);
        assert_eq!(cpu.execute(Insn::MovFromSp), 0);
        assert_eq!(cpu.len(), 4);
        assert_eq!(cpu.render()[0], "mf");
    }

    #[test]
    fn reports_are_kept_separately() {
        let mut cpu = InsnTrace::new();
        cpu.report_bad_param(IntrinError::BadSetRegParam, 1016);
        assert!(cpu.is_empty());
        assert_eq!(cpu.reports(), &[(IntrinError::BadSetRegParam, 1016)]);
        cpu.clear();
        assert!(cpu.reports().is_empty());
    }
}
