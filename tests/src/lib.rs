//! Conformance suites spanning the constant tables and the ia64 layer.
//!
//! Each suite counts checks instead of panicking so a run reports every
//! failure. The `#[test]` wrappers at the bottom require a clean run.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

use alloc::string::ToString;

use crosshdr_abi::arch::alpha::socket::{self, SO_TIMESTAMP_NEW, SO_TIMESTAMP_OLD};
use crosshdr_abi::arch::ia64::regs::{IA64_REG_AR_ITC, IA64_REG_INDR_CPUID, IA64_REG_INDR_RR};
use crosshdr_abi::arch::ia64::{GetReg, LfHint, SetReg};
use crosshdr_abi::arch::{tile, xtensa};
use crosshdr_abi::{find_catalog, IntrinError, TimeAbi, ALL_CATALOGS};
use crosshdr_lib::ia64::{self, Insn, InsnTrace, LfetchKind, SimCpu};
use crosshdr_lib::{klog_error, klog_info};

pub const TESTS_MAX_SUITES: usize = 8;

/// Every selector the classification is exercised over.
pub const SELECTOR_SWEEP: core::ops::Range<u32> = 0..10_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TestSuiteResult {
    pub name: &'static str,
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
}

impl TestSuiteResult {
    fn check(&mut self, ok: bool, what: &str, detail: u64) {
        self.total += 1;
        if ok {
            self.passed += 1;
        } else {
            self.failed += 1;
            klog_error!("SUITE {}: {} failed ({:#x})", self.name, what, detail);
        }
    }
}

#[derive(Clone, Copy)]
pub struct TestSuiteDesc {
    pub name: &'static str,
    pub run: fn(&mut TestSuiteResult),
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TestRunSummary {
    pub suites: [TestSuiteResult; TESTS_MAX_SUITES],
    pub suite_count: usize,
    pub total_tests: u32,
    pub passed: u32,
    pub failed: u32,
}

fn fill_summary_from_result(summary: &mut TestRunSummary, res: &TestSuiteResult) {
    summary.total_tests = summary.total_tests.saturating_add(res.total);
    summary.passed = summary.passed.saturating_add(res.passed);
    summary.failed = summary.failed.saturating_add(res.failed);
}

pub static SUITES: [TestSuiteDesc; 7] = [
    TestSuiteDesc { name: "catalogs", run: suite_catalogs },
    TestSuiteDesc { name: "literals", run: suite_literals },
    TestSuiteDesc { name: "time_options", run: suite_time_options },
    TestSuiteDesc { name: "getreg_dispatch", run: suite_getreg_dispatch },
    TestSuiteDesc { name: "setreg_dispatch", run: suite_setreg_dispatch },
    TestSuiteDesc { name: "lfetch_hints", run: suite_lfetch_hints },
    TestSuiteDesc { name: "getreg_stability", run: suite_getreg_stability },
];

pub fn run_suite(desc: &TestSuiteDesc) -> TestSuiteResult {
    let mut res = TestSuiteResult { name: desc.name, ..TestSuiteResult::default() };
    (desc.run)(&mut res);
    res
}

/// Run every suite, logging per-suite and overall counts.
pub fn tests_run_all() -> TestRunSummary {
    let mut summary = TestRunSummary::default();
    klog_info!("TESTS: Starting test suites");

    for (idx, desc) in SUITES.iter().enumerate() {
        let res = run_suite(desc);
        if summary.suite_count < TESTS_MAX_SUITES {
            summary.suites[summary.suite_count] = res;
            summary.suite_count += 1;
        }
        klog_info!(
            "SUITE{} {} total={} pass={} fail={}",
            idx,
            res.name,
            res.total,
            res.passed,
            res.failed,
        );
        fill_summary_from_result(&mut summary, &res);
    }

    klog_info!(
        "TESTS SUMMARY: total={} passed={} failed={}",
        summary.total_tests,
        summary.passed,
        summary.failed,
    );
    summary
}

fn suite_catalogs(res: &mut TestSuiteResult) {
    for catalog in ALL_CATALOGS {
        res.check(catalog.validate().is_ok(), catalog.header, catalog.len() as u64);
        res.check(!catalog.is_empty(), "non-empty", 0);
        let found = find_catalog(catalog.arch, catalog.header)
            .is_some_and(|c| core::ptr::eq(c, *catalog));
        res.check(found, "find_catalog", 0);
        for constant in catalog.iter() {
            let resolved = catalog.resolve(constant.name).map(|c| c.value);
            res.check(resolved == Some(constant.value), constant.name, constant.value as u64);
        }
    }
}

fn suite_literals(res: &mut TestSuiteResult) {
    res.check(tile::signal::SA_NOPTRACE == 0x0200_0000, "SA_NOPTRACE", 0);
    res.check(tile::signal::SA_RESTORER == 0x0400_0000, "SA_RESTORER", 0);
    res.check(socket::SO_REUSEADDR == 0x0004, "SO_REUSEADDR", 0);
    res.check(socket::SO_DETACH_BPF == socket::SO_DETACH_FILTER, "SO_DETACH_BPF", 0);
    res.check(socket::SCM_WIFI_STATUS == socket::SO_WIFI_STATUS, "SCM_WIFI_STATUS", 0);
    res.check(xtensa::ptrace::PTRACE_GETREGS == 12, "PTRACE_GETREGS", 0);
    res.check(
        find_catalog(crosshdr_abi::Arch::Alpha, "asm/socket.h")
            .and_then(|c| c.get("SO_REUSEADDR"))
            == Some(4),
        "SO_REUSEADDR by name",
        0,
    );
}

fn suite_time_options(res: &mut TestSuiteResult) {
    res.check(socket::SO_TIMESTAMP == SO_TIMESTAMP_OLD, "LP64 uses old", 0);
    for (abi, want) in [
        (TimeAbi::LP64, SO_TIMESTAMP_OLD),
        (TimeAbi::ILP32_TIME32, SO_TIMESTAMP_OLD),
        (TimeAbi::ILP32_TIME64, SO_TIMESTAMP_NEW),
    ] {
        let got = socket::so_timestamp_for(abi);
        res.check(got == want, "so_timestamp_for", got as u64);
    }
}

fn suite_getreg_dispatch(res: &mut TestSuiteResult) {
    let mut cpu = InsnTrace::new();
    for sel in SELECTOR_SWEEP {
        cpu.clear();
        let out = ia64::getreg(&mut cpu, sel);
        match GetReg::classify(sel) {
            Some(class) => {
                res.check(
                    out.is_ok() && cpu.insns() == [ia64::read_insn(class)] && cpu.reports().is_empty(),
                    "getreg emits one insn",
                    u64::from(sel),
                );
            }
            None => {
                res.check(
                    out == Err(IntrinError::BadGetRegParam)
                        && cpu.is_empty()
                        && cpu.reports() == [(IntrinError::BadGetRegParam, sel)],
                    "getreg reports once",
                    u64::from(sel),
                );
            }
        }
    }
}

fn suite_setreg_dispatch(res: &mut TestSuiteResult) {
    let mut cpu = InsnTrace::new();
    for sel in SELECTOR_SWEEP {
        cpu.clear();
        let out = ia64::setreg(&mut cpu, sel, 0x5a);
        match SetReg::classify(sel) {
            Some(class) => {
                res.check(
                    out.is_ok()
                        && cpu.insns() == [ia64::write_insn(class, 0x5a)]
                        && cpu.reports().is_empty(),
                    "setreg emits one insn",
                    u64::from(sel),
                );
            }
            None => {
                res.check(
                    out == Err(IntrinError::BadSetRegParam)
                        && cpu.is_empty()
                        && cpu.reports() == [(IntrinError::BadSetRegParam, sel)],
                    "setreg reports once",
                    u64::from(sel),
                );
            }
        }
    }
    for sel in IA64_REG_INDR_CPUID..=IA64_REG_INDR_RR {
        cpu.clear();
        let out = ia64::setindreg(&mut cpu, sel, 0, 0);
        let writable = sel != IA64_REG_INDR_CPUID;
        res.check(out.is_ok() == writable, "setindreg", u64::from(sel));
        res.check(cpu.len() == usize::from(writable), "setindreg emission", u64::from(sel));
    }
}

fn suite_lfetch_hints(res: &mut TestSuiteResult) {
    let mut cpu = InsnTrace::new();
    for (i, a) in LfHint::ALL.iter().enumerate() {
        for b in &LfHint::ALL[i + 1..] {
            for kind in LfetchKind::ALL {
                let x = Insn::Lfetch { kind, hint: *a, addr: 0 };
                let y = Insn::Lfetch { kind, hint: *b, addr: 0 };
                res.check(x != y && x.to_string() != y.to_string(), "distinct", 0);
            }
        }
    }
    for raw in 4..=u8::MAX {
        cpu.clear();
        let out = ia64::lfetch_raw(&mut cpu, raw, 0x1000);
        res.check(out == Err(IntrinError::BadHint) && cpu.is_empty(), "raw hint", u64::from(raw));
        res.check(cpu.reports().len() == 1, "raw hint report", u64::from(raw));
    }
}

fn suite_getreg_stability(res: &mut TestSuiteResult) {
    let mut cpu = SimCpu::new();
    for sel in SELECTOR_SWEEP {
        if GetReg::classify(sel).is_none() || sel == IA64_REG_AR_ITC {
            continue;
        }
        let first = ia64::getreg(&mut cpu, sel);
        let second = ia64::getreg(&mut cpu, sel);
        res.check(first == second, "stable read", u64::from(sel));
    }
    let first = ia64::getreg(&mut cpu, IA64_REG_AR_ITC);
    let second = ia64::getreg(&mut cpu, IA64_REG_AR_ITC);
    res.check(first != second, "ar.itc advances", 0);
    res.check(cpu.faults().is_empty(), "no faults", cpu.faults().len() as u64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_suites_pass() {
        let summary = tests_run_all();
        assert_eq!(summary.suite_count, SUITES.len());
        assert!(summary.total_tests > 0);
        for res in &summary.suites[..summary.suite_count] {
            assert_eq!(res.failed, 0, "suite {}", res.name);
        }
    }

    #[test]
    fn single_suite_counts() {
        let res = run_suite(&SUITES[1]);
        assert_eq!(res.name, "literals");
        assert_eq!(res.total, res.passed);
    }
}
