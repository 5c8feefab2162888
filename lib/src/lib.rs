#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[doc(hidden)]
pub use paste;

pub mod ia64;
pub mod klog;

pub use crosshdr_abi as abi;

pub use ia64::{Ia64Cpu, Insn, InsnTrace, SimCpu};
pub use klog::{klog_get_level, klog_init, klog_is_enabled, klog_set_level, KlogLevel};
