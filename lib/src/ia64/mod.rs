//! ia64 register intrinsics.
//!
//! Every intrinsic is a free function over an [`Ia64Cpu`], the seam that
//! executes one [`Insn`]. Nothing here holds state: the register values live
//! in whatever implements the trait.
//!
//! Two executors ship with the crate:
//! - [`InsnTrace`] records the instruction stream and bad-parameter reports
//! - [`SimCpu`] models the architectural effect of each instruction
//!
//! # Example
//!
//! ```ignore
//! use crosshdr_lib::ia64::{self, InsnTrace};
//! use crosshdr_abi::arch::ia64::regs::IA64_REG_AR_ITC;
//!
//! let mut cpu = InsnTrace::new();
//! let _ = ia64::getreg(&mut cpu, IA64_REG_AR_ITC);
//! assert_eq!(cpu.render(), ["mov {res}=ar44"]);
//! ```

mod atomic;
mod cpu;
mod data;
mod fence;
mod indirect;
mod insn;
mod prefetch;
mod psr;
mod regaccess;
mod sim;
mod tlb;
mod trace;

pub use atomic::*;
pub use cpu::Ia64Cpu;
pub use data::*;
pub use fence::*;
pub use indirect::*;
pub use insn::{AccessSize, FpLoad, FpStore, Insn, LfetchKind, Sem};
pub use prefetch::*;
pub use psr::*;
pub use regaccess::*;
pub use sim::{SimCpu, SimFault, TlbEntry, TlbSide};
pub use tlb::*;
pub use trace::InsnTrace;
