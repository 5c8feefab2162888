//! ia64 (Itanium) definitions.
//!
//! The register selectors are the numbers the Intel compiler's
//! `__getReg()`/`__setReg()` intrinsics accept; the kernel's GCC intrinsics use
//! the same numbering so both toolchains share one `ia64regs.h`.

pub mod intrin;
pub mod psr;
pub mod regs;

pub use intrin::{FetchAddInc, HintMode, LfHint, Mux1Mode};
pub use psr::PsrBits;
pub use regs::{GetReg, IndirectFile, SetReg};
