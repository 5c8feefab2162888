//! Cross-architecture Linux UAPI fragments.
//!
//! This crate provides the canonical definitions of the architecture-specific
//! kernel ABI values that generic headers leave to `asm/`:
//! - tile signal-action flags
//! - xtensa strace register offsets and ptrace requests
//! - alpha socket option numbers
//! - sparc siginfo layout tuning
//! - ia64 register selectors and intrinsic operand enumerations
//!
//! Every value is a plain `pub const` so it folds at compile time. Each header
//! additionally exposes a [`Catalog`] so tooling can enumerate and cross-check
//! the symbols without re-parsing C.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod arch;
pub mod catalog;
pub mod error;
pub mod time;

pub use catalog::{Arch, Catalog, CatalogError, Constant, KernelSeries};
pub use error::*;
pub use time::TimeAbi;

/// Every catalog in this crate, in kernel-series order.
pub static ALL_CATALOGS: &[&Catalog] = &[
    &arch::tile::signal::CATALOG,
    &arch::xtensa::ptrace::CATALOG,
    &arch::sparc::siginfo::CATALOG,
    &arch::ia64::regs::CATALOG,
    &arch::ia64::intrin::CATALOG,
    &arch::alpha::socket::CATALOG,
];

/// Find the catalog for one architecture header, e.g. `(Arch::Alpha, "asm/socket.h")`.
pub fn find_catalog(arch: Arch, header: &str) -> Option<&'static Catalog> {
    ALL_CATALOGS
        .iter()
        .copied()
        .find(|c| c.arch == arch && c.header == header)
}
