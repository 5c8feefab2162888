//! Architecture-specific definitions.
//!
//! One module per architecture, one submodule per exported `asm/` header.
//! Unlike `core::arch`, nothing here is gated on the build target: the values
//! describe the target architecture's kernel ABI and are usable from any host.

pub mod alpha;
pub mod ia64;
pub mod sparc;
pub mod tile;
pub mod xtensa;
