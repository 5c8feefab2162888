//! xtensa definitions.

pub mod ptrace;

pub use ptrace::XtensaReg;
