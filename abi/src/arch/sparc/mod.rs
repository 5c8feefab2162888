//! sparc and sparc64 definitions.

pub mod siginfo;

pub use siginfo::{SiginfoLayout, SparcAbi};
