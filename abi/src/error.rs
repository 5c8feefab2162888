//! Error codes for register intrinsics

use core::ffi::c_int;
use core::fmt;

/// Implement the C-int conversions for kernel error enums.
///
/// Generates `as_c_int()` and `from_c_int()` for `#[repr(i32)]` error enums
/// that follow the kernel's negative-code convention. Codes outside the
/// listed variants, zero included, decode to `None`.
macro_rules! impl_kernel_error {
    ($ty:ty, variants: { $($val:literal => $variant:ident),* $(,)? }) => {
        impl $ty {
            /// Convert to C-style integer.
            #[inline]
            pub fn as_c_int(self) -> c_int {
                self as c_int
            }

            /// Convert from C-style integer.
            #[inline]
            pub fn from_c_int(val: c_int) -> Option<Self> {
                match val {
                    $($val => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

/// Intrinsic operation result type
pub type IntrinResult<T> = Result<T, IntrinError>;

/// Misuse of a register intrinsic.
///
/// Every variant is a caller programming error: the selector or mode has no
/// instruction form, so nothing was emitted. Success is `Ok`, never a variant.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntrinError {
    /// Register selector has no readable class
    BadGetRegParam = -1,
    /// Register selector has no writable class
    BadSetRegParam = -2,
    /// Prefetch hint outside none/nt1/nt2/nta
    BadHint = -3,
    /// Unknown mux1 permutation
    BadMux1Mode = -4,
    /// Unknown `hint` instruction mode
    BadHintMode = -5,
}

impl_kernel_error!(IntrinError, variants: {
    -1 => BadGetRegParam,
    -2 => BadSetRegParam,
    -3 => BadHint,
    -4 => BadMux1Mode,
    -5 => BadHintMode,
});

impl fmt::Display for IntrinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::BadGetRegParam => "bad register selector for getreg",
            Self::BadSetRegParam => "bad register selector for setreg",
            Self::BadHint => "bad lfetch hint",
            Self::BadMux1Mode => "bad mux1 mode",
            Self::BadHintMode => "bad hint mode",
        };
        f.write_str(msg)
    }
}
