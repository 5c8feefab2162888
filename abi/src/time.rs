//! Time-representation width of a target ABI.
//!
//! Socket options that carry a `struct timeval`/`struct timespec` exist in an
//! `_OLD` form (time in a kernel `long`) and a `_NEW` form (64-bit time on
//! 32-bit targets). Which one a plain name such as `SO_TIMESTAMP` means is a
//! property of the target:
//! - 64-bit longs always use the `_OLD` value, decided at build time
//! - otherwise the `_OLD` value is used only while `time_t` is as wide as
//!   `__kernel_long_t`, and the `_NEW` value once `time_t` is 64-bit

/// Widths that decide between `_OLD` and `_NEW` socket time options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimeAbi {
    /// `__BITS_PER_LONG` of the target.
    pub bits_per_long: u32,
    /// `sizeof(time_t)` in the caller's libc.
    pub time_size: usize,
    /// `sizeof(__kernel_long_t)`.
    pub kernel_long_size: usize,
}

impl TimeAbi {
    /// 64-bit long targets (alpha, sparc64, ia64, ...).
    pub const LP64: Self = Self::new(64, 8, 8);

    /// 32-bit target with a 32-bit `time_t`.
    pub const ILP32_TIME32: Self = Self::new(32, 4, 4);

    /// 32-bit target with a 64-bit `time_t`.
    pub const ILP32_TIME64: Self = Self::new(32, 8, 4);

    #[inline]
    pub const fn new(bits_per_long: u32, time_size: usize, kernel_long_size: usize) -> Self {
        Self {
            bits_per_long,
            time_size,
            kernel_long_size,
        }
    }

    /// The ABI of the target this crate is being compiled for.
    ///
    /// 32-bit targets get a 64-bit `time_t` when their libc has no 32-bit
    /// time at all: musl since 1.2 and every riscv32 libc. Other 32-bit
    /// targets are taken as 32-bit time. A glibc build with `_TIME_BITS=64`
    /// is not visible to `cfg` and needs `TimeAbi::ILP32_TIME64` passed
    /// explicitly.
    #[inline]
    pub const fn host() -> Self {
        #[cfg(target_pointer_width = "64")]
        {
            Self::LP64
        }
        #[cfg(all(
            not(target_pointer_width = "64"),
            any(target_env = "musl", target_arch = "riscv32")
        ))]
        {
            Self::ILP32_TIME64
        }
        #[cfg(all(
            not(target_pointer_width = "64"),
            not(any(target_env = "musl", target_arch = "riscv32"))
        ))]
        {
            Self::ILP32_TIME32
        }
    }

    /// True when the plain option names mean their `_OLD` values.
    #[inline]
    pub const fn uses_old_time(self) -> bool {
        if self.bits_per_long == 64 {
            true
        } else {
            self.time_size == self.kernel_long_size
        }
    }

    /// Pick `old` or `new` for this ABI.
    #[inline]
    pub const fn select(self, old: i32, new: i32) -> i32 {
        if self.uses_old_time() { old } else { new }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long64_always_selects_old() {
        assert_eq!(TimeAbi::LP64.select(29, 63), 29);
        // bits_per_long wins over a mismatched time width
        assert_eq!(TimeAbi::new(64, 8, 4).select(29, 63), 29);
    }

    #[test]
    fn ilp32_compares_widths() {
        assert_eq!(TimeAbi::ILP32_TIME32.select(29, 63), 29);
        assert_eq!(TimeAbi::ILP32_TIME64.select(29, 63), 63);
    }

    #[test]
    fn host_matches_target() {
        let host = TimeAbi::host();
        assert_eq!(host.bits_per_long as usize, usize::BITS as usize);
        if cfg!(target_pointer_width = "64") {
            assert_eq!(host, TimeAbi::LP64);
        } else if cfg!(any(target_env = "musl", target_arch = "riscv32")) {
            assert_eq!(host, TimeAbi::ILP32_TIME64);
            assert!(!host.uses_old_time());
        } else {
            assert_eq!(host, TimeAbi::ILP32_TIME32);
        }
    }
}
