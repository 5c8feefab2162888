//! Operand enumerations of ia64 `asm/gcc_intrin.h` (5.4.x).

use crate::catalog::{Arch, KernelSeries};

crate::uapi_table! {
    /// Numeric operand values of ia64 `asm/gcc_intrin.h`.
    pub static CATALOG = (Arch::Ia64, "asm/gcc_intrin.h", KernelSeries::V5_4);

    pub const IA64_HINT_PAUSE: u8 = 0;

    pub const IA64_MUX1_BRCST: u8 = 0;
    pub const IA64_MUX1_MIX: u8 = 8;
    pub const IA64_MUX1_SHUF: u8 = 9;
    pub const IA64_MUX1_ALT: u8 = 10;
    pub const IA64_MUX1_REV: u8 = 11;

    pub const IA64_LFHINT_NONE: u8 = 0;
    pub const IA64_LFHINT_NT1: u8 = 1;
    pub const IA64_LFHINT_NT2: u8 = 2;
    pub const IA64_LFHINT_NTA: u8 = 3;
}

/// Locality hint of `lfetch`.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LfHint {
    /// Temporal, all levels.
    None = IA64_LFHINT_NONE,
    /// Non-temporal at level 1.
    Nt1 = IA64_LFHINT_NT1,
    /// Non-temporal at level 2.
    Nt2 = IA64_LFHINT_NT2,
    /// Non-temporal at all levels.
    Nta = IA64_LFHINT_NTA,
}

impl LfHint {
    pub const ALL: [Self; 4] = [Self::None, Self::Nt1, Self::Nt2, Self::Nta];

    #[inline]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            IA64_LFHINT_NONE => Some(Self::None),
            IA64_LFHINT_NT1 => Some(Self::Nt1),
            IA64_LFHINT_NT2 => Some(Self::Nt2),
            IA64_LFHINT_NTA => Some(Self::Nta),
            _ => None,
        }
    }

    /// Completer appended to the mnemonic, empty for no hint.
    #[inline]
    pub const fn completer(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Nt1 => ".nt1",
            Self::Nt2 => ".nt2",
            Self::Nta => ".nta",
        }
    }
}

/// Byte permutation of `mux1`.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mux1Mode {
    /// Broadcast byte 0.
    Brcst = IA64_MUX1_BRCST,
    /// Interleave bytes of the two halves.
    Mix = IA64_MUX1_MIX,
    /// Perfect shuffle.
    Shuf = IA64_MUX1_SHUF,
    /// Alternate: even bytes then odd bytes.
    Alt = IA64_MUX1_ALT,
    /// Reverse byte order.
    Rev = IA64_MUX1_REV,
}

impl Mux1Mode {
    pub const ALL: [Self; 5] = [Self::Brcst, Self::Mix, Self::Shuf, Self::Alt, Self::Rev];

    #[inline]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            IA64_MUX1_BRCST => Some(Self::Brcst),
            IA64_MUX1_MIX => Some(Self::Mix),
            IA64_MUX1_SHUF => Some(Self::Shuf),
            IA64_MUX1_ALT => Some(Self::Alt),
            IA64_MUX1_REV => Some(Self::Rev),
            _ => None,
        }
    }

    #[inline]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Brcst => "@brcst",
            Self::Mix => "@mix",
            Self::Shuf => "@shuf",
            Self::Alt => "@alt",
            Self::Rev => "@rev",
        }
    }

    /// Source byte index for each destination byte, lowest byte first.
    pub const fn permutation(self) -> [u8; 8] {
        match self {
            Self::Brcst => [0, 0, 0, 0, 0, 0, 0, 0],
            Self::Mix => [0, 4, 2, 6, 1, 5, 3, 7],
            Self::Shuf => [0, 4, 1, 5, 2, 6, 3, 7],
            Self::Alt => [0, 2, 4, 6, 1, 3, 5, 7],
            Self::Rev => [7, 6, 5, 4, 3, 2, 1, 0],
        }
    }
}

/// Mode of the `hint` instruction.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HintMode {
    Pause = IA64_HINT_PAUSE,
}

impl HintMode {
    #[inline]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            IA64_HINT_PAUSE => Some(Self::Pause),
            _ => None,
        }
    }
}

/// The increments `fetchadd` can encode in its immediate.
#[repr(i8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FetchAddInc {
    Minus16 = -16,
    Minus8 = -8,
    Minus4 = -4,
    Minus1 = -1,
    Plus1 = 1,
    Plus4 = 4,
    Plus8 = 8,
    Plus16 = 16,
}

impl FetchAddInc {
    #[inline]
    pub const fn new(inc: i64) -> Option<Self> {
        match inc {
            -16 => Some(Self::Minus16),
            -8 => Some(Self::Minus8),
            -4 => Some(Self::Minus4),
            -1 => Some(Self::Minus1),
            1 => Some(Self::Plus1),
            4 => Some(Self::Plus4),
            8 => Some(Self::Plus8),
            16 => Some(Self::Plus16),
            _ => None,
        }
    }

    #[inline]
    pub const fn get(self) -> i64 {
        self as i8 as i64
    }
}
