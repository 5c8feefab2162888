//! Symbol tables for UAPI header fragments.
//!
//! Each architecture header is declared once with [`uapi_table!`], which emits
//! the `pub const` items callers use directly and a static [`Catalog`] that
//! lists the same symbols in definition order. The catalog is what lets tests
//! and tooling check the table invariants:
//! - symbols are unique within one header
//! - an alias names a symbol defined earlier in the same header
//! - an alias carries exactly the value of its target
//!
//! # Example
//!
//! ```ignore
//! use crosshdr_abi::arch::alpha::socket;
//!
//! assert_eq!(socket::CATALOG.get("SO_REUSEADDR"), Some(0x0004));
//! assert_eq!(socket::CATALOG.resolve("SCM_WIFI_STATUS").map(|c| c.name), Some("SO_WIFI_STATUS"));
//! ```

use core::fmt;

/// Architectures whose `asm/` headers this crate carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Arch {
    Tile,
    Xtensa,
    Alpha,
    Sparc,
    Ia64,
}

impl Arch {
    /// Directory name under `arch/` in the kernel tree.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tile => "tile",
            Self::Xtensa => "xtensa",
            Self::Alpha => "alpha",
            Self::Sparc => "sparc",
            Self::Ia64 => "ia64",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "tile" => Some(Self::Tile),
            "xtensa" => Some(Self::Xtensa),
            "alpha" => Some(Self::Alpha),
            "sparc" => Some(Self::Sparc),
            "ia64" => Some(Self::Ia64),
            _ => None,
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Long-term kernel series whose exported headers are tracked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KernelSeries {
    V4_14,
    V4_19,
    V5_4,
    V5_10,
    V5_15,
    V6_1,
    V6_6,
}

impl KernelSeries {
    /// All tracked series, oldest first.
    pub const ALL: [Self; 7] = [
        Self::V4_14,
        Self::V4_19,
        Self::V5_4,
        Self::V5_10,
        Self::V5_15,
        Self::V6_1,
        Self::V6_6,
    ];

    /// Series name as used for header directories, e.g. `"5.10.x"`.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V4_14 => "4.14.x",
            Self::V4_19 => "4.19.x",
            Self::V5_4 => "5.4.x",
            Self::V5_10 => "5.10.x",
            Self::V5_15 => "5.15.x",
            Self::V6_1 => "6.1.x",
            Self::V6_6 => "6.6.x",
        }
    }

    /// `(major, minor)` of the series.
    #[inline]
    pub const fn version(self) -> (u32, u32) {
        match self {
            Self::V4_14 => (4, 14),
            Self::V4_19 => (4, 19),
            Self::V5_4 => (5, 4),
            Self::V5_10 => (5, 10),
            Self::V5_15 => (5, 15),
            Self::V6_1 => (6, 1),
            Self::V6_6 => (6, 6),
        }
    }

    /// Parse either a series name (`"5.4.x"`) or a release tag (`"v5.4.123"`).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.strip_prefix('v').unwrap_or(s);
        let mut parts = s.split('.');
        let major = parts.next()?.parse::<u32>().ok()?;
        let minor = parts.next()?.parse::<u32>().ok()?;
        match parts.next() {
            None | Some("x") => {}
            Some(patch) if patch.parse::<u32>().is_ok() => {}
            Some(_) => return None,
        }
        if parts.next().is_some() {
            return None;
        }
        Self::ALL
            .iter()
            .copied()
            .find(|series| series.version() == (major, minor))
    }
}

impl fmt::Display for KernelSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named value of a header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Constant {
    pub name: &'static str,
    pub value: i64,
    /// Symbol this one is defined as, if it is an alias.
    pub alias_of: Option<&'static str>,
}

impl Constant {
    #[inline]
    pub const fn is_alias(&self) -> bool {
        self.alias_of.is_some()
    }
}

/// Violations of the catalog invariants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// The same symbol is defined twice.
    DuplicateSymbol(&'static str),
    /// An alias names a symbol that is not defined before it.
    DanglingAlias {
        name: &'static str,
        target: &'static str,
    },
    /// An alias carries a different value than its target.
    AliasMismatch {
        name: &'static str,
        target: &'static str,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSymbol(name) => write!(f, "symbol {name} defined twice"),
            Self::DanglingAlias { name, target } => {
                write!(f, "{name} aliases {target}, which is not defined before it")
            }
            Self::AliasMismatch { name, target } => {
                write!(f, "{name} aliases {target} but carries a different value")
            }
        }
    }
}

/// The symbol table of one architecture header.
#[derive(Debug)]
pub struct Catalog {
    pub arch: Arch,
    /// Header path relative to the exported include directory.
    pub header: &'static str,
    pub series: KernelSeries,
    pub entries: &'static [Constant],
}

impl Catalog {
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Constant> {
        self.entries.iter()
    }

    pub fn lookup(&self, name: &str) -> Option<&'static Constant> {
        self.entries.iter().find(|c| c.name == name)
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.lookup(name).map(|c| c.value)
    }

    /// Follow the alias chain of `name` down to the symbol that defines the value.
    pub fn resolve(&self, name: &str) -> Option<&'static Constant> {
        let mut current = self.lookup(name)?;
        // A valid table has no cycles; bound the walk anyway.
        for _ in 0..self.entries.len() {
            match current.alias_of {
                Some(target) => current = self.lookup(target)?,
                None => return Some(current),
            }
        }
        None
    }

    /// All symbols carrying `value`, in definition order.
    pub fn names_for(&self, value: i64) -> impl Iterator<Item = &'static str> {
        self.entries
            .iter()
            .filter(move |c| c.value == value)
            .map(|c| c.name)
    }

    /// Check uniqueness and alias well-formedness.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (i, entry) in self.entries.iter().enumerate() {
            let earlier = &self.entries[..i];
            if earlier.iter().any(|c| c.name == entry.name) {
                return Err(CatalogError::DuplicateSymbol(entry.name));
            }
            if let Some(target) = entry.alias_of {
                let Some(def) = earlier.iter().find(|c| c.name == target) else {
                    return Err(CatalogError::DanglingAlias {
                        name: entry.name,
                        target,
                    });
                };
                if def.value != entry.value {
                    return Err(CatalogError::AliasMismatch {
                        name: entry.name,
                        target,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Declare the constants of one header together with its [`Catalog`].
///
/// Entries are `pub const NAME: TYPE = VALUE;`. An entry whose value is another
/// symbol of the same header is marked `=> alias` so the catalog records the
/// relation.
///
/// ```ignore
/// crate::uapi_table! {
///     pub static CATALOG = (Arch::Alpha, "asm/socket.h", KernelSeries::V5_10);
///
///     pub const SO_ATTACH_FILTER: i32 = 26;
///     pub const SO_GET_FILTER: i32 = SO_ATTACH_FILTER => alias;
/// }
/// ```
#[macro_export]
macro_rules! uapi_table {
    (@alias $value:expr) => {
        None
    };

    (@alias $value:expr, alias) => {
        Some(stringify!($value))
    };

    (
        $(#[$cat_meta:meta])*
        $cat_vis:vis static $cat:ident = ($arch:expr, $header:literal, $series:expr);
        $(
            $(#[$meta:meta])*
            pub const $name:ident : $ty:ty = $value:expr $(=> $marker:ident)?;
        )*
    ) => {
        $(
            $(#[$meta])*
            pub const $name: $ty = $value;
        )*

        $(#[$cat_meta])*
        $cat_vis static $cat: $crate::catalog::Catalog = $crate::catalog::Catalog {
            arch: $arch,
            header: $header,
            series: $series,
            entries: &[
                $(
                    $crate::catalog::Constant {
                        name: stringify!($name),
                        value: $name as i64,
                        alias_of: $crate::uapi_table!(@alias $value $(, $marker)?),
                    },
                )*
            ],
        };
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    static BROKEN_ALIAS: Catalog = Catalog {
        arch: Arch::Alpha,
        header: "asm/test.h",
        series: KernelSeries::V5_10,
        entries: &[
            Constant {
                name: "A",
                value: 1,
                alias_of: None,
            },
            Constant {
                name: "B",
                value: 2,
                alias_of: Some("A"),
            },
        ],
    };

    static FORWARD_ALIAS: Catalog = Catalog {
        arch: Arch::Alpha,
        header: "asm/test.h",
        series: KernelSeries::V5_10,
        entries: &[
            Constant {
                name: "B",
                value: 1,
                alias_of: Some("A"),
            },
            Constant {
                name: "A",
                value: 1,
                alias_of: None,
            },
        ],
    };

    static DUPLICATE: Catalog = Catalog {
        arch: Arch::Tile,
        header: "asm/test.h",
        series: KernelSeries::V4_14,
        entries: &[
            Constant {
                name: "A",
                value: 1,
                alias_of: None,
            },
            Constant {
                name: "A",
                value: 1,
                alias_of: None,
            },
        ],
    };

    #[test]
    fn validate_rejects_broken_tables() {
        assert_eq!(
            BROKEN_ALIAS.validate(),
            Err(CatalogError::AliasMismatch {
                name: "B",
                target: "A"
            })
        );
        assert_eq!(
            FORWARD_ALIAS.validate(),
            Err(CatalogError::DanglingAlias {
                name: "B",
                target: "A"
            })
        );
        assert_eq!(DUPLICATE.validate(), Err(CatalogError::DuplicateSymbol("A")));
    }

    #[test]
    fn resolve_follows_alias_chain() {
        assert_eq!(FORWARD_ALIAS.resolve("B").map(|c| c.name), Some("A"));
        assert_eq!(FORWARD_ALIAS.resolve("missing"), None);
    }

    #[test]
    fn kernel_series_parse() {
        assert_eq!(KernelSeries::parse("5.4.x"), Some(KernelSeries::V5_4));
        assert_eq!(KernelSeries::parse("v4.14.312"), Some(KernelSeries::V4_14));
        assert_eq!(KernelSeries::parse("6.6"), Some(KernelSeries::V6_6));
        assert_eq!(KernelSeries::parse("5.5.x"), None);
        assert_eq!(KernelSeries::parse("v5.10-rc1"), None);
        for series in KernelSeries::ALL {
            assert_eq!(KernelSeries::parse(series.as_str()), Some(series));
        }
    }

    #[test]
    fn arch_names_round_trip() {
        for arch in [Arch::Tile, Arch::Xtensa, Arch::Alpha, Arch::Sparc, Arch::Ia64] {
            assert_eq!(Arch::parse(arch.as_str()), Some(arch));
        }
        assert_eq!(Arch::parse("um"), None);
    }
}
