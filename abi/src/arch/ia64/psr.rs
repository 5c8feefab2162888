//! Processor status register bits (`asm/kregs.h`).

bitflags::bitflags! {
    /// ia64 PSR.
    ///
    /// `ssm`/`rsm` take a 24-bit immediate mask of system bits; `sum`/`rum`
    /// are restricted to the user mask in bits 0-5.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PsrBits: u64 {
        /// Big-endian data accesses.
        const BE = 1 << 1;
        /// User performance monitor enable.
        const UP = 1 << 2;
        /// Alignment check.
        const AC = 1 << 3;
        /// Lower floating-point registers written.
        const MFL = 1 << 4;
        /// Upper floating-point registers written.
        const MFH = 1 << 5;
        /// Interruption collection.
        const IC = 1 << 13;
        /// External interrupts enabled.
        const I = 1 << 14;
        /// Protection key checking.
        const PK = 1 << 15;
        /// Data address translation.
        const DT = 1 << 17;
        const DFL = 1 << 18;
        const DFH = 1 << 19;
        /// Secure performance monitors.
        const SP = 1 << 20;
        /// Privileged performance monitor enable.
        const PP = 1 << 21;
        const DI = 1 << 22;
        const SI = 1 << 23;
        /// Debug breakpoint fault.
        const DB = 1 << 24;
        const LP = 1 << 25;
        const TB = 1 << 26;
        /// Register stack translation.
        const RT = 1 << 27;
        /// Instruction set (IA-32 when set).
        const IS = 1 << 34;
        /// Machine check abort mask.
        const MC = 1 << 35;
        /// Instruction address translation.
        const IT = 1 << 36;
        const ID = 1 << 37;
        const DA = 1 << 38;
        const DD = 1 << 39;
        /// Single step.
        const SS = 1 << 40;
        const ED = 1 << 43;
        /// Register bank.
        const BN = 1 << 44;
        const IA = 1 << 45;
        /// Virtual machine.
        const VM = 1 << 46;
    }
}

impl PsrBits {
    /// Bits `sum`/`rum` may change.
    pub const USER_MASK: Self = Self::BE
        .union(Self::UP)
        .union(Self::AC)
        .union(Self::MFL)
        .union(Self::MFH);

    /// Bits addressable by the `ssm`/`rsm` immediate.
    pub const SYSTEM_MASK_RANGE: u64 = (1 << 24) - 1;

    /// PSR.l: the half written by `mov psr.l=`.
    pub const LOWER_HALF: u64 = 0xffff_ffff;

    /// Whether `self` fits the `ssm`/`rsm` immediate.
    #[inline]
    pub const fn fits_system_mask(self) -> bool {
        self.bits() & !Self::SYSTEM_MASK_RANGE == 0
    }

    /// Whether `self` touches only user-mask bits.
    #[inline]
    pub const fn is_user_mask(self) -> bool {
        self.bits() & !Self::USER_MASK.bits() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kregs_bit_positions() {
        assert_eq!(PsrBits::IC.bits(), 0x2000);
        assert_eq!(PsrBits::I.bits(), 0x4000);
        assert_eq!(PsrBits::DT.bits(), 1 << 17);
        assert_eq!(PsrBits::IS.bits(), 1 << 34);
        assert_eq!(PsrBits::USER_MASK.bits(), 0x3e);
    }

    #[test]
    fn mask_ranges() {
        assert!((PsrBits::I | PsrBits::IC).fits_system_mask());
        assert!(!PsrBits::IT.fits_system_mask());
        assert!(PsrBits::UP.is_user_mask());
        assert!(!PsrBits::I.is_user_mask());
    }
}
