//! 8086 FLAGS register model and the flag-state protocol.
//!
//! The test driver communicates flag state with the instruction adapters
//! through an explicit [`Flags`] context rather than a process-wide slot.
//! Every adapter takes `&mut Flags`, so the establish -> execute -> capture
//! sequence cannot be reordered or interleaved: the driver holds the only
//! borrow for the duration of one invocation.

use serde::{Deserialize, Serialize};

// Flag bit positions in the FLAGS register
pub const FLAG_CF: u16 = 0x0001; // Carry Flag
pub const FLAG_PF: u16 = 0x0004; // Parity Flag
pub const FLAG_AF: u16 = 0x0010; // Auxiliary Carry Flag
pub const FLAG_ZF: u16 = 0x0040; // Zero Flag
pub const FLAG_SF: u16 = 0x0080; // Sign Flag
pub const FLAG_DF: u16 = 0x0400; // Direction Flag
pub const FLAG_OF: u16 = 0x0800; // Overflow Flag

/// All arithmetic-relevant flags set: the second initial state of the
/// dual-flag-state protocol.
pub const OSZAPC: u16 = FLAG_OF | FLAG_SF | FLAG_ZF | FLAG_AF | FLAG_PF | FLAG_CF;

/// Processor flags context threaded through every adapter call.
///
/// Bits outside the seven named ones are carried opaquely; the driver
/// never forces them, so a cleared input state reads back as exactly 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Flags {
    bits: u16,
}

impl Flags {
    /// Build a flags context from a raw bit pattern
    pub fn from_bits(bits: u16) -> Self {
        Self { bits }
    }

    /// Raw FLAGS value
    #[inline]
    pub fn bits(&self) -> u16 {
        self.bits
    }

    /// Get flag
    #[inline]
    pub fn get(&self, flag: u16) -> bool {
        (self.bits & flag) != 0
    }

    /// Set flag
    #[inline]
    pub fn set(&mut self, flag: u16, value: bool) {
        if value {
            self.bits |= flag;
        } else {
            self.bits &= !flag;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oszapc_mask_value() {
        // OF | SF | ZF | AF | PF | CF
        assert_eq!(OSZAPC, 0x08D5);
    }

    #[test]
    fn test_set_and_clear_bits() {
        let mut f = Flags::from_bits(0);
        f.set(FLAG_CF, true);
        f.set(FLAG_OF, true);
        assert!(f.get(FLAG_CF));
        assert!(f.get(FLAG_OF));
        assert!(!f.get(FLAG_ZF));
        assert_eq!(f.bits(), FLAG_CF | FLAG_OF);

        f.set(FLAG_CF, false);
        assert!(!f.get(FLAG_CF));
        assert_eq!(f.bits(), FLAG_OF);
    }

    #[test]
    fn test_unnamed_bits_pass_through() {
        let mut f = Flags::from_bits(0xF002); // bits outside the named set
        f.set(FLAG_ZF, true);
        f.set(FLAG_ZF, false);
        assert_eq!(f.bits(), 0xF002);
    }
}
