//! Operand catalog and pair source.
//!
//! Operand values cluster around the binary boundaries (0x0000, 0x4000,
//! 0x8000, 0xC000, 0xFFFF and each +/-0..15 offset) to stress carry,
//! overflow, and sign edge cases. Pairs are formed by sliding a window of
//! size 2 over the catalog, so each value is tested both as the first and
//! the second operand of adjacent pairs.

/// The fixed operand table. The leading 0 is a sentinel that only serves
/// as the "previous" value for the first real pair; it is never a
/// "current" operand.
pub const TEST_OPERANDS: &[u16] = &[
    0, // Sentinel so pair 0 has a well-defined first operand
    0x0000, 0x0001, 0x0002, 0x0003, 0x0004, 0x0005, 0x0006, 0x0007, //
    0x0008, 0x0009, 0x000A, 0x000B, 0x000C, 0x000D, 0x000E, 0x000F, //
    0x3FF0, 0x3FF1, 0x3FF2, 0x3FF3, 0x3FF4, 0x3FF5, 0x3FF6, 0x3FF7, //
    0x3FF8, 0x3FF9, 0x3FFA, 0x3FFB, 0x3FFC, 0x3FFD, 0x3FFE, 0x3FFF, //
    0x4000, 0x4001, 0x4002, 0x4003, 0x4004, 0x4005, 0x4006, 0x4007, //
    0x4008, 0x4009, 0x400A, 0x400B, 0x400C, 0x400D, 0x400E, 0x400F, //
    0x7FF0, 0x7FF1, 0x7FF2, 0x7FF3, 0x7FF4, 0x7FF5, 0x7FF6, 0x7FF7, //
    0x7FF8, 0x7FF9, 0x7FFA, 0x7FFB, 0x7FFC, 0x7FFD, 0x7FFE, 0x7FFF, //
    0x8000, 0x8001, 0x8002, 0x8003, 0x8004, 0x8005, 0x8006, 0x8007, //
    0x8008, 0x8009, 0x800A, 0x800B, 0x800C, 0x800D, 0x800E, 0x800F, //
    0xBFF0, 0xBFF1, 0xBFF2, 0xBFF3, 0xBFF4, 0xBFF5, 0xBFF6, 0xBFF7, //
    0xBFF8, 0xBFF9, 0xBFFA, 0xBFFB, 0xBFFC, 0xBFFD, 0xBFFE, 0xBFFF, //
    0xC000, 0xC001, 0xC002, 0xC003, 0xC004, 0xC005, 0xC006, 0xC007, //
    0xC008, 0xC009, 0xC00A, 0xC00B, 0xC00C, 0xC00D, 0xC00E, 0xC00F, //
    0xFFF0, 0xFFF1, 0xFFF2, 0xFFF3, 0xFFF4, 0xFFF5, 0xFFF6, 0xFFF7, //
    0xFFF8, 0xFFF9, 0xFFFA, 0xFFFB, 0xFFFC, 0xFFFD, 0xFFFE, 0xFFFF,
];

/// Iterate consecutive `(previous, current)` operand pairs from a catalog.
///
/// Yields `catalog.len() - 1` pairs, in catalog order. Deterministic and
/// restartable: a fresh call always produces the same sequence.
pub fn pairs(catalog: &[u16]) -> impl Iterator<Item = (u16, u16)> + '_ {
    catalog.windows(2).map(|w| (w[0], w[1]))
}

/// Pairs from the built-in operand table.
pub fn operand_pairs() -> impl Iterator<Item = (u16, u16)> {
    pairs(TEST_OPERANDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_count() {
        assert_eq!(TEST_OPERANDS.len(), 129);
        assert_eq!(operand_pairs().count(), TEST_OPERANDS.len() - 1);
    }

    #[test]
    fn test_pairs_are_adjacent_catalog_entries() {
        for (i, (op1, op2)) in operand_pairs().enumerate() {
            assert_eq!(op1, TEST_OPERANDS[i]);
            assert_eq!(op2, TEST_OPERANDS[i + 1]);
        }
    }

    #[test]
    fn test_sentinel_never_current_operand() {
        // The sentinel (index 0) is only ever op1 of the very first pair:
        // every "current" operand comes from index 1 onward
        let first = operand_pairs().next().unwrap();
        assert_eq!(first, (0, 0x0000));
        for (i, (_, op2)) in operand_pairs().enumerate() {
            assert_eq!(op2, TEST_OPERANDS[i + 1]);
        }
    }

    #[test]
    fn test_restartable() {
        let a: Vec<_> = operand_pairs().collect();
        let b: Vec<_> = operand_pairs().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_boundary_regions_present() {
        for anchor in [0x0000u16, 0x4000, 0x8000, 0xC000] {
            assert!(TEST_OPERANDS.contains(&anchor));
            assert!(TEST_OPERANDS.contains(&anchor.wrapping_sub(1)));
        }
        assert!(TEST_OPERANDS.contains(&0x7FFF));
        assert!(TEST_OPERANDS.contains(&0xFFFF));
    }
}
