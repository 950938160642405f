//! Static instruction descriptor table.
//!
//! The driver iterates this table instead of hard-coding one block per
//! instruction; each entry carries the adapter function for every width
//! the instruction exists in. The order is fixed: arithmetic/logical
//! binary ops, then the rotate/shift family, then the BCD group.

use crate::alu;
use crate::alu::AdapterFn;

/// How an instruction consumes its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    /// True two-operand instruction
    Binary,
    /// BCD adjustment: op1 is the accumulator, op2 is ignored
    Accumulator,
}

/// One instruction in the test matrix.
pub struct OpDescriptor {
    /// Mnemonic without width suffix
    pub name: &'static str,
    pub kind: OpKind,
    /// 16-bit form, if the instruction has one
    pub word: Option<AdapterFn>,
    /// 8-bit form (every instruction has one)
    pub byte: AdapterFn,
}

impl OpDescriptor {
    const fn binary(name: &'static str, word: AdapterFn, byte: AdapterFn) -> Self {
        Self {
            name,
            kind: OpKind::Binary,
            word: Some(word),
            byte,
        }
    }

    const fn accumulator(name: &'static str, byte: AdapterFn) -> Self {
        Self {
            name,
            kind: OpKind::Accumulator,
            word: None,
            byte,
        }
    }
}

/// The full instruction set, in emission order.
pub const OPERATIONS: &[OpDescriptor] = &[
    OpDescriptor::binary("add", alu::add16, alu::add8),
    OpDescriptor::binary("or", alu::or16, alu::or8),
    OpDescriptor::binary("adc", alu::adc16, alu::adc8),
    OpDescriptor::binary("sbb", alu::sbb16, alu::sbb8),
    OpDescriptor::binary("and", alu::and16, alu::and8),
    OpDescriptor::binary("sub", alu::sub16, alu::sub8),
    OpDescriptor::binary("xor", alu::xor16, alu::xor8),
    OpDescriptor::binary("cmp", alu::cmp16, alu::cmp8),
    OpDescriptor::binary("test", alu::test16, alu::test8),
    OpDescriptor::binary("ror", alu::ror16, alu::ror8),
    OpDescriptor::binary("rcr", alu::rcr16, alu::rcr8),
    OpDescriptor::binary("rol", alu::rol16, alu::rol8),
    OpDescriptor::binary("rcl", alu::rcl16, alu::rcl8),
    OpDescriptor::binary("shr", alu::shr16, alu::shr8),
    OpDescriptor::binary("sar", alu::sar16, alu::sar8),
    OpDescriptor::binary("shl", alu::shl16, alu::shl8),
    OpDescriptor::accumulator("das", alu::das8),
    OpDescriptor::accumulator("daa", alu::daa8),
    OpDescriptor::accumulator("aaa", alu::aaa8),
    OpDescriptor::accumulator("aam", alu::aam8),
    OpDescriptor::accumulator("aad", alu::aad8),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order() {
        let names: Vec<&str> = OPERATIONS.iter().map(|op| op.name).collect();
        assert_eq!(
            names,
            [
                "add", "or", "adc", "sbb", "and", "sub", "xor", "cmp", "test", "ror", "rcr",
                "rol", "rcl", "shr", "sar", "shl", "das", "daa", "aaa", "aam", "aad"
            ]
        );
    }

    #[test]
    fn test_bcd_group_is_byte_only() {
        for op in OPERATIONS {
            match op.kind {
                OpKind::Binary => assert!(op.word.is_some(), "{} should have a 16-bit form", op.name),
                OpKind::Accumulator => {
                    assert!(op.word.is_none(), "{} should be 8-bit only", op.name)
                }
            }
        }
    }

    #[test]
    fn test_invocations_per_pair() {
        // 16 dual-width ops + 5 byte-only ops = 37 invocations per flag state
        let widths: usize = OPERATIONS
            .iter()
            .map(|op| 1 + op.word.is_some() as usize)
            .sum();
        assert_eq!(widths, 37);
    }
}
