//! Differential test-vector generator for the 8086 ALU instruction set.
//!
//! For every consecutive pair of a boundary-focused operand catalog, every
//! instruction in the matrix is invoked at each of its widths under two
//! initial flag states (all relevant flags clear, then all of OSZAPC set),
//! and one record per invocation is emitted: operands, flags before,
//! result, flags after. A downstream comparator diffs the stream against
//! the same matrix run on an emulator to validate flag and result
//! correctness instruction-by-instruction.

pub mod alu;
pub mod catalog;
pub mod flags;
pub mod harness;
pub mod ops;

pub use flags::{Flags, OSZAPC};
pub use harness::{run, run_json, HarnessError, Record};
