//! Test driver and record reporter.
//!
//! Single pass over the cross product {operand pair x instruction x width
//! x initial flag state}. For every invocation the driver establishes the
//! input flags from scratch, calls the adapter exactly once, captures the
//! resulting flags immediately, and emits one record. Nothing touches the
//! flags context between the call and the capture.

use std::fmt;
use std::io::Write;

use serde::Serialize;
use thiserror::Error;

use crate::catalog::{pairs, TEST_OPERANDS};
use crate::flags::{Flags, OSZAPC};
use crate::ops::{OpDescriptor, OPERATIONS};

/// The two initial flag states every invocation is bracketed by, in
/// emission order: all relevant flags clear, then all of OSZAPC set.
pub const INITIAL_FLAG_STATES: [u16; 2] = [0, OSZAPC];

/// Errors from the reporter. The matrix itself has no failure paths; only
/// the output stream can fail.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to write test record: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize test record: {0}")]
    Json(#[from] serde_json::Error),
}

/// One emitted test vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Mnemonic including the width suffix, e.g. "add16" or "daa8"
    pub name: &'static str,
    /// Width suffix: 16 or 8
    pub width: u8,
    pub op1: u16,
    pub op2: u16,
    /// Flags established immediately before the call
    pub in_flags: u16,
    pub result: u16,
    /// Flags captured immediately after the call
    pub out_flags: u16,
}

impl fmt::Display for Record {
    /// Canonical text form: `name: op1 op2 inflags result outflags`,
    /// fixed-width lowercase hex fields.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}: {:04x} {:04x} {:04x} {:04x} {:04x}",
            self.name, self.width, self.op1, self.op2, self.in_flags, self.result, self.out_flags
        )
    }
}

/// Run one adapter invocation under a freshly established flag state and
/// build its record. This is the whole flag-state protocol: the `Flags`
/// context is created, passed, and read back with no intervening step.
fn invoke(
    op: &OpDescriptor,
    adapter: crate::alu::AdapterFn,
    width: u8,
    op1: u16,
    op2: u16,
    initial: u16,
) -> Record {
    let mut flags = Flags::from_bits(initial);
    let in_flags = flags.bits();
    let result = adapter(&mut flags, op1, op2);
    let out_flags = flags.bits();
    Record {
        name: op.name,
        width,
        op1,
        op2,
        in_flags,
        result,
        out_flags,
    }
}

/// Drive the full matrix for an explicit catalog and instruction table,
/// handing each record to `emit` in strict invocation order.
pub fn drive<F>(catalog: &[u16], ops: &[OpDescriptor], mut emit: F) -> Result<u64, HarnessError>
where
    F: FnMut(&Record) -> Result<(), HarnessError>,
{
    let mut count = 0u64;
    for (op1, op2) in pairs(catalog) {
        for op in ops {
            // 16-bit form first when the instruction has one
            if let Some(word) = op.word {
                for initial in INITIAL_FLAG_STATES {
                    emit(&invoke(op, word, 16, op1, op2, initial))?;
                    count += 1;
                }
            }
            for initial in INITIAL_FLAG_STATES {
                emit(&invoke(op, op.byte, 8, op1, op2, initial))?;
                count += 1;
            }
        }
    }
    Ok(count)
}

/// Run the built-in matrix, writing one text record per line. Lines are
/// complete before the next record starts, so the stream can be consumed
/// line-by-line by a downstream comparator.
pub fn run<W: Write>(out: &mut W) -> Result<u64, HarnessError> {
    let count = drive(TEST_OPERANDS, OPERATIONS, |rec| {
        writeln!(out, "{}", rec)?;
        Ok(())
    })?;
    out.flush()?;
    Ok(count)
}

/// Run the built-in matrix, writing one JSON record per line.
pub fn run_json<W: Write>(out: &mut W) -> Result<u64, HarnessError> {
    let count = drive(TEST_OPERANDS, OPERATIONS, |rec| {
        serde_json::to_writer(&mut *out, rec)?;
        out.write_all(b"\n")?;
        Ok(())
    })?;
    out.flush()?;
    Ok(count)
}
