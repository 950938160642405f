//! Instruction adapters: 8086 arithmetic, logic, shift/rotate, and BCD
//! adjustment semantics behind a uniform calling contract.
//!
//! Every adapter has the shape `fn(&mut Flags, u16, u16) -> u16`. 8-bit
//! forms operate on the low bytes of both operands and return the result
//! zero-extended. Shift and rotate counts come from the low byte of the
//! second operand. The flags context is both the starting condition and
//! the place the post-execution flags are left for capture; each call
//! performs its operation exactly once.

use crate::flags::{Flags, FLAG_AF, FLAG_CF, FLAG_OF, FLAG_PF, FLAG_SF, FLAG_ZF};

/// Uniform adapter signature shared by every instruction/width pair.
pub type AdapterFn = fn(&mut Flags, u16, u16) -> u16;

/// Calculate parity (true if even number of 1 bits in low byte)
#[inline]
fn parity(val: u8) -> bool {
    val.count_ones() % 2 == 0
}

/// Update ZF/SF/PF after an 8-bit operation
fn update_flags_8(flags: &mut Flags, result: u8) {
    flags.set(FLAG_ZF, result == 0);
    flags.set(FLAG_SF, (result & 0x80) != 0);
    flags.set(FLAG_PF, parity(result));
}

/// Update ZF/SF/PF after a 16-bit operation
fn update_flags_16(flags: &mut Flags, result: u16) {
    flags.set(FLAG_ZF, result == 0);
    flags.set(FLAG_SF, (result & 0x8000) != 0);
    flags.set(FLAG_PF, parity((result & 0xFF) as u8));
}

/// 8-bit add with optional carry-in; sets CF, AF, OF, ZF, SF, PF
fn add_with_carry_8(flags: &mut Flags, a: u8, b: u8, carry_in: bool) -> u8 {
    let wide = a as u16 + b as u16 + carry_in as u16;
    let result = wide as u8;
    flags.set(FLAG_CF, wide > 0xFF);
    flags.set(FLAG_AF, ((a ^ b ^ result) & 0x10) != 0);
    flags.set(FLAG_OF, ((a ^ result) & (b ^ result) & 0x80) != 0);
    update_flags_8(flags, result);
    result
}

/// 16-bit add with optional carry-in
fn add_with_carry_16(flags: &mut Flags, a: u16, b: u16, carry_in: bool) -> u16 {
    let wide = a as u32 + b as u32 + carry_in as u32;
    let result = wide as u16;
    flags.set(FLAG_CF, wide > 0xFFFF);
    flags.set(FLAG_AF, ((a ^ b ^ result) & 0x10) != 0);
    flags.set(FLAG_OF, ((a ^ result) & (b ^ result) & 0x8000) != 0);
    update_flags_16(flags, result);
    result
}

/// 8-bit subtract with optional borrow-in; sets CF, AF, OF, ZF, SF, PF
fn sub_with_borrow_8(flags: &mut Flags, a: u8, b: u8, borrow_in: bool) -> u8 {
    let borrow = borrow_in as u16;
    let result = (a as u16).wrapping_sub(b as u16).wrapping_sub(borrow) as u8;
    flags.set(FLAG_CF, (b as u16 + borrow) > a as u16);
    flags.set(FLAG_AF, ((a ^ b ^ result) & 0x10) != 0);
    flags.set(FLAG_OF, ((a ^ b) & (a ^ result) & 0x80) != 0);
    update_flags_8(flags, result);
    result
}

/// 16-bit subtract with optional borrow-in
fn sub_with_borrow_16(flags: &mut Flags, a: u16, b: u16, borrow_in: bool) -> u16 {
    let borrow = borrow_in as u32;
    let result = (a as u32).wrapping_sub(b as u32).wrapping_sub(borrow) as u16;
    flags.set(FLAG_CF, (b as u32 + borrow) > a as u32);
    flags.set(FLAG_AF, ((a ^ b ^ result) & 0x10) != 0);
    flags.set(FLAG_OF, ((a ^ b) & (a ^ result) & 0x8000) != 0);
    update_flags_16(flags, result);
    result
}

/// Common flag update for AND/OR/XOR/TEST: CF, OF, AF cleared, SZP set
fn logic_flags_8(flags: &mut Flags, result: u8) -> u8 {
    update_flags_8(flags, result);
    flags.set(FLAG_CF, false);
    flags.set(FLAG_OF, false);
    flags.set(FLAG_AF, false);
    result
}

fn logic_flags_16(flags: &mut Flags, result: u16) -> u16 {
    update_flags_16(flags, result);
    flags.set(FLAG_CF, false);
    flags.set(FLAG_OF, false);
    flags.set(FLAG_AF, false);
    result
}

// -------------------------------------------------------------------------
// Arithmetic / logic adapters
// -------------------------------------------------------------------------

pub fn add8(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    add_with_carry_8(flags, op1 as u8, op2 as u8, false) as u16
}

pub fn add16(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    add_with_carry_16(flags, op1, op2, false)
}

pub fn adc8(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    let carry = flags.get(FLAG_CF);
    add_with_carry_8(flags, op1 as u8, op2 as u8, carry) as u16
}

pub fn adc16(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    let carry = flags.get(FLAG_CF);
    add_with_carry_16(flags, op1, op2, carry)
}

pub fn sub8(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    sub_with_borrow_8(flags, op1 as u8, op2 as u8, false) as u16
}

pub fn sub16(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    sub_with_borrow_16(flags, op1, op2, false)
}

pub fn sbb8(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    let borrow = flags.get(FLAG_CF);
    sub_with_borrow_8(flags, op1 as u8, op2 as u8, borrow) as u16
}

pub fn sbb16(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    let borrow = flags.get(FLAG_CF);
    sub_with_borrow_16(flags, op1, op2, borrow)
}

/// CMP computes the same subtraction as SUB; the caller discards the
/// destination write, but the computed value is still reported.
pub fn cmp8(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    sub_with_borrow_8(flags, op1 as u8, op2 as u8, false) as u16
}

pub fn cmp16(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    sub_with_borrow_16(flags, op1, op2, false)
}

pub fn or8(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    logic_flags_8(flags, (op1 as u8) | (op2 as u8)) as u16
}

pub fn or16(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    logic_flags_16(flags, op1 | op2)
}

pub fn and8(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    logic_flags_8(flags, (op1 as u8) & (op2 as u8)) as u16
}

pub fn and16(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    logic_flags_16(flags, op1 & op2)
}

pub fn xor8(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    logic_flags_8(flags, (op1 as u8) ^ (op2 as u8)) as u16
}

pub fn xor16(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    logic_flags_16(flags, op1 ^ op2)
}

/// TEST is AND without a destination write; the AND value is reported.
pub fn test8(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    logic_flags_8(flags, (op1 as u8) & (op2 as u8)) as u16
}

pub fn test16(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    logic_flags_16(flags, op1 & op2)
}

// -------------------------------------------------------------------------
// Shift / rotate adapters
// -------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShiftOp {
    Rol,
    Ror,
    Rcl,
    Rcr,
    Shl,
    Shr,
    Sar,
}

/// Perform an 8-bit shift/rotate. Count 0 leaves value and flags alone;
/// only the low 5 bits of the count are used.
fn shift_rotate_8(flags: &mut Flags, val: u8, op: ShiftOp, count: u8) -> u8 {
    if count == 0 {
        return val;
    }

    let count = count & 0x1F;
    let mut result = val;

    match op {
        ShiftOp::Rol => {
            for _ in 0..count {
                let carry_out = (result & 0x80) != 0;
                result = (result << 1) | (if carry_out { 1 } else { 0 });
                flags.set(FLAG_CF, carry_out);
            }
            // OF is defined only for count=1: sign bit changed
            if count == 1 {
                let msb = (result & 0x80) != 0;
                flags.set(FLAG_OF, msb != flags.get(FLAG_CF));
            }
        }
        ShiftOp::Ror => {
            for _ in 0..count {
                let carry_out = (result & 0x01) != 0;
                result = (result >> 1) | (if carry_out { 0x80 } else { 0 });
                flags.set(FLAG_CF, carry_out);
            }
            // OF is defined only for count=1: two high bits differ
            if count == 1 {
                let bit7 = (result & 0x80) != 0;
                let bit6 = (result & 0x40) != 0;
                flags.set(FLAG_OF, bit7 != bit6);
            }
        }
        ShiftOp::Rcl => {
            for _ in 0..count {
                let old_cf = if flags.get(FLAG_CF) { 1 } else { 0 };
                let carry_out = (result & 0x80) != 0;
                result = (result << 1) | old_cf;
                flags.set(FLAG_CF, carry_out);
            }
            if count == 1 {
                let msb = (result & 0x80) != 0;
                flags.set(FLAG_OF, msb != flags.get(FLAG_CF));
            }
        }
        ShiftOp::Rcr => {
            for _ in 0..count {
                let old_cf = if flags.get(FLAG_CF) { 0x80 } else { 0 };
                let carry_out = (result & 0x01) != 0;
                result = (result >> 1) | old_cf;
                flags.set(FLAG_CF, carry_out);
            }
            if count == 1 {
                let bit7 = (result & 0x80) != 0;
                let bit6 = (result & 0x40) != 0;
                flags.set(FLAG_OF, bit7 != bit6);
            }
        }
        ShiftOp::Shl => {
            for _ in 0..count {
                let carry_out = (result & 0x80) != 0;
                result <<= 1;
                flags.set(FLAG_CF, carry_out);
            }
            update_flags_8(flags, result);
            if count == 1 {
                let msb = (result & 0x80) != 0;
                flags.set(FLAG_OF, msb != flags.get(FLAG_CF));
            }
        }
        ShiftOp::Shr => {
            // OF gets the MSB of the original value (count=1 only)
            if count == 1 {
                flags.set(FLAG_OF, (val & 0x80) != 0);
            }
            for _ in 0..count {
                let carry_out = (result & 0x01) != 0;
                result >>= 1;
                flags.set(FLAG_CF, carry_out);
            }
            update_flags_8(flags, result);
        }
        ShiftOp::Sar => {
            let sign_bit = val & 0x80;
            if count == 1 {
                flags.set(FLAG_OF, false); // Always 0 for SAR
            }
            for _ in 0..count {
                let carry_out = (result & 0x01) != 0;
                result = (result >> 1) | sign_bit;
                flags.set(FLAG_CF, carry_out);
            }
            update_flags_8(flags, result);
        }
    }

    result
}

/// Perform a 16-bit shift/rotate; same count rules as the 8-bit form.
fn shift_rotate_16(flags: &mut Flags, val: u16, op: ShiftOp, count: u8) -> u16 {
    if count == 0 {
        return val;
    }

    let count = count & 0x1F;
    let mut result = val;

    match op {
        ShiftOp::Rol => {
            for _ in 0..count {
                let carry_out = (result & 0x8000) != 0;
                result = (result << 1) | (if carry_out { 1 } else { 0 });
                flags.set(FLAG_CF, carry_out);
            }
            if count == 1 {
                let msb = (result & 0x8000) != 0;
                flags.set(FLAG_OF, msb != flags.get(FLAG_CF));
            }
        }
        ShiftOp::Ror => {
            for _ in 0..count {
                let carry_out = (result & 0x0001) != 0;
                result = (result >> 1) | (if carry_out { 0x8000 } else { 0 });
                flags.set(FLAG_CF, carry_out);
            }
            if count == 1 {
                let bit15 = (result & 0x8000) != 0;
                let bit14 = (result & 0x4000) != 0;
                flags.set(FLAG_OF, bit15 != bit14);
            }
        }
        ShiftOp::Rcl => {
            for _ in 0..count {
                let old_cf = if flags.get(FLAG_CF) { 1 } else { 0 };
                let carry_out = (result & 0x8000) != 0;
                result = (result << 1) | old_cf;
                flags.set(FLAG_CF, carry_out);
            }
            if count == 1 {
                let msb = (result & 0x8000) != 0;
                flags.set(FLAG_OF, msb != flags.get(FLAG_CF));
            }
        }
        ShiftOp::Rcr => {
            for _ in 0..count {
                let old_cf = if flags.get(FLAG_CF) { 0x8000 } else { 0 };
                let carry_out = (result & 0x0001) != 0;
                result = (result >> 1) | old_cf;
                flags.set(FLAG_CF, carry_out);
            }
            if count == 1 {
                let bit15 = (result & 0x8000) != 0;
                let bit14 = (result & 0x4000) != 0;
                flags.set(FLAG_OF, bit15 != bit14);
            }
        }
        ShiftOp::Shl => {
            for _ in 0..count {
                let carry_out = (result & 0x8000) != 0;
                result <<= 1;
                flags.set(FLAG_CF, carry_out);
            }
            update_flags_16(flags, result);
            if count == 1 {
                let msb = (result & 0x8000) != 0;
                flags.set(FLAG_OF, msb != flags.get(FLAG_CF));
            }
        }
        ShiftOp::Shr => {
            if count == 1 {
                flags.set(FLAG_OF, (val & 0x8000) != 0);
            }
            for _ in 0..count {
                let carry_out = (result & 0x0001) != 0;
                result >>= 1;
                flags.set(FLAG_CF, carry_out);
            }
            update_flags_16(flags, result);
        }
        ShiftOp::Sar => {
            let sign_bit = val & 0x8000;
            if count == 1 {
                flags.set(FLAG_OF, false); // Always 0 for SAR
            }
            for _ in 0..count {
                let carry_out = (result & 0x0001) != 0;
                result = (result >> 1) | sign_bit;
                flags.set(FLAG_CF, carry_out);
            }
            update_flags_16(flags, result);
        }
    }

    result
}

pub fn rol8(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    shift_rotate_8(flags, op1 as u8, ShiftOp::Rol, op2 as u8) as u16
}

pub fn rol16(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    shift_rotate_16(flags, op1, ShiftOp::Rol, op2 as u8)
}

pub fn ror8(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    shift_rotate_8(flags, op1 as u8, ShiftOp::Ror, op2 as u8) as u16
}

pub fn ror16(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    shift_rotate_16(flags, op1, ShiftOp::Ror, op2 as u8)
}

pub fn rcl8(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    shift_rotate_8(flags, op1 as u8, ShiftOp::Rcl, op2 as u8) as u16
}

pub fn rcl16(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    shift_rotate_16(flags, op1, ShiftOp::Rcl, op2 as u8)
}

pub fn rcr8(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    shift_rotate_8(flags, op1 as u8, ShiftOp::Rcr, op2 as u8) as u16
}

pub fn rcr16(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    shift_rotate_16(flags, op1, ShiftOp::Rcr, op2 as u8)
}

pub fn shl8(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    shift_rotate_8(flags, op1 as u8, ShiftOp::Shl, op2 as u8) as u16
}

pub fn shl16(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    shift_rotate_16(flags, op1, ShiftOp::Shl, op2 as u8)
}

pub fn shr8(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    shift_rotate_8(flags, op1 as u8, ShiftOp::Shr, op2 as u8) as u16
}

pub fn shr16(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    shift_rotate_16(flags, op1, ShiftOp::Shr, op2 as u8)
}

pub fn sar8(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    shift_rotate_8(flags, op1 as u8, ShiftOp::Sar, op2 as u8) as u16
}

pub fn sar16(flags: &mut Flags, op1: u16, op2: u16) -> u16 {
    shift_rotate_16(flags, op1, ShiftOp::Sar, op2 as u8)
}

// -------------------------------------------------------------------------
// BCD adjustment group (8-bit only)
//
// These keep the two-operand signature for uniformity but operate on a
// single accumulator: op1 is treated as AX, op2 is ignored. The adjusted
// accumulator is returned.
// -------------------------------------------------------------------------

/// DAA - Decimal Adjust After Addition
pub fn daa8(flags: &mut Flags, op1: u16, _op2: u16) -> u16 {
    let mut al = (op1 & 0xFF) as u8;
    let old_al = al;
    let old_cf = flags.get(FLAG_CF);

    if (al & 0x0F) > 9 || flags.get(FLAG_AF) {
        al = al.wrapping_add(6);
        flags.set(FLAG_AF, true);
    } else {
        flags.set(FLAG_AF, false);
    }

    if old_al > 0x99 || old_cf {
        al = al.wrapping_add(0x60);
        flags.set(FLAG_CF, true);
    } else {
        flags.set(FLAG_CF, false);
    }

    update_flags_8(flags, al);
    (op1 & 0xFF00) | al as u16
}

/// DAS - Decimal Adjust After Subtraction
pub fn das8(flags: &mut Flags, op1: u16, _op2: u16) -> u16 {
    let mut al = (op1 & 0xFF) as u8;
    let old_al = al;
    let old_cf = flags.get(FLAG_CF);

    if (al & 0x0F) > 9 || flags.get(FLAG_AF) {
        al = al.wrapping_sub(6);
        flags.set(FLAG_AF, true);
    } else {
        flags.set(FLAG_AF, false);
    }

    if old_al > 0x99 || old_cf {
        al = al.wrapping_sub(0x60);
        flags.set(FLAG_CF, true);
    } else {
        flags.set(FLAG_CF, false);
    }

    update_flags_8(flags, al);
    (op1 & 0xFF00) | al as u16
}

/// AAA - ASCII Adjust After Addition
pub fn aaa8(flags: &mut Flags, op1: u16, _op2: u16) -> u16 {
    let mut ax = op1;
    let al = (ax & 0xFF) as u8;
    if (al & 0x0F) > 9 || flags.get(FLAG_AF) {
        ax = ax.wrapping_add(0x106); // Add 1 to AH, 6 to AL
        flags.set(FLAG_AF, true);
        flags.set(FLAG_CF, true);
    } else {
        flags.set(FLAG_AF, false);
        flags.set(FLAG_CF, false);
    }
    ax & 0xFF0F // Clear upper nibble of AL
}

/// AAM - ASCII Adjust After Multiply (base 10)
pub fn aam8(flags: &mut Flags, op1: u16, _op2: u16) -> u16 {
    let al = (op1 & 0xFF) as u8;
    let ah = al / 10;
    let al_new = al % 10;
    update_flags_8(flags, al_new);
    ((ah as u16) << 8) | al_new as u16
}

/// AAD - ASCII Adjust Before Division (base 10)
pub fn aad8(flags: &mut Flags, op1: u16, _op2: u16) -> u16 {
    let ah = ((op1 >> 8) & 0xFF) as u8;
    let al = (op1 & 0xFF) as u8;
    let result = al.wrapping_add(ah.wrapping_mul(10));
    update_flags_8(flags, result);
    result as u16 // AH cleared
}
