//! Bit-view helpers shared by the stepping routines.
//!
//! A binary64 value is stepped by reinterpreting its eight bytes as an `i64`,
//! adding or subtracting one, and reinterpreting back. The layout assumptions
//! behind that are checked once, at compile time, below.

#![allow(clippy::unusual_byte_groupings)]

mod nextafter;

pub use nextafter::{MIN_VALUE, min_value, nextafter, nextdown, nextup};

const SIGN_MASK: u64 = 0x8000_0000_0000_0000u64;
const EXP_MASK: u64 = 0x7ff0_0000_0000_0000u64;
const MANT_MASK: u64 = 0x000f_ffff_ffff_ffffu64;

// binary64 and a 64-bit two's-complement integer, or nothing builds.
const _: () = {
    assert!(core::mem::size_of::<f64>() == 8);
    assert!(core::mem::size_of::<i64>() == 8);
    assert!(f64::RADIX == 2);
    assert!(f64::MANTISSA_DIGITS == 53);
    assert!(f64::MAX_EXP == 1024);
    assert!(f64::MIN_POSITIVE.to_bits() == 0x0010_0000_0000_0000u64);
    assert!(f64::MAX.to_bits() == 0x7fef_ffff_ffff_ffffu64);
    assert!(f64::INFINITY.to_bits() == EXP_MASK);
    assert!(i64::MIN as u64 == SIGN_MASK);
};

// ========= bit helpers =========

#[inline(always)]
const fn f64_from_i64_bits(u: i64) -> f64 {
    f64::from_bits(u as u64)
}

#[inline(always)]
const fn f64_to_i64_bits(x: f64) -> i64 {
    x.to_bits() as i64
}

#[inline(always)]
const fn is_nan_bits(u: i64) -> bool {
    let u = u as u64;
    (u & EXP_MASK) == EXP_MASK && (u & MANT_MASK) != 0
}

#[inline(always)]
const fn is_pos_inf_bits(u: i64) -> bool {
    u as u64 == EXP_MASK
}

#[inline(always)]
const fn is_neg_inf_bits(u: i64) -> bool {
    u as u64 == (SIGN_MASK | EXP_MASK)
}

/// Either signed zero.
#[inline(always)]
const fn is_zero_bits(u: i64) -> bool {
    (u as u64 & !SIGN_MASK) == 0
}
