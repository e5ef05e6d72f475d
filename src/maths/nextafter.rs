//! Single-ULP stepping over the binary64 lattice.
//!
//! For positive values the `i64` view grows with magnitude, so stepping up is
//! `+1`. With the sign bit set the `i64` view is negative and shrinks as the
//! magnitude grows, so stepping up (toward zero) is `-1`. The finite extremes
//! step into the infinity patterns, and `-MIN_VALUE` steps up into `-0.0`.

use super::{
    f64_from_i64_bits, f64_to_i64_bits, is_nan_bits, is_neg_inf_bits, is_pos_inf_bits,
    is_zero_bits,
};

/// Smallest positive subnormal, `2^-1074` (printed as `5e-324`).
pub const MIN_VALUE: f64 = min_value();

#[inline(always)]
pub const fn min_value() -> f64 {
    f64_from_i64_bits(1)
}

/// Adjacent value to `x` in the direction of `y`.
///
/// When `x == y` (so also for `0.0` against `-0.0`) `y` is returned as is.
#[inline(always)]
pub fn nextafter(x: f64, y: f64) -> f64 {
    if x.is_nan() || y.is_nan() {
        return f64::NAN;
    }
    if x == y {
        return y;
    }
    if x < y { nextup(x) } else { nextdown(x) }
}

/// Smallest value strictly greater than `x`; `+inf` stays `+inf`.
#[inline(always)]
pub fn nextup(x: f64) -> f64 {
    let u = f64_to_i64_bits(x);
    if is_nan_bits(u) {
        return f64::NAN;
    }
    if is_pos_inf_bits(u) {
        return f64::INFINITY;
    }
    if is_zero_bits(u) {
        return MIN_VALUE;
    }
    if x > 0.0 {
        f64_from_i64_bits(u + 1)
    } else {
        f64_from_i64_bits(u - 1)
    }
}

/// Largest value strictly less than `x`; `-inf` stays `-inf`.
#[inline(always)]
pub fn nextdown(x: f64) -> f64 {
    let u = f64_to_i64_bits(x);
    if is_nan_bits(u) {
        return f64::NAN;
    }
    if is_neg_inf_bits(u) {
        return f64::NEG_INFINITY;
    }
    if is_zero_bits(u) {
        return -MIN_VALUE;
    }
    if x > 0.0 {
        f64_from_i64_bits(u - 1)
    } else {
        f64_from_i64_bits(u + 1)
    }
}
