//! `nextafter`, `nextup`, `nextdown` and `min_value` for IEEE-754 binary64.
//!
//! ```
//! use nextafter64::{min_value, nextafter, nextdown, nextup};
//!
//! assert_eq!(nextafter(1.0, 5.0), 1.0000000000000002);
//! assert_eq!(nextafter(1.0, -1.0), 0.9999999999999999);
//! assert_eq!(nextup(f64::MAX), f64::INFINITY);
//! assert_eq!(nextdown(0.0), -min_value());
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

pub mod maths;

pub use maths::{MIN_VALUE, min_value, nextafter, nextdown, nextup};
