//! Half-precision (IEEE-754 binary16) floating point value.
//!
//! [`Half`] acts like the built-in floating point types: construction from
//! and conversion to the other numeric types, arithmetic, comparison, and a
//! bit-level view of the underlying 16-bit pattern.
//!
//! The implementation is a software one: values are stored as the binary16
//! bit pattern and arithmetic widens to `f32`, computes, and rounds the
//! result back to the nearest representable half (ties to even). Platforms
//! without native binary16 arithmetic therefore still get the full scalar
//! type; only the vectorized half registers decay to emulation (see
//! [`crate::target::HAS_HALF_VECTOR`]).

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{FromPrimitive, One, ToPrimitive, Zero};

/// Half-precision floating point value.
#[derive(Clone, Copy, Default)]
pub struct Half(u16);

impl Half {
    /// Positive zero.
    pub const ZERO: Half = Half(0x0000);
    /// One.
    pub const ONE: Half = Half(0x3c00);
    /// Positive infinity.
    pub const INFINITY: Half = Half(0x7c00);
    /// Largest finite value, 65504.
    pub const MAX: Half = Half(0x7bff);

    pub(crate) const ONE_BITS: u16 = 0x3c00;

    /// Reinterpret a 16-bit pattern as a half value.
    #[inline]
    pub const fn from_bits(bits: u16) -> Half {
        Half(bits)
    }

    /// The underlying 16-bit pattern.
    #[inline]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Round a single precision value to the nearest half, ties to even.
    pub fn from_f32(value: f32) -> Half {
        let bits = value.to_bits();
        let sign = ((bits >> 16) & 0x8000) as u16;
        let exponent = ((bits >> 23) & 0xff) as i32;
        let mantissa = bits & 0x007f_ffff;

        if exponent == 0xff {
            // Infinity keeps a zero mantissa, NaN keeps a non-zero one.
            let payload = if mantissa != 0 {
                0x0200 | (mantissa >> 13) as u16
            } else {
                0
            };
            return Half(sign | 0x7c00 | payload);
        }

        // Re-bias from 127 to 15.
        let half_exponent = exponent - 112;

        if half_exponent >= 31 {
            return Half(sign | 0x7c00);
        }

        if half_exponent <= 0 {
            // Subnormal target. Magnitudes below half of the smallest
            // subnormal flush to zero.
            if half_exponent < -10 {
                return Half(sign);
            }
            let significand = mantissa | 0x0080_0000;
            let shift = (14 - half_exponent) as u32;
            return Half(sign | round_shift_right(significand, shift) as u16);
        }

        // Normal target. A mantissa carry propagates into the exponent and,
        // at the very top of the range, into infinity.
        let combined =
            ((half_exponent as u32) << 10) + round_shift_right(mantissa, 13);
        Half(sign | combined as u16)
    }

    /// Widen to single precision. The conversion is exact.
    pub fn to_f32(self) -> f32 {
        let sign = ((self.0 & 0x8000) as u32) << 16;
        let exponent = (self.0 >> 10) & 0x1f;
        let mantissa = (self.0 & 0x03ff) as u32;

        match exponent {
            0 => {
                if mantissa == 0 {
                    return f32::from_bits(sign);
                }
                // Subnormal: mantissa counts units of 2^-24, exactly
                // representable in single precision.
                let magnitude = mantissa as f32 * 5.960_464_477_539_063e-8;
                if sign != 0 {
                    -magnitude
                } else {
                    magnitude
                }
            }
            0x1f => f32::from_bits(sign | 0x7f80_0000 | (mantissa << 13)),
            _ => f32::from_bits(
                sign | (((exponent as u32) + 112) << 23) | (mantissa << 13),
            ),
        }
    }

    /// Round a double precision value to the nearest half.
    #[inline]
    pub fn from_f64(value: f64) -> Half {
        Half::from_f32(value as f32)
    }

    /// Widen to double precision. The conversion is exact.
    #[inline]
    pub fn to_f64(self) -> f64 {
        f64::from(self.to_f32())
    }

    /// Absolute value.
    #[inline]
    pub fn abs(self) -> Half {
        Half(self.0 & 0x7fff)
    }

    /// True when the value is neither infinite nor NaN.
    #[inline]
    pub fn is_finite(self) -> bool {
        (self.0 & 0x7c00) != 0x7c00
    }

    /// True when the value is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        (self.0 & 0x7c00) == 0x7c00 && (self.0 & 0x03ff) != 0
    }
}

#[inline]
fn round_shift_right(value: u32, shift: u32) -> u32 {
    // Round to nearest, ties to even: bias by half an ulp minus one, plus the
    // bit that keeps ties on even results.
    let halfway = 1u32 << (shift - 1);
    (value + halfway - 1 + ((value >> shift) & 1)) >> shift
}

impl From<f32> for Half {
    #[inline]
    fn from(value: f32) -> Half {
        Half::from_f32(value)
    }
}

impl From<f64> for Half {
    #[inline]
    fn from(value: f64) -> Half {
        Half::from_f64(value)
    }
}

impl From<i32> for Half {
    #[inline]
    fn from(value: i32) -> Half {
        Half::from_f32(value as f32)
    }
}

impl From<Half> for f32 {
    #[inline]
    fn from(value: Half) -> f32 {
        value.to_f32()
    }
}

impl From<Half> for f64 {
    #[inline]
    fn from(value: Half) -> f64 {
        value.to_f64()
    }
}

impl Neg for Half {
    type Output = Half;

    #[inline]
    fn neg(self) -> Half {
        Half(self.0 ^ 0x8000)
    }
}

macro_rules! half_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl $trait for Half {
            type Output = Half;

            #[inline]
            fn $method(self, rhs: Half) -> Half {
                Half::from_f32(self.to_f32() $op rhs.to_f32())
            }
        }

        impl $assign_trait for Half {
            #[inline]
            fn $assign_method(&mut self, rhs: Half) {
                *self = *self $op rhs;
            }
        }
    };
}

half_binary_op!(Add, add, AddAssign, add_assign, +);
half_binary_op!(Sub, sub, SubAssign, sub_assign, -);
half_binary_op!(Mul, mul, MulAssign, mul_assign, *);
half_binary_op!(Div, div, DivAssign, div_assign, /);

impl PartialEq for Half {
    #[inline]
    fn eq(&self, other: &Half) -> bool {
        self.to_f32() == other.to_f32()
    }
}

impl PartialOrd for Half {
    #[inline]
    fn partial_cmp(&self, other: &Half) -> Option<std::cmp::Ordering> {
        self.to_f32().partial_cmp(&other.to_f32())
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Half::to_f32(*self), f)
    }
}

impl fmt::Debug for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Half::to_f32(*self), f)
    }
}

impl Zero for Half {
    #[inline]
    fn zero() -> Half {
        Half::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        (self.0 & 0x7fff) == 0
    }
}

impl One for Half {
    #[inline]
    fn one() -> Half {
        Half::ONE
    }
}

impl ToPrimitive for Half {
    fn to_i64(&self) -> Option<i64> {
        Half::to_f32(*self).to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        Half::to_f32(*self).to_u64()
    }

    fn to_f32(&self) -> Option<f32> {
        Some(Half::to_f32(*self))
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Half::to_f64(*self))
    }
}

impl FromPrimitive for Half {
    fn from_i64(n: i64) -> Option<Half> {
        Some(Half::from_f32(n as f32))
    }

    fn from_u64(n: u64) -> Option<Half> {
        Some(Half::from_f32(n as f32))
    }

    fn from_f32(n: f32) -> Option<Half> {
        Some(Half::from_f32(n))
    }

    fn from_f64(n: f64) -> Option<Half> {
        Some(Half::from_f64(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_patterns() {
        assert_eq!(Half::from_f32(0.0).to_bits(), 0x0000);
        assert_eq!(Half::from_f32(-0.0).to_bits(), 0x8000);
        assert_eq!(Half::from_f32(1.0).to_bits(), 0x3c00);
        assert_eq!(Half::from_f32(-2.0).to_bits(), 0xc000);
        assert_eq!(Half::from_f32(65504.0).to_bits(), 0x7bff);
        assert_eq!(Half::from_f32(f32::INFINITY).to_bits(), 0x7c00);
    }

    #[test]
    fn round_trip_is_exact() {
        for bits in 0..=0xffffu16 {
            let half = Half::from_bits(bits);
            if half.is_nan() {
                continue;
            }
            assert_eq!(Half::from_f32(half.to_f32()).to_bits(), bits);
        }
    }

    #[test]
    fn rounding_ties_to_even() {
        // 2049 is exactly between 2048 and 2050; the even mantissa wins.
        assert_eq!(Half::from_f32(2049.0).to_f32(), 2048.0);
        assert_eq!(Half::from_f32(2051.0).to_f32(), 2052.0);
    }

    #[test]
    fn overflow_and_underflow() {
        // 65520 is the midpoint between the largest finite half and 2^16;
        // ties to even round it up to infinity.
        assert!(!Half::from_f32(65520.0).is_finite());
        assert_eq!(Half::from_f32(65519.0).to_f32(), 65504.0);
        assert_eq!(Half::from_f32(1e-8).to_f32(), 0.0);
        // Smallest subnormal.
        assert_eq!(Half::from_bits(0x0001).to_f32(), 5.960_464_5e-8);
    }

    #[test]
    fn arithmetic_widens() {
        let a = Half::from_f32(1.5);
        let b = Half::from_f32(2.25);
        assert_eq!((a + b).to_f32(), 3.75);
        assert_eq!((a * b).to_f32(), 3.375);
        assert_eq!((-a).to_f32(), -1.5);
    }
}
