//! Scalar math helpers shared by the register backends and the kernels.
//!
//! The approximations here are the scalar counterparts of the vectorized ones
//! in the backends: both evaluate the same polynomials so results agree across
//! backends within the documented tolerances.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

use crate::half::Half;

/// log10(2), the factor turning a base-2 logarithm into a base-10 one.
const LOG10_2: f32 = 0.301_029_995_663_981_2;

#[inline]
fn log2_polynomial(m: f32) -> f32 {
    // Minimax polynomial fit of log2(x)/(x - 1) for x in [1, 2), order 7.
    let mut p = -1.231_947_399_129_126_4e-2;
    p = p * m + 1.498_442_116_273_012_4e-1;
    p = p * m - 7.957_081_900_627_795e-1;
    p = p * m + 2.418_069_084_345_598_7;
    p = p * m - 4.634_291_907_077_220_3;
    p = p * m + 5.842_652_591_696_923;
    p = p * m - 5.010_303_889_272_715;
    p = p * m + 3.484_752_333_259_812_7;
    p
}

/// Approximate base-2 logarithm of a positive finite value.
///
/// The mantissa polynomial is multiplied by `m - 1`, which pins the result of
/// `approximate_log2(1.0)` to exactly 0 and effectively raises the polynomial
/// order by one.
#[inline]
pub fn approximate_log2(x: f32) -> f32 {
    let bits = x.to_bits();
    let exponent = (((bits >> 23) & 0xff) as i32 - 127) as f32;
    let mantissa = f32::from_bits((bits & 0x007f_ffff) | 0x3f80_0000);

    log2_polynomial(mantissa) * (mantissa - 1.0) + exponent
}

/// Approximate base-10 logarithm.
///
/// Monotone on positive inputs, relative error is at most 2e-6 in single
/// precision, and `fast_log10(1.0)` is exactly 0.
#[inline]
pub fn fast_log10(x: f32) -> f32 {
    approximate_log2(x) * LOG10_2
}

#[inline]
fn atan_polynomial(z: f32) -> f32 {
    // Odd minimax polynomial for atan(z), |z| <= 1.
    let z2 = z * z;
    let mut p = 5.265_332e-2;
    p = p * z2 - 1.164_328_7e-1;
    p = p * z2 + 1.935_434_6e-1;
    p = p * z2 - 3.326_234_7e-1;
    p = p * z2 + 9.999_772_6e-1;
    p * z
}

/// Approximate four-quadrant arc tangent of `y / x`, in radians.
///
/// The absolute error is below 1e-4 radians. `fast_atan2(0, 0)` is 0.
#[inline]
pub fn fast_atan2(y: f32, x: f32) -> f32 {
    let abs_y = y.abs();
    let abs_x = x.abs();

    if abs_x == 0.0 && abs_y == 0.0 {
        return 0.0;
    }

    let ratio = abs_x.min(abs_y) / abs_x.max(abs_y);
    let mut angle = atan_polynomial(ratio);

    if abs_y > abs_x {
        angle = std::f32::consts::FRAC_PI_2 - angle;
    }
    if x < 0.0 {
        angle = std::f32::consts::PI - angle;
    }

    angle.copysign(y)
}

/// Sign of the value as a ±1 with the magnitude of one.
///
/// Zero inputs keep their sign bit: `sign(0.0)` is 1 and `sign(-0.0)` is -1.
#[inline]
pub fn sign(x: f32) -> f32 {
    1.0f32.copysign(x)
}

/// Linear interpolation from `a` to `b` by factor `t`.
#[inline]
pub fn lerp<T>(a: T, b: T, t: T) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
{
    a + t * (b - a)
}

/// Bitwise select between two single precision values.
///
/// Each result bit comes from `source1` where the mask bit is set and from
/// `source2` where it is clear. Comparator masks are all-ones or all-zeros
/// per lane, which makes this a per-lane value select.
#[inline]
pub fn select_f32(mask: u32, source1: f32, source2: f32) -> f32 {
    f32::from_bits((source1.to_bits() & mask) | (source2.to_bits() & !mask))
}

/// Bitwise select between two half precision values.
#[inline]
pub fn select_half(mask: u16, source1: Half, source2: Half) -> Half {
    Half::from_bits((source1.to_bits() & mask) | (source2.to_bits() & !mask))
}

/// Raise `base` to an integer power by binary exponentiation.
///
/// A positive exponent matches repeated multiplication up to reassociation.
/// An exponent of 0 gives 1 (for any base, including 0), and a negative
/// exponent gives the reciprocal of the positive power.
pub fn fast_int_pow<T>(base: T, exp: i32) -> T
where
    T: Copy + One + Mul<Output = T> + Div<Output = T>,
{
    if exp == 0 {
        return T::one();
    }

    let mut bit = exp.unsigned_abs();
    let mut square = base;
    let mut result = T::one();
    while bit > 0 {
        if bit & 1 == 1 {
            result = result * square;
        }
        bit >>= 1;
        if bit > 0 {
            square = square * square;
        }
    }

    if exp < 0 {
        T::one() / result
    } else {
        result
    }
}

/// Scalar element of a real-valued register: `f32` or [`Half`].
///
/// Gives the generic scalar backend and the generic kernels one vocabulary
/// for the two supported precisions. Transcendental functions on `Half`
/// widen to `f32`, evaluate, and round back.
pub trait Real:
    Copy
    + PartialOrd
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + std::fmt::Display
    + std::fmt::Debug
{
    /// Unsigned integer with the same bit width, used for comparator masks.
    type Bits: Copy + PartialEq;

    /// Mask value with every bit set.
    const BITS_ONES: Self::Bits;
    /// Mask value with every bit clear.
    const BITS_ZERO: Self::Bits;

    /// Widening conversion used by emulated arithmetic and formatting.
    fn to_f32(self) -> f32;
    /// Narrowing conversion from single precision.
    fn from_f32(value: f32) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Smaller of two values.
    fn min(self, other: Self) -> Self;
    /// Larger of two values.
    fn max(self, other: Self) -> Self;
    /// Sign as ±1, keeping the sign of zero.
    fn sign(self) -> Self;
    /// Magnitude of `self` with the sign of `sgn`.
    fn copysign(self, sgn: Self) -> Self;
    /// Sine.
    fn sin(self) -> Self;
    /// Cosine.
    fn cos(self) -> Self;
    /// Base-e exponential.
    fn exp(self) -> Self;
    /// Approximate base-10 logarithm, see [`fast_log10`].
    fn fast_log10(self) -> Self;
    /// Approximate four-quadrant arc tangent, see [`fast_atan2`].
    fn fast_atan2(y: Self, x: Self) -> Self;
    /// Bitwise select by a comparator mask.
    fn select(mask: Self::Bits, source1: Self, source2: Self) -> Self;
}

impl Real for f32 {
    type Bits = u32;

    const BITS_ONES: u32 = u32::MAX;
    const BITS_ZERO: u32 = 0;

    #[inline]
    fn to_f32(self) -> f32 {
        self
    }
    #[inline]
    fn from_f32(value: f32) -> f32 {
        value
    }

    #[inline]
    fn abs(self) -> f32 {
        f32::abs(self)
    }
    #[inline]
    fn sqrt(self) -> f32 {
        f32::sqrt(self)
    }
    #[inline]
    fn min(self, other: f32) -> f32 {
        f32::min(self, other)
    }
    #[inline]
    fn max(self, other: f32) -> f32 {
        f32::max(self, other)
    }
    #[inline]
    fn sign(self) -> f32 {
        sign(self)
    }
    #[inline]
    fn copysign(self, sgn: f32) -> f32 {
        f32::copysign(self, sgn)
    }
    #[inline]
    fn sin(self) -> f32 {
        f32::sin(self)
    }
    #[inline]
    fn cos(self) -> f32 {
        f32::cos(self)
    }
    #[inline]
    fn exp(self) -> f32 {
        f32::exp(self)
    }
    #[inline]
    fn fast_log10(self) -> f32 {
        fast_log10(self)
    }
    #[inline]
    fn fast_atan2(y: f32, x: f32) -> f32 {
        fast_atan2(y, x)
    }
    #[inline]
    fn select(mask: u32, source1: f32, source2: f32) -> f32 {
        select_f32(mask, source1, source2)
    }
}

impl Real for Half {
    type Bits = u16;

    const BITS_ONES: u16 = u16::MAX;
    const BITS_ZERO: u16 = 0;

    #[inline]
    fn to_f32(self) -> f32 {
        Half::to_f32(self)
    }
    #[inline]
    fn from_f32(value: f32) -> Half {
        Half::from_f32(value)
    }

    #[inline]
    fn abs(self) -> Half {
        Half::abs(self)
    }
    #[inline]
    fn sqrt(self) -> Half {
        Half::from_f32(self.to_f32().sqrt())
    }
    #[inline]
    fn min(self, other: Half) -> Half {
        if other < self {
            other
        } else {
            self
        }
    }
    #[inline]
    fn max(self, other: Half) -> Half {
        if other > self {
            other
        } else {
            self
        }
    }
    #[inline]
    fn sign(self) -> Half {
        Half::from_bits((self.to_bits() & 0x8000) | Half::ONE_BITS)
    }
    #[inline]
    fn copysign(self, sgn: Half) -> Half {
        Half::from_bits((self.to_bits() & 0x7fff) | (sgn.to_bits() & 0x8000))
    }
    #[inline]
    fn sin(self) -> Half {
        Half::from_f32(self.to_f32().sin())
    }
    #[inline]
    fn cos(self) -> Half {
        Half::from_f32(self.to_f32().cos())
    }
    #[inline]
    fn exp(self) -> Half {
        Half::from_f32(self.to_f32().exp())
    }
    #[inline]
    fn fast_log10(self) -> Half {
        Half::from_f32(fast_log10(self.to_f32()))
    }
    #[inline]
    fn fast_atan2(y: Half, x: Half) -> Half {
        Half::from_f32(fast_atan2(y.to_f32(), x.to_f32()))
    }
    #[inline]
    fn select(mask: u16, source1: Half, source2: Half) -> Half {
        select_half(mask, source1, source2)
    }
}
