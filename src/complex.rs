//! Complex value type used for quadrature (I/Q) samples.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

use crate::half::Half;
use crate::math::Real;

/// Complex number `re + im·j` with components of type `T`.
///
/// Arithmetic is defined component-wise for addition and subtraction and by
/// the cartesian formulas for multiplication and division. Division uses the
/// numerically stable `(a·c + b·d) / (c² + d²)`, `(b·c − a·d) / (c² + d²)`
/// form. Equality is exact on both components.
#[derive(Clone, Copy, Default, PartialEq, Debug)]
#[repr(C)]
pub struct Complex<T> {
    /// Real component.
    pub re: T,
    /// Imaginary component.
    pub im: T,
}

/// Single precision complex value.
pub type Complex32 = Complex<f32>;

/// Half precision complex value.
pub type HalfComplex = Complex<Half>;

impl<T> Complex<T> {
    /// Construct from real and imaginary components.
    #[inline]
    pub const fn new(re: T, im: T) -> Complex<T> {
        Complex { re, im }
    }
}

impl<T: Real> Complex<T> {
    /// Construct a purely real value.
    #[inline]
    pub fn from_real(re: T) -> Complex<T> {
        Complex::new(re, T::zero())
    }

    /// Squared magnitude: `re² + im²`.
    #[inline]
    pub fn norm(self) -> T {
        self.im * self.im + self.re * self.re
    }

    /// Magnitude: `√(re² + im²)`.
    #[inline]
    pub fn abs(self) -> T {
        self.norm().sqrt()
    }

    /// Magnitude, possibly trading accuracy for speed.
    ///
    /// The scalar implementation is exact; the vectorized counterparts on
    /// NEON and x86 use reciprocal estimates.
    #[inline]
    pub fn fast_abs(self) -> T {
        self.abs()
    }

    /// Approximate phase angle in radians, `fast_atan2(im, re)`.
    #[inline]
    pub fn fast_arg(self) -> T {
        T::fast_atan2(self.im, self.re)
    }

    /// Complex conjugate.
    #[inline]
    pub fn conj(self) -> Complex<T> {
        Complex::new(self.re, -self.im)
    }

    /// Base-e exponential: `e^re · (cos im + j·sin im)`.
    #[inline]
    pub fn exp(self) -> Complex<T> {
        let magnitude = self.re.exp();
        Complex::new(magnitude * self.im.cos(), magnitude * self.im.sin())
    }

    /// Complex exponential of a real phase: `e^(j·x) = (cos x, sin x)`.
    #[inline]
    pub fn exp_j(x: T) -> Complex<T> {
        Complex::new(x.cos(), x.sin())
    }

    /// True when both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.re.to_f32().is_finite() && self.im.to_f32().is_finite()
    }

    /// True when either component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.re.to_f32().is_nan() || self.im.to_f32().is_nan()
    }
}

impl<T: Real> From<T> for Complex<T> {
    #[inline]
    fn from(re: T) -> Complex<T> {
        Complex::from_real(re)
    }
}

impl<T: Neg<Output = T>> Neg for Complex<T> {
    type Output = Complex<T>;

    #[inline]
    fn neg(self) -> Complex<T> {
        Complex::new(-self.re, -self.im)
    }
}

impl<T: Copy + Add<Output = T>> Add for Complex<T> {
    type Output = Complex<T>;

    #[inline]
    fn add(self, rhs: Complex<T>) -> Complex<T> {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<T: Copy + Sub<Output = T>> Sub for Complex<T> {
    type Output = Complex<T>;

    #[inline]
    fn sub(self, rhs: Complex<T>) -> Complex<T> {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T>> Mul for Complex<T> {
    type Output = Complex<T>;

    #[inline]
    fn mul(self, rhs: Complex<T>) -> Complex<T> {
        let ac = self.re * rhs.re;
        let bd = self.im * rhs.im;
        let ad = self.re * rhs.im;
        let bc = self.im * rhs.re;
        Complex::new(ac - bd, ad + bc)
    }
}

impl<T: Real> Div for Complex<T> {
    type Output = Complex<T>;

    #[inline]
    fn div(self, rhs: Complex<T>) -> Complex<T> {
        let ac = self.re * rhs.re;
        let bd = self.im * rhs.im;
        let ad = self.re * rhs.im;
        let bc = self.im * rhs.re;

        let denominator = rhs.re * rhs.re + rhs.im * rhs.im;
        let denominator_inv = T::one() / denominator;

        Complex::new((ac + bd) * denominator_inv, (bc - ad) * denominator_inv)
    }
}

impl<T: Copy + Add<Output = T>> Add<T> for Complex<T> {
    type Output = Complex<T>;

    #[inline]
    fn add(self, rhs: T) -> Complex<T> {
        Complex::new(self.re + rhs, self.im)
    }
}

impl<T: Copy + Sub<Output = T>> Sub<T> for Complex<T> {
    type Output = Complex<T>;

    #[inline]
    fn sub(self, rhs: T) -> Complex<T> {
        Complex::new(self.re - rhs, self.im)
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Complex<T> {
    type Output = Complex<T>;

    #[inline]
    fn mul(self, rhs: T) -> Complex<T> {
        Complex::new(self.re * rhs, self.im * rhs)
    }
}

impl<T: Real> Div<T> for Complex<T> {
    type Output = Complex<T>;

    #[inline]
    fn div(self, rhs: T) -> Complex<T> {
        let rhs_inv = T::one() / rhs;
        Complex::new(self.re * rhs_inv, self.im * rhs_inv)
    }
}

impl Mul<Complex32> for f32 {
    type Output = Complex32;

    #[inline]
    fn mul(self, rhs: Complex32) -> Complex32 {
        Complex::new(self * rhs.re, self * rhs.im)
    }
}

impl Mul<HalfComplex> for Half {
    type Output = HalfComplex;

    #[inline]
    fn mul(self, rhs: HalfComplex) -> HalfComplex {
        Complex::new(self * rhs.re, self * rhs.im)
    }
}

macro_rules! complex_assign_op {
    ($trait:ident, $method:ident, $op:tt, $rhs:ty) => {
        impl<T: Real> $trait<$rhs> for Complex<T> {
            #[inline]
            fn $method(&mut self, rhs: $rhs) {
                *self = *self $op rhs;
            }
        }
    };
}

complex_assign_op!(AddAssign, add_assign, +, Complex<T>);
complex_assign_op!(SubAssign, sub_assign, -, Complex<T>);
complex_assign_op!(MulAssign, mul_assign, *, Complex<T>);
complex_assign_op!(DivAssign, div_assign, /, Complex<T>);
complex_assign_op!(AddAssign, add_assign, +, T);
complex_assign_op!(SubAssign, sub_assign, -, T);
complex_assign_op!(MulAssign, mul_assign, *, T);
complex_assign_op!(DivAssign, div_assign, /, T);

impl<T: Real> Zero for Complex<T> {
    #[inline]
    fn zero() -> Complex<T> {
        Complex::new(T::zero(), T::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }
}

impl<T: Real> One for Complex<T> {
    #[inline]
    fn one() -> Complex<T> {
        Complex::new(T::one(), T::zero())
    }
}

impl<T: Real> fmt::Display for Complex<T> {
    /// Formats as `a+bj`, collapsing a zero imaginary part to `a` and a zero
    /// real part to `bj`. The value zero formats as `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zero = T::zero();

        if self.re == zero && self.im == zero {
            return write!(f, "0");
        }

        if self.re != zero {
            write!(f, "{}", self.re)?;
        }

        if self.im == zero {
            return Ok(());
        }

        if self.re != zero && self.im > zero {
            write!(f, "+")?;
        }

        write!(f, "{}j", self.im)
    }
}
