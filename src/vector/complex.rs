//! Fixed-width registers of complex lanes.
//!
//! [`ComplexVector`] holds `N` complex lanes with real parts of type `T`.
//! The storage layout is backend defined — interleaved `[re, im, re, im, …]`
//! or two parallel planes of reals and imaginaries — and only the lane
//! access behavior is observable.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::One;

use crate::complex::Complex;
use crate::half::Half;

use super::float::FloatVector;
use super::lanes::{ComplexLanes, ComplexSplit};

/// Register of `N` complex lanes with real parts of type `T`.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct ComplexVector<T: ComplexLanes<N>, const N: usize> {
    reg: T::CRegister,
}

/// Two single precision complex lanes.
pub type Complex2 = ComplexVector<f32, 2>;
/// Three single precision complex lanes.
pub type Complex3 = ComplexVector<f32, 3>;
/// Four single precision complex lanes.
pub type Complex4 = ComplexVector<f32, 4>;
/// Eight single precision complex lanes.
pub type Complex8 = ComplexVector<f32, 8>;

/// Two half precision complex lanes.
pub type HalfComplex2 = ComplexVector<Half, 2>;
/// Three half precision complex lanes.
pub type HalfComplex3 = ComplexVector<Half, 3>;
/// Four half precision complex lanes.
pub type HalfComplex4 = ComplexVector<Half, 4>;
/// Eight half precision complex lanes.
pub type HalfComplex8 = ComplexVector<Half, 8>;

// The wrapper must add nothing on top of its storage.
const _: () = {
    use std::mem::{align_of, size_of};
    assert!(size_of::<Complex4>() == size_of::<<f32 as ComplexLanes<4>>::CRegister>());
    assert!(align_of::<Complex4>() == align_of::<<f32 as ComplexLanes<4>>::CRegister>());
    assert!(size_of::<Complex8>() == size_of::<<f32 as ComplexLanes<8>>::CRegister>());
    assert!(align_of::<Complex8>() == align_of::<<f32 as ComplexLanes<8>>::CRegister>());
};

impl<T: ComplexLanes<N>, const N: usize> ComplexVector<T, N> {
    /// The number of complex lanes.
    pub const LANES: usize = N;

    /// True when the backend stores lanes in an ISA register.
    pub const IS_VECTORIZED: bool = T::C_IS_VECTORIZED;

    /// Diagnostic name of the selected backend.
    pub fn backend_name() -> &'static str {
        T::C_NAME
    }

    #[inline]
    pub(crate) fn from_register(reg: T::CRegister) -> Self {
        ComplexVector { reg }
    }

    /// Construct from lane values; `values[0]` becomes lane 0.
    #[inline]
    pub fn from_array(values: [Complex<T>; N]) -> Self {
        Self::from_register(T::c_load(&values))
    }

    /// Construct from the first `N` values of a slice.
    ///
    /// Asserts that the slice holds at least `N` values.
    #[inline]
    pub fn load(values: &[Complex<T>]) -> Self {
        assert!(values.len() >= N);
        Self::from_register(T::c_load(values[..N].try_into().unwrap()))
    }

    /// Construct with the same value in every lane.
    #[inline]
    pub fn splat(value: Complex<T>) -> Self {
        Self::from_register(T::c_splat(value))
    }

    /// Construct from separate registers of real and imaginary parts.
    #[inline]
    pub fn from_parts(re: FloatVector<T, N>, im: FloatVector<T, N>) -> Self {
        Self::from_register(T::c_from_parts(re.register(), im.register()))
    }

    /// Write all lanes to the start of a slice.
    ///
    /// Asserts that the slice has room for `N` values.
    #[inline]
    pub fn store(self, dst: &mut [Complex<T>]) {
        assert!(dst.len() >= N);
        T::c_store(self.reg, (&mut dst[..N]).try_into().unwrap());
    }

    /// Write a single lane. Asserts `index < N`.
    #[inline]
    pub fn store_lane(self, index: usize, dst: &mut Complex<T>) {
        assert!(index < N);
        T::c_store_lane(self.reg, index, dst);
    }

    /// Read a single lane. Asserts `index < N`.
    #[inline]
    pub fn extract(self, index: usize) -> Complex<T> {
        assert!(index < N);
        T::c_extract(self.reg, index)
    }

    /// New register with lane `index` replaced. Asserts `index < N`.
    #[inline]
    #[must_use]
    pub fn set_lane(self, index: usize, value: Complex<T>) -> Self {
        assert!(index < N);
        Self::from_register(T::c_set_lane(self.reg, index, value))
    }

    /// All real parts as a float register.
    #[inline]
    pub fn extract_real(self) -> FloatVector<T, N> {
        FloatVector::from_register(T::c_extract_real(self.reg))
    }

    /// All imaginary parts as a float register.
    #[inline]
    pub fn extract_imag(self) -> FloatVector<T, N> {
        FloatVector::from_register(T::c_extract_imag(self.reg))
    }

    /// Per-lane magnitude.
    #[inline]
    pub fn abs(self) -> FloatVector<T, N> {
        FloatVector::from_register(T::c_abs(self.reg))
    }

    /// Per-lane magnitude from reciprocal estimates.
    ///
    /// On NEON and x86 the relative error is at most 4e-3; the scalar
    /// backend computes the exact square root.
    #[inline]
    pub fn fast_abs(self) -> FloatVector<T, N> {
        FloatVector::from_register(T::c_fast_abs(self.reg))
    }

    /// Per-lane squared magnitude.
    #[inline]
    pub fn norm(self) -> FloatVector<T, N> {
        FloatVector::from_register(T::c_norm(self.reg))
    }

    /// Sum across lanes.
    #[inline]
    pub fn horizontal_sum(self) -> Complex<T> {
        T::c_horizontal_sum(self.reg)
    }

    /// `self + b·c` per lane, with a register of real factors `c`.
    #[inline]
    #[must_use]
    pub fn multiply_add(self, b: Self, c: FloatVector<T, N>) -> Self {
        Self::from_register(T::c_multiply_add(self.reg, b.reg, c.register()))
    }

    /// Per-lane approximate phase angle in radians.
    #[inline]
    pub fn fast_arg(self) -> FloatVector<T, N> {
        FloatVector::from_register(T::c_fast_arg(self.reg))
    }

    /// Per-lane complex conjugate.
    #[inline]
    pub fn conj(self) -> Self {
        Self::from_register(T::c_conj(self.reg))
    }

    /// Per-lane complex exponential of a real phase: lane i becomes
    /// `(cos x[i], sin x[i])`.
    #[inline]
    pub fn exp_j(x: FloatVector<T, N>) -> Self {
        Self::from_register(T::c_exp_j(x.register()))
    }

    /// Per-lane base-e exponential.
    #[inline]
    pub fn exp(self) -> Self {
        Self::from_register(T::c_exp(self.reg))
    }

    /// Lanes in the opposite order.
    #[inline]
    pub fn reverse(self) -> Self {
        Self::from_register(T::c_reverse(self.reg))
    }

    /// Per-lane integer power by binary exponentiation.
    ///
    /// A positive exponent matches repeated multiplication up to
    /// reassociation; 0 gives 1 in every lane and a negative exponent gives
    /// the reciprocal of the positive power.
    pub fn fast_int_pow(self, exp: i32) -> Self {
        let one = Self::splat(Complex::one());
        if exp == 0 {
            return one;
        }

        let mut bit = exp.unsigned_abs();
        let mut square = self;
        let mut result = one;
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
            one / result
        } else {
            result
        }
    }
}

impl<T: ComplexLanes<N>, const N: usize> From<[Complex<T>; N]> for ComplexVector<T, N> {
    #[inline]
    fn from(values: [Complex<T>; N]) -> Self {
        Self::from_array(values)
    }
}

impl<T: ComplexLanes<2>> ComplexVector<T, 2> {
    /// Construct from individual lanes.
    #[inline]
    pub fn new(x: Complex<T>, y: Complex<T>) -> Self {
        Self::from_array([x, y])
    }

    /// Lane 0.
    #[inline]
    pub fn x(self) -> Complex<T> {
        self.extract(0)
    }

    /// Lane 1.
    #[inline]
    pub fn y(self) -> Complex<T> {
        self.extract(1)
    }

    /// Replace lane 0.
    #[inline]
    pub fn set_x(&mut self, value: Complex<T>) {
        *self = self.set_lane(0, value);
    }

    /// Replace lane 1.
    #[inline]
    pub fn set_y(&mut self, value: Complex<T>) {
        *self = self.set_lane(1, value);
    }
}

impl<T: ComplexLanes<3>> ComplexVector<T, 3> {
    /// Construct from individual lanes.
    #[inline]
    pub fn new(x: Complex<T>, y: Complex<T>, z: Complex<T>) -> Self {
        Self::from_array([x, y, z])
    }

    /// Lane 0.
    #[inline]
    pub fn x(self) -> Complex<T> {
        self.extract(0)
    }

    /// Lane 1.
    #[inline]
    pub fn y(self) -> Complex<T> {
        self.extract(1)
    }

    /// Lane 2.
    #[inline]
    pub fn z(self) -> Complex<T> {
        self.extract(2)
    }

    /// Replace lane 0.
    #[inline]
    pub fn set_x(&mut self, value: Complex<T>) {
        *self = self.set_lane(0, value);
    }

    /// Replace lane 1.
    #[inline]
    pub fn set_y(&mut self, value: Complex<T>) {
        *self = self.set_lane(1, value);
    }

    /// Replace lane 2.
    #[inline]
    pub fn set_z(&mut self, value: Complex<T>) {
        *self = self.set_lane(2, value);
    }
}

impl<T: ComplexLanes<4>> ComplexVector<T, 4> {
    /// Construct from individual lanes.
    #[inline]
    pub fn new(x: Complex<T>, y: Complex<T>, z: Complex<T>, w: Complex<T>) -> Self {
        Self::from_array([x, y, z, w])
    }

    /// Lane 0.
    #[inline]
    pub fn x(self) -> Complex<T> {
        self.extract(0)
    }

    /// Lane 1.
    #[inline]
    pub fn y(self) -> Complex<T> {
        self.extract(1)
    }

    /// Lane 2.
    #[inline]
    pub fn z(self) -> Complex<T> {
        self.extract(2)
    }

    /// Lane 3.
    #[inline]
    pub fn w(self) -> Complex<T> {
        self.extract(3)
    }

    /// Replace lane 0.
    #[inline]
    pub fn set_x(&mut self, value: Complex<T>) {
        *self = self.set_lane(0, value);
    }

    /// Replace lane 1.
    #[inline]
    pub fn set_y(&mut self, value: Complex<T>) {
        *self = self.set_lane(1, value);
    }

    /// Replace lane 2.
    #[inline]
    pub fn set_z(&mut self, value: Complex<T>) {
        *self = self.set_lane(2, value);
    }

    /// Replace lane 3.
    #[inline]
    pub fn set_w(&mut self, value: Complex<T>) {
        *self = self.set_lane(3, value);
    }
}

impl<T: ComplexLanes<8>> ComplexVector<T, 8> {
    /// Construct from individual lanes.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        a: Complex<T>,
        b: Complex<T>,
        c: Complex<T>,
        d: Complex<T>,
        e: Complex<T>,
        f: Complex<T>,
        g: Complex<T>,
        h: Complex<T>,
    ) -> Self {
        Self::from_array([a, b, c, d, e, f, g, h])
    }
}

impl<T: ComplexSplit<4, 2>> ComplexVector<T, 4> {
    /// Lanes 0 and 1 as a half-width register.
    #[inline]
    pub fn extract_low(self) -> ComplexVector<T, 2> {
        ComplexVector::from_register(<T as ComplexSplit<4, 2>>::c_extract_low(self.reg))
    }

    /// Lanes 2 and 3 as a half-width register.
    #[inline]
    pub fn extract_high(self) -> ComplexVector<T, 2> {
        ComplexVector::from_register(<T as ComplexSplit<4, 2>>::c_extract_high(self.reg))
    }

    /// Inverse of the extraction: build the register from halves.
    #[inline]
    pub fn from_halves(low: ComplexVector<T, 2>, high: ComplexVector<T, 2>) -> Self {
        Self::from_register(<T as ComplexSplit<4, 2>>::c_combine(low.reg, high.reg))
    }
}

impl<T: ComplexSplit<8, 4>> ComplexVector<T, 8> {
    /// Lanes 0 through 3 as a half-width register.
    #[inline]
    pub fn extract_low(self) -> ComplexVector<T, 4> {
        ComplexVector::from_register(<T as ComplexSplit<8, 4>>::c_extract_low(self.reg))
    }

    /// Lanes 4 through 7 as a half-width register.
    #[inline]
    pub fn extract_high(self) -> ComplexVector<T, 4> {
        ComplexVector::from_register(<T as ComplexSplit<8, 4>>::c_extract_high(self.reg))
    }

    /// Inverse of the extraction: build the register from halves.
    #[inline]
    pub fn from_halves(low: ComplexVector<T, 4>, high: ComplexVector<T, 4>) -> Self {
        Self::from_register(<T as ComplexSplit<8, 4>>::c_combine(low.reg, high.reg))
    }
}

impl<T: ComplexLanes<N>, const N: usize> Neg for ComplexVector<T, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_register(T::c_neg(self.reg))
    }
}

impl<T: ComplexLanes<N>, const N: usize> Add for ComplexVector<T, N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_register(T::c_add(self.reg, rhs.reg))
    }
}

impl<T: ComplexLanes<N>, const N: usize> Sub for ComplexVector<T, N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_register(T::c_sub(self.reg, rhs.reg))
    }
}

impl<T: ComplexLanes<N>, const N: usize> Mul for ComplexVector<T, N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_register(T::c_mul(self.reg, rhs.reg))
    }
}

impl<T: ComplexLanes<N>, const N: usize> Mul<FloatVector<T, N>> for ComplexVector<T, N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: FloatVector<T, N>) -> Self {
        Self::from_register(T::c_mul_real(self.reg, rhs.register()))
    }
}

impl<T: ComplexLanes<N>, const N: usize> Mul<ComplexVector<T, N>> for FloatVector<T, N> {
    type Output = ComplexVector<T, N>;

    #[inline]
    fn mul(self, rhs: ComplexVector<T, N>) -> ComplexVector<T, N> {
        rhs * self
    }
}

impl<T: ComplexLanes<N>, const N: usize> Div for ComplexVector<T, N> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::from_register(T::c_div(self.reg, rhs.reg))
    }
}

impl<T: ComplexLanes<N>, const N: usize> AddAssign for ComplexVector<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: ComplexLanes<N>, const N: usize> SubAssign for ComplexVector<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: ComplexLanes<N>, const N: usize> MulAssign for ComplexVector<T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: ComplexLanes<N>, const N: usize> MulAssign<FloatVector<T, N>> for ComplexVector<T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: FloatVector<T, N>) {
        *self = *self * rhs;
    }
}

impl<T: ComplexLanes<N>, const N: usize> DivAssign for ComplexVector<T, N> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<T: ComplexLanes<N>, const N: usize> fmt::Display for ComplexVector<T, N> {
    /// Formats as `{v0, v1, ..., vN-1}` with complex lane formatting.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for index in 0..N {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", self.extract(index))?;
        }
        write!(f, "}}")
    }
}

impl<T: ComplexLanes<N>, const N: usize> fmt::Debug for ComplexVector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
