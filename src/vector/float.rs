//! Fixed-width registers of real floating point lanes.
//!
//! [`FloatVector`] is a thin wrapper over the backend selected for its
//! element type and lane count; the aliases [`Float2`]..[`Float8`] and
//! [`Half2`]..[`Half8`] name the supported combinations. All backends are
//! semantically equivalent: loading, storing, lane access and arithmetic
//! behave identically whether the storage is a machine register, two
//! composed halves, or a plain array.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::half::Half;

use super::lanes::{FloatLanes, FloatSplit};
use super::uint::UintVector;

/// Register of `N` floating point lanes of type `T`.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct FloatVector<T: FloatLanes<N>, const N: usize> {
    reg: T::Register,
}

/// Two single precision lanes.
pub type Float2 = FloatVector<f32, 2>;
/// Three single precision lanes.
pub type Float3 = FloatVector<f32, 3>;
/// Four single precision lanes.
pub type Float4 = FloatVector<f32, 4>;
/// Eight single precision lanes.
pub type Float8 = FloatVector<f32, 8>;

/// Two half precision lanes.
pub type Half2 = FloatVector<Half, 2>;
/// Three half precision lanes.
pub type Half3 = FloatVector<Half, 3>;
/// Four half precision lanes.
pub type Half4 = FloatVector<Half, 4>;
/// Eight half precision lanes.
pub type Half8 = FloatVector<Half, 8>;

// The wrapper must add nothing on top of its storage.
const _: () = {
    use std::mem::{align_of, size_of};
    assert!(size_of::<Float4>() == size_of::<<f32 as FloatLanes<4>>::Register>());
    assert!(align_of::<Float4>() == align_of::<<f32 as FloatLanes<4>>::Register>());
    assert!(size_of::<Float8>() == size_of::<<f32 as FloatLanes<8>>::Register>());
    assert!(align_of::<Float8>() == align_of::<<f32 as FloatLanes<8>>::Register>());
};

impl<T: FloatLanes<N>, const N: usize> FloatVector<T, N> {
    /// The number of lanes.
    pub const LANES: usize = N;

    /// True when the backend stores lanes in an ISA register. Algorithms use
    /// this to skip a wide code path whose emulation would be slower than
    /// plain scalar code.
    pub const IS_VECTORIZED: bool = T::IS_VECTORIZED;

    /// Diagnostic name of the selected backend.
    pub fn backend_name() -> &'static str {
        T::NAME
    }

    #[inline]
    pub(crate) fn from_register(reg: T::Register) -> Self {
        FloatVector { reg }
    }

    #[inline]
    pub(crate) fn register(self) -> T::Register {
        self.reg
    }

    /// Construct from lane values; `values[0]` becomes lane 0.
    #[inline]
    pub fn from_array(values: [T; N]) -> Self {
        Self::from_register(T::load(&values))
    }

    /// Construct from the first `N` values of a slice.
    ///
    /// Asserts that the slice holds at least `N` values.
    #[inline]
    pub fn load(values: &[T]) -> Self {
        assert!(values.len() >= N);
        Self::from_register(T::load(values[..N].try_into().unwrap()))
    }

    /// Construct with the same value in every lane.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::from_register(T::splat(value))
    }

    /// Write all lanes to the start of a slice.
    ///
    /// Asserts that the slice has room for `N` values.
    #[inline]
    pub fn store(self, dst: &mut [T]) {
        assert!(dst.len() >= N);
        T::store(self.reg, (&mut dst[..N]).try_into().unwrap());
    }

    /// Write a single lane. Asserts `index < N`.
    #[inline]
    pub fn store_lane(self, index: usize, dst: &mut T) {
        assert!(index < N);
        T::store_lane(self.reg, index, dst);
    }

    /// Read a single lane. Asserts `index < N`.
    #[inline]
    pub fn extract(self, index: usize) -> T {
        assert!(index < N);
        T::extract(self.reg, index)
    }

    /// New register with lane `index` replaced. Asserts `index < N`.
    #[inline]
    #[must_use]
    pub fn set_lane(self, index: usize, value: T) -> Self {
        assert!(index < N);
        Self::from_register(T::set_lane(self.reg, index, value))
    }

    /// Per-lane absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::from_register(<T as FloatLanes<N>>::abs(self.reg))
    }

    /// Per-lane minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::from_register(<T as FloatLanes<N>>::min(self.reg, other.reg))
    }

    /// Per-lane maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::from_register(<T as FloatLanes<N>>::max(self.reg, other.reg))
    }

    /// Maximum across lanes.
    #[inline]
    pub fn horizontal_max(self) -> T {
        T::horizontal_max(self.reg)
    }

    /// Sum across lanes.
    #[inline]
    pub fn horizontal_sum(self) -> T {
        T::horizontal_sum(self.reg)
    }

    /// Per-lane approximate base-10 logarithm.
    ///
    /// Monotone on positive inputs with relative error at most 2e-6 in
    /// single precision; exactly 0 for a lane holding 1.
    #[inline]
    pub fn fast_log10(self) -> Self {
        Self::from_register(<T as FloatLanes<N>>::fast_log10(self.reg))
    }

    /// `self + b·c` per lane, fused where the ISA provides it.
    #[inline]
    #[must_use]
    pub fn multiply_add(self, b: Self, c: Self) -> Self {
        Self::from_register(T::multiply_add(self.reg, b.reg, c.reg))
    }

    /// Per-lane `self < other`. Mask lanes are all-ones or all-zeros.
    #[inline]
    pub fn less_than(self, other: Self) -> UintVector<T::MaskScalar, N> {
        UintVector::from_register(T::less_than(self.reg, other.reg))
    }

    /// Per-lane `self > other`. Mask lanes are all-ones or all-zeros.
    #[inline]
    pub fn greater_than(self, other: Self) -> UintVector<T::MaskScalar, N> {
        UintVector::from_register(T::greater_than(self.reg, other.reg))
    }

    /// Bitwise select: result bits come from `source1` where the mask bit is
    /// set and from `source2` where it is clear. With comparator masks this
    /// is a per-lane value select.
    #[inline]
    pub fn select(
        mask: UintVector<T::MaskScalar, N>,
        source1: Self,
        source2: Self,
    ) -> Self {
        Self::from_register(<T as FloatLanes<N>>::select(mask.register(), source1.reg, source2.reg))
    }

    /// Per-lane sign as ±1, keeping the sign of zero.
    #[inline]
    pub fn sign(self) -> Self {
        Self::from_register(<T as FloatLanes<N>>::sign(self.reg))
    }

    /// Per-lane magnitude of `self` with the sign of `sgn`.
    #[inline]
    pub fn copysign(self, sgn: Self) -> Self {
        Self::from_register(<T as FloatLanes<N>>::copysign(self.reg, sgn.reg))
    }

    /// Lanes in the opposite order.
    #[inline]
    pub fn reverse(self) -> Self {
        Self::from_register(T::reverse(self.reg))
    }

    /// Per-lane sine.
    #[inline]
    pub fn sin(self) -> Self {
        Self::from_register(<T as FloatLanes<N>>::sin(self.reg))
    }

    /// Per-lane cosine.
    #[inline]
    pub fn cos(self) -> Self {
        Self::from_register(<T as FloatLanes<N>>::cos(self.reg))
    }

    /// Per-lane sine and cosine in one pass.
    #[inline]
    pub fn sin_cos(self) -> (Self, Self) {
        let (sin, cos) = T::sin_cos(self.reg);
        (Self::from_register(sin), Self::from_register(cos))
    }

    /// Per-lane base-e exponential.
    #[inline]
    pub fn exp(self) -> Self {
        Self::from_register(<T as FloatLanes<N>>::exp(self.reg))
    }

    /// Sum of squares of all lanes.
    #[inline]
    pub fn squared_norm(self) -> T {
        T::squared_norm(self.reg)
    }

    /// Square root of [`Self::squared_norm`]: the Frobenius norm of the
    /// register viewed as a small vector.
    #[inline]
    pub fn norm(self) -> T {
        self.squared_norm().sqrt()
    }

    /// Same as [`Self::norm`], under the name linear algebra uses.
    #[inline]
    pub fn length(self) -> T {
        self.norm()
    }

    /// Same as [`Self::squared_norm`], under the name linear algebra uses.
    #[inline]
    pub fn squared_length(self) -> T {
        self.squared_norm()
    }

    /// Scale to a unit vector. A zero vector is returned as is.
    #[inline]
    #[must_use]
    pub fn normalize(self) -> Self {
        let norm = self.norm();
        if norm == T::zero() {
            return self;
        }
        self / norm
    }

    /// Dot product: the lane-wise product summed across lanes.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        (self * other).horizontal_sum()
    }
}

impl<T: FloatLanes<N>, const N: usize> From<[T; N]> for FloatVector<T, N> {
    #[inline]
    fn from(values: [T; N]) -> Self {
        Self::from_array(values)
    }
}

impl<T: FloatLanes<2>> FloatVector<T, 2> {
    /// Construct from individual lanes.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self::from_array([x, y])
    }

    /// Lane 0.
    #[inline]
    pub fn x(self) -> T {
        self.extract(0)
    }

    /// Lane 1.
    #[inline]
    pub fn y(self) -> T {
        self.extract(1)
    }

    /// Replace lane 0.
    #[inline]
    pub fn set_x(&mut self, value: T) {
        *self = self.set_lane(0, value);
    }

    /// Replace lane 1.
    #[inline]
    pub fn set_y(&mut self, value: T) {
        *self = self.set_lane(1, value);
    }
}

impl<T: FloatLanes<3>> FloatVector<T, 3> {
    /// Construct from individual lanes.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }

    /// Lane 0.
    #[inline]
    pub fn x(self) -> T {
        self.extract(0)
    }

    /// Lane 1.
    #[inline]
    pub fn y(self) -> T {
        self.extract(1)
    }

    /// Lane 2.
    #[inline]
    pub fn z(self) -> T {
        self.extract(2)
    }

    /// Replace lane 0.
    #[inline]
    pub fn set_x(&mut self, value: T) {
        *self = self.set_lane(0, value);
    }

    /// Replace lane 1.
    #[inline]
    pub fn set_y(&mut self, value: T) {
        *self = self.set_lane(1, value);
    }

    /// Replace lane 2.
    #[inline]
    pub fn set_z(&mut self, value: T) {
        *self = self.set_lane(2, value);
    }
}

impl<T: FloatLanes<4>> FloatVector<T, 4> {
    /// Construct from individual lanes.
    #[inline]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self::from_array([x, y, z, w])
    }

    /// Lane 0.
    #[inline]
    pub fn x(self) -> T {
        self.extract(0)
    }

    /// Lane 1.
    #[inline]
    pub fn y(self) -> T {
        self.extract(1)
    }

    /// Lane 2.
    #[inline]
    pub fn z(self) -> T {
        self.extract(2)
    }

    /// Lane 3.
    #[inline]
    pub fn w(self) -> T {
        self.extract(3)
    }

    /// Replace lane 0.
    #[inline]
    pub fn set_x(&mut self, value: T) {
        *self = self.set_lane(0, value);
    }

    /// Replace lane 1.
    #[inline]
    pub fn set_y(&mut self, value: T) {
        *self = self.set_lane(1, value);
    }

    /// Replace lane 2.
    #[inline]
    pub fn set_z(&mut self, value: T) {
        *self = self.set_lane(2, value);
    }

    /// Replace lane 3.
    #[inline]
    pub fn set_w(&mut self, value: T) {
        *self = self.set_lane(3, value);
    }
}

impl<T: FloatLanes<8>> FloatVector<T, 8> {
    /// Construct from individual lanes.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub fn new(a: T, b: T, c: T, d: T, e: T, f: T, g: T, h: T) -> Self {
        Self::from_array([a, b, c, d, e, f, g, h])
    }
}

impl<T: FloatSplit<4, 2>> FloatVector<T, 4> {
    /// Lanes 0 and 1 as a half-width register.
    #[inline]
    pub fn extract_low(self) -> FloatVector<T, 2> {
        FloatVector::from_register(<T as FloatSplit<4, 2>>::extract_low(self.reg))
    }

    /// Lanes 2 and 3 as a half-width register.
    #[inline]
    pub fn extract_high(self) -> FloatVector<T, 2> {
        FloatVector::from_register(<T as FloatSplit<4, 2>>::extract_high(self.reg))
    }

    /// Inverse of the extraction: build the register from halves.
    #[inline]
    pub fn from_halves(low: FloatVector<T, 2>, high: FloatVector<T, 2>) -> Self {
        Self::from_register(<T as FloatSplit<4, 2>>::combine(
            low.register(),
            high.register(),
        ))
    }
}

impl<T: FloatSplit<8, 4>> FloatVector<T, 8> {
    /// Lanes 0 through 3 as a half-width register.
    #[inline]
    pub fn extract_low(self) -> FloatVector<T, 4> {
        FloatVector::from_register(<T as FloatSplit<8, 4>>::extract_low(self.reg))
    }

    /// Lanes 4 through 7 as a half-width register.
    #[inline]
    pub fn extract_high(self) -> FloatVector<T, 4> {
        FloatVector::from_register(<T as FloatSplit<8, 4>>::extract_high(self.reg))
    }

    /// Inverse of the extraction: build the register from halves.
    #[inline]
    pub fn from_halves(low: FloatVector<T, 4>, high: FloatVector<T, 4>) -> Self {
        Self::from_register(<T as FloatSplit<8, 4>>::combine(
            low.register(),
            high.register(),
        ))
    }
}

impl<T: FloatLanes<N>, const N: usize> Neg for FloatVector<T, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_register(<T as FloatLanes<N>>::neg(self.reg))
    }
}

impl<T: FloatLanes<N>, const N: usize> Add for FloatVector<T, N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_register(<T as FloatLanes<N>>::add(self.reg, rhs.reg))
    }
}

impl<T: FloatLanes<N>, const N: usize> Sub for FloatVector<T, N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_register(<T as FloatLanes<N>>::sub(self.reg, rhs.reg))
    }
}

impl<T: FloatLanes<N>, const N: usize> Mul for FloatVector<T, N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_register(<T as FloatLanes<N>>::mul(self.reg, rhs.reg))
    }
}

impl<T: FloatLanes<N>, const N: usize> Div for FloatVector<T, N> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::from_register(<T as FloatLanes<N>>::div(self.reg, rhs.reg))
    }
}

impl<T: FloatLanes<N>, const N: usize> Mul<T> for FloatVector<T, N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::from_register(T::mul_scalar(self.reg, rhs))
    }
}

impl<T: FloatLanes<N>, const N: usize> Div<T> for FloatVector<T, N> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::from_register(T::div_scalar(self.reg, rhs))
    }
}

impl<const N: usize> Mul<FloatVector<f32, N>> for f32
where
    f32: FloatLanes<N>,
{
    type Output = FloatVector<f32, N>;

    #[inline]
    fn mul(self, rhs: FloatVector<f32, N>) -> FloatVector<f32, N> {
        rhs * self
    }
}

impl<const N: usize> Mul<FloatVector<Half, N>> for Half
where
    Half: FloatLanes<N>,
{
    type Output = FloatVector<Half, N>;

    #[inline]
    fn mul(self, rhs: FloatVector<Half, N>) -> FloatVector<Half, N> {
        rhs * self
    }
}

impl<T: FloatLanes<N>, const N: usize> AddAssign for FloatVector<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: FloatLanes<N>, const N: usize> SubAssign for FloatVector<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: FloatLanes<N>, const N: usize> MulAssign for FloatVector<T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: FloatLanes<N>, const N: usize> DivAssign for FloatVector<T, N> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<T: FloatLanes<N>, const N: usize> fmt::Display for FloatVector<T, N> {
    /// Formats as `{v0, v1, ..., vN-1}`.
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

impl<T: FloatLanes<N>, const N: usize> fmt::Debug for FloatVector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
