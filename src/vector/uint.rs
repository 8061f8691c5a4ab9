//! Fixed-width registers of unsigned integer lanes.
//!
//! [`UintVector`] doubles as the comparator mask type of the float registers
//! with the matching lane width: `u32` lanes mask single precision, `u16`
//! lanes mask half precision. Comparators fill a lane with all-ones or
//! all-zeros, and [`FloatVector::select`](super::float::FloatVector::select)
//! consumes such masks bit-wise.

use std::fmt;

use super::lanes::{UintLanes, UintSplit};

/// Register of `N` unsigned integer lanes of type `T`.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct UintVector<T: UintLanes<N>, const N: usize> {
    reg: T::Register,
}

/// Two 32-bit unsigned lanes.
pub type Uint2 = UintVector<u32, 2>;
/// Three 32-bit unsigned lanes.
pub type Uint3 = UintVector<u32, 3>;
/// Four 32-bit unsigned lanes.
pub type Uint4 = UintVector<u32, 4>;
/// Eight 32-bit unsigned lanes.
pub type Uint8 = UintVector<u32, 8>;

/// Two 16-bit unsigned lanes.
pub type Ushort2 = UintVector<u16, 2>;
/// Three 16-bit unsigned lanes.
pub type Ushort3 = UintVector<u16, 3>;
/// Four 16-bit unsigned lanes.
pub type Ushort4 = UintVector<u16, 4>;
/// Eight 16-bit unsigned lanes.
pub type Ushort8 = UintVector<u16, 8>;

// The wrapper must add nothing on top of its storage.
const _: () = {
    use std::mem::{align_of, size_of};
    assert!(size_of::<Uint4>() == size_of::<<u32 as UintLanes<4>>::Register>());
    assert!(align_of::<Uint4>() == align_of::<<u32 as UintLanes<4>>::Register>());
    assert!(size_of::<Ushort8>() == size_of::<<u16 as UintLanes<8>>::Register>());
    assert!(align_of::<Ushort8>() == align_of::<<u16 as UintLanes<8>>::Register>());
};

impl<T: UintLanes<N>, const N: usize> UintVector<T, N> {
    /// The number of lanes.
    pub const LANES: usize = N;

    /// True when the backend stores lanes in an ISA register.
    pub const IS_VECTORIZED: bool = T::IS_VECTORIZED;

    /// Diagnostic name of the selected backend.
    pub fn backend_name() -> &'static str {
        T::NAME
    }

    #[inline]
    pub(crate) fn from_register(reg: T::Register) -> Self {
        UintVector { reg }
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

    /// Per-lane minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::from_register(<T as UintLanes<N>>::min(self.reg, other.reg))
    }

    /// Per-lane maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::from_register(<T as UintLanes<N>>::max(self.reg, other.reg))
    }

    /// Maximum across lanes.
    #[inline]
    pub fn horizontal_max(self) -> T {
        T::horizontal_max(self.reg)
    }

    /// Bitwise select: result bits come from `source1` where the mask bit is
    /// set and from `source2` where it is clear.
    #[inline]
    pub fn select(mask: Self, source1: Self, source2: Self) -> Self {
        Self::from_register(T::select(mask.reg, source1.reg, source2.reg))
    }

    /// Lanes in the opposite order.
    #[inline]
    pub fn reverse(self) -> Self {
        Self::from_register(T::reverse(self.reg))
    }
}

impl<T: UintLanes<N>, const N: usize> From<[T; N]> for UintVector<T, N> {
    #[inline]
    fn from(values: [T; N]) -> Self {
        Self::from_array(values)
    }
}

impl<T: UintLanes<2>> UintVector<T, 2> {
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

impl<T: UintLanes<3>> UintVector<T, 3> {
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

impl<T: UintLanes<4>> UintVector<T, 4> {
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

impl<T: UintLanes<8>> UintVector<T, 8> {
    /// Construct from individual lanes.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub fn new(a: T, b: T, c: T, d: T, e: T, f: T, g: T, h: T) -> Self {
        Self::from_array([a, b, c, d, e, f, g, h])
    }
}

impl<T: UintSplit<4, 2>> UintVector<T, 4> {
    /// Lanes 0 and 1 as a half-width register.
    #[inline]
    pub fn extract_low(self) -> UintVector<T, 2> {
        UintVector::from_register(<T as UintSplit<4, 2>>::extract_low(self.reg))
    }

    /// Lanes 2 and 3 as a half-width register.
    #[inline]
    pub fn extract_high(self) -> UintVector<T, 2> {
        UintVector::from_register(<T as UintSplit<4, 2>>::extract_high(self.reg))
    }

    /// Inverse of the extraction: build the register from halves.
    #[inline]
    pub fn from_halves(low: UintVector<T, 2>, high: UintVector<T, 2>) -> Self {
        Self::from_register(<T as UintSplit<4, 2>>::combine(
            low.register(),
            high.register(),
        ))
    }
}

impl<T: UintSplit<8, 4>> UintVector<T, 8> {
    /// Lanes 0 through 3 as a half-width register.
    #[inline]
    pub fn extract_low(self) -> UintVector<T, 4> {
        UintVector::from_register(<T as UintSplit<8, 4>>::extract_low(self.reg))
    }

    /// Lanes 4 through 7 as a half-width register.
    #[inline]
    pub fn extract_high(self) -> UintVector<T, 4> {
        UintVector::from_register(<T as UintSplit<8, 4>>::extract_high(self.reg))
    }

    /// Inverse of the extraction: build the register from halves.
    #[inline]
    pub fn from_halves(low: UintVector<T, 4>, high: UintVector<T, 4>) -> Self {
        Self::from_register(<T as UintSplit<8, 4>>::combine(
            low.register(),
            high.register(),
        ))
    }
}

impl<T: UintLanes<N>, const N: usize> fmt::Display for UintVector<T, N> {
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

impl<T: UintLanes<N>, const N: usize> fmt::Debug for UintVector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
