//! Backend contracts for the vectorized register types.
//!
//! For every pair of element type and lane count there is exactly one backend
//! implementation compiled in, selected by `cfg` at build time: a native ISA
//! backend (NEON, x86), a composition of two half-width registers, or the
//! portable scalar fallback. The public register types in
//! [`float`](super::float), [`uint`](super::uint) and
//! [`complex`](super::complex) are thin wrappers over these traits, so the
//! observable behavior is identical across backends.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use crate::complex::Complex;
use crate::math::Real;

/// Unsigned integer lane element: `u32` or `u16`.
pub trait UintScalar:
    Copy
    + Ord
    + Eq
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
    + fmt::Display
    + fmt::Debug
{
    /// Value with every bit clear.
    const ZERO: Self;
    /// Value with every bit set; the canonical true lane of a comparator
    /// mask.
    const ONES: Self;
}

impl UintScalar for u32 {
    const ZERO: u32 = 0;
    const ONES: u32 = u32::MAX;
}

impl UintScalar for u16 {
    const ZERO: u16 = 0;
    const ONES: u16 = u16::MAX;
}

/// Backend for an `N`-lane register of unsigned integer elements.
///
/// Also serves as the mask register produced by floating point comparators
/// of the matching bit width.
pub trait UintLanes<const N: usize>: UintScalar {
    /// Raw storage: an ISA register, two half-width registers, or an aligned
    /// array.
    type Register: Copy;

    /// True when the storage is an ISA register. Algorithms skip their wide
    /// code path when this is false, since stepping an emulated register
    /// lane by lane has a worse memory access pattern than plain scalar
    /// code.
    const IS_VECTORIZED: bool;

    /// Diagnostic backend name: "Neon", "X86", "Scalar", "Uint4x2", ...
    const NAME: &'static str;

    /// Construct from lane values; `values[0]` is lane 0.
    fn load(values: &[Self; N]) -> Self::Register;
    /// Construct with the same value in every lane.
    fn splat(value: Self) -> Self::Register;
    /// Write all lanes out.
    fn store(reg: Self::Register, dst: &mut [Self; N]);
    /// Write a single lane out. `index` must be below `N`.
    fn store_lane(reg: Self::Register, index: usize, dst: &mut Self);
    /// Read a single lane. `index` must be below `N`.
    fn extract(reg: Self::Register, index: usize) -> Self;
    /// Functional update of a single lane. `index` must be below `N`.
    fn set_lane(reg: Self::Register, index: usize, value: Self) -> Self::Register;

    /// Per-lane minimum.
    fn min(a: Self::Register, b: Self::Register) -> Self::Register;
    /// Per-lane maximum.
    fn max(a: Self::Register, b: Self::Register) -> Self::Register;
    /// Maximum across lanes.
    fn horizontal_max(reg: Self::Register) -> Self;
    /// Bitwise select: result bits come from `source1` where the mask bit is
    /// set, from `source2` where it is clear.
    fn select(
        mask: Self::Register,
        source1: Self::Register,
        source2: Self::Register,
    ) -> Self::Register;
    /// Reverse the lane order.
    fn reverse(reg: Self::Register) -> Self::Register;
}

/// Backend for an `N`-lane register of real floating point elements
/// (`f32` or [`crate::Half`]).
pub trait FloatLanes<const N: usize>: Real {
    /// Raw storage, see [`UintLanes::Register`].
    type Register: Copy;
    /// Unsigned element of the comparator mask with the matching bit width:
    /// `u32` for `f32` lanes, `u16` for half lanes.
    type MaskScalar: UintLanes<N>;

    /// True when the storage is an ISA register.
    const IS_VECTORIZED: bool;
    /// Diagnostic backend name.
    const NAME: &'static str;

    /// Construct from lane values; `values[0]` is lane 0.
    fn load(values: &[Self; N]) -> Self::Register;
    /// Construct with the same value in every lane.
    fn splat(value: Self) -> Self::Register;
    /// Write all lanes out.
    fn store(reg: Self::Register, dst: &mut [Self; N]);
    /// Write a single lane out. `index` must be below `N`.
    fn store_lane(reg: Self::Register, index: usize, dst: &mut Self);
    /// Read a single lane. `index` must be below `N`.
    fn extract(reg: Self::Register, index: usize) -> Self;
    /// Functional update of a single lane. `index` must be below `N`.
    fn set_lane(reg: Self::Register, index: usize, value: Self) -> Self::Register;

    /// Per-lane negation.
    fn neg(reg: Self::Register) -> Self::Register;
    /// Per-lane sum.
    fn add(a: Self::Register, b: Self::Register) -> Self::Register;
    /// Per-lane difference.
    fn sub(a: Self::Register, b: Self::Register) -> Self::Register;
    /// Per-lane product.
    fn mul(a: Self::Register, b: Self::Register) -> Self::Register;
    /// Per-lane quotient.
    fn div(a: Self::Register, b: Self::Register) -> Self::Register;
    /// Multiply every lane by a scalar.
    fn mul_scalar(reg: Self::Register, scalar: Self) -> Self::Register;
    /// Divide every lane by a scalar.
    fn div_scalar(reg: Self::Register, scalar: Self) -> Self::Register;

    /// Per-lane `a < b`, all-ones or all-zeros per lane.
    fn less_than(
        a: Self::Register,
        b: Self::Register,
    ) -> <Self::MaskScalar as UintLanes<N>>::Register;
    /// Per-lane `a > b`, all-ones or all-zeros per lane.
    fn greater_than(
        a: Self::Register,
        b: Self::Register,
    ) -> <Self::MaskScalar as UintLanes<N>>::Register;

    /// Per-lane approximate base-10 logarithm, see
    /// [`crate::math::fast_log10`].
    fn fast_log10(reg: Self::Register) -> Self::Register;
    /// Per-lane absolute value.
    fn abs(reg: Self::Register) -> Self::Register;
    /// Sum of squares of all lanes.
    fn squared_norm(reg: Self::Register) -> Self;
    /// Per-lane minimum.
    fn min(a: Self::Register, b: Self::Register) -> Self::Register;
    /// Per-lane maximum.
    fn max(a: Self::Register, b: Self::Register) -> Self::Register;
    /// Maximum across lanes.
    fn horizontal_max(reg: Self::Register) -> Self;
    /// Sum across lanes.
    fn horizontal_sum(reg: Self::Register) -> Self;
    /// Per-lane `a + b·c`; a fused multiply-add where the ISA has one.
    fn multiply_add(
        a: Self::Register,
        b: Self::Register,
        c: Self::Register,
    ) -> Self::Register;
    /// Bitwise select by a comparator mask.
    fn select(
        mask: <Self::MaskScalar as UintLanes<N>>::Register,
        source1: Self::Register,
        source2: Self::Register,
    ) -> Self::Register;
    /// Per-lane sign as ±1, keeping the sign of zero.
    fn sign(reg: Self::Register) -> Self::Register;
    /// Per-lane magnitude of `mag` with the sign of `sgn`.
    fn copysign(mag: Self::Register, sgn: Self::Register) -> Self::Register;
    /// Reverse the lane order.
    fn reverse(reg: Self::Register) -> Self::Register;
    /// Per-lane sine.
    fn sin(reg: Self::Register) -> Self::Register;
    /// Per-lane cosine.
    fn cos(reg: Self::Register) -> Self::Register;
    /// Per-lane sine and cosine in one pass.
    fn sin_cos(reg: Self::Register) -> (Self::Register, Self::Register);
    /// Per-lane base-e exponential.
    fn exp(reg: Self::Register) -> Self::Register;
}

/// Backend for an `N`-lane register of complex elements with real parts of
/// type `Self`.
///
/// Implemented on the real scalar type (`f32`, [`crate::Half`]) so mixed
/// complex-by-real operations can name both register families. The storage
/// layout is backend defined: interleaved or two parallel planes, only the
/// lane access behavior is observable.
pub trait ComplexLanes<const N: usize>: FloatLanes<N> {
    /// Raw complex storage.
    type CRegister: Copy;

    /// True when the storage is an ISA register.
    const C_IS_VECTORIZED: bool;
    /// Diagnostic backend name.
    const C_NAME: &'static str;

    /// Construct from lane values; `values[0]` is lane 0.
    fn c_load(values: &[Complex<Self>; N]) -> Self::CRegister;
    /// Construct with the same value in every lane.
    fn c_splat(value: Complex<Self>) -> Self::CRegister;
    /// Construct from separate real and imaginary registers.
    fn c_from_parts(re: Self::Register, im: Self::Register) -> Self::CRegister;
    /// Write all lanes out.
    fn c_store(reg: Self::CRegister, dst: &mut [Complex<Self>; N]);
    /// Write a single lane out. `index` must be below `N`.
    fn c_store_lane(reg: Self::CRegister, index: usize, dst: &mut Complex<Self>);
    /// Read a single lane. `index` must be below `N`.
    fn c_extract(reg: Self::CRegister, index: usize) -> Complex<Self>;
    /// Functional update of a single lane. `index` must be below `N`.
    fn c_set_lane(
        reg: Self::CRegister,
        index: usize,
        value: Complex<Self>,
    ) -> Self::CRegister;
    /// All real parts as a float register.
    fn c_extract_real(reg: Self::CRegister) -> Self::Register;
    /// All imaginary parts as a float register.
    fn c_extract_imag(reg: Self::CRegister) -> Self::Register;

    /// Per-lane negation.
    fn c_neg(reg: Self::CRegister) -> Self::CRegister;
    /// Per-lane sum.
    fn c_add(a: Self::CRegister, b: Self::CRegister) -> Self::CRegister;
    /// Per-lane difference.
    fn c_sub(a: Self::CRegister, b: Self::CRegister) -> Self::CRegister;
    /// Per-lane complex product.
    fn c_mul(a: Self::CRegister, b: Self::CRegister) -> Self::CRegister;
    /// Per-lane product with a real register.
    fn c_mul_real(a: Self::CRegister, b: Self::Register) -> Self::CRegister;
    /// Per-lane complex quotient in the stable form.
    fn c_div(a: Self::CRegister, b: Self::CRegister) -> Self::CRegister;

    /// Per-lane magnitude.
    fn c_abs(reg: Self::CRegister) -> Self::Register;
    /// Per-lane magnitude from reciprocal estimates; trades accuracy for
    /// speed.
    fn c_fast_abs(reg: Self::CRegister) -> Self::Register;
    /// Per-lane squared magnitude.
    fn c_norm(reg: Self::CRegister) -> Self::Register;
    /// Sum across lanes.
    fn c_horizontal_sum(reg: Self::CRegister) -> Complex<Self>;
    /// Per-lane `a + b·c` with a real `c`.
    fn c_multiply_add(
        a: Self::CRegister,
        b: Self::CRegister,
        c: Self::Register,
    ) -> Self::CRegister;
    /// Per-lane approximate phase angle.
    fn c_fast_arg(reg: Self::CRegister) -> Self::Register;
    /// Per-lane complex conjugate.
    fn c_conj(reg: Self::CRegister) -> Self::CRegister;
    /// Per-lane complex exponential of a real phase: `(cos x, sin x)`.
    fn c_exp_j(x: Self::Register) -> Self::CRegister;
    /// Per-lane base-e exponential of the complex value.
    fn c_exp(reg: Self::CRegister) -> Self::CRegister;
    /// Reverse the lane order.
    fn c_reverse(reg: Self::CRegister) -> Self::CRegister;
}

/// Low/high half access for a float register whose lane count is a power of
/// two of at least 4.
pub trait FloatSplit<const N: usize, const H: usize>:
    FloatLanes<N> + FloatLanes<H>
{
    /// Lanes `[0, H)`.
    fn extract_low(
        reg: <Self as FloatLanes<N>>::Register,
    ) -> <Self as FloatLanes<H>>::Register;
    /// Lanes `[H, N)`.
    fn extract_high(
        reg: <Self as FloatLanes<N>>::Register,
    ) -> <Self as FloatLanes<H>>::Register;
    /// Inverse of the extraction: build the wide register from halves.
    fn combine(
        low: <Self as FloatLanes<H>>::Register,
        high: <Self as FloatLanes<H>>::Register,
    ) -> <Self as FloatLanes<N>>::Register;
}

/// Low/high half access for an unsigned integer register.
pub trait UintSplit<const N: usize, const H: usize>:
    UintLanes<N> + UintLanes<H>
{
    /// Lanes `[0, H)`.
    fn extract_low(
        reg: <Self as UintLanes<N>>::Register,
    ) -> <Self as UintLanes<H>>::Register;
    /// Lanes `[H, N)`.
    fn extract_high(
        reg: <Self as UintLanes<N>>::Register,
    ) -> <Self as UintLanes<H>>::Register;
    /// Inverse of the extraction: build the wide register from halves.
    fn combine(
        low: <Self as UintLanes<H>>::Register,
        high: <Self as UintLanes<H>>::Register,
    ) -> <Self as UintLanes<N>>::Register;
}

/// Low/high half access for a complex register.
pub trait ComplexSplit<const N: usize, const H: usize>:
    ComplexLanes<N> + ComplexLanes<H>
{
    /// Lanes `[0, H)`.
    fn c_extract_low(
        reg: <Self as ComplexLanes<N>>::CRegister,
    ) -> <Self as ComplexLanes<H>>::CRegister;
    /// Lanes `[H, N)`.
    fn c_extract_high(
        reg: <Self as ComplexLanes<N>>::CRegister,
    ) -> <Self as ComplexLanes<H>>::CRegister;
    /// Inverse of the extraction: build the wide register from halves.
    fn c_combine(
        low: <Self as ComplexLanes<H>>::CRegister,
        high: <Self as ComplexLanes<H>>::CRegister,
    ) -> <Self as ComplexLanes<N>>::CRegister;
}

/// Per-lane approximate four-quadrant arc tangent, built from the backend's
/// own lane operations so every vectorized backend shares one octant
/// reduction. Matches [`crate::math::fast_atan2`] lane for lane.
#[cfg(any(
    all(target_arch = "aarch64", target_feature = "neon"),
    all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "sse2"
    )
))]
pub(crate) fn fast_atan2_lanes<T: FloatLanes<N>, const N: usize>(
    y: T::Register,
    x: T::Register,
) -> T::Register {
    let abs_y = <T as FloatLanes<N>>::abs(y);
    let abs_x = <T as FloatLanes<N>>::abs(x);

    let big = <T as FloatLanes<N>>::max(abs_x, abs_y);
    let small = <T as FloatLanes<N>>::min(abs_x, abs_y);
    let ratio = <T as FloatLanes<N>>::div(small, big);

    // Odd minimax polynomial for atan on [0, 1].
    let ratio2 = <T as FloatLanes<N>>::mul(ratio, ratio);
    let mut poly = T::splat(T::from_f32(5.265_332e-2));
    poly = T::multiply_add(T::splat(T::from_f32(-1.164_328_7e-1)), poly, ratio2);
    poly = T::multiply_add(T::splat(T::from_f32(1.935_434_6e-1)), poly, ratio2);
    poly = T::multiply_add(T::splat(T::from_f32(-3.326_234_7e-1)), poly, ratio2);
    poly = T::multiply_add(T::splat(T::from_f32(9.999_772_6e-1)), poly, ratio2);
    let mut angle = <T as FloatLanes<N>>::mul(poly, ratio);

    let zero = T::splat(T::zero());

    let swapped = T::greater_than(abs_y, abs_x);
    angle = <T as FloatLanes<N>>::select(
        swapped,
        <T as FloatLanes<N>>::sub(T::splat(T::from_f32(std::f32::consts::FRAC_PI_2)), angle),
        angle,
    );

    let negative_x = T::less_than(x, zero);
    angle = <T as FloatLanes<N>>::select(
        negative_x,
        <T as FloatLanes<N>>::sub(T::splat(T::from_f32(std::f32::consts::PI)), angle),
        angle,
    );

    // Both components zero: the ratio was 0/0, force the angle to 0.
    let nonzero = T::greater_than(big, zero);
    angle = <T as FloatLanes<N>>::select(nonzero, angle, zero);

    <T as FloatLanes<N>>::copysign(angle, y)
}

impl<T: FloatLanes<4> + FloatLanes<2>> FloatSplit<4, 2> for T {
    #[inline]
    fn extract_low(
        reg: <T as FloatLanes<4>>::Register,
    ) -> <T as FloatLanes<2>>::Register {
        <T as FloatLanes<2>>::load(&[
            <T as FloatLanes<4>>::extract(reg, 0),
            <T as FloatLanes<4>>::extract(reg, 1),
        ])
    }

    #[inline]
    fn extract_high(
        reg: <T as FloatLanes<4>>::Register,
    ) -> <T as FloatLanes<2>>::Register {
        <T as FloatLanes<2>>::load(&[
            <T as FloatLanes<4>>::extract(reg, 2),
            <T as FloatLanes<4>>::extract(reg, 3),
        ])
    }

    #[inline]
    fn combine(
        low: <T as FloatLanes<2>>::Register,
        high: <T as FloatLanes<2>>::Register,
    ) -> <T as FloatLanes<4>>::Register {
        <T as FloatLanes<4>>::load(&[
            <T as FloatLanes<2>>::extract(low, 0),
            <T as FloatLanes<2>>::extract(low, 1),
            <T as FloatLanes<2>>::extract(high, 0),
            <T as FloatLanes<2>>::extract(high, 1),
        ])
    }
}

impl<T: UintLanes<4> + UintLanes<2>> UintSplit<4, 2> for T {
    #[inline]
    fn extract_low(
        reg: <T as UintLanes<4>>::Register,
    ) -> <T as UintLanes<2>>::Register {
        <T as UintLanes<2>>::load(&[
            <T as UintLanes<4>>::extract(reg, 0),
            <T as UintLanes<4>>::extract(reg, 1),
        ])
    }

    #[inline]
    fn extract_high(
        reg: <T as UintLanes<4>>::Register,
    ) -> <T as UintLanes<2>>::Register {
        <T as UintLanes<2>>::load(&[
            <T as UintLanes<4>>::extract(reg, 2),
            <T as UintLanes<4>>::extract(reg, 3),
        ])
    }

    #[inline]
    fn combine(
        low: <T as UintLanes<2>>::Register,
        high: <T as UintLanes<2>>::Register,
    ) -> <T as UintLanes<4>>::Register {
        <T as UintLanes<4>>::load(&[
            <T as UintLanes<2>>::extract(low, 0),
            <T as UintLanes<2>>::extract(low, 1),
            <T as UintLanes<2>>::extract(high, 0),
            <T as UintLanes<2>>::extract(high, 1),
        ])
    }
}

impl<T: ComplexLanes<4> + ComplexLanes<2>> ComplexSplit<4, 2> for T {
    #[inline]
    fn c_extract_low(
        reg: <T as ComplexLanes<4>>::CRegister,
    ) -> <T as ComplexLanes<2>>::CRegister {
        <T as ComplexLanes<2>>::c_load(&[
            <T as ComplexLanes<4>>::c_extract(reg, 0),
            <T as ComplexLanes<4>>::c_extract(reg, 1),
        ])
    }

    #[inline]
    fn c_extract_high(
        reg: <T as ComplexLanes<4>>::CRegister,
    ) -> <T as ComplexLanes<2>>::CRegister {
        <T as ComplexLanes<2>>::c_load(&[
            <T as ComplexLanes<4>>::c_extract(reg, 2),
            <T as ComplexLanes<4>>::c_extract(reg, 3),
        ])
    }

    #[inline]
    fn c_combine(
        low: <T as ComplexLanes<2>>::CRegister,
        high: <T as ComplexLanes<2>>::CRegister,
    ) -> <T as ComplexLanes<4>>::CRegister {
        <T as ComplexLanes<4>>::c_load(&[
            <T as ComplexLanes<2>>::c_extract(low, 0),
            <T as ComplexLanes<2>>::c_extract(low, 1),
            <T as ComplexLanes<2>>::c_extract(high, 0),
            <T as ComplexLanes<2>>::c_extract(high, 1),
        ])
    }
}
