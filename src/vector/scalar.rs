//! Portable scalar backend.
//!
//! Implements every lane contract with an [`AlignedRegister`] of plain
//! elements and unrolled per-lane loops. This backend is compiled for the
//! lane counts no ISA covers (2 and 3 everywhere, 4 on targets without SIMD)
//! and for every half-precision register, which stable Rust cannot express
//! as native vectors.

use crate::complex::Complex;
use crate::math::Real;

use super::aligned::AlignedRegister;
use super::lanes::{ComplexLanes, FloatLanes, UintLanes, UintScalar};
use super::unroll::unroll;

macro_rules! scalar_uint_lanes {
    ($scalar:ty, $n:literal) => {
        impl UintLanes<$n> for $scalar {
            type Register = AlignedRegister<$scalar, $n>;

            const IS_VECTORIZED: bool = false;
            const NAME: &'static str = "Scalar";

            #[inline]
            fn load(values: &[$scalar; $n]) -> Self::Register {
                AlignedRegister::new(*values)
            }

            #[inline]
            fn splat(value: $scalar) -> Self::Register {
                AlignedRegister::splat(value)
            }

            #[inline]
            fn store(reg: Self::Register, dst: &mut [$scalar; $n]) {
                unroll::<$n>(|i| dst[i] = reg[i]);
            }

            #[inline]
            fn store_lane(reg: Self::Register, index: usize, dst: &mut $scalar) {
                *dst = reg[index];
            }

            #[inline]
            fn extract(reg: Self::Register, index: usize) -> $scalar {
                reg[index]
            }

            #[inline]
            fn set_lane(
                reg: Self::Register,
                index: usize,
                value: $scalar,
            ) -> Self::Register {
                let mut updated = reg;
                updated[index] = value;
                updated
            }

            #[inline]
            fn min(a: Self::Register, b: Self::Register) -> Self::Register {
                AlignedRegister::from_fn(|i| Ord::min(a[i], b[i]))
            }

            #[inline]
            fn max(a: Self::Register, b: Self::Register) -> Self::Register {
                AlignedRegister::from_fn(|i| Ord::max(a[i], b[i]))
            }

            #[inline]
            fn horizontal_max(reg: Self::Register) -> $scalar {
                let mut max = reg[0];
                unroll::<{ $n - 1 }>(|i| max = Ord::max(max, reg[i + 1]));
                max
            }

            #[inline]
            fn select(
                mask: Self::Register,
                source1: Self::Register,
                source2: Self::Register,
            ) -> Self::Register {
                AlignedRegister::from_fn(|i| {
                    (source1[i] & mask[i]) | (source2[i] & !mask[i])
                })
            }

            #[inline]
            fn reverse(reg: Self::Register) -> Self::Register {
                AlignedRegister::from_fn(|i| reg[$n - i - 1])
            }
        }
    };
}

scalar_uint_lanes!(u32, 2);
scalar_uint_lanes!(u32, 3);
scalar_uint_lanes!(u16, 2);
scalar_uint_lanes!(u16, 3);

#[cfg(not(any(
    all(target_arch = "aarch64", target_feature = "neon"),
    all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "sse2"
    )
)))]
scalar_uint_lanes!(u32, 4);

#[cfg(not(all(target_arch = "aarch64", target_feature = "neon")))]
scalar_uint_lanes!(u16, 4);

macro_rules! scalar_float_lanes {
    ($scalar:ty, $n:literal, $mask:ty) => {
        impl FloatLanes<$n> for $scalar {
            type Register = AlignedRegister<$scalar, $n>;
            type MaskScalar = $mask;

            const IS_VECTORIZED: bool = false;
            const NAME: &'static str = "Scalar";

            #[inline]
            fn load(values: &[$scalar; $n]) -> Self::Register {
                AlignedRegister::new(*values)
            }

            #[inline]
            fn splat(value: $scalar) -> Self::Register {
                AlignedRegister::splat(value)
            }

            #[inline]
            fn store(reg: Self::Register, dst: &mut [$scalar; $n]) {
                unroll::<$n>(|i| dst[i] = reg[i]);
            }

            #[inline]
            fn store_lane(reg: Self::Register, index: usize, dst: &mut $scalar) {
                *dst = reg[index];
            }

            #[inline]
            fn extract(reg: Self::Register, index: usize) -> $scalar {
                reg[index]
            }

            #[inline]
            fn set_lane(
                reg: Self::Register,
                index: usize,
                value: $scalar,
            ) -> Self::Register {
                let mut updated = reg;
                updated[index] = value;
                updated
            }

            #[inline]
            fn neg(reg: Self::Register) -> Self::Register {
                AlignedRegister::from_fn(|i| -reg[i])
            }

            #[inline]
            fn add(a: Self::Register, b: Self::Register) -> Self::Register {
                AlignedRegister::from_fn(|i| a[i] + b[i])
            }

            #[inline]
            fn sub(a: Self::Register, b: Self::Register) -> Self::Register {
                AlignedRegister::from_fn(|i| a[i] - b[i])
            }

            #[inline]
            fn mul(a: Self::Register, b: Self::Register) -> Self::Register {
                AlignedRegister::from_fn(|i| a[i] * b[i])
            }

            #[inline]
            fn div(a: Self::Register, b: Self::Register) -> Self::Register {
                AlignedRegister::from_fn(|i| a[i] / b[i])
            }

            #[inline]
            fn mul_scalar(reg: Self::Register, scalar: $scalar) -> Self::Register {
                AlignedRegister::from_fn(|i| reg[i] * scalar)
            }

            #[inline]
            fn div_scalar(reg: Self::Register, scalar: $scalar) -> Self::Register {
                AlignedRegister::from_fn(|i| reg[i] / scalar)
            }

            #[inline]
            fn less_than(
                a: Self::Register,
                b: Self::Register,
            ) -> <$mask as UintLanes<$n>>::Register {
                let mut lanes = [<$mask as UintScalar>::ZERO; $n];
                unroll::<$n>(|i| {
                    lanes[i] = if a[i] < b[i] {
                        <$mask as UintScalar>::ONES
                    } else {
                        <$mask as UintScalar>::ZERO
                    }
                });
                <$mask as UintLanes<$n>>::load(&lanes)
            }

            #[inline]
            fn greater_than(
                a: Self::Register,
                b: Self::Register,
            ) -> <$mask as UintLanes<$n>>::Register {
                let mut lanes = [<$mask as UintScalar>::ZERO; $n];
                unroll::<$n>(|i| {
                    lanes[i] = if a[i] > b[i] {
                        <$mask as UintScalar>::ONES
                    } else {
                        <$mask as UintScalar>::ZERO
                    }
                });
                <$mask as UintLanes<$n>>::load(&lanes)
            }

            #[inline]
            fn fast_log10(reg: Self::Register) -> Self::Register {
                AlignedRegister::from_fn(|i| Real::fast_log10(reg[i]))
            }

            #[inline]
            fn abs(reg: Self::Register) -> Self::Register {
                AlignedRegister::from_fn(|i| Real::abs(reg[i]))
            }

            #[inline]
            fn squared_norm(reg: Self::Register) -> $scalar {
                let mut sum = <$scalar as num_traits::Zero>::zero();
                unroll::<$n>(|i| sum += reg[i] * reg[i]);
                sum
            }

            #[inline]
            fn min(a: Self::Register, b: Self::Register) -> Self::Register {
                AlignedRegister::from_fn(|i| Real::min(a[i], b[i]))
            }

            #[inline]
            fn max(a: Self::Register, b: Self::Register) -> Self::Register {
                AlignedRegister::from_fn(|i| Real::max(a[i], b[i]))
            }

            #[inline]
            fn horizontal_max(reg: Self::Register) -> $scalar {
                let mut max = reg[0];
                unroll::<{ $n - 1 }>(|i| max = Real::max(max, reg[i + 1]));
                max
            }

            #[inline]
            fn horizontal_sum(reg: Self::Register) -> $scalar {
                let mut sum = <$scalar as num_traits::Zero>::zero();
                unroll::<$n>(|i| sum += reg[i]);
                sum
            }

            #[inline]
            fn multiply_add(
                a: Self::Register,
                b: Self::Register,
                c: Self::Register,
            ) -> Self::Register {
                AlignedRegister::from_fn(|i| a[i] + b[i] * c[i])
            }

            #[inline]
            fn select(
                mask: <$mask as UintLanes<$n>>::Register,
                source1: Self::Register,
                source2: Self::Register,
            ) -> Self::Register {
                AlignedRegister::from_fn(|i| {
                    Real::select(
                        <$mask as UintLanes<$n>>::extract(mask, i),
                        source1[i],
                        source2[i],
                    )
                })
            }

            #[inline]
            fn sign(reg: Self::Register) -> Self::Register {
                AlignedRegister::from_fn(|i| Real::sign(reg[i]))
            }

            #[inline]
            fn copysign(mag: Self::Register, sgn: Self::Register) -> Self::Register {
                AlignedRegister::from_fn(|i| Real::copysign(mag[i], sgn[i]))
            }

            #[inline]
            fn reverse(reg: Self::Register) -> Self::Register {
                AlignedRegister::from_fn(|i| reg[$n - i - 1])
            }

            #[inline]
            fn sin(reg: Self::Register) -> Self::Register {
                AlignedRegister::from_fn(|i| Real::sin(reg[i]))
            }

            #[inline]
            fn cos(reg: Self::Register) -> Self::Register {
                AlignedRegister::from_fn(|i| Real::cos(reg[i]))
            }

            #[inline]
            fn sin_cos(reg: Self::Register) -> (Self::Register, Self::Register) {
                (
                    AlignedRegister::from_fn(|i| Real::sin(reg[i])),
                    AlignedRegister::from_fn(|i| Real::cos(reg[i])),
                )
            }

            #[inline]
            fn exp(reg: Self::Register) -> Self::Register {
                AlignedRegister::from_fn(|i| Real::exp(reg[i]))
            }
        }
    };
}

scalar_float_lanes!(f32, 2, u32);
scalar_float_lanes!(f32, 3, u32);
scalar_float_lanes!(crate::Half, 2, u16);
scalar_float_lanes!(crate::Half, 3, u16);
scalar_float_lanes!(crate::Half, 4, u16);

#[cfg(not(any(
    all(target_arch = "aarch64", target_feature = "neon"),
    all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "sse2"
    )
)))]
scalar_float_lanes!(f32, 4, u32);

macro_rules! scalar_complex_lanes {
    ($scalar:ty, $n:literal) => {
        impl ComplexLanes<$n> for $scalar {
            type CRegister = AlignedRegister<Complex<$scalar>, $n>;

            const C_IS_VECTORIZED: bool = false;
            const C_NAME: &'static str = "Scalar";

            #[inline]
            fn c_load(values: &[Complex<$scalar>; $n]) -> Self::CRegister {
                AlignedRegister::new(*values)
            }

            #[inline]
            fn c_splat(value: Complex<$scalar>) -> Self::CRegister {
                AlignedRegister::splat(value)
            }

            #[inline]
            fn c_from_parts(
                re: <$scalar as FloatLanes<$n>>::Register,
                im: <$scalar as FloatLanes<$n>>::Register,
            ) -> Self::CRegister {
                AlignedRegister::from_fn(|i| {
                    Complex::new(
                        <$scalar as FloatLanes<$n>>::extract(re, i),
                        <$scalar as FloatLanes<$n>>::extract(im, i),
                    )
                })
            }

            #[inline]
            fn c_store(reg: Self::CRegister, dst: &mut [Complex<$scalar>; $n]) {
                unroll::<$n>(|i| dst[i] = reg[i]);
            }

            #[inline]
            fn c_store_lane(
                reg: Self::CRegister,
                index: usize,
                dst: &mut Complex<$scalar>,
            ) {
                *dst = reg[index];
            }

            #[inline]
            fn c_extract(reg: Self::CRegister, index: usize) -> Complex<$scalar> {
                reg[index]
            }

            #[inline]
            fn c_set_lane(
                reg: Self::CRegister,
                index: usize,
                value: Complex<$scalar>,
            ) -> Self::CRegister {
                let mut updated = reg;
                updated[index] = value;
                updated
            }

            #[inline]
            fn c_extract_real(
                reg: Self::CRegister,
            ) -> <$scalar as FloatLanes<$n>>::Register {
                let mut lanes = [<$scalar as num_traits::Zero>::zero(); $n];
                unroll::<$n>(|i| lanes[i] = reg[i].re);
                <$scalar as FloatLanes<$n>>::load(&lanes)
            }

            #[inline]
            fn c_extract_imag(
                reg: Self::CRegister,
            ) -> <$scalar as FloatLanes<$n>>::Register {
                let mut lanes = [<$scalar as num_traits::Zero>::zero(); $n];
                unroll::<$n>(|i| lanes[i] = reg[i].im);
                <$scalar as FloatLanes<$n>>::load(&lanes)
            }

            #[inline]
            fn c_neg(reg: Self::CRegister) -> Self::CRegister {
                AlignedRegister::from_fn(|i| -reg[i])
            }

            #[inline]
            fn c_add(a: Self::CRegister, b: Self::CRegister) -> Self::CRegister {
                AlignedRegister::from_fn(|i| a[i] + b[i])
            }

            #[inline]
            fn c_sub(a: Self::CRegister, b: Self::CRegister) -> Self::CRegister {
                AlignedRegister::from_fn(|i| a[i] - b[i])
            }

            #[inline]
            fn c_mul(a: Self::CRegister, b: Self::CRegister) -> Self::CRegister {
                AlignedRegister::from_fn(|i| a[i] * b[i])
            }

            #[inline]
            fn c_mul_real(
                a: Self::CRegister,
                b: <$scalar as FloatLanes<$n>>::Register,
            ) -> Self::CRegister {
                AlignedRegister::from_fn(|i| {
                    a[i] * <$scalar as FloatLanes<$n>>::extract(b, i)
                })
            }

            #[inline]
            fn c_div(a: Self::CRegister, b: Self::CRegister) -> Self::CRegister {
                AlignedRegister::from_fn(|i| a[i] / b[i])
            }

            #[inline]
            fn c_abs(reg: Self::CRegister) -> <$scalar as FloatLanes<$n>>::Register {
                let mut lanes = [<$scalar as num_traits::Zero>::zero(); $n];
                unroll::<$n>(|i| lanes[i] = reg[i].abs());
                <$scalar as FloatLanes<$n>>::load(&lanes)
            }

            #[inline]
            fn c_fast_abs(
                reg: Self::CRegister,
            ) -> <$scalar as FloatLanes<$n>>::Register {
                <$scalar as ComplexLanes<$n>>::c_abs(reg)
            }

            #[inline]
            fn c_norm(reg: Self::CRegister) -> <$scalar as FloatLanes<$n>>::Register {
                let mut lanes = [<$scalar as num_traits::Zero>::zero(); $n];
                unroll::<$n>(|i| lanes[i] = reg[i].norm());
                <$scalar as FloatLanes<$n>>::load(&lanes)
            }

            #[inline]
            fn c_horizontal_sum(reg: Self::CRegister) -> Complex<$scalar> {
                let mut sum = <Complex<$scalar> as num_traits::Zero>::zero();
                unroll::<$n>(|i| sum += reg[i]);
                sum
            }

            #[inline]
            fn c_multiply_add(
                a: Self::CRegister,
                b: Self::CRegister,
                c: <$scalar as FloatLanes<$n>>::Register,
            ) -> Self::CRegister {
                AlignedRegister::from_fn(|i| {
                    a[i] + b[i] * <$scalar as FloatLanes<$n>>::extract(c, i)
                })
            }

            #[inline]
            fn c_fast_arg(
                reg: Self::CRegister,
            ) -> <$scalar as FloatLanes<$n>>::Register {
                let mut lanes = [<$scalar as num_traits::Zero>::zero(); $n];
                unroll::<$n>(|i| lanes[i] = reg[i].fast_arg());
                <$scalar as FloatLanes<$n>>::load(&lanes)
            }

            #[inline]
            fn c_conj(reg: Self::CRegister) -> Self::CRegister {
                AlignedRegister::from_fn(|i| reg[i].conj())
            }

            #[inline]
            fn c_exp_j(
                x: <$scalar as FloatLanes<$n>>::Register,
            ) -> Self::CRegister {
                AlignedRegister::from_fn(|i| {
                    Complex::exp_j(<$scalar as FloatLanes<$n>>::extract(x, i))
                })
            }

            #[inline]
            fn c_exp(reg: Self::CRegister) -> Self::CRegister {
                AlignedRegister::from_fn(|i| reg[i].exp())
            }

            #[inline]
            fn c_reverse(reg: Self::CRegister) -> Self::CRegister {
                AlignedRegister::from_fn(|i| reg[$n - i - 1])
            }
        }
    };
}

scalar_complex_lanes!(f32, 2);
scalar_complex_lanes!(f32, 3);
scalar_complex_lanes!(crate::Half, 2);
scalar_complex_lanes!(crate::Half, 3);
scalar_complex_lanes!(crate::Half, 4);

#[cfg(not(any(
    all(target_arch = "aarch64", target_feature = "neon"),
    all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "sse2"
    )
)))]
scalar_complex_lanes!(f32, 4);
