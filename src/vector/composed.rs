//! 8-lane registers composed from two 4-lane halves.
//!
//! The composition keeps the 4-lane SIMD of the halves where it exists, so
//! an 8-lane operation still runs vectorized arithmetic even though the
//! 8-lane storage itself is not one machine register. `IS_VECTORIZED` stays
//! false: algorithms that want a genuine wide register (for its memory
//! access pattern) must not mistake the composition for one.

use crate::complex::Complex;

use super::lanes::{
    ComplexLanes, ComplexSplit, FloatLanes, FloatSplit, UintLanes, UintSplit,
};

/// Two half-width registers forming one wide register.
#[derive(Clone, Copy)]
#[repr(C, align(32))]
pub struct Pair<R> {
    pub(crate) lo: R,
    pub(crate) hi: R,
}

macro_rules! composed_uint_lanes {
    ($scalar:ty, $name:literal) => {
        impl UintLanes<8> for $scalar {
            type Register = Pair<<$scalar as UintLanes<4>>::Register>;

            const IS_VECTORIZED: bool = false;
            const NAME: &'static str = $name;

            #[inline]
            fn load(values: &[$scalar; 8]) -> Self::Register {
                Pair {
                    lo: <$scalar as UintLanes<4>>::load(
                        values[..4].try_into().unwrap(),
                    ),
                    hi: <$scalar as UintLanes<4>>::load(
                        values[4..].try_into().unwrap(),
                    ),
                }
            }

            #[inline]
            fn splat(value: $scalar) -> Self::Register {
                Pair {
                    lo: <$scalar as UintLanes<4>>::splat(value),
                    hi: <$scalar as UintLanes<4>>::splat(value),
                }
            }

            #[inline]
            fn store(reg: Self::Register, dst: &mut [$scalar; 8]) {
                let (lo, hi) = dst.split_at_mut(4);
                <$scalar as UintLanes<4>>::store(reg.lo, lo.try_into().unwrap());
                <$scalar as UintLanes<4>>::store(reg.hi, hi.try_into().unwrap());
            }

            #[inline]
            fn store_lane(reg: Self::Register, index: usize, dst: &mut $scalar) {
                assert!(index < 8);
                if index < 4 {
                    <$scalar as UintLanes<4>>::store_lane(reg.lo, index, dst);
                } else {
                    <$scalar as UintLanes<4>>::store_lane(reg.hi, index - 4, dst);
                }
            }

            #[inline]
            fn extract(reg: Self::Register, index: usize) -> $scalar {
                assert!(index < 8);
                if index < 4 {
                    <$scalar as UintLanes<4>>::extract(reg.lo, index)
                } else {
                    <$scalar as UintLanes<4>>::extract(reg.hi, index - 4)
                }
            }

            #[inline]
            fn set_lane(
                reg: Self::Register,
                index: usize,
                value: $scalar,
            ) -> Self::Register {
                assert!(index < 8);
                if index < 4 {
                    Pair {
                        lo: <$scalar as UintLanes<4>>::set_lane(reg.lo, index, value),
                        hi: reg.hi,
                    }
                } else {
                    Pair {
                        lo: reg.lo,
                        hi: <$scalar as UintLanes<4>>::set_lane(
                            reg.hi,
                            index - 4,
                            value,
                        ),
                    }
                }
            }

            #[inline]
            fn min(a: Self::Register, b: Self::Register) -> Self::Register {
                Pair {
                    lo: <$scalar as UintLanes<4>>::min(a.lo, b.lo),
                    hi: <$scalar as UintLanes<4>>::min(a.hi, b.hi),
                }
            }

            #[inline]
            fn max(a: Self::Register, b: Self::Register) -> Self::Register {
                Pair {
                    lo: <$scalar as UintLanes<4>>::max(a.lo, b.lo),
                    hi: <$scalar as UintLanes<4>>::max(a.hi, b.hi),
                }
            }

            #[inline]
            fn horizontal_max(reg: Self::Register) -> $scalar {
                Ord::max(
                    <$scalar as UintLanes<4>>::horizontal_max(reg.lo),
                    <$scalar as UintLanes<4>>::horizontal_max(reg.hi),
                )
            }

            #[inline]
            fn select(
                mask: Self::Register,
                source1: Self::Register,
                source2: Self::Register,
            ) -> Self::Register {
                Pair {
                    lo: <$scalar as UintLanes<4>>::select(
                        mask.lo, source1.lo, source2.lo,
                    ),
                    hi: <$scalar as UintLanes<4>>::select(
                        mask.hi, source1.hi, source2.hi,
                    ),
                }
            }

            #[inline]
            fn reverse(reg: Self::Register) -> Self::Register {
                Pair {
                    lo: <$scalar as UintLanes<4>>::reverse(reg.hi),
                    hi: <$scalar as UintLanes<4>>::reverse(reg.lo),
                }
            }
        }

        impl UintSplit<8, 4> for $scalar {
            #[inline]
            fn extract_low(
                reg: <$scalar as UintLanes<8>>::Register,
            ) -> <$scalar as UintLanes<4>>::Register {
                reg.lo
            }

            #[inline]
            fn extract_high(
                reg: <$scalar as UintLanes<8>>::Register,
            ) -> <$scalar as UintLanes<4>>::Register {
                reg.hi
            }

            #[inline]
            fn combine(
                low: <$scalar as UintLanes<4>>::Register,
                high: <$scalar as UintLanes<4>>::Register,
            ) -> <$scalar as UintLanes<8>>::Register {
                Pair { lo: low, hi: high }
            }
        }
    };
}

composed_uint_lanes!(u32, "Uint4x2");

#[cfg(not(all(target_arch = "aarch64", target_feature = "neon")))]
composed_uint_lanes!(u16, "Ushort4x2");

macro_rules! composed_float_lanes {
    ($scalar:ty, $mask:ty, $name:literal) => {
        impl FloatLanes<8> for $scalar {
            type Register = Pair<<$scalar as FloatLanes<4>>::Register>;
            type MaskScalar = $mask;

            const IS_VECTORIZED: bool = false;
            const NAME: &'static str = $name;

            #[inline]
            fn load(values: &[$scalar; 8]) -> Self::Register {
                Pair {
                    lo: <$scalar as FloatLanes<4>>::load(
                        values[..4].try_into().unwrap(),
                    ),
                    hi: <$scalar as FloatLanes<4>>::load(
                        values[4..].try_into().unwrap(),
                    ),
                }
            }

            #[inline]
            fn splat(value: $scalar) -> Self::Register {
                Pair {
                    lo: <$scalar as FloatLanes<4>>::splat(value),
                    hi: <$scalar as FloatLanes<4>>::splat(value),
                }
            }

            #[inline]
            fn store(reg: Self::Register, dst: &mut [$scalar; 8]) {
                let (lo, hi) = dst.split_at_mut(4);
                <$scalar as FloatLanes<4>>::store(reg.lo, lo.try_into().unwrap());
                <$scalar as FloatLanes<4>>::store(reg.hi, hi.try_into().unwrap());
            }

            #[inline]
            fn store_lane(reg: Self::Register, index: usize, dst: &mut $scalar) {
                assert!(index < 8);
                if index < 4 {
                    <$scalar as FloatLanes<4>>::store_lane(reg.lo, index, dst);
                } else {
                    <$scalar as FloatLanes<4>>::store_lane(reg.hi, index - 4, dst);
                }
            }

            #[inline]
            fn extract(reg: Self::Register, index: usize) -> $scalar {
                assert!(index < 8);
                if index < 4 {
                    <$scalar as FloatLanes<4>>::extract(reg.lo, index)
                } else {
                    <$scalar as FloatLanes<4>>::extract(reg.hi, index - 4)
                }
            }

            #[inline]
            fn set_lane(
                reg: Self::Register,
                index: usize,
                value: $scalar,
            ) -> Self::Register {
                assert!(index < 8);
                if index < 4 {
                    Pair {
                        lo: <$scalar as FloatLanes<4>>::set_lane(reg.lo, index, value),
                        hi: reg.hi,
                    }
                } else {
                    Pair {
                        lo: reg.lo,
                        hi: <$scalar as FloatLanes<4>>::set_lane(
                            reg.hi,
                            index - 4,
                            value,
                        ),
                    }
                }
            }

            #[inline]
            fn neg(reg: Self::Register) -> Self::Register {
                Pair {
                    lo: <$scalar as FloatLanes<4>>::neg(reg.lo),
                    hi: <$scalar as FloatLanes<4>>::neg(reg.hi),
                }
            }

            #[inline]
            fn add(a: Self::Register, b: Self::Register) -> Self::Register {
                Pair {
                    lo: <$scalar as FloatLanes<4>>::add(a.lo, b.lo),
                    hi: <$scalar as FloatLanes<4>>::add(a.hi, b.hi),
                }
            }

            #[inline]
            fn sub(a: Self::Register, b: Self::Register) -> Self::Register {
                Pair {
                    lo: <$scalar as FloatLanes<4>>::sub(a.lo, b.lo),
                    hi: <$scalar as FloatLanes<4>>::sub(a.hi, b.hi),
                }
            }

            #[inline]
            fn mul(a: Self::Register, b: Self::Register) -> Self::Register {
                Pair {
                    lo: <$scalar as FloatLanes<4>>::mul(a.lo, b.lo),
                    hi: <$scalar as FloatLanes<4>>::mul(a.hi, b.hi),
                }
            }

            #[inline]
            fn div(a: Self::Register, b: Self::Register) -> Self::Register {
                Pair {
                    lo: <$scalar as FloatLanes<4>>::div(a.lo, b.lo),
                    hi: <$scalar as FloatLanes<4>>::div(a.hi, b.hi),
                }
            }

            #[inline]
            fn mul_scalar(reg: Self::Register, scalar: $scalar) -> Self::Register {
                Pair {
                    lo: <$scalar as FloatLanes<4>>::mul_scalar(reg.lo, scalar),
                    hi: <$scalar as FloatLanes<4>>::mul_scalar(reg.hi, scalar),
                }
            }

            #[inline]
            fn div_scalar(reg: Self::Register, scalar: $scalar) -> Self::Register {
                Pair {
                    lo: <$scalar as FloatLanes<4>>::div_scalar(reg.lo, scalar),
                    hi: <$scalar as FloatLanes<4>>::div_scalar(reg.hi, scalar),
                }
            }

            #[inline]
            fn less_than(
                a: Self::Register,
                b: Self::Register,
            ) -> <$mask as UintLanes<8>>::Register {
                <$mask as UintSplit<8, 4>>::combine(
                    <$scalar as FloatLanes<4>>::less_than(a.lo, b.lo),
                    <$scalar as FloatLanes<4>>::less_than(a.hi, b.hi),
                )
            }

            #[inline]
            fn greater_than(
                a: Self::Register,
                b: Self::Register,
            ) -> <$mask as UintLanes<8>>::Register {
                <$mask as UintSplit<8, 4>>::combine(
                    <$scalar as FloatLanes<4>>::greater_than(a.lo, b.lo),
                    <$scalar as FloatLanes<4>>::greater_than(a.hi, b.hi),
                )
            }

            #[inline]
            fn fast_log10(reg: Self::Register) -> Self::Register {
                Pair {
                    lo: <$scalar as FloatLanes<4>>::fast_log10(reg.lo),
                    hi: <$scalar as FloatLanes<4>>::fast_log10(reg.hi),
                }
            }

            #[inline]
            fn abs(reg: Self::Register) -> Self::Register {
                Pair {
                    lo: <$scalar as FloatLanes<4>>::abs(reg.lo),
                    hi: <$scalar as FloatLanes<4>>::abs(reg.hi),
                }
            }

            #[inline]
            fn squared_norm(reg: Self::Register) -> $scalar {
                <$scalar as FloatLanes<4>>::squared_norm(reg.lo)
                    + <$scalar as FloatLanes<4>>::squared_norm(reg.hi)
            }

            #[inline]
            fn min(a: Self::Register, b: Self::Register) -> Self::Register {
                Pair {
                    lo: <$scalar as FloatLanes<4>>::min(a.lo, b.lo),
                    hi: <$scalar as FloatLanes<4>>::min(a.hi, b.hi),
                }
            }

            #[inline]
            fn max(a: Self::Register, b: Self::Register) -> Self::Register {
                Pair {
                    lo: <$scalar as FloatLanes<4>>::max(a.lo, b.lo),
                    hi: <$scalar as FloatLanes<4>>::max(a.hi, b.hi),
                }
            }

            #[inline]
            fn horizontal_max(reg: Self::Register) -> $scalar {
                crate::math::Real::max(
                    <$scalar as FloatLanes<4>>::horizontal_max(reg.lo),
                    <$scalar as FloatLanes<4>>::horizontal_max(reg.hi),
                )
            }

            #[inline]
            fn horizontal_sum(reg: Self::Register) -> $scalar {
                <$scalar as FloatLanes<4>>::horizontal_sum(reg.lo)
                    + <$scalar as FloatLanes<4>>::horizontal_sum(reg.hi)
            }

            #[inline]
            fn multiply_add(
                a: Self::Register,
                b: Self::Register,
                c: Self::Register,
            ) -> Self::Register {
                Pair {
                    lo: <$scalar as FloatLanes<4>>::multiply_add(a.lo, b.lo, c.lo),
                    hi: <$scalar as FloatLanes<4>>::multiply_add(a.hi, b.hi, c.hi),
                }
            }

            #[inline]
            fn select(
                mask: <$mask as UintLanes<8>>::Register,
                source1: Self::Register,
                source2: Self::Register,
            ) -> Self::Register {
                Pair {
                    lo: <$scalar as FloatLanes<4>>::select(
                        <$mask as UintSplit<8, 4>>::extract_low(mask),
                        source1.lo,
                        source2.lo,
                    ),
                    hi: <$scalar as FloatLanes<4>>::select(
                        <$mask as UintSplit<8, 4>>::extract_high(mask),
                        source1.hi,
                        source2.hi,
                    ),
                }
            }

            #[inline]
            fn sign(reg: Self::Register) -> Self::Register {
                Pair {
                    lo: <$scalar as FloatLanes<4>>::sign(reg.lo),
                    hi: <$scalar as FloatLanes<4>>::sign(reg.hi),
                }
            }

            #[inline]
            fn copysign(mag: Self::Register, sgn: Self::Register) -> Self::Register {
                Pair {
                    lo: <$scalar as FloatLanes<4>>::copysign(mag.lo, sgn.lo),
                    hi: <$scalar as FloatLanes<4>>::copysign(mag.hi, sgn.hi),
                }
            }

            #[inline]
            fn reverse(reg: Self::Register) -> Self::Register {
                Pair {
                    lo: <$scalar as FloatLanes<4>>::reverse(reg.hi),
                    hi: <$scalar as FloatLanes<4>>::reverse(reg.lo),
                }
            }

            #[inline]
            fn sin(reg: Self::Register) -> Self::Register {
                Pair {
                    lo: <$scalar as FloatLanes<4>>::sin(reg.lo),
                    hi: <$scalar as FloatLanes<4>>::sin(reg.hi),
                }
            }

            #[inline]
            fn cos(reg: Self::Register) -> Self::Register {
                Pair {
                    lo: <$scalar as FloatLanes<4>>::cos(reg.lo),
                    hi: <$scalar as FloatLanes<4>>::cos(reg.hi),
                }
            }

            #[inline]
            fn sin_cos(reg: Self::Register) -> (Self::Register, Self::Register) {
                let (sin_lo, cos_lo) = <$scalar as FloatLanes<4>>::sin_cos(reg.lo);
                let (sin_hi, cos_hi) = <$scalar as FloatLanes<4>>::sin_cos(reg.hi);
                (
                    Pair {
                        lo: sin_lo,
                        hi: sin_hi,
                    },
                    Pair {
                        lo: cos_lo,
                        hi: cos_hi,
                    },
                )
            }

            #[inline]
            fn exp(reg: Self::Register) -> Self::Register {
                Pair {
                    lo: <$scalar as FloatLanes<4>>::exp(reg.lo),
                    hi: <$scalar as FloatLanes<4>>::exp(reg.hi),
                }
            }
        }

        impl FloatSplit<8, 4> for $scalar {
            #[inline]
            fn extract_low(
                reg: <$scalar as FloatLanes<8>>::Register,
            ) -> <$scalar as FloatLanes<4>>::Register {
                reg.lo
            }

            #[inline]
            fn extract_high(
                reg: <$scalar as FloatLanes<8>>::Register,
            ) -> <$scalar as FloatLanes<4>>::Register {
                reg.hi
            }

            #[inline]
            fn combine(
                low: <$scalar as FloatLanes<4>>::Register,
                high: <$scalar as FloatLanes<4>>::Register,
            ) -> <$scalar as FloatLanes<8>>::Register {
                Pair { lo: low, hi: high }
            }
        }
    };
}

composed_float_lanes!(f32, u32, "Float4x2");
composed_float_lanes!(crate::Half, u16, "Half4x2");

macro_rules! composed_complex_lanes {
    ($scalar:ty, $name:literal) => {
        impl ComplexLanes<8> for $scalar {
            type CRegister = Pair<<$scalar as ComplexLanes<4>>::CRegister>;

            const C_IS_VECTORIZED: bool = false;
            const C_NAME: &'static str = $name;

            #[inline]
            fn c_load(values: &[Complex<$scalar>; 8]) -> Self::CRegister {
                Pair {
                    lo: <$scalar as ComplexLanes<4>>::c_load(
                        values[..4].try_into().unwrap(),
                    ),
                    hi: <$scalar as ComplexLanes<4>>::c_load(
                        values[4..].try_into().unwrap(),
                    ),
                }
            }

            #[inline]
            fn c_splat(value: Complex<$scalar>) -> Self::CRegister {
                Pair {
                    lo: <$scalar as ComplexLanes<4>>::c_splat(value),
                    hi: <$scalar as ComplexLanes<4>>::c_splat(value),
                }
            }

            #[inline]
            fn c_from_parts(
                re: <$scalar as FloatLanes<8>>::Register,
                im: <$scalar as FloatLanes<8>>::Register,
            ) -> Self::CRegister {
                Pair {
                    lo: <$scalar as ComplexLanes<4>>::c_from_parts(re.lo, im.lo),
                    hi: <$scalar as ComplexLanes<4>>::c_from_parts(re.hi, im.hi),
                }
            }

            #[inline]
            fn c_store(reg: Self::CRegister, dst: &mut [Complex<$scalar>; 8]) {
                let (lo, hi) = dst.split_at_mut(4);
                <$scalar as ComplexLanes<4>>::c_store(reg.lo, lo.try_into().unwrap());
                <$scalar as ComplexLanes<4>>::c_store(reg.hi, hi.try_into().unwrap());
            }

            #[inline]
            fn c_store_lane(
                reg: Self::CRegister,
                index: usize,
                dst: &mut Complex<$scalar>,
            ) {
                assert!(index < 8);
                if index < 4 {
                    <$scalar as ComplexLanes<4>>::c_store_lane(reg.lo, index, dst);
                } else {
                    <$scalar as ComplexLanes<4>>::c_store_lane(reg.hi, index - 4, dst);
                }
            }

            #[inline]
            fn c_extract(reg: Self::CRegister, index: usize) -> Complex<$scalar> {
                assert!(index < 8);
                if index < 4 {
                    <$scalar as ComplexLanes<4>>::c_extract(reg.lo, index)
                } else {
                    <$scalar as ComplexLanes<4>>::c_extract(reg.hi, index - 4)
                }
            }

            #[inline]
            fn c_set_lane(
                reg: Self::CRegister,
                index: usize,
                value: Complex<$scalar>,
            ) -> Self::CRegister {
                assert!(index < 8);
                if index < 4 {
                    Pair {
                        lo: <$scalar as ComplexLanes<4>>::c_set_lane(
                            reg.lo, index, value,
                        ),
                        hi: reg.hi,
                    }
                } else {
                    Pair {
                        lo: reg.lo,
                        hi: <$scalar as ComplexLanes<4>>::c_set_lane(
                            reg.hi,
                            index - 4,
                            value,
                        ),
                    }
                }
            }

            #[inline]
            fn c_extract_real(
                reg: Self::CRegister,
            ) -> <$scalar as FloatLanes<8>>::Register {
                <$scalar as FloatSplit<8, 4>>::combine(
                    <$scalar as ComplexLanes<4>>::c_extract_real(reg.lo),
                    <$scalar as ComplexLanes<4>>::c_extract_real(reg.hi),
                )
            }

            #[inline]
            fn c_extract_imag(
                reg: Self::CRegister,
            ) -> <$scalar as FloatLanes<8>>::Register {
                <$scalar as FloatSplit<8, 4>>::combine(
                    <$scalar as ComplexLanes<4>>::c_extract_imag(reg.lo),
                    <$scalar as ComplexLanes<4>>::c_extract_imag(reg.hi),
                )
            }

            #[inline]
            fn c_neg(reg: Self::CRegister) -> Self::CRegister {
                Pair {
                    lo: <$scalar as ComplexLanes<4>>::c_neg(reg.lo),
                    hi: <$scalar as ComplexLanes<4>>::c_neg(reg.hi),
                }
            }

            #[inline]
            fn c_add(a: Self::CRegister, b: Self::CRegister) -> Self::CRegister {
                Pair {
                    lo: <$scalar as ComplexLanes<4>>::c_add(a.lo, b.lo),
                    hi: <$scalar as ComplexLanes<4>>::c_add(a.hi, b.hi),
                }
            }

            #[inline]
            fn c_sub(a: Self::CRegister, b: Self::CRegister) -> Self::CRegister {
                Pair {
                    lo: <$scalar as ComplexLanes<4>>::c_sub(a.lo, b.lo),
                    hi: <$scalar as ComplexLanes<4>>::c_sub(a.hi, b.hi),
                }
            }

            #[inline]
            fn c_mul(a: Self::CRegister, b: Self::CRegister) -> Self::CRegister {
                Pair {
                    lo: <$scalar as ComplexLanes<4>>::c_mul(a.lo, b.lo),
                    hi: <$scalar as ComplexLanes<4>>::c_mul(a.hi, b.hi),
                }
            }

            #[inline]
            fn c_mul_real(
                a: Self::CRegister,
                b: <$scalar as FloatLanes<8>>::Register,
            ) -> Self::CRegister {
                Pair {
                    lo: <$scalar as ComplexLanes<4>>::c_mul_real(
                        a.lo,
                        <$scalar as FloatSplit<8, 4>>::extract_low(b),
                    ),
                    hi: <$scalar as ComplexLanes<4>>::c_mul_real(
                        a.hi,
                        <$scalar as FloatSplit<8, 4>>::extract_high(b),
                    ),
                }
            }

            #[inline]
            fn c_div(a: Self::CRegister, b: Self::CRegister) -> Self::CRegister {
                Pair {
                    lo: <$scalar as ComplexLanes<4>>::c_div(a.lo, b.lo),
                    hi: <$scalar as ComplexLanes<4>>::c_div(a.hi, b.hi),
                }
            }

            #[inline]
            fn c_abs(reg: Self::CRegister) -> <$scalar as FloatLanes<8>>::Register {
                <$scalar as FloatSplit<8, 4>>::combine(
                    <$scalar as ComplexLanes<4>>::c_abs(reg.lo),
                    <$scalar as ComplexLanes<4>>::c_abs(reg.hi),
                )
            }

            #[inline]
            fn c_fast_abs(
                reg: Self::CRegister,
            ) -> <$scalar as FloatLanes<8>>::Register {
                <$scalar as FloatSplit<8, 4>>::combine(
                    <$scalar as ComplexLanes<4>>::c_fast_abs(reg.lo),
                    <$scalar as ComplexLanes<4>>::c_fast_abs(reg.hi),
                )
            }

            #[inline]
            fn c_norm(reg: Self::CRegister) -> <$scalar as FloatLanes<8>>::Register {
                <$scalar as FloatSplit<8, 4>>::combine(
                    <$scalar as ComplexLanes<4>>::c_norm(reg.lo),
                    <$scalar as ComplexLanes<4>>::c_norm(reg.hi),
                )
            }

            #[inline]
            fn c_horizontal_sum(reg: Self::CRegister) -> Complex<$scalar> {
                <$scalar as ComplexLanes<4>>::c_horizontal_sum(reg.lo)
                    + <$scalar as ComplexLanes<4>>::c_horizontal_sum(reg.hi)
            }

            #[inline]
            fn c_multiply_add(
                a: Self::CRegister,
                b: Self::CRegister,
                c: <$scalar as FloatLanes<8>>::Register,
            ) -> Self::CRegister {
                Pair {
                    lo: <$scalar as ComplexLanes<4>>::c_multiply_add(
                        a.lo,
                        b.lo,
                        <$scalar as FloatSplit<8, 4>>::extract_low(c),
                    ),
                    hi: <$scalar as ComplexLanes<4>>::c_multiply_add(
                        a.hi,
                        b.hi,
                        <$scalar as FloatSplit<8, 4>>::extract_high(c),
                    ),
                }
            }

            #[inline]
            fn c_fast_arg(
                reg: Self::CRegister,
            ) -> <$scalar as FloatLanes<8>>::Register {
                <$scalar as FloatSplit<8, 4>>::combine(
                    <$scalar as ComplexLanes<4>>::c_fast_arg(reg.lo),
                    <$scalar as ComplexLanes<4>>::c_fast_arg(reg.hi),
                )
            }

            #[inline]
            fn c_conj(reg: Self::CRegister) -> Self::CRegister {
                Pair {
                    lo: <$scalar as ComplexLanes<4>>::c_conj(reg.lo),
                    hi: <$scalar as ComplexLanes<4>>::c_conj(reg.hi),
                }
            }

            #[inline]
            fn c_exp_j(
                x: <$scalar as FloatLanes<8>>::Register,
            ) -> Self::CRegister {
                Pair {
                    lo: <$scalar as ComplexLanes<4>>::c_exp_j(
                        <$scalar as FloatSplit<8, 4>>::extract_low(x),
                    ),
                    hi: <$scalar as ComplexLanes<4>>::c_exp_j(
                        <$scalar as FloatSplit<8, 4>>::extract_high(x),
                    ),
                }
            }

            #[inline]
            fn c_exp(reg: Self::CRegister) -> Self::CRegister {
                Pair {
                    lo: <$scalar as ComplexLanes<4>>::c_exp(reg.lo),
                    hi: <$scalar as ComplexLanes<4>>::c_exp(reg.hi),
                }
            }

            #[inline]
            fn c_reverse(reg: Self::CRegister) -> Self::CRegister {
                Pair {
                    lo: <$scalar as ComplexLanes<4>>::c_reverse(reg.hi),
                    hi: <$scalar as ComplexLanes<4>>::c_reverse(reg.lo),
                }
            }
        }

        impl ComplexSplit<8, 4> for $scalar {
            #[inline]
            fn c_extract_low(
                reg: <$scalar as ComplexLanes<8>>::CRegister,
            ) -> <$scalar as ComplexLanes<4>>::CRegister {
                reg.lo
            }

            #[inline]
            fn c_extract_high(
                reg: <$scalar as ComplexLanes<8>>::CRegister,
            ) -> <$scalar as ComplexLanes<4>>::CRegister {
                reg.hi
            }

            #[inline]
            fn c_combine(
                low: <$scalar as ComplexLanes<4>>::CRegister,
                high: <$scalar as ComplexLanes<4>>::CRegister,
            ) -> <$scalar as ComplexLanes<8>>::CRegister {
                Pair { lo: low, hi: high }
            }
        }
    };
}

composed_complex_lanes!(f32, "Complex4x2");
composed_complex_lanes!(crate::Half, "HalfComplex4x2");
