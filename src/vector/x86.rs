//! x86 / x86_64 backends. SSE2 is the required minimum; SSE3, SSE4.1 and
//! FMA are used where the build enables them.
//!
//! Covers the 4-lane single precision float, the 4-lane complex (kept as
//! separate real and imaginary planes, deinterleaved with shuffles on load)
//! and the 4-lane 32-bit unsigned integer registers. Wider registers compose
//! these in [`super::composed`].
//!
//! Transcendentals use the cephes-style polynomial range reductions; the
//! base-2 logarithm uses the same order-7 minimax polynomial as the scalar
//! [`crate::math::approximate_log2`], so backends agree within documented
//! tolerances.
//!
//! SAFETY: every intrinsic call in this module requires only SSE2 (or a
//! feature checked with `cfg` at the call site), which the enclosing module
//! `cfg` guarantees at compile time. Pointer arguments are derived from
//! references to appropriately sized arrays.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::complex::Complex;

use super::lanes::{fast_atan2_lanes, ComplexLanes, FloatLanes, UintLanes};

/// Separate real and imaginary planes of four complex lanes.
#[derive(Clone, Copy)]
pub struct ComplexPlanes {
    re: __m128,
    im: __m128,
}

#[inline]
fn splat_f32(value: f32) -> __m128 {
    unsafe { _mm_set1_ps(value) }
}

/// `a + b·c`, fused when the build has FMA.
#[inline]
fn multiply_add_f32x4(a: __m128, b: __m128, c: __m128) -> __m128 {
    #[cfg(target_feature = "fma")]
    unsafe {
        _mm_fmadd_ps(b, c, a)
    }
    #[cfg(not(target_feature = "fma"))]
    unsafe {
        _mm_add_ps(a, _mm_mul_ps(b, c))
    }
}

#[inline]
fn horizontal_sum_f32x4(value: __m128) -> f32 {
    #[cfg(target_feature = "sse3")]
    unsafe {
        let pairs = _mm_hadd_ps(value, value);
        _mm_cvtss_f32(_mm_hadd_ps(pairs, pairs))
    }
    #[cfg(not(target_feature = "sse3"))]
    unsafe {
        let high = _mm_add_ps(
            _mm_shuffle_ps::<0b01_00_11_10>(value, value),
            value,
        );
        _mm_cvtss_f32(_mm_add_ps(
            _mm_shuffle_ps::<0b10_11_00_01>(high, high),
            high,
        ))
    }
}

#[inline]
fn reverse_f32x4(value: __m128) -> __m128 {
    unsafe { _mm_shuffle_ps::<0b00_01_10_11>(value, value) }
}

#[inline]
fn approximate_log2_f32x4(x: __m128) -> __m128 {
    unsafe {
        let bits = _mm_castps_si128(x);

        let exponent = _mm_cvtepi32_ps(_mm_sub_epi32(
            _mm_srli_epi32::<23>(_mm_and_si128(bits, _mm_set1_epi32(0x7f80_0000))),
            _mm_set1_epi32(127),
        ));

        let mantissa = _mm_or_ps(
            _mm_castsi128_ps(_mm_and_si128(bits, _mm_set1_epi32(0x007f_ffff))),
            splat_f32(1.0),
        );

        // Minimax fit of log2(x)/(x - 1) over [1, 2), order 7.
        let mut p = splat_f32(-1.231_947_399_129_126_4e-2);
        p = multiply_add_f32x4(splat_f32(1.498_442_116_273_012_4e-1), p, mantissa);
        p = multiply_add_f32x4(splat_f32(-7.957_081_900_627_795e-1), p, mantissa);
        p = multiply_add_f32x4(splat_f32(2.418_069_084_345_598_7), p, mantissa);
        p = multiply_add_f32x4(splat_f32(-4.634_291_907_077_220_3), p, mantissa);
        p = multiply_add_f32x4(splat_f32(5.842_652_591_696_923), p, mantissa);
        p = multiply_add_f32x4(splat_f32(-5.010_303_889_272_715), p, mantissa);
        p = multiply_add_f32x4(splat_f32(3.484_752_333_259_812_7), p, mantissa);

        // The (m - 1) factor pins log2(1) to exactly 0.
        p = _mm_mul_ps(p, _mm_sub_ps(mantissa, splat_f32(1.0)));

        _mm_add_ps(p, exponent)
    }
}

// Extended-precision arithmetic constants of the cephes pi/4 split.
const CEPHES_DP1: f32 = 0.78515625;
const CEPHES_DP2: f32 = 2.418_756_484_985_351_6e-4;
const CEPHES_DP3: f32 = 3.774_894_977_445_941e-8;
const FOUR_OVER_PI: f32 = 1.273_239_544_735_162_5;

#[inline]
fn sin_cos_f32x4(x: __m128) -> (__m128, __m128) {
    unsafe {
        let sign_mask = _mm_set1_ps(-0.0);
        let sign_bit_input = _mm_and_ps(x, sign_mask);
        let x = _mm_andnot_ps(sign_mask, x);

        // Quadrant index: nearest even multiple of pi/4 below the scaled
        // argument.
        let mut j = _mm_cvttps_epi32(_mm_mul_ps(x, splat_f32(FOUR_OVER_PI)));
        j = _mm_add_epi32(j, _mm_set1_epi32(1));
        j = _mm_and_si128(j, _mm_set1_epi32(!1));
        let y = _mm_cvtepi32_ps(j);

        // Sign flips: sine in quadrants 2 and 3, cosine in quadrants 1 and 2.
        let swap_sign_sin = _mm_castsi128_ps(_mm_slli_epi32::<29>(_mm_and_si128(
            j,
            _mm_set1_epi32(4),
        )));
        let sign_bit_cos = _mm_castsi128_ps(_mm_slli_epi32::<29>(_mm_andnot_si128(
            _mm_sub_epi32(j, _mm_set1_epi32(2)),
            _mm_set1_epi32(4),
        )));
        let sign_bit_sin = _mm_xor_ps(sign_bit_input, swap_sign_sin);

        // Polynomial selection: quadrants 0 and 2 keep their own polynomial.
        let poly_mask = _mm_castsi128_ps(_mm_cmpeq_epi32(
            _mm_and_si128(j, _mm_set1_epi32(2)),
            _mm_setzero_si128(),
        ));

        // Extended precision reduction of x modulo pi/4.
        let mut x = multiply_add_f32x4(x, y, splat_f32(-CEPHES_DP1));
        x = multiply_add_f32x4(x, y, splat_f32(-CEPHES_DP2));
        x = multiply_add_f32x4(x, y, splat_f32(-CEPHES_DP3));

        let z = _mm_mul_ps(x, x);

        // Cosine polynomial on [0, pi/4].
        let mut cos_poly = splat_f32(2.443_315_711_809_948e-5);
        cos_poly = multiply_add_f32x4(splat_f32(-1.388_731_625_493_765e-3), cos_poly, z);
        cos_poly = multiply_add_f32x4(splat_f32(4.166_664_568_298_827e-2), cos_poly, z);
        cos_poly = _mm_mul_ps(_mm_mul_ps(cos_poly, z), z);
        cos_poly = _mm_sub_ps(cos_poly, _mm_mul_ps(z, splat_f32(0.5)));
        cos_poly = _mm_add_ps(cos_poly, splat_f32(1.0));

        // Sine polynomial on [0, pi/4].
        let mut sin_poly = splat_f32(-1.951_529_589_1e-4);
        sin_poly = multiply_add_f32x4(splat_f32(8.332_160_873_6e-3), sin_poly, z);
        sin_poly = multiply_add_f32x4(splat_f32(-1.666_665_461_1e-1), sin_poly, z);
        sin_poly = _mm_mul_ps(_mm_mul_ps(sin_poly, z), x);
        sin_poly = _mm_add_ps(sin_poly, x);

        let sin = _mm_or_ps(
            _mm_and_ps(poly_mask, sin_poly),
            _mm_andnot_ps(poly_mask, cos_poly),
        );
        let cos = _mm_or_ps(
            _mm_and_ps(poly_mask, cos_poly),
            _mm_andnot_ps(poly_mask, sin_poly),
        );

        (
            _mm_xor_ps(sin, sign_bit_sin),
            _mm_xor_ps(cos, sign_bit_cos),
        )
    }
}

#[inline]
fn exp_f32x4(x: __m128) -> __m128 {
    unsafe {
        let x = _mm_min_ps(x, splat_f32(88.376_26));
        let x = _mm_max_ps(x, splat_f32(-88.376_26));

        // n = floor(x / ln 2 + 0.5), emulated on top of the truncating
        // conversion.
        let scaled = multiply_add_f32x4(
            splat_f32(0.5),
            x,
            splat_f32(std::f32::consts::LOG2_E),
        );
        let truncated = _mm_cvtepi32_ps(_mm_cvttps_epi32(scaled));
        let overshoot = _mm_and_ps(_mm_cmpgt_ps(truncated, scaled), splat_f32(1.0));
        let n = _mm_sub_ps(truncated, overshoot);

        // Reduce with the split ln 2 for extended precision.
        let mut reduced = multiply_add_f32x4(x, n, splat_f32(-0.693_359_375));
        reduced = multiply_add_f32x4(reduced, n, splat_f32(2.121_944_4e-4));

        let z = _mm_mul_ps(reduced, reduced);

        let mut poly = splat_f32(1.987_569_15e-4);
        poly = multiply_add_f32x4(splat_f32(1.398_199_950_7e-3), poly, reduced);
        poly = multiply_add_f32x4(splat_f32(8.333_451_907_3e-3), poly, reduced);
        poly = multiply_add_f32x4(splat_f32(4.166_579_589_4e-2), poly, reduced);
        poly = multiply_add_f32x4(splat_f32(1.666_666_545_9e-1), poly, reduced);
        poly = multiply_add_f32x4(splat_f32(5.000_000_120_1e-1), poly, reduced);
        poly = _mm_add_ps(multiply_add_f32x4(reduced, poly, z), splat_f32(1.0));

        // Scale by 2^n through the exponent bits.
        let pow2n = _mm_castsi128_ps(_mm_slli_epi32::<23>(_mm_add_epi32(
            _mm_cvttps_epi32(n),
            _mm_set1_epi32(127),
        )));

        _mm_mul_ps(poly, pow2n)
    }
}

impl FloatLanes<4> for f32 {
    type Register = __m128;
    type MaskScalar = u32;

    const IS_VECTORIZED: bool = true;
    const NAME: &'static str = "X86";

    #[inline]
    fn load(values: &[f32; 4]) -> __m128 {
        unsafe { _mm_loadu_ps(values.as_ptr()) }
    }

    #[inline]
    fn splat(value: f32) -> __m128 {
        splat_f32(value)
    }

    #[inline]
    fn store(reg: __m128, dst: &mut [f32; 4]) {
        unsafe { _mm_storeu_ps(dst.as_mut_ptr(), reg) }
    }

    #[inline]
    fn store_lane(reg: __m128, index: usize, dst: &mut f32) {
        *dst = <f32 as FloatLanes<4>>::extract(reg, index);
    }

    #[inline]
    fn extract(reg: __m128, index: usize) -> f32 {
        assert!(index < 4);
        unsafe {
            match index {
                0 => _mm_cvtss_f32(reg),
                1 => _mm_cvtss_f32(_mm_shuffle_ps::<1>(reg, reg)),
                2 => _mm_cvtss_f32(_mm_shuffle_ps::<2>(reg, reg)),
                _ => _mm_cvtss_f32(_mm_shuffle_ps::<3>(reg, reg)),
            }
        }
    }

    #[inline]
    fn set_lane(reg: __m128, index: usize, value: f32) -> __m128 {
        assert!(index < 4);

        #[cfg(target_feature = "sse4.1")]
        unsafe {
            match index {
                0 => _mm_insert_ps::<0x00>(reg, _mm_set_ss(value)),
                1 => _mm_insert_ps::<0x10>(reg, _mm_set_ss(value)),
                2 => _mm_insert_ps::<0x20>(reg, _mm_set_ss(value)),
                _ => _mm_insert_ps::<0x30>(reg, _mm_set_ss(value)),
            }
        }
        #[cfg(not(target_feature = "sse4.1"))]
        unsafe {
            let mut lanes = [0.0f32; 4];
            _mm_storeu_ps(lanes.as_mut_ptr(), reg);
            lanes[index] = value;
            _mm_loadu_ps(lanes.as_ptr())
        }
    }

    #[inline]
    fn neg(reg: __m128) -> __m128 {
        unsafe { _mm_xor_ps(reg, _mm_set1_ps(-0.0)) }
    }

    #[inline]
    fn add(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_add_ps(a, b) }
    }

    #[inline]
    fn sub(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_sub_ps(a, b) }
    }

    #[inline]
    fn mul(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_mul_ps(a, b) }
    }

    #[inline]
    fn div(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_div_ps(a, b) }
    }

    #[inline]
    fn mul_scalar(reg: __m128, scalar: f32) -> __m128 {
        unsafe { _mm_mul_ps(reg, splat_f32(scalar)) }
    }

    #[inline]
    fn div_scalar(reg: __m128, scalar: f32) -> __m128 {
        unsafe { _mm_div_ps(reg, splat_f32(scalar)) }
    }

    #[inline]
    fn less_than(a: __m128, b: __m128) -> __m128i {
        unsafe { _mm_castps_si128(_mm_cmplt_ps(a, b)) }
    }

    #[inline]
    fn greater_than(a: __m128, b: __m128) -> __m128i {
        unsafe { _mm_castps_si128(_mm_cmpgt_ps(a, b)) }
    }

    #[inline]
    fn fast_log10(reg: __m128) -> __m128 {
        // log10(x) = log2(x) * log10(2)
        unsafe {
            _mm_mul_ps(
                approximate_log2_f32x4(reg),
                splat_f32(0.301_029_995_663_981_2),
            )
        }
    }

    #[inline]
    fn abs(reg: __m128) -> __m128 {
        unsafe { _mm_and_ps(reg, _mm_castsi128_ps(_mm_set1_epi32(0x7fff_ffff))) }
    }

    #[inline]
    fn squared_norm(reg: __m128) -> f32 {
        unsafe { horizontal_sum_f32x4(_mm_mul_ps(reg, reg)) }
    }

    #[inline]
    fn min(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_min_ps(a, b) }
    }

    #[inline]
    fn max(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_max_ps(a, b) }
    }

    #[inline]
    fn horizontal_max(reg: __m128) -> f32 {
        unsafe {
            let max1 = _mm_shuffle_ps::<0b00_00_11_10>(reg, reg);
            let max2 = _mm_max_ps(reg, max1);
            let max3 = _mm_shuffle_ps::<0b00_00_00_01>(max2, max2);
            _mm_cvtss_f32(_mm_max_ps(max2, max3))
        }
    }

    #[inline]
    fn horizontal_sum(reg: __m128) -> f32 {
        horizontal_sum_f32x4(reg)
    }

    #[inline]
    fn multiply_add(a: __m128, b: __m128, c: __m128) -> __m128 {
        multiply_add_f32x4(a, b, c)
    }

    #[inline]
    fn select(mask: __m128i, source1: __m128, source2: __m128) -> __m128 {
        unsafe {
            let mask = _mm_castsi128_ps(mask);
            _mm_or_ps(_mm_and_ps(mask, source1), _mm_andnot_ps(mask, source2))
        }
    }

    #[inline]
    fn sign(reg: __m128) -> __m128 {
        <f32 as FloatLanes<4>>::copysign(splat_f32(1.0), reg)
    }

    #[inline]
    fn copysign(mag: __m128, sgn: __m128) -> __m128 {
        unsafe {
            let sign_bit = _mm_set1_ps(-0.0);
            _mm_or_ps(_mm_and_ps(sign_bit, sgn), _mm_andnot_ps(sign_bit, mag))
        }
    }

    #[inline]
    fn reverse(reg: __m128) -> __m128 {
        reverse_f32x4(reg)
    }

    #[inline]
    fn sin(reg: __m128) -> __m128 {
        sin_cos_f32x4(reg).0
    }

    #[inline]
    fn cos(reg: __m128) -> __m128 {
        sin_cos_f32x4(reg).1
    }

    #[inline]
    fn sin_cos(reg: __m128) -> (__m128, __m128) {
        sin_cos_f32x4(reg)
    }

    #[inline]
    fn exp(reg: __m128) -> __m128 {
        exp_f32x4(reg)
    }
}

impl UintLanes<4> for u32 {
    type Register = __m128i;

    const IS_VECTORIZED: bool = true;
    const NAME: &'static str = "X86";

    #[inline]
    fn load(values: &[u32; 4]) -> __m128i {
        unsafe { _mm_loadu_si128(values.as_ptr().cast::<__m128i>()) }
    }

    #[inline]
    fn splat(value: u32) -> __m128i {
        unsafe { _mm_set1_epi32(value as i32) }
    }

    #[inline]
    fn store(reg: __m128i, dst: &mut [u32; 4]) {
        unsafe { _mm_storeu_si128(dst.as_mut_ptr().cast::<__m128i>(), reg) }
    }

    #[inline]
    fn store_lane(reg: __m128i, index: usize, dst: &mut u32) {
        *dst = <u32 as UintLanes<4>>::extract(reg, index);
    }

    #[inline]
    fn extract(reg: __m128i, index: usize) -> u32 {
        assert!(index < 4);
        unsafe {
            match index {
                0 => _mm_cvtsi128_si32(reg) as u32,
                1 => _mm_cvtsi128_si32(_mm_shuffle_epi32::<1>(reg)) as u32,
                2 => _mm_cvtsi128_si32(_mm_shuffle_epi32::<2>(reg)) as u32,
                _ => _mm_cvtsi128_si32(_mm_shuffle_epi32::<3>(reg)) as u32,
            }
        }
    }

    #[inline]
    fn set_lane(reg: __m128i, index: usize, value: u32) -> __m128i {
        assert!(index < 4);
        unsafe {
            let mut lanes = [0u32; 4];
            _mm_storeu_si128(lanes.as_mut_ptr().cast::<__m128i>(), reg);
            lanes[index] = value;
            _mm_loadu_si128(lanes.as_ptr().cast::<__m128i>())
        }
    }

    #[inline]
    fn min(a: __m128i, b: __m128i) -> __m128i {
        #[cfg(target_feature = "sse4.1")]
        unsafe {
            _mm_min_epu32(a, b)
        }
        #[cfg(not(target_feature = "sse4.1"))]
        unsafe {
            let mut lanes_a = [0u32; 4];
            let mut lanes_b = [0u32; 4];
            _mm_storeu_si128(lanes_a.as_mut_ptr().cast::<__m128i>(), a);
            _mm_storeu_si128(lanes_b.as_mut_ptr().cast::<__m128i>(), b);
            for (lane_a, lane_b) in lanes_a.iter_mut().zip(lanes_b) {
                *lane_a = Ord::min(*lane_a, lane_b);
            }
            _mm_loadu_si128(lanes_a.as_ptr().cast::<__m128i>())
        }
    }

    #[inline]
    fn max(a: __m128i, b: __m128i) -> __m128i {
        #[cfg(target_feature = "sse4.1")]
        unsafe {
            _mm_max_epu32(a, b)
        }
        #[cfg(not(target_feature = "sse4.1"))]
        unsafe {
            let mut lanes_a = [0u32; 4];
            let mut lanes_b = [0u32; 4];
            _mm_storeu_si128(lanes_a.as_mut_ptr().cast::<__m128i>(), a);
            _mm_storeu_si128(lanes_b.as_mut_ptr().cast::<__m128i>(), b);
            for (lane_a, lane_b) in lanes_a.iter_mut().zip(lanes_b) {
                *lane_a = Ord::max(*lane_a, lane_b);
            }
            _mm_loadu_si128(lanes_a.as_ptr().cast::<__m128i>())
        }
    }

    #[inline]
    fn horizontal_max(reg: __m128i) -> u32 {
        unsafe {
            let mut lanes = [0u32; 4];
            _mm_storeu_si128(lanes.as_mut_ptr().cast::<__m128i>(), reg);
            lanes.into_iter().max().unwrap_or(0)
        }
    }

    #[inline]
    fn select(mask: __m128i, source1: __m128i, source2: __m128i) -> __m128i {
        unsafe {
            _mm_or_si128(
                _mm_and_si128(mask, source1),
                _mm_andnot_si128(mask, source2),
            )
        }
    }

    #[inline]
    fn reverse(reg: __m128i) -> __m128i {
        unsafe { _mm_shuffle_epi32::<0b00_01_10_11>(reg) }
    }
}

impl ComplexLanes<4> for f32 {
    type CRegister = ComplexPlanes;

    const C_IS_VECTORIZED: bool = true;
    const C_NAME: &'static str = "X86";

    #[inline]
    fn c_load(values: &[Complex<f32>; 4]) -> ComplexPlanes {
        unsafe {
            let data = values.as_ptr().cast::<f32>();
            let a = _mm_loadu_ps(data);
            let b = _mm_loadu_ps(data.add(4));

            ComplexPlanes {
                re: _mm_shuffle_ps::<0b10_00_10_00>(a, b),
                im: _mm_shuffle_ps::<0b11_01_11_01>(a, b),
            }
        }
    }

    #[inline]
    fn c_splat(value: Complex<f32>) -> ComplexPlanes {
        ComplexPlanes {
            re: splat_f32(value.re),
            im: splat_f32(value.im),
        }
    }

    #[inline]
    fn c_from_parts(re: __m128, im: __m128) -> ComplexPlanes {
        ComplexPlanes { re, im }
    }

    #[inline]
    fn c_store(reg: ComplexPlanes, dst: &mut [Complex<f32>; 4]) {
        unsafe {
            let data = dst.as_mut_ptr().cast::<f32>();
            _mm_storeu_ps(data, _mm_unpacklo_ps(reg.re, reg.im));
            _mm_storeu_ps(data.add(4), _mm_unpackhi_ps(reg.re, reg.im));
        }
    }

    #[inline]
    fn c_store_lane(reg: ComplexPlanes, index: usize, dst: &mut Complex<f32>) {
        *dst = <f32 as ComplexLanes<4>>::c_extract(reg, index);
    }

    #[inline]
    fn c_extract(reg: ComplexPlanes, index: usize) -> Complex<f32> {
        Complex::new(
            <f32 as FloatLanes<4>>::extract(reg.re, index),
            <f32 as FloatLanes<4>>::extract(reg.im, index),
        )
    }

    #[inline]
    fn c_set_lane(reg: ComplexPlanes, index: usize, value: Complex<f32>) -> ComplexPlanes {
        ComplexPlanes {
            re: <f32 as FloatLanes<4>>::set_lane(reg.re, index, value.re),
            im: <f32 as FloatLanes<4>>::set_lane(reg.im, index, value.im),
        }
    }

    #[inline]
    fn c_extract_real(reg: ComplexPlanes) -> __m128 {
        reg.re
    }

    #[inline]
    fn c_extract_imag(reg: ComplexPlanes) -> __m128 {
        reg.im
    }

    #[inline]
    fn c_neg(reg: ComplexPlanes) -> ComplexPlanes {
        unsafe {
            ComplexPlanes {
                re: _mm_xor_ps(reg.re, _mm_set1_ps(-0.0)),
                im: _mm_xor_ps(reg.im, _mm_set1_ps(-0.0)),
            }
        }
    }

    #[inline]
    fn c_add(a: ComplexPlanes, b: ComplexPlanes) -> ComplexPlanes {
        unsafe {
            ComplexPlanes {
                re: _mm_add_ps(a.re, b.re),
                im: _mm_add_ps(a.im, b.im),
            }
        }
    }

    #[inline]
    fn c_sub(a: ComplexPlanes, b: ComplexPlanes) -> ComplexPlanes {
        unsafe {
            ComplexPlanes {
                re: _mm_sub_ps(a.re, b.re),
                im: _mm_sub_ps(a.im, b.im),
            }
        }
    }

    #[inline]
    fn c_mul(a: ComplexPlanes, b: ComplexPlanes) -> ComplexPlanes {
        unsafe {
            let ac = _mm_mul_ps(a.re, b.re);
            let bd = _mm_mul_ps(a.im, b.im);
            let ad = _mm_mul_ps(a.re, b.im);
            let bc = _mm_mul_ps(a.im, b.re);
            ComplexPlanes {
                re: _mm_sub_ps(ac, bd),
                im: _mm_add_ps(ad, bc),
            }
        }
    }

    #[inline]
    fn c_mul_real(a: ComplexPlanes, b: __m128) -> ComplexPlanes {
        unsafe {
            ComplexPlanes {
                re: _mm_mul_ps(a.re, b),
                im: _mm_mul_ps(a.im, b),
            }
        }
    }

    #[inline]
    fn c_div(a: ComplexPlanes, b: ComplexPlanes) -> ComplexPlanes {
        unsafe {
            let ac = _mm_mul_ps(a.re, b.re);
            let bd = _mm_mul_ps(a.im, b.im);
            let ad = _mm_mul_ps(a.re, b.im);
            let bc = _mm_mul_ps(a.im, b.re);

            let c2 = _mm_mul_ps(b.re, b.re);
            let d2 = _mm_mul_ps(b.im, b.im);
            let denominator_inv =
                _mm_div_ps(splat_f32(1.0), _mm_add_ps(c2, d2));

            ComplexPlanes {
                re: _mm_mul_ps(_mm_add_ps(ac, bd), denominator_inv),
                im: _mm_mul_ps(_mm_sub_ps(bc, ad), denominator_inv),
            }
        }
    }

    #[inline]
    fn c_abs(reg: ComplexPlanes) -> __m128 {
        unsafe { _mm_sqrt_ps(<f32 as ComplexLanes<4>>::c_norm(reg)) }
    }

    #[inline]
    fn c_fast_abs(reg: ComplexPlanes) -> __m128 {
        unsafe {
            let magnitude_sq = <f32 as ComplexLanes<4>>::c_norm(reg);
            let magnitude_inv = _mm_rsqrt_ps(magnitude_sq);
            _mm_rcp_ps(magnitude_inv)
        }
    }

    #[inline]
    fn c_norm(reg: ComplexPlanes) -> __m128 {
        // re·re plus a multiply-add of the squared imaginary plane.
        multiply_add_f32x4(unsafe { _mm_mul_ps(reg.re, reg.re) }, reg.im, reg.im)
    }

    #[inline]
    fn c_horizontal_sum(reg: ComplexPlanes) -> Complex<f32> {
        Complex::new(horizontal_sum_f32x4(reg.re), horizontal_sum_f32x4(reg.im))
    }

    #[inline]
    fn c_multiply_add(a: ComplexPlanes, b: ComplexPlanes, c: __m128) -> ComplexPlanes {
        ComplexPlanes {
            re: multiply_add_f32x4(a.re, b.re, c),
            im: multiply_add_f32x4(a.im, b.im, c),
        }
    }

    #[inline]
    fn c_fast_arg(reg: ComplexPlanes) -> __m128 {
        fast_atan2_lanes::<f32, 4>(reg.im, reg.re)
    }

    #[inline]
    fn c_conj(reg: ComplexPlanes) -> ComplexPlanes {
        unsafe {
            ComplexPlanes {
                re: reg.re,
                im: _mm_xor_ps(reg.im, _mm_set1_ps(-0.0)),
            }
        }
    }

    #[inline]
    fn c_exp_j(x: __m128) -> ComplexPlanes {
        let (sin, cos) = sin_cos_f32x4(x);
        ComplexPlanes { re: cos, im: sin }
    }

    #[inline]
    fn c_exp(reg: ComplexPlanes) -> ComplexPlanes {
        unsafe {
            let magnitude = exp_f32x4(reg.re);
            let rotation = <f32 as ComplexLanes<4>>::c_exp_j(reg.im);
            ComplexPlanes {
                re: _mm_mul_ps(rotation.re, magnitude),
                im: _mm_mul_ps(rotation.im, magnitude),
            }
        }
    }

    #[inline]
    fn c_reverse(reg: ComplexPlanes) -> ComplexPlanes {
        ComplexPlanes {
            re: reverse_f32x4(reg.re),
            im: reverse_f32x4(reg.im),
        }
    }
}
