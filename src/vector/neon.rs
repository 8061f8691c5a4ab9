//! Arm NEON backends for aarch64.
//!
//! Covers the 4-lane single precision float, the 4-lane complex (stored as
//! deinterleaved real and imaginary planes via `vld2q`/`vst2q`), and the
//! 4- and 8-lane unsigned integer registers. Wider registers compose these
//! in [`super::composed`].
//!
//! Transcendentals use the cephes-style polynomial range reductions; the
//! base-2 logarithm uses the same order-7 minimax polynomial as the scalar
//! [`crate::math::approximate_log2`], so backends agree within documented
//! tolerances.
//!
//! SAFETY: every intrinsic call in this module requires only that NEON is
//! available, which the enclosing `cfg` guarantees at compile time. Pointer
//! arguments are derived from references to appropriately sized arrays.

use std::arch::aarch64::*;

use crate::complex::Complex;

use super::lanes::{fast_atan2_lanes, ComplexLanes, FloatLanes, UintLanes, UintSplit};

#[inline]
fn splat_f32(value: f32) -> float32x4_t {
    unsafe { vdupq_n_f32(value) }
}

/// Reciprocal with two Newton-Raphson refinements of the hardware estimate.
#[inline]
fn invert_f32x4(v: float32x4_t) -> float32x4_t {
    unsafe {
        let mut reciprocal = vrecpeq_f32(v);
        reciprocal = vmulq_f32(vrecpsq_f32(v, reciprocal), reciprocal);
        reciprocal = vmulq_f32(vrecpsq_f32(v, reciprocal), reciprocal);
        reciprocal
    }
}

/// Reverse the four lanes: swap within 64-bit halves, then swap the halves.
#[inline]
fn reverse_f32x4(v: float32x4_t) -> float32x4_t {
    unsafe {
        let swapped = vrev64q_f32(v);
        vextq_f32::<2>(swapped, swapped)
    }
}

#[inline]
fn approximate_log2_f32x4(x: float32x4_t) -> float32x4_t {
    unsafe {
        let bits = vreinterpretq_u32_f32(x);

        let exponent = vcvtq_f32_s32(vsubq_s32(
            vreinterpretq_s32_u32(vshrq_n_u32::<23>(vandq_u32(
                bits,
                vdupq_n_u32(0x7f80_0000),
            ))),
            vdupq_n_s32(127),
        ));

        let mantissa = vreinterpretq_f32_u32(vorrq_u32(
            vandq_u32(bits, vdupq_n_u32(0x007f_ffff)),
            vdupq_n_u32(0x3f80_0000),
        ));

        // Minimax fit of log2(x)/(x - 1) over [1, 2), order 7.
        let mut p = splat_f32(-1.231_947_399_129_126_4e-2);
        p = vmlaq_f32(splat_f32(1.498_442_116_273_012_4e-1), p, mantissa);
        p = vmlaq_f32(splat_f32(-7.957_081_900_627_795e-1), p, mantissa);
        p = vmlaq_f32(splat_f32(2.418_069_084_345_598_7), p, mantissa);
        p = vmlaq_f32(splat_f32(-4.634_291_907_077_220_3), p, mantissa);
        p = vmlaq_f32(splat_f32(5.842_652_591_696_923), p, mantissa);
        p = vmlaq_f32(splat_f32(-5.010_303_889_272_715), p, mantissa);
        p = vmlaq_f32(splat_f32(3.484_752_333_259_812_7), p, mantissa);

        // The (m - 1) factor pins log2(1) to exactly 0.
        vmlaq_f32(exponent, p, vsubq_f32(mantissa, splat_f32(1.0)))
    }
}

// Extended-precision arithmetic constants of the cephes pi/4 split.
const CEPHES_DP1: f32 = 0.78515625;
const CEPHES_DP2: f32 = 2.418_756_484_985_351_6e-4;
const CEPHES_DP3: f32 = 3.774_894_977_445_941e-8;
const FOUR_OVER_PI: f32 = 1.273_239_544_735_162_5;

#[inline]
fn sin_cos_f32x4(x: float32x4_t) -> (float32x4_t, float32x4_t) {
    unsafe {
        let sign_mask = vdupq_n_u32(0x8000_0000);
        let sign_bit_input = vandq_u32(vreinterpretq_u32_f32(x), sign_mask);
        let x = vabsq_f32(x);

        // Quadrant index: nearest even multiple of pi/4 below the scaled
        // argument.
        let mut j = vcvtq_s32_f32(vmulq_n_f32(x, FOUR_OVER_PI));
        j = vaddq_s32(j, vdupq_n_s32(1));
        j = vandq_s32(j, vdupq_n_s32(!1));
        let y = vcvtq_f32_s32(j);

        // Sign flips: sine in quadrants 2 and 3, cosine in quadrants 1 and 2.
        let swap_sign_sin =
            vreinterpretq_u32_s32(vshlq_n_s32::<29>(vandq_s32(j, vdupq_n_s32(4))));
        let sign_bit_cos = vreinterpretq_u32_s32(vshlq_n_s32::<29>(vbicq_s32(
            vdupq_n_s32(4),
            vsubq_s32(j, vdupq_n_s32(2)),
        )));
        let sign_bit_sin = veorq_u32(sign_bit_input, swap_sign_sin);

        // Polynomial selection: quadrants 0 and 2 keep their own polynomial.
        let poly_mask =
            vceqq_s32(vandq_s32(j, vdupq_n_s32(2)), vdupq_n_s32(0));

        // Extended precision reduction of x modulo pi/4.
        let mut x = vmlaq_f32(x, y, splat_f32(-CEPHES_DP1));
        x = vmlaq_f32(x, y, splat_f32(-CEPHES_DP2));
        x = vmlaq_f32(x, y, splat_f32(-CEPHES_DP3));

        let z = vmulq_f32(x, x);

        // Cosine polynomial on [0, pi/4].
        let mut cos_poly = splat_f32(2.443_315_711_809_948e-5);
        cos_poly = vmlaq_f32(splat_f32(-1.388_731_625_493_765e-3), cos_poly, z);
        cos_poly = vmlaq_f32(splat_f32(4.166_664_568_298_827e-2), cos_poly, z);
        cos_poly = vmulq_f32(vmulq_f32(cos_poly, z), z);
        cos_poly = vsubq_f32(cos_poly, vmulq_f32(z, splat_f32(0.5)));
        cos_poly = vaddq_f32(cos_poly, splat_f32(1.0));

        // Sine polynomial on [0, pi/4].
        let mut sin_poly = splat_f32(-1.951_529_589_1e-4);
        sin_poly = vmlaq_f32(splat_f32(8.332_160_873_6e-3), sin_poly, z);
        sin_poly = vmlaq_f32(splat_f32(-1.666_665_461_1e-1), sin_poly, z);
        sin_poly = vmulq_f32(vmulq_f32(sin_poly, z), x);
        sin_poly = vaddq_f32(sin_poly, x);

        let sin = vbslq_f32(poly_mask, sin_poly, cos_poly);
        let cos = vbslq_f32(poly_mask, cos_poly, sin_poly);

        (
            vreinterpretq_f32_u32(veorq_u32(vreinterpretq_u32_f32(sin), sign_bit_sin)),
            vreinterpretq_f32_u32(veorq_u32(vreinterpretq_u32_f32(cos), sign_bit_cos)),
        )
    }
}

#[inline]
fn exp_f32x4(x: float32x4_t) -> float32x4_t {
    unsafe {
        let x = vminq_f32(x, splat_f32(88.376_26));
        let x = vmaxq_f32(x, splat_f32(-88.376_26));

        // n = round(x / ln 2).
        let n = vrndmq_f32(vmlaq_f32(
            splat_f32(0.5),
            x,
            splat_f32(std::f32::consts::LOG2_E),
        ));

        // Reduce with the split ln 2 for extended precision.
        let mut reduced = vmlaq_f32(x, n, splat_f32(-0.693_359_375));
        reduced = vmlaq_f32(reduced, n, splat_f32(2.121_944_4e-4));

        let z = vmulq_f32(reduced, reduced);

        let mut poly = splat_f32(1.987_569_15e-4);
        poly = vmlaq_f32(splat_f32(1.398_199_950_7e-3), poly, reduced);
        poly = vmlaq_f32(splat_f32(8.333_451_907_3e-3), poly, reduced);
        poly = vmlaq_f32(splat_f32(4.166_579_589_4e-2), poly, reduced);
        poly = vmlaq_f32(splat_f32(1.666_666_545_9e-1), poly, reduced);
        poly = vmlaq_f32(splat_f32(5.000_000_120_1e-1), poly, reduced);
        poly = vaddq_f32(vmlaq_f32(reduced, poly, z), splat_f32(1.0));

        // Scale by 2^n through the exponent bits.
        let pow2n = vreinterpretq_f32_s32(vshlq_n_s32::<23>(vaddq_s32(
            vcvtq_s32_f32(n),
            vdupq_n_s32(127),
        )));

        vmulq_f32(poly, pow2n)
    }
}

impl FloatLanes<4> for f32 {
    type Register = float32x4_t;
    type MaskScalar = u32;

    const IS_VECTORIZED: bool = true;
    const NAME: &'static str = "Neon";

    #[inline]
    fn load(values: &[f32; 4]) -> float32x4_t {
        unsafe { vld1q_f32(values.as_ptr()) }
    }

    #[inline]
    fn splat(value: f32) -> float32x4_t {
        splat_f32(value)
    }

    #[inline]
    fn store(reg: float32x4_t, dst: &mut [f32; 4]) {
        unsafe { vst1q_f32(dst.as_mut_ptr(), reg) }
    }

    #[inline]
    fn store_lane(reg: float32x4_t, index: usize, dst: &mut f32) {
        *dst = <f32 as FloatLanes<4>>::extract(reg, index);
    }

    #[inline]
    fn extract(reg: float32x4_t, index: usize) -> f32 {
        assert!(index < 4);
        unsafe {
            match index {
                0 => vgetq_lane_f32::<0>(reg),
                1 => vgetq_lane_f32::<1>(reg),
                2 => vgetq_lane_f32::<2>(reg),
                _ => vgetq_lane_f32::<3>(reg),
            }
        }
    }

    #[inline]
    fn set_lane(reg: float32x4_t, index: usize, value: f32) -> float32x4_t {
        assert!(index < 4);
        unsafe {
            match index {
                0 => vsetq_lane_f32::<0>(value, reg),
                1 => vsetq_lane_f32::<1>(value, reg),
                2 => vsetq_lane_f32::<2>(value, reg),
                _ => vsetq_lane_f32::<3>(value, reg),
            }
        }
    }

    #[inline]
    fn neg(reg: float32x4_t) -> float32x4_t {
        unsafe { vnegq_f32(reg) }
    }

    #[inline]
    fn add(a: float32x4_t, b: float32x4_t) -> float32x4_t {
        unsafe { vaddq_f32(a, b) }
    }

    #[inline]
    fn sub(a: float32x4_t, b: float32x4_t) -> float32x4_t {
        unsafe { vsubq_f32(a, b) }
    }

    #[inline]
    fn mul(a: float32x4_t, b: float32x4_t) -> float32x4_t {
        unsafe { vmulq_f32(a, b) }
    }

    #[inline]
    fn div(a: float32x4_t, b: float32x4_t) -> float32x4_t {
        unsafe { vdivq_f32(a, b) }
    }

    #[inline]
    fn mul_scalar(reg: float32x4_t, scalar: f32) -> float32x4_t {
        unsafe { vmulq_n_f32(reg, scalar) }
    }

    #[inline]
    fn div_scalar(reg: float32x4_t, scalar: f32) -> float32x4_t {
        unsafe { vmulq_n_f32(reg, 1.0 / scalar) }
    }

    #[inline]
    fn less_than(a: float32x4_t, b: float32x4_t) -> uint32x4_t {
        unsafe { vcltq_f32(a, b) }
    }

    #[inline]
    fn greater_than(a: float32x4_t, b: float32x4_t) -> uint32x4_t {
        unsafe { vcgtq_f32(a, b) }
    }

    #[inline]
    fn fast_log10(reg: float32x4_t) -> float32x4_t {
        // log10(x) = log2(x) * log10(2)
        unsafe { vmulq_n_f32(approximate_log2_f32x4(reg), 0.301_029_995_663_981_2) }
    }

    #[inline]
    fn abs(reg: float32x4_t) -> float32x4_t {
        unsafe { vabsq_f32(reg) }
    }

    #[inline]
    fn squared_norm(reg: float32x4_t) -> f32 {
        unsafe { vaddvq_f32(vmulq_f32(reg, reg)) }
    }

    #[inline]
    fn min(a: float32x4_t, b: float32x4_t) -> float32x4_t {
        unsafe { vminq_f32(a, b) }
    }

    #[inline]
    fn max(a: float32x4_t, b: float32x4_t) -> float32x4_t {
        unsafe { vmaxq_f32(a, b) }
    }

    #[inline]
    fn horizontal_max(reg: float32x4_t) -> f32 {
        unsafe { vmaxvq_f32(reg) }
    }

    #[inline]
    fn horizontal_sum(reg: float32x4_t) -> f32 {
        unsafe { vaddvq_f32(reg) }
    }

    #[inline]
    fn multiply_add(a: float32x4_t, b: float32x4_t, c: float32x4_t) -> float32x4_t {
        unsafe { vmlaq_f32(a, b, c) }
    }

    #[inline]
    fn select(mask: uint32x4_t, source1: float32x4_t, source2: float32x4_t) -> float32x4_t {
        unsafe { vbslq_f32(mask, source1, source2) }
    }

    #[inline]
    fn sign(reg: float32x4_t) -> float32x4_t {
        <f32 as FloatLanes<4>>::copysign(splat_f32(1.0), reg)
    }

    #[inline]
    fn copysign(mag: float32x4_t, sgn: float32x4_t) -> float32x4_t {
        unsafe { vbslq_f32(vdupq_n_u32(0x8000_0000), sgn, mag) }
    }

    #[inline]
    fn reverse(reg: float32x4_t) -> float32x4_t {
        reverse_f32x4(reg)
    }

    #[inline]
    fn sin(reg: float32x4_t) -> float32x4_t {
        sin_cos_f32x4(reg).0
    }

    #[inline]
    fn cos(reg: float32x4_t) -> float32x4_t {
        sin_cos_f32x4(reg).1
    }

    #[inline]
    fn sin_cos(reg: float32x4_t) -> (float32x4_t, float32x4_t) {
        sin_cos_f32x4(reg)
    }

    #[inline]
    fn exp(reg: float32x4_t) -> float32x4_t {
        exp_f32x4(reg)
    }
}

impl UintLanes<4> for u32 {
    type Register = uint32x4_t;

    const IS_VECTORIZED: bool = true;
    const NAME: &'static str = "Neon";

    #[inline]
    fn load(values: &[u32; 4]) -> uint32x4_t {
        unsafe { vld1q_u32(values.as_ptr()) }
    }

    #[inline]
    fn splat(value: u32) -> uint32x4_t {
        unsafe { vdupq_n_u32(value) }
    }

    #[inline]
    fn store(reg: uint32x4_t, dst: &mut [u32; 4]) {
        unsafe { vst1q_u32(dst.as_mut_ptr(), reg) }
    }

    #[inline]
    fn store_lane(reg: uint32x4_t, index: usize, dst: &mut u32) {
        *dst = <u32 as UintLanes<4>>::extract(reg, index);
    }

    #[inline]
    fn extract(reg: uint32x4_t, index: usize) -> u32 {
        assert!(index < 4);
        unsafe {
            match index {
                0 => vgetq_lane_u32::<0>(reg),
                1 => vgetq_lane_u32::<1>(reg),
                2 => vgetq_lane_u32::<2>(reg),
                _ => vgetq_lane_u32::<3>(reg),
            }
        }
    }

    #[inline]
    fn set_lane(reg: uint32x4_t, index: usize, value: u32) -> uint32x4_t {
        assert!(index < 4);
        unsafe {
            match index {
                0 => vsetq_lane_u32::<0>(value, reg),
                1 => vsetq_lane_u32::<1>(value, reg),
                2 => vsetq_lane_u32::<2>(value, reg),
                _ => vsetq_lane_u32::<3>(value, reg),
            }
        }
    }

    #[inline]
    fn min(a: uint32x4_t, b: uint32x4_t) -> uint32x4_t {
        unsafe { vminq_u32(a, b) }
    }

    #[inline]
    fn max(a: uint32x4_t, b: uint32x4_t) -> uint32x4_t {
        unsafe { vmaxq_u32(a, b) }
    }

    #[inline]
    fn horizontal_max(reg: uint32x4_t) -> u32 {
        unsafe { vmaxvq_u32(reg) }
    }

    #[inline]
    fn select(mask: uint32x4_t, source1: uint32x4_t, source2: uint32x4_t) -> uint32x4_t {
        unsafe { vbslq_u32(mask, source1, source2) }
    }

    #[inline]
    fn reverse(reg: uint32x4_t) -> uint32x4_t {
        unsafe {
            let swapped = vrev64q_u32(reg);
            vextq_u32::<2>(swapped, swapped)
        }
    }
}

impl UintLanes<4> for u16 {
    type Register = uint16x4_t;

    const IS_VECTORIZED: bool = true;
    const NAME: &'static str = "Neon";

    #[inline]
    fn load(values: &[u16; 4]) -> uint16x4_t {
        unsafe { vld1_u16(values.as_ptr()) }
    }

    #[inline]
    fn splat(value: u16) -> uint16x4_t {
        unsafe { vdup_n_u16(value) }
    }

    #[inline]
    fn store(reg: uint16x4_t, dst: &mut [u16; 4]) {
        unsafe { vst1_u16(dst.as_mut_ptr(), reg) }
    }

    #[inline]
    fn store_lane(reg: uint16x4_t, index: usize, dst: &mut u16) {
        *dst = <u16 as UintLanes<4>>::extract(reg, index);
    }

    #[inline]
    fn extract(reg: uint16x4_t, index: usize) -> u16 {
        assert!(index < 4);
        unsafe {
            match index {
                0 => vget_lane_u16::<0>(reg),
                1 => vget_lane_u16::<1>(reg),
                2 => vget_lane_u16::<2>(reg),
                _ => vget_lane_u16::<3>(reg),
            }
        }
    }

    #[inline]
    fn set_lane(reg: uint16x4_t, index: usize, value: u16) -> uint16x4_t {
        assert!(index < 4);
        unsafe {
            match index {
                0 => vset_lane_u16::<0>(value, reg),
                1 => vset_lane_u16::<1>(value, reg),
                2 => vset_lane_u16::<2>(value, reg),
                _ => vset_lane_u16::<3>(value, reg),
            }
        }
    }

    #[inline]
    fn min(a: uint16x4_t, b: uint16x4_t) -> uint16x4_t {
        unsafe { vmin_u16(a, b) }
    }

    #[inline]
    fn max(a: uint16x4_t, b: uint16x4_t) -> uint16x4_t {
        unsafe { vmax_u16(a, b) }
    }

    #[inline]
    fn horizontal_max(reg: uint16x4_t) -> u16 {
        unsafe { vmaxv_u16(reg) }
    }

    #[inline]
    fn select(mask: uint16x4_t, source1: uint16x4_t, source2: uint16x4_t) -> uint16x4_t {
        unsafe { vbsl_u16(mask, source1, source2) }
    }

    #[inline]
    fn reverse(reg: uint16x4_t) -> uint16x4_t {
        unsafe { vrev64_u16(reg) }
    }
}

impl UintLanes<8> for u16 {
    type Register = uint16x8_t;

    const IS_VECTORIZED: bool = true;
    const NAME: &'static str = "Neon";

    #[inline]
    fn load(values: &[u16; 8]) -> uint16x8_t {
        unsafe { vld1q_u16(values.as_ptr()) }
    }

    #[inline]
    fn splat(value: u16) -> uint16x8_t {
        unsafe { vdupq_n_u16(value) }
    }

    #[inline]
    fn store(reg: uint16x8_t, dst: &mut [u16; 8]) {
        unsafe { vst1q_u16(dst.as_mut_ptr(), reg) }
    }

    #[inline]
    fn store_lane(reg: uint16x8_t, index: usize, dst: &mut u16) {
        *dst = <u16 as UintLanes<8>>::extract(reg, index);
    }

    #[inline]
    fn extract(reg: uint16x8_t, index: usize) -> u16 {
        assert!(index < 8);
        unsafe {
            match index {
                0 => vgetq_lane_u16::<0>(reg),
                1 => vgetq_lane_u16::<1>(reg),
                2 => vgetq_lane_u16::<2>(reg),
                3 => vgetq_lane_u16::<3>(reg),
                4 => vgetq_lane_u16::<4>(reg),
                5 => vgetq_lane_u16::<5>(reg),
                6 => vgetq_lane_u16::<6>(reg),
                _ => vgetq_lane_u16::<7>(reg),
            }
        }
    }

    #[inline]
    fn set_lane(reg: uint16x8_t, index: usize, value: u16) -> uint16x8_t {
        assert!(index < 8);
        unsafe {
            match index {
                0 => vsetq_lane_u16::<0>(value, reg),
                1 => vsetq_lane_u16::<1>(value, reg),
                2 => vsetq_lane_u16::<2>(value, reg),
                3 => vsetq_lane_u16::<3>(value, reg),
                4 => vsetq_lane_u16::<4>(value, reg),
                5 => vsetq_lane_u16::<5>(value, reg),
                6 => vsetq_lane_u16::<6>(value, reg),
                _ => vsetq_lane_u16::<7>(value, reg),
            }
        }
    }

    #[inline]
    fn min(a: uint16x8_t, b: uint16x8_t) -> uint16x8_t {
        unsafe { vminq_u16(a, b) }
    }

    #[inline]
    fn max(a: uint16x8_t, b: uint16x8_t) -> uint16x8_t {
        unsafe { vmaxq_u16(a, b) }
    }

    #[inline]
    fn horizontal_max(reg: uint16x8_t) -> u16 {
        unsafe { vmaxvq_u16(reg) }
    }

    #[inline]
    fn select(mask: uint16x8_t, source1: uint16x8_t, source2: uint16x8_t) -> uint16x8_t {
        unsafe { vbslq_u16(mask, source1, source2) }
    }

    #[inline]
    fn reverse(reg: uint16x8_t) -> uint16x8_t {
        unsafe {
            let swapped = vrev64q_u16(reg);
            vextq_u16::<4>(swapped, swapped)
        }
    }
}

impl UintSplit<8, 4> for u16 {
    #[inline]
    fn extract_low(reg: uint16x8_t) -> uint16x4_t {
        unsafe { vget_low_u16(reg) }
    }

    #[inline]
    fn extract_high(reg: uint16x8_t) -> uint16x4_t {
        unsafe { vget_high_u16(reg) }
    }

    #[inline]
    fn combine(low: uint16x4_t, high: uint16x4_t) -> uint16x8_t {
        unsafe { vcombine_u16(low, high) }
    }
}

impl ComplexLanes<4> for f32 {
    type CRegister = float32x4x2_t;

    const C_IS_VECTORIZED: bool = true;
    const C_NAME: &'static str = "Neon";

    #[inline]
    fn c_load(values: &[Complex<f32>; 4]) -> float32x4x2_t {
        unsafe { vld2q_f32(values.as_ptr().cast::<f32>()) }
    }

    #[inline]
    fn c_splat(value: Complex<f32>) -> float32x4x2_t {
        float32x4x2_t(splat_f32(value.re), splat_f32(value.im))
    }

    #[inline]
    fn c_from_parts(re: float32x4_t, im: float32x4_t) -> float32x4x2_t {
        float32x4x2_t(re, im)
    }

    #[inline]
    fn c_store(reg: float32x4x2_t, dst: &mut [Complex<f32>; 4]) {
        unsafe { vst2q_f32(dst.as_mut_ptr().cast::<f32>(), reg) }
    }

    #[inline]
    fn c_store_lane(reg: float32x4x2_t, index: usize, dst: &mut Complex<f32>) {
        *dst = <f32 as ComplexLanes<4>>::c_extract(reg, index);
    }

    #[inline]
    fn c_extract(reg: float32x4x2_t, index: usize) -> Complex<f32> {
        Complex::new(
            <f32 as FloatLanes<4>>::extract(reg.0, index),
            <f32 as FloatLanes<4>>::extract(reg.1, index),
        )
    }

    #[inline]
    fn c_set_lane(reg: float32x4x2_t, index: usize, value: Complex<f32>) -> float32x4x2_t {
        float32x4x2_t(
            <f32 as FloatLanes<4>>::set_lane(reg.0, index, value.re),
            <f32 as FloatLanes<4>>::set_lane(reg.1, index, value.im),
        )
    }

    #[inline]
    fn c_extract_real(reg: float32x4x2_t) -> float32x4_t {
        reg.0
    }

    #[inline]
    fn c_extract_imag(reg: float32x4x2_t) -> float32x4_t {
        reg.1
    }

    #[inline]
    fn c_neg(reg: float32x4x2_t) -> float32x4x2_t {
        unsafe { float32x4x2_t(vnegq_f32(reg.0), vnegq_f32(reg.1)) }
    }

    #[inline]
    fn c_add(a: float32x4x2_t, b: float32x4x2_t) -> float32x4x2_t {
        unsafe { float32x4x2_t(vaddq_f32(a.0, b.0), vaddq_f32(a.1, b.1)) }
    }

    #[inline]
    fn c_sub(a: float32x4x2_t, b: float32x4x2_t) -> float32x4x2_t {
        unsafe { float32x4x2_t(vsubq_f32(a.0, b.0), vsubq_f32(a.1, b.1)) }
    }

    #[inline]
    fn c_mul(a: float32x4x2_t, b: float32x4x2_t) -> float32x4x2_t {
        unsafe {
            let ac = vmulq_f32(a.0, b.0);
            let bd = vmulq_f32(a.1, b.1);
            let ad = vmulq_f32(a.0, b.1);
            let bc = vmulq_f32(a.1, b.0);
            float32x4x2_t(vsubq_f32(ac, bd), vaddq_f32(ad, bc))
        }
    }

    #[inline]
    fn c_mul_real(a: float32x4x2_t, b: float32x4_t) -> float32x4x2_t {
        unsafe { float32x4x2_t(vmulq_f32(a.0, b), vmulq_f32(a.1, b)) }
    }

    #[inline]
    fn c_div(a: float32x4x2_t, b: float32x4x2_t) -> float32x4x2_t {
        unsafe {
            let ac = vmulq_f32(a.0, b.0);
            let bd = vmulq_f32(a.1, b.1);
            let ad = vmulq_f32(a.0, b.1);
            let bc = vmulq_f32(a.1, b.0);

            let c2 = vmulq_f32(b.0, b.0);
            let d2 = vmulq_f32(b.1, b.1);
            let denominator_inv = invert_f32x4(vaddq_f32(c2, d2));

            float32x4x2_t(
                vmulq_f32(vaddq_f32(ac, bd), denominator_inv),
                vmulq_f32(vsubq_f32(bc, ad), denominator_inv),
            )
        }
    }

    #[inline]
    fn c_abs(reg: float32x4x2_t) -> float32x4_t {
        unsafe { vsqrtq_f32(<f32 as ComplexLanes<4>>::c_norm(reg)) }
    }

    #[inline]
    fn c_fast_abs(reg: float32x4x2_t) -> float32x4_t {
        unsafe {
            let magnitude_sq = <f32 as ComplexLanes<4>>::c_norm(reg);
            let magnitude_inv = vrsqrteq_f32(magnitude_sq);
            vrecpeq_f32(magnitude_inv)
        }
    }

    #[inline]
    fn c_norm(reg: float32x4x2_t) -> float32x4_t {
        // re·re plus a multiply-add of the squared imaginary plane.
        unsafe { vmlaq_f32(vmulq_f32(reg.0, reg.0), reg.1, reg.1) }
    }

    #[inline]
    fn c_horizontal_sum(reg: float32x4x2_t) -> Complex<f32> {
        unsafe { Complex::new(vaddvq_f32(reg.0), vaddvq_f32(reg.1)) }
    }

    #[inline]
    fn c_multiply_add(a: float32x4x2_t, b: float32x4x2_t, c: float32x4_t) -> float32x4x2_t {
        unsafe { float32x4x2_t(vmlaq_f32(a.0, b.0, c), vmlaq_f32(a.1, b.1, c)) }
    }

    #[inline]
    fn c_fast_arg(reg: float32x4x2_t) -> float32x4_t {
        fast_atan2_lanes::<f32, 4>(reg.1, reg.0)
    }

    #[inline]
    fn c_conj(reg: float32x4x2_t) -> float32x4x2_t {
        unsafe { float32x4x2_t(reg.0, vnegq_f32(reg.1)) }
    }

    #[inline]
    fn c_exp_j(x: float32x4_t) -> float32x4x2_t {
        let (sin, cos) = sin_cos_f32x4(x);
        float32x4x2_t(cos, sin)
    }

    #[inline]
    fn c_exp(reg: float32x4x2_t) -> float32x4x2_t {
        unsafe {
            let magnitude = exp_f32x4(reg.0);
            let rotation = <f32 as ComplexLanes<4>>::c_exp_j(reg.1);
            float32x4x2_t(
                vmulq_f32(rotation.0, magnitude),
                vmulq_f32(rotation.1, magnitude),
            )
        }
    }

    #[inline]
    fn c_reverse(reg: float32x4x2_t) -> float32x4x2_t {
        float32x4x2_t(reverse_f32x4(reg.0), reverse_f32x4(reg.1))
    }
}
