//! Per-element integer power of complex samples.
//!
//! For a positive exponent the accuracy matches naive repeated
//! multiplication. The exponent rules for zero and negative values follow
//! [`crate::math::fast_int_pow`]: 0 gives 1, a negative exponent gives the
//! reciprocal of the positive power. Deterministic for equal inputs.

use crate::complex::Complex;
use crate::math;
use crate::vector::complex::ComplexVector;
use crate::vector::lanes::ComplexLanes;

/// Raise every element of `base` to the integer power `exp`.
///
/// The output must hold at least as many elements as the input (asserted); a
/// longer output is only partially written. Returns the written prefix.
pub fn fast_int_pow<'a, T>(
    base: &[Complex<T>],
    exp: i32,
    pow: &'a mut [Complex<T>],
) -> &'a mut [Complex<T>]
where
    T: ComplexLanes<8> + ComplexLanes<4>,
{
    assert!(base.len() <= pow.len());

    let size = base.len();
    let mut i = 0;

    if ComplexVector::<T, 8>::IS_VECTORIZED {
        let size_aligned = size & !7;
        while i < size_aligned {
            let base8 = ComplexVector::<T, 8>::load(&base[i..]);
            base8.fast_int_pow(exp).store(&mut pow[i..]);
            i += 8;
        }
    }

    if ComplexVector::<T, 4>::IS_VECTORIZED {
        let size_aligned = size & !3;
        while i < size_aligned {
            let base4 = ComplexVector::<T, 4>::load(&base[i..]);
            base4.fast_int_pow(exp).store(&mut pow[i..]);
            i += 4;
        }
    }

    while i < size {
        pow[i] = math::fast_int_pow(base[i], exp);
        i += 1;
    }

    &mut pow[..size]
}
