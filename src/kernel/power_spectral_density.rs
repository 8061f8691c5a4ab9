//! Power spectral density of complex sample points.
//!
//! The power of each point is `10 · log10(re² + im²)`, using the fast
//! base-10 logarithm shared by the backends.

use crate::complex::Complex;
use crate::vector::complex::ComplexVector;
use crate::vector::lanes::ComplexLanes;

/// Write the per-element power spectral density of `samples`.
///
/// The output must hold at least as many elements as the input (asserted); a
/// longer output is only partially written. Returns the written prefix.
pub fn power_spectral_density<'a, T>(
    samples: &[Complex<T>],
    power: &'a mut [T],
) -> &'a mut [T]
where
    T: ComplexLanes<8> + ComplexLanes<4>,
{
    assert!(samples.len() <= power.len());

    let num_samples = samples.len();
    let ten = T::from_f32(10.0);
    let mut i = 0;

    if ComplexVector::<T, 8>::IS_VECTORIZED {
        let num_aligned = num_samples & !7;
        while i < num_aligned {
            let samples8 = ComplexVector::<T, 8>::load(&samples[i..]);
            (samples8.norm().fast_log10() * ten).store(&mut power[i..]);
            i += 8;
        }
    }

    if ComplexVector::<T, 4>::IS_VECTORIZED {
        let num_aligned = num_samples & !3;
        while i < num_aligned {
            let samples4 = ComplexVector::<T, 4>::load(&samples[i..]);
            (samples4.norm().fast_log10() * ten).store(&mut power[i..]);
            i += 4;
        }
    }

    while i < num_samples {
        power[i] = samples[i].norm().fast_log10() * ten;
        i += 1;
    }

    &mut power[..num_samples]
}
