//! Per-element squared magnitude of a complex signal.

use crate::complex::Complex;
use crate::vector::complex::ComplexVector;
use crate::vector::lanes::ComplexLanes;

/// Write the per-element squared magnitude `re² + im²` of `samples`.
///
/// The output must hold at least as many elements as the input (asserted); a
/// longer output is only partially written. Returns the written prefix.
pub fn norm<'a, T>(samples: &[Complex<T>], norms: &'a mut [T]) -> &'a mut [T]
where
    T: ComplexLanes<8> + ComplexLanes<4>,
{
    assert!(samples.len() <= norms.len());

    let num_samples = samples.len();
    let mut i = 0;

    if ComplexVector::<T, 8>::IS_VECTORIZED {
        let num_aligned = num_samples & !7;
        while i < num_aligned {
            let samples8 = ComplexVector::<T, 8>::load(&samples[i..]);
            samples8.norm().store(&mut norms[i..]);
            i += 8;
        }
    }

    if ComplexVector::<T, 4>::IS_VECTORIZED {
        let num_aligned = num_samples & !3;
        while i < num_aligned {
            let samples4 = ComplexVector::<T, 4>::load(&samples[i..]);
            samples4.norm().store(&mut norms[i..]);
            i += 4;
        }
    }

    while i < num_samples {
        norms[i] = samples[i].norm();
        i += 1;
    }

    &mut norms[..num_samples]
}
