//! Rotate samples at a fixed phase rate, starting from a given phase.
//!
//! A rotator multiplies every input sample by a running complex phase,
//! shifting the signal's spectrum. If a quadrature signal oscillates at
//! 100 Hz, a 200 Hz rotator makes the output oscillate at 300 Hz.

use num_traits::{One, Zero};

use crate::complex::Complex;
use crate::vector::complex::ComplexVector;
use crate::vector::lanes::ComplexLanes;
use crate::vector::unroll::unroll;

/// Rotate `samples` by an ever-advancing phase.
///
/// On entry `phase` is the rotation applied to the first sample; on exit it
/// holds the rotation that would apply to the next unseen sample,
/// renormalized to unit magnitude to keep drift bounded over repeated calls.
/// `phase_increment_per_sample` is the per-sample rotation, normally a unit
/// complex number `e^(jΔω)`.
///
/// The output must hold at least as many elements as the input (asserted); a
/// longer output is only partially written. Returns the written prefix.
pub fn rotator<'a, T>(
    samples: &[Complex<T>],
    phase: &mut Complex<T>,
    phase_increment_per_sample: Complex<T>,
    output: &'a mut [Complex<T>],
) -> &'a mut [Complex<T>]
where
    T: ComplexLanes<8> + ComplexLanes<4>,
{
    assert!(samples.len() <= output.len());

    let num_samples = samples.len();
    let mut i = 0;

    if ComplexVector::<T, 8>::IS_VECTORIZED {
        // Stagger eight phases, each one per-sample increment ahead of the
        // previous lane, then advance all of them by the 8-sample increment
        // per iteration.
        let mut phases = [Complex::<T>::zero(); 8];
        let mut lane_increment = Complex::<T>::one();
        unroll::<8>(|lane| {
            phases[lane] = *phase * lane_increment;
            lane_increment = lane_increment * phase_increment_per_sample;
        });

        let phase_increment8 = ComplexVector::<T, 8>::splat(lane_increment);
        let mut phase8 = ComplexVector::<T, 8>::from_array(phases);

        let num_aligned = num_samples & !7;
        while i < num_aligned {
            let samples8 = ComplexVector::<T, 8>::load(&samples[i..]);
            (samples8 * phase8).store(&mut output[i..]);

            phase8 = phase8 * phase_increment8;
            i += 8;
        }

        // The lowest lane is the rotation for the next unprocessed sample.
        *phase = phase8.extract(0);
    }

    if ComplexVector::<T, 4>::IS_VECTORIZED {
        let mut phases = [Complex::<T>::zero(); 4];
        let mut lane_increment = Complex::<T>::one();
        unroll::<4>(|lane| {
            phases[lane] = *phase * lane_increment;
            lane_increment = lane_increment * phase_increment_per_sample;
        });

        let phase_increment4 = ComplexVector::<T, 4>::splat(lane_increment);
        let mut phase4 = ComplexVector::<T, 4>::from_array(phases);

        let num_aligned = num_samples & !3;
        while i < num_aligned {
            let samples4 = ComplexVector::<T, 4>::load(&samples[i..]);
            (samples4 * phase4).store(&mut output[i..]);

            phase4 = phase4 * phase_increment4;
            i += 4;
        }

        *phase = phase4.extract(0);
    }

    while i < num_samples {
        output[i] = samples[i] * *phase;

        // e^(j·w·(t+1)) = e^(j·w·t) · e^(j·w)
        *phase = *phase * phase_increment_per_sample;
        i += 1;
    }

    // Keep the accumulated phase on the unit circle.
    *phase = *phase / phase.abs();

    &mut output[..num_samples]
}
