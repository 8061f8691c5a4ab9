//! Dot product of two signals with an implicit flip of the second one.
//!
//! Equivalent to `numpy.dot(f, numpy.flip(g))`: the sum over
//! `f[i] · g[N−1−i]`. The vectorized path reads `g` backwards in
//! register-sized strides and reverses each loaded register, so the
//! recurrence matches the plain [`dot`](super::dot::dot) of flipped inputs
//! up to multiply-add reassociation.

use crate::complex::Complex;
use crate::vector::complex::ComplexVector;
use crate::vector::float::FloatVector;
use crate::vector::lanes::{ComplexLanes, FloatLanes};

use super::dot::DotSamples;

/// Flipped dot product `Σ f[i]·g[N−1−i]`.
///
/// Both slices must have the same length (asserted).
#[inline]
pub fn dot_flip_g<F: DotSamples<G>, G: Copy>(f: &[F], g: &[G]) -> F::Output {
    F::dot_flip_kernel(f, g)
}

pub(super) fn real_dot_flip_impl<T>(f: &[T], g: &[T]) -> T
where
    T: FloatLanes<4>,
{
    assert_eq!(f.len(), g.len());

    let num_samples = f.len();
    let mut output = T::zero();
    let mut i = 0;

    if FloatVector::<T, 4>::IS_VECTORIZED {
        // Four accumulators keep the multiply pipeline busy.
        let mut output4_1 = FloatVector::<T, 4>::splat(T::zero());
        let mut output4_2 = FloatVector::<T, 4>::splat(T::zero());
        let mut output4_3 = FloatVector::<T, 4>::splat(T::zero());
        let mut output4_4 = FloatVector::<T, 4>::splat(T::zero());

        let num_aligned = num_samples & !15;
        while i < num_aligned {
            let f4_1 = FloatVector::<T, 4>::load(&f[i..]);
            let f4_2 = FloatVector::<T, 4>::load(&f[i + 4..]);
            let f4_3 = FloatVector::<T, 4>::load(&f[i + 8..]);
            let f4_4 = FloatVector::<T, 4>::load(&f[i + 12..]);

            let flipped = num_samples - i;
            let g4_1 = FloatVector::<T, 4>::load(&g[flipped - 4..]).reverse();
            let g4_2 = FloatVector::<T, 4>::load(&g[flipped - 8..]).reverse();
            let g4_3 = FloatVector::<T, 4>::load(&g[flipped - 12..]).reverse();
            let g4_4 = FloatVector::<T, 4>::load(&g[flipped - 16..]).reverse();

            i += 16;

            output4_1 = output4_1.multiply_add(f4_1, g4_1);
            output4_2 = output4_2.multiply_add(f4_2, g4_2);
            output4_3 = output4_3.multiply_add(f4_3, g4_3);
            output4_4 = output4_4.multiply_add(f4_4, g4_4);
        }

        output += ((output4_1 + output4_2) + (output4_3 + output4_4)).horizontal_sum();

        let num_aligned = num_samples & !3;
        let mut output4 = FloatVector::<T, 4>::splat(T::zero());
        while i < num_aligned {
            let f4 = FloatVector::<T, 4>::load(&f[i..]);
            let g4 = FloatVector::<T, 4>::load(&g[num_samples - i - 4..]).reverse();

            i += 4;

            output4 = output4.multiply_add(f4, g4);
        }

        output += output4.horizontal_sum();
    }

    while i < num_samples {
        output += f[i] * g[num_samples - i - 1];
        i += 1;
    }

    output
}

pub(super) fn complex_dot_flip_impl<T>(f: &[Complex<T>], g: &[T]) -> Complex<T>
where
    T: ComplexLanes<4>,
{
    assert_eq!(f.len(), g.len());

    let num_samples = f.len();
    let mut output = Complex::new(T::zero(), T::zero());
    let mut i = 0;

    if ComplexVector::<T, 4>::IS_VECTORIZED {
        // Two accumulators; complex lanes already use two planes each.
        let zero = Complex::new(T::zero(), T::zero());
        let mut output4_1 = ComplexVector::<T, 4>::splat(zero);
        let mut output4_2 = ComplexVector::<T, 4>::splat(zero);

        let num_aligned = num_samples & !7;
        while i < num_aligned {
            let f4_1 = ComplexVector::<T, 4>::load(&f[i..]);
            let f4_2 = ComplexVector::<T, 4>::load(&f[i + 4..]);

            let flipped = num_samples - i;
            let g4_1 = FloatVector::<T, 4>::load(&g[flipped - 4..]).reverse();
            let g4_2 = FloatVector::<T, 4>::load(&g[flipped - 8..]).reverse();

            i += 8;

            output4_1 = output4_1.multiply_add(f4_1, g4_1);
            output4_2 = output4_2.multiply_add(f4_2, g4_2);
        }

        output += (output4_1 + output4_2).horizontal_sum();

        let num_aligned = num_samples & !3;
        let mut output4 = ComplexVector::<T, 4>::splat(zero);
        while i < num_aligned {
            let f4 = ComplexVector::<T, 4>::load(&f[i..]);
            let g4 = FloatVector::<T, 4>::load(&g[num_samples - i - 4..]).reverse();

            i += 4;

            output4 = output4.multiply_add(f4, g4);
        }

        output += output4.horizontal_sum();
    }

    while i < num_samples {
        output += f[i] * g[num_samples - i - 1];
        i += 1;
    }

    output
}
