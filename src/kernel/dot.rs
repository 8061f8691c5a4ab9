//! Dot product of two signals.
//!
//! Equivalent to `numpy.dot(f, g)`: the sum over `f[i] · g[i]`. The result
//! type is the type of that product, which covers real-by-real and
//! complex-by-real signals at both precisions.
//!
//! The vectorized path opens the widest body into multiple accumulator
//! registers to keep the multiply pipeline full, and reduces them at the
//! end. Reduction order across accumulators differs from a strict
//! left-to-right scalar sum; the difference is bounded by ordinary floating
//! point reassociation error.

use crate::complex::Complex;
use crate::half::Half;
use crate::vector::complex::ComplexVector;
use crate::vector::float::FloatVector;
use crate::vector::lanes::{ComplexLanes, FloatLanes};

/// Pair of sample types accepted by [`dot`] and
/// [`dot_flip_g`](super::dot_flip::dot_flip_g).
pub trait DotSamples<G: Copy>: Copy {
    /// Type of `Self · G`, and therefore of the accumulated result.
    type Output;

    #[doc(hidden)]
    fn dot_kernel(f: &[Self], g: &[G]) -> Self::Output;

    #[doc(hidden)]
    fn dot_flip_kernel(f: &[Self], g: &[G]) -> Self::Output;
}

/// Dot product `Σ f[i]·g[i]`.
///
/// Both slices must have the same length (asserted).
#[inline]
pub fn dot<F: DotSamples<G>, G: Copy>(f: &[F], g: &[G]) -> F::Output {
    F::dot_kernel(f, g)
}

pub(super) fn real_dot_impl<T>(f: &[T], g: &[T]) -> T
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

            let g4_1 = FloatVector::<T, 4>::load(&g[i..]);
            let g4_2 = FloatVector::<T, 4>::load(&g[i + 4..]);
            let g4_3 = FloatVector::<T, 4>::load(&g[i + 8..]);
            let g4_4 = FloatVector::<T, 4>::load(&g[i + 12..]);

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
            let g4 = FloatVector::<T, 4>::load(&g[i..]);

            i += 4;

            output4 = output4.multiply_add(f4, g4);
        }

        output += output4.horizontal_sum();
    }

    while i < num_samples {
        output += f[i] * g[i];
        i += 1;
    }

    output
}

pub(super) fn complex_dot_impl<T>(f: &[Complex<T>], g: &[T]) -> Complex<T>
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

            let g4_1 = FloatVector::<T, 4>::load(&g[i..]);
            let g4_2 = FloatVector::<T, 4>::load(&g[i + 4..]);

            i += 8;

            output4_1 = output4_1.multiply_add(f4_1, g4_1);
            output4_2 = output4_2.multiply_add(f4_2, g4_2);
        }

        output += (output4_1 + output4_2).horizontal_sum();

        let num_aligned = num_samples & !3;
        let mut output4 = ComplexVector::<T, 4>::splat(zero);
        while i < num_aligned {
            let f4 = ComplexVector::<T, 4>::load(&f[i..]);
            let g4 = FloatVector::<T, 4>::load(&g[i..]);

            i += 4;

            output4 = output4.multiply_add(f4, g4);
        }

        output += output4.horizontal_sum();
    }

    while i < num_samples {
        output += f[i] * g[i];
        i += 1;
    }

    output
}

impl DotSamples<f32> for f32 {
    type Output = f32;

    fn dot_kernel(f: &[f32], g: &[f32]) -> f32 {
        real_dot_impl(f, g)
    }

    fn dot_flip_kernel(f: &[f32], g: &[f32]) -> f32 {
        super::dot_flip::real_dot_flip_impl(f, g)
    }
}

impl DotSamples<Half> for Half {
    type Output = Half;

    fn dot_kernel(f: &[Half], g: &[Half]) -> Half {
        real_dot_impl(f, g)
    }

    fn dot_flip_kernel(f: &[Half], g: &[Half]) -> Half {
        super::dot_flip::real_dot_flip_impl(f, g)
    }
}

impl DotSamples<f32> for Complex<f32> {
    type Output = Complex<f32>;

    fn dot_kernel(f: &[Complex<f32>], g: &[f32]) -> Complex<f32> {
        complex_dot_impl(f, g)
    }

    fn dot_flip_kernel(f: &[Complex<f32>], g: &[f32]) -> Complex<f32> {
        super::dot_flip::complex_dot_flip_impl(f, g)
    }
}

impl DotSamples<Half> for Complex<Half> {
    type Output = Complex<Half>;

    fn dot_kernel(f: &[Complex<Half>], g: &[Half]) -> Complex<Half> {
        complex_dot_impl(f, g)
    }

    fn dot_flip_kernel(f: &[Complex<Half>], g: &[Half]) -> Complex<Half> {
        super::dot_flip::complex_dot_flip_impl(f, g)
    }
}
