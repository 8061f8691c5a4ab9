//! Per-element absolute value of an input signal.

use crate::complex::Complex;
use crate::half::Half;
use crate::math::Real;
use crate::vector::complex::ComplexVector;
use crate::vector::lanes::ComplexLanes;

/// Sample type accepted by [`abs`] and [`fast_abs`].
pub trait AbsSamples: Copy {
    /// Element type of the magnitude output.
    type Output: Copy;

    #[doc(hidden)]
    fn abs_kernel<'a>(
        samples: &[Self],
        absolute_values: &'a mut [Self::Output],
    ) -> &'a mut [Self::Output];

    #[doc(hidden)]
    fn fast_abs_kernel<'a>(
        samples: &[Self],
        absolute_values: &'a mut [Self::Output],
    ) -> &'a mut [Self::Output];
}

/// Write the per-element absolute value of `samples`.
///
/// The output must hold at least as many elements as the input (asserted); a
/// longer output is only partially written. Returns the written prefix.
#[inline]
pub fn abs<'a, T: AbsSamples>(
    samples: &[T],
    absolute_values: &'a mut [T::Output],
) -> &'a mut [T::Output] {
    T::abs_kernel(samples, absolute_values)
}

/// Same as [`abs`], trading accuracy for speed where the backend can.
///
/// See [`ComplexVector::fast_abs`] for the committed error bound.
#[inline]
pub fn fast_abs<'a, T: AbsSamples>(
    samples: &[T],
    absolute_values: &'a mut [T::Output],
) -> &'a mut [T::Output] {
    T::fast_abs_kernel(samples, absolute_values)
}

fn complex_abs_impl<'a, T>(
    samples: &[Complex<T>],
    absolute_values: &'a mut [T],
    fast: bool,
) -> &'a mut [T]
where
    T: ComplexLanes<8> + ComplexLanes<4>,
{
    assert!(samples.len() <= absolute_values.len());

    let num_samples = samples.len();
    let mut i = 0;

    if ComplexVector::<T, 8>::IS_VECTORIZED {
        let num_aligned = num_samples & !7;
        while i < num_aligned {
            let samples8 = ComplexVector::<T, 8>::load(&samples[i..]);
            let abs8 = if fast {
                samples8.fast_abs()
            } else {
                samples8.abs()
            };
            abs8.store(&mut absolute_values[i..]);
            i += 8;
        }
    }

    if ComplexVector::<T, 4>::IS_VECTORIZED {
        let num_aligned = num_samples & !3;
        while i < num_aligned {
            let samples4 = ComplexVector::<T, 4>::load(&samples[i..]);
            let abs4 = if fast {
                samples4.fast_abs()
            } else {
                samples4.abs()
            };
            abs4.store(&mut absolute_values[i..]);
            i += 4;
        }
    }

    while i < num_samples {
        absolute_values[i] = if fast {
            samples[i].fast_abs()
        } else {
            samples[i].abs()
        };
        i += 1;
    }

    &mut absolute_values[..num_samples]
}

fn real_abs_impl<'a, T: Real>(samples: &[T], absolute_values: &'a mut [T]) -> &'a mut [T] {
    assert!(samples.len() <= absolute_values.len());

    let num_samples = samples.len();
    for (value, sample) in absolute_values.iter_mut().zip(samples) {
        *value = sample.abs();
    }

    &mut absolute_values[..num_samples]
}

macro_rules! complex_abs_samples {
    ($scalar:ty) => {
        impl AbsSamples for Complex<$scalar> {
            type Output = $scalar;

            fn abs_kernel<'a>(
                samples: &[Self],
                absolute_values: &'a mut [$scalar],
            ) -> &'a mut [$scalar] {
                complex_abs_impl(samples, absolute_values, false)
            }

            fn fast_abs_kernel<'a>(
                samples: &[Self],
                absolute_values: &'a mut [$scalar],
            ) -> &'a mut [$scalar] {
                complex_abs_impl(samples, absolute_values, true)
            }
        }
    };
}

macro_rules! real_abs_samples {
    ($scalar:ty) => {
        impl AbsSamples for $scalar {
            type Output = $scalar;

            fn abs_kernel<'a>(
                samples: &[Self],
                absolute_values: &'a mut [$scalar],
            ) -> &'a mut [$scalar] {
                real_abs_impl(samples, absolute_values)
            }

            fn fast_abs_kernel<'a>(
                samples: &[Self],
                absolute_values: &'a mut [$scalar],
            ) -> &'a mut [$scalar] {
                real_abs_impl(samples, absolute_values)
            }
        }
    };
}

complex_abs_samples!(f32);
complex_abs_samples!(Half);
real_abs_samples!(f32);
real_abs_samples!(Half);
