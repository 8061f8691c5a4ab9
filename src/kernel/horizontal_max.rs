//! Maximum element of a span.

use crate::math::Real;
use crate::vector::float::FloatVector;
use crate::vector::lanes::FloatLanes;

/// Maximum value in a non-empty span (asserted non-empty).
///
/// Opens four accumulator registers seeded from the first sample, reduces
/// them at the end, and finishes with a scalar tail; permutation invariant
/// up to floating point max semantics.
pub fn horizontal_max<T>(samples: &[T]) -> T
where
    T: FloatLanes<4>,
{
    assert!(!samples.is_empty());

    let num_samples = samples.len();
    let mut output = samples[0];
    let mut i = 0;

    if FloatVector::<T, 4>::IS_VECTORIZED {
        let seed = FloatVector::<T, 4>::splat(samples[0]);
        let mut output4_1 = seed;
        let mut output4_2 = seed;
        let mut output4_3 = seed;
        let mut output4_4 = seed;

        let num_aligned = num_samples & !15;
        while i < num_aligned {
            output4_1 = output4_1.max(FloatVector::<T, 4>::load(&samples[i..]));
            output4_2 = output4_2.max(FloatVector::<T, 4>::load(&samples[i + 4..]));
            output4_3 = output4_3.max(FloatVector::<T, 4>::load(&samples[i + 8..]));
            output4_4 = output4_4.max(FloatVector::<T, 4>::load(&samples[i + 12..]));

            i += 16;
        }

        output = Real::max(
            output,
            output4_1
                .max(output4_2)
                .max(output4_3.max(output4_4))
                .horizontal_max(),
        );

        let num_aligned = num_samples & !3;
        let mut output4 = seed;
        while i < num_aligned {
            output4 = output4.max(FloatVector::<T, 4>::load(&samples[i..]));
            i += 4;
        }

        output = Real::max(output, output4.horizontal_max());
    }

    while i < num_samples {
        output = Real::max(output, samples[i]);
        i += 1;
    }

    output
}
