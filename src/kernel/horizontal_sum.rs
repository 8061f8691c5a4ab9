//! Sum of all elements of a span.

use crate::vector::float::FloatVector;
use crate::vector::lanes::FloatLanes;

/// Total of a non-empty span (asserted non-empty).
///
/// Opens four accumulator registers seeded with zero, reduces them at the
/// end, and finishes with a scalar tail. The result differs from a strict
/// left-to-right sum by at most ordinary floating point reassociation
/// error.
pub fn horizontal_sum<T>(samples: &[T]) -> T
where
    T: FloatLanes<4>,
{
    assert!(!samples.is_empty());

    let num_samples = samples.len();
    let mut output = T::zero();
    let mut i = 0;

    if FloatVector::<T, 4>::IS_VECTORIZED {
        let mut output4_1 = FloatVector::<T, 4>::splat(T::zero());
        let mut output4_2 = FloatVector::<T, 4>::splat(T::zero());
        let mut output4_3 = FloatVector::<T, 4>::splat(T::zero());
        let mut output4_4 = FloatVector::<T, 4>::splat(T::zero());

        let num_aligned = num_samples & !15;
        while i < num_aligned {
            output4_1 += FloatVector::<T, 4>::load(&samples[i..]);
            output4_2 += FloatVector::<T, 4>::load(&samples[i + 4..]);
            output4_3 += FloatVector::<T, 4>::load(&samples[i + 8..]);
            output4_4 += FloatVector::<T, 4>::load(&samples[i + 12..]);

            i += 16;
        }

        output += output4_1.horizontal_sum();
        output += output4_2.horizontal_sum();
        output += output4_3.horizontal_sum();
        output += output4_4.horizontal_sum();

        let num_aligned = num_samples & !3;
        let mut output4 = FloatVector::<T, 4>::splat(T::zero());
        while i < num_aligned {
            output4 += FloatVector::<T, 4>::load(&samples[i..]);
            i += 4;
        }

        output += output4.horizontal_sum();
    }

    while i < num_samples {
        output += samples[i];
        i += 1;
    }

    output
}
