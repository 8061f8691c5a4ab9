//! Per-point peak tracker with asymmetric attack and release.

use crate::math::{lerp, Real};

/// Track a per-point peak of `samples` in the caller-owned `peak` buffer.
///
/// Every point moves towards its sample by the `attack` factor when the
/// sample exceeds the tracked peak and by the `release` factor otherwise:
/// `peak[i] = lerp(peak[i], samples[i], attack or release)`. The peak
/// buffer doubles as the detector state across calls.
///
/// The peak buffer must hold at least as many elements as the input
/// (asserted); a longer buffer is only partially updated. Returns the
/// updated prefix.
pub fn per_point_lerp_peak_detector<'a, T: Real>(
    samples: &[T],
    peak: &'a mut [T],
    attack: T,
    release: T,
) -> &'a mut [T] {
    assert!(samples.len() <= peak.len());

    let num_samples = samples.len();
    for (tracked, &sample) in peak[..num_samples].iter_mut().zip(samples) {
        let factor = if sample > *tracked { attack } else { release };
        *tracked = lerp(*tracked, sample, factor);
    }

    &mut peak[..num_samples]
}
