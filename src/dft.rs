//! Partial discrete Fourier transform by the Goertzel algorithm.
//!
//! The Goertzel algorithm evaluates a single DFT bin with an order-2 IIR
//! recurrence in O(N) time and O(1) state, which beats a full FFT when only
//! a few bins are needed. Complex input decomposes linearly into real and
//! imaginary parts, so the recurrence runs on complex state directly.
//!
//! Fractional bin indices are supported through the final phase correction
//! twist.

use num_traits::Zero;

use crate::complex::Complex;
use crate::math::Real;
use crate::vector::complex::ComplexVector;
use crate::vector::float::FloatVector;
use crate::vector::lanes::ComplexLanes;
use crate::vector::unroll::unroll;

/// Value of DFT bin `k` by the direct transform sum, normalized by the
/// sample count. A reference implementation for the Goertzel variants.
pub fn calculate_dft_bin_naive<T: Real>(samples: &[Complex<T>], k: i32) -> Complex<T> {
    let num_samples = T::from_f32(samples.len() as f32);
    let alpha = T::from_f32(k as f32) / num_samples;
    let minus_two_pi = T::from_f32(-2.0 * std::f32::consts::PI);

    let mut sum = Complex::zero();
    for (n, &sample) in samples.iter().enumerate() {
        let phase = minus_two_pi * alpha * T::from_f32(n as f32);
        sum += sample * Complex::exp_j(phase);
    }

    sum / num_samples
}

/// Value of DFT bin `k` by the Goertzel recurrence, normalized by the
/// sample count. The bin index may be fractional.
pub fn calculate_dft_bin_goertzel<T: Real>(samples: &[Complex<T>], k: T) -> Complex<T> {
    let num_samples = T::from_f32(samples.len() as f32);
    let two_pi = T::from_f32(2.0 * std::f32::consts::PI);

    let w = two_pi * k / num_samples;
    let cw = w.cos();
    let sw = w.sin();
    let coeff = T::from_f32(2.0) * cw;

    // The IIR filter over complex state.
    let mut s_prev = Complex::<T>::zero();
    let mut s_prev2 = Complex::<T>::zero();
    for &sample in samples {
        let s = sample + s_prev * coeff - s_prev2;
        s_prev2 = s_prev;
        s_prev = s;
    }

    // In-phase and quadrature terms of the single-bin transform.
    let it = s_prev * cw - s_prev2;
    let qt = s_prev * sw;

    // Phase correction for a non-integer bin index.
    let w2 = two_pi * k;
    let cw2 = w2.cos();
    let sw2 = w2.sin();
    let i_term = it * cw2 + qt * sw2;
    let q_term = qt * cw2 - it * sw2;

    Complex::new(i_term.re - q_term.im, i_term.im + q_term.re) / num_samples
}

/// Goertzel over `K` registers of `N` bins each, all bins advancing through
/// the sample stream together.
fn goertzel_lanes<T, const K: usize, const N: usize>(
    samples: &[Complex<T>],
    k: &[FloatVector<T, N>; K],
    dft: &mut [Complex<T>],
) where
    T: ComplexLanes<N>,
{
    let two_pi = FloatVector::<T, N>::splat(T::from_f32(2.0 * std::f32::consts::PI));

    let num_samples_inv = T::one() / T::from_f32(samples.len() as f32);
    let num_samples_inv_v = FloatVector::<T, N>::splat(num_samples_inv);

    let zero_v = FloatVector::<T, N>::splat(T::zero());
    let zero_c = ComplexVector::<T, N>::splat(Complex::zero());

    let mut sw = [zero_v; K];
    let mut cw = [zero_v; K];
    let mut coeff = [zero_v; K];
    unroll::<K>(|i| {
        let w = two_pi * k[i] * num_samples_inv_v;
        let (sin, cos) = w.sin_cos();
        sw[i] = sin;
        cw[i] = cos;
        coeff[i] = cos * T::from_f32(2.0);
    });

    let mut s_prev = [zero_c; K];
    let mut s_prev2 = [zero_c; K];
    for &sample in samples {
        let x = ComplexVector::<T, N>::splat(sample);
        unroll::<K>(|i| {
            let s = x.multiply_add(s_prev[i], coeff[i]) - s_prev2[i];
            s_prev2[i] = s_prev[i];
            s_prev[i] = s;
        });
    }

    unroll::<K>(|i| {
        let it = s_prev[i] * cw[i] - s_prev2[i];
        let qt = s_prev[i] * sw[i];

        // Phase correction for non-integer bin indices.
        let w2 = two_pi * k[i];
        let (sw2, cw2) = w2.sin_cos();
        let i_term = it * cw2 + qt * sw2;
        let q_term = qt * cw2 - it * sw2;

        let result_re = (i_term.extract_real() - q_term.extract_imag()) * num_samples_inv_v;
        let result_im = (i_term.extract_imag() + q_term.extract_real()) * num_samples_inv_v;

        ComplexVector::<T, N>::from_parts(result_re, result_im).store(&mut dft[i * N..]);
    });
}

/// Value of every DFT bin listed in `bins`, written to the corresponding
/// elements of `dft_storage`.
///
/// The bins peel into blocks of 16, 8 and 4 concurrent lanes before a
/// scalar tail. Even where the 8-lane registers are compositions, the wider
/// blocks keep more independent recurrences in flight per pass over the
/// samples.
///
/// The storage must hold at least as many elements as there are bins
/// (asserted); a longer storage is only partially written. Returns the
/// written prefix.
pub fn calculate_multiple_dft_bins_goertzel<'a, T>(
    samples: &[Complex<T>],
    bins: &[T],
    dft_storage: &'a mut [Complex<T>],
) -> &'a mut [Complex<T>]
where
    T: ComplexLanes<8> + ComplexLanes<4>,
{
    assert!(bins.len() <= dft_storage.len());

    let num_bins = bins.len();
    let mut i = 0;

    // Handle 16 bins at a time.
    let num_aligned = num_bins & !15;
    while i < num_aligned {
        let k = [
            FloatVector::<T, 8>::load(&bins[i..]),
            FloatVector::<T, 8>::load(&bins[i + 8..]),
        ];
        goertzel_lanes::<T, 2, 8>(samples, &k, &mut dft_storage[i..]);
        i += 16;
    }

    // Handle 8 bins at a time.
    let num_aligned = num_bins & !7;
    while i < num_aligned {
        let k = [FloatVector::<T, 8>::load(&bins[i..])];
        goertzel_lanes::<T, 1, 8>(samples, &k, &mut dft_storage[i..]);
        i += 8;
    }

    // Handle 4 bins at a time.
    let num_aligned = num_bins & !3;
    while i < num_aligned {
        let k = [FloatVector::<T, 4>::load(&bins[i..])];
        goertzel_lanes::<T, 1, 4>(samples, &k, &mut dft_storage[i..]);
        i += 4;
    }

    while i < num_bins {
        dft_storage[i] = calculate_dft_bin_goertzel(samples, bins[i]);
        i += 1;
    }

    &mut dft_storage[..num_bins]
}
