use sigvec::dft;
use sigvec::{Complex, Complex32};

fn assert_near(a: f32, b: f32, tolerance: f32) {
    assert!(
        (a - b).abs() <= tolerance,
        "{a} is not within {tolerance} of {b}"
    );
}

fn tone(num_samples: usize, bin: f32) -> Vec<Complex32> {
    (0..num_samples)
        .map(|n| Complex::exp_j(2.0 * std::f32::consts::PI * bin * n as f32 / num_samples as f32))
        .collect()
}

#[test]
fn goertzel_matches_naive_dft() {
    // A mix of two tones plus a ramp keeps every bin non-trivial.
    let samples: Vec<Complex32> = (0..24)
        .map(|n| {
            let phase = n as f32 * 0.7;
            Complex::exp_j(phase) + Complex::exp_j(-2.1 * phase) * 0.5 + n as f32 * 0.01
        })
        .collect();

    for k in 0..12 {
        let naive = dft::calculate_dft_bin_naive(&samples, k);
        let goertzel = dft::calculate_dft_bin_goertzel(&samples, k as f32);

        assert_near(goertzel.re, naive.re, 1e-4);
        assert_near(goertzel.im, naive.im, 1e-4);
    }
}

#[test]
fn goertzel_pure_tone_bins() {
    let num_samples = 16;
    let tone_bin = 3;
    let samples = tone(num_samples, tone_bin as f32);

    let bins: Vec<f32> = (0..num_samples / 2).map(|k| k as f32).collect();
    let mut dft_storage = vec![Complex32::new(0.0, 0.0); bins.len()];

    let written = dft::calculate_multiple_dft_bins_goertzel(&samples, &bins, &mut dft_storage);
    assert_eq!(written.len(), bins.len());

    for (k, value) in written.iter().enumerate() {
        let magnitude = value.abs();
        if k == tone_bin {
            assert_near(magnitude, 1.0, 1e-5);
        } else {
            assert!(magnitude <= 1e-5, "bin {k} leaked {magnitude}");
        }
    }
}

#[test]
fn goertzel_fractional_bin() {
    let num_samples = 16;
    let samples = tone(num_samples, 2.5);

    // Sampling the spectrum exactly on the fractional tone recovers it at
    // full scale; the correction twist handles the non-integer index.
    let value = dft::calculate_dft_bin_goertzel(&samples, 2.5f32);
    assert_near(value.abs(), 1.0, 1e-3);
}

#[test]
fn multiple_bins_match_single_bin_goertzel() {
    // 23 bins: one 16-block, one 4-block and a 3-bin tail.
    let samples: Vec<Complex32> = (0..32)
        .map(|n| Complex::exp_j(n as f32 * 0.45) + Complex::exp_j(n as f32 * -1.2) * 0.3)
        .collect();

    let bins: Vec<f32> = (0..23).map(|k| k as f32 * 0.5).collect();
    let mut dft_storage = vec![Complex32::new(0.0, 0.0); 32];

    let written = dft::calculate_multiple_dft_bins_goertzel(&samples, &bins, &mut dft_storage);
    assert_eq!(written.len(), 23);

    for (&bin, value) in bins.iter().zip(written.iter()) {
        let single = dft::calculate_dft_bin_goertzel(&samples, bin);
        assert_near(value.re, single.re, 1e-4);
        assert_near(value.im, single.im, 1e-4);
    }
}

#[test]
fn naive_dft_recovers_tone_amplitude() {
    let samples = tone(20, 4.0);

    let at_tone = dft::calculate_dft_bin_naive(&samples, 4);
    assert_near(at_tone.abs(), 1.0, 1e-5);

    let away_from_tone = dft::calculate_dft_bin_naive(&samples, 7);
    assert!(away_from_tone.abs() <= 1e-5);
}
