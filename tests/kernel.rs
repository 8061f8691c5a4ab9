use sigvec::kernel;
use sigvec::{Complex, Complex32, Half, HalfComplex};

fn assert_near(a: f32, b: f32, tolerance: f32) {
    assert!(
        (a - b).abs() <= tolerance,
        "{a} is not within {tolerance} of {b}"
    );
}

// Deterministic sequences long enough to give every vectorized loop and the
// scalar tails multiple iterations.
//
// >>> import numpy
// >>> from numpy.random import RandomState
// >>> num_samples = 32+32 + 16+16 + 8+8 + 4+4 + 3+3
// >>> prng = RandomState(0xdeadbeef)

// >>> a = prng.randint(0, 7, num_samples)
const DOT_A: [f32; 126] = [
    5.0, 0.0, 6.0, 1.0, 4.0, 1.0, 2.0, 1.0, 2.0, 5.0, 2.0, 5.0, 1.0, 1.0, 4.0, 4.0, 2.0,
    1.0, 1.0, 0.0, 3.0, 2.0, 5.0, 4.0, 1.0, 0.0, 2.0, 2.0, 0.0, 0.0, 3.0, 4.0, 0.0, 4.0,
    4.0, 0.0, 2.0, 1.0, 5.0, 1.0, 2.0, 3.0, 1.0, 1.0, 3.0, 6.0, 1.0, 2.0, 3.0, 0.0, 1.0,
    3.0, 4.0, 4.0, 6.0, 3.0, 3.0, 1.0, 5.0, 5.0, 2.0, 2.0, 5.0, 6.0, 3.0, 4.0, 2.0, 1.0,
    1.0, 3.0, 4.0, 5.0, 0.0, 3.0, 2.0, 1.0, 5.0, 2.0, 4.0, 5.0, 1.0, 3.0, 0.0, 0.0, 2.0,
    2.0, 4.0, 2.0, 1.0, 5.0, 4.0, 6.0, 4.0, 4.0, 5.0, 1.0, 4.0, 2.0, 0.0, 4.0, 5.0, 2.0,
    3.0, 4.0, 0.0, 6.0, 6.0, 5.0, 1.0, 6.0, 2.0, 6.0, 6.0, 5.0, 1.0, 2.0, 0.0, 0.0, 6.0,
    3.0, 6.0, 5.0, 3.0, 4.0, 2.0, 2.0,
];

// >>> b = prng.randint(0, 7, num_samples)
const DOT_B: [f32; 126] = [
    4.0, 6.0, 4.0, 4.0, 1.0, 6.0, 5.0, 0.0, 4.0, 4.0, 2.0, 3.0, 5.0, 4.0, 3.0, 6.0, 4.0,
    2.0, 3.0, 1.0, 3.0, 4.0, 1.0, 5.0, 2.0, 3.0, 3.0, 0.0, 1.0, 3.0, 2.0, 4.0, 5.0, 3.0,
    3.0, 6.0, 5.0, 3.0, 6.0, 3.0, 1.0, 0.0, 5.0, 5.0, 3.0, 1.0, 3.0, 1.0, 1.0, 6.0, 0.0,
    4.0, 1.0, 5.0, 6.0, 6.0, 2.0, 4.0, 6.0, 5.0, 0.0, 1.0, 5.0, 0.0, 4.0, 4.0, 2.0, 1.0,
    1.0, 2.0, 6.0, 2.0, 6.0, 5.0, 3.0, 0.0, 5.0, 6.0, 6.0, 5.0, 3.0, 6.0, 5.0, 1.0, 0.0,
    3.0, 1.0, 6.0, 0.0, 4.0, 5.0, 3.0, 1.0, 5.0, 6.0, 1.0, 6.0, 0.0, 1.0, 4.0, 5.0, 6.0,
    0.0, 0.0, 2.0, 1.0, 0.0, 4.0, 4.0, 0.0, 2.0, 6.0, 1.0, 0.0, 5.0, 4.0, 4.0, 3.0, 2.0,
    4.0, 6.0, 1.0, 5.0, 3.0, 6.0, 6.0,
];

// >>> numpy.dot(a, b) == 1151

// >>> a = (prng.randint(0, 7, num_samples) +
// ...      prng.randint(0, 7, num_samples) * 1j)
const COMPLEX_DOT_A: [(f32, f32); 126] = [
    (5.0, 4.0), (0.0, 6.0), (6.0, 4.0), (1.0, 4.0), (4.0, 1.0), (1.0, 6.0),
    (2.0, 5.0), (1.0, 0.0), (2.0, 4.0), (5.0, 4.0), (2.0, 2.0), (5.0, 3.0),
    (1.0, 5.0), (1.0, 4.0), (4.0, 3.0), (4.0, 6.0), (2.0, 4.0), (1.0, 2.0),
    (1.0, 3.0), (0.0, 1.0), (3.0, 3.0), (2.0, 4.0), (5.0, 1.0), (4.0, 5.0),
    (1.0, 2.0), (0.0, 3.0), (2.0, 3.0), (2.0, 0.0), (0.0, 1.0), (0.0, 3.0),
    (3.0, 2.0), (4.0, 4.0), (0.0, 5.0), (4.0, 3.0), (4.0, 3.0), (0.0, 6.0),
    (2.0, 5.0), (1.0, 3.0), (5.0, 6.0), (1.0, 3.0), (2.0, 1.0), (3.0, 0.0),
    (1.0, 5.0), (1.0, 5.0), (3.0, 3.0), (6.0, 1.0), (1.0, 3.0), (2.0, 1.0),
    (3.0, 1.0), (0.0, 6.0), (1.0, 0.0), (3.0, 4.0), (4.0, 1.0), (4.0, 5.0),
    (6.0, 6.0), (3.0, 6.0), (3.0, 2.0), (1.0, 4.0), (5.0, 6.0), (5.0, 5.0),
    (2.0, 0.0), (2.0, 1.0), (5.0, 5.0), (6.0, 0.0), (3.0, 4.0), (4.0, 4.0),
    (2.0, 2.0), (1.0, 1.0), (1.0, 1.0), (3.0, 2.0), (4.0, 6.0), (5.0, 2.0),
    (0.0, 6.0), (3.0, 5.0), (2.0, 3.0), (1.0, 0.0), (5.0, 5.0), (2.0, 6.0),
    (4.0, 6.0), (5.0, 5.0), (1.0, 3.0), (3.0, 6.0), (0.0, 5.0), (0.0, 1.0),
    (2.0, 0.0), (2.0, 3.0), (4.0, 1.0), (2.0, 6.0), (1.0, 0.0), (5.0, 4.0),
    (4.0, 5.0), (6.0, 3.0), (4.0, 1.0), (4.0, 5.0), (5.0, 6.0), (1.0, 1.0),
    (4.0, 6.0), (2.0, 0.0), (0.0, 1.0), (4.0, 4.0), (5.0, 5.0), (2.0, 6.0),
    (3.0, 0.0), (4.0, 0.0), (0.0, 2.0), (6.0, 1.0), (6.0, 0.0), (5.0, 4.0),
    (1.0, 4.0), (6.0, 0.0), (2.0, 2.0), (6.0, 6.0), (6.0, 1.0), (5.0, 0.0),
    (1.0, 5.0), (2.0, 4.0), (0.0, 4.0), (0.0, 3.0), (6.0, 2.0), (3.0, 4.0),
    (6.0, 6.0), (5.0, 1.0), (3.0, 5.0), (4.0, 3.0), (2.0, 6.0), (2.0, 6.0),
];

// >>> b = prng.randint(0, 7, num_samples)
const COMPLEX_DOT_B: [f32; 126] = [
    1.0, 1.0, 3.0, 5.0, 0.0, 1.0, 2.0, 4.0, 5.0, 3.0, 1.0, 2.0, 1.0, 5.0, 5.0, 6.0, 5.0,
    1.0, 6.0, 4.0, 2.0, 0.0, 5.0, 6.0, 3.0, 2.0, 0.0, 2.0, 5.0, 2.0, 2.0, 4.0, 0.0, 1.0,
    1.0, 1.0, 0.0, 0.0, 0.0, 4.0, 6.0, 6.0, 4.0, 2.0, 3.0, 4.0, 0.0, 4.0, 2.0, 0.0, 6.0,
    1.0, 0.0, 2.0, 1.0, 5.0, 0.0, 1.0, 5.0, 3.0, 3.0, 2.0, 1.0, 6.0, 3.0, 2.0, 6.0, 6.0,
    0.0, 0.0, 6.0, 3.0, 2.0, 2.0, 5.0, 6.0, 6.0, 2.0, 5.0, 0.0, 3.0, 3.0, 6.0, 5.0, 3.0,
    5.0, 6.0, 1.0, 6.0, 0.0, 1.0, 0.0, 4.0, 1.0, 4.0, 0.0, 4.0, 5.0, 1.0, 6.0, 4.0, 4.0,
    1.0, 4.0, 4.0, 5.0, 2.0, 1.0, 3.0, 3.0, 0.0, 1.0, 3.0, 2.0, 1.0, 1.0, 4.0, 1.0, 3.0,
    5.0, 2.0, 1.0, 3.0, 3.0, 6.0, 1.0,
];

// >>> numpy.dot(a, b) == (991+1067j)

fn complex_dot_a() -> Vec<Complex32> {
    COMPLEX_DOT_A
        .iter()
        .map(|&(re, im)| Complex::new(re, im))
        .collect()
}

#[test]
fn dot_float_float() {
    let dot = kernel::dot(&DOT_A[..], &DOT_B[..]);
    assert_eq!(dot, 1151.0);
}

#[test]
fn dot_is_commutative_for_real_samples() {
    assert_eq!(
        kernel::dot(&DOT_A[..], &DOT_B[..]),
        kernel::dot(&DOT_B[..], &DOT_A[..])
    );
}

#[test]
fn dot_complex_float() {
    let a = complex_dot_a();
    let dot = kernel::dot(&a, &COMPLEX_DOT_B[..]);
    assert_eq!(dot.re, 991.0);
    assert_eq!(dot.im, 1067.0);
}

#[test]
fn dot_half_half() {
    let a: Vec<Half> = DOT_A.iter().map(|&v| Half::from_f32(v)).collect();
    let b: Vec<Half> = DOT_B.iter().map(|&v| Half::from_f32(v)).collect();

    // Every intermediate value is a small integer, exact in half precision.
    let dot = kernel::dot(&a, &b);
    assert_eq!(dot.to_f32(), 1151.0);
}

#[test]
fn dot_half_complex_half() {
    let a: Vec<HalfComplex> = COMPLEX_DOT_A
        .iter()
        .map(|&(re, im)| Complex::new(Half::from_f32(re), Half::from_f32(im)))
        .collect();
    let b: Vec<Half> = COMPLEX_DOT_B.iter().map(|&v| Half::from_f32(v)).collect();

    let dot = kernel::dot(&a, &b);
    assert_eq!(dot.re.to_f32(), 991.0);
    assert_eq!(dot.im.to_f32(), 1067.0);
}

#[test]
fn dot_flip_matches_reversed_dot() {
    let reversed: Vec<f32> = DOT_B.iter().rev().copied().collect();
    let expected = kernel::dot(&DOT_A[..], &reversed);

    let flipped = kernel::dot_flip_g(&DOT_A[..], &DOT_B[..]);
    assert_eq!(flipped, expected);

    let a = complex_dot_a();
    let reversed: Vec<f32> = COMPLEX_DOT_B.iter().rev().copied().collect();
    let expected = kernel::dot(&a, &reversed);
    let flipped = kernel::dot_flip_g(&a, &COMPLEX_DOT_B[..]);
    assert_eq!(flipped.re, expected.re);
    assert_eq!(flipped.im, expected.im);
}

#[test]
fn abs_complex_magnitudes() {
    let samples = [
        Complex32::new(0.0, 0.0),
        Complex32::new(0.1, 0.0),
        Complex32::new(0.0, 0.1),
        Complex32::new(2.0, 3.0),
        Complex32::new(2.0, -3.0),
        Complex32::new(-2.0, 3.0),
        Complex32::new(0.0, 0.2),
        Complex32::new(0.3, 0.0),
        Complex32::new(2.0, -3.0),
        Complex32::new(-2.0, 3.0),
    ];
    let expected = [
        0.0, 0.1, 0.1, 3.6055513, 3.6055513, 3.6055513, 0.2, 0.3, 3.6055513, 3.6055513,
    ];

    let mut magnitudes = [0.0f32; 10];
    let written = kernel::abs(&samples, &mut magnitudes);

    assert_eq!(written.len(), 10);
    for (&actual, &wanted) in written.iter().zip(&expected) {
        assert_near(actual, wanted, 1e-6);
    }

    // Real input: plain absolute value, symmetric in the sign.
    let mut real_out = [0.0f32; 4];
    kernel::abs(&[-1.5f32, 2.5, -0.0, 4.0], &mut real_out);
    assert_eq!(real_out, [1.5, 2.5, 0.0, 4.0]);
}

#[test]
fn fast_abs_complex_magnitudes() {
    let samples = [
        Complex32::new(0.1, 0.0),
        Complex32::new(0.0, 0.1),
        Complex32::new(2.0, 3.0),
        Complex32::new(2.0, -3.0),
        Complex32::new(-2.0, 3.0),
        Complex32::new(0.0, 0.2),
        Complex32::new(0.3, 0.0),
        Complex32::new(2.0, -3.0),
        Complex32::new(-2.0, 3.0),
        Complex32::new(1.0, 1.0),
    ];

    let mut magnitudes = [0.0f32; 10];
    kernel::fast_abs(&samples, &mut magnitudes);

    for (&actual, &sample) in magnitudes.iter().zip(&samples) {
        let expected = sample.abs();
        assert!(
            (actual - expected).abs() <= expected * 4e-3,
            "{actual} vs {expected}"
        );
    }
}

#[test]
fn norm_complex_squared_magnitudes() {
    let samples = [
        Complex32::new(0.0, 0.0),
        Complex32::new(0.1, 0.0),
        Complex32::new(0.0, 0.1),
        Complex32::new(2.0, 3.0),
        Complex32::new(2.0, -3.0),
        Complex32::new(-2.0, 3.0),
        Complex32::new(0.0, 0.2),
        Complex32::new(0.3, 0.0),
        Complex32::new(2.0, -3.0),
        Complex32::new(-2.0, 3.0),
    ];
    let expected = [0.0, 0.01, 0.01, 13.0, 13.0, 13.0, 0.04, 0.09, 13.0, 13.0];

    let mut norms = [0.0f32; 10];
    let written = kernel::norm(&samples, &mut norms);

    assert_eq!(written.len(), 10);
    for (&actual, &wanted) in written.iter().zip(&expected) {
        assert_near(actual, wanted, 2e-2);
    }
}

#[test]
fn norm_equals_squared_abs() {
    let samples: Vec<Complex32> = (0..21)
        .map(|i| Complex::new(i as f32 * 0.25 - 2.0, 1.5 - i as f32 * 0.125))
        .collect();

    let mut norms = vec![0.0f32; samples.len()];
    kernel::norm(&samples, &mut norms);

    for (norm, sample) in norms.iter().zip(&samples) {
        let abs = sample.abs();
        assert_near(*norm, abs * abs, 1e-5);
    }
}

#[test]
fn power_spectral_density_values() {
    let samples = [
        Complex32::new(2.0, 3.0),
        Complex32::new(4.0, 5.0),
        Complex32::new(6.0, 7.0),
        Complex32::new(8.0, 9.0),
        Complex32::new(10.0, 11.0),
    ];
    let expected = [11.1394335, 16.12784, 19.2941914, 21.6136818, 23.443924];

    let mut power = [0.0f32; 5];
    let written = kernel::power_spectral_density(&samples, &mut power);

    assert_eq!(written.len(), 5);
    for (&actual, &wanted) in written.iter().zip(&expected) {
        assert_near(actual, wanted, 1e-5);
    }
}

#[test]
fn power_spectral_density_of_unit_magnitude_is_zero() {
    let samples: Vec<Complex32> = (0..13)
        .map(|i| Complex::exp_j(i as f32 * 0.37))
        .collect();

    let mut power = vec![0.0f32; samples.len()];
    kernel::power_spectral_density(&samples, &mut power);

    for &value in &power {
        assert_near(value, 0.0, 1e-5);
    }
}

#[test]
fn rotator_cancels_conjugate_signal() {
    // The signal advances by 0.1 radians per sample and the rotator removes
    // exactly that advance, so every output sample sits at 1+0j.
    let samples: Vec<Complex32> = (0..40).map(|k| Complex::exp_j(0.1 * k as f32)).collect();

    let mut phase = Complex32::new(1.0, 0.0);
    let increment = Complex::exp_j(-0.1);

    let mut output = vec![Complex32::new(0.0, 0.0); 40];
    let written = kernel::rotator(&samples, &mut phase, increment, &mut output);

    assert_eq!(written.len(), 40);
    for sample in written.iter() {
        assert_near(sample.re, 1.0, 1e-6);
        assert_near(sample.im, 0.0, 1e-6);
    }

    // The exit phase continues the rotation and stays on the unit circle.
    assert_near(phase.abs(), 1.0, 1e-6);
    assert_near(phase.re, (0.1f32 * 40.0).cos(), 1e-5);
    assert_near(phase.im, -(0.1f32 * 40.0).sin(), 1e-5);
}

#[test]
fn rotator_phase_continues_across_calls() {
    let samples: Vec<Complex32> = (0..23).map(|k| Complex::exp_j(0.2 * k as f32)).collect();
    let increment = Complex::exp_j(0.05);

    // One call over the whole input.
    let mut phase_full = Complex32::new(1.0, 0.0);
    let mut output_full = vec![Complex32::new(0.0, 0.0); 23];
    kernel::rotator(&samples, &mut phase_full, increment, &mut output_full);

    // The same input split at a non-multiple of the register widths.
    let mut phase_split = Complex32::new(1.0, 0.0);
    let mut output_split = vec![Complex32::new(0.0, 0.0); 23];
    kernel::rotator(&samples[..13], &mut phase_split, increment, &mut output_split[..13]);
    let (head, tail) = output_split.split_at_mut(13);
    let _ = head;
    kernel::rotator(&samples[13..], &mut phase_split, increment, tail);

    for (a, b) in output_full.iter().zip(&output_split) {
        assert_near(a.re, b.re, 1e-5);
        assert_near(a.im, b.im, 1e-5);
    }
    assert_near(phase_full.re, phase_split.re, 1e-5);
    assert_near(phase_full.im, phase_split.im, 1e-5);
}

#[test]
fn fast_int_pow_kernel() {
    let base: Vec<Complex32> = (0..19)
        .map(|i| Complex::new(0.9 + i as f32 * 0.01, 0.1 - i as f32 * 0.01))
        .collect();

    let mut cubed = vec![Complex32::new(0.0, 0.0); base.len()];
    kernel::fast_int_pow(&base, 3, &mut cubed);
    for (pow, b) in cubed.iter().zip(&base) {
        let expected = *b * *b * *b;
        assert_near(pow.re, expected.re, 1e-5);
        assert_near(pow.im, expected.im, 1e-5);
    }

    let mut ones = vec![Complex32::new(0.0, 0.0); base.len()];
    kernel::fast_int_pow(&base, 0, &mut ones);
    for pow in &ones {
        assert_eq!(pow.re, 1.0);
        assert_eq!(pow.im, 0.0);
    }

    let mut inverted = vec![Complex32::new(0.0, 0.0); base.len()];
    kernel::fast_int_pow(&base, -1, &mut inverted);
    for (pow, b) in inverted.iter().zip(&base) {
        let expected = Complex32::new(1.0, 0.0) / *b;
        assert_near(pow.re, expected.re, 1e-4);
        assert_near(pow.im, expected.im, 1e-4);
    }
}

#[test]
fn horizontal_max_of_span() {
    // 39 samples: two 16-blocks, one 4-block and a 3-sample tail.
    let samples: Vec<f32> = (0..39).map(|i| ((i * 7919) % 113) as f32 - 60.0).collect();
    let expected = samples.iter().copied().fold(f32::MIN, f32::max);

    assert_eq!(kernel::horizontal_max(&samples), expected);

    // All-negative input exercises the seeding from the first sample.
    let negative = [-5.0f32, -3.5, -8.0, -2.25, -9.0, -7.5];
    assert_eq!(kernel::horizontal_max(&negative), -2.25);

    assert_eq!(kernel::horizontal_max(&[4.0f32]), 4.0);
}

#[test]
fn horizontal_sum_of_span() {
    let samples: Vec<f32> = (0..39).map(|i| (i % 7) as f32 - 3.0).collect();
    let expected: f32 = samples.iter().sum();

    assert_near(kernel::horizontal_sum(&samples), expected, 1e-4);

    let half_samples: Vec<Half> = (0..21).map(|i| Half::from_f32((i % 5) as f32)).collect();
    assert_eq!(kernel::horizontal_sum(&half_samples).to_f32(), 40.0);
}

#[test]
fn horizontal_reductions_are_permutation_invariant() {
    let samples: Vec<f32> = (0..27).map(|i| ((i * 31) % 17) as f32).collect();
    let mut shuffled = samples.clone();
    shuffled.reverse();
    shuffled.swap(3, 19);

    assert_eq!(
        kernel::horizontal_max(&samples),
        kernel::horizontal_max(&shuffled)
    );
    assert_eq!(
        kernel::horizontal_sum(&samples),
        kernel::horizontal_sum(&shuffled)
    );
}

#[test]
fn peak_detector_tracks_attack_and_release() {
    let mut peak = [0.0f32; 3];

    kernel::per_point_lerp_peak_detector(&[1.0f32, 1.0, 1.0], &mut peak, 0.5, 0.1);
    // Rising input moves by the attack factor.
    assert_eq!(peak, [0.5, 0.5, 0.5]);

    kernel::per_point_lerp_peak_detector(&[0.0f32, 0.0, 1.0], &mut peak, 0.5, 0.1);
    // Falling points move by the release factor, the rising one by attack.
    assert_near(peak[0], 0.45, 1e-6);
    assert_near(peak[1], 0.45, 1e-6);
    assert_near(peak[2], 0.75, 1e-6);
}

#[test]
fn kernels_write_only_the_input_length() {
    let samples = [Complex32::new(3.0, 4.0); 5];
    let mut magnitudes = [-1.0f32; 8];

    let written = kernel::abs(&samples, &mut magnitudes);
    assert_eq!(written.len(), 5);
    assert_eq!(magnitudes[5..], [-1.0, -1.0, -1.0]);
}
