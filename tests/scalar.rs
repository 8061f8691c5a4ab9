use sigvec::math;
use sigvec::{Complex32, Frequency, Half, HalfComplex, Outcome};

fn assert_near(a: f32, b: f32, tolerance: f32) {
    assert!(
        (a - b).abs() <= tolerance,
        "{a} is not within {tolerance} of {b}"
    );
}

#[test]
fn complex_arithmetic() {
    let a = Complex32::new(1.0, 2.0);
    let b = Complex32::new(3.0, 4.0);

    assert_eq!(a + b, Complex32::new(4.0, 6.0));
    assert_eq!(a - b, Complex32::new(-2.0, -2.0));
    assert_eq!(a * b, Complex32::new(-5.0, 10.0));
    assert_eq!(-a, Complex32::new(-1.0, -2.0));

    // (1+2j)/(3+4j) = (11+2j)/25
    let quotient = a / b;
    assert_near(quotient.re, 11.0 / 25.0, 1e-6);
    assert_near(quotient.im, 2.0 / 25.0, 1e-6);

    assert_eq!(a * 2.0, Complex32::new(2.0, 4.0));
    assert_eq!(2.0 * a, Complex32::new(2.0, 4.0));
    assert_eq!(a + 1.0, Complex32::new(2.0, 2.0));
}

#[test]
fn complex_magnitude_and_phase() {
    let value = Complex32::new(3.0, -4.0);

    assert_eq!(value.norm(), 25.0);
    assert_eq!(value.abs(), 5.0);
    assert_eq!(value.conj(), Complex32::new(3.0, 4.0));

    assert_near(value.fast_arg(), (-4.0f32).atan2(3.0), 1e-4);
    assert_near(Complex32::new(0.0, 0.0).fast_arg(), 0.0, 1e-6);
    assert_near(Complex32::new(-1.0, 0.0).fast_arg(), std::f32::consts::PI, 1e-4);
}

#[test]
fn complex_exponentials() {
    let rotation = Complex32::exp_j(0.5);
    assert_near(rotation.re, 0.5f32.cos(), 1e-6);
    assert_near(rotation.im, 0.5f32.sin(), 1e-6);

    let value = Complex32::new(1.0, std::f32::consts::FRAC_PI_2).exp();
    assert_near(value.re, 0.0, 1e-6);
    assert_near(value.im, std::f32::consts::E, 1e-6);
}

#[test]
fn complex_formatting() {
    assert_eq!(Complex32::new(0.0, 0.0).to_string(), "0");
    assert_eq!(Complex32::new(1.5, 0.0).to_string(), "1.5");
    assert_eq!(Complex32::new(0.0, 2.0).to_string(), "2j");
    assert_eq!(Complex32::new(0.0, -2.0).to_string(), "-2j");
    assert_eq!(Complex32::new(1.0, 2.0).to_string(), "1+2j");
    assert_eq!(Complex32::new(1.0, -2.0).to_string(), "1-2j");
}

#[test]
fn half_complex_arithmetic() {
    let a = HalfComplex::new(Half::from_f32(1.0), Half::from_f32(2.0));
    let b = HalfComplex::new(Half::from_f32(3.0), Half::from_f32(4.0));

    let product = a * b;
    assert_eq!(product.re.to_f32(), -5.0);
    assert_eq!(product.im.to_f32(), 10.0);
}

#[test]
fn fast_log10_accuracy() {
    assert_eq!(math::fast_log10(1.0), 0.0);

    for &value in &[0.001f32, 0.1, 0.5, 2.0, 10.0, 1000.0, 123456.0] {
        let expected = value.log10();
        let actual = math::fast_log10(value);
        let relative = if expected == 0.0 {
            actual.abs()
        } else {
            ((actual - expected) / expected).abs()
        };
        assert!(relative <= 2e-6, "log10({value}): {actual} vs {expected}");
    }
}

#[test]
fn fast_log10_is_monotone() {
    let mut previous = math::fast_log10(1e-3);
    let mut value = 1.1e-3f32;
    while value < 1e4 {
        let current = math::fast_log10(value);
        assert!(current > previous);
        previous = current;
        value *= 1.1;
    }
}

#[test]
fn fast_atan2_accuracy() {
    let points = [
        (0.0f32, 1.0f32),
        (1.0, 1.0),
        (1.0, 0.0),
        (1.0, -1.0),
        (0.0, -1.0),
        (-1.0, -1.0),
        (-1.0, 0.0),
        (-1.0, 1.0),
        (0.3, 0.9),
        (-2.5, 0.1),
    ];
    for (y, x) in points {
        assert_near(math::fast_atan2(y, x), y.atan2(x), 1e-4);
    }

    assert_eq!(math::fast_atan2(0.0, 0.0), 0.0);
}

#[test]
fn fast_int_pow_rules() {
    assert_eq!(math::fast_int_pow(2.0f32, 10), 1024.0);
    assert_eq!(math::fast_int_pow(3.0f32, 0), 1.0);
    assert_eq!(math::fast_int_pow(0.0f32, 0), 1.0);
    assert_near(math::fast_int_pow(2.0f32, -2), 0.25, 1e-6);

    let base = Complex32::new(0.0, 1.0);
    // j^2 = -1
    let squared = math::fast_int_pow(base, 2);
    assert_near(squared.re, -1.0, 1e-6);
    assert_near(squared.im, 0.0, 1e-6);
}

#[test]
fn frequency_units() {
    assert_eq!(Frequency::hertz(1500.0), Frequency::kilohertz(1.5));
    assert_eq!(Frequency::megahertz(145.8).to_f64(), 145_800_000.0);
    assert_eq!(Frequency::gigahertz(1.0).to_i64(), 1_000_000_000);
    assert_eq!(Frequency::from(440u32), Frequency::hertz(440.0));
}

#[test]
fn frequency_arithmetic() {
    let frequency = Frequency::kilohertz(10.0);

    assert_eq!(frequency + Frequency::hertz(500.0), Frequency::hertz(10_500.0));
    assert_eq!(frequency - 1000.0, Frequency::hertz(9000.0));
    assert_eq!(frequency * 2.0, Frequency::kilohertz(20.0));
    assert_eq!(frequency / 4.0, Frequency::hertz(2500.0));
    assert_eq!(-frequency, Frequency::hertz(-10_000.0));

    assert_eq!(Frequency::hertz(1234.6).round(), Frequency::hertz(1235.0));
    assert_eq!(
        Frequency::hertz(1500.0).modulo(Frequency::hertz(400.0)),
        Frequency::hertz(300.0)
    );

    let mut accumulated = Frequency::hertz(100.0);
    accumulated += Frequency::hertz(20.0);
    accumulated *= 2.0;
    assert_eq!(accumulated, Frequency::hertz(240.0));
}

#[derive(Debug, PartialEq)]
enum DecodeError {
    NotEnoughData,
}

#[test]
fn outcome_value_access() {
    let ok: Outcome<u32, DecodeError> = Outcome::from_value(42);
    assert!(ok.ok());
    assert!(ok.has_value());
    assert_eq!(ok.value().unwrap(), &42);
    assert!(ok.error().is_none());

    let failed: Outcome<u32, DecodeError> = Outcome::from_error(DecodeError::NotEnoughData);
    assert!(!failed.ok());
    assert!(!failed.has_value());
    assert!(failed.value().is_err());
    assert_eq!(failed.error(), Some(&DecodeError::NotEnoughData));
}

#[test]
fn outcome_partial_value() {
    let partial: Outcome<u32, DecodeError> =
        Outcome::from_value_and_error(7, DecodeError::NotEnoughData);

    // An attached error makes the outcome non-ok even with a value present.
    assert!(!partial.ok());
    assert!(partial.has_value());
    assert_eq!(partial.into_value().unwrap(), 7);
}

#[test]
fn outcome_from_result() {
    let from_ok: Outcome<u32, DecodeError> = Ok(5).into();
    assert!(from_ok.ok());

    let from_err: Outcome<u32, DecodeError> = Err(DecodeError::NotEnoughData).into();
    assert!(!from_err.ok());
}
