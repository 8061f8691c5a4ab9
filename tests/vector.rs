use sigvec::math::Real;
use sigvec::vector::{
    Complex2, Complex3, Complex4, Complex8, Float2, Float3, Float4, Float8, Half2, Half3,
    Half4, Half8, HalfComplex2, HalfComplex3, HalfComplex4, HalfComplex8, Uint2, Uint3,
    Uint4, Uint8, Ushort2, Ushort3, Ushort4, Ushort8,
};
use sigvec::{Complex, Half};

fn assert_near(a: f32, b: f32, tolerance: f32) {
    assert!(
        (a - b).abs() <= tolerance,
        "{a} is not within {tolerance} of {b}"
    );
}

macro_rules! float_invariants {
    ($name:ident, $vec:ty, $scalar:ty, $n:expr) => {
        #[test]
        fn $name() {
            let values: [$scalar; $n] =
                std::array::from_fn(|i| <$scalar as Real>::from_f32(i as f32 * 0.5 - 1.0));

            // Store after load is the identity.
            let register = <$vec>::from_array(values);
            let mut stored = [<$scalar as Real>::from_f32(0.0); $n];
            register.store(&mut stored);
            assert_eq!(stored, values);

            // Broadcast puts the scalar in every lane.
            let broadcast = <$vec>::splat(<$scalar as Real>::from_f32(2.5));
            for i in 0..$n {
                assert_eq!(broadcast.extract(i), <$scalar as Real>::from_f32(2.5));
            }

            // Setting one lane leaves the others untouched.
            let replacement = <$scalar as Real>::from_f32(9.0);
            for lane in 0..$n {
                let updated = register.set_lane(lane, replacement);
                for i in 0..$n {
                    let expected = if i == lane { replacement } else { values[i] };
                    assert_eq!(updated.extract(i), expected);
                }
            }

            // Reverse is an involution.
            let reversed = register.reverse();
            for i in 0..$n {
                assert_eq!(reversed.extract(i), values[$n - i - 1]);
            }
            let double_reversed = reversed.reverse();
            for i in 0..$n {
                assert_eq!(double_reversed.extract(i), values[i]);
            }

            // Arithmetic is per lane.
            let offset = <$vec>::splat(<$scalar as Real>::from_f32(1.0));
            let sum = register + offset;
            for i in 0..$n {
                assert_eq!(sum.extract(i), values[i] + <$scalar as Real>::from_f32(1.0));
            }
            let product = register * register;
            for i in 0..$n {
                assert_eq!(product.extract(i), values[i] * values[i]);
            }
            let negated = -register;
            for i in 0..$n {
                assert_eq!(negated.extract(i), -values[i]);
            }
        }
    };
}

float_invariants!(float2_invariants, Float2, f32, 2);
float_invariants!(float3_invariants, Float3, f32, 3);
float_invariants!(float4_invariants, Float4, f32, 4);
float_invariants!(float8_invariants, Float8, f32, 8);
float_invariants!(half2_invariants, Half2, Half, 2);
float_invariants!(half3_invariants, Half3, Half, 3);
float_invariants!(half4_invariants, Half4, Half, 4);
float_invariants!(half8_invariants, Half8, Half, 8);

macro_rules! uint_invariants {
    ($name:ident, $vec:ty, $scalar:ty, $n:expr) => {
        #[test]
        fn $name() {
            let values: [$scalar; $n] = std::array::from_fn(|i| (i as $scalar) * 3 + 1);

            let register = <$vec>::from_array(values);
            let mut stored = [0; $n];
            register.store(&mut stored);
            assert_eq!(stored, values);

            let broadcast = <$vec>::splat(7);
            for i in 0..$n {
                assert_eq!(broadcast.extract(i), 7);
            }

            for lane in 0..$n {
                let updated = register.set_lane(lane, 100);
                for i in 0..$n {
                    let expected = if i == lane { 100 } else { values[i] };
                    assert_eq!(updated.extract(i), expected);
                }
            }

            let reversed = register.reverse();
            for i in 0..$n {
                assert_eq!(reversed.extract(i), values[$n - i - 1]);
            }

            assert_eq!(register.horizontal_max(), values[$n - 1]);
            let min = register.min(broadcast);
            let max = register.max(broadcast);
            for i in 0..$n {
                assert_eq!(min.extract(i), values[i].min(7));
                assert_eq!(max.extract(i), values[i].max(7));
            }
        }
    };
}

uint_invariants!(uint2_invariants, Uint2, u32, 2);
uint_invariants!(uint3_invariants, Uint3, u32, 3);
uint_invariants!(uint4_invariants, Uint4, u32, 4);
uint_invariants!(uint8_invariants, Uint8, u32, 8);
uint_invariants!(ushort2_invariants, Ushort2, u16, 2);
uint_invariants!(ushort3_invariants, Ushort3, u16, 3);
uint_invariants!(ushort4_invariants, Ushort4, u16, 4);
uint_invariants!(ushort8_invariants, Ushort8, u16, 8);

macro_rules! complex_invariants {
    ($name:ident, $vec:ty, $scalar:ty, $n:expr) => {
        #[test]
        fn $name() {
            let values: [Complex<$scalar>; $n] = std::array::from_fn(|i| {
                Complex::new(
                    <$scalar as Real>::from_f32(i as f32 + 1.0),
                    <$scalar as Real>::from_f32(-(i as f32) - 2.0),
                )
            });

            let register = <$vec>::from_array(values);
            let mut stored =
                [Complex::new(<$scalar as Real>::from_f32(0.0), <$scalar as Real>::from_f32(0.0)); $n];
            register.store(&mut stored);
            assert_eq!(stored, values);

            let single = Complex::new(
                <$scalar as Real>::from_f32(1.0),
                <$scalar as Real>::from_f32(-1.0),
            );
            let broadcast = <$vec>::splat(single);
            for i in 0..$n {
                assert_eq!(broadcast.extract(i), single);
            }

            for lane in 0..$n {
                let updated = register.set_lane(lane, single);
                for i in 0..$n {
                    let expected = if i == lane { single } else { values[i] };
                    assert_eq!(updated.extract(i), expected);
                }
            }

            let reversed = register.reverse();
            for i in 0..$n {
                assert_eq!(reversed.extract(i), values[$n - i - 1]);
            }

            // Projections match the lanes.
            let re = register.extract_real();
            let im = register.extract_imag();
            for i in 0..$n {
                assert_eq!(re.extract(i), values[i].re);
                assert_eq!(im.extract(i), values[i].im);
            }

            // Complex product against the scalar formula.
            let product = register * broadcast;
            for i in 0..$n {
                assert_eq!(product.extract(i), values[i] * single);
            }

            // Conjugation flips the imaginary lanes.
            let conjugated = register.conj();
            for i in 0..$n {
                assert_eq!(conjugated.extract(i), values[i].conj());
            }
        }
    };
}

complex_invariants!(complex2_invariants, Complex2, f32, 2);
complex_invariants!(complex3_invariants, Complex3, f32, 3);
complex_invariants!(complex4_invariants, Complex4, f32, 4);
complex_invariants!(complex8_invariants, Complex8, f32, 8);
complex_invariants!(half_complex2_invariants, HalfComplex2, Half, 2);
complex_invariants!(half_complex3_invariants, HalfComplex3, Half, 3);
complex_invariants!(half_complex4_invariants, HalfComplex4, Half, 4);
complex_invariants!(half_complex8_invariants, HalfComplex8, Half, 8);

#[test]
fn float4_low_high_composition() {
    let register = Float4::new(1.0, 2.0, 3.0, 4.0);

    let low = register.extract_low();
    let high = register.extract_high();
    assert_eq!(low.x(), 1.0);
    assert_eq!(low.y(), 2.0);
    assert_eq!(high.x(), 3.0);
    assert_eq!(high.y(), 4.0);

    let recombined = Float4::from_halves(low, high);
    for i in 0..4 {
        assert_eq!(recombined.extract(i), register.extract(i));
    }
}

#[test]
fn float8_low_high_composition() {
    let register = Float8::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0);

    let low = register.extract_low();
    let high = register.extract_high();
    for i in 0..4 {
        assert_eq!(low.extract(i), (i + 1) as f32);
        assert_eq!(high.extract(i), (i + 5) as f32);
    }

    let recombined = Float8::from_halves(low, high);
    for i in 0..8 {
        assert_eq!(recombined.extract(i), register.extract(i));
    }
}

#[test]
fn complex8_low_high_composition() {
    let values: [Complex<f32>; 8] =
        std::array::from_fn(|i| Complex::new(i as f32, -(i as f32)));
    let register = Complex8::from_array(values);

    let recombined = Complex8::from_halves(register.extract_low(), register.extract_high());
    for i in 0..8 {
        assert_eq!(recombined.extract(i), values[i]);
    }
}

#[test]
fn uint8_low_high_composition() {
    let values: [u32; 8] = std::array::from_fn(|i| i as u32 * 11);
    let register = Uint8::from_array(values);

    let recombined = Uint8::from_halves(register.extract_low(), register.extract_high());
    for i in 0..8 {
        assert_eq!(recombined.extract(i), values[i]);
    }
}

#[test]
fn comparison_masks_and_select() {
    let a = Float4::new(1.0, 5.0, 3.0, -1.0);
    let b = Float4::new(2.0, 4.0, 3.0, -2.0);

    let less = a.less_than(b);
    assert_eq!(less.extract(0), u32::MAX);
    assert_eq!(less.extract(1), 0);
    assert_eq!(less.extract(2), 0);
    assert_eq!(less.extract(3), 0);

    let greater = a.greater_than(b);
    assert_eq!(greater.extract(0), 0);
    assert_eq!(greater.extract(1), u32::MAX);
    assert_eq!(greater.extract(2), 0);
    assert_eq!(greater.extract(3), u32::MAX);

    let selected = Float4::select(less, a, b);
    assert_eq!(selected.x(), 1.0);
    assert_eq!(selected.y(), 4.0);
    assert_eq!(selected.z(), 3.0);
    assert_eq!(selected.w(), -2.0);
}

#[test]
fn float4_math_operations() {
    let register = Float4::new(1.0, -2.0, 3.0, -4.0);

    let absolute = register.abs();
    for i in 0..4 {
        assert_eq!(absolute.extract(i), register.extract(i).abs());
    }

    assert_eq!(register.horizontal_sum(), -2.0);
    assert_eq!(register.horizontal_max(), 3.0);
    assert_eq!(register.squared_norm(), 30.0);
    assert_near(register.norm(), 30.0f32.sqrt(), 1e-6);

    let signs = register.sign();
    assert_eq!(signs.x(), 1.0);
    assert_eq!(signs.y(), -1.0);

    let copied = Float4::splat(2.0).copysign(register);
    assert_eq!(copied.x(), 2.0);
    assert_eq!(copied.y(), -2.0);

    let accumulated = register.multiply_add(Float4::splat(2.0), Float4::splat(3.0));
    for i in 0..4 {
        assert_near(accumulated.extract(i), register.extract(i) + 6.0, 1e-6);
    }

    let unit = Float4::new(1.0, 0.0, 0.0, 0.0).normalize();
    assert_near(unit.length(), 1.0, 1e-6);
    assert_eq!(Float4::splat(0.0).normalize().length(), 0.0);

    assert_eq!(
        Float4::new(1.0, 2.0, 3.0, 4.0).dot(Float4::new(4.0, 3.0, 2.0, 1.0)),
        20.0
    );
}

#[test]
fn float4_transcendentals() {
    let angles = Float4::new(-2.0, -0.3, 0.5, 2.5);
    let (sin, cos) = angles.sin_cos();
    for i in 0..4 {
        let angle = angles.extract(i);
        assert_near(sin.extract(i), angle.sin(), 1e-6);
        assert_near(cos.extract(i), angle.cos(), 1e-6);
        assert_near(angles.sin().extract(i), angle.sin(), 1e-6);
        assert_near(angles.cos().extract(i), angle.cos(), 1e-6);
    }

    let exponents = Float4::new(-3.0, -0.5, 0.0, 2.0);
    let exp = exponents.exp();
    for i in 0..4 {
        let expected = exponents.extract(i).exp();
        assert!(((exp.extract(i) - expected) / expected).abs() <= 1e-6);
    }

    let values = Float4::new(0.01, 1.0, 20.0, 12345.0);
    let logs = values.fast_log10();
    assert_eq!(logs.extract(1), 0.0);
    for i in 0..4 {
        let expected = values.extract(i).log10();
        assert_near(logs.extract(i), expected, 2e-5);
    }
}

#[test]
fn complex4_math_operations() {
    let values = [
        Complex::new(3.0f32, 4.0),
        Complex::new(-3.0, 4.0),
        Complex::new(0.5, -0.5),
        Complex::new(0.0, 2.0),
    ];
    let register = Complex4::from_array(values);

    let norm = register.norm();
    let abs = register.abs();
    let fast_abs = register.fast_abs();
    let arg = register.fast_arg();
    for i in 0..4 {
        assert_near(norm.extract(i), values[i].norm(), 1e-5);
        assert_near(abs.extract(i), values[i].abs(), 1e-5);

        let expected_abs = values[i].abs();
        assert!(
            (fast_abs.extract(i) - expected_abs).abs() <= expected_abs * 4e-3,
            "fast_abs lane {i}"
        );

        assert_near(arg.extract(i), values[i].im.atan2(values[i].re), 1e-4);
    }

    let total = register.horizontal_sum();
    assert_near(total.re, 0.5, 1e-6);
    assert_near(total.im, 9.5, 1e-6);

    let phases = Float4::new(0.0, 0.5, -1.0, 3.0);
    let rotation = Complex4::exp_j(phases);
    for i in 0..4 {
        let phase = phases.extract(i);
        assert_near(rotation.extract(i).re, phase.cos(), 1e-6);
        assert_near(rotation.extract(i).im, phase.sin(), 1e-6);
    }

    let exp = register.exp();
    for i in 0..4 {
        let expected = values[i].exp();
        assert_near(exp.extract(i).re, expected.re, expected.abs() * 1e-5);
        assert_near(exp.extract(i).im, expected.im, expected.abs() * 1e-5);
    }

    let weights = Float4::new(1.0, 2.0, 3.0, 4.0);
    let accumulated = register.multiply_add(Complex4::splat(Complex::new(1.0, 1.0)), weights);
    for i in 0..4 {
        let expected = values[i] + Complex::new(1.0, 1.0) * weights.extract(i);
        assert_near(accumulated.extract(i).re, expected.re, 1e-6);
        assert_near(accumulated.extract(i).im, expected.im, 1e-6);
    }
}

#[test]
fn complex4_division() {
    let a = Complex4::splat(Complex::new(1.0, 2.0));
    let b = Complex4::splat(Complex::new(3.0, 4.0));

    let quotient = a / b;
    for i in 0..4 {
        assert_near(quotient.extract(i).re, 11.0 / 25.0, 1e-5);
        assert_near(quotient.extract(i).im, 2.0 / 25.0, 1e-5);
    }
}

#[test]
fn vector_formatting() {
    assert_eq!(Float4::new(1.0, 2.0, 3.0, 4.0).to_string(), "{1, 2, 3, 4}");
    assert_eq!(Uint2::new(5, 6).to_string(), "{5, 6}");
    assert_eq!(
        Complex2::new(Complex::new(1.0, 2.0), Complex::new(0.0, -1.0)).to_string(),
        "{1+2j, -1j}"
    );
}

#[test]
fn accessor_shortcuts() {
    let mut register = Float3::new(1.0, 2.0, 3.0);
    assert_eq!(register.x(), 1.0);
    assert_eq!(register.y(), 2.0);
    assert_eq!(register.z(), 3.0);

    register.set_y(9.0);
    assert_eq!(register.y(), 9.0);
    assert_eq!(register.x(), 1.0);
    assert_eq!(register.z(), 3.0);
}

#[test]
fn unroll_expands_the_index_range() {
    let mut order = Vec::new();
    sigvec::vector::unroll::<4>(|i| order.push(i));
    assert_eq!(order, [0, 1, 2, 3]);

    let mut grid = [[0usize; 3]; 2];
    sigvec::vector::unroll2::<2, 3>(|i, j| grid[i][j] = i * 10 + j);
    assert_eq!(grid, [[0, 1, 2], [10, 11, 12]]);
}

#[test]
fn backend_names_are_consistent() {
    // 2- and 3-lane registers always use the scalar backend; 8-lane float
    // and complex registers are compositions of two 4-lane halves.
    assert_eq!(Float2::backend_name(), "Scalar");
    assert_eq!(Float3::backend_name(), "Scalar");
    assert_eq!(Float8::backend_name(), "Float4x2");
    assert_eq!(Complex8::backend_name(), "Complex4x2");
    assert_eq!(Half8::backend_name(), "Half4x2");

    let float4 = Float4::backend_name();
    assert!(float4 == "Neon" || float4 == "X86" || float4 == "Scalar");
    assert_eq!(Float4::IS_VECTORIZED, float4 != "Scalar");

    if sigvec::target::HAS_NEON || sigvec::target::HAS_SSE2 {
        assert!(Float4::IS_VECTORIZED);
        assert!(Complex4::IS_VECTORIZED);
        assert!(Uint4::IS_VECTORIZED);
    }

    // No stable half-precision vectors exist.
    assert!(!sigvec::target::HAS_HALF_VECTOR);
}

#[test]
fn half_registers_emulate() {
    // No stable target has half-precision vector arithmetic.
    assert!(!Half4::IS_VECTORIZED);
    assert!(!Half8::IS_VECTORIZED);

    let register = Half4::from_array([
        Half::from_f32(0.5),
        Half::from_f32(-1.5),
        Half::from_f32(2.0),
        Half::from_f32(4.0),
    ]);

    let doubled = register * Half::from_f32(2.0);
    assert_eq!(doubled.extract(0).to_f32(), 1.0);
    assert_eq!(doubled.extract(1).to_f32(), -3.0);
    assert_eq!(doubled.extract(2).to_f32(), 4.0);
    assert_eq!(doubled.extract(3).to_f32(), 8.0);

    assert_eq!(register.horizontal_sum().to_f32(), 5.0);
    assert_eq!(register.horizontal_max().to_f32(), 4.0);
}
