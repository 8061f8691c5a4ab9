//! Fixed-width vectorized register types.
//!
//! The register types come in three families — real float, complex, and
//! unsigned integer — at lane counts 2, 3, 4 and 8, and two floating point
//! precisions. Each `(element, lane count)` pair resolves to exactly one
//! backend at build time:
//!
//! - a native ISA backend (NEON on aarch64, SSE2 and above on x86),
//! - a composition of two half-width registers (all 8-lane types without a
//!   native register), or
//! - the portable scalar fallback (2- and 3-lane types, half precision, and
//!   targets without SIMD).
//!
//! The `IS_VECTORIZED` constant on each type tells streaming code whether
//! the backing storage is a genuine machine register; the semantics are the
//! same either way.

pub mod aligned;
pub mod complex;
pub mod composed;
pub mod float;
pub mod lanes;
pub mod uint;
pub mod unroll;

mod scalar;

#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
pub mod neon;

#[cfg(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse2"
))]
pub mod x86;

pub use aligned::AlignedRegister;
pub use complex::{
    Complex2, Complex3, Complex4, Complex8, ComplexVector, HalfComplex2, HalfComplex3,
    HalfComplex4, HalfComplex8,
};
pub use float::{
    Float2, Float3, Float4, Float8, FloatVector, Half2, Half3, Half4, Half8,
};
pub use uint::{
    Uint2, Uint3, Uint4, Uint8, UintVector, Ushort2, Ushort3, Ushort4, Ushort8,
};
pub use unroll::{unroll, unroll2};
