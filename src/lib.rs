//! sigvec is a library of vectorized numeric primitives for
//! software-defined-radio pipelines.
//!
//! The crate provides three layers:
//!
//! - Scalar value types used throughout a DSP pipeline: [`Complex`],
//!   the half-precision [`Half`], [`Frequency`], and the
//!   value-and/or-error [`Outcome`].
//! - Fixed-width vectorized registers of 2, 3, 4 and 8 lanes over real
//!   float, complex and unsigned integer elements, with one source-level
//!   API and per-target backends (NEON, SSE2 and above, a portable scalar
//!   fallback) selected at build time. See [`vector`].
//! - Streaming kernels over sample spans — magnitude, squared magnitude,
//!   dot products, rotator, power spectral density, reductions, integer
//!   powers and a Goertzel partial DFT. See [`kernel`] and [`dft`].
//!
//! There is no I/O, no allocation in the hot paths, and no global state:
//! kernels are pure functions over caller-owned buffers.
//!
//! # Examples
//!
//! ```
//! use sigvec::kernel;
//! use sigvec::Complex32;
//!
//! let samples = [Complex32::new(3.0, 4.0), Complex32::new(0.0, 1.0)];
//! let mut magnitudes = [0.0f32; 2];
//! kernel::abs(&samples, &mut magnitudes);
//! assert_eq!(magnitudes, [5.0, 1.0]);
//! ```

#![warn(missing_docs)]

pub mod complex;
pub mod dft;
pub mod frequency;
pub mod half;
pub mod kernel;
pub mod math;
pub mod outcome;
pub mod target;
pub mod vector;

#[doc(inline)]
pub use complex::{Complex, Complex32, HalfComplex};
#[doc(inline)]
pub use frequency::Frequency;
#[doc(inline)]
pub use half::Half;
#[doc(inline)]
pub use outcome::{InvalidAccess, Outcome};
pub use vector::{
    Complex2, Complex3, Complex4, Complex8, Float2, Float3, Float4, Float8, Half2, Half3,
    Half4, Half8, HalfComplex2, HalfComplex3, HalfComplex4, HalfComplex8, Uint2, Uint3,
    Uint4, Uint8, Ushort2, Ushort3, Ushort4, Ushort8,
};
