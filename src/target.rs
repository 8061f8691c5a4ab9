//! Compile-time description of the build target.
//!
//! Every backend selection in the crate keys off these constants (or the
//! matching `cfg` predicates); there is no runtime CPU dispatch. The policy is
//! to prefer the newest instruction-set feature the build enables and fall
//! back monotonically to older ones, ending at the portable scalar backend.

/// True when the target belongs to the x86 family (32 or 64 bit).
pub const IS_X86_FAMILY: bool =
    cfg!(any(target_arch = "x86", target_arch = "x86_64"));

/// True when the target has 64-bit pointers.
pub const IS_64_BIT: bool = cfg!(target_pointer_width = "64");

/// True when Arm NEON is available.
///
/// NEON is a baseline feature of aarch64, so this is equivalent to building
/// for a 64-bit Arm target with the default feature set.
pub const HAS_NEON: bool =
    cfg!(all(target_arch = "aarch64", target_feature = "neon"));

/// True when SSE2 is available. SSE2 is the required minimum for the x86
/// backends and is part of the x86_64 baseline.
pub const HAS_SSE2: bool = cfg!(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse2"
));

/// True when SSE3 is available.
pub const HAS_SSE3: bool = cfg!(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse3"
));

/// True when SSE4.1 is available.
pub const HAS_SSE41: bool = cfg!(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse4.1"
));

/// True when AVX is available.
pub const HAS_AVX: bool = cfg!(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "avx"
));

/// True when AVX2 is available.
pub const HAS_AVX2: bool = cfg!(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "avx2"
));

/// True when fused multiply-add is available.
pub const HAS_FMA: bool = cfg!(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "fma"
));

/// True when the target can do arithmetic on half-precision vectors.
///
/// Stable Rust exposes no binary16 vector intrinsics, so this is currently
/// false everywhere and half-precision registers use the scalar emulation
/// backend. The [`crate::Half`] scalar itself is always available.
pub const HAS_HALF_VECTOR: bool = false;
