//! Real-number definitions.
//!
//! Every matrix entry in this crate has the type [`Real`], selected once
//! at build time: enabling the `real-f32` cargo feature makes it `f32`,
//! otherwise it is `f64`. There is no per-matrix or per-call precision.

/// The floating-point entry type used throughout the crate.
#[cfg(feature = "real-f32")]
pub type Real = f32;

/// The floating-point entry type used throughout the crate.
#[cfg(not(feature = "real-f32"))]
pub type Real = f64;

/// Name of the active [`Real`] type.
#[cfg(feature = "real-f32")]
pub const PRECISION: &str = "f32";

/// Name of the active [`Real`] type.
#[cfg(not(feature = "real-f32"))]
pub const PRECISION: &str = "f64";

/// Size of [`Real`] in bytes.
pub const fn size_of_real() -> usize {
    std::mem::size_of::<Real>()
}
