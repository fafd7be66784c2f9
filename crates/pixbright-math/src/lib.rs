//! # pixbright-math
//!
//! Pixel kernels for the pixbright engines.
//!
//! - [`scalar`] - portable clamp-based brightness over packed words
//! - [`simd`] - 4-lane saturating brightness and float scaling using [`wide`]
//!
//! # Design
//!
//! Kernels take native-order byte slices, the common view produced by
//! [`pixbright_core::PixelBuffer`] and [`pixbright_core::FloatBuffer`] for
//! both managed slices and direct buffers. They never allocate and never
//! touch memory outside the slice they are given.
//!
//! The SIMD kernels advance in whole vectors only. Elements past the last
//! full vector (`len % 4`) are left as they are; there is no scalar cleanup
//! pass.
//!
//! # Used By
//!
//! - `pixbright-compute` - `ScalarEngine` and `VectorEngine`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod scalar;
pub mod simd;

pub use scalar::{brightness_inplace, brightness_words};
pub use simd::{brightness_inplace_x4, scale_inplace_x4};
