//! # pixbright-core
//!
//! Core types for the pixbright brightness and scale engines.
//!
//! - [`PackedPixel`] - 32-bit ARGB word with channel accessors and the
//!   clamp-based brightness rule
//! - [`PixelBuffer`], [`FloatBuffer`] - zero-copy views over managed slices
//!   or direct byte regions
//! - [`Error`], [`Result`] - the error type shared by all pixbright crates
//!
//! ## Crate Structure
//!
//! ```text
//! pixbright-core (this crate)
//!    ^
//!    |
//!    +-- pixbright-math (scalar + SIMD kernels)
//!    +-- pixbright-compute (engines, capability probe, timing)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod pixel;

pub use buffer::{FloatBuffer, PixelBuffer, BYTES_PER_FLOAT};
pub use error::{Error, Result};
pub use pixel::{clamp_channel, PackedPixel, BYTES_PER_PIXEL, CHANNELS};

/// Elements processed per SIMD iteration: 4 pixels or 4 floats.
pub const VECTOR_WIDTH: usize = 4;

/// Bytes covered by one SIMD iteration.
pub const VECTOR_BYTES: usize = VECTOR_WIDTH * 4;

/// Prelude module for convenient imports.
///
/// ```
/// use pixbright_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::{FloatBuffer, PixelBuffer};
    pub use crate::error::{Error, Result};
    pub use crate::pixel::PackedPixel;
    pub use crate::{VECTOR_BYTES, VECTOR_WIDTH};
}
