//! Timed scalar and SIMD pixel engines.
//!
//! Provides a portable scalar brightness engine, a SIMD vector engine
//! (brightness plus float scaling), a build-time capability probe, and
//! microsecond timing around every call.
//!
//! # Architecture
//!
//! ```text
//! Processor (timed entry points)
//!     +-- Capabilities (build-time probe)
//!     +-- Clock (injectable, MonotonicClock by default)
//!     +-- BrightnessEngine trait
//!             +-- ScalarEngine (clamp, any length)
//!             +-- VectorEngine (saturating u8x16 / f32x4, len / 4 vectors)
//! ```
//!
//! # Example
//!
//! ```rust
//! use pixbright_compute::{brightness, brightness_accelerated, is_acceleration_supported};
//!
//! let mut pixels = vec![0x00102030u32; 8];
//! let _elapsed_us = brightness(&mut pixels, 10);
//! assert_eq!(pixels[0], 0x001A2A3A);
//!
//! if is_acceleration_supported() {
//!     brightness_accelerated(&mut pixels, -10).unwrap();
//!     assert_eq!(pixels[0], 0x00102030);
//! }
//! ```
//!
//! # Remainder Policy
//!
//! The vector entry points process whole groups of 4 elements only. For a
//! buffer of length `n`, the last `n % 4` elements are left unchanged. This
//! is reported through a `tracing` warning, never patched with a scalar pass.

pub mod backend;
pub mod processor;
pub mod timing;

pub use backend::{
    Backend, BrightnessEngine, Capabilities, EngineInfo, EngineKind, ScalarEngine, VectorEngine,
    describe_engines, detect_engines, select_best_engine, simd_supported,
};
pub use pixbright_core::{Error, FloatBuffer, PackedPixel, PixelBuffer, Result};
pub use processor::{Processor, ProcessorBuilder, ProcessorConfig};
pub use timing::{Clock, Measured, MonotonicClock, measure};

/// Adjust brightness on the scalar path. Returns elapsed microseconds.
pub fn brightness<'a>(pixels: impl Into<PixelBuffer<'a>>, delta: i32) -> u64 {
    Processor::new().brightness(pixels, delta)
}

/// Adjust brightness on the SIMD path. Returns elapsed microseconds.
///
/// Fails with [`Error::UnsupportedOperation`] when [`is_acceleration_supported`]
/// is `false`.
pub fn brightness_accelerated<'a>(pixels: impl Into<PixelBuffer<'a>>, delta: i32) -> Result<u64> {
    Processor::new().brightness_accelerated(pixels, delta)
}

/// Scale floats on the SIMD path. Returns elapsed microseconds.
///
/// Fails with [`Error::UnsupportedOperation`] when [`is_acceleration_supported`]
/// is `false`.
pub fn scale<'a>(values: impl Into<FloatBuffer<'a>>, multiplier: f32) -> Result<u64> {
    Processor::new().scale(values, multiplier)
}

/// Whether the SIMD entry points are usable on this build target.
pub const fn is_acceleration_supported() -> bool {
    simd_supported()
}
