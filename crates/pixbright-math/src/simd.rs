//! SIMD pixel kernels.
//!
//! Uses the `wide` crate for portable 128-bit SIMD on stable Rust.
//!
//! # Brightness
//!
//! Four packed pixels (16 bytes) are loaded into one [`u8x16`]. The delta's
//! magnitude is broadcast into every color byte lane and zero into every
//! alpha byte lane, then a saturating unsigned add (brighten) or subtract
//! (darken) is applied. Saturating `u8` arithmetic against a single
//! magnitude equals the scalar clamp to `[0, 255]`, so both kernels agree
//! bit for bit. The zero lanes keep alpha unchanged for any delta.
//!
//! # Scale
//!
//! Four `f32` values are multiplied by a broadcast multiplier with [`f32x4`].
//! IEEE-754 semantics apply as-is: overflow and NaN propagate.
//!
//! # Remainder
//!
//! Both kernels process `len / 4` vectors. Trailing elements are left
//! untouched.
//!
//! # Example
//!
//! ```rust
//! use pixbright_math::simd::scale_x4;
//!
//! let result = scale_x4(&[1.0, 2.0, 3.0, 4.0], 2.5);
//! assert_eq!(result, [2.5, 5.0, 7.5, 10.0]);
//! ```

use pixbright_core::{PackedPixel, BYTES_PER_PIXEL, VECTOR_BYTES};
use wide::{f32x4, u8x16};

/// Saturating direction of a brightness step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Saturating add.
    Brighten,
    /// Saturating subtract.
    Darken,
}

impl Step {
    /// Splits a signed delta into direction and lane magnitude.
    ///
    /// Returns `None` for zero. Magnitudes above 255 saturate to 255, which
    /// clamps every channel exactly like the scalar rule does.
    #[inline]
    pub fn from_delta(delta: i32) -> Option<(Self, u8)> {
        let magnitude = delta.unsigned_abs().min(u8::MAX as u32) as u8;
        match delta {
            0 => None,
            d if d > 0 => Some((Self::Brighten, magnitude)),
            _ => Some((Self::Darken, magnitude)),
        }
    }

    #[inline]
    fn apply(self, pixels: u8x16, lanes: u8x16) -> u8x16 {
        match self {
            Self::Brighten => pixels.saturating_add(lanes),
            Self::Darken => pixels.saturating_sub(lanes),
        }
    }
}

/// Builds the brightness operand: `magnitude` in color lanes, zero in alpha lanes.
///
/// The lane pattern comes from the native byte order of a packed word, so
/// it is correct on either endianness.
#[inline]
pub fn brightness_lanes(magnitude: u8) -> u8x16 {
    let word = PackedPixel::from_argb(0, magnitude, magnitude, magnitude).to_ne_bytes();
    let mut lanes = [0u8; VECTOR_BYTES];
    for px in lanes.chunks_exact_mut(BYTES_PER_PIXEL) {
        px.copy_from_slice(&word);
    }
    u8x16::new(lanes)
}

// Direct buffers carry no alignment guarantee, so loads go through
// unaligned reads.
#[inline]
fn load_u8x16(chunk: &[u8]) -> u8x16 {
    u8x16::new(bytemuck::pod_read_unaligned::<[u8; VECTOR_BYTES]>(chunk))
}

#[inline]
fn load_f32x4(chunk: &[u8]) -> f32x4 {
    f32x4::from(bytemuck::pod_read_unaligned::<[f32; 4]>(chunk))
}

#[inline]
fn store_f32x4(chunk: &mut [u8], v: f32x4) {
    chunk.copy_from_slice(bytemuck::bytes_of(&v.to_array()));
}

/// Adjusts brightness of 4 packed pixels given as native-order bytes.
#[inline]
pub fn brightness_x4(pixels: &[u8; VECTOR_BYTES], delta: i32) -> [u8; VECTOR_BYTES] {
    match Step::from_delta(delta) {
        None => *pixels,
        Some((step, magnitude)) => step
            .apply(u8x16::new(*pixels), brightness_lanes(magnitude))
            .to_array(),
    }
}

/// Adjusts brightness of packed pixels in place, 4 pixels per iteration.
///
/// A zero delta returns without touching the slice. Only the first
/// `len / 16` full vectors are processed.
///
/// # Example
///
/// ```rust
/// use pixbright_math::simd::brightness_inplace_x4;
///
/// let mut bytes: Vec<u8> = [0xFFF0F0F0u32; 4].iter().flat_map(|w| w.to_ne_bytes()).collect();
/// brightness_inplace_x4(&mut bytes, 20);
/// assert!(bytes.iter().all(|&b| b == 0xFF));
/// ```
pub fn brightness_inplace_x4(bytes: &mut [u8], delta: i32) {
    let Some((step, magnitude)) = Step::from_delta(delta) else {
        return;
    };
    let lanes = brightness_lanes(magnitude);

    for chunk in bytes.chunks_exact_mut(VECTOR_BYTES) {
        let v = step.apply(load_u8x16(chunk), lanes);
        chunk.copy_from_slice(&v.to_array());
    }
}

/// Multiplies 4 values by `multiplier`.
#[inline]
pub fn scale_x4(values: &[f32; 4], multiplier: f32) -> [f32; 4] {
    (f32x4::from(*values) * f32x4::splat(multiplier)).to_array()
}

/// Multiplies native-order `f32` values in place, 4 per iteration.
///
/// Only the first `len / 16` full vectors of bytes are processed.
pub fn scale_inplace_x4(bytes: &mut [u8], multiplier: f32) {
    if bytes.is_empty() {
        return;
    }
    let m = f32x4::splat(multiplier);

    for chunk in bytes.chunks_exact_mut(VECTOR_BYTES) {
        let v = load_f32x4(chunk) * m;
        store_f32x4(chunk, v);
    }
}
