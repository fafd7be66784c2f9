//! Scalar brightness kernel.
//!
//! Each pixel is decoded, its red, green and blue channels are shifted by
//! `delta` and clamped to `[0, 255]`, and the word is written back with
//! alpha untouched. A delta of zero still walks the whole buffer.

use pixbright_core::{PackedPixel, BYTES_PER_PIXEL};

/// Adjusts brightness of every packed word in a native-order byte slice.
///
/// Bytes past the last whole word are ignored.
///
/// # Example
///
/// ```rust
/// use pixbright_core::PackedPixel;
/// use pixbright_math::scalar::brightness_inplace;
///
/// let mut bytes = PackedPixel(0x00102030).to_ne_bytes();
/// brightness_inplace(&mut bytes, 10);
/// assert_eq!(PackedPixel::from_ne_bytes(bytes), PackedPixel(0x001A2A3A));
/// ```
#[inline]
pub fn brightness_inplace(bytes: &mut [u8], delta: i32) {
    for word in bytes.chunks_exact_mut(BYTES_PER_PIXEL) {
        let px: PackedPixel = bytemuck::pod_read_unaligned(word);
        word.copy_from_slice(bytemuck::bytes_of(&px.with_brightness(delta)));
    }
}

/// Adjusts brightness of a slice of packed words.
pub fn brightness_words(words: &mut [u32], delta: i32) {
    for word in words.iter_mut() {
        *word = PackedPixel(*word).with_brightness(delta).to_u32();
    }
}
