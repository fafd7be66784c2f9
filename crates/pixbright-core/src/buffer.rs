//! Zero-copy views over caller-owned pixel and float buffers.
//!
//! Two access modes are supported, matching how host layers hand memory
//! over:
//!
//! - **Managed**: a typed slice (`&mut [u32]`, `&mut [f32]`) that the host
//!   has pinned or copied into contiguous memory for the call.
//! - **Direct**: a raw byte region (`&mut [u8]`) already owned by the host,
//!   holding native-order words. Only whole 4-byte elements are visible;
//!   a trailing partial word is ignored.
//!
//! Both modes are viewed as bytes so the kernels see one layout. Nothing is
//! copied and no reference outlives the borrow.
//!
//! ```
//! use pixbright_core::{PixelBuffer, PackedPixel};
//!
//! let mut words = vec![0xFF102030u32; 8];
//! let buf = PixelBuffer::from_words(&mut words);
//! assert_eq!(buf.len(), 8);
//! assert_eq!(buf.pixel(0), Some(PackedPixel(0xFF102030)));
//! ```

use crate::pixel::{BYTES_PER_PIXEL, PackedPixel};
use crate::{VECTOR_BYTES, VECTOR_WIDTH};

/// Bytes per `f32` element.
pub const BYTES_PER_FLOAT: usize = std::mem::size_of::<f32>();

/// Truncates a byte region to whole 4-byte elements.
#[inline]
fn whole_words(bytes: &mut [u8]) -> &mut [u8] {
    let whole = bytes.len() - bytes.len() % BYTES_PER_PIXEL;
    &mut bytes[..whole]
}

// ============================================================================
// Pixel buffer
// ============================================================================

/// Exclusive view over a sequence of packed pixel words.
#[derive(Debug)]
pub struct PixelBuffer<'a> {
    bytes: &'a mut [u8],
}

impl<'a> PixelBuffer<'a> {
    /// Views a managed word slice.
    #[inline]
    pub fn from_words(words: &'a mut [u32]) -> Self {
        Self {
            bytes: bytemuck::cast_slice_mut(words),
        }
    }

    /// Views a slice of [`PackedPixel`].
    #[inline]
    pub fn from_pixels(pixels: &'a mut [PackedPixel]) -> Self {
        Self {
            bytes: bytemuck::cast_slice_mut(pixels),
        }
    }

    /// Views a direct byte region of native-order words.
    #[inline]
    pub fn from_bytes(bytes: &'a mut [u8]) -> Self {
        Self {
            bytes: whole_words(bytes),
        }
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len() / BYTES_PER_PIXEL
    }

    /// Returns `true` if the buffer holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of full vectors a 4-wide kernel will process.
    #[inline]
    pub fn vector_count(&self) -> usize {
        self.bytes.len() / VECTOR_BYTES
    }

    /// Pixels past the last full vector.
    #[inline]
    pub fn remainder(&self) -> usize {
        self.len() % VECTOR_WIDTH
    }

    /// Reads one pixel.
    pub fn pixel(&self, index: usize) -> Option<PackedPixel> {
        let start = index.checked_mul(BYTES_PER_PIXEL)?;
        let word = self.bytes.get(start..start.checked_add(BYTES_PER_PIXEL)?)?;
        let mut raw = [0u8; BYTES_PER_PIXEL];
        raw.copy_from_slice(word);
        Some(PackedPixel::from_ne_bytes(raw))
    }

    /// Raw native-order bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &*self.bytes
    }

    /// Raw native-order bytes, mutable.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut *self.bytes
    }
}

impl<'a> From<&'a mut [u32]> for PixelBuffer<'a> {
    fn from(words: &'a mut [u32]) -> Self {
        Self::from_words(words)
    }
}

impl<'a> From<&'a mut Vec<u32>> for PixelBuffer<'a> {
    fn from(words: &'a mut Vec<u32>) -> Self {
        Self::from_words(words.as_mut_slice())
    }
}

impl<'a, const N: usize> From<&'a mut [u32; N]> for PixelBuffer<'a> {
    fn from(words: &'a mut [u32; N]) -> Self {
        Self::from_words(words.as_mut_slice())
    }
}

impl<'a> From<&'a mut [PackedPixel]> for PixelBuffer<'a> {
    fn from(pixels: &'a mut [PackedPixel]) -> Self {
        Self::from_pixels(pixels)
    }
}

// ============================================================================
// Float buffer
// ============================================================================

/// Exclusive view over a sequence of `f32` values.
#[derive(Debug)]
pub struct FloatBuffer<'a> {
    bytes: &'a mut [u8],
}

impl<'a> FloatBuffer<'a> {
    /// Views a managed float slice.
    #[inline]
    pub fn from_floats(values: &'a mut [f32]) -> Self {
        Self {
            bytes: bytemuck::cast_slice_mut(values),
        }
    }

    /// Views a direct byte region of native-order floats.
    #[inline]
    pub fn from_bytes(bytes: &'a mut [u8]) -> Self {
        Self {
            bytes: whole_words(bytes),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len() / BYTES_PER_FLOAT
    }

    /// Returns `true` if the buffer holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Elements past the last full vector.
    #[inline]
    pub fn remainder(&self) -> usize {
        self.len() % VECTOR_WIDTH
    }

    /// Reads one element.
    pub fn value(&self, index: usize) -> Option<f32> {
        let start = index.checked_mul(BYTES_PER_FLOAT)?;
        let raw = self.bytes.get(start..start.checked_add(BYTES_PER_FLOAT)?)?;
        let mut word = [0u8; BYTES_PER_FLOAT];
        word.copy_from_slice(raw);
        Some(f32::from_ne_bytes(word))
    }

    /// Raw native-order bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &*self.bytes
    }

    /// Raw native-order bytes, mutable.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut *self.bytes
    }
}

impl<'a> From<&'a mut [f32]> for FloatBuffer<'a> {
    fn from(values: &'a mut [f32]) -> Self {
        Self::from_floats(values)
    }
}

impl<'a> From<&'a mut Vec<f32>> for FloatBuffer<'a> {
    fn from(values: &'a mut Vec<f32>) -> Self {
        Self::from_floats(values.as_mut_slice())
    }
}

impl<'a, const N: usize> From<&'a mut [f32; N]> for FloatBuffer<'a> {
    fn from(values: &'a mut [f32; N]) -> Self {
        Self::from_floats(values.as_mut_slice())
    }
}
