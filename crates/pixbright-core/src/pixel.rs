//! Packed 32-bit ARGB pixel words.
//!
//! A packed pixel stores four unsigned 8-bit channels in one `u32`,
//! alpha/red/green/blue from the most to the least significant byte:
//!
//! ```text
//! bits:   31..24  23..16  15..8   7..0
//!         alpha   red     green   blue
//! ```
//!
//! # Memory Layout
//!
//! Buffers hold words in native byte order, so on a little-endian target the
//! bytes of one pixel appear as `B, G, R, A`. Kernels that work on raw bytes
//! must derive lane positions from [`PackedPixel::to_ne_bytes`] rather than
//! hard-coding an order.
//!
//! # Example
//!
//! ```
//! use pixbright_core::PackedPixel;
//!
//! let px = PackedPixel::from_argb(0xFF, 0x10, 0x20, 0x30);
//! assert_eq!(px.to_u32(), 0xFF102030);
//! assert_eq!(px.with_brightness(10).to_u32(), 0xFF1A2A3A);
//! ```

use bytemuck::{Pod, Zeroable};
use std::fmt;

/// Number of channels in a packed pixel.
pub const CHANNELS: usize = 4;

/// Bytes per packed pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Bit shift of the alpha channel.
pub const ALPHA_SHIFT: u32 = 24;
/// Bit shift of the red channel.
pub const RED_SHIFT: u32 = 16;
/// Bit shift of the green channel.
pub const GREEN_SHIFT: u32 = 8;
/// Bit shift of the blue channel.
pub const BLUE_SHIFT: u32 = 0;

/// Clamps a widened channel value into `[0, 255]`.
///
/// # Example
///
/// ```
/// use pixbright_core::pixel::clamp_channel;
///
/// assert_eq!(clamp_channel(-12), 0);
/// assert_eq!(clamp_channel(128), 128);
/// assert_eq!(clamp_channel(300), 255);
/// ```
#[inline]
pub const fn clamp_channel(value: i32) -> u8 {
    if value < 0 {
        0
    } else if value > u8::MAX as i32 {
        u8::MAX
    } else {
        value as u8
    }
}

/// A packed ARGB pixel word.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[repr(transparent)]
pub struct PackedPixel(pub u32);

impl PackedPixel {
    /// Packs four channels into a word.
    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(
            (a as u32) << ALPHA_SHIFT
                | (r as u32) << RED_SHIFT
                | (g as u32) << GREEN_SHIFT
                | (b as u32) << BLUE_SHIFT,
        )
    }

    /// Raw word value.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// Alpha channel.
    #[inline]
    pub const fn a(self) -> u8 {
        (self.0 >> ALPHA_SHIFT) as u8
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> RED_SHIFT) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> GREEN_SHIFT) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> BLUE_SHIFT) as u8
    }

    /// Channels as `[a, r, g, b]`.
    #[inline]
    pub const fn to_argb(self) -> [u8; CHANNELS] {
        [self.a(), self.r(), self.g(), self.b()]
    }

    /// The word as it is laid out in a native-order buffer.
    #[inline]
    pub const fn to_ne_bytes(self) -> [u8; BYTES_PER_PIXEL] {
        self.0.to_ne_bytes()
    }

    /// Reads a word from native-order bytes.
    #[inline]
    pub const fn from_ne_bytes(bytes: [u8; BYTES_PER_PIXEL]) -> Self {
        Self(u32::from_ne_bytes(bytes))
    }

    /// Adds `delta` to red, green and blue, clamping each to `[0, 255]`.
    ///
    /// Alpha is carried through untouched. Extreme deltas cannot overflow:
    /// the channel sum saturates in `i32` before clamping.
    ///
    /// ```
    /// use pixbright_core::PackedPixel;
    ///
    /// assert_eq!(PackedPixel(0xFF000000).with_brightness(-10), PackedPixel(0xFF000000));
    /// assert_eq!(PackedPixel(0xFFF0F0F0).with_brightness(20), PackedPixel(0xFFFFFFFF));
    /// ```
    #[inline]
    pub const fn with_brightness(self, delta: i32) -> Self {
        Self::from_argb(
            self.a(),
            clamp_channel((self.r() as i32).saturating_add(delta)),
            clamp_channel((self.g() as i32).saturating_add(delta)),
            clamp_channel((self.b() as i32).saturating_add(delta)),
        )
    }

    /// Index of the alpha byte inside [`to_ne_bytes`](Self::to_ne_bytes).
    #[inline]
    pub const fn alpha_byte_index() -> usize {
        if cfg!(target_endian = "little") { 3 } else { 0 }
    }
}

impl From<u32> for PackedPixel {
    #[inline]
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<PackedPixel> for u32 {
    #[inline]
    fn from(px: PackedPixel) -> Self {
        px.0
    }
}

impl fmt::Debug for PackedPixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PackedPixel({:#010X})", self.0)
    }
}

impl fmt::Display for PackedPixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "argb({}, {}, {}, {})",
            self.a(),
            self.r(),
            self.g(),
            self.b()
        )
    }
}
