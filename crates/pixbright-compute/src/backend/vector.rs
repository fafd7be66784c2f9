//! Vector engine: 128-bit SIMD, 4 elements per iteration.
//!
//! Only buffers whose length is a multiple of 4 are fully processed. The
//! trailing `len % 4` elements are left untouched; callers that need them
//! transformed must pad the buffer or use the scalar engine.

use pixbright_core::{Error, FloatBuffer, PixelBuffer, Result};
use pixbright_math::simd::{brightness_inplace_x4, scale_inplace_x4};

use super::{BrightnessEngine, Capabilities, EngineKind};

/// SIMD brightness and scale engine.
///
/// Can only be constructed when [`Capabilities::simd`] reports `true`.
#[derive(Debug, Clone, Copy)]
pub struct VectorEngine {
    _guard: (),
}

impl VectorEngine {
    /// Create the engine, or fail with [`Error::UnsupportedOperation`].
    pub fn new(caps: &Capabilities) -> Result<Self> {
        if !caps.simd() {
            return Err(Error::UnsupportedOperation {
                operation: "vector engine",
            });
        }
        Ok(Self { _guard: () })
    }

    /// Multiplies every element of full vectors by `multiplier`.
    pub fn scale(&self, values: &mut FloatBuffer<'_>, multiplier: f32) {
        scale_inplace_x4(values.as_bytes_mut(), multiplier);
    }
}

impl BrightnessEngine for VectorEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Vector
    }

    fn adjust_brightness(&self, pixels: &mut PixelBuffer<'_>, delta: i32) {
        brightness_inplace_x4(pixels.as_bytes_mut(), delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Option<VectorEngine> {
        VectorEngine::new(&Capabilities::detect()).ok()
    }

    #[test]
    fn test_requires_simd() {
        let err = VectorEngine::new(&Capabilities::scalar_only()).unwrap_err();
        assert!(err.is_unsupported());
    }

    #[test]
    fn test_follows_probe() {
        let engine = VectorEngine::new(&Capabilities::with_simd(true));
        assert_eq!(engine.is_ok(), crate::backend::simd_supported());
    }

    #[test]
    fn test_brightness_full_vectors() {
        let Some(engine) = engine() else { return };
        let mut words = vec![0xFFF0F0F0u32; 8];
        engine.adjust_brightness(&mut PixelBuffer::from(&mut words), 20);
        assert!(words.iter().all(|&w| w == 0xFFFFFFFF));
    }

    #[test]
    fn test_brightness_leaves_remainder() {
        let Some(engine) = engine() else { return };
        let mut words = vec![0x00102030u32; 5];
        engine.adjust_brightness(&mut PixelBuffer::from(&mut words), 10);
        assert_eq!(&words[..4], &[0x001A2A3A; 4]);
        assert_eq!(words[4], 0x00102030);
    }

    #[test]
    fn test_scale() {
        let Some(engine) = engine() else { return };
        let mut values = vec![1.0f32, 2.0, 3.0, 4.0];
        engine.scale(&mut FloatBuffer::from(&mut values), 2.5);
        assert_eq!(values, vec![2.5, 5.0, 7.5, 10.0]);
    }
}
