//! Scalar engine: per-pixel clamp, no target requirements.

use pixbright_core::PixelBuffer;
use pixbright_math::scalar::brightness_inplace;

use super::{BrightnessEngine, EngineKind};

/// Portable brightness engine.
///
/// Processes every pixel regardless of buffer length. A zero delta still
/// makes a full pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarEngine;

impl ScalarEngine {
    pub fn new() -> Self {
        Self
    }
}

impl BrightnessEngine for ScalarEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Scalar
    }

    fn adjust_brightness(&self, pixels: &mut PixelBuffer<'_>, delta: i32) {
        brightness_inplace(pixels.as_bytes_mut(), delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_pass_any_length() {
        let mut words = vec![0x00102030u32; 7];
        ScalarEngine::new().adjust_brightness(&mut PixelBuffer::from(&mut words), 10);
        assert!(words.iter().all(|&w| w == 0x001A2A3A));
    }

    #[test]
    fn test_empty_buffer() {
        let mut words: Vec<u32> = Vec::new();
        ScalarEngine::new().adjust_brightness(&mut PixelBuffer::from(&mut words), 10);
        assert!(words.is_empty());
    }
}
