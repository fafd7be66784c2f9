//! Brightness engines with capability-based selection.
//!
//! # Architecture
//!
//! ```text
//! Backend (Auto | Scalar | Vector)
//!     +-- resolved against Capabilities into an EngineKind
//!             +-- ScalarEngine  (portable clamp, any length)
//!             +-- VectorEngine  (u8x16 / f32x4, 4 elements per iteration)
//! ```
//!
//! Target-conditional code lives only in [`simd_supported`]. Everything
//! else asks a [`Capabilities`] value.

mod detect;
mod scalar;
mod vector;

pub use detect::{
    Capabilities, EngineInfo, describe_engines, detect_engines, select_best_engine,
    simd_supported,
};
pub use scalar::ScalarEngine;
pub use vector::VectorEngine;

use std::fmt;
use std::str::FromStr;

use pixbright_core::{Error, PixelBuffer, Result};

/// Concrete engine implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineKind {
    /// Portable clamp-based engine.
    Scalar,
    /// SIMD saturating-arithmetic engine.
    Vector,
}

impl EngineKind {
    /// Get human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Vector => "vector",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Requested engine selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Vector when the target supports it, scalar otherwise.
    #[default]
    Auto,
    /// Always the scalar engine.
    Scalar,
    /// Always the vector engine; unavailable without SIMD.
    Vector,
}

impl Backend {
    /// Check if this backend is available with the given capabilities.
    pub fn is_available(&self, caps: &Capabilities) -> bool {
        match self {
            Self::Auto | Self::Scalar => true,
            Self::Vector => caps.simd(),
        }
    }

    /// Get human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Scalar => "scalar",
            Self::Vector => "vector",
        }
    }

    /// Resolve to a concrete engine.
    pub fn resolve(&self, caps: &Capabilities) -> Result<EngineKind> {
        match self {
            Self::Auto => Ok(select_best_engine(caps)),
            Self::Scalar => Ok(EngineKind::Scalar),
            Self::Vector if caps.simd() => Ok(EngineKind::Vector),
            Self::Vector => Err(Error::UnsupportedOperation {
                operation: "vector backend",
            }),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "scalar" | "cpu" => Ok(Self::Scalar),
            "vector" | "simd" => Ok(Self::Vector),
            _ => Err(Error::UnknownBackend(s.to_string())),
        }
    }
}

/// Abstract brightness transform shared by all engines.
///
/// Implementations mutate the buffer in place and never allocate. An engine
/// value only exists once its capability requirements are met, so the
/// transform itself cannot fail.
pub trait BrightnessEngine: Send + Sync {
    /// Engine type.
    fn kind(&self) -> EngineKind;

    /// Engine name.
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Adds `delta` to the color channels of every processed pixel.
    fn adjust_brightness(&self, pixels: &mut PixelBuffer<'_>, delta: i32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_from_str() {
        assert_eq!("auto".parse::<Backend>().unwrap(), Backend::Auto);
        assert_eq!(" Scalar ".parse::<Backend>().unwrap(), Backend::Scalar);
        assert_eq!("SIMD".parse::<Backend>().unwrap(), Backend::Vector);
        assert_eq!("vector".parse::<Backend>().unwrap(), Backend::Vector);
        assert!(matches!("gpu".parse::<Backend>(), Err(Error::UnknownBackend(s)) if s == "gpu"));
    }

    #[test]
    fn test_backend_resolve() {
        let none = Capabilities::scalar_only();
        let probed = Capabilities::detect();

        assert_eq!(Backend::Auto.resolve(&none).unwrap(), EngineKind::Scalar);
        assert_eq!(Backend::Scalar.resolve(&probed).unwrap(), EngineKind::Scalar);
        assert!(Backend::Vector.resolve(&none).unwrap_err().is_unsupported());

        if probed.simd() {
            assert_eq!(Backend::Auto.resolve(&probed).unwrap(), EngineKind::Vector);
            assert_eq!(Backend::Vector.resolve(&probed).unwrap(), EngineKind::Vector);
        } else {
            assert_eq!(Backend::Auto.resolve(&probed).unwrap(), EngineKind::Scalar);
            assert!(Backend::Vector.resolve(&probed).is_err());
        }
    }

    #[test]
    fn test_backend_availability() {
        let none = Capabilities::scalar_only();
        assert!(Backend::Auto.is_available(&none));
        assert!(Backend::Scalar.is_available(&none));
        assert!(!Backend::Vector.is_available(&none));
    }

    #[test]
    fn test_display() {
        assert_eq!(Backend::Vector.to_string(), "vector");
        assert_eq!(EngineKind::Scalar.to_string(), "scalar");
    }
}
