//! Timed entry points over the brightness and scale engines.
//!
//! # Configuration
//!
//! Use [`ProcessorBuilder`] for fine-grained control:
//!
//! ```rust
//! use pixbright_compute::{Backend, Processor};
//!
//! let proc = Processor::builder()
//!     .backend(Backend::Scalar)
//!     .warn_on_remainder(false)
//!     .build()
//!     .unwrap();
//!
//! let mut pixels = vec![0x00102030u32; 16];
//! let elapsed_us = proc.adjust(&mut pixels, 10).unwrap();
//! assert_eq!(pixels[0], 0x001A2A3A);
//! # let _ = elapsed_us;
//! ```
//!
//! # Entry Points
//!
//! | Method | Path | Fails |
//! |--------|------|-------|
//! | [`Processor::brightness`] | scalar | never |
//! | [`Processor::brightness_accelerated`] | vector | `UnsupportedOperation` |
//! | [`Processor::scale`] | vector | `UnsupportedOperation` |
//! | [`Processor::adjust`] | configured backend | `UnsupportedOperation` |
//!
//! Every entry point returns elapsed whole microseconds. The buffer is
//! mutated in place; on error it is left untouched.

use std::sync::Arc;

use pixbright_core::{Error, FloatBuffer, PixelBuffer, Result};
use tracing::{debug, trace, warn};

use crate::backend::{
    Backend, BrightnessEngine, Capabilities, EngineKind, ScalarEngine, VectorEngine,
};
use crate::timing::{Clock, MonotonicClock, measure};

// ============================================================================
// Configuration
// ============================================================================

/// Processing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorConfig {
    /// Engine used by [`Processor::adjust`].
    pub backend: Backend,
    /// Log a warning when a vector call leaves trailing elements untouched.
    pub warn_on_remainder: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Auto,
            warn_on_remainder: true,
        }
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`Processor`] with configuration options.
#[derive(Debug, Clone, Default)]
pub struct ProcessorBuilder {
    config: ProcessorConfig,
    capabilities: Option<Capabilities>,
    clock: Option<Arc<dyn Clock>>,
}

impl ProcessorBuilder {
    /// Create new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the engine used by [`Processor::adjust`].
    pub fn backend(mut self, backend: Backend) -> Self {
        self.config.backend = backend;
        self
    }

    /// Override the probed capabilities.
    ///
    /// [`Capabilities`] never reports SIMD beyond the probe, so this can
    /// only take the vector engine away.
    pub fn capabilities(mut self, caps: Capabilities) -> Self {
        self.capabilities = Some(caps);
        self
    }

    /// Use a custom time source.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Enable or disable the trailing-element warning.
    pub fn warn_on_remainder(mut self, enabled: bool) -> Self {
        self.config.warn_on_remainder = enabled;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ProcessorConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the Processor.
    ///
    /// Fails with [`Error::UnsupportedOperation`] when [`Backend::Vector`]
    /// is requested without SIMD support.
    pub fn build(self) -> Result<Processor> {
        let capabilities = self.capabilities.unwrap_or_else(Capabilities::detect);
        let selected = self.config.backend.resolve(&capabilities)?;
        let clock = match self.clock {
            Some(clock) => ClockSource::Shared(clock),
            None => ClockSource::default(),
        };

        debug!(
            backend = self.config.backend.name(),
            engine = selected.name(),
            simd = capabilities.simd(),
            "Processor created"
        );

        Ok(Processor {
            config: self.config,
            capabilities,
            clock,
            scalar: ScalarEngine::new(),
            vector: VectorEngine::new(&capabilities).ok(),
            selected,
        })
    }
}

// ============================================================================
// Clock
// ============================================================================

/// Time source held by a [`Processor`].
///
/// The default monotonic clock lives inline so that building a processor
/// does not allocate.
#[derive(Debug, Clone)]
enum ClockSource {
    Monotonic(MonotonicClock),
    Shared(Arc<dyn Clock>),
}

impl Default for ClockSource {
    fn default() -> Self {
        Self::Monotonic(MonotonicClock::new())
    }
}

impl ClockSource {
    fn as_clock(&self) -> &dyn Clock {
        match self {
            Self::Monotonic(clock) => clock as &dyn Clock,
            Self::Shared(clock) => &**clock,
        }
    }
}

// ============================================================================
// Processor
// ============================================================================

/// Brightness and scale processor.
///
/// Holds no per-call state: each entry point borrows the caller's buffer
/// for the duration of the call and releases it on return.
///
/// # Example
///
/// ```rust
/// use pixbright_compute::Processor;
///
/// let proc = Processor::new();
/// let mut pixels = vec![0xFFF0F0F0u32; 4];
/// proc.brightness(&mut pixels, 20);
/// assert!(pixels.iter().all(|&p| p == 0xFFFFFFFF));
///
/// if proc.is_acceleration_supported() {
///     let mut values = vec![1.0f32, 2.0, 3.0, 4.0];
///     proc.scale(&mut values, 2.5).unwrap();
///     assert_eq!(values, [2.5, 5.0, 7.5, 10.0]);
/// }
/// ```
#[derive(Debug)]
pub struct Processor {
    config: ProcessorConfig,
    capabilities: Capabilities,
    clock: ClockSource,
    scalar: ScalarEngine,
    vector: Option<VectorEngine>,
    selected: EngineKind,
}

impl Default for Processor {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor {
    /// Create with probed capabilities and the auto backend.
    pub fn new() -> Self {
        Self::with_capabilities(Capabilities::detect())
    }

    /// Create with explicit capabilities and the auto backend.
    pub fn with_capabilities(capabilities: Capabilities) -> Self {
        Self {
            config: ProcessorConfig::default(),
            capabilities,
            clock: ClockSource::default(),
            scalar: ScalarEngine::new(),
            vector: VectorEngine::new(&capabilities).ok(),
            selected: Backend::Auto.resolve(&capabilities).unwrap_or(EngineKind::Scalar),
        }
    }

    /// Create builder for fine-grained configuration.
    pub fn builder() -> ProcessorBuilder {
        ProcessorBuilder::new()
    }

    // =========================================================================
    // Info
    // =========================================================================

    /// Current configuration.
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Capabilities the processor was built with.
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Whether the vector entry points are usable.
    pub fn is_acceleration_supported(&self) -> bool {
        self.vector.is_some()
    }

    /// Engine used by [`adjust`](Self::adjust).
    pub fn engine(&self) -> &dyn BrightnessEngine {
        if let (EngineKind::Vector, Some(vector)) = (self.selected, self.vector.as_ref()) {
            return vector;
        }
        &self.scalar
    }

    fn vector_engine(&self, operation: &'static str) -> Result<&VectorEngine> {
        self.vector
            .as_ref()
            .ok_or(Error::UnsupportedOperation { operation })
    }

    fn note_remainder(&self, operation: &'static str, len: usize, remainder: usize) {
        if self.config.warn_on_remainder && remainder > 0 {
            warn!(
                operation,
                len,
                remainder,
                "trailing elements past the last full vector are left untouched"
            );
        }
    }

    // =========================================================================
    // Entry points
    // =========================================================================

    /// Adjust brightness with the scalar engine.
    ///
    /// Processes every pixel; never fails.
    pub fn brightness<'a>(&self, pixels: impl Into<PixelBuffer<'a>>, delta: i32) -> u64 {
        let mut pixels = pixels.into();
        self.run(&self.scalar, &mut pixels, delta)
    }

    /// Adjust brightness with the vector engine.
    ///
    /// Processes `len / 4` groups of 4 pixels. Returns
    /// [`Error::UnsupportedOperation`] before touching the buffer when SIMD
    /// is unavailable.
    pub fn brightness_accelerated<'a>(
        &self,
        pixels: impl Into<PixelBuffer<'a>>,
        delta: i32,
    ) -> Result<u64> {
        let vector = self.vector_engine("brightness_accelerated")?;
        let mut pixels = pixels.into();
        self.note_remainder("brightness_accelerated", pixels.len(), pixels.remainder());
        Ok(self.run(vector, &mut pixels, delta))
    }

    /// Multiply every value by `multiplier` with the vector engine.
    ///
    /// Processes `len / 4` groups of 4 values. Returns
    /// [`Error::UnsupportedOperation`] before touching the buffer when SIMD
    /// is unavailable.
    pub fn scale<'a>(&self, values: impl Into<FloatBuffer<'a>>, multiplier: f32) -> Result<u64> {
        let vector = self.vector_engine("scale")?;
        let mut values = values.into();
        self.note_remainder("scale", values.len(), values.remainder());

        trace!(len = values.len(), multiplier, "scale");
        let m = measure(self.clock.as_clock(), || vector.scale(&mut values, multiplier));
        debug!(len = values.len(), elapsed_us = m.elapsed_us, "scale done");
        Ok(m.elapsed_us)
    }

    /// Adjust brightness with the configured backend.
    pub fn adjust<'a>(&self, pixels: impl Into<PixelBuffer<'a>>, delta: i32) -> Result<u64> {
        match self.selected {
            EngineKind::Scalar => Ok(self.brightness(pixels, delta)),
            EngineKind::Vector => self.brightness_accelerated(pixels, delta),
        }
    }

    fn run(&self, engine: &dyn BrightnessEngine, pixels: &mut PixelBuffer<'_>, delta: i32) -> u64 {
        trace!(engine = engine.name(), len = pixels.len(), delta, "brightness");
        let m = measure(self.clock.as_clock(), || engine.adjust_brightness(pixels, delta));
        debug!(
            engine = engine.name(),
            len = pixels.len(),
            elapsed_us = m.elapsed_us,
            "brightness done"
        );
        m.elapsed_us
    }
}
