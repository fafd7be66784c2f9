//! Error types for pixbright operations.
//!
//! Only one failure is modeled by the transform engine itself:
//! [`Error::UnsupportedOperation`], raised when a vector entry point is
//! invoked on a target built without the required instruction set. It is
//! always returned before the buffer is touched.
//!
//! Malformed input (a vector path given a length that is not a multiple of
//! the vector width) is a caller precondition and is not reported here.
//!
//! # Usage
//!
//! ```rust
//! use pixbright_core::{Error, Result};
//!
//! fn require_simd(supported: bool) -> Result<()> {
//!     if !supported {
//!         return Err(Error::UnsupportedOperation { operation: "brightness_accelerated" });
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_simd(false).unwrap_err().is_unsupported());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pixbright.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vector operation was requested on a target without SIMD support.
    #[error("unsupported operation: {operation} requires SIMD support on this target")]
    UnsupportedOperation {
        /// Name of the rejected operation.
        operation: &'static str,
    },

    /// A configuration string did not name a known backend.
    #[error("unknown backend '{0}' (expected auto, scalar or vector)")]
    UnknownBackend(String),
}

impl Error {
    /// Returns `true` for [`Error::UnsupportedOperation`].
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedOperation { .. })
    }
}
