//! Capability probe and engine detection.
//!
//! Whether the vector engine is usable is a property of the build target,
//! not of the machine that happens to run the binary: a target compiled
//! with the required instruction set always reports support. No runtime CPU
//! feature detection is performed.

use super::EngineKind;

/// Returns `true` when the SIMD path is usable on the built target.
///
/// Requires the `simd` cargo feature and a target with a 128-bit SIMD unit
/// enabled at compile time (NEON on aarch64, SSE2 on x86/x86_64, simd128 on
/// wasm32).
pub const fn simd_supported() -> bool {
    cfg!(all(
        feature = "simd",
        any(
            all(target_arch = "aarch64", target_feature = "neon"),
            all(
                any(target_arch = "x86", target_arch = "x86_64"),
                target_feature = "sse2"
            ),
            all(target_arch = "wasm32", target_feature = "simd128"),
        )
    ))
}

/// Capabilities of the target the engines run on.
///
/// The probe is the upper bound: an override can switch SIMD off but never
/// on for a target where [`simd_supported`] is `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    simd: bool,
}

impl Capabilities {
    /// Capabilities of the built target.
    pub const fn detect() -> Self {
        Self::with_simd(true)
    }

    /// A target without vector instructions.
    pub const fn scalar_only() -> Self {
        Self::with_simd(false)
    }

    /// Request the vector engine, limited by the probe.
    pub const fn with_simd(enabled: bool) -> Self {
        Self {
            simd: enabled && simd_supported(),
        }
    }

    /// Vector (SIMD) engine usable.
    pub const fn simd(&self) -> bool {
        self.simd
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::detect()
    }
}

/// Information about a brightness engine.
#[derive(Debug, Clone)]
pub struct EngineInfo {
    /// Engine type.
    pub kind: EngineKind,
    /// Human-readable name.
    pub name: &'static str,
    /// Whether the engine is available.
    pub available: bool,
    /// Priority for auto-selection (higher = preferred).
    pub priority: u32,
    /// Description.
    pub description: &'static str,
}

/// Detect all engines for the given capabilities, best first.
pub fn detect_engines(caps: &Capabilities) -> Vec<EngineInfo> {
    let mut engines = vec![
        EngineInfo {
            kind: EngineKind::Scalar,
            name: "scalar",
            available: true,
            priority: 10,
            description: "Portable per-pixel clamp",
        },
        EngineInfo {
            kind: EngineKind::Vector,
            name: "vector",
            available: caps.simd(),
            priority: if caps.simd() { 100 } else { 0 },
            description: "128-bit SIMD, 4 elements per iteration",
        },
    ];

    engines.sort_by(|a, b| b.priority.cmp(&a.priority));
    engines
}

/// Select the best available engine.
pub fn select_best_engine(caps: &Capabilities) -> EngineKind {
    detect_engines(caps)
        .into_iter()
        .filter(|e| e.available)
        .max_by_key(|e| e.priority)
        .map(|e| e.kind)
        .unwrap_or(EngineKind::Scalar)
}

/// Get description of available engines.
pub fn describe_engines(caps: &Capabilities) -> String {
    let mut desc = String::new();

    for info in detect_engines(caps) {
        let status = if info.available { "+" } else { "-" };
        desc.push_str(&format!("[{}] {}: {}\n", status, info.name, info.description));
    }

    desc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_is_stable() {
        assert_eq!(simd_supported(), simd_supported());
        assert_eq!(Capabilities::detect().simd(), simd_supported());
        assert_eq!(Capabilities::default(), Capabilities::detect());
    }

    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    #[test]
    fn test_x86_64_always_has_sse2() {
        assert!(simd_supported());
    }

    #[test]
    fn test_scalar_only_selects_scalar() {
        let caps = Capabilities::scalar_only();
        assert_eq!(select_best_engine(&caps), EngineKind::Scalar);
        let engines = detect_engines(&caps);
        assert_eq!(engines[0].kind, EngineKind::Scalar);
        assert!(!engines[1].available);
    }

    #[test]
    fn test_simd_selects_vector() {
        let expected = if simd_supported() {
            EngineKind::Vector
        } else {
            EngineKind::Scalar
        };
        assert_eq!(select_best_engine(&Capabilities::detect()), expected);
    }

    #[test]
    fn test_override_cannot_exceed_probe() {
        assert_eq!(Capabilities::with_simd(true).simd(), simd_supported());
        assert_eq!(Capabilities::with_simd(true), Capabilities::detect());
        assert!(!Capabilities::with_simd(false).simd());
        assert_eq!(Capabilities::with_simd(false), Capabilities::scalar_only());
    }

    #[cfg(not(feature = "simd"))]
    #[test]
    fn test_feature_off_reports_no_simd() {
        assert!(!simd_supported());
        assert!(!Capabilities::with_simd(true).simd());
        assert_eq!(select_best_engine(&Capabilities::with_simd(true)), EngineKind::Scalar);
    }

    #[test]
    fn test_describe() {
        let desc = describe_engines(&Capabilities::scalar_only());
        assert!(desc.contains("[+] scalar"));
        assert!(desc.contains("[-] vector"));
    }
}
