//! Binary target detection.

use std::fmt;

/// The platform bundled engines are built for, as `<os>-<arch>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryTarget {
    os: String,
    arch: String,
}

impl BinaryTarget {
    /// Detect the current platform.
    pub fn current() -> Self {
        let os = if cfg!(target_os = "macos") {
            "darwin"
        } else {
            std::env::consts::OS
        };
        Self::new(os, std::env::consts::ARCH)
    }

    /// Create a target from explicit parts.
    pub fn new(os: &str, arch: &str) -> Self {
        Self {
            os: os.to_string(),
            arch: arch.to_string(),
        }
    }

    /// Whether binaries for this target carry an `.exe` extension.
    pub fn is_windows(&self) -> bool {
        self.os == "windows"
    }
}

impl fmt::Display for BinaryTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}
