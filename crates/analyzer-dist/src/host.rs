//! Host platform introspection.

use std::fmt;

/// Normalized host platform identifiers.
///
/// Identifiers follow the distribution's artifact naming: `darwin`, `linux`,
/// or `win32` for the operating system and `arm64` or `x64` for the CPU.
/// [`HostPlatform::current`] reads the identifiers from the running process;
/// arbitrary values can be constructed for tests or injection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPlatform {
    /// Operating system identifier.
    pub os: String,
    /// CPU architecture identifier.
    pub arch: String,
}

impl HostPlatform {
    /// Create a host platform from explicit identifiers.
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// Detect the current host platform at runtime.
    ///
    /// No environment variables are consulted; the identifiers come from
    /// the compile-time constants of the running binary.
    #[must_use]
    pub fn current() -> Self {
        Self {
            os: normalize_os(std::env::consts::OS),
            arch: normalize_arch(std::env::consts::ARCH),
        }
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}

// Rust names some targets differently from the distribution layout.
fn normalize_os(os: &str) -> String {
    match os {
        "macos" => "darwin".to_string(),
        "windows" => "win32".to_string(),
        other => other.to_string(),
    }
}

fn normalize_arch(arch: &str) -> String {
    match arch {
        "aarch64" => "arm64".to_string(),
        "x86_64" => "x64".to_string(),
        other => other.to_string(),
    }
}
