//! Platform targets of the prebuilt analyzer distribution.

use crate::{DistError, DistResult, HostPlatform};
use std::fmt;

/// Platform targets the distribution ships a prebuilt library for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// macOS on Apple Silicon.
    DarwinArm64,
    /// macOS on Intel.
    DarwinX64,
    /// Linux on x86_64, glibc.
    LinuxX64Gnu,
    /// Windows on x86_64, MSVC toolchain.
    Win32X64Msvc,
}

impl Platform {
    /// Resolve the distribution target for a host platform.
    ///
    /// Fails with [`DistError::UnsupportedPlatform`] when the host's
    /// operating system is not one the distribution ships artifacts for.
    pub fn resolve(host: &HostPlatform) -> DistResult<Self> {
        Self::detect(host).ok_or_else(|| DistError::UnsupportedPlatform {
            os: host.os.clone(),
            arch: host.arch.clone(),
        })
    }

    /// Resolve the distribution target for a host platform, or `None` for
    /// hosts with no prebuilt artifact.
    ///
    /// The quiet counterpart to [`Platform::resolve`], used where an
    /// unsupported host is a non-event rather than an error.
    #[must_use]
    pub fn detect(host: &HostPlatform) -> Option<Self> {
        match host.os.as_str() {
            // Only darwin ships separate per-arch artifacts; linux and
            // win32 carry a single x64 build regardless of the host arch.
            "darwin" => {
                if host.arch == "arm64" {
                    Some(Self::DarwinArm64)
                } else {
                    Some(Self::DarwinX64)
                }
            }
            "linux" => Some(Self::LinuxX64Gnu),
            "win32" => Some(Self::Win32X64Msvc),
            _ => None,
        }
    }

    /// Name of the platform subdirectory inside the installed package.
    #[must_use]
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::DarwinArm64 => "darwin-arm64",
            Self::DarwinX64 => "darwin-x64",
            Self::LinuxX64Gnu => "linux-x64-gnu",
            Self::Win32X64Msvc => "win32-x64-msvc",
        }
    }

    /// Filename of the native library inside the platform subdirectory.
    #[must_use]
    pub fn library_file_name(&self) -> &'static str {
        match self {
            Self::DarwinArm64 | Self::DarwinX64 => "libfarm_bundle_size_analyzer.dylib",
            Self::LinuxX64Gnu => "libfarm_bundle_size_analyzer.so",
            Self::Win32X64Msvc => "farm_bundle_size_analyzer.dll",
        }
    }

    /// Get the platform key string (same as the subdirectory name).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        self.dir_name()
    }

    /// Parse a platform from its key string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "darwin-arm64" => Some(Self::DarwinArm64),
            "darwin-x64" => Some(Self::DarwinX64),
            "linux-x64-gnu" => Some(Self::LinuxX64Gnu),
            "win32-x64-msvc" => Some(Self::Win32X64Msvc),
            _ => None,
        }
    }

    /// Get all platforms the distribution ships.
    #[must_use]
    pub fn all() -> &'static [Platform] {
        &[
            Self::DarwinArm64,
            Self::DarwinX64,
            Self::LinuxX64Gnu,
            Self::Win32X64Msvc,
        ]
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
