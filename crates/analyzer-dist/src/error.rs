//! Error types for distribution operations.

use thiserror::Error;

/// Errors that can occur while locating the native analyzer library.
#[derive(Debug, Error)]
pub enum DistError {
    /// No prebuilt library is shipped for the host platform.
    #[error("unsupported platform: {os}-{arch}")]
    UnsupportedPlatform { os: String, arch: String },
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn DistError___unsupported_platform___displays_os_and_arch() {
        let err = DistError::UnsupportedPlatform {
            os: "freebsd".to_string(),
            arch: "x64".to_string(),
        };

        assert_eq!(err.to_string(), "unsupported platform: freebsd-x64");
    }
}
