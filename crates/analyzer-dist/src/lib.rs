//! Distribution glue for the Farm bundle size analyzer plugin.
//!
//! The analyzer itself is a prebuilt native library, shipped once per
//! supported platform inside the installed package directory. This crate
//! locates the right artifact for the host machine and builds the
//! descriptor the host bundler consumes.
//!
//! # Installed Layout
//!
//! ```text
//! <installation directory>
//! ├── darwin-arm64/
//! │   └── libfarm_bundle_size_analyzer.dylib
//! ├── darwin-x64/
//! │   └── libfarm_bundle_size_analyzer.dylib
//! ├── linux-x64-gnu/
//! │   └── libfarm_bundle_size_analyzer.so
//! └── win32-x64-msvc/
//!     └── farm_bundle_size_analyzer.dll
//! ```
//!
//! # Example
//!
//! ```no_run
//! use farm_analyzer_dist::Dist;
//!
//! let dist = Dist::new("/opt/farm/analyzer");
//!
//! // Plain path, for hosts that take the library location directly.
//! let path = dist.library_path()?;
//!
//! // Configured descriptor, for hosts that accept plugin options.
//! let descriptor = dist.with_config(Some(serde_json::json!({
//!     "warning_threshold": 2 * 1024 * 1024,
//! })))?;
//! # Ok::<(), farm_analyzer_dist::DistError>(())
//! ```

mod dist;
mod error;
mod host;
mod options;
mod platform;

pub use dist::{Dist, PluginDescriptor};
pub use error::DistError;
pub use host::HostPlatform;
pub use options::AnalyzerOptions;
pub use platform::Platform;

/// Result type for distribution operations.
pub type DistResult<T> = Result<T, DistError>;

/// Plugin name reported to the host bundler.
pub const PLUGIN_NAME: &str = "farm-bundle-size-analyzer";
