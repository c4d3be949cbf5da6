//! Installation directory handling and descriptor construction.

use crate::{AnalyzerOptions, DistResult, HostPlatform, PLUGIN_NAME, Platform};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Handle to an installed analyzer package directory.
///
/// The installation directory contains one subdirectory per supported
/// platform; paths are computed per call, never cached.
///
/// # Example
///
/// ```no_run
/// use farm_analyzer_dist::Dist;
///
/// let dist = Dist::new("/opt/farm/analyzer");
/// let path = dist.library_path()?;
/// # Ok::<(), farm_analyzer_dist::DistError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Dist {
    root: PathBuf,
}

impl Dist {
    /// Create a handle for an installation directory.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The installation directory this handle resolves against.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The platform subdirectory for a distribution target.
    #[must_use]
    pub fn platform_dir(&self, platform: Platform) -> PathBuf {
        self.root.join(platform.dir_name())
    }

    /// Path of the native library for the current host.
    ///
    /// Fails with [`DistError::UnsupportedPlatform`] on hosts the
    /// distribution does not ship a library for.
    ///
    /// [`DistError::UnsupportedPlatform`]: crate::DistError::UnsupportedPlatform
    pub fn library_path(&self) -> DistResult<PathBuf> {
        self.library_path_for(&HostPlatform::current())
    }

    /// Path of the native library for an explicit host platform.
    pub fn library_path_for(&self, host: &HostPlatform) -> DistResult<PathBuf> {
        let platform = Platform::resolve(host)?;
        tracing::debug!(%platform, root = %self.root.display(), "resolved analyzer library");
        Ok(self.platform_dir(platform).join(platform.library_file_name()))
    }

    /// Build a configured plugin descriptor for the current host.
    ///
    /// `overrides` is an optional JSON mapping merged over the default
    /// options, override wins per key.
    pub fn with_config(&self, overrides: Option<Value>) -> DistResult<PluginDescriptor> {
        self.with_config_for(&HostPlatform::current(), overrides)
    }

    /// Build a configured plugin descriptor for an explicit host platform.
    pub fn with_config_for(
        &self,
        host: &HostPlatform,
        overrides: Option<Value>,
    ) -> DistResult<PluginDescriptor> {
        Ok(PluginDescriptor {
            name: PLUGIN_NAME.to_string(),
            path: self.library_path_for(host)?,
            options: AnalyzerOptions::from_overrides(overrides),
        })
    }
}

/// Descriptor handed to the host bundler: plugin name, resolved library
/// path, and effective options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginDescriptor {
    /// Plugin name.
    pub name: String,
    /// Resolved path of the native library.
    pub path: PathBuf,
    /// Effective options after merging overrides over defaults.
    pub options: AnalyzerOptions,
}
