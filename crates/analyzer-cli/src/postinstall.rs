//! Post-install verification of the installed platform artifact.

use farm_analyzer_dist::{Dist, HostPlatform, Platform};
use std::io::{self, Write};
use std::path::Path;

/// Run the post-install check, writing diagnostics to `out`.
///
/// Prints the install banner, then reports whether the platform
/// subdirectory for `host` exists under `root`. Hosts with no prebuilt
/// artifact are skipped without further output; that case only surfaces
/// as an error later, at plugin load.
pub fn run<W: Write>(root: &Path, host: &HostPlatform, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "📦 Farm Bundle Size Analyzer plugin installed successfully!"
    )?;

    let Some(platform) = Platform::detect(host) else {
        return Ok(());
    };

    let lib_dir = Dist::new(root).platform_dir(platform);
    if lib_dir.is_dir() {
        writeln!(
            out,
            "✅ Found platform-specific library: {}",
            platform.dir_name()
        )?;
    } else {
        writeln!(out, "⚠️  Platform library not found: {}", platform.dir_name())?;
    }

    Ok(())
}
