//! Library path and descriptor resolution for install debugging.

use anyhow::{Context, Result};
use farm_analyzer_dist::Dist;
use std::io::Write;
use std::path::Path;

/// Print the resolved library path, or the full plugin descriptor as JSON.
///
/// Unlike the post-install check this command uses the loud policy: an
/// unsupported host platform is an error and the process exits nonzero.
pub fn run<W: Write>(root: &Path, json: bool, options: Option<&str>, out: &mut W) -> Result<()> {
    let dist = Dist::new(root);

    if json || options.is_some() {
        let overrides = options
            .map(serde_json::from_str)
            .transpose()
            .context("--options is not valid JSON")?;
        let descriptor = dist.with_config(overrides)?;
        writeln!(out, "{}", serde_json::to_string_pretty(&descriptor)?)?;
    } else {
        writeln!(out, "{}", dist.library_path()?.display())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use farm_analyzer_dist::{HostPlatform, Platform};

    #[test]
    fn run___plain___prints_library_path_for_build_host() {
        let mut out = Vec::new();

        run(Path::new("/opt/pkg"), false, None, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let platform = Platform::resolve(&HostPlatform::current()).unwrap();
        assert!(output.trim_end().ends_with(platform.library_file_name()));
        assert!(output.contains(platform.dir_name()));
    }

    #[test]
    fn run___json___prints_descriptor_with_merged_options() {
        let mut out = Vec::new();

        run(
            Path::new("/opt/pkg"),
            true,
            Some(r#"{"warning_threshold": 2048}"#),
            &mut out,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["name"], "farm-bundle-size-analyzer");
        assert_eq!(value["options"]["warning_threshold"], 2048);
        assert_eq!(value["options"]["show_suggestions"], true);
    }

    #[test]
    fn run___invalid_options_json___returns_error() {
        let mut out = Vec::new();

        let result = run(Path::new("/opt/pkg"), true, Some("{not json"), &mut out);

        assert!(result.is_err());
    }
}
