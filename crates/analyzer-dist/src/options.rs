//! Analyzer options passed through to the native plugin.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Options record for the analyzer, merged from defaults and caller
/// overrides.
///
/// The record is open: keys the analyzer does not know about are kept in
/// [`AnalyzerOptions::extra`] and serialized inline, so hosts can pass
/// configuration straight through to newer plugin builds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerOptions {
    /// Resource size above which the analyzer flags a file, in bytes.
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold: u64,

    /// Whether the analyzer prints optimization suggestions.
    #[serde(default = "default_show_suggestions")]
    pub show_suggestions: bool,

    /// Whether the analyzer writes a report file.
    #[serde(default = "default_generate_report")]
    pub generate_report: bool,

    /// Unrecognized keys, passed through unchanged.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

fn default_warning_threshold() -> u64 {
    1024 * 1024
}

fn default_show_suggestions() -> bool {
    true
}

fn default_generate_report() -> bool {
    false
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            warning_threshold: default_warning_threshold(),
            show_suggestions: default_show_suggestions(),
            generate_report: default_generate_report(),
            extra: serde_json::Map::new(),
        }
    }
}

impl AnalyzerOptions {
    /// Merge caller overrides over the defaults.
    ///
    /// Overrides win key-by-key; keys absent from the overrides keep their
    /// default value. A missing or malformed overrides value falls back to
    /// the defaults, matching how the native plugin treats its own options
    /// payload.
    #[must_use]
    pub fn from_overrides(overrides: Option<Value>) -> Self {
        match overrides {
            None | Some(Value::Null) => Self::default(),
            Some(value) => serde_json::from_value(value).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "malformed analyzer options, using defaults");
                Self::default()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use serde_json::json;

    #[test]
    fn AnalyzerOptions___default___matches_documented_values() {
        let options = AnalyzerOptions::default();

        assert_eq!(options.warning_threshold, 1024 * 1024);
        assert!(options.show_suggestions);
        assert!(!options.generate_report);
        assert!(options.extra.is_empty());
    }

    #[test]
    fn AnalyzerOptions___from_overrides___none___returns_defaults() {
        assert_eq!(
            AnalyzerOptions::from_overrides(None),
            AnalyzerOptions::default()
        );
    }

    #[test]
    fn AnalyzerOptions___from_overrides___empty_object___returns_defaults() {
        let options = AnalyzerOptions::from_overrides(Some(json!({})));

        assert_eq!(options, AnalyzerOptions::default());
    }

    #[test]
    fn AnalyzerOptions___from_overrides___override_wins_per_key() {
        let options = AnalyzerOptions::from_overrides(Some(json!({
            "warning_threshold": 2048,
        })));

        assert_eq!(options.warning_threshold, 2048);
        assert!(options.show_suggestions);
        assert!(!options.generate_report);
    }

    #[test]
    fn AnalyzerOptions___from_overrides___unknown_keys_pass_through() {
        let options = AnalyzerOptions::from_overrides(Some(json!({
            "custom_key": "x",
        })));

        assert_eq!(options.warning_threshold, 1024 * 1024);
        assert!(options.show_suggestions);
        assert!(!options.generate_report);
        assert_eq!(options.extra.get("custom_key"), Some(&json!("x")));
    }

    #[test]
    fn AnalyzerOptions___from_overrides___malformed_value___falls_back_to_defaults() {
        let options = AnalyzerOptions::from_overrides(Some(json!("not an object")));

        assert_eq!(options, AnalyzerOptions::default());
    }

    #[test]
    fn AnalyzerOptions___serialize___flattens_extra_keys() {
        let options = AnalyzerOptions::from_overrides(Some(json!({
            "generate_report": true,
            "custom_key": "x",
        })));

        let value = serde_json::to_value(&options).unwrap();

        assert_eq!(
            value,
            json!({
                "warning_threshold": 1024 * 1024,
                "show_suggestions": true,
                "generate_report": true,
                "custom_key": "x",
            })
        );
    }
}
