use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::range::RangeSpec;
use crate::data::table::DEFAULT_LABELS;
use crate::helper::{CommandHelper, HelperCall, ListHelper, UnboundHelper};

// ---------------------------------------------------------------------------
// Configuration file
// ---------------------------------------------------------------------------

/// Run configuration. Every field is optional in the JSON file; missing
/// fields keep the defaults below.
///
/// ```json
/// {
///   "range":  { "lower": -2.0, "upper": 2.0, "count": 100 },
///   "plot":   { "title": "y = x²", "x_label": "x", "y_label": "y" },
///   "table":  { "enabled": true, "labels": ["x", "y"] },
///   "helper": { "enabled": true, "list": [1, 2, 3], "a": 10, "b": 20,
///               "command": "./ext_list.py" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub range: RangeSpec,
    pub plot: PlotConfig,
    pub table: TableConfig,
    pub helper: HelperConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Initial window size in points.
    pub size: [f32; 2],
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: "y = x²".to_string(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            size: [960.0, 640.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub enabled: bool,
    pub labels: [String; 2],
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            labels: DEFAULT_LABELS.map(String::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelperConfig {
    pub enabled: bool,
    pub list: Vec<i64>,
    pub a: i64,
    pub b: i64,
    /// Program implementing `ext_list`. Unset means the helper is undefined.
    pub command: Option<PathBuf>,
    /// Extra arguments for `command`, e.g. the script an interpreter runs.
    pub args: Vec<String>,
}

impl Default for HelperConfig {
    fn default() -> Self {
        let call = HelperCall::default();
        Self {
            enabled: false,
            list: call.list,
            a: call.a,
            b: call.b,
            command: None,
            args: Vec::new(),
        }
    }
}

impl HelperConfig {
    pub fn call(&self) -> HelperCall {
        HelperCall {
            list: self.list.clone(),
            a: self.a,
            b: self.b,
        }
    }

    /// The helper implementation this configuration points at.
    pub fn build(&self) -> Box<dyn ListHelper> {
        match &self.command {
            Some(program) => Box::new(CommandHelper::new(program).with_args(self.args.clone())),
            None => Box::new(UnboundHelper),
        }
    }
}

impl Config {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing configuration JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading configuration {}", path.display()))?;
        let config = Self::from_json_str(&text)
            .with_context(|| format!("in configuration {}", path.display()))?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_script_literals() {
        let config = Config::default();
        assert_eq!(config.range, RangeSpec::new(-2.0, 2.0, 100));
        assert_eq!(config.table.labels, ["x".to_string(), "y".to_string()]);
        assert_eq!(config.helper.call(), HelperCall::default());
        assert!(config.helper.command.is_none());
    }

    #[test]
    fn empty_object_is_the_default() {
        assert_eq!(Config::from_json_str("{}").unwrap(), Config::default());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = Config::from_json_str(
            r#"{ "range": { "count": 11 }, "helper": { "enabled": true, "a": 1 } }"#,
        )
        .unwrap();
        assert_eq!(config.range, RangeSpec::new(-2.0, 2.0, 11));
        assert!(config.helper.enabled);
        assert_eq!(config.helper.a, 1);
        assert_eq!(config.helper.b, 20);
        assert_eq!(config.helper.list, vec![1, 2, 3]);
    }

    #[test]
    fn helper_without_command_is_unbound() {
        let helper = HelperConfig::default().build();
        assert_eq!(helper.name(), "unbound");
    }

    #[cfg(unix)]
    #[test]
    fn helper_args_reach_the_command() {
        let config = Config::from_json_str(
            r#"{ "helper": { "command": "sh", "args": ["-c", "cat >/dev/null; echo 7"] } }"#,
        )
        .unwrap();
        let helper = config.helper.build();
        assert_eq!(helper.name(), "sh");
        assert_eq!(helper.call(&config.helper.call()).unwrap(), serde_json::json!(7));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = Config::from_json_str("{ range: }").unwrap_err();
        assert!(format!("{err:#}").contains("parsing configuration JSON"));
    }
}
