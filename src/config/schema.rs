use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::estimator::Sex;

/// User preferences loaded from `~/.config/tapefat/config.yaml`.
///
/// Example YAML:
/// ```yaml
/// default_sex: woman
/// color: never
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Skip the sex prompt in interactive mode and use this value instead
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sex: Option<Sex>,

    /// Terminal color handling (default: auto)
    #[serde(default)]
    pub color: ColorMode,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn use_colors(&self) -> bool {
        match self {
            ColorMode::Auto => crate::output::should_use_colors(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!("unknown color mode '{}' (expected auto, always or never)", other)),
        }
    }
}
