//! Panel configuration with defaults and host-page overrides.
//!
//! The panel has no CLI, environment, or persisted settings. Everything has a
//! compiled-in default; the host page's URL query string may override a few
//! keys so one build can point at different weights files.
//!
//! Recognized keys: `endpoint`, `log_dir`, `limit`, `noKernel`, `noBias`.
//! Unknown keys are ignored.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use tensors::PageQuery;

pub const DEFAULT_ENDPOINT: &str = "./tensors";
pub const DEFAULT_LOG_DIR: &str = "testlogs/tensorboard/weights/weights.hdf5";
pub const DEFAULT_PAGE_SIZE: u64 = 5;
pub const DEFAULT_STYLESHEET_HREF: &str = "./static/style.css";

/// Invalid override in the host query string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: expected a positive integer, got {value:?}")]
    InvalidPageSize { key: &'static str, value: String },
    #[error("invalid {key}: expected true or false, got {value:?}")]
    InvalidFlag { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    /// URL of the tensors endpoint, relative to the plugin's base path.
    pub endpoint: String,
    /// Weights file passed through to the endpoint.
    pub log_dir: String,
    /// Steps per page. Always at least one.
    pub page_size: u64,
    pub no_kernel: bool,
    pub no_bias: bool,
    pub stylesheet_href: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            log_dir: DEFAULT_LOG_DIR.to_owned(),
            page_size: DEFAULT_PAGE_SIZE,
            no_kernel: false,
            no_bias: true,
            stylesheet_href: DEFAULT_STYLESHEET_HREF.to_owned(),
        }
    }
}

impl PanelConfig {
    /// Build config from defaults plus query overrides.
    ///
    /// `lookup` returns the decoded value of a query key, if present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `limit` is not a positive integer or a flag
    /// is not `true`/`false`.
    pub fn from_query(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            endpoint: lookup("endpoint").unwrap_or(defaults.endpoint),
            log_dir: lookup("log_dir").unwrap_or(defaults.log_dir),
            page_size: parse_page_size("limit", lookup("limit"), defaults.page_size)?,
            no_kernel: parse_flag("noKernel", lookup("noKernel"), defaults.no_kernel)?,
            no_bias: parse_flag("noBias", lookup("noBias"), defaults.no_bias)?,
            stylesheet_href: defaults.stylesheet_href,
        })
    }

    /// Request for the window starting at `cursor` with the configured flags.
    #[must_use]
    pub fn page_query(&self, cursor: u64) -> PageQuery {
        PageQuery {
            log_dir: self.log_dir.clone(),
            cursor,
            limit: self.page_size,
            no_kernel: self.no_kernel,
            no_bias: self.no_bias,
        }
    }
}

fn parse_page_size(key: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    let Some(value) = raw else {
        return Ok(default);
    };
    match value.trim().parse::<u64>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ConfigError::InvalidPageSize { key, value }),
    }
}

fn parse_flag(key: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(value) = raw else {
        return Ok(default);
    };
    let parsed = match value.trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    };
    parsed.ok_or(ConfigError::InvalidFlag { key, value })
}
