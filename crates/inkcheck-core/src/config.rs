//! Configuration for the modal verification run
//!
//! The defaults reproduce the stock scenario against a local dev server
//! on port 3000. A repository-level `.inkcheck/config.toml` can override
//! any field; every field is optional in the file.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::Result;

/// Settings for one verification run
///
/// Loaded from `.inkcheck/config.toml` when present, defaults otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// Base URL of the application under test
    #[serde(default = "default_app_url")]
    pub app_url: String,

    /// Navigation timeout in milliseconds
    #[serde(default = "default_navigation_timeout_ms")]
    pub navigation_timeout_ms: u64,

    /// Default timeout for element waits, in seconds
    #[serde(default = "default_element_timeout_secs")]
    pub element_timeout_secs: u64,

    /// Path the verification screenshot is written to
    ///
    /// Relative to the working directory. The parent directory must
    /// already exist; an existing file at the path is overwritten.
    #[serde(default = "default_screenshot_path")]
    pub screenshot_path: String,

    /// Run the browser in headless mode
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Browser window width
    #[serde(default = "default_window_width")]
    pub window_width: u32,

    /// Browser window height
    #[serde(default = "default_window_height")]
    pub window_height: u32,
}

// Default value providers
fn default_app_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_navigation_timeout_ms() -> u64 {
    10_000
}

fn default_element_timeout_secs() -> u64 {
    30
}

fn default_screenshot_path() -> String {
    "verification/project_modal_a11y.png".to_string()
}

fn default_headless() -> bool {
    true
}

fn default_window_width() -> u32 {
    1920
}

fn default_window_height() -> u32 {
    1080
}

impl VerifyConfig {
    /// Load configuration from `.inkcheck/config.toml` or use defaults
    pub fn load_or_default(repo_root: &Path) -> Result<Self> {
        let config_path = repo_root.join(".inkcheck/config.toml");

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Ok(toml::from_str(&content).map_err(|e| {
                crate::InkcheckError::Config(format!("Failed to parse config file: {}", e))
            })?)
        } else {
            Ok(Self::default())
        }
    }

    /// Write default configuration to `.inkcheck/config.toml`
    pub fn write_default(repo_root: &Path) -> Result<()> {
        let config_dir = repo_root.join(".inkcheck");
        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        let config = Self::default();
        let content = toml::to_string_pretty(&config).map_err(|e| {
            crate::InkcheckError::Config(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            app_url: default_app_url(),
            navigation_timeout_ms: default_navigation_timeout_ms(),
            element_timeout_secs: default_element_timeout_secs(),
            screenshot_path: default_screenshot_path(),
            headless: default_headless(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}
