//! Configuration management for assetmin
//!
//! Supports the [batch] section controlling which asset files are minified.
//! The built-in defaults describe the site layout this tool was made for: a
//! `css/` and a `js/` subdirectory with a known set of hand-authored files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::batch::{AssetKind, BatchError, BatchResult};

/// Current configuration version
pub const CURRENT_CONFIG_VERSION: &str = "1";

/// Supported configuration versions
pub const SUPPORTED_CONFIG_VERSIONS: &[&str] = &["1"];

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version for tracking schema changes
    #[serde(default = "default_config_version")]
    pub version: String,

    /// Batch minification configuration
    #[serde(default)]
    pub batch: BatchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_config_version(),
            batch: BatchConfig::default(),
        }
    }
}

/// Configuration for the batch driver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Site root containing the asset subdirectories
    #[serde(default = "default_root")]
    pub root: String,

    /// Subdirectory holding CSS files
    #[serde(default = "default_css_dir")]
    pub css_dir: String,

    /// Subdirectory holding JS files
    #[serde(default = "default_js_dir")]
    pub js_dir: String,

    /// Candidate CSS filenames, processed in order
    #[serde(default = "default_css_files")]
    pub css_files: Vec<String>,

    /// Candidate JS filenames, processed in order
    #[serde(default = "default_js_files")]
    pub js_files: Vec<String>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            css_dir: default_css_dir(),
            js_dir: default_js_dir(),
            css_files: default_css_files(),
            js_files: default_js_files(),
        }
    }
}

impl BatchConfig {
    /// Directory searched for files of the given asset class.
    pub fn dir_for(&self, kind: AssetKind) -> PathBuf {
        let dir = match kind {
            AssetKind::Css => &self.css_dir,
            AssetKind::Js => &self.js_dir,
        };
        Path::new(&self.root).join(dir)
    }

    /// Candidate filenames of the given asset class, in processing order.
    pub fn files_for(&self, kind: AssetKind) -> &[String] {
        match kind {
            AssetKind::Css => &self.css_files,
            AssetKind::Js => &self.js_files,
        }
    }
}

fn default_config_version() -> String {
    CURRENT_CONFIG_VERSION.to_string()
}

fn default_root() -> String {
    ".".to_string()
}

fn default_css_dir() -> String {
    "css".to_string()
}

fn default_js_dir() -> String {
    "js".to_string()
}

fn default_css_files() -> Vec<String> {
    ["style.css", "booking.css", "enquiry.css", "services.css"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_js_files() -> Vec<String> {
    [
        "main.js",
        "chatbot.js",
        "enquiry.js",
        "services.js",
        "animations.js",
        "script.js",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Config {
    /// Check if the configuration version is supported
    pub fn is_version_supported(&self) -> bool {
        SUPPORTED_CONFIG_VERSIONS.contains(&self.version.as_str())
    }

    /// Get a warning message for unsupported versions
    pub fn version_warning(&self) -> Option<String> {
        if !self.is_version_supported() {
            Some(format!(
                "Warning: Configuration version '{}' is not supported. Supported versions: {}. Using defaults where needed.",
                self.version,
                SUPPORTED_CONFIG_VERSIONS.join(", ")
            ))
        } else {
            None
        }
    }

    /// Get the default config directory path
    pub fn get_config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".config").join("assetmin"))
    }

    /// Load configuration with priority:
    /// 1. Defaults
    /// 2. Global config (~/.config/assetmin/config.toml)
    /// 3. Repo config (.assetmin.toml)
    /// 4. Custom config file from the CLI
    /// 5. CLI overrides
    pub fn load(cli_config: Option<&str>, cli_root: Option<&str>) -> BatchResult<Self> {
        let mut config = Self::default();

        // Try to load global config
        if let Some(config_dir) = Self::get_config_dir() {
            let global_config = config_dir.join("config.toml");
            if global_config.exists() {
                config = Self::load_from_file(&global_config)?;
            }
        }

        // Try to load repo config
        let repo_config = Path::new(".assetmin.toml");
        if repo_config.exists() {
            config = Self::load_from_file(repo_config)?;
        }

        // Try to load custom config if specified
        if let Some(custom_config) = cli_config {
            config = Self::load_from_file(Path::new(custom_config))?;
        }

        // Apply CLI overrides
        if let Some(root) = cli_root {
            config.batch.root = root.to_string();
        }

        Ok(config)
    }

    /// Load configuration from a single file
    pub fn load_from_file(path: &Path) -> BatchResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            BatchError::Config(format!(
                "Failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|e| {
            BatchError::Config(format!(
                "Failed to parse config from {}: {}",
                path.display(),
                e
            ))
        })?;

        // Warn if version is not supported
        if let Some(warning) = config.version_warning() {
            eprintln!("{}", warning);
        }

        // Set to current version if empty or missing
        if config.version.is_empty() {
            config.version = CURRENT_CONFIG_VERSION.to_string();
        }

        Ok(config)
    }
}
