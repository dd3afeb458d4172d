//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`CUBECASE_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Export configuration
    #[serde(default)]
    pub export: ExportConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`CUBECASE_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // CUBECASE_EXPORT__OUTPUT_DIR=out -> export.output_dir = "out"
        figment = figment.merge(Env::prefixed("CUBECASE_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory the export files are written to
    pub output_dir: PathBuf,
    /// Write the Rust static-data rendering
    pub hardcoded: bool,
    /// File name for the Rust static-data rendering
    pub hardcoded_file: String,
    /// Write the flattened `TriangleTable` rendering
    pub triangle_table: bool,
    /// File name for the flattened rendering
    pub triangle_table_file: String,
    /// Write the table as RON
    pub ron: bool,
    /// File name for the RON rendering
    pub ron_file: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("out"),
            hardcoded: true,
            hardcoded_file: "table_hardcode.rs".to_string(),
            triangle_table: true,
            triangle_table_file: "triangle_table.js".to_string(),
            ron: false,
            ron_file: "case_table.ron".to_string(),
        }
    }
}

impl ExportConfig {
    /// Every enabled output as (path, kind), in a fixed order
    pub fn enabled_outputs(&self) -> Vec<(PathBuf, ExportKind)> {
        [
            (self.hardcoded, &self.hardcoded_file, ExportKind::Hardcoded),
            (self.triangle_table, &self.triangle_table_file, ExportKind::TriangleTable),
            (self.ron, &self.ron_file, ExportKind::Ron),
        ]
        .into_iter()
        .filter(|(enabled, _, _)| *enabled)
        .map(|(_, file, kind)| (self.output_dir.join(file), kind))
        .collect()
    }
}

/// One export format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Hardcoded,
    TriangleTable,
    Ron,
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Run the table validator before exporting
    pub validate_table: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            validate_table: true,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
