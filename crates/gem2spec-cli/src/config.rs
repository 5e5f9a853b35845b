use anyhow::{Context, Result};
use gem2spec_req::Dialect;
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "gem2spec.toml";

/// The gem2spec configuration file structure (gem2spec.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Gem2SpecConfig {
    /// Requirement translation settings
    pub translate: TranslateConfig,

    /// Description wrapping settings
    pub wrap: WrapConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TranslateConfig {
    /// Target dialect (standard, fedora, opensuse, ...)
    pub dialect: Option<Dialect>,

    /// Skip invalid requirements with a warning instead of failing
    pub skip_invalid: Option<bool>,

    /// Prepended to the dependency name, e.g. "rubygem-"
    pub name_prefix: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WrapConfig {
    /// Line width for wrapped descriptions
    pub width: Option<usize>,
}

impl Gem2SpecConfig {
    /// Load configuration from gem2spec.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);

            if config_path.exists() {
                return Self::load_file(&config_path).map(Some);
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load a specific configuration file
    pub fn load_file(path: &Path) -> Result<Self> {
        log::debug!("Reading {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }
}
