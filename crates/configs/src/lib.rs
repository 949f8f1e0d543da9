use anyhow::Result;
use anyhow::anyhow;
use common::LogFormat;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = "servicehub.toml";
pub const DATA_DIR_ENV: &str = "SERVICEHUB_DATA_DIR";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
}

/// Where the persistent key-value slot lives on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_storage_file")]
    pub file: String,
    /// Key the user-authored collection is stored under.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: default_data_dir(), file: default_storage_file(), key: default_storage_key() }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default = "default_featured_limit")]
    pub featured_limit: usize,
    #[serde(default = "default_skill_preview")]
    pub skill_preview: usize,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self { featured_limit: default_featured_limit(), skill_preview: default_skill_preview() }
    }
}

fn default_data_dir() -> String { "data".into() }
fn default_storage_file() -> String { "local_storage.json".into() }
fn default_storage_key() -> String { "myServices".into() }
fn default_featured_limit() -> usize { 4 }
fn default_skill_preview() -> usize { 3 }

/// Load from `CONFIG_PATH` (or `servicehub.toml`). A missing file yields defaults;
/// a present but invalid file is an error.
pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    if !std::path::Path::new(&path).exists() {
        return Ok(AppConfig::default());
    }
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.storage.normalize_from_env();
        self.storage.validate()?;
        self.directory.validate()?;
        Ok(())
    }
}

impl StorageConfig {
    pub fn normalize_from_env(&mut self) {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.trim().is_empty() {
                self.data_dir = dir;
            }
        }
        self.data_dir = self.data_dir.trim().to_string();
        self.file = self.file.trim().to_string();
        self.key = self.key.trim().to_string();
        if self.data_dir.is_empty() {
            self.data_dir = default_data_dir();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.key.is_empty() {
            return Err(anyhow!("storage.key must not be empty"));
        }
        if self.file.is_empty() {
            return Err(anyhow!("storage.file must not be empty"));
        }
        if self.file.contains('/') || self.file.contains('\\') {
            return Err(anyhow!("storage.file must be a bare file name; use storage.data_dir for the directory"));
        }
        Ok(())
    }

    pub fn file_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.file)
    }
}

impl DirectoryConfig {
    pub fn validate(&self) -> Result<()> {
        if self.featured_limit == 0 {
            return Err(anyhow!("directory.featured_limit must be >= 1"));
        }
        if self.skill_preview == 0 {
            return Err(anyhow!("directory.skill_preview must be >= 1"));
        }
        Ok(())
    }
}
