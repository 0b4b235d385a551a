use crate::error::Result;
use crate::flags::{BASE_FLAGS, DEFAULT_PACKAGES};
use crate::pkg_config::DEFAULT_PROGRAM;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = ".flagscope.json";

/// Per-project resolver settings, read from `.flagscope.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Replaces the built-in base flags when set.
    pub base_flags: Option<Vec<String>>,
    pub packages: Vec<String>,
    pub pkg_config: String,
    /// Folder holding `compile_commands.json`. Relative to the config directory.
    pub compilation_database_folder: Option<PathBuf>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_flags: None,
            packages: DEFAULT_PACKAGES.iter().map(|p| p.to_string()).collect(),
            pkg_config: DEFAULT_PROGRAM.to_string(),
            compilation_database_folder: None,
        }
    }
}

impl ResolverConfig {
    /// Read `dir/.flagscope.json` (defaults when absent) and apply
    /// the PKG_CONFIG and FLAGSCOPE_COMPILATION_DATABASE env vars.
    pub fn load(dir: &Path) -> Result<Self> {
        let config = Self::load_file(dir)?;
        Ok(config.with_env(|key| std::env::var(key).ok()))
    }

    pub fn load_file(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config = serde_json::from_str(&content)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(program) = lookup("PKG_CONFIG").filter(|p| !p.is_empty()) {
            self.pkg_config = program;
        }
        if let Some(folder) = lookup("FLAGSCOPE_COMPILATION_DATABASE") {
            self.compilation_database_folder = Some(PathBuf::from(folder));
        }
        self
    }

    pub fn base_flags(&self) -> Vec<String> {
        match &self.base_flags {
            Some(flags) => flags.clone(),
            None => BASE_FLAGS.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// The database folder anchored at `config_dir`, or None when unset or empty.
    pub fn database_folder(&self, config_dir: &Path) -> Option<PathBuf> {
        let folder = self.compilation_database_folder.as_ref()?;
        if folder.as_os_str().is_empty() {
            return None;
        }
        Some(config_dir.join(folder))
    }
}
