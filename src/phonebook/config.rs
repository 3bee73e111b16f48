use crate::directory::DEFAULT_PAGE_SIZE;
use crate::error::{PhonebookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FILE_NAME: &str = "phonebook.txt";

/// Where a phonebook lives: next to the current project, or in the user's data dir.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}

/// Resolved directories for each scope.
#[derive(Debug, Clone)]
pub struct PhonebookPaths {
    pub project: PathBuf,
    pub global: PathBuf,
}

impl PhonebookPaths {
    pub fn scope_dir(&self, scope: Scope) -> &Path {
        match scope {
            Scope::Project => &self.project,
            Scope::Global => &self.global,
        }
    }
}

/// Configuration for a phonebook, stored as `config.json` in the scope directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhonebookConfig {
    /// Name of the contacts file inside the scope directory
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Contacts shown per page when listing
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for PhonebookConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            page_size: default_page_size(),
        }
    }
}

impl PhonebookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: PhonebookConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Path of the contacts file for a scope rooted at `scope_dir`.
    pub fn storage_path(&self, scope_dir: &Path) -> PathBuf {
        scope_dir.join(&self.file_name)
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        if page_size == 0 {
            return Err(PhonebookError::Config(
                "page-size must be at least 1".to_string(),
            ));
        }
        self.page_size = page_size;
        Ok(())
    }

    pub fn set_file_name(&mut self, file_name: &str) -> Result<()> {
        let trimmed = file_name.trim();
        if trimmed.is_empty() || trimmed.contains(['/', '\\']) {
            return Err(PhonebookError::Config(format!(
                "file-name must be a plain file name, got {:?}",
                file_name
            )));
        }
        self.file_name = trimmed.to_string();
        Ok(())
    }
}
