use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Browser settings (files.json) - shared between the navigator and front end
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserSettings {
    #[serde(default)]
    pub show_hidden: bool,
    #[serde(default = "default_sort_directories_first")]
    pub sort_directories_first: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opener: Option<String>,
}

fn default_sort_directories_first() -> bool {
    true
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            show_hidden: false,
            sort_directories_first: true,
            date_format: None,
            opener: None,
        }
    }
}

impl BrowserSettings {
    /// Get the default settings path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config/wren/files.json")
    }

    /// Load settings, falling back to defaults if missing or unreadable
    pub fn load(path: &Path) -> Self {
        std::fs::read(path)
            .ok()
            .and_then(|data| serde_json::from_slice(&data).ok())
            .unwrap_or_default()
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        let dir = path.parent().ok_or_else(|| anyhow::anyhow!("Invalid path"))?;
        std::fs::create_dir_all(dir)?;
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data)?;
        Ok(())
    }

    /// Save to the default settings path
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::default_path())
    }

    /// Get date_format with default
    pub fn date_format(&self) -> &str {
        self.date_format.as_deref().unwrap_or("%Y-%m-%d %H:%M")
    }

    /// Configured opener command, if any
    pub fn opener(&self) -> Option<&str> {
        self.opener.as_deref()
    }
}
