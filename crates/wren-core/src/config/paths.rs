use std::path::PathBuf;

/// Configuration paths for the Wren file browser
pub struct ConfigPaths {
    pub browser_settings: PathBuf,
}

impl ConfigPaths {
    pub fn new() -> Self {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from(".config"));

        Self {
            browser_settings: config_dir.join("wren/files.json"),
        }
    }

    /// Get the wren config directory
    pub fn config_dir(&self) -> PathBuf {
        self.browser_settings
            .parent()
            .unwrap_or(&PathBuf::from("."))
            .to_path_buf()
    }
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self::new()
    }
}
