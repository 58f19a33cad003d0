use std::path::{Path, PathBuf};

use tracing::debug;

/// Supplies the well-known locations navigation shortcuts target
#[derive(Debug, Clone)]
pub struct Environment {
    home: PathBuf,
    initial: PathBuf,
}

impl Environment {
    /// Read home and working directory from the process environment
    pub fn detect() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"));
        let initial = std::env::current_dir().unwrap_or_else(|_| home.clone());
        debug!(home = %home.display(), initial = %initial.display(), "detected environment");

        Self { home, initial }
    }

    /// Build from caller-supplied locations instead of the process environment
    pub fn with_paths(home: PathBuf, initial: PathBuf) -> Self {
        Self { home, initial }
    }

    /// Home directory for the `home` shortcut
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Working directory at startup, the default starting location
    pub fn initial(&self) -> &Path {
        &self.initial
    }

    /// Filesystem root for the `root` shortcut
    pub fn root() -> PathBuf {
        PathBuf::from("/")
    }
}
