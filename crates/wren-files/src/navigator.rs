// Directory navigation controller

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use wren_core::{BrowserSettings, Environment};

use crate::entry::FileEntry;
use crate::error::NavError;
use crate::history::History;
use crate::listing;

/// Owns the current location, the back/forward history and the most recent
/// successful listing. All operations are synchronous and atomic: a failed
/// navigation leaves every piece of state untouched, except for the
/// back/forward re-list edge documented on [`Navigator::navigate_back`].
pub struct Navigator {
    env: Environment,
    settings: Arc<RwLock<BrowserSettings>>,
    history: History,
    entries: Vec<FileEntry>,
}

impl Navigator {
    /// Start browsing at `start`. Fails if `start` cannot be entered.
    pub fn new(
        env: Environment,
        settings: Arc<RwLock<BrowserSettings>>,
        start: &Path,
    ) -> Result<Self, NavError> {
        let (current, entries) = resolve_and_list(start, &settings)?;
        debug!(start = %current.display(), "navigator ready");

        Ok(Self {
            env,
            settings,
            history: History::new(current),
            entries,
        })
    }

    /// Enter `target`. The path is canonicalized and must be an existing,
    /// readable directory; validation and the fresh listing both happen
    /// before any state changes. Entering the current location again only
    /// refreshes the listing, it does not grow history.
    pub fn navigate_to(&mut self, target: &Path) -> Result<(), NavError> {
        let (resolved, entries) = resolve_and_list(target, &self.settings)?;

        if resolved == self.history.current() {
            self.entries = entries;
            return Ok(());
        }

        self.history.push(resolved);
        self.entries = entries;
        Ok(())
    }

    /// Step back in history. The popped location is trusted, not
    /// re-validated: if it vanished since being pushed, `current` still
    /// moves there, the cached listing empties, and the re-list failure is
    /// returned.
    pub fn navigate_back(&mut self) -> Result<(), NavError> {
        let target = match self.history.back() {
            Some(path) => path.to_path_buf(),
            None => return Err(NavError::NoHistory),
        };
        self.relist_after_jump(target)
    }

    /// Step forward in history; symmetric to [`Navigator::navigate_back`].
    pub fn navigate_forward(&mut self) -> Result<(), NavError> {
        let target = match self.history.forward() {
            Some(path) => path.to_path_buf(),
            None => return Err(NavError::NoHistory),
        };
        self.relist_after_jump(target)
    }

    /// Jump to the home directory
    pub fn navigate_home(&mut self) -> Result<(), NavError> {
        let home = self.env.home().to_path_buf();
        self.navigate_to(&home)
    }

    /// Jump to the filesystem root
    pub fn navigate_root(&mut self) -> Result<(), NavError> {
        self.navigate_to(&Environment::root())
    }

    /// Enter the parent directory; fails at the root
    pub fn navigate_up(&mut self) -> Result<(), NavError> {
        let parent = match self.history.current().parent() {
            Some(parent) => parent.to_path_buf(),
            None => {
                return Err(NavError::InvalidPath {
                    path: self.history.current().to_path_buf(),
                })
            }
        };
        self.navigate_to(&parent)
    }

    /// Re-read the current directory without touching history. On failure
    /// the previous listing stays visible.
    pub fn refresh(&mut self) -> Result<(), NavError> {
        let current = self.history.current().to_path_buf();
        let (show_hidden, dirs_first) = self.listing_options();
        self.entries = listing::list(&current, show_hidden, dirs_first)?;
        Ok(())
    }

    /// Current location
    pub fn current(&self) -> &Path {
        self.history.current()
    }

    /// The most recently successfully listed entries; does not re-list
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    fn listing_options(&self) -> (bool, bool) {
        let settings = self.settings.read();
        (settings.show_hidden, settings.sort_directories_first)
    }

    fn relist_after_jump(&mut self, target: PathBuf) -> Result<(), NavError> {
        let (show_hidden, dirs_first) = self.listing_options();
        match listing::list(&target, show_hidden, dirs_first) {
            Ok(entries) => {
                self.entries = entries;
                Ok(())
            }
            Err(err) => {
                warn!(path = %target.display(), "history entry no longer listable");
                self.entries.clear();
                Err(err)
            }
        }
    }
}

fn resolve_and_list(
    target: &Path,
    settings: &Arc<RwLock<BrowserSettings>>,
) -> Result<(PathBuf, Vec<FileEntry>), NavError> {
    let resolved = fs::canonicalize(target).map_err(|_| NavError::InvalidPath {
        path: target.to_path_buf(),
    })?;
    if !resolved.is_dir() {
        return Err(NavError::InvalidPath { path: resolved });
    }

    let (show_hidden, dirs_first) = {
        let settings = settings.read();
        (settings.show_hidden, settings.sort_directories_first)
    };
    let entries = listing::list(&resolved, show_hidden, dirs_first)?;
    Ok((resolved, entries))
}
