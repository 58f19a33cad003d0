// Navigation history for the file browser

use std::mem;
use std::path::{Path, PathBuf};

/// Navigation history: current location plus back/forward stacks.
///
/// Stack entries were valid when pushed; they are not re-checked until they
/// become current again.
#[derive(Debug, Clone)]
pub struct History {
    current: PathBuf,
    back: Vec<PathBuf>,
    forward: Vec<PathBuf>,
}

impl History {
    pub fn new(initial: PathBuf) -> Self {
        Self {
            current: initial,
            back: Vec::new(),
            forward: Vec::new(),
        }
    }

    /// Enter a new location, clearing forward history
    pub fn push(&mut self, path: PathBuf) {
        let previous = mem::replace(&mut self.current, path);
        self.back.push(previous);
        self.forward.clear();
    }

    /// Go back to the previous location
    pub fn back(&mut self) -> Option<&Path> {
        let previous = self.back.pop()?;
        let current = mem::replace(&mut self.current, previous);
        self.forward.push(current);
        Some(&self.current)
    }

    /// Go forward to the next location
    pub fn forward(&mut self) -> Option<&Path> {
        let next = self.forward.pop()?;
        let current = mem::replace(&mut self.current, next);
        self.back.push(current);
        Some(&self.current)
    }

    /// Check if can go back
    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    /// Check if can go forward
    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    /// Get current location
    pub fn current(&self) -> &Path {
        &self.current
    }
}
