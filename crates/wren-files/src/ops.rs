// File operations acting on an entry of the current directory.
// None of these touch navigation state; callers refresh the listing after
// a successful delete or rename.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use wren_core::utils::{spawn_detached, spawn_with_fallbacks};

/// Openers tried in order when no custom opener is configured
const OPENERS: &[&[&str]] = &[&["xdg-open"], &["gio", "open"], &["exo-open"]];

/// Resolve `name` under `dir`, refusing anything that is not a plain child name
fn entry_path(dir: &Path, name: &str) -> io::Result<PathBuf> {
    if name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(std::path::MAIN_SEPARATOR)
    {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid entry name: {:?}", name),
        ));
    }
    Ok(dir.join(name))
}

/// Delete an entry, recursively for directories
pub fn delete(dir: &Path, name: &str) -> io::Result<()> {
    let path = entry_path(dir, name)?;
    let metadata = fs::symlink_metadata(&path)?;

    if metadata.is_dir() {
        fs::remove_dir_all(&path)?;
    } else {
        fs::remove_file(&path)?;
    }
    info!(path = %path.display(), "deleted");
    Ok(())
}

/// Rename an entry within its directory. Refuses to clobber an existing
/// entry; `fs::rename` alone would silently replace files.
pub fn rename(dir: &Path, from: &str, to: &str) -> io::Result<()> {
    let source = entry_path(dir, from)?;
    let target = entry_path(dir, to)?;

    fs::symlink_metadata(&source)?;
    if fs::symlink_metadata(&target).is_ok() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("target already exists: {:?}", to),
        ));
    }

    fs::rename(&source, &target)?;
    info!(from = %source.display(), to = %target.display(), "renamed");
    Ok(())
}

/// Launch the default application for `path`; fire-and-forget
pub fn open(path: &Path, opener: Option<&str>) -> bool {
    let target = path.to_string_lossy();
    debug!(path = %path.display(), "opening");

    match opener {
        Some(program) => spawn_detached(program, &[target.as_ref()]),
        None => spawn_with_fallbacks(OPENERS, target.as_ref()),
    }
}

/// Launch a specific application with `path` as its argument
pub fn open_with(program: &str, path: &Path) -> bool {
    spawn_detached(program, &[path.to_string_lossy().as_ref()])
}
