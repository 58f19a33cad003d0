// File entry model and display helpers

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// What a listed directory child is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Neither a regular file nor a directory, or metadata was unreadable
    Other,
}

/// A file or directory entry
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    pub is_hidden: bool,
    pub is_symlink: bool,
    pub size: u64,
    pub modified: Option<SystemTime>,
}

impl FileEntry {
    /// Build an entry from a path. Entries with unreadable metadata are kept
    /// with kind `Other` so every row the directory yields stays visible.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().to_string();
        let is_hidden = name.starts_with('.');

        let metadata = match fs::symlink_metadata(path) {
            Ok(metadata) => metadata,
            Err(_) => {
                return Some(Self {
                    name,
                    path: path.to_path_buf(),
                    kind: EntryKind::Other,
                    is_hidden,
                    is_symlink: false,
                    size: 0,
                    modified: None,
                });
            }
        };
        let is_symlink = metadata.is_symlink();

        // For symlinks, look through to the target
        let real_metadata = if is_symlink {
            fs::metadata(path).ok()
        } else {
            Some(metadata)
        };

        let kind = match &real_metadata {
            Some(m) if m.is_dir() => EntryKind::Directory,
            Some(m) if m.is_file() => EntryKind::File,
            _ => EntryKind::Other,
        };

        Some(Self {
            name,
            path: path.to_path_buf(),
            kind,
            is_hidden,
            is_symlink,
            size: real_metadata.as_ref().map(|m| m.len()).unwrap_or(0),
            modified: real_metadata.and_then(|m| m.modified().ok()),
        })
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Format file size as human readable
pub fn humanize_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.1} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Format timestamp for display
pub fn format_date(time: Option<SystemTime>, format: &str) -> String {
    time.and_then(|t| {
        t.duration_since(SystemTime::UNIX_EPOCH).ok().map(|d| {
            let secs = d.as_secs() as i64;
            let dt = chrono::DateTime::from_timestamp(secs, 0)?;
            Some(dt.format(format).to_string())
        })
    })
    .flatten()
    .unwrap_or_else(|| "-".to_string())
}

/// Pluralize a count
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Get disk space info for path
pub fn disk_space(path: &Path) -> (u64, u64) {
    #[cfg(unix)]
    {
        use std::ffi::CString;
        use std::os::unix::ffi::OsStrExt;

        let path_cstr = CString::new(path.as_os_str().as_bytes()).ok();
        if let Some(cstr) = path_cstr {
            unsafe {
                let mut stat: libc::statvfs = std::mem::zeroed();
                if libc::statvfs(cstr.as_ptr(), &mut stat) == 0 {
                    let free = stat.f_bavail as u64 * stat.f_bsize as u64;
                    let total = stat.f_blocks as u64 * stat.f_bsize as u64;
                    return (free, total);
                }
            }
        }
    }
    (0, 0)
}
