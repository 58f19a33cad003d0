pub mod entry;
pub mod error;
pub mod history;
pub mod listing;
pub mod navigator;
pub mod ops;

pub use entry::{EntryKind, FileEntry};
pub use error::NavError;
pub use history::History;
pub use navigator::Navigator;
