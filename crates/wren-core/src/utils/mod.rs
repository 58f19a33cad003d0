mod spawn;

pub use spawn::{spawn_detached, spawn_with_fallbacks};
