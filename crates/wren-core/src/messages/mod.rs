mod commands;

pub use commands::{BrowserCommand, ParseError};
