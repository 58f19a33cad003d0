use compact_str::CompactString;
use std::path::PathBuf;
use thiserror::Error;

/// User intents FROM the front end TO the navigator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserCommand {
    // =========== Navigation ===========

    /// Enter a directory by path
    NavigateTo(PathBuf),

    /// Step back in history
    Back,

    /// Step forward in history
    Forward,

    /// Enter the parent directory
    Up,

    /// Jump to the home directory
    Home,

    /// Jump to the filesystem root
    Root,

    // =========== Listing ===========

    /// Show the current listing again
    List,

    /// Narrow the current listing by substring
    Filter(CompactString),

    /// Re-read the current directory
    Refresh,

    /// Toggle hidden entries on or off
    ToggleHidden,

    // =========== File operations ===========

    /// Open an entry: directories are entered, files are launched
    Open(CompactString),

    /// Launch an entry with a specific application
    OpenWith {
        app: CompactString,
        name: CompactString,
    },

    /// Delete an entry (recursively for directories)
    Delete(CompactString),

    /// Rename an entry within the current directory
    Rename {
        from: CompactString,
        to: CompactString,
    },

    // =========== Session ===========

    /// Show available commands
    Help,

    /// Leave the browser
    Quit,
}

/// Why an input line did not parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,

    #[error("unknown command: {0}")]
    UnknownCommand(CompactString),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("{0} takes exactly two names")]
    WrongArity(&'static str),
}

impl BrowserCommand {
    /// Parse one input line into a command
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ParseError::Empty);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "cd" | "go" => {
                if rest.is_empty() {
                    // Bare `cd` goes home, same as a shell
                    Ok(Self::Home)
                } else {
                    Ok(Self::NavigateTo(PathBuf::from(rest)))
                }
            }
            "back" | "b" => Ok(Self::Back),
            "forward" | "fwd" | "f" => Ok(Self::Forward),
            "up" | ".." => Ok(Self::Up),
            "home" | "~" => Ok(Self::Home),
            "root" | "/" => Ok(Self::Root),
            "ls" | "list" => Ok(Self::List),
            "find" | "filter" => {
                if rest.is_empty() {
                    Err(ParseError::MissingArgument("search text"))
                } else {
                    Ok(Self::Filter(rest.into()))
                }
            }
            "refresh" | "reload" => Ok(Self::Refresh),
            "hidden" => Ok(Self::ToggleHidden),
            "open" => {
                if rest.is_empty() {
                    Err(ParseError::MissingArgument("entry name"))
                } else {
                    Ok(Self::Open(rest.into()))
                }
            }
            "open-with" | "openwith" => match rest.split_once(char::is_whitespace) {
                Some((app, name)) if !name.trim().is_empty() => Ok(Self::OpenWith {
                    app: app.into(),
                    name: name.trim().into(),
                }),
                _ => Err(ParseError::MissingArgument("application and entry name")),
            },
            "rm" | "del" | "delete" => {
                if rest.is_empty() {
                    Err(ParseError::MissingArgument("entry name"))
                } else {
                    Ok(Self::Delete(rest.into()))
                }
            }
            "rename" | "mv" => {
                let mut names = rest.split_whitespace();
                match (names.next(), names.next(), names.next()) {
                    (Some(from), Some(to), None) => Ok(Self::Rename {
                        from: from.into(),
                        to: to.into(),
                    }),
                    _ => Err(ParseError::WrongArity("rename")),
                }
            }
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(ParseError::UnknownCommand(other.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_navigation_verbs() {
        assert_eq!(
            BrowserCommand::parse("cd /tmp").unwrap(),
            BrowserCommand::NavigateTo(PathBuf::from("/tmp"))
        );
        assert_eq!(BrowserCommand::parse("back").unwrap(), BrowserCommand::Back);
        assert_eq!(BrowserCommand::parse("f").unwrap(), BrowserCommand::Forward);
        assert_eq!(BrowserCommand::parse("..").unwrap(), BrowserCommand::Up);
        assert_eq!(BrowserCommand::parse("~").unwrap(), BrowserCommand::Home);
        assert_eq!(BrowserCommand::parse("/").unwrap(), BrowserCommand::Root);
    }

    #[test]
    fn bare_cd_goes_home() {
        assert_eq!(BrowserCommand::parse("cd").unwrap(), BrowserCommand::Home);
    }

    #[test]
    fn path_argument_keeps_spaces() {
        assert_eq!(
            BrowserCommand::parse("cd /home/user/My Documents").unwrap(),
            BrowserCommand::NavigateTo(PathBuf::from("/home/user/My Documents"))
        );
    }

    #[test]
    fn open_keeps_spaces_in_name() {
        assert_eq!(
            BrowserCommand::parse("open Annual Report.pdf").unwrap(),
            BrowserCommand::Open("Annual Report.pdf".into())
        );
    }

    #[test]
    fn open_with_splits_app_from_name() {
        assert_eq!(
            BrowserCommand::parse("open-with gimp photo.png").unwrap(),
            BrowserCommand::OpenWith {
                app: "gimp".into(),
                name: "photo.png".into(),
            }
        );
    }

    #[test]
    fn rename_takes_exactly_two_names() {
        assert_eq!(
            BrowserCommand::parse("rename old.txt new.txt").unwrap(),
            BrowserCommand::Rename {
                from: "old.txt".into(),
                to: "new.txt".into(),
            }
        );
        assert_eq!(
            BrowserCommand::parse("rename only-one").unwrap_err(),
            ParseError::WrongArity("rename")
        );
        assert_eq!(
            BrowserCommand::parse("mv a b c").unwrap_err(),
            ParseError::WrongArity("rename")
        );
    }

    #[test]
    fn verbs_are_case_insensitive() {
        assert_eq!(BrowserCommand::parse("BACK").unwrap(), BrowserCommand::Back);
        assert_eq!(
            BrowserCommand::parse("Rm junk").unwrap(),
            BrowserCommand::Delete("junk".into())
        );
    }

    #[test]
    fn rejects_unknown_and_empty() {
        assert_eq!(BrowserCommand::parse("   ").unwrap_err(), ParseError::Empty);
        assert_eq!(
            BrowserCommand::parse("frobnicate").unwrap_err(),
            ParseError::UnknownCommand("frobnicate".into())
        );
        assert_eq!(
            BrowserCommand::parse("rm").unwrap_err(),
            ParseError::MissingArgument("entry name")
        );
    }
}
