// Line-oriented front end: translates input lines into navigator calls and
// renders the listing after every successful navigation. Errors print as
// one-line notices and the previous listing stays current.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::warn;

use wren_core::{BrowserCommand, BrowserSettings, ConfigPaths, Environment, ParseError};
use wren_files::{entry, listing, ops, FileEntry, NavError, Navigator};

struct Browser {
    navigator: Navigator,
    settings: Arc<RwLock<BrowserSettings>>,
    paths: ConfigPaths,
}

/// Run the interactive browser loop
pub fn run(start: Option<PathBuf>) -> anyhow::Result<()> {
    let paths = ConfigPaths::new();
    let settings = Arc::new(RwLock::new(BrowserSettings::load(&paths.browser_settings)));
    let env = Environment::detect();

    let navigator = open_navigator(env, settings.clone(), start)?;
    let mut browser = Browser {
        navigator,
        settings,
        paths,
    };

    browser.render_listing();

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("{} > ", browser.navigator.current().display());
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match BrowserCommand::parse(&line) {
            Ok(command) => {
                if browser.handle(command) {
                    break;
                }
            }
            Err(ParseError::Empty) => {}
            Err(err) => println!("! {} (try `help`)", err),
        }
    }

    Ok(())
}

/// Print a one-shot listing and exit
pub fn list_once(path: Option<PathBuf>, all: bool) -> anyhow::Result<()> {
    let paths = ConfigPaths::new();
    let settings = BrowserSettings::load(&paths.browser_settings);
    let env = Environment::detect();
    let target = path.unwrap_or_else(|| env.initial().to_path_buf());

    let entries = listing::list(
        &target,
        all || settings.show_hidden,
        settings.sort_directories_first,
    )?;
    for entry in &entries {
        println!("{}", format_row(entry, settings.date_format()));
    }
    Ok(())
}

fn open_navigator(
    env: Environment,
    settings: Arc<RwLock<BrowserSettings>>,
    start: Option<PathBuf>,
) -> anyhow::Result<Navigator> {
    // An explicitly requested start directory must work; the defaults
    // fall back from working directory to home to root.
    if let Some(start) = start {
        return Navigator::new(env, settings, &start)
            .map_err(|err| anyhow::anyhow!("cannot start in {}: {}", start.display(), err));
    }

    let candidates = [
        env.initial().to_path_buf(),
        env.home().to_path_buf(),
        Environment::root(),
    ];
    for candidate in &candidates {
        match Navigator::new(env.clone(), settings.clone(), candidate) {
            Ok(navigator) => return Ok(navigator),
            Err(err) => {
                warn!(path = %candidate.display(), %err, "start candidate rejected")
            }
        }
    }
    Err(anyhow::anyhow!("no usable start directory"))
}

impl Browser {
    /// Dispatch one command; returns true when the session should end
    fn handle(&mut self, command: BrowserCommand) -> bool {
        match command {
            BrowserCommand::NavigateTo(path) => {
                let result = self.navigator.navigate_to(&path);
                self.report_nav(result);
            }
            BrowserCommand::Back => {
                let result = self.navigator.navigate_back();
                self.report_nav(result);
            }
            BrowserCommand::Forward => {
                let result = self.navigator.navigate_forward();
                self.report_nav(result);
            }
            BrowserCommand::Up => {
                let result = self.navigator.navigate_up();
                self.report_nav(result);
            }
            BrowserCommand::Home => {
                let result = self.navigator.navigate_home();
                self.report_nav(result);
            }
            BrowserCommand::Root => {
                let result = self.navigator.navigate_root();
                self.report_nav(result);
            }
            BrowserCommand::List => self.render_listing(),
            BrowserCommand::Filter(query) => {
                let hits = listing::filter_entries(self.navigator.entries(), &query);
                let date_format = self.settings.read().date_format().to_string();
                for entry in &hits {
                    println!("{}", format_row(entry, &date_format));
                }
                println!("{}", entry::pluralize(hits.len(), "match", "matches"));
            }
            BrowserCommand::Refresh => {
                let result = self.navigator.refresh();
                self.report_nav(result);
            }
            BrowserCommand::ToggleHidden => {
                let show_hidden = {
                    let mut settings = self.settings.write();
                    settings.show_hidden = !settings.show_hidden;
                    settings.show_hidden
                };
                if let Err(err) = self.settings.read().save_to(&self.paths.browser_settings) {
                    warn!("could not save settings: {}", err);
                }
                println!(
                    "hidden entries {}",
                    if show_hidden { "shown" } else { "hidden" }
                );
                let result = self.navigator.refresh();
                self.report_nav(result);
            }
            BrowserCommand::Open(name) => self.open_entry(&name),
            BrowserCommand::OpenWith { app, name } => match self.find_entry(&name) {
                Some(entry) => {
                    if !ops::open_with(&app, &entry.path) {
                        println!("! could not launch {}", app);
                    }
                }
                None => println!("! no such entry: {}", name),
            },
            BrowserCommand::Delete(name) => match ops::delete(self.navigator.current(), &name) {
                Ok(()) => {
                    let result = self.navigator.refresh();
                    self.report_nav(result);
                }
                Err(err) => println!("! delete failed: {}", err),
            },
            BrowserCommand::Rename { from, to } => {
                match ops::rename(self.navigator.current(), &from, &to) {
                    Ok(()) => {
                        let result = self.navigator.refresh();
                        self.report_nav(result);
                    }
                    Err(err) => println!("! rename failed: {}", err),
                }
            }
            BrowserCommand::Help => print_help(),
            BrowserCommand::Quit => return true,
        }
        false
    }

    /// Open an entry of the current listing: directories are entered,
    /// everything else goes to the default application
    fn open_entry(&mut self, name: &str) {
        let entry = match self.find_entry(name) {
            Some(entry) => entry,
            None => {
                println!("! no such entry: {}", name);
                return;
            }
        };

        if entry.is_dir() {
            let result = self.navigator.navigate_to(&entry.path);
            self.report_nav(result);
        } else {
            let opener = self.settings.read().opener.clone();
            if !ops::open(&entry.path, opener.as_deref()) {
                println!("! no opener could handle {}", entry.name);
            }
        }
    }

    fn find_entry(&self, name: &str) -> Option<FileEntry> {
        self.navigator
            .entries()
            .iter()
            .find(|e| e.name == name)
            .cloned()
    }

    fn report_nav(&self, result: Result<(), NavError>) {
        match result {
            Ok(()) => self.render_listing(),
            Err(err) => println!("! {}", err),
        }
    }

    fn render_listing(&self) {
        let date_format = self.settings.read().date_format().to_string();
        println!("{}", self.navigator.current().display());
        for entry in self.navigator.entries() {
            println!("{}", format_row(entry, &date_format));
        }
        println!("{}", self.status_line());
    }

    fn status_line(&self) -> String {
        let mut dir_count = 0;
        let mut file_count = 0;
        for entry in self.navigator.entries() {
            if entry.is_dir() {
                dir_count += 1;
            } else {
                file_count += 1;
            }
        }

        let summary = if dir_count > 0 && file_count > 0 {
            format!(
                "{}, {}",
                entry::pluralize(dir_count, "folder", "folders"),
                entry::pluralize(file_count, "file", "files")
            )
        } else if dir_count > 0 {
            entry::pluralize(dir_count, "folder", "folders")
        } else if file_count > 0 {
            entry::pluralize(file_count, "file", "files")
        } else {
            "Empty folder".to_string()
        };

        let (free, total) = entry::disk_space(self.navigator.current());
        if total > 0 {
            format!(
                "{}  ({} free of {})",
                summary,
                entry::humanize_size(free),
                entry::humanize_size(total)
            )
        } else {
            summary
        }
    }
}

fn format_row(entry: &FileEntry, date_format: &str) -> String {
    let suffix = if entry.is_dir() {
        "/"
    } else if entry.is_symlink {
        "@"
    } else {
        ""
    };
    let name = format!("{}{}", entry.name, suffix);

    let size = if entry.is_dir() {
        "-".to_string()
    } else {
        entry::humanize_size(entry.size)
    };

    format!(
        "  {:<44} {:>10}  {}",
        name,
        size,
        entry::format_date(entry.modified, date_format)
    )
}

fn print_help() {
    println!(
        "\
navigation:
  cd PATH          enter a directory (bare `cd` goes home)
  back, forward    walk the history (aliases: b, f)
  up, ..           enter the parent directory
  home, ~          jump to the home directory
  root, /          jump to the filesystem root
listing:
  ls               show the current listing again
  find TEXT        narrow the listing by substring
  refresh          re-read the current directory
  hidden           toggle hidden entries
files:
  open NAME        enter a directory or launch a file
  open-with APP NAME
  rm NAME          delete (directories recursively)
  rename FROM TO
session:
  help, quit"
    );
}
