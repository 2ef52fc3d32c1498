//! Progress reporting for the renamer

use std::io;
use std::path::{Path, PathBuf};

use termcolor::Color;

use super::console::Console;

/// Something the renamer did, or would do in a dry run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameEvent {
    DirectoryRenamed { from: PathBuf, to: PathBuf },
    FileRenamed { from: PathBuf, to: PathBuf },
    ContentUpdated { path: PathBuf },
    /// An occurrence whose casing matched no known convention was replaced
    /// by the new name as written.
    UnrecognizedCase {
        path: PathBuf,
        matched: String,
        replacement: String,
    },
    /// An entry whose name is not valid UTF-8 seems to contain the old name
    /// and was left as it is.
    NameNotUtf8 { path: PathBuf },
}

/// Receiver of rename progress.
pub trait Reporter {
    fn report(&mut self, event: RenameEvent) -> io::Result<()>;
}

/// Prints each event as one console line. Warnings go to stderr.
pub struct ConsoleReporter {
    console: Console,
    dry_run: bool,
    base: Option<PathBuf>,
}

impl ConsoleReporter {
    pub fn new(use_color: bool, dry_run: bool) -> Self {
        Self {
            console: Console::new(use_color),
            dry_run,
            base: None,
        }
    }

    /// Show paths relative to `base`.
    pub fn with_base(mut self, base: &Path) -> Self {
        self.base = Some(base.to_path_buf());
        self
    }

    fn display(&self, path: &Path) -> String {
        self.base
            .as_deref()
            .and_then(|base| path.strip_prefix(base).ok())
            .unwrap_or(path)
            .display()
            .to_string()
    }

    fn label(&self, done: &'static str, planned: &'static str) -> &'static str {
        if self.dry_run { planned } else { done }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, event: RenameEvent) -> io::Result<()> {
        match event {
            RenameEvent::DirectoryRenamed { from, to } => {
                let label = self.label("Renamed directory:", "Would rename directory:");
                let text = format!("{} -> {}", self.display(&from), self.display(&to));
                self.console.labelled(label, Color::Green, &text)
            }
            RenameEvent::FileRenamed { from, to } => {
                let label = self.label("Renamed file:", "Would rename file:");
                let text = format!("{} -> {}", self.display(&from), self.display(&to));
                self.console.labelled(label, Color::Green, &text)
            }
            RenameEvent::ContentUpdated { path } => {
                let label = self.label("Updated content:", "Would update content:");
                let text = self.display(&path);
                self.console.labelled(label, Color::Cyan, &text)
            }
            RenameEvent::UnrecognizedCase {
                path,
                matched,
                replacement,
            } => {
                let text = format!(
                    "'{}' in {} matches no known casing, replaced with '{}' as given",
                    matched,
                    self.display(&path),
                    replacement
                );
                self.console.warning(&text)
            }
            RenameEvent::NameNotUtf8 { path } => {
                let text = format!(
                    "{} has a name that is not valid UTF-8, not renamed",
                    self.display(&path)
                );
                self.console.warning(&text)
            }
        }
    }
}

/// Keeps events in memory, for tests and callers that print a summary.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    pub events: Vec<RenameEvent>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for MemoryReporter {
    fn report(&mut self, event: RenameEvent) -> io::Result<()> {
        self.events.push(event);
        Ok(())
    }
}
