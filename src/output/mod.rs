//! Console output
//!
//! - `ColorMode`: the `--color` choice shared by both binaries
//! - `Console`: coloured result and warning lines
//! - `Reporter`: progress events emitted while renaming

mod color;
mod console;
mod reporter;

pub use color::ColorMode;
pub use console::Console;
pub use reporter::{ConsoleReporter, MemoryReporter, RenameEvent, Reporter};
