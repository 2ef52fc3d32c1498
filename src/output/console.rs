//! Labelled console lines on stdout and stderr

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Writes `label: text` lines, colouring the label when enabled.
pub struct Console {
    stdout: StandardStream,
    stderr: StandardStream,
}

impl Console {
    pub fn new(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
            stderr: StandardStream::stderr(choice),
        }
    }

    /// Print a plain line to stdout.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.stdout, "{}", text)
    }

    /// Print `label text` to stdout with the label in `color`.
    pub fn labelled(&mut self, label: &str, color: Color, text: &str) -> io::Result<()> {
        write_labelled(&mut self.stdout, label, color, text)
    }

    /// Print `warning: text` to stderr.
    pub fn warning(&mut self, text: &str) -> io::Result<()> {
        write_labelled(&mut self.stderr, "warning:", Color::Yellow, text)
    }
}

fn write_labelled<W: WriteColor>(out: &mut W, label: &str, color: Color, text: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{}", label)?;
    out.reset()?;
    writeln!(out, " {}", text)
}
