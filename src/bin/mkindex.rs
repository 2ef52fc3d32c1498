//! CLI entry point for mkindex

use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use termcolor::Color;
use treescribe::{ColorMode, Console, generate_content, resolve_root, rollback_hint, write_index};

#[derive(Parser, Debug)]
#[command(name = "mkindex")]
#[command(about = "Write an index.md linking every file below a folder")]
#[command(
    long_about = "Write an index.md linking every file below a folder.\n\n\
    Every non-hidden subdirectory becomes a heading (deeper folders get deeper \
    headings) followed by one link per file. Markdown files are titled by their \
    first heading, other files by their name. Files directly in the folder itself \
    are not listed. Any existing index.md in the folder is overwritten."
)]
#[command(version)]
struct Args {
    /// Folder to index; defaults to the current directory.
    /// `~`, `.` and `..` are resolved.
    #[arg(value_name = "FOLDER")]
    paths: Vec<String>,

    /// Print the index to stdout instead of writing index.md
    #[arg(long = "stdout")]
    stdout: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::try_parse().unwrap_or_else(|e| match e.kind() {
        ErrorKind::UnknownArgument => {
            eprintln!("Unknown arguments. Use -h for help.");
            process::exit(1);
        }
        _ => e.exit(),
    });

    if args.paths.len() > 1 {
        eprintln!("Unknown arguments. Use -h for help.");
        process::exit(1);
    }

    let root = resolve_root(args.paths.first().map(String::as_str)).unwrap_or_else(|e| {
        eprintln!("mkindex: {}", e);
        process::exit(1);
    });

    if args.stdout {
        match generate_content(&root) {
            Ok(content) => print!("{}", content),
            Err(e) => {
                eprintln!("mkindex: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    let report = write_index(&root).unwrap_or_else(|e| {
        eprintln!("mkindex: {}", e);
        process::exit(1);
    });

    let mut console = Console::new(args.color.should_use_color());
    let written = format!(
        "{} ({} directories, {} files)",
        report.path.display(),
        report.directories,
        report.files
    );
    let result = console
        .labelled("Index written to", Color::Green, &written)
        .and_then(|_| console.labelled("To undo:", Color::Yellow, &rollback_hint(&report.path)));

    if let Err(e) = result {
        eprintln!("mkindex: error writing output: {}", e);
        process::exit(1);
    }
}
