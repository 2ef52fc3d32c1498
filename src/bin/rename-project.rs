//! CLI entry point for rename-project

use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use treescribe::{
    ColorMode, Console, ConsoleReporter, RenameConfig, RenameSummary, rename_project, resolve_root,
};

#[derive(Parser, Debug)]
#[command(name = "rename-project")]
#[command(about = "Rename a project: every file name, folder name and file content")]
#[command(
    long_about = "Rename a project: every file name, folder name and file content.\n\n\
    Occurrences of OLD_NAME are matched case-insensitively and replaced by NEW_NAME \
    in the same casing: OLD_NAME -> NEW_NAME, old_name -> new_name, \
    OldName -> NewName. Other casings get NEW_NAME exactly as given, with a warning. \
    Hidden entries are skipped. Changes are made in place and cannot be undone by \
    this tool, so commit your work first."
)]
#[command(version)]
struct Args {
    /// NEW_NAME followed by OLD_NAME
    #[arg(value_name = "NEW_NAME OLD_NAME")]
    names: Vec<String>,

    /// Folder names to skip at every level (comma-separated)
    #[arg(long = "ignore", value_name = "FOLDERS", value_delimiter = ',')]
    ignore: Vec<String>,

    /// Project folder; defaults to the current directory
    #[arg(short = 'C', long = "dir", value_name = "DIR")]
    dir: Option<String>,

    /// Show what would change without touching any file
    #[arg(short = 'n', long = "dry-run")]
    dry_run: bool,

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

    let (new_name, old_name) = match args.names.as_slice() {
        [new_name, old_name] => (new_name.clone(), old_name.clone()),
        [] | [_] => {
            eprintln!("rename-project: both NEW_NAME and OLD_NAME are required. Use -h for help.");
            process::exit(1);
        }
        _ => {
            eprintln!("Unknown arguments. Use -h for help.");
            process::exit(1);
        }
    };

    let root = resolve_root(args.dir.as_deref()).unwrap_or_else(|e| {
        eprintln!("rename-project: {}", e);
        process::exit(1);
    });

    let config = RenameConfig {
        old_name,
        new_name,
        ignore: args
            .ignore
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect(),
        dry_run: args.dry_run,
    };

    let use_color = args.color.should_use_color();
    let mut console = Console::new(use_color);
    if !config.dry_run {
        if let Err(e) = console.line("Make sure your work is committed before renaming.") {
            eprintln!("rename-project: error writing output: {}", e);
            process::exit(1);
        }
    }

    let mut reporter = ConsoleReporter::new(use_color, config.dry_run).with_base(&root);
    let summary = rename_project(&root, &config, &mut reporter).unwrap_or_else(|e| {
        eprintln!("rename-project: {}", e);
        process::exit(1);
    });

    if let Err(e) = print_summary(&mut console, &config, summary) {
        eprintln!("rename-project: error writing output: {}", e);
        process::exit(1);
    }
}

fn print_summary(
    console: &mut Console,
    config: &RenameConfig,
    summary: RenameSummary,
) -> std::io::Result<()> {
    let counts = format!(
        "{} directories renamed, {} files renamed, {} files rewritten",
        summary.directories_renamed, summary.files_renamed, summary.files_rewritten
    );
    if config.dry_run {
        return console.line(&format!("Dry run: {} (nothing was changed)", counts));
    }
    console.line(&counts)?;
    console.line(&format!(
        "Project name changed from {} to {}",
        config.old_name, config.new_name
    ))
}
