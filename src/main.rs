//! CLI entry point for oxls

use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, ValueEnum};
use oxls::{DisplayMode, Lister, ListingConfig, terminal_width};
use termcolor::{ColorChoice, StandardStream};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "oxls")]
#[command(about = "List directory contents in columns, across, or long format")]
#[command(version)]
struct Args {
    /// Directories to list (default: current directory)
    paths: Vec<PathBuf>,

    /// Use long listing format
    #[arg(short = 'l')]
    long: bool,

    /// List entries across the line instead of down columns
    #[arg(short = 'x')]
    across: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Override the detected terminal width in columns
    #[arg(short = 'w', long = "width", value_name = "COLS")]
    width: Option<usize>,
}

/// Determine the display mode from `-l`/`-x`, last one on the command line
/// winning when both are given.
fn resolve_mode(args: &Args, matches: &ArgMatches) -> DisplayMode {
    match (args.long, args.across) {
        (false, false) => DisplayMode::Columns,
        (true, false) => DisplayMode::Long,
        (false, true) => DisplayMode::Across,
        (true, true) => {
            let long_index = matches.index_of("long");
            let across_index = matches.index_of("across");
            if long_index > across_index {
                DisplayMode::Long
            } else {
                DisplayMode::Across
            }
        }
    }
}

fn main() {
    let matches = Args::command().get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| {
        eprintln!("oxls: argument parsing error: {}", e);
        process::exit(2);
    });

    let config = ListingConfig {
        mode: resolve_mode(&args, &matches),
        // One width snapshot for the whole invocation.
        term_width: args.width.filter(|&w| w > 0).unwrap_or_else(terminal_width),
    };
    let lister = Lister::new(config);

    // TTY and environment detection already happened in should_use_color, so
    // the stream gets a hard yes or no.
    let choice = if should_use_color(args.color) {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    // Explicit path arguments get a header and a trailing blank line; the
    // implicit current directory does not.
    let explicit = !args.paths.is_empty();
    let paths = if explicit {
        args.paths.clone()
    } else {
        vec![PathBuf::from(".")]
    };

    let mut hard_error = false;
    for path in &paths {
        let result = write_header(&mut stdout, explicit, path).and_then(|_| {
            let report = lister.list(path, &mut stdout)?;
            if explicit {
                writeln!(stdout)?;
            }
            Ok(report)
        });
        match result {
            Ok(report) => {
                if report.entry_errors > 0 {
                    hard_error = true;
                }
            }
            Err(oxls::ListError::Io(e)) => {
                eprintln!("oxls: error writing output: {}", e);
                process::exit(1);
            }
            Err(e) => {
                // One unreadable directory does not stop the others.
                eprintln!("oxls: {}", e);
                hard_error = true;
            }
        }
    }

    if hard_error {
        process::exit(1);
    }
}

fn write_header(
    stdout: &mut StandardStream,
    explicit: bool,
    path: &std::path::Path,
) -> oxls::Result<()> {
    if explicit {
        writeln!(stdout, "Directory listing of {}:", path.display())?;
    }
    Ok(())
}
