//! Lineage CLI entry point.

use lineage_runtime::{DataSource, Repl, Session};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// Default backing file when `--file` is not given.
const DEFAULT_FILE: &str = "family_tree.dat";

/// CLI configuration parsed from arguments.
struct CliConfig {
    file: PathBuf,
    print_only: bool,
    show_help: bool,
    show_version: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_FILE),
            print_only: false,
            show_help: false,
            show_version: false,
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-p" | "--print" => config.print_only = true,
            "-f" | "--file" => {
                i += 1;
                if i >= args.len() {
                    return Err("--file requires a path".into());
                }
                config.file = PathBuf::from(&args[i]);
            }
            arg => {
                return Err(format!("unknown option: {arg}").into());
            }
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("lineage {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let session = Session::open(&config.file);
    if session.source() == DataSource::Seeded {
        eprintln!(
            "No usable data at '{}', starting from the default tree.",
            config.file.display()
        );
    }

    if config.print_only {
        print!("{}", session.tree().render(session.root()));
        return Ok(());
    }

    let mut repl = Repl::new(session)?;
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mLineage\x1b[0m - Family tree explorer

\x1b[1mUSAGE:\x1b[0m
    lineage [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -f, --file PATH    Backing file (default: {DEFAULT_FILE})
    -p, --print        Render the tree and exit (no menu)

\x1b[1mEXAMPLES:\x1b[0m
    lineage                      Open {DEFAULT_FILE}, start the menu
    lineage -f royals.dat        Use a different backing file
    lineage -p                   Print the tree and exit

\x1b[1mMENU:\x1b[0m
    1    Add a person (pick a parent by generation)
    2    Print the tree
    3    Save and quit
    4    Quit without saving
    5    Restore the default tree
    back / Ctrl+C    Return to the menu
    exit / Ctrl+D    Leave the program"
    );
}
